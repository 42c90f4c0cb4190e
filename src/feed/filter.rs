use serde::{Deserialize, Serialize};

/// The kind of collection a feed paginates over.
///
/// Sortable types support incremental older/newer pagination by a monotonic
/// sort key. Non-sortable types are returned complete by the server on every
/// request, so there is no concept of an "earlier" page for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedType {
    /// Chronological stream of all uploads, ordered by upload id.
    New,
    /// Ranked stream of promoted uploads, ordered by promotion rank.
    Promoted,
    /// Premium-only chronological stream.
    Premium,
    /// Server-side random sample; arrives complete, unordered.
    Random,
    /// Moderation queue; arrives complete.
    Controls,
}

impl FeedType {
    /// Whether this collection supports incremental pagination with a
    /// stable sort key.
    pub fn sortable(self) -> bool {
        !matches!(self, FeedType::Random | FeedType::Controls)
    }
}

/// Identifies *what* collection is being paginated: a feed type plus any
/// tag or user constraint.
///
/// Immutable value; the wither methods return modified copies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeedFilter {
    pub feed_type: FeedType,
    pub tags: Option<String>,
    pub user: Option<String>,
}

impl FeedFilter {
    /// An unconstrained filter over the given feed type.
    pub fn new(feed_type: FeedType) -> Self {
        Self {
            feed_type,
            tags: None,
            user: None,
        }
    }

    /// Copy of this filter constrained to a tag query.
    pub fn with_tags(&self, tags: impl Into<String>) -> Self {
        Self {
            tags: Some(tags.into()),
            ..self.clone()
        }
    }

    /// Copy of this filter constrained to one user's uploads.
    pub fn with_user(&self, user: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
            ..self.clone()
        }
    }

    /// True when no tag or user constraint is set.
    pub fn is_basic(&self) -> bool {
        self.tags.is_none() && self.user.is_none()
    }
}

// ============================================================================
// Tests
// ============================================================================
