use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::content_type::ContentType;
use super::feed::Feed;
use super::filter::FeedFilter;
use super::item::FeedItem;

/// Errors raised by the snapshot codec.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to encode feed snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode feed snapshot: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Serializable form of a feed, for persistence or cross-process transfer
/// of a (typically windowed) snapshot.
///
/// `is_at_end` is deliberately absent: a restored feed always reports
/// `is_at_end = false`, which forces the next merge to re-probe the end
/// boundary instead of trusting stale state. The content-type set is stored
/// as its combined bitmask.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedSnapshot {
    pub filter: FeedFilter,
    /// Combined [`ContentType`] bits.
    pub content_types: u32,
    pub is_at_start: bool,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
    pub items: Vec<FeedItem>,
}

impl FeedSnapshot {
    /// Captures the persistable parts of a feed.
    pub fn capture(feed: &Feed) -> Self {
        Self {
            filter: feed.filter.clone(),
            content_types: ContentType::combine(&feed.content_types),
            is_at_start: feed.is_at_start,
            created: feed.created,
            items: feed.items.clone(),
        }
    }

    /// Restores the feed. `is_at_end` always comes back false.
    pub fn into_feed(self) -> Feed {
        Feed {
            filter: self.filter,
            content_types: ContentType::decompose(self.content_types),
            items: self.items,
            is_at_start: self.is_at_start,
            is_at_end: false,
            created: self.created,
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(SnapshotError::Encode)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(SnapshotError::Decode)
    }
}

impl From<&Feed> for FeedSnapshot {
    fn from(feed: &Feed) -> Self {
        Self::capture(feed)
    }
}

// ============================================================================
// Tests
// ============================================================================
