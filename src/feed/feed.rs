use std::collections::{BTreeSet, HashSet};
use std::fmt;

use chrono::{DateTime, Utc};

use super::content_type::ContentType;
use super::filter::{FeedFilter, FeedType};
use super::item::{FeedItem, RawPage};

/// Number of items kept on each side of the pivot by [`Feed::window_around`].
const WINDOW_RADIUS: usize = 64;

/// An immutable, ordered, deduplicated snapshot of one pagination
/// collection.
///
/// Invariants:
///
/// - no two items share an identifier;
/// - for sortable feed types, `items` is sorted descending by the feed-type
///   sort key; non-sortable types keep server order;
/// - `is_at_start`/`is_at_end` only ever transition false→true across a
///   lineage of merges.
///
/// Every operation returns a new `Feed`; nothing mutates in place. Callers
/// that merge concurrently against the same lineage must serialize those
/// merges themselves: [`Feed::merge_with`] is a pure function, not an
/// atomic update.
#[derive(Debug, Clone, PartialEq)]
pub struct Feed {
    pub filter: FeedFilter,
    pub content_types: BTreeSet<ContentType>,
    pub items: Vec<FeedItem>,
    pub is_at_start: bool,
    pub is_at_end: bool,
    /// Snapshot creation time, informational only.
    pub created: DateTime<Utc>,
}

impl Feed {
    /// An empty feed over the given collection, with both boundary flags
    /// unset.
    pub fn new(filter: FeedFilter, content_types: BTreeSet<ContentType>) -> Self {
        Self {
            filter,
            content_types,
            items: Vec::new(),
            is_at_start: false,
            is_at_end: false,
            created: Utc::now(),
        }
    }

    pub fn feed_type(&self) -> FeedType {
        self.filter.feed_type
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FeedItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FeedItem> {
        self.items.iter()
    }

    /// The item with the smallest sort key. Callers use its id as the
    /// cursor when fetching the next older page.
    pub fn oldest(&self) -> Option<&FeedItem> {
        let feed_type = self.feed_type();
        self.items.iter().min_by_key(|item| item.sort_key(feed_type))
    }

    /// The item with the largest sort key. Callers use its id as the
    /// cursor when fetching newer items.
    pub fn newest(&self) -> Option<&FeedItem> {
        let feed_type = self.feed_type();
        self.items.iter().max_by_key(|item| item.sort_key(feed_type))
    }

    /// Position of the first item with the given identifier.
    ///
    /// Linear scan; feeds handed to the UI are bounded by
    /// [`Feed::window_around`], so this stays cheap.
    pub fn index_by_id(&self, item_id: i64) -> Option<usize> {
        self.items.iter().position(|item| item.id == item_id)
    }

    /// Merges a freshly fetched page into this feed and returns the new,
    /// immutable merged feed.
    ///
    /// Boundary flags combine monotonically: each output flag is the OR of
    /// the corresponding input flags. Non-sortable feed types are always
    /// considered at-start, since the server returns those collections
    /// complete on every call.
    pub fn merge_with(&self, page: RawPage) -> Feed {
        let is_at_end = self.is_at_end || page.at_end;
        let is_at_start = self.is_at_start || page.at_start || !self.feed_type().sortable();

        let new_items: Vec<FeedItem> = page.items.into_iter().map(FeedItem::from).collect();

        tracing::debug!(
            existing = self.items.len(),
            page = new_items.len(),
            feed_type = ?self.feed_type(),
            at_start = is_at_start,
            at_end = is_at_end,
            "merging feed page"
        );

        Feed {
            filter: self.filter.clone(),
            content_types: self.content_types.clone(),
            items: self.merge_items(new_items),
            is_at_start,
            is_at_end,
            created: self.created,
        }
    }

    /// Combines the existing items with freshly fetched ones and drops
    /// duplicate identifiers, keeping the first occurrence.
    ///
    /// For sortable feed types both sides are merged in descending sort-key
    /// order, with ties routed to the new side, so the freshly fetched copy
    /// of a duplicated item is the one that survives dedup. Non-sortable
    /// types concatenate existing-then-new instead, which makes the
    /// previously cached copy win. That asymmetry is observable behavior
    /// and must stay.
    fn merge_items(&self, new_items: Vec<FeedItem>) -> Vec<FeedItem> {
        let feed_type = self.feed_type();
        let mut target = Vec::with_capacity(self.items.len() + new_items.len());

        if feed_type.sortable() {
            let descending =
                |a: &FeedItem, b: &FeedItem| b.sort_key(feed_type).cmp(&a.sort_key(feed_type));

            let mut old_sorted = self.items.clone();
            old_sorted.sort_by(descending);
            let mut new_sorted = new_items;
            new_sorted.sort_by(descending);

            // Two-cursor merge over the sorted sides, largest key first.
            let (mut o, mut n) = (0, 0);
            while o < old_sorted.len() && n < new_sorted.len() {
                let old_key = old_sorted[o].sort_key(feed_type);
                let new_key = new_sorted[n].sort_key(feed_type);
                if old_key > new_key {
                    target.push(old_sorted[o].clone());
                    o += 1;
                } else {
                    // new key greater or equal: the new side goes first
                    target.push(new_sorted[n].clone());
                    n += 1;
                }
            }

            // One side is exhausted; append whatever the other still holds.
            target.extend_from_slice(&new_sorted[n..]);
            target.extend_from_slice(&old_sorted[o..]);
        } else {
            target.extend_from_slice(&self.items);
            target.extend(new_items);
        }

        dedup_by_id(target)
    }

    /// Returns a copy of this feed trimmed to a bounded window around the
    /// item at `pivot`.
    ///
    /// The window spans `pivot ± 64`, clamped into the valid index range; a
    /// pivot past the end yields an empty feed rather than an error. The
    /// result is what gets persisted or handed across a process boundary:
    /// `is_at_end` is forced to false so a resumed session re-probes the
    /// boundary, and `is_at_start` survives only when the window still
    /// begins at index 0.
    pub fn window_around(&self, pivot: usize) -> Feed {
        let len = self.items.len();
        let start = pivot.saturating_sub(WINDOW_RADIUS).min(len);
        let stop = pivot.saturating_add(WINDOW_RADIUS).min(len);

        tracing::trace!(pivot, start, stop, total = len, "trimming feed window");

        Feed {
            filter: self.filter.clone(),
            content_types: self.content_types.clone(),
            items: self.items[start..stop].to_vec(),
            is_at_start: self.is_at_start && start == 0,
            is_at_end: false,
            created: self.created,
        }
    }
}

impl<'a> IntoIterator for &'a Feed {
    type Item = &'a FeedItem;
    type IntoIter = std::slice::Iter<'a, FeedItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let newest = self.newest().map(|item| item.id);
        let oldest = self.oldest().map(|item| item.id);
        write!(
            f,
            "Feed[newest={newest:?}, oldest={oldest:?}, size={}]",
            self.len()
        )
    }
}

/// Keeps the first occurrence of every identifier, dropping later ones.
fn dedup_by_id(items: Vec<FeedItem>) -> Vec<FeedItem> {
    let mut seen = HashSet::with_capacity(items.len());
    items.into_iter().filter(|item| seen.insert(item.id)).collect()
}

// ============================================================================
// Tests
// ============================================================================
