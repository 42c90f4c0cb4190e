use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::filter::FeedType;

/// A single feed entry.
///
/// Carries the stable upload identifier, the promotion rank, and the media
/// and vote attributes the UI renders. The merge algorithm only ever looks
/// at [`FeedItem::sort_key`] and [`FeedItem::id`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    /// Stable upload identifier, unique across the whole collection.
    pub id: i64,
    /// Rank in the promoted stream; 0 when the item was never promoted.
    pub promoted: i64,
    pub image: String,
    pub thumbnail: String,
    pub user: String,
    pub up: i32,
    pub down: i32,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
    /// Combined content-type bits of this upload.
    pub flags: u32,
    pub width: u32,
    pub height: u32,
    pub audio: bool,
}

impl FeedItem {
    /// The key this item orders by in the given feed type context.
    ///
    /// The same item occupies different relative positions depending on the
    /// collection it is viewed through: the promoted stream orders by
    /// promotion rank, every other sortable stream by upload id.
    pub fn sort_key(&self, feed_type: FeedType) -> i64 {
        match feed_type {
            FeedType::Promoted => self.promoted,
            _ => self.id,
        }
    }
}

/// Wire-shaped item record as produced by the page fetcher.
///
/// Field names follow the upstream API. Everything except the identity and
/// media path fields is optional on the wire and defaults to zero.
#[derive(Debug, Clone, Deserialize)]
pub struct RawItem {
    pub id: i64,
    #[serde(default)]
    pub promoted: i64,
    pub image: String,
    pub thumb: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub up: i32,
    #[serde(default)]
    pub down: i32,
    /// Upload time as epoch seconds.
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub flags: u32,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub audio: bool,
}

impl From<RawItem> for FeedItem {
    fn from(raw: RawItem) -> Self {
        FeedItem {
            id: raw.id,
            promoted: raw.promoted,
            image: raw.image,
            thumbnail: raw.thumb,
            user: raw.user,
            up: raw.up,
            down: raw.down,
            created: DateTime::from_timestamp(raw.created, 0).unwrap_or(DateTime::UNIX_EPOCH),
            flags: raw.flags,
            width: raw.width,
            height: raw.height,
            audio: raw.audio,
        }
    }
}

/// One freshly fetched page: raw items plus the data source's boundary
/// report for this page only.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPage {
    #[serde(default)]
    pub items: Vec<RawItem>,
    #[serde(default, rename = "atStart")]
    pub at_start: bool,
    #[serde(default, rename = "atEnd")]
    pub at_end: bool,
}

// ============================================================================
// Tests
// ============================================================================
