//! Feed model and pagination/merge logic.
//!
//! This module provides the core functionality for working with paginated
//! feeds:
//!
//! - **Merging**: Combine a freshly fetched page into an existing feed while
//!   keeping the feed ordered, duplicate-free, and its boundary flags
//!   monotonic
//! - **Windowing**: Trim a feed to a bounded range around a pivot item for
//!   persistence or cross-process transfer
//! - **Snapshots**: Serialize and restore the persistable parts of a feed
//!
//! # Architecture
//!
//! The module is organized into five submodules:
//!
//! - [`content_type`] - Content visibility flags and their bitmask encoding
//! - [`filter`] - Feed types (sortable vs. not) and the filter identifying a
//!   collection
//! - [`item`] - Feed items, their feed-type-dependent sort keys, and the raw
//!   page records produced by a fetcher
//! - [`feed`] - The `Feed` aggregate and the merge/window operations
//! - [`snapshot`] - The persistence/transfer codec
//!
//! # Example
//!
//! ```ignore
//! use backscroll::{Feed, FeedFilter, FeedType};
//!
//! let feed = Feed::new(FeedFilter::new(FeedType::New), content_types);
//!
//! // A page arrives from the fetcher; merging never mutates `feed`.
//! let merged = feed.merge_with(page);
//! let trimmed = merged.window_around(pivot);
//! ```

mod content_type;
mod feed;
mod filter;
mod item;
mod snapshot;

pub use content_type::ContentType;
pub use feed::Feed;
pub use filter::{FeedFilter, FeedType};
pub use item::{FeedItem, RawItem, RawPage};
pub use snapshot::{FeedSnapshot, SnapshotError};
