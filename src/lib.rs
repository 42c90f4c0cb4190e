//! Feed pagination and merge engine for an image/video feed client.
//!
//! The engine combines freshly fetched server pages into an existing,
//! already-paginated, in-memory feed while preserving strict ordering,
//! eliminating duplicate entries, and tracking whether the known window
//! of the feed touches the true start or end of the underlying collection.
//!
//! Everything in this crate is pure and synchronous: a [`feed::Feed`] is an
//! immutable value, and every operation on it produces a new value. Network
//! fetching, persistence backends, and UI rendering belong to the embedding
//! application; this crate only consumes an already-fetched
//! [`feed::RawPage`] and hands back a merged snapshot.

pub mod feed;

pub use feed::{
    ContentType, Feed, FeedFilter, FeedItem, FeedSnapshot, FeedType, RawItem, RawPage,
    SnapshotError,
};
