//! Property-based tests for the merge invariants.
//!
//! Feeds are built the only way the public API allows: by folding arbitrary
//! raw pages into an empty feed. Items are generated as `(id, promoted)`
//! pairs so that upload ids and promotion ranks disagree, which is what
//! makes the promoted feed's sort-key indirection observable.

use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;

use backscroll::{Feed, FeedFilter, FeedType, RawItem, RawPage};

fn raw_item((id, promoted): (i64, i64)) -> RawItem {
    RawItem {
        id,
        promoted,
        image: format!("{id}.jpg"),
        thumb: format!("{id}-t.jpg"),
        user: "tester".to_string(),
        up: 0,
        down: 0,
        created: 1_700_000_000,
        flags: 1,
        width: 0,
        height: 0,
        audio: false,
    }
}

fn page(items: &[(i64, i64)], at_start: bool, at_end: bool) -> RawPage {
    RawPage {
        items: items.iter().copied().map(raw_item).collect(),
        at_start,
        at_end,
    }
}

fn empty_feed(feed_type: FeedType) -> Feed {
    Feed::new(FeedFilter::new(feed_type), BTreeSet::new())
}

fn arb_feed_type() -> impl Strategy<Value = FeedType> {
    prop_oneof![
        Just(FeedType::New),
        Just(FeedType::Promoted),
        Just(FeedType::Premium),
        Just(FeedType::Random),
        Just(FeedType::Controls),
    ]
}

// Pages may repeat ids across and within themselves; promotion ranks
// collide often, exercising the tie-break path.
fn arb_pages() -> impl Strategy<Value = Vec<Vec<(i64, i64)>>> {
    prop::collection::vec(
        prop::collection::vec((0i64..200, 0i64..40), 0..30),
        1..6,
    )
}

proptest! {
    #[test]
    fn merged_feed_never_contains_duplicate_ids(
        feed_type in arb_feed_type(),
        pages in arb_pages(),
    ) {
        let mut feed = empty_feed(feed_type);
        for items in &pages {
            feed = feed.merge_with(page(items, false, false));

            let mut seen = HashSet::new();
            for item in &feed {
                prop_assert!(seen.insert(item.id), "duplicate id {}", item.id);
            }
        }
    }

    #[test]
    fn sortable_feed_stays_descending_by_sort_key(
        feed_type in arb_feed_type(),
        pages in arb_pages(),
    ) {
        prop_assume!(feed_type.sortable());

        let mut feed = empty_feed(feed_type);
        for items in &pages {
            feed = feed.merge_with(page(items, false, false));

            prop_assert!(feed
                .iter()
                .zip(feed.iter().skip(1))
                .all(|(a, b)| a.sort_key(feed_type) >= b.sort_key(feed_type)));
        }
    }

    #[test]
    fn boundary_flags_follow_or_and_never_reset(
        feed_type in arb_feed_type(),
        pages in prop::collection::vec(
            (prop::collection::vec((0i64..200, 0i64..40), 0..10), any::<bool>(), any::<bool>()),
            1..6,
        ),
    ) {
        let mut feed = empty_feed(feed_type);
        let (mut was_start, mut was_end) = (false, false);

        for (items, at_start, at_end) in &pages {
            feed = feed.merge_with(page(items, *at_start, *at_end));

            prop_assert_eq!(
                feed.is_at_start,
                was_start || *at_start || !feed_type.sortable()
            );
            prop_assert_eq!(feed.is_at_end, was_end || *at_end);

            was_start = feed.is_at_start;
            was_end = feed.is_at_end;
        }
    }

    #[test]
    fn merging_the_same_page_twice_is_idempotent(
        feed_type in arb_feed_type(),
        existing in prop::collection::vec((0i64..200, 0i64..40), 0..30),
        repeated in prop::collection::vec((0i64..200, 0i64..40), 0..30),
    ) {
        let feed = empty_feed(feed_type).merge_with(page(&existing, false, false));

        let once = feed.merge_with(page(&repeated, false, false));
        let twice = once.merge_with(page(&repeated, false, false));

        prop_assert_eq!(&once.items, &twice.items);
    }

    #[test]
    fn empty_page_merge_leaves_items_and_set_flags_alone(
        feed_type in arb_feed_type(),
        items in prop::collection::vec((0i64..200, 0i64..40), 0..50),
    ) {
        let feed = empty_feed(feed_type).merge_with(page(&items, false, false));
        let merged = feed.merge_with(RawPage::default());

        prop_assert_eq!(&merged.items, &feed.items);
        // Flags may only become more true, never less.
        prop_assert!(merged.is_at_start || !feed.is_at_start);
        prop_assert!(merged.is_at_end || !feed.is_at_end);
    }

    #[test]
    fn window_around_is_total_and_bounded(
        feed_type in arb_feed_type(),
        items in prop::collection::vec((0i64..500, 0i64..40), 0..200),
        pivot in 0usize..1000,
        at_start in any::<bool>(),
    ) {
        let feed = empty_feed(feed_type).merge_with(page(&items, at_start, true));
        let window = feed.window_around(pivot);

        prop_assert!(window.len() <= 128);
        prop_assert!(window.len() <= feed.len());
        prop_assert!(!window.is_at_end);

        // The window is a contiguous run of the original items.
        if !window.is_empty() {
            let start = feed.index_by_id(window.get(0).unwrap().id).unwrap();
            prop_assert_eq!(
                &feed.items[start..start + window.len()],
                &window.items[..]
            );
            // Start flag survives only when the head survived.
            prop_assert_eq!(window.is_at_start, feed.is_at_start && start == 0);
        }
    }
}
