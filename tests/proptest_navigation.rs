// SPDX-License-Identifier: MPL-2.0
//! Property-based invariant tests for gallery navigation.
//!
//! Verifies:
//! 1. The current index stays in `[0, len)` for any operation sequence
//! 2. `next` applied `len` times returns to the start; likewise `previous`
//! 3. `next` then `previous` (and vice versa) restores the index
//! 4. Navigation always hides the description
//! 5. Toggling twice restores visibility
//! 6. The projection offers a toggle exactly for items with a description

use car_gallery::application::projection::ProjectionOptions;
use car_gallery::application::GalleryStore;
use car_gallery::domain::gallery::{Collection, ImageRef, Item, ItemId};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Next,
    Previous,
    Toggle,
}

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Next), Just(Op::Previous), Just(Op::Toggle)]
}

/// Collections of 1..=12 items; each flag says whether the item has a description.
fn arb_collection() -> impl Strategy<Value = Collection> {
    prop::collection::vec(any::<bool>(), 1..=12).prop_map(|flags| {
        let items = flags
            .into_iter()
            .enumerate()
            .map(|(i, described)| {
                let id = u32::try_from(i).unwrap_or(u32::MAX);
                let item = Item::new(
                    ItemId::new(id),
                    ImageRef::new(format!("{i}.svg")),
                    format!("Car {i}"),
                    "Maker",
                    "2024",
                );
                if described {
                    item.with_description(format!("About car {i}"))
                } else {
                    item
                }
            })
            .collect();
        Collection::new(items).unwrap()
    })
}

fn apply(store: &mut GalleryStore, op: Op) {
    match op {
        Op::Next => store.next(),
        Op::Previous => store.previous(),
        Op::Toggle => store.toggle_description(),
    }
}

/// A store moved to an arbitrary starting state.
fn arb_store() -> impl Strategy<Value = GalleryStore> {
    (arb_collection(), prop::collection::vec(arb_op(), 0..32)).prop_map(|(collection, ops)| {
        let mut store = GalleryStore::new(collection);
        for op in ops {
            apply(&mut store, op);
        }
        store
    })
}

proptest! {
    #[test]
    fn index_stays_in_range(
        collection in arb_collection(),
        ops in prop::collection::vec(arb_op(), 0..64),
    ) {
        let len = collection.len();
        let mut store = GalleryStore::new(collection);
        for op in ops {
            apply(&mut store, op);
            prop_assert!(store.view_state().current_index() < len);
        }
    }

    #[test]
    fn full_cycle_returns_to_start(mut store in arb_store()) {
        let start = store.view_state().current_index();

        for _ in 0..store.len() {
            store.next();
        }
        prop_assert_eq!(store.view_state().current_index(), start);

        for _ in 0..store.len() {
            store.previous();
        }
        prop_assert_eq!(store.view_state().current_index(), start);
    }

    #[test]
    fn next_and_previous_are_inverse(mut store in arb_store()) {
        let start = store.view_state().current_index();

        store.next();
        store.previous();
        prop_assert_eq!(store.view_state().current_index(), start);

        store.previous();
        store.next();
        prop_assert_eq!(store.view_state().current_index(), start);
    }

    #[test]
    fn navigation_hides_description(mut store in arb_store(), forward in any::<bool>()) {
        if !store.view_state().description_visible() {
            store.toggle_description();
        }
        if forward {
            store.next();
        } else {
            store.previous();
        }
        prop_assert!(!store.view_state().description_visible());
    }

    #[test]
    fn double_toggle_restores_visibility(mut store in arb_store()) {
        let before = store.view_state();
        store.toggle_description();
        prop_assert_ne!(store.view_state().description_visible(), before.description_visible());
        store.toggle_description();
        prop_assert_eq!(store.view_state(), before);
    }

    #[test]
    fn toggle_offered_only_for_described_items(store in arb_store()) {
        let view = store.project(&ProjectionOptions::default());
        prop_assert_eq!(
            view.has_description_toggle(),
            store.current_item().has_description()
        );
    }
}
