//! Property tests for grid resolution and reconciliation

use aero_desktop::layout::{placement_at, reconcile, total_pages};
use aero_desktop::{
    GridGeometry, ItemDraft, ItemStore, LayoutConfig, LayoutMode, Size, MAX_SCALE, MIN_SCALE,
};
use proptest::prelude::*;

fn mode() -> impl Strategy<Value = LayoutMode> {
    prop_oneof![Just(LayoutMode::Compact), Just(LayoutMode::Card), Just(LayoutMode::Gallery)]
}

fn geometry() -> impl Strategy<Value = GridGeometry> {
    (1.0f32..3000.0, 1.0f32..2000.0, mode(), MIN_SCALE..MAX_SCALE)
        .prop_map(|(w, h, mode, scale)| GridGeometry::resolve(Size::new(w, h), mode, scale))
}

fn store_with(count: usize) -> ItemStore {
    let mut store = ItemStore::new();
    for _ in 0..count {
        store.create(ItemDraft::default());
    }
    store
}

proptest! {
    #[test]
    fn total_pages_matches_ceiling(count in 0usize..10_000, per_page in 1usize..500) {
        let expected = count.div_ceil(per_page).max(1) as u32;
        prop_assert_eq!(total_pages(count, per_page), expected);
    }

    #[test]
    fn resolved_grid_is_never_empty(
        w in -100.0f32..5000.0,
        h in -100.0f32..5000.0,
        mode in mode(),
        scale in 0.1f32..5.0,
    ) {
        let geometry = GridGeometry::resolve(Size::new(w, h), mode, scale);
        prop_assert!(geometry.cols >= 1 && geometry.rows >= 1);
        prop_assert_eq!(geometry.items_per_page, geometry.cols * geometry.rows);
        prop_assert!(geometry.cell_w >= 1.0 && geometry.cell_h >= 1.0);
    }

    #[test]
    fn pages_follow_store_order(geometry in geometry(), count in 0usize..300) {
        let store = store_with(count);
        let reconciled = reconcile(store.items(), &geometry);

        let mut previous_page = 0;
        for (index, item) in reconciled.items.iter().enumerate() {
            let placement = placement_at(index, &geometry);
            prop_assert!(item.page >= previous_page);
            prop_assert_eq!(item.page as usize, index / geometry.items_per_page);
            let slot = placement.row * geometry.cols + placement.col;
            prop_assert_eq!(slot, index % geometry.items_per_page);
            previous_page = item.page;
        }
        prop_assert_eq!(reconciled.total_pages, total_pages(count, geometry.items_per_page));
    }

    #[test]
    fn no_two_items_share_a_cell(geometry in geometry(), count in 0usize..200) {
        let store = store_with(count);
        let reconciled = reconcile(store.items(), &geometry);

        for (i, a) in reconciled.items.iter().enumerate() {
            for b in reconciled.items.iter().skip(i + 1).filter(|b| b.page == a.page) {
                let apart = (a.x - b.x).abs() >= 0.5 || (a.y - b.y).abs() >= 0.5;
                prop_assert!(apart, "{} and {} overlap on page {}", a.id, b.id, a.page);
            }
        }
    }

    #[test]
    fn reconcile_is_idempotent(geometry in geometry(), count in 0usize..200) {
        let store = store_with(count);
        let once = reconcile(store.items(), &geometry);
        let twice = reconcile(&once.items, &geometry);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn scale_is_clamped(scale in -10.0f32..10.0) {
        let config = LayoutConfig::new(LayoutMode::Compact, scale);
        prop_assert!(config.scale() >= MIN_SCALE && config.scale() <= MAX_SCALE);
        if (MIN_SCALE..=MAX_SCALE).contains(&scale) {
            prop_assert!((config.scale() - scale).abs() < f32::EPSILON);
        } else if scale < MIN_SCALE {
            prop_assert!((config.scale() - MIN_SCALE).abs() < f32::EPSILON);
        } else {
            prop_assert!((config.scale() - MAX_SCALE).abs() < f32::EPSILON);
        }
    }
}
