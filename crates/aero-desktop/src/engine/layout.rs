//! Layout mode, scale, viewport and grid reconciliation

use log::{debug, info, warn};

use super::DesktopEngine;
use crate::config::{LayoutConfig, ScalePreset, WHEEL_SCALE_STEP};
use crate::item::ItemStore;
use crate::layout::{self, GridGeometry, LayoutMode, Reconciled};
use crate::pagination::Pagination;

impl DesktopEngine {
    /// Re-flow every item into the grid for the current mode, scale and viewport
    ///
    /// Publishes the page count, clamps the current page and persists. The
    /// item under an active drag keeps its anchor and takes only its page
    /// from the grid.
    pub fn reconcile(&mut self) {
        let geometry =
            GridGeometry::resolve(self.viewport.size(), self.config.mode, self.config.scale());
        let pinned = self
            .drag
            .dragged_item()
            .and_then(|id| self.store.get(id))
            .map(|item| (item.id, item.position()));

        let Reconciled { mut items, total_pages } =
            layout::reconcile(self.store.items(), &geometry);

        if let Some((id, anchor)) = pinned {
            if let Some(item) = items.iter_mut().find(|item| item.id == id) {
                item.set_position(anchor);
            }
            self.drag.rebase_origin(anchor);
        }

        self.store.replace_all(items);
        self.geometry = geometry;
        self.pagination.publish_total(total_pages);

        debug!(
            "reconciled {} items into {}x{} grid, {} pages",
            self.store.len(),
            geometry.cols,
            geometry.rows,
            total_pages
        );

        self.persist_items();
    }

    /// Switch layout mode
    pub fn set_mode(&mut self, mode: LayoutMode) {
        self.config.mode = mode;
        if let Err(err) = self.persistence.save_mode(mode) {
            warn!("failed to save layout mode: {err}");
        }
        info!("layout mode {mode}");
        self.reconcile();
    }

    /// Set the scale, clamped to the allowed range
    ///
    /// Returns the stored scale.
    pub fn set_scale(&mut self, scale: f32) -> f32 {
        if self.config.set_scale(scale) {
            if let Err(err) = self.persistence.save_scale(self.config.scale()) {
                warn!("failed to save scale: {err}");
            }
            self.reconcile();
        }
        self.config.scale()
    }

    /// Apply one of the fixed scale presets
    pub fn apply_scale_preset(&mut self, preset: ScalePreset) -> f32 {
        self.set_scale(preset.scale())
    }

    /// Ctrl+wheel zoom
    ///
    /// Wheel down shrinks, wheel up grows, one step per event. Returns false
    /// when the event is not a zoom gesture and should scroll normally.
    pub fn handle_wheel(&mut self, delta_y: f32, ctrl: bool) -> bool {
        if !ctrl || !delta_y.is_finite() || delta_y == 0.0 {
            return false;
        }
        let step = if delta_y > 0.0 { -WHEEL_SCALE_STEP } else { WHEEL_SCALE_STEP };
        self.set_scale(self.config.scale() + step);
        true
    }

    /// Viewport change notification
    ///
    /// Reconciles on every call, even when the size is unchanged.
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.viewport.resize(width, height) {
            debug!("viewport {}x{}", self.viewport.size().width, self.viewport.size().height);
        }
        self.reconcile();
    }

    /// Wipe storage and return to the factory desktop
    pub fn factory_reset(&mut self) {
        if let Err(err) = self.persistence.clear() {
            warn!("failed to clear storage: {err}");
        }
        self.drag.cancel();
        if !self.store.reset_to_defaults() {
            // storage is already wiped, so a fresh counter cannot collide
            warn!("id space exhausted, restarting the id counter");
            self.store = ItemStore::with_defaults();
        }
        self.config = LayoutConfig::default();
        self.pagination = Pagination::default();
        info!("factory reset");
        self.reconcile();
        self.persist_config();
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ScalePreset, MAX_SCALE, MIN_SCALE};
    use crate::engine::DesktopEngine;
    use crate::item::ItemDraft;
    use crate::layout::LayoutMode;
    use crate::persistence::MemoryStorage;

    fn engine() -> DesktopEngine {
        DesktopEngine::boot(MemoryStorage::new(), 1920.0, 1080.0)
    }

    #[test]
    fn test_wheel_steps() {
        let mut engine = engine();
        assert!(engine.handle_wheel(120.0, true));
        assert!((engine.config().scale() - 0.95).abs() < 0.001);
        assert!(engine.handle_wheel(-120.0, true));
        assert!(engine.handle_wheel(-120.0, true));
        assert!((engine.config().scale() - 1.05).abs() < 0.001);
    }

    #[test]
    fn test_wheel_without_ctrl_scrolls() {
        let mut engine = engine();
        assert!(!engine.handle_wheel(120.0, false));
        assert!((engine.config().scale() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_scale_clamped() {
        let mut engine = engine();
        assert!((engine.set_scale(10.0) - MAX_SCALE).abs() < 0.001);
        assert!((engine.set_scale(0.0) - MIN_SCALE).abs() < 0.001);
        assert!((engine.set_scale(f32::NAN) - MIN_SCALE).abs() < 0.001);
    }

    #[test]
    fn test_scale_preset() {
        let mut engine = engine();
        engine.apply_scale_preset(ScalePreset::Big);
        assert!((engine.config().scale() - 1.4).abs() < 0.001);
        assert_eq!(ScalePreset::nearest(engine.config().scale()), ScalePreset::Big);
    }

    #[test]
    fn test_scale_change_reflows() {
        let mut engine = engine();
        while engine.items().len() < 120 {
            engine.create_item(ItemDraft::default());
        }
        // 17x7 grid at 1920x1080
        assert_eq!(engine.geometry().items_per_page, 119);
        assert_eq!(engine.pagination().total(), 2);

        // one wheel step down shrinks cells to an 18x7 grid
        assert!(engine.handle_wheel(120.0, true));
        assert_eq!(engine.geometry().items_per_page, 126);
        assert_eq!(engine.pagination().total(), 1);
        assert_eq!(engine.items()[119].page, 0);
        let origin = engine.geometry().cell_origin(17, 0);
        assert!((engine.items()[17].x - origin.x).abs() < 0.001);
        assert!((engine.items()[17].y - origin.y).abs() < 0.001);

        // 5x2 grid at the largest scale
        engine.set_scale(MAX_SCALE);
        assert_eq!(engine.geometry().items_per_page, 10);
        assert_eq!(engine.pagination().total(), 12);
        let last = &engine.items()[119];
        let origin = engine.geometry().cell_origin(4, 1);
        assert_eq!(last.page, 11);
        assert!((last.x - origin.x).abs() < 0.001);
        assert!((last.y - origin.y).abs() < 0.001);
    }

    #[test]
    fn test_mode_change_reflows() {
        let mut engine = engine();
        let before = *engine.geometry();
        engine.set_mode(LayoutMode::Gallery);
        assert_ne!(engine.geometry().items_per_page, before.items_per_page);
        let origin = engine.geometry().cell_origin(0, 0);
        assert!((engine.items()[0].x - origin.x).abs() < 0.001);
    }

    #[test]
    fn test_resize_clamps_current_page() {
        let mut engine = engine();
        for _ in 0..20 {
            engine.create_item(ItemDraft::default());
        }
        // 23 items; tiny viewport gives one item per page
        engine.resize(200.0, 200.0);
        assert_eq!(engine.pagination().total(), 23);
        engine.go_to_page(20);

        engine.resize(1920.0, 1080.0);
        assert_eq!(engine.pagination().total(), 1);
        assert_eq!(engine.pagination().current(), 0);
    }

    #[test]
    fn test_factory_reset() {
        let mut engine = engine();
        engine.create_item(ItemDraft::default());
        engine.set_mode(LayoutMode::Card);
        engine.set_scale(2.0);

        engine.factory_reset();
        assert_eq!(engine.items().len(), 3);
        assert_eq!(engine.config().mode, LayoutMode::Compact);
        assert!((engine.config().scale() - 1.0).abs() < 0.001);
        assert_eq!(engine.pagination().current(), 0);
        // reset items take fresh ids
        assert!(engine.items().iter().all(|i| i.id.0 > 4));
    }
}
