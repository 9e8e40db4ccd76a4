//! Per-page view of the desktop

use serde::Serialize;

use super::DesktopEngine;
use crate::item::ItemId;
use crate::pagination::PageIndicator;

/// Where to draw one item on the current page
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ItemPlacement {
    pub id: ItemId,
    pub x: f32,
    pub y: f32,
    /// Drawn at the live pointer position, above everything else
    pub dragging: bool,
}

impl DesktopEngine {
    /// Items on the current page, in store order
    ///
    /// The dragged item is reported at its live position.
    pub fn visible_items(&self) -> Vec<ItemPlacement> {
        let current = self.pagination.current();
        let dragged = self.drag.gesture();

        self.store
            .items()
            .iter()
            .filter(|item| item.page == current)
            .map(|item| match dragged {
                Some(gesture) if gesture.item == item.id => {
                    let live = gesture.live_position();
                    ItemPlacement { id: item.id, x: live.x, y: live.y, dragging: true }
                }
                _ => ItemPlacement { id: item.id, x: item.x, y: item.y, dragging: false },
            })
            .collect()
    }

    /// Page dots; empty with a single page
    pub fn page_indicators(&self) -> Vec<PageIndicator> {
        self.pagination.indicators()
    }

    /// Show any page, even one past the last
    pub fn go_to_page(&mut self, page: u32) {
        self.pagination.go_to(page);
    }

    pub fn next_page(&mut self) -> bool {
        self.pagination.next()
    }

    pub fn previous_page(&mut self) -> bool {
        self.pagination.previous()
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::DesktopEngine;
    use crate::item::ItemDraft;
    use crate::persistence::MemoryStorage;

    #[test]
    fn test_visible_items_follow_page() {
        // 1 item per page
        let mut engine = DesktopEngine::boot(MemoryStorage::new(), 200.0, 200.0);
        assert_eq!(engine.pagination().total(), 3);
        assert_eq!(engine.visible_items().len(), 1);
        assert_eq!(engine.visible_items()[0].id, engine.items()[0].id);

        assert!(engine.next_page());
        assert_eq!(engine.visible_items()[0].id, engine.items()[1].id);
        assert!(engine.previous_page());
        assert!(!engine.previous_page());
    }

    #[test]
    fn test_dragged_item_at_live_position() {
        let mut engine = DesktopEngine::boot(MemoryStorage::new(), 1920.0, 1080.0);
        let id = engine.items()[0].id;
        let start = engine.item(id).unwrap().position();

        engine.begin_drag(id, 100.0, 100.0);
        engine.drag_move(130.0, 120.0, 0.0);

        let placement = engine.visible_items().into_iter().find(|p| p.id == id).unwrap();
        assert!(placement.dragging);
        assert!((placement.x - (start.x + 30.0)).abs() < 0.001);
        assert!((placement.y - (start.y + 20.0)).abs() < 0.001);
    }

    #[test]
    fn test_indicators_hidden_for_one_page() {
        let mut engine = DesktopEngine::boot(MemoryStorage::new(), 1920.0, 1080.0);
        assert!(engine.page_indicators().is_empty());

        engine.resize(200.0, 200.0);
        engine.create_item(ItemDraft::default());
        let dots = engine.page_indicators();
        assert_eq!(dots.len(), 4);
        assert!(dots[0].active);
    }
}
