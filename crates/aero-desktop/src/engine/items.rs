//! Item mutations

use log::{debug, info, warn};

use super::DesktopEngine;
use crate::item::{Item, ItemDraft, ItemId, ItemPatch};
use crate::math::Vec2;

impl DesktopEngine {
    /// Look up an item
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.store.get(id)
    }

    /// Create an item and re-flow the grid
    ///
    /// The item lands at the end of the flow order. Returns `None` when no
    /// fresh id is left.
    pub fn create_item(&mut self, draft: ItemDraft) -> Option<ItemId> {
        let Some(id) = self.store.create(draft) else {
            warn!("cannot create item, id space exhausted");
            return None;
        };
        info!("created {id}");
        self.reconcile();
        Some(id)
    }

    /// Merge a patch into an item
    ///
    /// Does not re-flow; position and page changes stick until the next
    /// structural change.
    pub fn update_item(&mut self, id: ItemId, patch: &ItemPatch) -> bool {
        if !self.store.update(id, patch) {
            debug!("update ignored, unknown {id}");
            return false;
        }
        self.persist_items();
        true
    }

    /// Delete an item and re-flow the grid
    ///
    /// Deleting the dragged item abandons the gesture.
    pub fn delete_item(&mut self, id: ItemId) -> bool {
        if !self.store.delete(id) {
            debug!("delete ignored, unknown {id}");
            return false;
        }
        if self.drag.dragged_item() == Some(id) {
            self.drag.cancel();
        }
        info!("deleted {id}");
        self.reconcile();
        true
    }

    /// Set an item's anchor without re-flowing
    pub fn move_item(&mut self, id: ItemId, x: f32, y: f32) -> bool {
        if !self.store.move_to(id, Vec2::new(x, y)) {
            return false;
        }
        self.persist_items();
        true
    }
}
