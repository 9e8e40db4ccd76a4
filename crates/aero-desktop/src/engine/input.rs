//! Drag gestures and edge-dwell page flips

use log::debug;

use super::DesktopEngine;
use crate::input::{DragCommit, DragSignal, EdgeTimerToken, PageFlip};
use crate::item::{ItemId, ItemPatch};
use crate::math::Vec2;

impl DesktopEngine {
    /// Start dragging an item from a pointer position
    ///
    /// Returns false for unknown items. A gesture already in progress is
    /// replaced.
    pub fn begin_drag(&mut self, id: ItemId, pointer_x: f32, pointer_y: f32) -> bool {
        let Some(item) = self.store.get(id) else {
            return false;
        };
        let origin = item.position();
        self.drag.begin(id, origin, Vec2::new(pointer_x, pointer_y));
        true
    }

    /// Pointer move during a drag
    ///
    /// A flip, if the dwell elapsed, is applied before returning. The host
    /// should schedule a timer for `DragSignal::Armed` and call
    /// [`fire_edge_timer`](Self::fire_edge_timer) when it expires.
    pub fn drag_move(&mut self, pointer_x: f32, pointer_y: f32, now_ms: f64) -> DragSignal {
        let signal = self.drag.pointer_move(
            Vec2::new(pointer_x, pointer_y),
            &self.viewport,
            self.pagination.current(),
            now_ms,
        );
        if let Some(flip) = signal.flip() {
            self.apply_flip(flip);
        }
        signal
    }

    /// Frame tick; flips if an armed edge has dwelled long enough
    pub fn tick(&mut self, now_ms: f64) -> Option<PageFlip> {
        let flip = self.drag.poll(self.pagination.current(), now_ms)?;
        self.apply_flip(flip);
        Some(flip)
    }

    /// Host timer expiry for an armed edge
    ///
    /// Stale tokens (edge left, re-armed, or gesture over) do nothing.
    pub fn fire_edge_timer(&mut self, token: EdgeTimerToken) -> Option<PageFlip> {
        let flip = self.drag.fire(token, self.pagination.current())?;
        self.apply_flip(flip);
        Some(flip)
    }

    /// Release: commit the item at its drop position
    pub fn end_drag(&mut self) -> Option<DragCommit> {
        let commit = self.drag.end()?;
        self.commit(commit);
        Some(commit)
    }

    /// Abort: put the item back at its starting anchor
    pub fn cancel_drag(&mut self) -> Option<DragCommit> {
        let commit = self.drag.cancel()?;
        self.commit(commit);
        Some(commit)
    }

    fn commit(&mut self, commit: DragCommit) {
        if self.store.move_to(commit.item, commit.position) {
            self.persist_items();
        } else {
            debug!("dropped {} no longer exists", commit.item);
        }
    }

    /// Move the dragged item and the view to the flipped page
    fn apply_flip(&mut self, flip: PageFlip) {
        debug!("page flip {} -> {} carrying {}", flip.from_page, flip.to_page, flip.item);
        self.store.update(flip.item, &ItemPatch::page(flip.to_page));
        self.pagination.go_to(flip.to_page);
        self.persist_items();
    }
}
