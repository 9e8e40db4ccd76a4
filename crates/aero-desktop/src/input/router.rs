//! Drag controller state machine
//!
//! Idle -> Dragging on `begin`. Entering an edge zone arms a dwell timer;
//! staying in the zone for `dwell_ms` flips the page, leaving it disarms.
//! Entering the opposite zone re-arms for that side. `end`/`cancel` return
//! to Idle and clear any pending timer. At most one timer is pending.
//!
//! Time is injected (`now_ms`); the controller never reads a clock.

use log::debug;

use super::{DragCommit, DragGesture, DragPhase, DragSignal, EdgeTimerToken, PageFlip};
use crate::config::DragConfig;
use crate::item::ItemId;
use crate::math::Vec2;
use crate::viewport::{EdgeSide, Viewport};

/// Drag controller for a single pointer
pub struct DragController {
    config: DragConfig,
    gesture: Option<DragGesture>,
    next_serial: u64,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(DragConfig::default())
    }
}

impl DragController {
    /// Create a controller with the given tuning
    pub fn new(config: DragConfig) -> Self {
        Self { config, gesture: None, next_serial: 1 }
    }

    #[inline]
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Current gesture
    #[inline]
    pub fn gesture(&self) -> Option<&DragGesture> {
        self.gesture.as_ref()
    }

    /// Current phase (Idle when no gesture)
    #[inline]
    pub fn phase(&self) -> DragPhase {
        self.gesture.as_ref().map_or(DragPhase::Idle, |g| g.phase)
    }

    /// Check if currently dragging
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.phase().is_active()
    }

    /// Item being dragged
    #[inline]
    pub fn dragged_item(&self) -> Option<ItemId> {
        self.gesture.as_ref().map(|g| g.item)
    }

    /// Token and deadline of the pending edge timer, if one is armed
    pub fn pending_timer(&self) -> Option<(EdgeTimerToken, f64)> {
        match self.phase() {
            DragPhase::EdgeArmed { since_ms, token, .. } => {
                Some((token, since_ms + self.config.dwell_ms))
            }
            _ => None,
        }
    }

    /// Start dragging an item whose anchor is `origin`
    ///
    /// A gesture already in progress is dropped without committing.
    pub fn begin(&mut self, item: ItemId, origin: Vec2, pointer: Vec2) {
        let serial = self.next_serial;
        self.next_serial += 1;

        debug!("drag begin {item} at ({}, {})", origin.x, origin.y);
        self.gesture = Some(DragGesture {
            serial,
            item,
            origin,
            start_pointer: pointer.finite_or_zero(),
            displacement: Vec2::ZERO,
            phase: DragPhase::Dragging,
            arms: 0,
        });
    }

    /// Track a pointer move
    ///
    /// Updates the displacement and the edge state. If the pointer is still
    /// inside the armed zone and the dwell has elapsed, the page flips here.
    pub fn pointer_move(
        &mut self,
        pointer: Vec2,
        viewport: &Viewport,
        current_page: u32,
        now_ms: f64,
    ) -> DragSignal {
        let threshold = self.config.edge_threshold_px;
        let dwell_ms = self.config.dwell_ms;

        let Some(gesture) = self.gesture.as_mut() else {
            return DragSignal::None;
        };

        let pointer = pointer.finite_or_zero();
        gesture.displacement = pointer - gesture.start_pointer;

        match (viewport.edge_at(pointer.x, threshold), gesture.phase) {
            (Some(side), DragPhase::EdgeArmed { side: armed, since_ms, .. }) if side == armed => {
                if now_ms - since_ms >= dwell_ms {
                    Self::flip(gesture, side, current_page)
                        .map_or(DragSignal::None, DragSignal::Flipped)
                } else {
                    DragSignal::None
                }
            }
            (Some(side), _) => {
                gesture.arms += 1;
                let token = EdgeTimerToken { gesture: gesture.serial, arm: gesture.arms };
                gesture.phase = DragPhase::EdgeArmed { side, since_ms: now_ms, token };
                debug!("drag {} armed {side:?} edge", gesture.item);
                DragSignal::Armed { side, token, deadline_ms: now_ms + dwell_ms }
            }
            (None, DragPhase::EdgeArmed { .. }) => {
                gesture.phase = DragPhase::Dragging;
                debug!("drag {} left edge zone", gesture.item);
                DragSignal::Disarmed
            }
            (None, DragPhase::PageFlipped { .. }) => {
                gesture.phase = DragPhase::Dragging;
                DragSignal::None
            }
            (None, _) => DragSignal::None,
        }
    }

    /// Frame-driven dwell check
    ///
    /// Flips if an edge is armed and the dwell has elapsed by `now_ms`.
    pub fn poll(&mut self, current_page: u32, now_ms: f64) -> Option<PageFlip> {
        let dwell_ms = self.config.dwell_ms;
        let gesture = self.gesture.as_mut()?;

        match gesture.phase {
            DragPhase::EdgeArmed { side, since_ms, .. } if now_ms - since_ms >= dwell_ms => {
                Self::flip(gesture, side, current_page)
            }
            _ => None,
        }
    }

    /// Host timer callback
    ///
    /// Flips only if `token` names the currently armed edge of the current
    /// gesture; anything else is a no-op.
    pub fn fire(&mut self, token: EdgeTimerToken, current_page: u32) -> Option<PageFlip> {
        let gesture = self.gesture.as_mut()?;

        match gesture.phase {
            DragPhase::EdgeArmed { side, token: armed, .. } if armed == token => {
                Self::flip(gesture, side, current_page)
            }
            _ => {
                debug!("ignoring stale edge timer {token:?}");
                None
            }
        }
    }

    /// Finish the gesture, committing origin + displacement
    pub fn end(&mut self) -> Option<DragCommit> {
        let gesture = self.gesture.take()?;
        let position = gesture.live_position();
        debug!("drag end {} at ({}, {})", gesture.item, position.x, position.y);
        Some(DragCommit { item: gesture.item, position })
    }

    /// Abort the gesture, committing the original anchor
    pub fn cancel(&mut self) -> Option<DragCommit> {
        let gesture = self.gesture.take()?;
        debug!("drag cancel {}", gesture.item);
        Some(DragCommit { item: gesture.item, position: gesture.origin })
    }

    /// Move the pinned origin (used when a reconcile moves the item mid-drag)
    pub(crate) fn rebase_origin(&mut self, origin: Vec2) {
        if let Some(gesture) = self.gesture.as_mut() {
            gesture.origin = origin;
        }
    }

    /// Resolve an elapsed dwell into a flip
    ///
    /// A left flip from page 0 is suppressed; there is no upper bound on
    /// right flips. Either way the arm is consumed.
    fn flip(gesture: &mut DragGesture, side: EdgeSide, current_page: u32) -> Option<PageFlip> {
        let target = match side {
            EdgeSide::Left => current_page.checked_sub(1),
            EdgeSide::Right => current_page.checked_add(1),
        };

        let Some(page) = target else {
            gesture.phase = DragPhase::Dragging;
            return None;
        };

        gesture.phase = DragPhase::PageFlipped { side, page };
        debug!("drag {} flipped to page {page}", gesture.item);
        Some(PageFlip { item: gesture.item, from_page: current_page, to_page: page })
    }
}
