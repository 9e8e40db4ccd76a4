//! Drag gesture state

use crate::item::ItemId;
use crate::math::Vec2;
use crate::viewport::EdgeSide;
use super::EdgeTimerToken;

/// Phase of the drag state machine
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragPhase {
    /// No gesture in progress
    Idle,
    /// Dragging away from both edges
    Dragging,
    /// Pointer is inside an edge zone; the page flips once the dwell elapses
    EdgeArmed {
        side: EdgeSide,
        /// Timestamp the zone was entered (ms)
        since_ms: f64,
        token: EdgeTimerToken,
    },
    /// A flip just happened; the next move re-arms or returns to dragging
    PageFlipped {
        side: EdgeSide,
        page: u32,
    },
}

impl DragPhase {
    /// Check if a gesture is active
    #[inline]
    pub fn is_active(&self) -> bool {
        !matches!(self, DragPhase::Idle)
    }
}

/// One in-progress drag
///
/// Holds only transient state; the item store is not touched until the
/// gesture ends.
#[derive(Clone, Debug)]
pub struct DragGesture {
    /// Gesture sequence number, used to invalidate stale timers
    pub(crate) serial: u64,
    /// Item being dragged
    pub item: ItemId,
    /// Item anchor when the gesture started
    pub origin: Vec2,
    /// Pointer position when the gesture started
    pub start_pointer: Vec2,
    /// Total pointer displacement so far
    pub displacement: Vec2,
    pub phase: DragPhase,
    /// Arm counter within this gesture
    pub(crate) arms: u64,
}

impl DragGesture {
    /// Anchor the item would commit to right now
    #[inline]
    pub fn live_position(&self) -> Vec2 {
        self.origin + self.displacement
    }
}
