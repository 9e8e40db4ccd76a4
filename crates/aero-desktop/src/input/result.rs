//! Drag controller outputs

use serde::Serialize;

use crate::item::ItemId;
use crate::math::Vec2;
use crate::viewport::EdgeSide;

/// Identifies one edge arm of one gesture
///
/// Hosts that schedule a real timer hand this back through
/// `DragController::fire`; a token from a cancelled arm or a finished
/// gesture is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct EdgeTimerToken {
    pub gesture: u64,
    pub arm: u64,
}

/// A completed edge-dwell page flip
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFlip {
    pub item: ItemId,
    pub from_page: u32,
    pub to_page: u32,
}

/// What a pointer move did to the edge state
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragSignal {
    /// Nothing edge related changed
    None,
    /// An edge zone was entered (or the opposite one); a dwell timer is pending
    Armed {
        side: EdgeSide,
        token: EdgeTimerToken,
        deadline_ms: f64,
    },
    /// The pointer left the zone before the dwell elapsed
    Disarmed,
    /// The dwell elapsed and the page flipped
    Flipped(PageFlip),
}

impl DragSignal {
    /// The flip carried by this signal, if any
    #[inline]
    pub fn flip(&self) -> Option<PageFlip> {
        match self {
            DragSignal::Flipped(flip) => Some(*flip),
            _ => None,
        }
    }
}

/// Final position to write through to the store at gesture end
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragCommit {
    pub item: ItemId,
    pub position: Vec2,
}
