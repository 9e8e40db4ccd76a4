//! Drag input module
//!
//! Provides the drag state machine for free-form item dragging with
//! edge-dwell page navigation.

mod router;
mod drag;
mod result;

pub use router::DragController;
pub use drag::{DragGesture, DragPhase};
pub use result::{DragCommit, DragSignal, EdgeTimerToken, PageFlip};
