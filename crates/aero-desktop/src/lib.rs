//! Paginated desktop layout engine
//!
//! This crate owns the desktop surface of a web shell:
//! - Item store (shortcuts and native apps, single source of truth)
//! - Grid geometry per layout mode, device class, orientation and scale
//! - Grid reconciliation into pages
//! - Drag gestures with edge-dwell page flipping
//! - Pagination state and page indicators
//! - Write-through persistence to a key-value store
//!
//! ## Architecture
//!
//! - [`math`]: Geometry primitives (`Vec2`, `Size`)
//! - [`item`]: Item model and the item store
//! - [`layout`]: Layout modes, sizing tables, geometry and reconciliation
//! - [`input`]: Drag state machine
//! - [`persistence`]: Storage backends and the versioned item snapshot
//!
//! [`DesktopEngine`] ties these together. All state is plain Rust and
//! time is injected, so everything is testable without a browser.
//!
//! ## Example
//!
//! ```rust
//! use aero_desktop::{DesktopEngine, ItemDraft, LayoutMode, MemoryStorage};
//!
//! let mut engine = DesktopEngine::boot(MemoryStorage::new(), 1920.0, 1080.0);
//! let id = engine.create_item(ItemDraft::default()).unwrap();
//! engine.set_mode(LayoutMode::Card);
//!
//! assert!(engine.item(id).is_some());
//! assert_eq!(engine.pagination().total(), 1);
//! ```

pub mod math;
pub mod item;
pub mod layout;
pub mod input;
pub mod persistence;

mod config;
mod engine;
mod pagination;
mod viewport;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

pub use math::{Size, Vec2};
pub use item::{Item, ItemDraft, ItemId, ItemKind, ItemPatch, ItemStore, Payload};
pub use layout::{GridGeometry, LayoutMode};
pub use input::{DragCommit, DragController, DragPhase, DragSignal, EdgeTimerToken, PageFlip};
pub use persistence::{KeyValueStorage, MemoryStorage, Persistence, PersistenceError};

pub use config::{DragConfig, LayoutConfig, ScalePreset, MAX_SCALE, MIN_SCALE, WHEEL_SCALE_STEP};
pub use engine::{DesktopEngine, ItemPlacement};
pub use pagination::{PageIndicator, Pagination};
pub use viewport::{EdgeSide, Viewport};
