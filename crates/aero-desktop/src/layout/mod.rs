//! Adaptive grid layout
//!
//! - `mode`: density presets and the device/orientation classification
//! - `table`: the fixed sizing tables every geometry is derived from
//! - `geometry`: viewport + mode + scale to grid geometry
//! - `reconcile`: grid geometry + store order to per-item placements

mod mode;
mod table;
mod geometry;
mod reconcile;

pub use mode::{DeviceClass, LayoutMode, Orientation, UnknownLayoutMode};
pub use table::{
    cell_sizing, forced_grid, insets, spacing_factor, CellSizing, Insets,
    COMPACT_BREAKPOINT_PX,
};
pub use geometry::GridGeometry;
pub use reconcile::{placement_at, reconcile, total_pages, Placement, Reconciled};
