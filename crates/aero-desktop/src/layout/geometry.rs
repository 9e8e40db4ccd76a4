//! Grid geometry resolution

use serde::Serialize;

use super::table::{cell_sizing, forced_grid, insets, spacing_factor};
use super::{DeviceClass, LayoutMode, Orientation};
use crate::math::{Size, Vec2};

/// Resolved grid for one viewport/mode/scale combination
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridGeometry {
    pub cols: usize,
    pub rows: usize,
    pub cell_w: f32,
    pub cell_h: f32,
    pub margin_x: f32,
    pub margin_y: f32,
    /// Width left for cells after margins
    pub available_w: f32,
    /// Height left for cells after margins and the bottom strip
    pub available_h: f32,
    pub items_per_page: usize,
}

impl GridGeometry {
    /// Resolve the grid for a viewport
    ///
    /// Pure and total: viewport dimensions are clamped to at least 1px and
    /// every count is floored at 1, so `items_per_page` is never zero.
    pub fn resolve(viewport: Size, mode: LayoutMode, scale: f32) -> Self {
        let viewport = viewport.at_least(1.0);
        let device = DeviceClass::from_width(viewport.width);
        let orientation = Orientation::of(viewport);

        let insets = insets(device, orientation);
        let available_w = (viewport.width - insets.margin_x * 2.0).max(0.0);
        let available_h =
            (viewport.height - insets.margin_y * 2.0 - insets.bottom_reserve).max(0.0);

        let cell = cell_sizing(mode, device, orientation)
            .base_size(viewport.width, scale)
            .scale(spacing_factor(device, scale))
            .at_least(1.0);

        let (cols, rows) = forced_grid(mode, device, orientation).unwrap_or_else(|| {
            (fit(available_w, cell.width), fit(available_h, cell.height))
        });

        Self {
            cols,
            rows,
            cell_w: cell.width,
            cell_h: cell.height,
            margin_x: insets.margin_x,
            margin_y: insets.margin_y,
            available_w,
            available_h,
            items_per_page: cols * rows,
        }
    }

    /// Offset that centers the occupied grid inside the available area
    ///
    /// Never negative; whole pixels.
    pub fn centering_offset(&self) -> Vec2 {
        let spare_w = self.available_w - self.cols as f32 * self.cell_w;
        let spare_h = self.available_h - self.rows as f32 * self.cell_h;
        Vec2::new((spare_w / 2.0).max(0.0).floor(), (spare_h / 2.0).max(0.0).floor())
    }

    /// Top-left anchor of a cell
    pub fn cell_origin(&self, col: usize, row: usize) -> Vec2 {
        let offset = self.centering_offset();
        Vec2::new(
            self.margin_x + offset.x + col as f32 * self.cell_w,
            self.margin_y + offset.y + row as f32 * self.cell_h,
        )
    }
}

/// How many cells of `cell` length fit in `available`, at least one
fn fit(available: f32, cell: f32) -> usize {
    let n = (available / cell).floor();
    if n.is_finite() && n >= 1.0 {
        n as usize
    } else {
        1
    }
}
