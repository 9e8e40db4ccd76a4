//! Grid reconciliation
//!
//! Assigns every item a page and an anchor from its store index alone.
//! Store order is never re-sorted by position.

use super::GridGeometry;
use crate::item::Item;
use crate::math::Vec2;

/// Where the item at a given store index lands
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub page: u32,
    pub col: usize,
    pub row: usize,
    pub position: Vec2,
}

/// Output of a reconciliation pass
#[derive(Clone, Debug, PartialEq)]
pub struct Reconciled {
    pub items: Vec<Item>,
    pub total_pages: u32,
}

/// `max(1, ceil(count / per_page))`
#[inline]
pub fn total_pages(count: usize, per_page: usize) -> u32 {
    let per_page = per_page.max(1);
    count.div_ceil(per_page).max(1) as u32
}

/// Placement of the item at `index`
pub fn placement_at(index: usize, geometry: &GridGeometry) -> Placement {
    let per_page = geometry.items_per_page.max(1);
    let cols = geometry.cols.max(1);

    let index_in_page = index % per_page;
    let col = index_in_page % cols;
    let row = index_in_page / cols;

    Placement {
        page: (index / per_page) as u32,
        col,
        row,
        position: geometry.cell_origin(col, row),
    }
}

/// Rewrite `(x, y, page)` of every item from the geometry
pub fn reconcile(items: &[Item], geometry: &GridGeometry) -> Reconciled {
    let items = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let placement = placement_at(index, geometry);
            let mut item = item.clone();
            item.set_position(placement.position);
            item.page = placement.page;
            item
        })
        .collect::<Vec<_>>();

    let total_pages = total_pages(items.len(), geometry.items_per_page);
    Reconciled { items, total_pages }
}
