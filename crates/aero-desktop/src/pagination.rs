//! Pagination state for the desktop surface

use serde::Serialize;

/// One dot in the page indicator strip
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageIndicator {
    pub index: u32,
    pub active: bool,
}

/// Visible page and page count
///
/// `current` may temporarily exceed `total - 1` after an edge-drag flip onto
/// a page that doesn't exist yet; the next reconciliation pulls it back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    current: u32,
    total: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { current: 0, total: 1 }
    }
}

impl Pagination {
    #[inline]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[inline]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Jump to any page, including one past the last
    pub fn go_to(&mut self, page: u32) {
        self.current = page;
    }

    /// Step forward, stopping at the last page
    pub fn next(&mut self) -> bool {
        if self.current.saturating_add(1) < self.total {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Step back, stopping at the first page
    pub fn previous(&mut self) -> bool {
        if self.current > 0 {
            self.current = self.current.min(self.total) - 1;
            true
        } else {
            false
        }
    }

    /// Publish a reconciled page count and pull `current` back into range
    pub fn publish_total(&mut self, total: u32) {
        self.total = total.max(1);
        self.current = self.current.min(self.total - 1);
    }

    /// Whether `current` points past the last reconciled page
    #[inline]
    pub fn is_over_range(&self) -> bool {
        self.current >= self.total
    }

    /// Indicator strip; empty when there is only one page
    pub fn indicators(&self) -> Vec<PageIndicator> {
        if self.total <= 1 {
            return Vec::new();
        }
        (0..self.total)
            .map(|index| PageIndicator { index, active: index == self.current })
            .collect()
    }
}
