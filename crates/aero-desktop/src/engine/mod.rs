//! Desktop engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `items`: Item create/update/delete/move with write-through persistence
//! - `layout`: Mode, scale, viewport and reconciliation
//! - `input`: Drag gestures and edge-dwell page flips
//! - `rendering`: Per-page placements for the rendering surface

mod items;
mod layout;
mod input;
mod rendering;

use log::{info, warn};

use crate::config::{DragConfig, LayoutConfig};
use crate::input::DragController;
use crate::item::{Item, ItemStore};
use crate::layout::GridGeometry;
use crate::pagination::Pagination;
use crate::persistence::{KeyValueStorage, Persistence};
use crate::viewport::Viewport;

pub use rendering::ItemPlacement;

/// Desktop engine coordinating all desktop components
///
/// Owns, for one session:
/// - Item store (single source of truth for item geometry)
/// - Layout config (mode + scale) and the viewport
/// - Pagination (current page, reconciled page count)
/// - Drag controller (transient gesture state only)
/// - Persistence (loaded once at boot, written after every mutation)
///
/// Structural changes (item count, mode, scale, viewport) reconcile the grid
/// immediately. Updates and moves do not.
pub struct DesktopEngine {
    pub(crate) store: ItemStore,
    pub(crate) config: LayoutConfig,
    pub(crate) viewport: Viewport,
    pub(crate) pagination: Pagination,
    pub(crate) drag: DragController,
    pub(crate) persistence: Persistence,
    /// Geometry used by the last reconciliation
    pub(crate) geometry: GridGeometry,
}

impl DesktopEngine {
    /// Boot with default drag tuning
    pub fn boot(storage: impl KeyValueStorage + 'static, width: f32, height: f32) -> Self {
        Self::boot_with(storage, width, height, DragConfig::default())
    }

    /// Boot from storage and run the first reconciliation
    ///
    /// Missing or unreadable items fall back to the default set; a bad
    /// config falls back to defaults field by field.
    pub fn boot_with(
        storage: impl KeyValueStorage + 'static,
        width: f32,
        height: f32,
        drag_config: DragConfig,
    ) -> Self {
        let persistence = Persistence::new(storage);

        let store = match persistence.load_items() {
            Ok(Some(store)) => {
                info!("restored {} desktop items", store.len());
                store
            }
            Ok(None) => {
                info!("no saved desktop, starting from defaults");
                ItemStore::with_defaults()
            }
            Err(err) => {
                warn!("falling back to default desktop: {err}");
                ItemStore::with_defaults()
            }
        };

        let config = persistence.load_config().unwrap_or_else(|err| {
            warn!("falling back to default layout config: {err}");
            LayoutConfig::default()
        });

        let viewport = Viewport::new(width, height);
        let geometry = GridGeometry::resolve(viewport.size(), config.mode, config.scale());

        let mut engine = Self {
            store,
            config,
            viewport,
            pagination: Pagination::default(),
            drag: DragController::new(drag_config),
            persistence,
            geometry,
        };
        engine.reconcile();
        engine
    }

    /// Items in store order
    #[inline]
    pub fn items(&self) -> &[Item] {
        self.store.items()
    }

    /// The item store
    #[inline]
    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    #[inline]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[inline]
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Geometry of the last reconciliation
    #[inline]
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    #[inline]
    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    #[inline]
    pub fn persistence(&self) -> &Persistence {
        &self.persistence
    }

    /// Best-effort write of the item collection
    pub(crate) fn persist_items(&mut self) {
        if let Err(err) = self.persistence.save_items(&self.store) {
            warn!("failed to save desktop items: {err}");
        }
    }

    /// Best-effort write of mode and scale
    pub(crate) fn persist_config(&mut self) {
        if let Err(err) = self.persistence.save_config(&self.config) {
            warn!("failed to save layout config: {err}");
        }
    }
}
