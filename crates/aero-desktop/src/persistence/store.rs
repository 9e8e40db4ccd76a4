//! Typed access to the persisted desktop keys

use log::warn;

use super::{ItemsSnapshot, KeyValueStorage, PersistenceError};
use crate::config::LayoutConfig;
use crate::item::ItemStore;
use crate::layout::LayoutMode;

/// Key holding the item snapshot
pub const ITEMS_KEY: &str = "aero_desktop_v7";
/// Key holding the layout mode name
pub const MODE_KEY: &str = "aero_layout_v7";
/// Key holding the scale as a decimal string
pub const SCALE_KEY: &str = "aero_scale_v7";

/// Persistence facade over a key-value backend
pub struct Persistence {
    storage: Box<dyn KeyValueStorage>,
}

impl Persistence {
    /// Wrap a storage backend
    pub fn new(storage: impl KeyValueStorage + 'static) -> Self {
        Self { storage: Box::new(storage) }
    }

    /// Underlying backend
    pub fn storage(&self) -> &dyn KeyValueStorage {
        self.storage.as_ref()
    }

    /// Read the persisted items
    pub fn load_items(&self) -> Result<Option<ItemStore>, PersistenceError> {
        let Some(raw) = self.storage.get(ITEMS_KEY)? else {
            return Ok(None);
        };
        let snapshot = ItemsSnapshot::decode(&raw)
            .map_err(|source| PersistenceError::Corrupt { key: ITEMS_KEY.to_string(), source })?;
        Ok(Some(snapshot.into_store()))
    }

    /// Write the full item collection
    pub fn save_items(&mut self, store: &ItemStore) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(&ItemsSnapshot::capture(store))
            .map_err(|source| PersistenceError::Encode { key: ITEMS_KEY.to_string(), source })?;
        self.storage.set(ITEMS_KEY, &json)
    }

    /// Read the persisted layout config, defaulting missing or bad fields
    pub fn load_config(&self) -> Result<LayoutConfig, PersistenceError> {
        let mut config = LayoutConfig::default();

        if let Some(raw) = self.storage.get(MODE_KEY)? {
            match raw.parse::<LayoutMode>() {
                Ok(mode) => config.mode = mode,
                Err(err) => warn!("ignoring stored layout mode: {err}"),
            }
        }

        if let Some(raw) = self.storage.get(SCALE_KEY)? {
            match raw.trim().parse::<f32>() {
                Ok(scale) => {
                    config.set_scale(scale);
                }
                Err(err) => warn!("ignoring stored scale `{raw}`: {err}"),
            }
        }

        Ok(config)
    }

    /// Write the layout mode
    pub fn save_mode(&mut self, mode: LayoutMode) -> Result<(), PersistenceError> {
        self.storage.set(MODE_KEY, mode.as_str())
    }

    /// Write the scale
    pub fn save_scale(&mut self, scale: f32) -> Result<(), PersistenceError> {
        self.storage.set(SCALE_KEY, &scale.to_string())
    }

    /// Write mode and scale
    pub fn save_config(&mut self, config: &LayoutConfig) -> Result<(), PersistenceError> {
        self.save_mode(config.mode)?;
        self.save_scale(config.scale())
    }

    /// Drop everything
    pub fn clear(&mut self) -> Result<(), PersistenceError> {
        self.storage.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemDraft;
    use crate::persistence::MemoryStorage;

    #[test]
    fn test_missing_items_read_as_absent() {
        let persistence = Persistence::new(MemoryStorage::new());
        assert!(persistence.load_items().unwrap().is_none());
    }

    #[test]
    fn test_items_round_trip() {
        let mut persistence = Persistence::new(MemoryStorage::new());
        let mut store = ItemStore::with_defaults();
        store.create(ItemDraft::default());
        persistence.save_items(&store).unwrap();

        let loaded = persistence.load_items().unwrap().unwrap();
        assert_eq!(loaded.items(), store.items());
        assert_eq!(loaded.next_id(), store.next_id());
    }

    #[test]
    fn test_corrupt_items() {
        let persistence = Persistence::new(MemoryStorage::new().with(ITEMS_KEY, "{oops"));
        let err = persistence.load_items().unwrap_err();
        assert!(err.is_corrupt());
        assert!(err.to_string().contains(ITEMS_KEY));
    }

    #[test]
    fn test_config_defaults_and_legacy_values() {
        let persistence = Persistence::new(MemoryStorage::new());
        assert_eq!(persistence.load_config().unwrap(), LayoutConfig::default());

        let persistence = Persistence::new(
            MemoryStorage::new().with(MODE_KEY, "icon").with(SCALE_KEY, "0.2"),
        );
        let config = persistence.load_config().unwrap();
        assert_eq!(config.mode, LayoutMode::Compact);
        assert!((config.scale() - 0.4).abs() < 0.001);
    }

    #[test]
    fn test_config_ignores_bad_fields() {
        let persistence = Persistence::new(
            MemoryStorage::new().with(MODE_KEY, "mosaic").with(SCALE_KEY, "big"),
        );
        assert_eq!(persistence.load_config().unwrap(), LayoutConfig::default());
    }

    #[test]
    fn test_config_round_trip() {
        let mut persistence = Persistence::new(MemoryStorage::new());
        let config = LayoutConfig::new(LayoutMode::Gallery, 1.4);
        persistence.save_config(&config).unwrap();
        assert_eq!(persistence.load_config().unwrap(), config);
    }
}
