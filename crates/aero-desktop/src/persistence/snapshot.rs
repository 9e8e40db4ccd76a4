//! Snapshot serialization for the item collection

use std::collections::HashSet;

use serde::de::{Error as _, IgnoredAny};
use serde::{Deserialize, Serialize};

use crate::item::{Item, ItemId, ItemKind, ItemStore, Payload};

/// Snapshot of the item store for persistence
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemsSnapshot {
    /// Version for migration support
    pub version: u32,
    /// Id counter, so ids stay unique across reloads
    pub next_id: u64,
    /// Items in store order
    pub items: Vec<Item>,
}

/// Every encoding the items key has held
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredItems {
    Versioned(ItemsSnapshot),
    /// Version 0: the web shell's flat node array
    Legacy(Vec<LegacyNode>),
}

/// One version 0 node
///
/// Ids were free-form strings; they are dropped and renumbered. Everything
/// but the geometry ends up in the payload.
#[derive(Deserialize)]
struct LegacyNode {
    #[serde(rename = "id")]
    _id: IgnoredAny,
    label: String,
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
    #[serde(default)]
    page: u32,
    #[serde(flatten)]
    rest: Payload,
}

impl LegacyNode {
    fn into_item(self, id: ItemId) -> Item {
        let LegacyNode { label, x, y, page, mut rest, .. } = self;
        let native = rest.get("appId").and_then(|v| v.as_str()) == Some("computer")
            || rest.get("type").and_then(|v| v.as_str()) == Some("folder");
        rest.insert("label".to_string(), label.into());

        Item {
            id,
            kind: if native { ItemKind::Native } else { ItemKind::Shortcut },
            x: if x.is_finite() { x } else { 0.0 },
            y: if y.is_finite() { y } else { 0.0 },
            page,
            payload: rest,
        }
    }
}

impl ItemsSnapshot {
    /// Current snapshot version
    pub const CURRENT_VERSION: u32 = 1;

    /// Capture a store
    pub fn capture(store: &ItemStore) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            next_id: store.next_id(),
            items: store.items().to_vec(),
        }
    }

    /// Decode any known encoding, migrating to the current version
    ///
    /// Duplicate ids, or ids and counters that leave no room for another id,
    /// are rejected like malformed JSON.
    pub fn decode(raw: &str) -> Result<Self, serde_json::Error> {
        let mut snapshot = match serde_json::from_str::<StoredItems>(raw)? {
            StoredItems::Versioned(snapshot) => snapshot,
            StoredItems::Legacy(nodes) => Self {
                version: 0,
                next_id: 0,
                items: (1..)
                    .zip(nodes)
                    .map(|(id, node)| node.into_item(ItemId(id)))
                    .collect(),
            },
        };
        if snapshot.needs_migration() {
            snapshot.migrate();
        }
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check if snapshot needs migration
    pub fn needs_migration(&self) -> bool {
        self.version < Self::CURRENT_VERSION
    }

    /// Migrate snapshot to current version
    pub fn migrate(&mut self) {
        if self.version == 0 {
            self.next_id = self
                .items
                .iter()
                .map(|i| i.id.0.saturating_add(1))
                .max()
                .unwrap_or(1);
        }
        self.version = Self::CURRENT_VERSION;
    }

    fn validate(&self) -> Result<(), serde_json::Error> {
        if self.next_id == u64::MAX {
            return Err(serde_json::Error::custom("id counter exhausted"));
        }
        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if item.id.0 == u64::MAX {
                return Err(serde_json::Error::custom(format!("{} exhausts the id space", item.id)));
            }
            if !seen.insert(item.id) {
                return Err(serde_json::Error::custom(format!("duplicate {}", item.id)));
            }
        }
        Ok(())
    }

    /// Rebuild the store
    pub fn into_store(self) -> ItemStore {
        ItemStore::from_parts(self.items, self.next_id)
    }
}
