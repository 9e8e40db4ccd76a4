//! Desktop items and the store that owns them
//!
//! An item is a positionable desktop entry. The layout core only reads and
//! writes `id`, `page`, `x` and `y`; everything application specific (label,
//! url, thumbnails, news) rides along in an opaque JSON payload.

mod store;
mod defaults;

pub use store::ItemStore;
pub use defaults::default_items;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::math::Vec2;

/// Unique item identifier, never reused
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Item kind
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Built-in folder-style entry (e.g. "My PC")
    Native,
    /// Link to an external URL
    #[default]
    Shortcut,
}

/// Opaque application payload
pub type Payload = Map<String, Value>;

/// A positionable desktop entry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(default)]
    pub kind: ItemKind,
    /// Top-left anchor within its page
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    /// Zero-based page index
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub payload: Payload,
}

impl Item {
    /// Anchor as a vector
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub(crate) fn set_position(&mut self, position: Vec2) {
        self.x = position.x;
        self.y = position.y;
    }
}

/// Input for creating an item
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    #[serde(default)]
    pub kind: ItemKind,
    #[serde(default)]
    pub payload: Payload,
}

impl ItemDraft {
    /// Shortcut draft with the given payload
    pub fn shortcut(payload: Payload) -> Self {
        Self { kind: ItemKind::Shortcut, payload }
    }
}

/// Partial update for an item
///
/// Payload keys merge one by one; a `null` value removes the key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(default)]
    pub x: Option<f32>,
    #[serde(default)]
    pub y: Option<f32>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub payload: Option<Payload>,
}

impl ItemPatch {
    /// Patch that only moves the item to another page
    pub fn page(page: u32) -> Self {
        Self { page: Some(page), ..Default::default() }
    }

    /// Patch that only merges payload keys
    pub fn payload(payload: Payload) -> Self {
        Self { payload: Some(payload), ..Default::default() }
    }

    /// Whether the patch touches nothing
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.page.is_none() && self.payload.is_none()
    }

    pub(crate) fn apply(&self, item: &mut Item) {
        if let Some(x) = self.x.filter(|v| v.is_finite()) {
            item.x = x;
        }
        if let Some(y) = self.y.filter(|v| v.is_finite()) {
            item.y = y;
        }
        if let Some(page) = self.page {
            item.page = page;
        }
        if let Some(payload) = &self.payload {
            for (key, value) in payload {
                if value.is_null() {
                    item.payload.remove(key);
                } else {
                    item.payload.insert(key.clone(), value.clone());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Payload {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn item() -> Item {
        Item {
            id: ItemId(7),
            kind: ItemKind::Shortcut,
            x: 10.0,
            y: 20.0,
            page: 0,
            payload: payload(json!({ "label": "Docs", "url": "https://example.com" })),
        }
    }

    #[test]
    fn test_patch_merges_payload() {
        let mut item = item();
        let patch = ItemPatch::payload(payload(json!({ "label": "Handbook", "isPrivate": true })));
        patch.apply(&mut item);

        assert_eq!(item.payload["label"], json!("Handbook"));
        assert_eq!(item.payload["url"], json!("https://example.com"));
        assert_eq!(item.payload["isPrivate"], json!(true));
    }

    #[test]
    fn test_patch_null_removes_key() {
        let mut item = item();
        ItemPatch::payload(payload(json!({ "url": null }))).apply(&mut item);
        assert!(!item.payload.contains_key("url"));
        assert!(item.payload.contains_key("label"));
    }

    #[test]
    fn test_patch_geometry_fields() {
        let mut item = item();
        ItemPatch { x: Some(99.0), page: Some(3), ..Default::default() }.apply(&mut item);
        assert!((item.x - 99.0).abs() < 0.001);
        assert!((item.y - 20.0).abs() < 0.001);
        assert_eq!(item.page, 3);
    }

    #[test]
    fn test_patch_ignores_non_finite_coordinates() {
        let mut item = item();
        let patch = ItemPatch { x: Some(f32::NAN), y: Some(f32::INFINITY), ..Default::default() };
        patch.apply(&mut item);
        assert!((item.x - 10.0).abs() < 0.001);
        assert!((item.y - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_item_deserializes_without_geometry() {
        let item: Item = serde_json::from_value(json!({ "id": 3, "kind": "native" })).unwrap();
        assert_eq!(item.id, ItemId(3));
        assert_eq!(item.kind, ItemKind::Native);
        assert_eq!(item.page, 0);
        assert_eq!(item.position(), Vec2::ZERO);
        assert!(item.payload.is_empty());
    }

    #[test]
    fn test_empty_patch() {
        assert!(ItemPatch::default().is_empty());
        assert!(!ItemPatch::page(1).is_empty());
    }
}
