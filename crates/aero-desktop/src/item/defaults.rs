//! Factory default desktop contents

use serde_json::{json, Value};

use super::{Item, ItemId, ItemKind, Payload};

const YOUTUBE_THUMBNAIL: &str =
    "https://images.unsplash.com/photo-1611162617474-5b21e879e113";

/// The items a fresh desktop starts with
///
/// Every item starts at the origin of page 0; the first reconciliation
/// assigns real placements.
pub fn default_items() -> Vec<Item> {
    vec![
        seed(1, ItemKind::Native, json!({
            "appId": "computer",
            "label": "My PC",
            "path": "/Desktop",
            "isPrivate": false,
        })),
        seed(2, ItemKind::Shortcut, json!({
            "appId": "browser",
            "label": "Google",
            "path": "/Desktop",
            "url": "https://google.com",
            "isPrivate": false,
        })),
        seed(3, ItemKind::Shortcut, json!({
            "appId": "weblink",
            "label": "YouTube",
            "path": "/Desktop",
            "url": "https://youtube.com",
            "isPrivate": false,
            "thumbnails": {
                "icon": thumbnail(200),
                "card": thumbnail(400),
                "gallery": thumbnail(600),
            },
        })),
    ]
}

fn thumbnail(width: u32) -> String {
    format!("{YOUTUBE_THUMBNAIL}?q=80&w={width}&auto=format&fit=crop")
}

fn seed(id: u64, kind: ItemKind, payload: Value) -> Item {
    let payload = match payload {
        Value::Object(map) => map,
        _ => Payload::new(),
    };
    Item { id: ItemId(id), kind, x: 0.0, y: 0.0, page: 0, payload }
}
