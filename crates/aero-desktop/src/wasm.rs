//! WASM exports for the desktop layout engine
//!
//! Wraps [`DesktopEngine`] with a JS-friendly API backed by
//! `window.localStorage`. Structured results are returned as JSON strings.

use log::{Level, LevelFilter, Metadata, Record};
use serde_json::json;
use wasm_bindgen::prelude::*;

use crate::config::ScalePreset;
use crate::engine::DesktopEngine;
use crate::input::{DragSignal, EdgeTimerToken};
use crate::item::{ItemDraft, ItemId, ItemPatch};
use crate::layout::LayoutMode;
use crate::persistence::{KeyValueStorage, MemoryStorage, PersistenceError};

// =============================================================================
// Logging
// =============================================================================

/// `log` backend writing to the browser console
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[aero-desktop] {}", record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            _ => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the panic hook and console logger (idempotent)
fn init_console() {
    console_error_panic_hook::set_once();
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
}

// =============================================================================
// localStorage backend
// =============================================================================

/// Storage backed by `window.localStorage`
struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    fn open() -> Result<Self, PersistenceError> {
        let storage = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(PersistenceError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        self.storage
            .get_item(key)
            .map_err(|e| PersistenceError::read(key, format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| PersistenceError::write(key, format!("{e:?}")))
    }

    fn clear(&mut self) -> Result<(), PersistenceError> {
        self.storage
            .clear()
            .map_err(|e| PersistenceError::write("*", format!("{e:?}")))
    }
}

fn js_error(message: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&message.to_string())
}

fn to_json<T: serde::Serialize>(value: &T, fallback: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| fallback.to_string())
}

/// Desktop controller for WASM - wraps DesktopEngine with JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    engine: DesktopEngine,
}

#[wasm_bindgen]
impl DesktopController {
    /// Boot from localStorage for the given viewport
    ///
    /// Falls back to in-memory storage when localStorage is unavailable.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        init_console();
        let engine = match LocalStorage::open() {
            Ok(storage) => DesktopEngine::boot(storage, width, height),
            Err(err) => {
                log::warn!("{err}, desktop changes will not survive a reload");
                DesktopEngine::boot(MemoryStorage::new(), width, height)
            }
        };
        Self { engine }
    }

    // =========================================================================
    // Viewport & layout
    // =========================================================================

    /// Viewport size changed
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.resize(width, height);
    }

    /// Set the layout mode by name ("compact", "card", "gallery")
    #[wasm_bindgen]
    pub fn set_mode(&mut self, mode: &str) -> Result<(), JsValue> {
        let mode: LayoutMode = mode.parse().map_err(js_error)?;
        self.engine.set_mode(mode);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn get_mode(&self) -> String {
        self.engine.config().mode.to_string()
    }

    /// Set the scale; returns the clamped value
    #[wasm_bindgen]
    pub fn set_scale(&mut self, scale: f32) -> f32 {
        self.engine.set_scale(scale)
    }

    #[wasm_bindgen]
    pub fn get_scale(&self) -> f32 {
        self.engine.config().scale()
    }

    /// Apply a preset by name ("tiny", "standard", "big")
    #[wasm_bindgen]
    pub fn apply_scale_preset(&mut self, preset: &str) -> Result<f32, JsValue> {
        let preset: ScalePreset = serde_json::from_value(json!(preset))
            .map_err(|_| js_error(format!("unknown scale preset `{preset}`")))?;
        Ok(self.engine.apply_scale_preset(preset))
    }

    /// Label of the preset closest to the current scale
    #[wasm_bindgen]
    pub fn get_scale_label(&self) -> String {
        ScalePreset::nearest(self.engine.config().scale()).label().to_string()
    }

    /// Wheel event; returns true if it was consumed as a zoom
    #[wasm_bindgen]
    pub fn handle_wheel(&mut self, delta_y: f32, ctrl: bool) -> bool {
        self.engine.handle_wheel(delta_y, ctrl)
    }

    /// Wipe storage and restore the factory desktop
    #[wasm_bindgen]
    pub fn factory_reset(&mut self) {
        self.engine.factory_reset();
    }

    /// Mode and scale as JSON
    #[wasm_bindgen]
    pub fn get_config_json(&self) -> String {
        to_json(self.engine.config(), "{}")
    }

    /// Grid geometry as JSON
    #[wasm_bindgen]
    pub fn get_geometry_json(&self) -> String {
        to_json(self.engine.geometry(), "{}")
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// Create an item from a draft JSON (`{"kind": ..., "payload": {...}}`)
    #[wasm_bindgen]
    pub fn create_item(&mut self, draft_json: &str) -> Result<u64, JsValue> {
        let draft: ItemDraft = serde_json::from_str(draft_json).map_err(js_error)?;
        self.engine
            .create_item(draft)
            .map(|id| id.0)
            .ok_or_else(|| js_error("item id space exhausted"))
    }

    /// Merge a patch JSON into an item
    #[wasm_bindgen]
    pub fn update_item(&mut self, id: u64, patch_json: &str) -> Result<bool, JsValue> {
        let patch: ItemPatch = serde_json::from_str(patch_json).map_err(js_error)?;
        Ok(self.engine.update_item(ItemId(id), &patch))
    }

    #[wasm_bindgen]
    pub fn delete_item(&mut self, id: u64) -> bool {
        self.engine.delete_item(ItemId(id))
    }

    #[wasm_bindgen]
    pub fn move_item(&mut self, id: u64, x: f32, y: f32) -> bool {
        self.engine.move_item(ItemId(id), x, y)
    }

    /// All items as JSON
    #[wasm_bindgen]
    pub fn get_items_json(&self) -> String {
        to_json(&self.engine.items(), "[]")
    }

    /// Items on the current page as JSON
    #[wasm_bindgen]
    pub fn get_visible_items_json(&self) -> String {
        to_json(&self.engine.visible_items(), "[]")
    }

    // =========================================================================
    // Pages
    // =========================================================================

    #[wasm_bindgen]
    pub fn go_to_page(&mut self, page: u32) {
        self.engine.go_to_page(page);
    }

    #[wasm_bindgen]
    pub fn next_page(&mut self) -> bool {
        self.engine.next_page()
    }

    #[wasm_bindgen]
    pub fn previous_page(&mut self) -> bool {
        self.engine.previous_page()
    }

    /// Current page and page count as JSON
    #[wasm_bindgen]
    pub fn get_pagination_json(&self) -> String {
        to_json(self.engine.pagination(), "{}")
    }

    /// Page dots as JSON (empty with a single page)
    #[wasm_bindgen]
    pub fn get_page_indicators_json(&self) -> String {
        to_json(&self.engine.page_indicators(), "[]")
    }

    // =========================================================================
    // Drag
    // =========================================================================

    #[wasm_bindgen]
    pub fn begin_drag(&mut self, id: u64, pointer_x: f32, pointer_y: f32) -> bool {
        self.engine.begin_drag(ItemId(id), pointer_x, pointer_y)
    }

    /// Pointer move; returns the edge signal as JSON
    ///
    /// For `"armed"`, schedule a timer for `deadlineMs` and pass the token
    /// back to [`fire_edge_timer`](Self::fire_edge_timer).
    #[wasm_bindgen]
    pub fn drag_move(&mut self, pointer_x: f32, pointer_y: f32) -> String {
        let signal = match self.engine.drag_move(pointer_x, pointer_y, js_sys::Date::now()) {
            DragSignal::None => json!({ "type": "none" }),
            DragSignal::Armed { side, token, deadline_ms } => json!({
                "type": "armed",
                "side": side,
                "gesture": token.gesture,
                "arm": token.arm,
                "deadlineMs": deadline_ms,
            }),
            DragSignal::Disarmed => json!({ "type": "disarmed" }),
            DragSignal::Flipped(flip) => json!({ "type": "flipped", "flip": flip }),
        };
        signal.to_string()
    }

    /// Animation frame; returns true if the page flipped
    #[wasm_bindgen]
    pub fn tick(&mut self) -> bool {
        self.engine.tick(js_sys::Date::now()).is_some()
    }

    /// Edge timer expired; returns true if the page flipped
    #[wasm_bindgen]
    pub fn fire_edge_timer(&mut self, gesture: u64, arm: u64) -> bool {
        self.engine.fire_edge_timer(EdgeTimerToken { gesture, arm }).is_some()
    }

    #[wasm_bindgen]
    pub fn end_drag(&mut self) -> bool {
        self.engine.end_drag().is_some()
    }

    #[wasm_bindgen]
    pub fn cancel_drag(&mut self) -> bool {
        self.engine.cancel_drag().is_some()
    }
}
