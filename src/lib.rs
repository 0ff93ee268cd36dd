//! gridflow - expandable grid layout engine
//!
//! Packs a fixed collection of rectangular items into a responsive 2D grid
//! and reflows them when one item expands or the available width changes:
//! - Deterministic row-major free-space packing with stable item identities
//! - Single-item expand/collapse with automatic displacement and re-pack
//! - Responsive column count with a compact two-column breakpoint
//! - Pixel-exact, gap-aware cell geometry for the rendering layer
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridView } from 'gridflow';
//! await init();
//! const view = new GridView(config, window.innerWidth);
//! view.set_layout_callback(applyLayout);
//! view.activate(1);
//! ```

// Engine modules
pub mod cell;
pub mod config;
pub mod error;
pub mod layout;

// FFI surface
pub mod viewer;

use wasm_bindgen::prelude::*;

// Re-export the main viewer struct
pub use viewer::GridView;

pub use cell::Cell;
pub use config::{GridConfig, ItemSpec, MIN_COLUMNS};
pub use error::GridError;
pub use layout::{GridEngine, GridMatrix, ItemMetrics, Layout, SlotBlock, MIN_FIT_COLUMNS};

/// Compute the initial layout for a JSON config and return it as a JSON
/// string.
///
/// # Arguments
/// * `config_json` - A serialized [`GridConfig`]
/// * `available_width` - The currently available width in pixels
///
/// # Errors
/// Returns an error if the config does not deserialize or fails
/// validation.
#[wasm_bindgen]
pub fn compute_layout_json(config_json: &str, available_width: f32) -> Result<String, JsValue> {
    let config: GridConfig = serde_json::from_str(config_json)
        .map_err(|e| JsValue::from_str(&format!("Config error: {e}")))?;
    let engine = GridEngine::new(config, available_width)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&engine.layout())
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Compute the initial layout for a config and return it as a `JsValue`.
///
/// This is more efficient than [`compute_layout_json`] when the result will
/// be used directly in JavaScript.
///
/// # Errors
/// Returns an error if the config does not deserialize or fails
/// validation.
#[wasm_bindgen]
pub fn compute_layout(config: JsValue, available_width: f32) -> Result<JsValue, JsValue> {
    let config: GridConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Config error: {e}")))?;
    let engine = GridEngine::new(config, available_width)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&engine.layout())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
