//! Main GridView struct - the wasm-facing entry point for the layout
//! engine.
//!
//! This is a thin I/O wrapper: configuration and signals come in as plain
//! values or `JsValue`s, committed layout snapshots go out. Rendering,
//! animation timing, and event wiring stay on the JavaScript side, as does
//! measuring environment chrome such as scrollbar width (fed back in via
//! `set_reserved_width`).

use js_sys::Function;
use wasm_bindgen::prelude::*;

use crate::config::GridConfig;
use crate::layout::{GridEngine, Layout};

/// The main viewer-facing struct exported to JavaScript.
#[wasm_bindgen]
pub struct GridView {
    engine: GridEngine,
    layout_callback: Option<Function>,
}

#[wasm_bindgen]
impl GridView {
    /// Build a view from a config object and the currently available width
    /// in pixels.
    ///
    /// # Errors
    /// Returns an error if the config does not deserialize or fails
    /// validation.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, available_width: f32) -> Result<GridView, JsValue> {
        console_error_panic_hook::set_once();

        let config: GridConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Config error: {e}")))?;
        let engine = GridEngine::new(config, available_width)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(GridView {
            engine,
            layout_callback: None,
        })
    }

    /// Resize one item to an explicit span and return the new layout.
    ///
    /// # Errors
    /// Returns an error for an unknown item identity.
    pub fn resize(
        &mut self,
        index: u32,
        span_cols: u32,
        span_rows: u32,
    ) -> Result<JsValue, JsValue> {
        let layout = self
            .engine
            .resize(index, span_cols, span_rows)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.emit(&layout)
    }

    /// Expand an item to its declared span and select it.
    ///
    /// # Errors
    /// Returns an error for an unknown item identity.
    pub fn activate(&mut self, index: u32) -> Result<JsValue, JsValue> {
        let layout = self
            .engine
            .activate(index)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.emit(&layout)
    }

    /// Shrink the selected item back to a unit cell.
    ///
    /// # Errors
    /// Returns an error if the selection no longer matches the matrix.
    pub fn deactivate(&mut self) -> Result<JsValue, JsValue> {
        let layout = self
            .engine
            .deactivate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.emit(&layout)
    }

    /// Feed a width-change signal. Callers should debounce bursts; every
    /// distinct signal is processed in full.
    ///
    /// # Errors
    /// Returns an error only if the layout callback throws.
    pub fn on_width_changed(&mut self, available_width: f32) -> Result<JsValue, JsValue> {
        let layout = self.engine.on_width_changed(available_width);
        self.emit(&layout)
    }

    /// Set the width reserved for non-content chrome (e.g. a scrollbar),
    /// as measured by the rendering side.
    ///
    /// # Errors
    /// Returns an error only if the layout callback throws.
    pub fn set_reserved_width(&mut self, reserved: f32) -> Result<JsValue, JsValue> {
        let layout = self.engine.set_reserved_width(reserved);
        self.emit(&layout)
    }

    /// Register a callback invoked with every committed layout snapshot.
    pub fn set_layout_callback(&mut self, callback: Function) {
        self.layout_callback = Some(callback);
    }

    /// The committed cells, one per item at position `index - 1`, as a JS
    /// array.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn cells(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.engine.cells())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// The committed layout as a JSON string.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn layout_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.engine.layout())
            .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
    }

    /// Total grid height in pixels.
    pub fn grid_height(&self) -> f32 {
        self.engine.grid_height()
    }

    /// Total grid width in pixels at the current column count.
    pub fn grid_width(&self) -> f32 {
        self.engine.grid_width()
    }

    /// Margin that centers the grid inside the available width.
    pub fn margin_left(&self) -> f32 {
        self.engine.margin_left()
    }

    /// Current responsive column count.
    pub fn columns(&self) -> u32 {
        self.engine.columns()
    }

    /// Whether the grid sits at the compact (two-column) breakpoint.
    pub fn is_compact(&self) -> bool {
        self.engine.is_compact()
    }

    /// Selected (expanded) item identity, or `undefined` when nothing is
    /// expanded.
    pub fn selected(&self) -> Option<u32> {
        self.engine.selected()
    }
}

impl GridView {
    /// Serialize a layout and hand it to the registered callback, if any.
    fn emit(&self, layout: &Layout) -> Result<JsValue, JsValue> {
        let value = serde_wasm_bindgen::to_value(layout)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))?;
        if let Some(callback) = &self.layout_callback {
            callback.call1(&JsValue::NULL, &value)?;
        }
        Ok(value)
    }
}
