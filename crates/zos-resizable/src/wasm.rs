//! WASM exports for the interaction engine
//!
//! This module provides wasm-bindgen exports so a browser host can feed
//! pointer events in and apply the returned updates to an element.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::config::BoundaryConfig;
use crate::engine::InteractionEngine;
use crate::error::ConfigError;
use crate::math::{Rect, Vec2};
use crate::splitter::{Splitter, SplitterConfig};

/// Interaction controller for WASM - wraps InteractionEngine with a JS-friendly API
#[wasm_bindgen]
pub struct ResizableController {
    engine: InteractionEngine,
}

#[wasm_bindgen]
impl ResizableController {
    /// Create a controller from a JSON config (empty string for defaults)
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<ResizableController, JsValue> {
        let config = parse_config(config_json).map_err(to_js)?;
        let engine = InteractionEngine::new(config).map_err(to_js)?;
        Ok(Self { engine })
    }

    /// Replace the config
    #[wasm_bindgen]
    pub fn set_config(&mut self, config_json: &str) -> Result<(), JsValue> {
        let config = parse_config(config_json).map_err(to_js)?;
        self.engine.set_config(config).map_err(to_js)
    }

    // =========================================================================
    // Pointer events
    // =========================================================================

    /// Report the element's initial size
    #[wasm_bindgen]
    pub fn attach(&mut self, top: f32, left: f32, width: f32, height: f32) -> String {
        to_json(&self.engine.attach(Rect::new(top, left, width, height)))
    }

    /// Handle pointer down
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32, top: f32, left: f32, width: f32, height: f32) -> String {
        to_json(&self.engine.on_pointer_down(Vec2::new(x, y), Rect::new(top, left, width, height)))
    }

    /// Handle pointer move
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32, top: f32, left: f32, width: f32, height: f32) -> String {
        to_json(&self.engine.on_pointer_move(Vec2::new(x, y), Rect::new(top, left, width, height)))
    }

    /// Handle pointer up
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> String {
        to_json(&self.engine.on_pointer_up())
    }

    /// Abandon the gesture (pointer left the page, escape pressed)
    #[wasm_bindgen]
    pub fn pointer_cancel(&mut self) -> String {
        to_json(&self.engine.on_pointer_cancel())
    }

    /// Get gesture phase as JSON
    #[wasm_bindgen]
    pub fn get_phase_json(&self) -> String {
        to_json(&self.engine.phase())
    }
}

/// Divider controller for WASM
#[wasm_bindgen]
pub struct SplitterController {
    splitter: Splitter,
}

#[wasm_bindgen]
impl SplitterController {
    /// Create from `{"side": "left", "limit": 500}` and a start position
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str, position: f32) -> Result<SplitterController, JsValue> {
        let config: SplitterConfig = serde_json::from_str(config_json)
            .map_err(|e| to_js(ConfigError::Parse(e.to_string())))?;
        Ok(Self {
            splitter: Splitter::new(config, position),
        })
    }

    #[wasm_bindgen]
    pub fn pointer_enter(&self) -> String {
        to_json(&self.splitter.on_pointer_enter())
    }

    #[wasm_bindgen]
    pub fn pointer_leave(&self) -> String {
        to_json(&self.splitter.on_pointer_leave())
    }

    #[wasm_bindgen]
    pub fn pointer_down(&mut self) -> String {
        to_json(&self.splitter.on_pointer_down())
    }

    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> String {
        to_json(&self.splitter.on_pointer_move(Vec2::new(x, y)))
    }

    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> String {
        to_json(&self.splitter.on_pointer_up())
    }
}

/// Apply an update returned by either controller to an element's inline style
#[wasm_bindgen]
pub fn apply_update(element: &HtmlElement, update_json: &str) -> Result<(), JsValue> {
    let update: serde_json::Value =
        serde_json::from_str(update_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let style = element.style();

    for key in ["top", "left", "width", "height"] {
        if let Some(px) = update.get(key).and_then(|v| v.as_f64()) {
            style.set_property(key, &format!("{}px", px))?;
        }
    }
    if let Some(cursor) = update.get("cursor").and_then(|v| v.as_str()) {
        style.set_property("cursor", cursor)?;
    }
    match update.get("translucent").and_then(|v| v.as_bool()) {
        Some(true) => style.set_property("opacity", "0.5")?,
        Some(false) => {
            style.remove_property("opacity")?;
        }
        None => {}
    }
    Ok(())
}

fn parse_config(json: &str) -> Result<BoundaryConfig, ConfigError> {
    if json.trim().is_empty() {
        return Ok(BoundaryConfig::default());
    }
    serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
}

fn to_js(err: ConfigError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
}
