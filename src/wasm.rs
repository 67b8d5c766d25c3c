//! WebAssembly exports for PixelFX filters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Buffers are
//! passed as `Uint8Array` / `Uint8ClampedArray` (e.g. `ImageData.data`) and
//! modified in place. Invalid input is reported as a thrown error string.

use wasm_bindgen::prelude::*;

use crate::catalog::{self, apply_by_name, Filter};
use crate::error::FilterError;
use crate::pipeline::FilterSettings;

fn to_js(err: FilterError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn run(data: &mut [u8], filter: Filter) -> Result<(), JsValue> {
    filter.apply(data).map_err(to_js)
}

/// Install the panic hook and route `log` output to the browser console.
#[wasm_bindgen(start)]
pub fn init_wasm() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("pixelfx initialized");
    }
}

// ============================================================================
// Tone Filters
// ============================================================================

/// Invert colors.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `amount` - 0.0 = no change, 1.0 = full negative
#[wasm_bindgen]
pub fn invert_wasm(data: &mut [u8], amount: f32) -> Result<(), JsValue> {
    run(data, Filter::Invert(amount))
}

#[wasm_bindgen]
pub fn grayscale_wasm(data: &mut [u8], amount: f32) -> Result<(), JsValue> {
    run(data, Filter::Grayscale(amount))
}

#[wasm_bindgen]
pub fn brightness_wasm(data: &mut [u8], delta: i32) -> Result<(), JsValue> {
    run(data, Filter::Brightness(delta))
}

#[wasm_bindgen]
pub fn contrast_wasm(data: &mut [u8], factor: f32) -> Result<(), JsValue> {
    run(data, Filter::Contrast(factor))
}

#[wasm_bindgen]
pub fn gamma_wasm(data: &mut [u8], exponent: f32) -> Result<(), JsValue> {
    run(data, Filter::Gamma(exponent))
}

// ============================================================================
// Color Filters
// ============================================================================

#[wasm_bindgen]
pub fn sepia_wasm(data: &mut [u8], amount: f32) -> Result<(), JsValue> {
    run(data, Filter::Sepia(amount))
}

#[wasm_bindgen]
pub fn saturation_wasm(data: &mut [u8], factor: f32) -> Result<(), JsValue> {
    run(data, Filter::Saturation(factor))
}

#[wasm_bindgen]
pub fn tint_wasm(data: &mut [u8], r: i32, g: i32, b: i32) -> Result<(), JsValue> {
    run(data, Filter::Tint { r, g, b })
}

#[wasm_bindgen]
pub fn temperature_wasm(data: &mut [u8], warmth: f32) -> Result<(), JsValue> {
    run(data, Filter::Temperature(warmth))
}

// ============================================================================
// Stylize Filters
// ============================================================================

#[wasm_bindgen]
pub fn fade_wasm(data: &mut [u8], amount: f32) -> Result<(), JsValue> {
    run(data, Filter::Fade(amount))
}

/// Invert channels above `threshold * 255`.
#[wasm_bindgen]
pub fn solarize_wasm(data: &mut [u8], threshold: f32) -> Result<(), JsValue> {
    run(data, Filter::Solarize(threshold))
}

// ============================================================================
// Dispatch & Settings
// ============================================================================

/// Apply a filter by catalog key, e.g. `apply_filter_wasm(px, "tint", [10, 0, -10])`.
#[wasm_bindgen]
pub fn apply_filter_wasm(data: &mut [u8], name: &str, values: &[f64]) -> Result<(), JsValue> {
    apply_by_name(data, name, values).map(|_| ()).map_err(to_js)
}

/// Apply a JSON settings document to `data` in place.
#[wasm_bindgen]
pub fn apply_settings_wasm(data: &mut [u8], settings_json: &str) -> Result<(), JsValue> {
    let settings = FilterSettings::from_json(settings_json).map_err(to_js)?;
    settings.apply(data).map(|_| ()).map_err(to_js)
}

/// Copy `base`, apply a JSON settings document, and return the copy.
#[wasm_bindgen]
pub fn render_settings_wasm(base: &[u8], settings_json: &str) -> Result<Vec<u8>, JsValue> {
    let settings = FilterSettings::from_json(settings_json).map_err(to_js)?;
    settings.render(base).map_err(to_js)
}

/// The filter catalog as a JSON array (key, label, family, arity, range).
#[wasm_bindgen]
pub fn filter_catalog_wasm() -> Result<String, JsValue> {
    serde_json::to_string(&catalog::catalog()).map_err(|e| to_js(e.into()))
}
