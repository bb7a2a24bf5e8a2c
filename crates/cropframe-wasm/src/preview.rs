//! WASM bindings for composing a whole preview frame.

use crate::types::to_js_error;
use cropframe_core::preview::TransparencyIndicator;
use cropframe_core::{try_compose_preview, CropDescriptor, ImageSize, PreviewOptions, Size};
use wasm_bindgen::prelude::*;

/// Compose clip size, transform and flip for one layout pass.
///
/// # Arguments
///
/// * `image` - `{ width, height }` intrinsic image size
/// * `crop` - Crop state, as for `resolve_transform`
/// * `container_width`, `container_height` - Inner size of the preview panel
/// * `options` - Preview options; missing fields take their defaults
///   (`minHeight` 44, `maxHeight` 256)
/// * `optimize` - Skip layout and hide the clip
///
/// # Returns
///
/// `{ clip: { width, height } | undefined, clipOpacity,
///   transform: { kind: "computed", ... } | { kind: "skipped" },
///   flip: { scaleX, scaleY }, transparencyMarker: "grid" | "color" | undefined }`
///
/// # Errors
///
/// Returns an error string for malformed objects or out-of-contract values.
#[wasm_bindgen]
pub fn compose_preview(
    image: JsValue,
    crop: JsValue,
    container_width: f64,
    container_height: f64,
    options: JsValue,
    optimize: bool,
) -> Result<JsValue, JsValue> {
    let image: ImageSize = serde_wasm_bindgen::from_value(image)
        .map_err(|e| JsValue::from_str(&format!("Invalid image size: {}", e)))?;
    let crop: CropDescriptor = serde_wasm_bindgen::from_value(crop)
        .map_err(|e| JsValue::from_str(&format!("Invalid crop: {}", e)))?;
    let options: PreviewOptions = if options.is_undefined() || options.is_null() {
        PreviewOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsValue::from_str(&format!("Invalid preview options: {}", e)))?
    };

    let container = Size::new(container_width, container_height);
    let frame = try_compose_preview(&image, &crop, &container, &options, optimize)
        .map_err(to_js_error)?;

    serde_wasm_bindgen::to_value(&frame).map_err(to_js_error)
}

/// Marker for the clip element's transparency indicator.
///
/// `"grid"` stays `"grid"`, any color becomes `"color"`, and no setting means
/// no marker.
#[wasm_bindgen]
pub fn transparency_marker(indicator: Option<String>) -> Option<String> {
    indicator.map(|value| TransparencyIndicator::from(value).marker().as_str().to_string())
}
