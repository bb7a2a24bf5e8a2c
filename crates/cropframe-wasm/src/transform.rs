//! WASM bindings for the render transform.
//!
//! The image wrapper layer of the preview calls `resolve_transform` on every
//! layout pass with the current clip size as the stage.

use crate::types::{to_js_error, JsRenderTransform};
use cropframe_core::{
    try_resolve_transform, CropDescriptor, GeometryError, ImageSize, Rect,
};
use wasm_bindgen::prelude::*;

/// Resolve the render transform for a crop.
///
/// # Arguments
///
/// * `image` - `{ width, height }` intrinsic image size
/// * `crop` - `{ center: { x, y }, zoom, rotation, aspectRatio?, flip? }`
/// * `stage_width`, `stage_height` - Clip size the crop must fill
/// * `optimize` - Skip layout; all transform fields come back `undefined`
///
/// # Errors
///
/// Returns an error string if the objects cannot be deserialized or violate
/// the input contract (e.g. a pan center on the image edge).
///
/// # Example (TypeScript)
///
/// ```typescript
/// const t = resolve_transform(
///   { width: 1200, height: 800 },
///   { center: { x: 0.5, y: 0.5 }, zoom: 1, rotation: 0, flip: { horizontal: true } },
///   clip.width,
///   clip.height,
///   isResizing,
/// );
/// if (!t.skipped) {
///   wrapper.style.transformOrigin = `${t.origin_x}px ${t.origin_y}px`;
/// }
/// ```
#[wasm_bindgen]
pub fn resolve_transform(
    image: JsValue,
    crop: JsValue,
    stage_width: f64,
    stage_height: f64,
    optimize: bool,
) -> Result<JsRenderTransform, JsValue> {
    let image: ImageSize = serde_wasm_bindgen::from_value(image)
        .map_err(|e| JsValue::from_str(&format!("Invalid image size: {}", e)))?;
    let crop: CropDescriptor = serde_wasm_bindgen::from_value(crop)
        .map_err(|e| JsValue::from_str(&format!("Invalid crop: {}", e)))?;

    resolve(&image, &crop, stage_width, stage_height, optimize).map_err(to_js_error)
}

/// Resolve against a stage anchored at the origin.
pub(crate) fn resolve(
    image: &ImageSize,
    crop: &CropDescriptor,
    stage_width: f64,
    stage_height: f64,
    optimize: bool,
) -> Result<JsRenderTransform, GeometryError> {
    let stage = Rect::new(0.0, 0.0, stage_width, stage_height);
    let output = try_resolve_transform(image, crop, &stage, optimize)?;
    Ok(JsRenderTransform::from_output(output, crop.flip.scale()))
}
