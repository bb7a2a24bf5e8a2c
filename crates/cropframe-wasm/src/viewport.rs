//! WASM bindings for viewport sizing.

use crate::types::{to_js_error, JsViewportSize};
use cropframe_core::{try_resolve_viewport_size, GeometryError, Size, ViewportConfig};
use wasm_bindgen::prelude::*;

/// Compute the clip size inside a container.
///
/// # Arguments
///
/// * `container_width`, `container_height` - Inner size of the preview panel
/// * `config` - `{ fixedHeight?, minHeight, maxHeight, panelAspectRatio?,
///   allowMultiple, cropAspectRatio?, imageAspectRatio }`
///
/// # Errors
///
/// Returns an error string if `config` cannot be deserialized or holds a
/// non-positive ratio or bound.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const clip = resolve_viewport_size(rect.width, rect.height, {
///   minHeight: 44,
///   maxHeight: 256,
///   allowMultiple: false,
///   imageAspectRatio: image.height / image.width,
/// });
/// ```
#[wasm_bindgen]
pub fn resolve_viewport_size(
    container_width: f64,
    container_height: f64,
    config: JsValue,
) -> Result<JsViewportSize, JsValue> {
    let config: ViewportConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Invalid viewport config: {}", e)))?;

    resolve(container_width, container_height, &config).map_err(to_js_error)
}

pub(crate) fn resolve(
    container_width: f64,
    container_height: f64,
    config: &ViewportConfig,
) -> Result<JsViewportSize, GeometryError> {
    let container = Size::new(container_width, container_height);
    try_resolve_viewport_size(&container, config).map(JsViewportSize::from)
}
