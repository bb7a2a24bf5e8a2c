//! Cropframe WASM - WebAssembly bindings for Cropframe
//!
//! This crate exposes the cropframe-core geometry to the JavaScript preview
//! layer, which owns the DOM and applies the resolved styles.
//!
//! # Module Structure
//!
//! - `transform` - Render transform for the image wrapper layer
//! - `viewport` - Clip size inside the preview panel
//! - `preview` - Both of the above chained for one layout pass
//! - `types` - WASM-compatible wrapper types for resolved geometry
//!
//! # Usage
//!
//! ```typescript
//! import init, { resolve_viewport_size, resolve_transform } from '@cropframe/wasm';
//!
//! await init();
//!
//! const clip = resolve_viewport_size(panel.width, panel.height, config);
//! const t = resolve_transform(image, crop, clip.width, clip.height, false);
//! ```

use wasm_bindgen::prelude::*;

mod preview;
mod transform;
mod types;
mod viewport;

// Re-export public types
pub use preview::{compose_preview, transparency_marker};
pub use transform::resolve_transform;
pub use types::{JsRenderTransform, JsViewportSize};
pub use viewport::resolve_viewport_size;

/// Initialize the WASM module (called automatically on load)
///
/// Installs the panic hook and routes core log output to the browser console
/// at `warn` level.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Warn) {
        // A logger is already installed; keep it.
        log::debug!("console logger not installed: {}", err);
    }
}

/// Raise or lower the console log level.
///
/// Accepts `"off"`, `"error"`, `"warn"`, `"info"`, `"debug"` or `"trace"`.
/// Unknown values leave the level unchanged and return `false`.
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> bool {
    match level.parse::<log::LevelFilter>() {
        Ok(filter) => {
            log::set_max_level(filter);
            true
        }
        Err(_) => false,
    }
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
