//! WASM-compatible wrapper types for resolved geometry.
//!
//! Skipped layout crosses the boundary as `undefined` transform fields, which
//! the host treats as "leave the current style alone".

use cropframe_core::{FlipScale, RenderTransform, TransformOutput, ViewportSize};
use wasm_bindgen::prelude::*;

/// A resolved render transform for JavaScript.
///
/// Every transform getter returns `undefined` when layout was skipped. The
/// flip getters are always set; they belong to the bitmap layer beneath the
/// transform and are not affected by skipping.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsRenderTransform {
    transform: Option<RenderTransform>,
    flip: FlipScale,
}

#[wasm_bindgen]
impl JsRenderTransform {
    /// Whether layout was skipped for this frame
    #[wasm_bindgen(getter)]
    pub fn skipped(&self) -> bool {
        self.transform.is_none()
    }

    #[wasm_bindgen(getter)]
    pub fn origin_x(&self) -> Option<f64> {
        self.transform.map(|t| t.origin_x)
    }

    #[wasm_bindgen(getter)]
    pub fn origin_y(&self) -> Option<f64> {
        self.transform.map(|t| t.origin_y)
    }

    #[wasm_bindgen(getter)]
    pub fn translate_x(&self) -> Option<f64> {
        self.transform.map(|t| t.translate_x)
    }

    #[wasm_bindgen(getter)]
    pub fn translate_y(&self) -> Option<f64> {
        self.transform.map(|t| t.translate_y)
    }

    /// Rotation in radians, within `[0, 2π)`
    #[wasm_bindgen(getter)]
    pub fn rotate_z(&self) -> Option<f64> {
        self.transform.map(|t| t.rotate_z)
    }

    #[wasm_bindgen(getter)]
    pub fn scale_x(&self) -> Option<f64> {
        self.transform.map(|t| t.scale_x)
    }

    #[wasm_bindgen(getter)]
    pub fn scale_y(&self) -> Option<f64> {
        self.transform.map(|t| t.scale_y)
    }

    /// Horizontal mirror factor for the bitmap layer (1 or -1)
    #[wasm_bindgen(getter)]
    pub fn flip_x(&self) -> f64 {
        self.flip.scale_x
    }

    /// Vertical mirror factor for the bitmap layer (1 or -1)
    #[wasm_bindgen(getter)]
    pub fn flip_y(&self) -> f64 {
        self.flip.scale_y
    }
}

impl JsRenderTransform {
    pub(crate) fn from_output(output: TransformOutput, flip: FlipScale) -> Self {
        Self {
            transform: output.computed().copied(),
            flip,
        }
    }
}

/// Resolved viewport (clip) size for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsViewportSize {
    width: f64,
    height: f64,
}

#[wasm_bindgen]
impl JsViewportSize {
    /// Clip width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Clip height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl From<ViewportSize> for JsViewportSize {
    fn from(size: ViewportSize) -> Self {
        Self {
            width: size.width,
            height: size.height,
        }
    }
}

/// Convert any displayable error into a JavaScript error string.
pub(crate) fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cropframe_core::{Flip, Size};

    fn sample_transform() -> RenderTransform {
        RenderTransform {
            origin_x: 50.0,
            origin_y: 25.0,
            translate_x: -10.0,
            translate_y: 5.0,
            rotate_z: 0.5,
            scale_x: 1.5,
            scale_y: 1.5,
        }
    }

    #[test]
    fn test_computed_transform_getters() {
        let js = JsRenderTransform::from_output(
            TransformOutput::Computed(sample_transform()),
            FlipScale::default(),
        );
        assert!(!js.skipped());
        assert_eq!(js.origin_x(), Some(50.0));
        assert_eq!(js.origin_y(), Some(25.0));
        assert_eq!(js.translate_x(), Some(-10.0));
        assert_eq!(js.translate_y(), Some(5.0));
        assert_eq!(js.rotate_z(), Some(0.5));
        assert_eq!(js.scale_x(), Some(1.5));
        assert_eq!(js.scale_y(), Some(1.5));
    }

    #[test]
    fn test_skipped_transform_getters_unset() {
        let flip = Flip {
            horizontal: false,
            vertical: true,
        };
        let js = JsRenderTransform::from_output(TransformOutput::Skipped, flip.scale());
        assert!(js.skipped());
        assert_eq!(js.origin_x(), None);
        assert_eq!(js.rotate_z(), None);
        assert_eq!(js.scale_y(), None);
        // Flip survives skipping
        assert_eq!(js.flip_x(), 1.0);
        assert_eq!(js.flip_y(), -1.0);
    }

    #[test]
    fn test_viewport_size_from_core() {
        let js = JsViewportSize::from(Size::new(400.0, 200.0));
        assert_eq!(js.width(), 400.0);
        assert_eq!(js.height(), 200.0);
    }
}
