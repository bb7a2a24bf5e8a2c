//! One preview frame: viewport size, render transform and flip together.
//!
//! The host reads its preview settings once into [`PreviewOptions`] and
//! calls [`compose_preview`] on every layout pass. The resolved clip size
//! becomes the stage the transform is computed against.

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::geometry::Rect;
use crate::transform::{
    resolve_transform, CropDescriptor, FlipScale, ImageSize, TransformOutput, TransformSink,
};
use crate::viewport::{resolve_viewport_size, ContainerSize, ViewportConfig, ViewportSize};

/// Default lower bound of the preview height, in pixels.
pub const DEFAULT_MIN_HEIGHT: f64 = 44.0;

/// Default upper bound of the preview height, in pixels.
pub const DEFAULT_MAX_HEIGHT: f64 = 256.0;

/// How transparent image regions are indicated behind the clip.
///
/// Only carried through for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransparencyIndicator {
    /// Checkerboard pattern
    Grid,
    /// Flat fill with the given CSS color
    Color(String),
}

impl TransparencyIndicator {
    /// Marker the host puts on the clip element.
    pub fn marker(&self) -> TransparencyMarker {
        match self {
            TransparencyIndicator::Grid => TransparencyMarker::Grid,
            TransparencyIndicator::Color(_) => TransparencyMarker::Color,
        }
    }
}

/// Kind of transparency indicator, without the color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransparencyMarker {
    Grid,
    Color,
}

impl TransparencyMarker {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransparencyMarker::Grid => "grid",
            TransparencyMarker::Color => "color",
        }
    }
}

impl From<String> for TransparencyIndicator {
    fn from(value: String) -> Self {
        if value == "grid" {
            TransparencyIndicator::Grid
        } else {
            TransparencyIndicator::Color(value)
        }
    }
}

impl From<TransparencyIndicator> for String {
    fn from(value: TransparencyIndicator) -> Self {
        match value {
            TransparencyIndicator::Grid => "grid".to_string(),
            TransparencyIndicator::Color(color) => color,
        }
    }
}

/// Host configuration of the preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreviewOptions {
    /// Fixed preview height, overriding the min/max bounds
    pub fixed_height: Option<f64>,
    pub min_height: f64,
    pub max_height: f64,
    /// Aspect ratio of the whole panel, used in single-item mode
    pub panel_aspect_ratio: Option<f64>,
    pub allow_multiple: bool,
    pub transparency_indicator: Option<TransparencyIndicator>,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            fixed_height: None,
            min_height: DEFAULT_MIN_HEIGHT,
            max_height: DEFAULT_MAX_HEIGHT,
            panel_aspect_ratio: None,
            allow_multiple: false,
            transparency_indicator: None,
        }
    }
}

impl PreviewOptions {
    /// Sizing configuration for one image and crop.
    pub fn viewport_config(
        &self,
        crop_aspect_ratio: Option<f64>,
        image_aspect_ratio: f64,
    ) -> ViewportConfig {
        ViewportConfig {
            fixed_height: self.fixed_height,
            min_height: self.min_height,
            max_height: self.max_height,
            panel_aspect_ratio: self.panel_aspect_ratio,
            allow_multiple: self.allow_multiple,
            crop_aspect_ratio,
            image_aspect_ratio,
        }
    }
}

/// Everything the rendering layer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewFrame {
    /// New clip size, `None` when layout was skipped
    pub clip: Option<ViewportSize>,
    /// 0.0 while layout is skipped, 1.0 otherwise
    pub clip_opacity: f64,
    pub transform: TransformOutput,
    pub flip: FlipScale,
    /// Marker for the clip element, `None` when no indicator is configured
    pub transparency_marker: Option<TransparencyMarker>,
}

impl PreviewFrame {
    /// Push the flip and transform into a rendering layer.
    pub fn apply_to<S: TransformSink + ?Sized>(&self, sink: &mut S) {
        sink.apply_flip(self.flip);
        self.transform.apply_to(sink);
    }
}

/// Compose the preview frame for `crop` of `image` inside `container`.
///
/// While `optimize` is set the clip is hidden and neither its size nor the
/// transform is recomputed.
pub fn compose_preview(
    image: &ImageSize,
    crop: &CropDescriptor,
    container: &ContainerSize,
    options: &PreviewOptions,
    optimize: bool,
) -> PreviewFrame {
    let flip = crop.flip.scale();
    let transparency_marker = options
        .transparency_indicator
        .as_ref()
        .map(TransparencyIndicator::marker);
    if optimize {
        return PreviewFrame {
            clip: None,
            clip_opacity: 0.0,
            transform: TransformOutput::Skipped,
            flip,
            transparency_marker,
        };
    }

    let config = options.viewport_config(crop.aspect_ratio, image.aspect_ratio());
    let clip = resolve_viewport_size(container, &config);
    let transform = resolve_transform(image, crop, &Rect::from_size(clip), false);

    PreviewFrame {
        clip: Some(clip),
        clip_opacity: 1.0,
        transform,
        flip,
        transparency_marker,
    }
}

/// Validate the inputs, then [`compose_preview`].
///
/// # Errors
///
/// Returns the first contract violation in the image, crop, container or
/// options. Nothing is checked when `optimize` is set.
pub fn try_compose_preview(
    image: &ImageSize,
    crop: &CropDescriptor,
    container: &ContainerSize,
    options: &PreviewOptions,
    optimize: bool,
) -> Result<PreviewFrame, GeometryError> {
    if !optimize {
        image.validate()?;
        crop.validate()?;
        let config = options.viewport_config(crop.aspect_ratio, image.aspect_ratio());
        crate::viewport::try_resolve_viewport_size(container, &config)?;
    }
    Ok(compose_preview(image, crop, container, options, optimize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Size, Vector};
    use crate::transform::{Flip, RenderTransform};

    #[test]
    fn test_default_options() {
        let options = PreviewOptions::default();
        assert_eq!(options.min_height, 44.0);
        assert_eq!(options.max_height, 256.0);
        assert!(!options.allow_multiple);
        assert!(options.transparency_indicator.is_none());
    }

    #[test]
    fn test_transparency_indicator_marker() {
        assert_eq!(
            TransparencyIndicator::from("grid".to_string()),
            TransparencyIndicator::Grid
        );
        let color = TransparencyIndicator::from("#f00".to_string());
        assert_eq!(color, TransparencyIndicator::Color("#f00".to_string()));
        assert_eq!(color.marker(), TransparencyMarker::Color);
        assert_eq!(color.marker().as_str(), "color");
        assert_eq!(TransparencyIndicator::Grid.marker().as_str(), "grid");
        assert_eq!(String::from(color), "#f00");
    }

    #[test]
    fn test_compose_carries_transparency_marker() {
        let image = ImageSize::new(100, 100);
        let container = Size::new(800.0, 600.0);
        let crop = CropDescriptor::default();

        for (setting, expected) in [
            (Some("grid"), Some(TransparencyMarker::Grid)),
            (Some("#fff"), Some(TransparencyMarker::Color)),
            (None, None),
        ] {
            let options = PreviewOptions {
                transparency_indicator: setting.map(|s| TransparencyIndicator::from(s.to_string())),
                ..PreviewOptions::default()
            };
            for optimize in [false, true] {
                let frame = compose_preview(&image, &crop, &container, &options, optimize);
                assert_eq!(
                    frame.transparency_marker, expected,
                    "setting {:?}, optimize {}",
                    setting, optimize
                );
            }
        }
    }

    #[test]
    fn test_compose_square_preview() {
        let image = ImageSize::new(1000, 1000);
        let frame = compose_preview(
            &image,
            &CropDescriptor::default(),
            &Size::new(800.0, 600.0),
            &PreviewOptions::default(),
            false,
        );

        // 800 clamped to the 256 default max height
        assert_eq!(frame.clip, Some(Size::new(256.0, 256.0)));
        assert_eq!(frame.clip_opacity, 1.0);

        let t = frame.transform.computed().copied().unwrap();
        assert!((t.scale_x - 0.256).abs() < 1e-9);
        assert_eq!((t.translate_x, t.translate_y), (-372.0, -372.0));
    }

    #[test]
    fn test_compose_uses_clip_as_stage() {
        let image = ImageSize::new(400, 200);
        let mut options = PreviewOptions::default();
        options.panel_aspect_ratio = Some(0.5);
        let frame = compose_preview(
            &image,
            &CropDescriptor::default(),
            &Size::new(400.0, 300.0),
            &options,
            false,
        );

        assert_eq!(frame.clip, Some(Size::new(400.0, 200.0)));
        let t = frame.transform.computed().copied().unwrap();
        assert!((t.scale_x - 1.0).abs() < 1e-9);
        assert_eq!((t.translate_x, t.translate_y), (0.0, 0.0));
    }

    #[test]
    fn test_compose_optimize_hides_clip() {
        let crop = CropDescriptor {
            flip: Flip {
                horizontal: true,
                vertical: false,
            },
            ..CropDescriptor::default()
        };
        let frame = compose_preview(
            &ImageSize::new(100, 100),
            &crop,
            &Size::new(800.0, 600.0),
            &PreviewOptions::default(),
            true,
        );

        assert_eq!(frame.clip, None);
        assert_eq!(frame.clip_opacity, 0.0);
        assert!(frame.transform.is_skipped());
        // Flip still follows the crop
        assert_eq!(frame.flip.scale_x, -1.0);
    }

    #[test]
    fn test_try_compose_rejects_edge_center() {
        let crop = CropDescriptor {
            center: Vector::new(0.5, 0.0),
            ..CropDescriptor::default()
        };
        let result = try_compose_preview(
            &ImageSize::new(100, 100),
            &crop,
            &Size::new(800.0, 600.0),
            &PreviewOptions::default(),
            false,
        );
        assert!(matches!(
            result,
            Err(GeometryError::DegenerateCenter { axis: 'y', .. })
        ));
    }

    #[test]
    fn test_try_compose_rejects_empty_container() {
        let result = try_compose_preview(
            &ImageSize::new(100, 100),
            &CropDescriptor::default(),
            &Size::new(0.0, 600.0),
            &PreviewOptions::default(),
            false,
        );
        assert!(result.is_err());
    }

    #[derive(Default)]
    struct Layer {
        transform: Option<RenderTransform>,
        flip: Option<FlipScale>,
    }

    impl TransformSink for Layer {
        fn apply_transform(&mut self, transform: &RenderTransform) {
            self.transform = Some(*transform);
        }

        fn apply_flip(&mut self, flip: FlipScale) {
            self.flip = Some(flip);
        }
    }

    #[test]
    fn test_skipped_frame_keeps_previous_transform() {
        let image = ImageSize::new(300, 200);
        let container = Size::new(600.0, 400.0);
        let options = PreviewOptions::default();
        let mut layer = Layer::default();

        let crop = CropDescriptor::default();
        compose_preview(&image, &crop, &container, &options, false).apply_to(&mut layer);
        let first = layer.transform;
        assert!(first.is_some());

        let rotated = CropDescriptor {
            rotation: 1.0,
            ..crop
        };
        compose_preview(&image, &rotated, &container, &options, true).apply_to(&mut layer);
        assert_eq!(layer.transform, first);
        assert_eq!(layer.flip, Some(FlipScale::default()));
    }
}
