//! Render transform that makes the crop region fill the stage.
//!
//! # Algorithm
//!
//! 1. Fit a rect of the crop's aspect ratio inside the stage
//! 2. Measure that rect's bounding box at the crop rotation
//! 3. Find the smallest scale at which the image, panned to the crop center,
//!    still covers the bounding box ([`zoom_factor`])
//! 4. Multiply by the user zoom
//! 5. Pivot on the pan point and translate it onto the stage center

use serde::{Deserialize, Serialize};

use super::crop::{CropDescriptor, FlipScale, ImageSize};
use crate::error::{ensure_finite, ensure_positive, GeometryError};
use crate::geometry::{centered_rect, normalize_rotation, zoom_factor, Rect};

/// Placement of the image layer inside the stage.
///
/// Origin is the rotation and scale pivot in image pixels, translation
/// shifts the image so the pivot lands on the stage center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderTransform {
    pub origin_x: f64,
    pub origin_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    /// Rotation in radians, within `[0, 2π)`
    pub rotate_z: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

/// Result of resolving a transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TransformOutput {
    /// Freshly computed placement.
    Computed(RenderTransform),
    /// Layout was skipped; the consumer keeps whatever it applied last.
    Skipped,
}

impl TransformOutput {
    pub fn is_skipped(&self) -> bool {
        matches!(self, TransformOutput::Skipped)
    }

    /// The computed transform, if layout was not skipped.
    pub fn computed(&self) -> Option<&RenderTransform> {
        match self {
            TransformOutput::Computed(transform) => Some(transform),
            TransformOutput::Skipped => None,
        }
    }

    /// Hand this output to a rendering layer.
    pub fn apply_to<S: TransformSink + ?Sized>(&self, sink: &mut S) {
        match self {
            TransformOutput::Computed(transform) => sink.apply_transform(transform),
            TransformOutput::Skipped => sink.keep_transform(),
        }
    }
}

/// A rendering layer that consumes resolved transforms.
pub trait TransformSink {
    /// Replace the image layer's transform.
    fn apply_transform(&mut self, transform: &RenderTransform);

    /// Layout was skipped this frame. Leave the current transform untouched.
    fn keep_transform(&mut self) {}

    /// Mirror the bitmap beneath the transformed layer.
    fn apply_flip(&mut self, flip: FlipScale);
}

/// Resolve the transform that renders `crop` of `image` filling `stage`.
///
/// With `optimize` set the layout is skipped and [`TransformOutput::Skipped`]
/// is returned without looking at the other inputs, so this is safe to call
/// on every animation frame.
///
/// Inputs are assumed to satisfy [`CropDescriptor::validate`], a non-empty
/// image and a stage of positive size. Use [`try_resolve_transform`] when
/// they come from an untrusted source.
///
/// # Arguments
///
/// * `image` - Intrinsic image size
/// * `crop` - Crop state
/// * `stage` - Viewport rect the crop must fill
/// * `optimize` - Skip layout for this call
pub fn resolve_transform(
    image: &ImageSize,
    crop: &CropDescriptor,
    stage: &Rect,
    optimize: bool,
) -> TransformOutput {
    if optimize {
        return TransformOutput::Skipped;
    }

    let image_size = image.as_size();
    let rotation = normalize_rotation(crop.rotation);
    let crop_rect = centered_rect(stage, crop.resolved_aspect_ratio(image));
    let scale = crop.zoom * zoom_factor(image_size, &crop_rect, rotation, crop.center);

    let stage_center = stage.center();
    let origin_x = crop.center.x * image_size.width;
    let origin_y = crop.center.y * image_size.height;

    let transform = RenderTransform {
        origin_x,
        origin_y,
        translate_x: stage_center.x - origin_x,
        translate_y: stage_center.y - origin_y,
        rotate_z: rotation,
        scale_x: scale,
        scale_y: scale,
    };
    log::trace!("resolved transform {:?} for stage {:?}", transform, stage);

    TransformOutput::Computed(transform)
}

/// Validate the inputs, then [`resolve_transform`].
///
/// # Errors
///
/// Returns the first contract violation found in `image`, `crop` or `stage`.
/// Nothing is checked when `optimize` is set, as nothing is computed.
pub fn try_resolve_transform(
    image: &ImageSize,
    crop: &CropDescriptor,
    stage: &Rect,
    optimize: bool,
) -> Result<TransformOutput, GeometryError> {
    if !optimize {
        validate_inputs(image, crop, stage).inspect_err(|err| {
            log::debug!("rejected transform input: {}", err);
        })?;
    }
    Ok(resolve_transform(image, crop, stage, optimize))
}

fn validate_inputs(
    image: &ImageSize,
    crop: &CropDescriptor,
    stage: &Rect,
) -> Result<(), GeometryError> {
    image.validate()?;
    crop.validate()?;
    ensure_finite("stage x", stage.x)?;
    ensure_finite("stage y", stage.y)?;
    ensure_positive("stage width", stage.width)?;
    ensure_positive("stage height", stage.height)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
