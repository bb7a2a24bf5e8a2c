//! Crop state as supplied by the editing UI.
//!
//! # Coordinate System
//!
//! - `center` is normalized: (0.0, 0.0) = top-left, (1.0, 1.0) = bottom-right
//! - `rotation` is in radians
//! - `aspect_ratio` is `height / width`; `None` follows the image

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ensure_positive, GeometryError};
use crate::geometry::{Size, Vector};

/// Intrinsic pixel size of the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn as_size(&self) -> Size {
        Size::new(self.width as f64, self.height as f64)
    }

    /// `height / width` of the image.
    pub fn aspect_ratio(&self) -> f64 {
        self.height as f64 / self.width as f64
    }

    /// Check that both dimensions are non-zero.
    pub fn validate(&self) -> Result<(), GeometryError> {
        ensure_positive("image width", self.width as f64)?;
        ensure_positive("image height", self.height as f64)
    }
}

/// Mirroring applied to the unrotated bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Flip {
    pub horizontal: bool,
    pub vertical: bool,
}

impl Flip {
    /// Scale multipliers for the bitmap layer beneath the render transform.
    pub fn scale(&self) -> FlipScale {
        FlipScale {
            scale_x: if self.horizontal { -1.0 } else { 1.0 },
            scale_y: if self.vertical { -1.0 } else { 1.0 },
        }
    }
}

/// Per-axis mirror factor, each either `1.0` or `-1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlipScale {
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Default for FlipScale {
    fn default() -> Self {
        Flip::default().scale()
    }
}

/// Pan, zoom, rotation and flip state of a crop.
///
/// Owned by the caller and never mutated by the resolvers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropDescriptor {
    /// Pan center (0.0 to 1.0 on each axis, exclusive)
    pub center: Vector,
    /// Zoom multiplier (0.0 and up, 1.0 = crop just covered)
    pub zoom: f64,
    /// Rotation in radians
    pub rotation: f64,
    /// Target `height / width`, or `None` for the image's own ratio
    #[serde(default)]
    pub aspect_ratio: Option<f64>,
    #[serde(default)]
    pub flip: Flip,
}

impl Default for CropDescriptor {
    fn default() -> Self {
        Self {
            center: Vector::new(0.5, 0.5),
            zoom: 1.0,
            rotation: 0.0,
            aspect_ratio: None,
            flip: Flip::default(),
        }
    }
}

impl CropDescriptor {
    /// Aspect ratio the crop is rendered at for the given image.
    pub fn resolved_aspect_ratio(&self, image: &ImageSize) -> f64 {
        self.aspect_ratio.unwrap_or_else(|| image.aspect_ratio())
    }

    /// Check the caller-side preconditions of the transform resolver.
    ///
    /// # Errors
    ///
    /// - `DegenerateCenter` if a center component is not strictly inside (0, 1)
    /// - `NegativeZoom` for zoom below zero
    /// - `NonPositive` for a zero or negative explicit aspect ratio
    /// - `NonFinite` for NaN or infinite values
    pub fn validate(&self) -> Result<(), GeometryError> {
        for (axis, value) in [('x', self.center.x), ('y', self.center.y)] {
            if !(value > 0.0 && value < 1.0) {
                return Err(GeometryError::DegenerateCenter { axis, value });
            }
        }
        ensure_finite("zoom", self.zoom)?;
        if self.zoom < 0.0 {
            return Err(GeometryError::NegativeZoom(self.zoom));
        }
        ensure_finite("rotation", self.rotation)?;
        if let Some(aspect_ratio) = self.aspect_ratio {
            ensure_positive("crop aspect ratio", aspect_ratio)?;
        }
        Ok(())
    }
}
