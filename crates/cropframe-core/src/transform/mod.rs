//! Crop state and the render transform derived from it.
//!
//! The rendering layer draws the source image in two nested layers:
//!
//! 1. A bitmap layer, mirrored by [`FlipScale`] and otherwise untouched
//! 2. A wrapper layer carrying the [`RenderTransform`]: rotation and uniform
//!    scale about the pan point, then a translation onto the stage center
//!
//! The stage itself clips to the crop's aspect ratio.
//!
//! # Coordinate System
//!
//! - Crop center is normalized (0.0 to 1.0) relative to image dimensions
//! - Rotation angles are in radians
//! - Origin is top-left corner

mod crop;
mod resolve;

pub use crop::{CropDescriptor, Flip, FlipScale, ImageSize};
pub use resolve::{
    resolve_transform, try_resolve_transform, RenderTransform, TransformOutput, TransformSink,
};
