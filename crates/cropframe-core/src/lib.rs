//! Cropframe Core - Crop preview geometry
//!
//! This crate computes how a cropped, rotated, zoomed and flipped image is
//! drawn so that the crop region exactly fills a fixed-aspect-ratio
//! viewport, and how large that viewport is inside a responsive container.
//!
//! # Pipeline
//!
//! Data flows one way, each stage a pure function:
//!
//! 1. [`viewport`] - container size and options to clip size
//! 2. [`transform`] - image, crop and clip to render transform
//! 3. [`geometry`] - vector and rectangle math used by both
//!
//! [`preview`] chains the stages for a single frame.

pub mod error;
pub mod geometry;
pub mod preview;
pub mod transform;
pub mod viewport;

pub use error::GeometryError;
pub use geometry::{centered_rect, rotated_rect_size, zoom_factor, Rect, Size, Vector};
pub use preview::{compose_preview, try_compose_preview, PreviewFrame, PreviewOptions};
pub use transform::{
    resolve_transform, try_resolve_transform, CropDescriptor, Flip, FlipScale, ImageSize,
    RenderTransform, TransformOutput, TransformSink,
};
pub use viewport::{resolve_viewport_size, try_resolve_viewport_size, ViewportConfig, ViewportSize};
