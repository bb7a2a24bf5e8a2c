//! Plane geometry used by the transform resolver.
//!
//! Everything here is a pure function over small `Copy` value types.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, y grows downwards
//! - Angles are in radians
//! - Aspect ratios are `height / width`

mod rect;
mod vector;
mod zoom;

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

pub use rect::{centered_rect, offset_point_on_edge, rotated_rect_size, Rect};
pub use vector::Vector;
pub use zoom::zoom_factor;

/// A width/height pair in stage units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `height / width`.
    pub fn aspect_ratio(&self) -> f64 {
        self.height / self.width
    }
}

/// Wrap an angle in radians into `[0, 2π)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly `2π`, which is
/// folded back to zero.
pub fn normalize_rotation(radians: f64) -> f64 {
    let wrapped = radians.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
