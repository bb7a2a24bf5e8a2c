//! Axis-aligned rectangles and their rotated bounding boxes.
//!
//! # Algorithm
//!
//! Rotating a `w x h` rectangle by θ moves each edge endpoint off its
//! original axis. Treating an edge of length `l` as the hypotenuse of a right
//! triangle whose other angles are θ and `π/2 - θ`, the law of sines gives
//! the two legs, and projecting them yields the offset of the endpoint:
//!
//! ```text
//! offset(l, θ) = (l * sin²θ, l * sinθ * cosθ)
//! ```
//!
//! Three corners of the bounding box are built from the width and height
//! offsets and the box size is the distance between them, which works out to
//!
//! ```text
//! width  = w*|cosθ| + h*|sinθ|
//! height = w*|sinθ| + h*|cosθ|
//! ```

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use super::{Size, Vector};

/// Axis-aligned rectangle in stage coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle at the origin covering `size`.
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Vector {
        Vector::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

/// Offset of a rotated edge's endpoint from its unrotated position.
///
/// Solves the right triangle with hypotenuse `length` and angles
/// `rotation` and `π/2 - rotation` using the law of sines.
///
/// # Arguments
///
/// * `length` - Length of the edge being rotated
/// * `rotation` - Rotation angle in radians
pub fn offset_point_on_edge(length: f64, rotation: f64) -> Vector {
    let a = FRAC_PI_2;
    let b = rotation;
    let c = FRAC_PI_2 - rotation;

    let ratio = length / a.sin();
    let side_b = ratio * b.sin();
    let side_c = ratio * c.sin();
    let cos_c = c.cos();

    Vector::new(cos_c * side_b, cos_c * side_c)
}

/// Compute the axis-aligned bounding size of `rect` rotated by `rotation`.
///
/// # Arguments
///
/// * `rect` - Rectangle to rotate
/// * `rotation` - Rotation angle in radians, any value in `[0, 2π)`
///
/// # Returns
///
/// Width and height of the bounding box. A rotation of zero (or π) returns
/// the rectangle's own size, π/2 swaps the dimensions.
pub fn rotated_rect_size(rect: &Rect, rotation: f64) -> Size {
    let hor = offset_point_on_edge(rect.width, rotation);
    let ver = offset_point_on_edge(rect.height, rotation);

    let top_left = Vector::new(rect.x + hor.x.abs(), rect.y - hor.y.abs());
    let top_right = Vector::new(rect.x + rect.width + ver.y.abs(), rect.y + ver.x.abs());
    let bottom_left = Vector::new(rect.x - ver.y.abs(), rect.y + rect.height - ver.x.abs());

    Size::new(
        top_left.distance(top_right),
        top_left.distance(bottom_left),
    )
}

/// Fit the largest rectangle of `aspect_ratio` inside `container`, centered.
///
/// The rectangle spans the full container width unless that makes it too
/// tall, in which case it spans the full height instead.
///
/// # Arguments
///
/// * `container` - Available area; only its width and height are used
/// * `aspect_ratio` - Target `height / width`, must be positive
pub fn centered_rect(container: &Rect, aspect_ratio: f64) -> Rect {
    debug_assert!(aspect_ratio > 0.0, "aspect ratio must be positive");

    let mut width = container.width;
    let mut height = width * aspect_ratio;
    if height > container.height {
        height = container.height;
        width = height / aspect_ratio;
    }

    Rect::new(
        (container.width - width) * 0.5,
        (container.height - height) * 0.5,
        width,
        height,
    )
}


// ============================================================================
// Property-Based Tests
// ============================================================================
