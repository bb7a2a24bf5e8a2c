use std::ops::Sub;

use serde::{Deserialize, Serialize};

/// A point or offset in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn subtract(self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }

    pub fn dot(self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn distance_squared(self, other: Vector) -> f64 {
        let d = self - other;
        d.dot(d)
    }

    /// Euclidean distance between two points.
    pub fn distance(self, other: Vector) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        self.subtract(rhs)
    }
}
