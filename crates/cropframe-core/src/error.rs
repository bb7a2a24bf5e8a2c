//! Contract violations reported by the validating entry points.

use thiserror::Error;

/// Error types for out-of-contract geometry inputs.
///
/// The unchecked resolvers assume positive, finite inputs and never produce
/// these. They come from the `validate` methods and the `try_*` functions,
/// which check the caller's preconditions before computing anything.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A value that must be finite was NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    /// A width, height or bound that must be strictly positive was not.
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    /// The pan center touches or leaves the image edge.
    #[error("crop center {axis} must lie strictly inside (0, 1), got {value}")]
    DegenerateCenter { axis: char, value: f64 },

    /// Zoom below zero. Zero itself is allowed.
    #[error("zoom must not be negative, got {0}")]
    NegativeZoom(f64),
}

/// Check that `value` is finite and strictly positive.
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<(), GeometryError> {
    if !value.is_finite() {
        return Err(GeometryError::NonFinite { field, value });
    }
    if value <= 0.0 {
        return Err(GeometryError::NonPositive { field, value });
    }
    Ok(())
}

/// Check that `value` is finite.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<(), GeometryError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFinite { field, value })
    }
}
