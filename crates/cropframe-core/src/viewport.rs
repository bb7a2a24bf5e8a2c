//! Viewport sizing policy.
//!
//! Chooses the pixel size of the crop viewport (the clip) inside a
//! responsive container.
//!
//! ## Resolution Order
//! 1. Pick the aspect ratio: crop ratio, else image ratio
//! 2. A panel aspect ratio overrides both ratio and height in single-item mode
//! 3. Height: fixed height, else container width at that ratio, clamped to
//!    the min/max bounds
//! 4. Width from height
//! 5. Fit the container width (may break the min/max bounds)
//! 6. Fit the container height (always wins)

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ensure_positive, GeometryError};
use crate::geometry::Size;

/// Available area the viewport is placed in.
pub type ContainerSize = Size;

/// Resolved viewport dimensions.
pub type ViewportSize = Size;

/// Inputs of [`resolve_viewport_size`] besides the container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportConfig {
    /// Exact viewport height, bypassing the min/max clamp
    pub fixed_height: Option<f64>,
    pub min_height: f64,
    pub max_height: f64,
    /// Ratio of the whole panel in single-item mode
    pub panel_aspect_ratio: Option<f64>,
    pub allow_multiple: bool,
    /// Crop `height / width`, when the crop has one
    pub crop_aspect_ratio: Option<f64>,
    /// Image `height / width`
    pub image_aspect_ratio: f64,
}

impl ViewportConfig {
    /// Aspect ratio and fixed height after the panel override.
    fn effective_ratio_and_height(&self, container: &ContainerSize) -> (f64, Option<f64>) {
        let aspect_ratio = self.crop_aspect_ratio.unwrap_or(self.image_aspect_ratio);
        match self.panel_aspect_ratio {
            Some(panel) if !self.allow_multiple => (panel, Some(container.width * panel)),
            _ => (aspect_ratio, self.fixed_height),
        }
    }

    /// Check the caller-side preconditions of the sizing policy.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if let Some(fixed_height) = self.fixed_height {
            ensure_positive("fixed height", fixed_height)?;
        }
        ensure_finite("min height", self.min_height)?;
        ensure_positive("max height", self.max_height)?;
        if let Some(panel) = self.panel_aspect_ratio {
            ensure_positive("panel aspect ratio", panel)?;
        }
        if let Some(crop) = self.crop_aspect_ratio {
            ensure_positive("crop aspect ratio", crop)?;
        }
        ensure_positive("image aspect ratio", self.image_aspect_ratio)
    }
}

/// Compute the viewport size for `container`.
///
/// The result never exceeds the container. Width containment is resolved
/// before height containment, so a narrow, short container can apply both.
///
/// Inputs are assumed positive and finite, see [`try_resolve_viewport_size`].
///
/// # Example
///
/// ```text
/// let config = ViewportConfig {
///     fixed_height: None,
///     min_height: 100.0,
///     max_height: 500.0,
///     panel_aspect_ratio: None,
///     allow_multiple: true,
///     crop_aspect_ratio: Some(1.0),
///     image_aspect_ratio: 0.75,
/// };
/// let size = resolve_viewport_size(&Size::new(800.0, 600.0), &config);
/// assert_eq!(size, Size::new(500.0, 500.0));
/// ```
pub fn resolve_viewport_size(container: &ContainerSize, config: &ViewportConfig) -> ViewportSize {
    let (aspect_ratio, fixed_height) = config.effective_ratio_and_height(container);

    let mut height = fixed_height.unwrap_or_else(|| {
        (container.width * aspect_ratio)
            .min(config.max_height)
            .max(config.min_height)
    });
    let mut width = height / aspect_ratio;

    if width > container.width {
        width = container.width;
        height = width * aspect_ratio;
    }

    if height > container.height {
        height = container.height;
        width = height / aspect_ratio;
    }

    let size = Size::new(width, height);
    log::trace!("resolved viewport {:?} in container {:?}", size, container);
    size
}

/// Validate the inputs, then [`resolve_viewport_size`].
///
/// # Errors
///
/// Returns the first non-positive or non-finite value found.
pub fn try_resolve_viewport_size(
    container: &ContainerSize,
    config: &ViewportConfig,
) -> Result<ViewportSize, GeometryError> {
    ensure_positive("container width", container.width)
        .and_then(|()| ensure_positive("container height", container.height))
        .and_then(|()| config.validate())
        .inspect_err(|err| log::debug!("rejected viewport input: {}", err))?;
    Ok(resolve_viewport_size(container, config))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
