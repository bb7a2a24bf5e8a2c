use super::{rotated_rect_size, Rect, Size, Vector};

/// Minimum uniform scale at which the image covers the rotated crop rect.
///
/// The image can only extend symmetrically around the pan center as far as
/// its nearest edge, so the usable image area is twice the distance from the
/// center to the closer edge on each axis. The larger of the two axis ratios
/// leaves no uncovered gap.
///
/// # Arguments
///
/// * `image` - Intrinsic image size in pixels
/// * `crop_rect` - Crop rectangle in stage units, before rotation
/// * `rotation` - Rotation in radians
/// * `center` - Pan center, normalized; both components strictly inside (0, 1)
pub fn zoom_factor(image: Size, crop_rect: &Rect, rotation: f64, center: Vector) -> f64 {
    debug_assert!(
        center.x > 0.0 && center.x < 1.0 && center.y > 0.0 && center.y < 1.0,
        "pan center must lie strictly inside the image"
    );

    let cx = center.x.min(1.0 - center.x);
    let cy = center.y.min(1.0 - center.y);
    let available_width = cx * 2.0 * image.width;
    let available_height = cy * 2.0 * image.height;

    let rotated = rotated_rect_size(crop_rect, rotation);

    (rotated.width / available_width).max(rotated.height / available_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_crop_matches_image() {
        let factor = zoom_factor(
            Size::new(100.0, 100.0),
            &Rect::new(0.0, 0.0, 100.0, 100.0),
            0.0,
            Vector::new(0.5, 0.5),
        );
        assert!((factor - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_smaller_stage_scales_down() {
        let factor = zoom_factor(
            Size::new(1000.0, 1000.0),
            &Rect::new(0.0, 0.0, 250.0, 250.0),
            0.0,
            Vector::new(0.5, 0.5),
        );
        assert!((factor - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_off_center_pan_needs_more_zoom() {
        let image = Size::new(100.0, 100.0);
        let crop = Rect::new(0.0, 0.0, 100.0, 100.0);
        // Only 50 pixels of image remain to the right of the pan point
        let centered = zoom_factor(image, &crop, 0.0, Vector::new(0.5, 0.5));
        let panned = zoom_factor(image, &crop, 0.0, Vector::new(0.75, 0.5));
        assert!((panned - 2.0).abs() < 1e-9);
        assert!(panned > centered);
    }

    #[test]
    fn test_pan_symmetry() {
        let image = Size::new(300.0, 200.0);
        let crop = Rect::new(0.0, 0.0, 120.0, 80.0);
        let left = zoom_factor(image, &crop, 0.4, Vector::new(0.3, 0.6));
        let right = zoom_factor(image, &crop, 0.4, Vector::new(0.7, 0.4));
        assert!((left - right).abs() < 1e-9);
    }

    #[test]
    fn test_quarter_turn_uses_swapped_crop() {
        // Wide image, wide crop: after a quarter turn the crop is tall
        let image = Size::new(200.0, 100.0);
        let crop = Rect::new(0.0, 0.0, 200.0, 100.0);
        let factor = zoom_factor(image, &crop, FRAC_PI_2, Vector::new(0.5, 0.5));
        // Rotated crop is 100 x 200, limited by height: 200 / 100
        assert!((factor - 2.0).abs() < 1e-9);
    }
}
