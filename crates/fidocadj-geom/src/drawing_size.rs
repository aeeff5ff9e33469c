//! Size, origin and zoom-to-fit of a whole drawing.
//!
//! The extent of a drawing is found by rendering it on a [`NullGraphics`]
//! sink through a fresh [`CoordinateMapper`]; the mapper's bounding box then
//! holds the device coordinates of every primitive.

use fidocadj_core::constants::MIN_MAGNITUDE;
use fidocadj_core::{DimensionG, PointG};
use tracing::debug;

use crate::drawing::DrawingModel;
use crate::graphics::NullGraphics;
use crate::map_coordinates::{round_half_up, CoordinateMapper};

/// Size and origin of a drawing, in device units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageExtent {
    pub size: DimensionG,
    pub origin: PointG,
}

/// Renders the model at the given magnitude and returns the mapper holding
/// the bounding box.
fn track_drawing<M>(model: &mut M, unit_per_pixel: f64) -> CoordinateMapper
where
    M: DrawingModel + ?Sized,
{
    let mut m = CoordinateMapper::new();
    m.set_magnitudes(unit_per_pixel, unit_per_pixel);
    m.set_x_center(0.0);
    m.set_y_center(0.0);

    // Force cached geometry to be rebuilt at this magnitude.
    model.set_changed(true);
    model.draw(&mut NullGraphics, &mut m);
    model.track_extreme_points(&mut m);
    model.set_changed(true);
    m
}

fn tracked_origin(m: &CoordinateMapper) -> PointG {
    if m.has_valid_bounds() {
        PointG::new(m.x_min(), m.y_min())
    } else {
        PointG::new(0, 0)
    }
}

/// Computes the size of the drawing.
///
/// With `count_min` the size spans from the smallest to the largest tracked
/// coordinate; without it the size spans from the logical origin to the
/// largest coordinate. Sizes are at least 1. The origin is the smallest
/// tracked point, or `(0, 0)` for an empty drawing.
pub fn image_size<M>(model: &mut M, unit_per_pixel: f64, count_min: bool) -> ImageExtent
where
    M: DrawingModel + ?Sized,
{
    let m = track_drawing(model, unit_per_pixel);

    let (mut width, mut height) = if !m.has_valid_bounds() {
        (0, 0)
    } else if count_min {
        (
            m.x_max().saturating_sub(m.x_min()),
            m.y_max().saturating_sub(m.y_min()),
        )
    } else {
        (m.x_max(), m.y_max())
    };
    if width <= 0 {
        width = 1;
    }
    if height <= 0 {
        height = 1;
    }

    let extent = ImageExtent {
        size: DimensionG::new(width, height),
        origin: tracked_origin(&m),
    };
    debug!(
        size = %extent.size,
        origin = %extent.origin,
        unit_per_pixel,
        count_min,
        "Computed image size"
    );
    extent
}

/// Returns the smallest tracked point of the drawing, or `(0, 0)` when the
/// drawing is empty.
pub fn image_origin<M>(model: &mut M, unit_per_pixel: f64) -> PointG
where
    M: DrawingModel + ?Sized,
{
    let m = track_drawing(model, unit_per_pixel);
    tracked_origin(&m)
}

/// Computes a mapper that makes the drawing fit a viewport of
/// `size_x` × `size_y` pixels.
///
/// The same magnitude is used on both axes, the smaller of the two that
/// would fill each dimension, rounded to two decimals and never below
/// `MIN_MAGNITUDE`. The center places the drawing origin on the top-left
/// corner of the viewport. Without `count_min` the logical origin `(0, 0)`
/// is used as the drawing origin.
pub fn zoom_to_fit<M>(model: &mut M, size_x: i32, size_y: i32, count_min: bool) -> CoordinateMapper
where
    M: DrawingModel + ?Sized,
{
    let extent = image_size(model, 1.0, count_min);
    let origin = if count_min {
        extent.origin
    } else {
        PointG::new(0, 0)
    };

    let zoom_x = size_x as f64 / extent.size.width as f64;
    let zoom_y = size_y as f64 / extent.size.height as f64;
    let mut z = round_half_up(zoom_x.min(zoom_y) * 100.0) / 100.0;
    if z.is_nan() || z < MIN_MAGNITUDE {
        z = MIN_MAGNITUDE;
    }

    let mut fit = CoordinateMapper::new();
    // Already rounded; the upper limit is not applied here.
    fit.set_magnitudes_no_check(z, z);
    fit.set_x_center(-(origin.x as f64) * z);
    fit.set_y_center(-(origin.y as f64) * z);

    debug!(
        zoom = z,
        viewport_width = size_x,
        viewport_height = size_y,
        origin = %origin,
        "Computed zoom to fit"
    );
    fit
}
