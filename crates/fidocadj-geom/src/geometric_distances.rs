//! Distances between a point and drawing primitives, for selection.
//!
//! The distances are meant to tell which primitive lies under the pointer,
//! not to measure the drawing. Whenever a result is known to be at least
//! [`MIN_DISTANCE`] the functions skip the computation and return
//! `MIN_DISTANCE` itself. Callers compare against a selection tolerance far
//! below that value, so the exact size of a large distance never matters.
//!
//! Every function comes in an integer flavour, which truncates like the
//! device coordinates it usually receives, and an `_f64` flavour. All of
//! them are pure and can be called from any thread.

use fidocadj_core::constants::{MAX_BEZIER_SEGMENTS, MIN_DISTANCE};

use crate::map_coordinates::round_half_up;

const MIN_DISTANCE_F64: f64 = MIN_DISTANCE as f64;

/// Euclidean distance between two points, or `MIN_DISTANCE` when the points
/// are at least `MIN_DISTANCE` apart along either axis.
pub fn point_to_point_f64(xa: f64, ya: f64, xb: f64, yb: f64) -> f64 {
    let dx = xa - xb;
    let dy = ya - yb;
    if dx.abs() < MIN_DISTANCE_F64 && dy.abs() < MIN_DISTANCE_F64 {
        (dx * dx + dy * dy).sqrt()
    } else {
        MIN_DISTANCE_F64
    }
}

/// Integer version of [`point_to_point_f64`]; the distance is truncated.
pub fn point_to_point(xa: i32, ya: i32, xb: i32, yb: i32) -> i32 {
    point_to_point_f64(xa as f64, ya as f64, xb as f64, yb as f64) as i32
}

/// Distance between the point `(x, y)` and the segment from `(xa, ya)` to
/// `(xb, yb)`.
///
/// Points farther than `MIN_DISTANCE` from the bounding box of the segment
/// give `MIN_DISTANCE`. A segment of zero length is treated as a point.
pub fn point_to_segment_f64(xa: f64, ya: f64, xb: f64, yb: f64, x: f64, y: f64) -> f64 {
    if x < xa.min(xb) - MIN_DISTANCE_F64 || x > xa.max(xb) + MIN_DISTANCE_F64 {
        return MIN_DISTANCE_F64;
    }
    if y < ya.min(yb) - MIN_DISTANCE_F64 || y > ya.max(yb) + MIN_DISTANCE_F64 {
        return MIN_DISTANCE_F64;
    }

    // Evaluate from the lower endpoint so that both directions of the same
    // segment give bit-identical results.
    let ((xa, ya), (xb, yb)) = if (xb, yb) < (xa, ya) {
        ((xb, yb), (xa, ya))
    } else {
        ((xa, ya), (xb, yb))
    };

    let dx = xb - xa;
    let dy = yb - ya;
    if dx == 0.0 && dy == 0.0 {
        return point_to_point_f64(xa, ya, x, y);
    }

    let t = ((x - xa) * dx + (y - ya) * dy) / (dx * dx + dy * dy);
    let (ex, ey) = if t < 0.0 {
        (x - xa, y - ya)
    } else if t > 1.0 {
        (x - xb, y - yb)
    } else {
        (x - (xa + t * dx), y - (ya + t * dy))
    };
    (ex * ex + ey * ey).sqrt()
}

/// Integer version of [`point_to_segment_f64`]; the distance is truncated.
pub fn point_to_segment(xa: i32, ya: i32, xb: i32, yb: i32, x: i32, y: i32) -> i32 {
    point_to_segment_f64(
        xa as f64, ya as f64, xb as f64, yb as f64, x as f64, y as f64,
    ) as i32
}

/// Tells whether `(x, y)` lies inside the polygon whose vertices are given
/// by the parallel slices `xs` and `ys`, using the even-odd rule.
///
/// Extra coordinates in the longer slice are ignored.
pub fn point_in_polygon<T>(xs: &[T], ys: &[T], x: f64, y: f64) -> bool
where
    T: Copy + Into<f64>,
{
    let n = xs.len().min(ys.len());
    if n == 0 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi): (f64, f64) = (xs[i].into(), ys[i].into());
        let (xj, yj): (f64, f64) = (xs[j].into(), ys[j].into());
        if ((yi <= y && y < yj) || (yj <= y && y < yi))
            && x < (xj - xi) * (y - yi) / (yj - yi) + xi
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Tells whether `(px, py)` lies inside the ellipse inscribed in the box
/// with top-left corner `(ex, ey)`, width `w` and height `h`.
pub fn point_in_ellipse_f64(ex: f64, ey: f64, w: f64, h: f64, px: f64, py: f64) -> bool {
    let dx = (px - (ex + w / 2.0)).abs();
    let dy = (py - (ey + h / 2.0)).abs();
    if dx > w / 2.0 || dy > h / 2.0 {
        return false;
    }
    // Semi-axes are half the width and height, hence the factor four.
    4.0 * dx * dx / w / w + 4.0 * dy * dy / h / h < 1.0
}

/// Integer version of [`point_in_ellipse_f64`], computed in double precision.
pub fn point_in_ellipse(ex: i32, ey: i32, w: i32, h: i32, px: i32, py: i32) -> bool {
    point_in_ellipse_f64(
        ex as f64, ey as f64, w as f64, h as f64, px as f64, py as f64,
    )
}

/// Distance between `(px, py)` and the contour of the ellipse inscribed in
/// the box `(ex, ey, w, h)`.
///
/// The value is zero on the contour and grows both inside and outside. An
/// ellipse of zero width or height is measured as the segment it collapses
/// to.
pub fn point_to_ellipse_f64(ex: f64, ey: f64, w: f64, h: f64, px: f64, py: f64) -> f64 {
    if w == 0.0 {
        return point_to_segment_f64(ex, ey, ex, ey + h, px, py);
    }
    if h == 0.0 {
        return point_to_segment_f64(ex, ey, ex + w, ey, px, py);
    }
    let dx = (px - (ex + w / 2.0)).abs();
    let dy = (py - (ey + h / 2.0)).abs();
    let l = (dx * dx / w / w + dy * dy / h / h) * 4.0;
    (l - 1.0).abs() * w.min(h) / 4.0
}

/// Integer version of [`point_to_ellipse_f64`]; the distance is rounded.
pub fn point_to_ellipse(ex: i32, ey: i32, w: i32, h: i32, px: i32, py: i32) -> i32 {
    round_half_up(point_to_ellipse_f64(
        ex as f64, ey as f64, w as f64, h as f64, px as f64, py as f64,
    )) as i32
}

/// Tells whether `(px, py)` lies inside the rectangle `(ex, ey, w, h)`,
/// borders included.
pub fn point_in_rectangle_f64(ex: f64, ey: f64, w: f64, h: f64, px: f64, py: f64) -> bool {
    !(ex > px || px > ex + w || ey > py || py > ey + h)
}

/// Integer version of [`point_in_rectangle_f64`], computed in double
/// precision.
pub fn point_in_rectangle(ex: i32, ey: i32, w: i32, h: i32, px: i32, py: i32) -> bool {
    point_in_rectangle_f64(
        ex as f64, ey as f64, w as f64, h as f64, px as f64, py as f64,
    )
}

/// Distance between `(px, py)` and the nearest side of the rectangle
/// `(ex, ey, w, h)`.
pub fn point_to_rectangle_f64(ex: f64, ey: f64, w: f64, h: f64, px: f64, py: f64) -> f64 {
    let d1 = point_to_segment_f64(ex, ey, ex + w, ey, px, py);
    let d2 = point_to_segment_f64(ex + w, ey, ex + w, ey + h, px, py);
    let d3 = point_to_segment_f64(ex + w, ey + h, ex, ey + h, px, py);
    let d4 = point_to_segment_f64(ex, ey + h, ex, ey, px, py);
    d1.min(d2).min(d3.min(d4))
}

/// Integer version of [`point_to_rectangle_f64`]; the distance is truncated.
pub fn point_to_rectangle(ex: i32, ey: i32, w: i32, h: i32, px: i32, py: i32) -> i32 {
    point_to_rectangle_f64(
        ex as f64, ey as f64, w as f64, h as f64, px as f64, py as f64,
    ) as i32
}

/// Bernstein coefficients of a cubic Bézier curve at parameter `u`.
fn bernstein(u: f64) -> [f64; 4] {
    let umu = 1.0 - u;
    [
        umu * umu * umu,
        3.0 * u * umu * umu,
        3.0 * u * u * umu,
        u * u * u,
    ]
}

pub(crate) fn bezier_samples(p: [(f64, f64); 4]) -> [(f64, f64); MAX_BEZIER_SEGMENTS + 1] {
    let mut samples = [(0.0, 0.0); MAX_BEZIER_SEGMENTS + 1];
    for (i, sample) in samples.iter_mut().enumerate() {
        let b = bernstein(i as f64 / MAX_BEZIER_SEGMENTS as f64);
        sample.0 = p[0].0 * b[0] + p[1].0 * b[1] + p[2].0 * b[2] + p[3].0 * b[3];
        sample.1 = p[0].1 * b[0] + p[1].1 * b[1] + p[2].1 * b[2] + p[3].1 * b[3];
    }
    samples
}

/// Approximate distance between `(px, py)` and the cubic Bézier curve with
/// control points 1 to 4.
///
/// The curve is split into `MAX_BEZIER_SEGMENTS` linear pieces at uniform
/// parameter steps; sampled vertices are truncated to integers.
#[allow(clippy::too_many_arguments)]
pub fn point_to_bezier(
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    x3: i32,
    y3: i32,
    x4: i32,
    y4: i32,
    px: i32,
    py: i32,
) -> i32 {
    let samples = bezier_samples([
        (x1 as f64, y1 as f64),
        (x2 as f64, y2 as f64),
        (x3 as f64, y3 as f64),
        (x4 as f64, y4 as f64),
    ]);
    samples
        .windows(2)
        .map(|w| {
            point_to_segment(
                w[0].0 as i32,
                w[0].1 as i32,
                w[1].0 as i32,
                w[1].1 as i32,
                px,
                py,
            )
        })
        .fold(i32::MAX, i32::min)
}

/// Double precision version of [`point_to_bezier`]; samples are not
/// truncated.
#[allow(clippy::too_many_arguments)]
pub fn point_to_bezier_f64(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
    px: f64,
    py: f64,
) -> f64 {
    let samples = bezier_samples([(x1, y1), (x2, y2), (x3, y3), (x4, y4)]);
    samples
        .windows(2)
        .map(|w| point_to_segment_f64(w[0].0, w[0].1, w[1].0, w[1].1, px, py))
        .fold(f64::INFINITY, f64::min)
}
