//! Line and shape rasterization.
//!
//! Implements a parametric (DDA-style) line rasterizer and the shape
//! helpers built on top of it: polylines/closed shapes, axis-aligned boxes,
//! crosses and circle boundary points.
//!
//! # Algorithm
//!
//! Lines are sampled parametrically with a Manhattan-length step count:
//! `len = |dx| + |dy|` samples are taken along the segment, each rounded
//! with `+0.5` and truncated to a pixel coordinate. This is deliberately
//! not Bresenham; sample positions and counts differ.

use crate::coord::Coord;
use crate::image::Image;
use crate::pixel::Pixel;

// ============================================================================
// Line Drawing
// ============================================================================

/// Draw a discrete approximation of the segment from (x1, y1) to (x2, y2).
///
/// Samples the segment at `floor(|dx| + |dy|) + 1` parametric positions,
/// rounding each to the nearest pixel. Pixels outside the image bounds are
/// silently skipped; no error is raised for out-of-bounds endpoints. A
/// zero-length segment plots the single rounded point.
pub fn draw_line<T: Pixel>(im: &mut Image<T>, x1: f64, y1: f64, x2: f64, y2: f64, color: T) {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let len = dx.abs() + dy.abs();

    if len == 0.0 {
        im.set(Coord::new((x1 + 0.5) as i32, (y1 + 0.5) as i32), color);
        return;
    }

    for t in 0..=(len as i32) {
        let x = (x1 + f64::from(t) / len * dx + 0.5) as i32;
        let y = (y1 + f64::from(t) / len * dy + 0.5) as i32;
        im.set(Coord::new(x, y), color);
    }
}

/// Draw a line between two integer coordinates.
pub fn draw_line_at<T: Pixel>(im: &mut Image<T>, p1: Coord, p2: Coord, color: T) {
    draw_line(
        im,
        f64::from(p1.x),
        f64::from(p1.y),
        f64::from(p2.x),
        f64::from(p2.y),
        color,
    );
}

// ============================================================================
// Shapes
// ============================================================================

/// Draw a closed shape through `points`, each translated by `offset`.
///
/// A line is drawn between every consecutive pair of points, then the shape
/// is closed with a line from the last point back to the first. An empty
/// slice draws nothing; a single point degenerates to one pixel.
pub fn draw_shape<T: Pixel>(im: &mut Image<T>, offset: Coord, points: &[Coord], color: T) {
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return;
    };
    for pair in points.windows(2) {
        draw_line_at(im, pair[0] + offset, pair[1] + offset, color);
    }
    draw_line_at(im, last + offset, first + offset, color);
}

/// Draw the four edges of the axis-aligned rectangle with the given corners.
///
/// Corner ordering is not validated; inverted corners still draw four lines
/// but not a visually proper box.
pub fn draw_box<T: Pixel>(im: &mut Image<T>, upper_left: Coord, lower_right: Coord, color: T) {
    let ul = upper_left;
    let lr = lower_right;
    draw_line_at(im, ul, Coord::new(ul.x, lr.y), color);
    draw_line_at(im, ul, Coord::new(lr.x, ul.y), color);
    draw_line_at(im, Coord::new(ul.x, lr.y), lr, color);
    draw_line_at(im, Coord::new(lr.x, ul.y), lr, color);
}

/// Draw a cross centered at `center` with arms of `arm_length` pixels.
pub fn draw_cross<T: Pixel>(im: &mut Image<T>, center: Coord, arm_length: f64, color: T) {
    let cx = f64::from(center.x);
    let cy = f64::from(center.y);
    draw_line(im, cx - arm_length, cy, cx + arm_length, cy, color);
    draw_line(im, cx, cy - arm_length, cx, cy + arm_length, color);
}

// ============================================================================
// Circle Points
// ============================================================================

/// Generate the ordered boundary points of a circle of `radius` around the
/// origin, suitable as input to [`draw_shape`].
///
/// The first octant is traced with the midpoint circle algorithm, mirrored
/// across the diagonal into a quarter arc and rotated into the remaining
/// three quadrants, so the result is symmetric under 90° rotation and
/// traversable without large gaps. The ring starts at (0, radius) and runs
/// through (radius, 0); the closing edge back to the start is left to
/// `draw_shape`.
///
/// A radius of 0 yields the single origin point; a negative radius yields
/// an empty sequence.
#[must_use]
pub fn circle_points(radius: i32) -> Vec<Coord> {
    if radius < 0 {
        return Vec::new();
    }
    if radius == 0 {
        return vec![Coord::ORIGIN];
    }

    // First octant from (0, r) toward the x == y diagonal.
    let mut octant = Vec::new();
    let mut x = 0;
    let mut y = radius;
    let mut err = 1 - radius;
    while x <= y {
        octant.push(Coord::new(x, y));
        x += 1;
        if err < 0 {
            err += 2 * x + 1;
        } else {
            y -= 1;
            err += 2 * (x - y) + 1;
        }
    }

    // Mirror across the diagonal into a quarter arc from (0, r) to (r, 0).
    let mut quarter = octant.clone();
    for c in octant.iter().rev() {
        if c.x == c.y {
            continue;
        }
        quarter.push(Coord::new(c.y, c.x));
    }

    // Rotate the quarter through the remaining quadrants, dropping the
    // seam point shared with the previous quarter. The final quarter also
    // drops its last point, which would duplicate the ring start.
    let n = quarter.len();
    let mut ring = Vec::with_capacity(4 * n);
    ring.extend(&quarter);
    ring.extend(quarter.iter().skip(1).map(|c| Coord::new(c.y, -c.x)));
    ring.extend(quarter.iter().skip(1).map(|c| Coord::new(-c.x, -c.y)));
    ring.extend(
        quarter
            .iter()
            .take(n - 1)
            .skip(1)
            .map(|c| Coord::new(-c.y, c.x)),
    );
    ring
}

// ============================================================================
// Tests
// ============================================================================
