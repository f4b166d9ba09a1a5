//! Image-combination operators.
//!
//! Two operators over whole images: a side-by-side join (pure layout, no
//! pixel math) and an additive overlay that adds a clipped region of one
//! image into another. The overlay walks its destination and source
//! regions in lockstep using the row-major [`advance`] step.

use crate::coord::{advance, Coord};
use crate::error::{Error, Result};
use crate::image::Image;
use crate::pixel::Pixel;

/// Join two images side by side into `out`.
///
/// `out` is unconditionally resized to
/// `(width(a) + width(b), max(height(a), height(b)))`, discarding its prior
/// contents. `a` is copied to the left at (0, 0) and `b` to the right at
/// `(width(a), 0)`; the rectangle left uncovered below the shorter input is
/// filled with the zero pixel.
pub fn join_images<T: Pixel>(a: &Image<T>, b: &Image<T>, out: &mut Image<T>) {
    let h = a.size().y.max(b.size().y);
    out.resize(Coord::new(a.size().x + b.size().x, h));
    out.copy_region(a, a.size(), Coord::ORIGIN, Coord::ORIGIN);
    out.copy_region(b, b.size(), Coord::ORIGIN, Coord::new(a.size().x, 0));

    let (blank_begin, blank_end) = if a.size().y < b.size().y {
        (Coord::new(0, a.size().y), Coord::new(a.size().x, out.size().y))
    } else {
        (Coord::new(a.size().x, b.size().y), out.size())
    };
    for y in blank_begin.y..blank_end.y {
        for x in blank_begin.x..blank_end.x {
            out.set(Coord::new(x, y), T::default());
        }
    }
}

/// Add a region of `b` into a copy of `a`, writing the result to `out`.
///
/// `out` is first overwritten with a full copy of `a`, then `b`'s pixels
/// starting at `from` are added channel-wise (see
/// [`Pixel::combined`](crate::pixel::Pixel::combined)) into the region of
/// `size` pixels at `dst`. A `size` of `None` defaults to the full size of
/// `b`. The region is shrunk per axis so it stays inside `a`, `out` and
/// `b` — a silent clamp, never an error. A region clamped to zero extent
/// adds nothing.
///
/// For in-place accumulation into an existing image use
/// [`accumulate_images`].
///
/// # Errors
///
/// Returns [`Error::RefOutOfImage`] if `dst` lies outside `a`'s bounds and
/// [`Error::IncompatibleSizes`] if `a` and `out` differ in dimensions. Both
/// are raised before any pixel is written.
pub fn combine_images<T: Pixel>(
    a: &Image<T>,
    b: &Image<T>,
    out: &mut Image<T>,
    dst: Coord,
    size: Option<Coord>,
    from: Coord,
) -> Result<()> {
    if !a.contains(dst) {
        return Err(Error::RefOutOfImage {
            offset: dst,
            width: a.width(),
            height: a.height(),
        });
    }
    if a.size() != out.size() {
        return Err(Error::IncompatibleSizes {
            a_width: a.width(),
            a_height: a.height(),
            out_width: out.width(),
            out_height: out.height(),
        });
    }

    let size = size.unwrap_or_else(|| b.size());
    let size = clamp_extent(size, dst, a.size());
    let size = clamp_extent(size, dst, out.size());
    let size = clamp_extent(size, from, b.size());

    out.copy_region(a, a.size(), Coord::ORIGIN, Coord::ORIGIN);
    add_region(out, b, dst, size, from);
    Ok(())
}

/// Add a region of `b` into `out` in place.
///
/// Same clipping and lockstep addition as [`combine_images`] without the
/// initial copy, for the case where the base image and the output are the
/// same buffer.
///
/// # Errors
///
/// Returns [`Error::RefOutOfImage`] if `dst` lies outside `out`'s bounds.
pub fn accumulate_images<T: Pixel>(
    out: &mut Image<T>,
    b: &Image<T>,
    dst: Coord,
    size: Option<Coord>,
    from: Coord,
) -> Result<()> {
    if !out.contains(dst) {
        return Err(Error::RefOutOfImage {
            offset: dst,
            width: out.width(),
            height: out.height(),
        });
    }

    let size = size.unwrap_or_else(|| b.size());
    let size = clamp_extent(size, dst, out.size());
    let size = clamp_extent(size, from, b.size());

    add_region(out, b, dst, size, from);
    Ok(())
}

/// Shrink `size` so that `offset + size` does not exceed `bounds`.
fn clamp_extent(mut size: Coord, offset: Coord, bounds: Coord) -> Coord {
    if size.x + offset.x >= bounds.x {
        size.x = bounds.x - offset.x;
    }
    if size.y + offset.y >= bounds.y {
        size.y = bounds.y - offset.y;
    }
    size
}

/// Add `size` pixels of `b` starting at `from` into `out` starting at
/// `dst`, both coordinates advancing row-major in lockstep.
///
/// Expects a pre-clamped region; zero or negative extents and negative
/// source offsets add nothing.
fn add_region<T: Pixel>(out: &mut Image<T>, b: &Image<T>, dst: Coord, size: Coord, from: Coord) {
    if size.x <= 0 || size.y <= 0 || from.x < 0 || from.y < 0 {
        return;
    }

    let dst_end = dst + size;
    let src_end = from + size;
    let mut d = dst;
    let mut s = from;
    loop {
        out[d] = out[d].combined(b[s]);
        let (next_d, in_bounds) = advance(d, dst, dst_end);
        if !in_bounds {
            break;
        }
        let (next_s, _) = advance(s, from, src_end);
        d = next_d;
        s = next_s;
    }
}
