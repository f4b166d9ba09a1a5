//! Generic pixel buffer.
//!
//! Provides a rectangular, row-major grid of pixels with random access by
//! integer coordinate, in-place resizing and bulk region copies. Every
//! drawing and combining operation in this crate mutates an [`Image`] in
//! place.

use std::ops::{Index, IndexMut};

use crate::coord::Coord;
use crate::pixel::Pixel;

/// A 2D pixel buffer in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Image<T> {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Pixels in row-major order, `width * height` entries.
    pixels: Vec<T>,
}

impl<T: Pixel> Image<T> {
    /// Create a new image filled with the zero pixel.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![T::default(); (width as usize) * (height as usize)],
        }
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the size as a coordinate (width, height).
    #[must_use]
    pub const fn size(&self) -> Coord {
        Coord::new(self.width as i32, self.height as i32)
    }

    /// Check whether a coordinate addresses a pixel inside this image.
    #[must_use]
    pub const fn contains(&self, c: Coord) -> bool {
        c.x >= 0 && c.x < self.width as i32 && c.y >= 0 && c.y < self.height as i32
    }

    /// Get the pixel at a coordinate.
    ///
    /// Returns `None` if the coordinate is out of bounds.
    #[must_use]
    pub fn get(&self, c: Coord) -> Option<T> {
        if self.contains(c) {
            Some(self.pixels[self.offset(c)])
        } else {
            None
        }
    }

    /// Set the pixel at a coordinate.
    ///
    /// Does nothing if the coordinate is out of bounds.
    pub fn set(&mut self, c: Coord, pixel: T) {
        if self.contains(c) {
            let i = self.offset(c);
            self.pixels[i] = pixel;
        }
    }

    /// Resize the image, discarding prior contents.
    ///
    /// The buffer is reallocated and filled with the zero pixel. Negative
    /// extents are treated as zero.
    pub fn resize(&mut self, size: Coord) {
        self.width = size.x.max(0) as u32;
        self.height = size.y.max(0) as u32;
        self.pixels = vec![T::default(); (self.width as usize) * (self.height as usize)];
    }

    /// Bulk-copy a rectangular region from `src` into this image.
    ///
    /// Copies `extent` pixels starting at `src_offset` in `src` to
    /// `dst_offset` here. The extent is silently clamped so that both the
    /// source and the destination rectangle stay in bounds; negative
    /// offsets clamp to nothing copied.
    pub fn copy_region(&mut self, src: &Image<T>, extent: Coord, src_offset: Coord, dst_offset: Coord) {
        if src_offset.x < 0 || src_offset.y < 0 || dst_offset.x < 0 || dst_offset.y < 0 {
            return;
        }
        let w = extent
            .x
            .min(src.size().x - src_offset.x)
            .min(self.size().x - dst_offset.x);
        let h = extent
            .y
            .min(src.size().y - src_offset.y)
            .min(self.size().y - dst_offset.y);
        if w <= 0 || h <= 0 {
            return;
        }

        let w = w as usize;
        for row in 0..h {
            let src_start = src.offset(Coord::new(src_offset.x, src_offset.y + row));
            let dst_start = self.offset(Coord::new(dst_offset.x, dst_offset.y + row));
            self.pixels[dst_start..dst_start + w]
                .copy_from_slice(&src.pixels[src_start..src_start + w]);
        }
    }

    /// Linear buffer offset for an in-bounds coordinate.
    #[inline]
    fn offset(&self, c: Coord) -> usize {
        (c.y as usize) * (self.width as usize) + (c.x as usize)
    }
}

impl<T: Pixel> Index<Coord> for Image<T> {
    type Output = T;

    /// Unchecked-by-contract access; panics on out-of-bounds coordinates.
    fn index(&self, c: Coord) -> &T {
        assert!(self.contains(c), "coordinate ({}, {}) out of bounds", c.x, c.y);
        &self.pixels[self.offset(c)]
    }
}

impl<T: Pixel> IndexMut<Coord> for Image<T> {
    fn index_mut(&mut self, c: Coord) -> &mut T {
        assert!(self.contains(c), "coordinate ({}, {}) out of bounds", c.x, c.y);
        let i = self.offset(c);
        &mut self.pixels[i]
    }
}
