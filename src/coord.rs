//! Integer pixel coordinates.
//!
//! Provides the 2D coordinate type used for pixel addressing, offsets and
//! rectangle corners, plus the row-major traversal step used by the region
//! combiner.

use std::fmt;
use std::ops::Add;

/// A 2D integer coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Coord {
    /// X coordinate (column).
    pub x: i32,
    /// Y coordinate (row).
    pub y: i32,
}

impl Coord {
    /// The origin (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Coord {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Advance a coordinate one step in row-major order within the half-open
/// rectangle `[lower, upper)`.
///
/// Increments x; when x reaches `upper.x` it wraps back to `lower.x` and y
/// is incremented. Returns the advanced coordinate and whether it is still
/// inside the rectangle. Once the second element is `false` the coordinate
/// has walked past the last row and must not be used for addressing.
#[must_use]
pub fn advance(current: Coord, lower: Coord, upper: Coord) -> (Coord, bool) {
    let mut next = current;
    next.x += 1;
    if next.x >= upper.x {
        next.x = lower.x;
        next.y += 1;
        if next.y >= upper.y {
            return (next, false);
        }
    }
    (next, true)
}
