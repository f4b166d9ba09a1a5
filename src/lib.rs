//! # pixeldraw
//!
//! Low-level 2D rasterization and compositing primitives over generic pixel
//! buffers.
//!
//! pixeldraw is a drawing kernel meant to be called by higher-level
//! visualization or annotation code: it draws lines, polylines, closed
//! shapes, boxes and crosses into an [`Image`](image::Image), generates
//! circle boundary points, and combines whole images (side-by-side join and
//! clipped additive overlay). It does not load, decode, display or persist
//! images.
//!
//! ## Quick Start
//!
//! ```rust
//! use pixeldraw::prelude::*;
//!
//! let mut im: Image<Rgb8> = Image::new(64, 64);
//! draw_line_at(&mut im, Coord::new(4, 4), Coord::new(60, 40), Rgb8::red());
//! draw_box(&mut im, Coord::new(10, 10), Coord::new(50, 50), Rgb8::white());
//! draw_shape(&mut im, Coord::new(32, 32), &circle_points(12), Rgb8::cyan());
//! ```
//!
//! ## Design
//!
//! - Lines are rasterized by parametric sampling with a Manhattan-length
//!   step count and `+0.5` rounding, not Bresenham.
//! - Out-of-range geometry clamps silently; the only errors are the two
//!   precondition violations on [`combine_images`](combine::combine_images).
//! - Pixel formats are closed over channel count: grayscale and RGB only,
//!   enforced at compile time by the type system.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// Integer pixel coordinates and row-major traversal.
pub mod coord;

/// Pixel formats, channels and constant colors.
pub mod pixel;

/// Generic pixel buffer.
pub mod image;

// ============================================================================
// Drawing Modules
// ============================================================================

/// Line and shape rasterization.
pub mod draw;

/// Image-combination operators.
pub mod combine;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for pixeldraw operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use pixeldraw::prelude::*;
/// ```
pub mod prelude {
    pub use crate::combine::{accumulate_images, combine_images, join_images};
    pub use crate::coord::{advance, Coord};
    pub use crate::draw::{
        circle_points, draw_box, draw_cross, draw_line, draw_line_at, draw_shape,
    };
    pub use crate::error::{Error, Result};
    pub use crate::image::Image;
    pub use crate::pixel::{Channel, Gray, Gray16, Gray8, Pixel, Rgb, Rgb16, Rgb8};
}
