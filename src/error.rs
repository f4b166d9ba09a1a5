//! Error types for pixeldraw operations.

use thiserror::Error;

use crate::coord::Coord;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pixeldraw operations.
///
/// Both variants are precondition violations on the region-combination
/// operators, raised before any pixel is written. All other geometric edge
/// cases (out-of-bounds line endpoints, oversized combine regions, inverted
/// box corners) are handled by silent clamping instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Destination offset lies outside the target image.
    #[error("destination offset {offset} not inside {width}x{height} image")]
    RefOutOfImage {
        /// The offending offset.
        offset: Coord,
        /// Target image width.
        width: u32,
        /// Target image height.
        height: u32,
    },

    /// Two size-correlated images differ in dimensions.
    #[error("incompatible image sizes: {a_width}x{a_height} vs {out_width}x{out_height}")]
    IncompatibleSizes {
        /// Width of the reference image.
        a_width: u32,
        /// Height of the reference image.
        a_height: u32,
        /// Width of the output image.
        out_width: u32,
        /// Height of the output image.
        out_height: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ref_out_of_image_display() {
        let err = Error::RefOutOfImage {
            offset: Coord::new(10, -3),
            width: 8,
            height: 8,
        };
        let msg = err.to_string();
        assert!(msg.contains("(10, -3)"));
        assert!(msg.contains("8x8"));
    }

    #[test]
    fn test_incompatible_sizes_display() {
        let err = Error::IncompatibleSizes {
            a_width: 4,
            a_height: 4,
            out_width: 5,
            out_height: 4,
        };
        assert!(err.to_string().contains("4x4"));
        assert!(err.to_string().contains("5x4"));
    }
}
