//! Pixel formats and their constant-color tables.
//!
//! A pixel is a fixed-arity tuple of numeric channels. Two formats are
//! supported: single-channel grayscale ([`Gray`]) and three-channel RGB
//! ([`Rgb`]). Other channel counts have no type here, so unsupported
//! formats are rejected at compile time rather than at run time.

use std::fmt::Debug;

/// A single scalar channel within a pixel.
///
/// Implemented for `u8`, `u16` and `f32`. Integer channels span
/// `[0, MAX_INTENSITY]` with wrapping additive combination; the float
/// channel spans `[0.0, 1.0]` and combines by plain addition.
pub trait Channel: Copy + Default + PartialEq + PartialOrd + Debug {
    /// Zero intensity.
    const ZERO: Self;
    /// Maximum representable intensity.
    const MAX_INTENSITY: Self;

    /// Half of the maximum intensity (50% gray).
    fn half_intensity() -> Self;

    /// Scale by a floating-point factor, truncating back to the channel type.
    fn scaled(self, factor: f64) -> Self;

    /// Additive combination following the channel's native arithmetic:
    /// wrapping for the integer channels, plain addition for `f32`.
    fn combined(self, other: Self) -> Self;
}

impl Channel for u8 {
    const ZERO: Self = 0;
    const MAX_INTENSITY: Self = u8::MAX;

    fn half_intensity() -> Self {
        Self::MAX_INTENSITY / 2
    }

    fn scaled(self, factor: f64) -> Self {
        (f64::from(self) * factor) as Self
    }

    fn combined(self, other: Self) -> Self {
        self.wrapping_add(other)
    }
}

impl Channel for u16 {
    const ZERO: Self = 0;
    const MAX_INTENSITY: Self = u16::MAX;

    fn half_intensity() -> Self {
        Self::MAX_INTENSITY / 2
    }

    fn scaled(self, factor: f64) -> Self {
        (f64::from(self) * factor) as Self
    }

    fn combined(self, other: Self) -> Self {
        self.wrapping_add(other)
    }
}

impl Channel for f32 {
    const ZERO: Self = 0.0;
    const MAX_INTENSITY: Self = 1.0;

    fn half_intensity() -> Self {
        0.5
    }

    fn scaled(self, factor: f64) -> Self {
        (f64::from(self) * factor) as Self
    }

    fn combined(self, other: Self) -> Self {
        self + other
    }
}

/// A pixel value with a compile-time channel count.
///
/// `Default` is the zero pixel (every channel at zero intensity).
pub trait Pixel: Copy + Default + PartialEq + Debug {
    /// The channel type.
    type Chan: Channel;

    /// Number of channels.
    const CHANNELS: usize;

    /// Read channel `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= Self::CHANNELS`.
    fn channel(&self, i: usize) -> Self::Chan;

    /// Write channel `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= Self::CHANNELS`.
    fn set_channel(&mut self, i: usize, value: Self::Chan);

    /// Channel-wise additive combination (see [`Channel::combined`]).
    #[must_use]
    fn combined(self, other: Self) -> Self {
        let mut out = self;
        for i in 0..Self::CHANNELS {
            out.set_channel(i, self.channel(i).combined(other.channel(i)));
        }
        out
    }
}

/// Single-channel grayscale pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gray<C>(pub C);

/// Three-channel RGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb<C> {
    /// Red channel.
    pub r: C,
    /// Green channel.
    pub g: C,
    /// Blue channel.
    pub b: C,
}

/// 8-bit grayscale pixel.
pub type Gray8 = Gray<u8>;
/// 16-bit grayscale pixel.
pub type Gray16 = Gray<u16>;
/// 8-bit-per-channel RGB pixel.
pub type Rgb8 = Rgb<u8>;
/// 16-bit-per-channel RGB pixel.
pub type Rgb16 = Rgb<u16>;

impl<C: Channel> Gray<C> {
    /// Pixel value at minimal intensity.
    #[must_use]
    pub fn black() -> Self {
        Self(C::ZERO)
    }

    /// Pixel value at 50% intensity.
    #[must_use]
    pub fn gray() -> Self {
        Self(C::half_intensity())
    }

    /// Pixel value at maximal intensity.
    #[must_use]
    pub fn white() -> Self {
        Self(C::MAX_INTENSITY)
    }
}

impl<C: Channel> Pixel for Gray<C> {
    type Chan = C;

    const CHANNELS: usize = 1;

    fn channel(&self, i: usize) -> C {
        assert_eq!(i, 0, "grayscale pixel has a single channel");
        self.0
    }

    fn set_channel(&mut self, i: usize, value: C) {
        assert_eq!(i, 0, "grayscale pixel has a single channel");
        self.0 = value;
    }
}

impl<C: Channel> Rgb<C> {
    /// Create an RGB pixel from its three channels.
    #[must_use]
    pub const fn new(r: C, g: C, b: C) -> Self {
        Self { r, g, b }
    }

    /// All channels at minimum.
    #[must_use]
    pub fn black() -> Self {
        Self::new(C::ZERO, C::ZERO, C::ZERO)
    }

    /// All channels at maximum.
    #[must_use]
    pub fn white() -> Self {
        Self::new(C::MAX_INTENSITY, C::MAX_INTENSITY, C::MAX_INTENSITY)
    }

    /// Red channel at maximum.
    #[must_use]
    pub fn red() -> Self {
        Self::new(C::MAX_INTENSITY, C::ZERO, C::ZERO)
    }

    /// Green channel at maximum.
    #[must_use]
    pub fn green() -> Self {
        Self::new(C::ZERO, C::MAX_INTENSITY, C::ZERO)
    }

    /// Blue channel at maximum.
    #[must_use]
    pub fn blue() -> Self {
        Self::new(C::ZERO, C::ZERO, C::MAX_INTENSITY)
    }

    /// Green and blue channels at maximum.
    #[must_use]
    pub fn cyan() -> Self {
        Self::new(C::ZERO, C::MAX_INTENSITY, C::MAX_INTENSITY)
    }

    /// Red and blue channels at maximum.
    #[must_use]
    pub fn magenta() -> Self {
        Self::new(C::MAX_INTENSITY, C::ZERO, C::MAX_INTENSITY)
    }

    /// Red and green channels at maximum.
    #[must_use]
    pub fn yellow() -> Self {
        Self::new(C::MAX_INTENSITY, C::MAX_INTENSITY, C::ZERO)
    }

    /// Scale each channel by `brightness`, truncating back to the channel
    /// type. Factors above 1.0 may exceed the channel range for float
    /// channels and saturate for integer channels.
    #[must_use]
    pub fn shade(self, brightness: f64) -> Self {
        Self::new(
            self.r.scaled(brightness),
            self.g.scaled(brightness),
            self.b.scaled(brightness),
        )
    }
}

impl<C: Channel> Pixel for Rgb<C> {
    type Chan = C;

    const CHANNELS: usize = 3;

    fn channel(&self, i: usize) -> C {
        match i {
            0 => self.r,
            1 => self.g,
            2 => self.b,
            _ => panic!("RGB pixel has three channels, got index {i}"),
        }
    }

    fn set_channel(&mut self, i: usize, value: C) {
        match i {
            0 => self.r = value,
            1 => self.g = value,
            2 => self.b = value,
            _ => panic!("RGB pixel has three channels, got index {i}"),
        }
    }
}
