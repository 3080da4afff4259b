//! Typed pixel input via the `rgb` crate.

use crate::pixel::PixelLayout;

/// Pixel types the encoder accepts directly.
///
/// Implemented for 8-bit RGB, RGBA, BGR and BGRA pixels from the `rgb`
/// crate. The alpha channel of 4-channel types is dropped.
pub trait EncodePixel: Copy + 'static {
    /// Byte layout of a slice of this pixel type.
    fn layout() -> PixelLayout;
}

impl EncodePixel for rgb::Rgba<u8> {
    fn layout() -> PixelLayout {
        PixelLayout::Rgba8
    }
}

impl EncodePixel for rgb::Rgb<u8> {
    fn layout() -> PixelLayout {
        PixelLayout::Rgb8
    }
}

impl EncodePixel for rgb::alt::BGRA<u8> {
    fn layout() -> PixelLayout {
        PixelLayout::Bgra8
    }
}

impl EncodePixel for rgb::alt::BGR<u8> {
    fn layout() -> PixelLayout {
        PixelLayout::Bgr8
    }
}
