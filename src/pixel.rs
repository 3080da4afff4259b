/// Memory layout of a caller-supplied pixel buffer.
///
/// Every layout carries 8-bit red, green and blue channels. Any fourth byte
/// (alpha or padding) is dropped by the 24-bit encoder.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    /// 4 channels, 8-bit RGBA. The canvas `ImageData` order.
    #[default]
    Rgba8,
    /// 4 channels, 8-bit BGRA.
    Bgra8,
    /// 4 channels, 8-bit BGRX (4th byte is padding, not alpha).
    Bgrx8,
    /// 3 channels, 8-bit RGB.
    Rgb8,
    /// 3 channels, 8-bit BGR.
    Bgr8,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Rgb8 | Self::Bgr8 => 3,
            Self::Rgba8 | Self::Bgra8 | Self::Bgrx8 => 4,
        }
    }

    /// Whether the layout carries a real alpha channel.
    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::Rgba8 | Self::Bgra8)
    }

    /// Byte offsets of the red, green and blue channels within one pixel.
    pub(crate) fn rgb_offsets(&self) -> [usize; 3] {
        match self {
            Self::Rgba8 | Self::Rgb8 => [0, 1, 2],
            Self::Bgra8 | Self::Bgrx8 | Self::Bgr8 => [2, 1, 0],
        }
    }

    /// Whether the first three bytes of each pixel are already B, G, R.
    pub(crate) fn is_bgr_ordered(&self) -> bool {
        matches!(self, Self::Bgra8 | Self::Bgrx8 | Self::Bgr8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_stay_inside_pixel() {
        for layout in [
            PixelLayout::Rgba8,
            PixelLayout::Bgra8,
            PixelLayout::Bgrx8,
            PixelLayout::Rgb8,
            PixelLayout::Bgr8,
        ] {
            let bpp = layout.bytes_per_pixel();
            assert!(layout.rgb_offsets().iter().all(|&o| o < bpp), "{layout:?}");
            assert_eq!(layout.is_bgr_ordered(), layout.rgb_offsets() == [2, 1, 0]);
        }
    }

    #[test]
    fn default_is_canvas_order() {
        assert_eq!(PixelLayout::default(), PixelLayout::Rgba8);
        assert!(PixelLayout::Rgba8.has_alpha());
        assert!(!PixelLayout::Bgrx8.has_alpha());
    }
}
