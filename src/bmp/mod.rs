//! Uncompressed 24-bit BMP encoder.
//!
//! [`BitmapEncoder`] owns one image's header and padded pixel data. Loading
//! pixels converts them to bottom-up BGR rows immediately; encoding only
//! refreshes the two size fields and concatenates header and data.

mod header;
pub mod le;
mod rows;

pub use header::{
    BITS_PER_PIXEL, BmpHeader, COMPRESSION_NONE, DIB_HEADER_SIZE, Field, HEADER_SIZE,
    PIXELS_PER_METER, SIGNATURE,
};
pub use rows::{row_padding, row_size};

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::BitmapError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;

/// Holds a single bitmap's header and pixel data and produces its encoding.
///
/// ```
/// use zenbmpuri::BitmapEncoder;
///
/// let mut bitmap = BitmapEncoder::new();
/// // 1x1 opaque red, RGBA order
/// bitmap.load(&[255, 0, 0, 255], 1, 1)?;
/// let uri = bitmap.to_data_uri();
/// assert!(uri.starts_with("data:image/bmp;base64,"));
/// # Ok::<(), zenbmpuri::BitmapError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct BitmapEncoder {
    header: BmpHeader,
    pixel_data: Vec<u8>,
    limits: Limits,
}

impl BitmapEncoder {
    /// Empty encoder: constant header fields set, zero-area image.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply resource limits to subsequent loads.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Load row-major RGBA8 pixels (4 bytes per pixel, alpha ignored).
    ///
    /// Replaces any previously loaded image. On error the encoder is left
    /// exactly as it was.
    pub fn load(&mut self, pixels: &[u8], width: u32, height: u32) -> Result<(), BitmapError> {
        self.load_layout(pixels, width, height, PixelLayout::Rgba8)
    }

    /// Load tightly packed row-major pixels in the given layout.
    pub fn load_layout(
        &mut self,
        pixels: &[u8],
        width: u32,
        height: u32,
        layout: PixelLayout,
    ) -> Result<(), BitmapError> {
        let stride = (width as usize)
            .checked_mul(layout.bytes_per_pixel())
            .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
        self.load_strided(pixels, width, height, stride, layout)
    }

    /// Load a slice of typed pixels.
    #[cfg(feature = "rgb")]
    pub fn load_pixels<P: crate::EncodePixel>(
        &mut self,
        pixels: &[P],
        width: u32,
        height: u32,
    ) -> Result<(), BitmapError>
    where
        [P]: rgb::ComponentBytes<u8>,
    {
        use rgb::ComponentBytes;
        self.load_layout(pixels.as_bytes(), width, height, P::layout())
    }

    /// Load an [`imgref::ImgRef`], honoring its stride.
    #[cfg(feature = "imgref")]
    pub fn load_img<P: crate::EncodePixel>(
        &mut self,
        img: imgref::ImgRef<'_, P>,
    ) -> Result<(), BitmapError>
    where
        [P]: rgb::ComponentBytes<u8>,
    {
        use rgb::ComponentBytes;
        let width = u32::try_from(img.width()).map_err(|_| BitmapError::DimensionsTooLarge {
            width: u32::MAX,
            height: u32::MAX,
        })?;
        let height = u32::try_from(img.height()).map_err(|_| BitmapError::DimensionsTooLarge {
            width,
            height: u32::MAX,
        })?;
        let layout = P::layout();
        let stride = img
            .stride()
            .checked_mul(layout.bytes_per_pixel())
            .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
        let buf: &[P] = img.buf();
        self.load_strided(buf.as_bytes(), width, height, stride, layout)
    }

    fn load_strided(
        &mut self,
        pixels: &[u8],
        width: u32,
        height: u32,
        stride: usize,
        layout: PixelLayout,
    ) -> Result<(), BitmapError> {
        if width == 0 || height == 0 {
            return Err(BitmapError::InvalidDimensions { width, height });
        }
        self.limits.check(width, height)?;

        let w = width as usize;
        let h = height as usize;

        let row_bytes = w
            .checked_mul(layout.bytes_per_pixel())
            .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
        let needed = (h - 1)
            .checked_mul(stride)
            .and_then(|n| n.checked_add(row_bytes))
            .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
        if pixels.len() < needed {
            return Err(BitmapError::BufferTooSmall {
                needed,
                actual: pixels.len(),
            });
        }

        // Both size fields are u32, so the whole file must fit in one.
        let data_size = row_size(width)
            .checked_mul(u64::from(height))
            .filter(|&n| n + HEADER_SIZE as u64 <= u64::from(u32::MAX))
            .and_then(|n| usize::try_from(n).ok())
            .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
        self.limits.check_memory(data_size)?;

        let mut data = Vec::with_capacity(data_size);
        rows::write_bgr_rows(pixels, width, height, stride, layout, &mut data)?;
        debug_assert_eq!(data.len(), data_size);

        self.pixel_data = data;
        self.header.width = width;
        self.header.height = height;
        log::debug!(
            "bmp: loaded {width}x{height} {layout:?}, {data_size} bytes of pixel data (row {} + {} pad)",
            row_size(width),
            row_padding(width),
        );
        Ok(())
    }

    /// Refresh the size fields and return header followed by pixel data.
    ///
    /// Calling this repeatedly without an intervening load returns identical
    /// bytes.
    pub fn encode(&mut self) -> Vec<u8> {
        self.finalize_header();
        let mut out = Vec::with_capacity(HEADER_SIZE + self.pixel_data.len());
        out.extend_from_slice(&self.header.to_bytes());
        out.extend_from_slice(&self.pixel_data);
        log::debug!(
            "bmp: encoded {}x{}, {} bytes",
            self.header.width,
            self.header.height,
            out.len()
        );
        out
    }

    /// [`encode`](Self::encode), then wrap the bytes in a
    /// `data:image/bmp;base64,` URI.
    pub fn to_data_uri(&mut self) -> String {
        crate::datauri::to_data_uri(&self.encode())
    }

    /// Hex dump of the encoded stream, 16 bytes per line.
    pub fn hexdump(&mut self) -> String {
        let dump = crate::hexdump::hexdump(&self.encode());
        log::trace!("bmp: hexdump\n{dump}");
        dump
    }

    fn finalize_header(&mut self) {
        // load() guarantees the file size fits in u32.
        self.header.image_data_size = self.pixel_data.len() as u32;
        self.header.file_size = self.header.image_data_size + HEADER_SIZE as u32;
    }

    /// Header as of the last load/encode.
    ///
    /// Size fields are only refreshed by [`encode`](Self::encode); use
    /// [`file_size`](Self::file_size) and
    /// [`image_data_size`](Self::image_data_size) for current values.
    pub fn header(&self) -> &BmpHeader {
        &self.header
    }

    /// Padded, bottom-up BGR pixel data.
    pub fn pixel_data(&self) -> &[u8] {
        &self.pixel_data
    }

    pub fn width(&self) -> u32 {
        self.header.width
    }

    pub fn height(&self) -> u32 {
        self.header.height
    }

    /// Byte length of the pixel data, including row padding.
    pub fn image_data_size(&self) -> usize {
        self.pixel_data.len()
    }

    /// Byte length of the full encoded file.
    pub fn file_size(&self) -> usize {
        HEADER_SIZE + self.pixel_data.len()
    }

    /// True until the first successful load.
    pub fn is_empty(&self) -> bool {
        self.pixel_data.is_empty()
    }
}
