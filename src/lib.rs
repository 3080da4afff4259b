//! # zenbmpuri
//!
//! Uncompressed 24-bit BMP encoder that can hand its output back as a
//! `data:image/bmp;base64,...` URI, ready to use as an image source.
//!
//! ## Output format
//!
//! - 14-byte BITMAPFILEHEADER + 40-byte BITMAPINFOHEADER, no color table
//! - 24 bits per pixel, BI_RGB (no compression), 2835 pixels per meter
//! - Rows stored bottom-up in B, G, R order, each padded to a multiple of 4 bytes
//! - Alpha (or padding) channels of the input are dropped
//!
//! ## Non-Goals
//!
//! - Decoding BMP files (this crate only writes)
//! - RLE/bitfield compression, palettes, bit depths other than 24
//!
//! ## Usage
//!
//! ```
//! use zenbmpuri::{BitmapEncoder, Field};
//!
//! // 2x1 RGBA: red, green
//! let pixels = [255, 0, 0, 255, 0, 255, 0, 255];
//!
//! let mut bitmap = BitmapEncoder::new();
//! bitmap.load(&pixels, 2, 1)?;
//!
//! let bytes = bitmap.encode();
//! assert_eq!(&bytes[0..2], b"BM");
//! assert_eq!(Field::FILE_SIZE.read(&bytes), Some(62));
//!
//! let uri = bitmap.to_data_uri();
//! assert!(uri.starts_with("data:image/bmp;base64,"));
//! # Ok::<(), zenbmpuri::BitmapError>(())
//! ```
//!
//! One-shot helpers [`encode_bmp`] and [`encode_bmp_data_uri`] cover the
//! common case of encoding a single buffer.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod datauri;
mod error;
mod hexdump;
mod limits;
mod pixel;

#[cfg(feature = "rgb")]
mod typed;

pub mod bmp;

use alloc::string::String;
use alloc::vec::Vec;

// Re-exports
pub use bmp::{BitmapEncoder, BmpHeader, Field, HEADER_SIZE, le, row_padding, row_size};
pub use datauri::{DATA_URI_PREFIX, to_data_uri};
pub use error::BitmapError;
pub use hexdump::hexdump;
pub use limits::Limits;
pub use pixel::PixelLayout;
#[cfg(feature = "rgb")]
pub use typed::EncodePixel;

/// Encode a tightly packed pixel buffer to BMP bytes.
pub fn encode_bmp(
    pixels: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
) -> Result<Vec<u8>, BitmapError> {
    let mut encoder = BitmapEncoder::new();
    encoder.load_layout(pixels, width, height, layout)?;
    Ok(encoder.encode())
}

/// Encode a tightly packed pixel buffer straight to a BMP data URI.
pub fn encode_bmp_data_uri(
    pixels: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
) -> Result<String, BitmapError> {
    let mut encoder = BitmapEncoder::new();
    encoder.load_layout(pixels, width, height, layout)?;
    Ok(encoder.to_data_uri())
}
