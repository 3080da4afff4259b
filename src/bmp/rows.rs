//! Row layout: stride math and the bottom-up BGR row writer.

use alloc::vec::Vec;

use super::header::BITS_PER_PIXEL;
use crate::error::BitmapError;
use crate::pixel::PixelLayout;

/// Stored byte length of one 24-bit row, rounded up to a multiple of 4.
///
/// Computed in `u64` so that every `u32` width is representable.
pub const fn row_size(width: u32) -> u64 {
    (BITS_PER_PIXEL as u64 * width as u64 + 31) / 32 * 4
}

/// Zero bytes appended after each row's pixels (0 to 3).
pub const fn row_padding(width: u32) -> usize {
    (row_size(width) - 3 * width as u64) as usize
}

/// Append `height` rows of BGR triples to `out`, last source row first.
///
/// `src_stride` is the distance in bytes between the starts of consecutive
/// source rows and must be at least `width * layout.bytes_per_pixel()`.
pub(crate) fn write_bgr_rows(
    src: &[u8],
    width: u32,
    height: u32,
    src_stride: usize,
    layout: PixelLayout,
    out: &mut Vec<u8>,
) -> Result<(), BitmapError> {
    let bpp = layout.bytes_per_pixel();
    let row_bytes = width as usize * bpp;
    let pad_bytes = row_padding(width);
    let [ri, gi, bi] = layout.rgb_offsets();

    for row in (0..height as usize).rev() {
        let start = row * src_stride;
        let src_row = src
            .get(start..start + row_bytes)
            .ok_or(BitmapError::BufferTooSmall {
                needed: start + row_bytes,
                actual: src.len(),
            })?;
        if layout == PixelLayout::Bgr8 {
            // Already in BMP byte order, direct copy
            out.extend_from_slice(src_row);
        } else if layout.is_bgr_ordered() {
            for px in src_row.chunks_exact(bpp) {
                out.extend_from_slice(&px[..3]);
            }
        } else {
            for px in src_row.chunks_exact(bpp) {
                out.extend_from_slice(&[px[bi], px[gi], px[ri]]);
            }
        }
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }
    Ok(())
}
