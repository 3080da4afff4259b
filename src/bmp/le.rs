//! Little-endian packing for BMP header fields.
//!
//! BMP header fields are 2 or 4 bytes wide. Both helpers work on any width
//! from 1 to 4 bytes, taken from the slice length.

/// Write `value` into `dst`, least-significant byte first.
///
/// Only the low `dst.len()` bytes of `value` are stored. `dst` longer than
/// 4 bytes is zero-filled past the fourth byte.
pub fn pack_into(dst: &mut [u8], value: u32) {
    let bytes = value.to_le_bytes();
    for (i, out) in dst.iter_mut().enumerate() {
        *out = bytes.get(i).copied().unwrap_or(0);
    }
}

/// Read a little-endian unsigned integer of `src.len()` bytes (at most 4).
pub fn unpack(src: &[u8]) -> u32 {
    src.iter()
        .take(4)
        .enumerate()
        .fold(0u32, |acc, (i, &b)| acc | (u32::from(b) << (8 * i)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_and_dword_layout() {
        let mut word = [0u8; 2];
        pack_into(&mut word, 0x4D42);
        assert_eq!(&word, b"BM");

        let mut dword = [0u8; 4];
        pack_into(&mut dword, 0x0B13);
        assert_eq!(dword, [0x13, 0x0B, 0x00, 0x00]);
    }

    #[test]
    fn roundtrip_all_widths() {
        let samples = [
            0u32,
            1,
            0x7F,
            0xFF,
            0x100,
            0xBEEF,
            0xFFFF,
            0x00AB_CDEF,
            u32::MAX,
        ];
        for width in 1..=4usize {
            let max = if width == 4 {
                u32::MAX
            } else {
                (1u32 << (8 * width)) - 1
            };
            for &v in samples.iter().filter(|&&v| v <= max) {
                let mut buf = [0u8; 4];
                pack_into(&mut buf[..width], v);
                assert_eq!(unpack(&buf[..width]), v, "width {width} value {v:#x}");
            }
        }
    }

    #[test]
    fn narrow_field_truncates_high_bytes() {
        let mut byte = [0u8; 1];
        pack_into(&mut byte, 0x1234);
        assert_eq!(byte, [0x34]);
    }
}
