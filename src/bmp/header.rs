//! BITMAPFILEHEADER + BITMAPINFOHEADER record.

use super::le;

/// Total header length: 14-byte file header plus 40-byte DIB header.
pub const HEADER_SIZE: usize = 54;

/// `"BM"` read as a little-endian word.
pub const SIGNATURE: u16 = 0x4D42;

/// BITMAPINFOHEADER length.
pub const DIB_HEADER_SIZE: u32 = 40;

/// Only 24-bit output is produced.
pub const BITS_PER_PIXEL: u16 = 24;

/// BI_RGB.
pub const COMPRESSION_NONE: u32 = 0;

/// 2835 pixels per meter, about 72 DPI.
pub const PIXELS_PER_METER: u32 = 0x0B13;

/// Location of one fixed-width field inside the 54-byte header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub offset: usize,
    pub width: usize,
}

impl Field {
    pub const SIGNATURE: Field = Field::new(0, 2);
    pub const FILE_SIZE: Field = Field::new(2, 4);
    pub const RESERVED: Field = Field::new(6, 4);
    pub const DATA_OFFSET: Field = Field::new(10, 4);
    pub const DIB_HEADER_SIZE: Field = Field::new(14, 4);
    pub const WIDTH: Field = Field::new(18, 4);
    pub const HEIGHT: Field = Field::new(22, 4);
    pub const PLANES: Field = Field::new(26, 2);
    pub const BITS_PER_PIXEL: Field = Field::new(28, 2);
    pub const COMPRESSION: Field = Field::new(30, 4);
    pub const IMAGE_DATA_SIZE: Field = Field::new(34, 4);
    pub const X_PIXELS_PER_METER: Field = Field::new(38, 4);
    pub const Y_PIXELS_PER_METER: Field = Field::new(42, 4);
    pub const COLORS_USED: Field = Field::new(46, 4);
    pub const COLORS_IMPORTANT: Field = Field::new(50, 4);

    /// All fields in file order. Together they cover bytes 0..54 exactly.
    pub const ALL: [Field; 15] = [
        Field::SIGNATURE,
        Field::FILE_SIZE,
        Field::RESERVED,
        Field::DATA_OFFSET,
        Field::DIB_HEADER_SIZE,
        Field::WIDTH,
        Field::HEIGHT,
        Field::PLANES,
        Field::BITS_PER_PIXEL,
        Field::COMPRESSION,
        Field::IMAGE_DATA_SIZE,
        Field::X_PIXELS_PER_METER,
        Field::Y_PIXELS_PER_METER,
        Field::COLORS_USED,
        Field::COLORS_IMPORTANT,
    ];

    const fn new(offset: usize, width: usize) -> Self {
        Self { offset, width }
    }

    fn range(self) -> core::ops::Range<usize> {
        self.offset..self.offset + self.width
    }

    /// Decode this field from encoded BMP bytes.
    ///
    /// Returns `None` if `bytes` is too short to contain the field.
    pub fn read(self, bytes: &[u8]) -> Option<u32> {
        bytes.get(self.range()).map(le::unpack)
    }

    fn write(self, out: &mut [u8; HEADER_SIZE], value: u32) {
        le::pack_into(&mut out[self.range()], value);
    }
}

/// The 54-byte BMP preamble as named fields.
///
/// [`BmpHeader::new`] fills in every constant; the encoder owns the
/// dimension and size fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BmpHeader {
    pub signature: u16,
    pub file_size: u32,
    pub reserved: u32,
    pub data_offset: u32,
    pub dib_header_size: u32,
    pub width: u32,
    /// Positive: rows are stored bottom-up.
    pub height: u32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_data_size: u32,
    pub x_pixels_per_meter: u32,
    pub y_pixels_per_meter: u32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl Default for BmpHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl BmpHeader {
    /// Header for an empty 24-bit image.
    pub const fn new() -> Self {
        Self {
            signature: SIGNATURE,
            file_size: 0,
            reserved: 0,
            data_offset: HEADER_SIZE as u32,
            dib_header_size: DIB_HEADER_SIZE,
            width: 0,
            height: 0,
            planes: 1,
            bits_per_pixel: BITS_PER_PIXEL,
            compression: COMPRESSION_NONE,
            image_data_size: 0,
            x_pixels_per_meter: PIXELS_PER_METER,
            y_pixels_per_meter: PIXELS_PER_METER,
            colors_used: 0,
            colors_important: 0,
        }
    }

    /// Pack every field at its offset.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        // File header (14 bytes)
        Field::SIGNATURE.write(&mut out, u32::from(self.signature));
        Field::FILE_SIZE.write(&mut out, self.file_size);
        Field::RESERVED.write(&mut out, self.reserved);
        Field::DATA_OFFSET.write(&mut out, self.data_offset);
        // DIB header (BITMAPINFOHEADER, 40 bytes)
        Field::DIB_HEADER_SIZE.write(&mut out, self.dib_header_size);
        Field::WIDTH.write(&mut out, self.width);
        Field::HEIGHT.write(&mut out, self.height);
        Field::PLANES.write(&mut out, u32::from(self.planes));
        Field::BITS_PER_PIXEL.write(&mut out, u32::from(self.bits_per_pixel));
        Field::COMPRESSION.write(&mut out, self.compression);
        Field::IMAGE_DATA_SIZE.write(&mut out, self.image_data_size);
        Field::X_PIXELS_PER_METER.write(&mut out, self.x_pixels_per_meter);
        Field::Y_PIXELS_PER_METER.write(&mut out, self.y_pixels_per_meter);
        Field::COLORS_USED.write(&mut out, self.colors_used);
        Field::COLORS_IMPORTANT.write(&mut out, self.colors_important);
        out
    }
}
