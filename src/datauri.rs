//! `data:` URI wrapping.

use alloc::string::String;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

/// Prefix of every BMP data URI produced by this crate.
pub const DATA_URI_PREFIX: &str = "data:image/bmp;base64,";

/// Wrap encoded BMP bytes in a `data:image/bmp;base64,` URI.
///
/// Uses the standard, padded base64 alphabet. The bytes are not validated.
pub fn to_data_uri(bmp: &[u8]) -> String {
    let mut uri = String::with_capacity(DATA_URI_PREFIX.len() + bmp.len().div_ceil(3) * 4);
    uri.push_str(DATA_URI_PREFIX);
    BASE64.encode_string(bmp, &mut uri);
    uri
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_and_payload() {
        assert_eq!(to_data_uri(b""), "data:image/bmp;base64,");
        assert_eq!(to_data_uri(b"BM"), "data:image/bmp;base64,Qk0=");
        assert_eq!(to_data_uri(&[0xFF, 0xFE, 0xFD]), "data:image/bmp;base64,//79");
    }

    #[test]
    fn capacity_is_exact() {
        for len in 0..10 {
            let uri = to_data_uri(&alloc::vec![0u8; len]);
            assert_eq!(uri.len(), DATA_URI_PREFIX.len() + len.div_ceil(3) * 4);
        }
    }
}
