#![no_main]
use libfuzzer_sys::fuzz_target;
use zenbmpuri::*;

fuzz_target!(|data: &[u8]| {
    let [w, h, rest @ ..] = data else {
        return;
    };
    let width = u32::from(*w);
    let height = u32::from(*h);

    let mut encoder = BitmapEncoder::new();
    if encoder.load(rest, width, height).is_err() {
        // A rejected load must not disturb the empty encoder
        assert!(encoder.is_empty());
        assert_eq!(encoder.encode().len(), HEADER_SIZE);
        return;
    }

    let bytes = encoder.encode();
    let data_size = Field::IMAGE_DATA_SIZE.read(&bytes).unwrap();
    let file_size = Field::FILE_SIZE.read(&bytes).unwrap();
    assert_eq!(u64::from(data_size), row_size(width) * u64::from(height));
    assert_eq!(file_size, data_size + 54);
    assert_eq!(bytes.len(), file_size as usize);
    assert_eq!(encoder.encode(), bytes, "encode must be idempotent");

    let uri = encoder.to_data_uri();
    assert!(uri.starts_with(DATA_URI_PREFIX));
});
