//! Typed pixel input via `rgb` and `imgref`.
#![cfg(feature = "imgref")]

use zenbmpuri::*;

fn rgba(r: u8, g: u8, b: u8, a: u8) -> rgb::Rgba<u8> {
    rgb::Rgba { r, g, b, a }
}

fn sample_pixels() -> Vec<rgb::Rgba<u8>> {
    vec![
        rgba(255, 0, 0, 255),
        rgba(0, 255, 0, 128),
        rgba(0, 0, 255, 0),
        rgba(255, 255, 255, 255),
    ]
}

#[test]
fn typed_rgba_matches_bytes() {
    let pixels = sample_pixels();
    let bytes: Vec<u8> = pixels.iter().flat_map(|p| [p.r, p.g, p.b, p.a]).collect();

    let mut typed = BitmapEncoder::new();
    typed.load_pixels(&pixels, 2, 2).unwrap();
    let mut raw = BitmapEncoder::new();
    raw.load(&bytes, 2, 2).unwrap();
    assert_eq!(typed.encode(), raw.encode());
}

#[test]
fn typed_layouts_agree() {
    let rgba = sample_pixels();
    let rgb: Vec<rgb::Rgb<u8>> = rgba
        .iter()
        .map(|p| rgb::Rgb {
            r: p.r,
            g: p.g,
            b: p.b,
        })
        .collect();
    let bgra: Vec<rgb::alt::BGRA<u8>> = rgba
        .iter()
        .map(|p| rgb::alt::BGRA {
            b: p.b,
            g: p.g,
            r: p.r,
            a: p.a,
        })
        .collect();
    let bgr: Vec<rgb::alt::BGR<u8>> = rgba
        .iter()
        .map(|p| rgb::alt::BGR {
            b: p.b,
            g: p.g,
            r: p.r,
        })
        .collect();

    let mut reference = BitmapEncoder::new();
    reference.load_pixels(&rgba, 2, 2).unwrap();
    let expected = reference.encode();

    let mut enc = BitmapEncoder::new();
    enc.load_pixels(&rgb, 2, 2).unwrap();
    assert_eq!(enc.encode(), expected);
    enc.load_pixels(&bgra, 2, 2).unwrap();
    assert_eq!(enc.encode(), expected);
    enc.load_pixels(&bgr, 2, 2).unwrap();
    assert_eq!(enc.encode(), expected);
}

#[test]
fn imgref_stride_is_honored() {
    // 2x2 image inside a 3-pixel-wide buffer; the third column is junk.
    let junk = rgba(7, 7, 7, 7);
    let p = sample_pixels();
    let buf = vec![p[0], p[1], junk, p[2], p[3], junk];
    let img = imgref::Img::new_stride(&buf[..], 2, 2, 3);

    let mut strided = BitmapEncoder::new();
    strided.load_img(img).unwrap();

    let mut packed = BitmapEncoder::new();
    packed.load_pixels(&p, 2, 2).unwrap();
    assert_eq!(strided.encode(), packed.encode());
}

#[test]
fn typed_short_slice_rejected() {
    let pixels = sample_pixels();
    let err = BitmapEncoder::new()
        .load_pixels(&pixels[..3], 2, 2)
        .unwrap_err();
    assert!(matches!(
        err,
        BitmapError::BufferTooSmall {
            needed: 16,
            actual: 12
        }
    ));
}
