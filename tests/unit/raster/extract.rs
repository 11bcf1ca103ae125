use std::sync::Arc;

use super::*;

/// 4x3 image whose pixel (x, y) is [x, y, x + y, 255].
fn coord_image() -> SkinImage {
    let (w, h) = (4u32, 3u32);
    let mut data = Vec::new();
    for y in 0..h {
        for x in 0..w {
            data.extend_from_slice(&[x as u8, y as u8, (x + y) as u8, 255]);
        }
    }
    SkinImage::from_premul_rgba8(w, h, data).unwrap()
}

#[test]
fn extract_copies_subregion_exactly() {
    let img = coord_image();
    let region = extract(&img, "patch", SheetRect::new(1, 1, 2, 2)).unwrap();
    assert_eq!((region.width, region.height), (2, 2));
    assert_eq!(
        region.rgba8_premul,
        vec![
            1, 1, 2, 255, 2, 1, 3, 255, //
            1, 2, 3, 255, 2, 2, 4, 255,
        ]
    );
}

#[test]
fn extract_full_image_is_identity() {
    let img = coord_image();
    let region = extract(&img, "all", SheetRect::new(0, 0, 4, 3)).unwrap();
    assert_eq!(region.rgba8_premul.as_slice(), img.rgba8_premul.as_slice());
}

#[test]
fn extract_keeps_alpha() {
    let img = SkinImage::from_premul_rgba8(1, 1, vec![10, 20, 30, 40]).unwrap();
    let region = extract(&img, "px", SheetRect::new(0, 0, 1, 1)).unwrap();
    assert_eq!(region.pixel(0, 0).unwrap().to_array(), [10, 20, 30, 40]);
    assert_eq!(region.pixel(1, 0), None);
}

#[test]
fn extract_past_edge_is_out_of_bounds() {
    let img = coord_image();
    for rect in [
        SheetRect::new(3, 0, 2, 1),
        SheetRect::new(0, 2, 1, 2),
        SheetRect::new(4, 0, 1, 1),
        SheetRect::new(u32::MAX, 0, 1, 1),
    ] {
        match extract(&img, "patch", rect) {
            Err(TeeError::OutOfBounds {
                element,
                rect: r,
                width,
                height,
            }) => {
                assert_eq!(element, "patch");
                assert_eq!(r, rect);
                assert_eq!((width, height), (4, 3));
            }
            other => panic!("expected OutOfBounds for {rect}, got {other:?}"),
        }
    }
}

#[test]
fn extract_does_not_touch_source() {
    let img = coord_image();
    let before = img.clone();
    let _ = extract(&img, "patch", SheetRect::new(0, 0, 2, 2)).unwrap();
    assert_eq!(img, before);
}

#[test]
fn extract_rejects_buffer_shorter_than_dimensions() {
    let img = SkinImage {
        width: 256,
        height: 128,
        rgba8_premul: Arc::new(vec![0; 16]),
    };
    let err = extract(&img, "body", SheetRect::new(0, 0, 96, 96)).unwrap_err();
    assert!(matches!(err, TeeError::Validation(ref msg) if msg.contains("16 bytes")));
}
