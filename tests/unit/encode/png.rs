use super::*;
use crate::foundation::core::Rgba8Premul;

#[test]
fn encode_png_decodes_back_unpremultiplied() {
    let mut canvas = Canvas::new(86, 80).unwrap();
    let stride = 86 * 4;
    let bytes = canvas.as_bytes_mut();
    bytes[6 * stride + 5 * 4..][..4]
        .copy_from_slice(&Rgba8Premul::from_straight_rgba(200, 100, 50, 255).to_array());
    bytes[8 * stride + 7 * 4..][..4]
        .copy_from_slice(&Rgba8Premul::from_straight_rgba(255, 0, 0, 128).to_array());

    let bytes = encode_png(&canvas).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (86, 80));
    assert_eq!(decoded.get_pixel(5, 6).0, [200, 100, 50, 255]);
    assert_eq!(decoded.get_pixel(7, 8).0, [255, 0, 0, 128]);
    assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0, 0]);
}

#[test]
fn encode_png_is_deterministic() {
    let canvas = Canvas::filled(4, 4, Rgba8Premul::from_array([10, 20, 30, 40])).unwrap();
    assert_eq!(encode_png(&canvas).unwrap(), encode_png(&canvas).unwrap());
}

#[test]
fn write_png_creates_parent_dirs() {
    let dir = std::env::temp_dir()
        .join(format!("teeforge-png-{}", std::process::id()))
        .join("nested");
    let _ = std::fs::remove_dir_all(&dir);
    let path = dir.join("avatar.png");

    write_png(&Canvas::new(2, 2).unwrap(), &path).unwrap();
    let decoded = image::open(&path).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (2, 2));

    let _ = std::fs::remove_dir_all(&dir);
}
