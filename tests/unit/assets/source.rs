use std::io::Cursor;
use std::path::PathBuf;

use super::*;

#[test]
fn normalize_path_slash_normalization() {
    assert_eq!(normalize_rel_path("a/b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("a\\b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("./a//b.png").unwrap(), "a/b.png");
    assert!(normalize_rel_path("../x.png").is_err());
    assert!(normalize_rel_path("/abs.png").is_err());
    assert!(normalize_rel_path("").is_err());
}

#[test]
fn dir_source_loads_and_reports_missing_files() {
    let dir = PathBuf::from("target").join("unit_dir_source");
    std::fs::create_dir_all(dir.join("intro")).unwrap();

    let img = image::RgbaImage::from_pixel(4, 2, image::Rgba([1, 2, 3, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    std::fs::write(dir.join("intro").join("f_000.png"), &buf).unwrap();
    std::fs::write(dir.join("intro").join("f_001.png"), b"broken").unwrap();

    let source = DirFrameSource::new(&dir);
    assert_eq!(source.root(), dir.as_path());
    let frame = source.load("intro/f_000.png").unwrap();
    assert_eq!(frame.dimensions(), (4, 2));

    let decode_err = source.load("intro/f_001.png").unwrap_err();
    assert!(decode_err.to_string().contains("load error:"));
    assert!(source.load("intro/f_999.png").is_err());
    assert!(source.load("../escape.png").is_err());
}
