use super::*;

#[test]
fn frame_index_displays_zero_padded() {
    assert_eq!(FrameIndex(7).to_string(), "007");
    assert_eq!(FrameIndex(67).to_string(), "067");
    assert_eq!(FrameIndex(1234).to_string(), "1234");
}

#[test]
fn viewport_rejects_empty_and_oversized_edges() {
    assert!(Viewport::new(0, 10).is_err());
    assert!(Viewport::new(10, 0).is_err());
    assert!(Viewport::new(70_000, 10).is_err());
    let vp = Viewport::new(1920, 1080).unwrap();
    assert_eq!(vp.rect(), Rect::new(0.0, 0.0, 1920.0, 1080.0));
}

#[test]
fn viewport_default_is_full_hd() {
    let vp = Viewport::default();
    assert_eq!((vp.width, vp.height), (1920, 1080));
    vp.validate().unwrap();
}
