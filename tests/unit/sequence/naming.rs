use super::*;

#[test]
fn path_for_pads_to_three_digits() {
    let naming = FrameNaming::new("intro/foo_", ".png");
    assert_eq!(naming.path_for(FrameIndex(7)), "intro/foo_007.png");
    assert_eq!(naming.path_for(FrameIndex(0)), "intro/foo_000.png");
    assert_eq!(naming.path_for(FrameIndex(67)), "intro/foo_067.png");
}

#[test]
fn path_for_keeps_wide_indices_intact() {
    let naming = FrameNaming::new("f", ".jpg");
    assert_eq!(naming.path_for(FrameIndex(1234)), "f1234.jpg");
}

#[test]
fn prefix_with_spaces_is_kept_verbatim() {
    let naming = FrameNaming::new("intro/WhatsApp Video 2026-01-12 at 11.20.37_", ".png");
    assert_eq!(
        naming.path_for(FrameIndex(5)),
        "intro/WhatsApp Video 2026-01-12 at 11.20.37_005.png"
    );
}

#[test]
fn validate_rejects_escaping_prefixes_and_zero_pad() {
    assert!(FrameNaming::new("/abs/f_", ".png").validate().is_err());
    assert!(FrameNaming::new("../up/f_", ".png").validate().is_err());
    let mut naming = FrameNaming::new("f_", ".png");
    naming.pad_width = 0;
    assert!(naming.validate().is_err());
    assert!(FrameNaming::new("intro/f_", ".png").validate().is_ok());
}

#[test]
fn pad_width_defaults_when_omitted_in_json() {
    let naming: FrameNaming =
        serde_json::from_str(r#"{ "prefix": "a/", "extension": ".png" }"#).unwrap();
    assert_eq!(naming.pad_width, 3);
}
