use super::*;

#[test]
fn premultiply_matches_rounded_formula() {
    let mut px = [100u8, 50, 200, 128];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(
        px,
        [
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128
        ]
    );

    let mut clear = [9u8, 9, 9, 0];
    premultiply_rgba8_in_place(&mut clear);
    assert_eq!(clear, [0, 0, 0, 0]);

    let mut opaque = [1u8, 2, 3, 255];
    premultiply_rgba8_in_place(&mut opaque);
    assert_eq!(opaque, [1, 2, 3, 255]);
}

#[test]
fn clamp01_handles_out_of_range_and_nan() {
    assert_eq!(clamp01(-0.01), 0.0);
    assert_eq!(clamp01(1.02), 1.0);
    assert_eq!(clamp01(0.4), 0.4);
    assert_eq!(clamp01(f64::NAN), 0.0);
}

#[test]
fn lerp_endpoints() {
    assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
    assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
}
