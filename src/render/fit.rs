use crate::foundation::core::{Rect, Viewport};

/// Aspect-fill ("cover") placement of a `frame_w x frame_h` image on `surface`.
///
/// When the surface is relatively wider than the frame, the frame is fit to the surface width
/// and centered vertically; otherwise it is fit to the surface height and centered horizontally.
/// The overflowing axis extends past the surface and is cropped by the raster.
///
/// Aspects are compared on integer cross products. 800x600 on 1920x1080 comes out at exactly
/// 1920x1440 with a -180 top offset.
pub fn cover_rect(frame_w: u32, frame_h: u32, surface: Viewport) -> Rect {
    let (sw, sh) = (f64::from(surface.width), f64::from(surface.height));
    if frame_w == 0 || frame_h == 0 {
        return Rect::new(0.0, 0.0, sw, sh);
    }
    let (fw, fh) = (f64::from(frame_w), f64::from(frame_h));

    // surface_w / surface_h > frame_w / frame_h
    let surface_wider = u64::from(surface.width) * u64::from(frame_h)
        > u64::from(surface.height) * u64::from(frame_w);

    if surface_wider {
        let draw_h = sw * fh / fw;
        let y = (sh - draw_h) / 2.0;
        Rect::new(0.0, y, sw, y + draw_h)
    } else {
        let draw_w = sh * fw / fh;
        let x = (sw - draw_w) / 2.0;
        Rect::new(x, 0.0, x + draw_w, sh)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/fit.rs"]
mod tests;
