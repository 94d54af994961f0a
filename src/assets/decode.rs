use std::sync::Arc;

use anyhow::Context;

use crate::foundation::core::Viewport;
use crate::foundation::error::{ScrollframeError, ScrollframeResult};
use crate::foundation::math::premultiply_rgba8_in_place;

#[derive(Clone, Debug)]
/// Decoded frame image in premultiplied RGBA8 form.
pub struct PreparedFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl PreparedFrame {
    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Decode an encoded image (PNG, JPEG, WebP, ...) into a [`PreparedFrame`].
///
/// Frames with an edge over [`Viewport::MAX_EDGE`] cannot be rasterized and fail to load.
pub fn decode_frame(bytes: &[u8]) -> ScrollframeResult<PreparedFrame> {
    let dyn_img = image::load_from_memory(bytes).context("decode frame image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width > Viewport::MAX_EDGE || height > Viewport::MAX_EDGE {
        return Err(ScrollframeError::load(format!(
            "frame is {width}x{height}, edges are limited to {}",
            Viewport::MAX_EDGE
        )));
    }

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedFrame {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
