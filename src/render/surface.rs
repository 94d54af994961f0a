use crate::assets::decode::PreparedFrame;
use crate::foundation::core::{Rect, Viewport};
use crate::foundation::error::ScrollframeResult;

/// A surface readback as RGBA8 pixels.
///
/// Pixels are **premultiplied** alpha, tightly packed and row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// RGBA bytes of the pixel at `(x, y)`, if inside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Drawing-surface collaborator the player paints onto.
///
/// The player is its only writer; implementations need no internal synchronization.
pub trait Surface {
    /// Current pixel size.
    fn size(&self) -> Viewport;

    /// Resize to `size`. Contents after a resize are unspecified until the next draw.
    fn resize(&mut self, size: Viewport) -> ScrollframeResult<()>;

    /// Get `frame` ready for [`draw_frame`](Self::draw_frame). Runs before the surface is
    /// cleared, so an error here leaves the current contents on screen.
    fn prepare_frame(&mut self, _frame: &PreparedFrame) -> ScrollframeResult<()> {
        Ok(())
    }

    /// Clear every pixel to transparent.
    fn clear(&mut self);

    /// Draw `frame` scaled into the destination rectangle `dst` (may extend past the edges).
    fn draw_frame(&mut self, frame: &PreparedFrame, dst: Rect) -> ScrollframeResult<()>;

    /// Read back the current contents.
    fn snapshot(&self) -> FrameRGBA;
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
