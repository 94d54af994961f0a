use std::sync::Arc;

use crate::assets::decode::PreparedFrame;
use crate::foundation::core::{Affine, Rect, Viewport};
use crate::foundation::error::{ScrollframeError, ScrollframeResult};
use crate::render::surface::{FrameRGBA, Surface};

#[derive(Clone)]
struct FramePaint {
    source: Arc<Vec<u8>>,
    paint: vello_cpu::Image,
}

/// [`Surface`] backed by a `vello_cpu` pixmap.
pub struct CpuSurface {
    size: Viewport,
    pixmap: vello_cpu::Pixmap,
    ctx: Option<vello_cpu::RenderContext>,
    // Repaints of the same frame (resize, region leave) reuse the converted pixmap.
    last_paint: Option<FramePaint>,
}

impl CpuSurface {
    /// Transparent surface of `size`.
    pub fn new(size: Viewport) -> ScrollframeResult<Self> {
        let (w, h) = edges_u16(size)?;
        Ok(Self {
            size,
            pixmap: vello_cpu::Pixmap::new(w, h),
            ctx: None,
            last_paint: None,
        })
    }

    fn paint_for(&mut self, frame: &PreparedFrame) -> ScrollframeResult<vello_cpu::Image> {
        if let Some(p) = &self.last_paint
            && Arc::ptr_eq(&p.source, &frame.rgba8_premul)
        {
            return Ok(p.paint.clone());
        }
        let pixmap = pixmap_from_premul_bytes(&frame.rgba8_premul, frame.width, frame.height)?;
        let paint = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };
        self.last_paint = Some(FramePaint {
            source: Arc::clone(&frame.rgba8_premul),
            paint: paint.clone(),
        });
        Ok(paint)
    }
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("size", &self.size)
            .field("has_ctx", &self.ctx.is_some())
            .finish()
    }
}

impl Surface for CpuSurface {
    fn size(&self) -> Viewport {
        self.size
    }

    fn resize(&mut self, size: Viewport) -> ScrollframeResult<()> {
        if size == self.size {
            return Ok(());
        }
        let (w, h) = edges_u16(size)?;
        self.pixmap = vello_cpu::Pixmap::new(w, h);
        self.ctx = None;
        self.size = size;
        Ok(())
    }

    fn prepare_frame(&mut self, frame: &PreparedFrame) -> ScrollframeResult<()> {
        if frame.width == 0 || frame.height == 0 {
            return Ok(());
        }
        self.paint_for(frame).map(|_| ())
    }

    fn clear(&mut self) {
        self.pixmap.data_as_u8_slice_mut().fill(0);
    }

    fn draw_frame(&mut self, frame: &PreparedFrame, dst: Rect) -> ScrollframeResult<()> {
        if frame.width == 0 || frame.height == 0 {
            return Ok(());
        }
        let paint = self.paint_for(frame)?;
        let (w, h) = (self.pixmap.width(), self.pixmap.height());
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == w && ctx.height() == h => ctx,
            _ => vello_cpu::RenderContext::new(w, h),
        };
        ctx.reset();

        let (fw, fh) = (f64::from(frame.width), f64::from(frame.height));
        let placement = Affine::translate((dst.x0, dst.y0))
            * Affine::scale_non_uniform(dst.width() / fw, dst.height() / fh);
        ctx.set_transform(affine_to_cpu(placement));
        ctx.set_paint(paint);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, fw, fh));
        ctx.flush();
        ctx.render_to_pixmap(&mut self.pixmap);

        self.ctx = Some(ctx);
        Ok(())
    }

    fn snapshot(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.size.width,
            height: self.size.height,
            data: self.pixmap.data_as_u8_slice().to_vec(),
        }
    }
}

fn edges_u16(size: Viewport) -> ScrollframeResult<(u16, u16)> {
    size.validate()?;
    let w: u16 = size
        .width
        .try_into()
        .map_err(|_| ScrollframeError::render("surface width exceeds u16"))?;
    let h: u16 = size
        .height
        .try_into()
        .map_err(|_| ScrollframeError::render("surface height exceeds u16"))?;
    Ok((w, h))
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> ScrollframeResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| ScrollframeError::render("frame width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| ScrollframeError::render("frame height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(ScrollframeError::render("frame byte len mismatch"));
    }
    let mut translucent = false;
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| {
            translucent |= px[3] != 255;
            vello_cpu::peniko::color::PremulRgba8 {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            }
        })
        .collect::<Vec<_>>();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        translucent,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
