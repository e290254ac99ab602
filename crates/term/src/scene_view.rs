//! SceneView: maps a composed `PixelCanvas` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::PixelCanvas;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Scales the canvas down (nearest neighbour, uniform factor) until it fits,
/// centres it, and optionally reserves the bottom row for a status line.
#[derive(Debug, Clone)]
pub struct SceneView {
    status_style: CellStyle,
    letterbox: Rgb,
}

impl Default for SceneView {
    fn default() -> Self {
        Self {
            status_style: CellStyle {
                fg: Rgb::new(200, 200, 200),
                bg: Rgb::new(0, 0, 0),
                bold: true,
            },
            letterbox: Rgb::new(0, 0, 0),
        }
    }
}

impl SceneView {
    /// Integer downscale factor for `canvas` in `cols` x `rows` cells.
    pub fn scale_for(canvas: &PixelCanvas, cols: u16, rows: u16) -> u32 {
        let cols = u32::from(cols).max(1);
        let px_rows = 2 * u32::from(rows).max(1);
        canvas
            .width()
            .div_ceil(cols)
            .max(canvas.height().div_ceil(px_rows))
            .max(1)
    }

    /// Render into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(
        &self,
        canvas: &PixelCanvas,
        status: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::pixels(self.letterbox, self.letterbox));

        let status_rows = u16::from(status.is_some() && viewport.height > 1);
        let rows = viewport.height - status_rows;
        if viewport.width == 0 || rows == 0 {
            return;
        }

        let scale = Self::scale_for(canvas, viewport.width, rows);
        let out_w = canvas.width().div_ceil(scale);
        let out_rows = canvas.height().div_ceil(scale).div_ceil(2);
        let origin_x = (u32::from(viewport.width) - out_w) / 2;
        let origin_y = (u32::from(rows) - out_rows) / 2;

        let sample = |x: u32, y: u32| canvas.pixel(x, y).unwrap_or(self.letterbox);
        for cy in 0..out_rows {
            for cx in 0..out_w {
                let px = cx * scale;
                let top = sample(px, 2 * cy * scale);
                let bottom = sample(px, (2 * cy + 1) * scale);
                fb.set(
                    (origin_x + cx) as u16,
                    (origin_y + cy) as u16,
                    Cell::pixels(top, bottom),
                );
            }
        }

        if let Some(text) = status.filter(|_| status_rows == 1) {
            let y = viewport.height - 1;
            for x in 0..viewport.width {
                fb.set(x, y, Cell { ch: ' ', style: self.status_style });
            }
            fb.put_str(0, y, text, self.status_style);
        }
    }

    pub fn render(&self, canvas: &PixelCanvas, status: Option<&str>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(canvas, status, viewport, &mut fb);
        fb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_to_one_when_it_fits() {
        let canvas = PixelCanvas::new(4, 4);
        assert_eq!(SceneView::scale_for(&canvas, 4, 2), 1);
    }

    #[test]
    fn scale_is_uniform_and_picks_tighter_axis() {
        let canvas = PixelCanvas::new(500, 375);
        // 80 columns => ceil(500/80)=7, 23 rows => ceil(375/46)=9.
        assert_eq!(SceneView::scale_for(&canvas, 80, 23), 9);
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let canvas = PixelCanvas::new(10, 10);
        let view = SceneView::default();
        let fb = view.render(&canvas, Some("status"), Viewport::new(0, 0));
        assert_eq!((fb.width(), fb.height()), (0, 0));
        let fb = view.render(&canvas, Some("status"), Viewport::new(3, 1));
        assert_eq!(fb.height(), 1);
    }
}
