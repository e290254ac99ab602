//! PixelCanvas: fixed-size RGB surface the scene is composed on.

use std::convert::Infallible;

use crate::assets::PixelImage;
use crate::core::Canvas;
use crate::fb::Rgb;
use crate::types::Position;

/// Opaque RGB pixels, row-major. Frames are alpha-blended on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
    presented: u64,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::default(); (width as usize) * (height as usize)],
            presented: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y as usize) * (self.width as usize) + (x as usize)])
    }

    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Number of completed presents (headless use).
    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// Alpha-blend `frame` with its top-left corner at `at`, clipped to the canvas.
    pub fn blit(&mut self, frame: &PixelImage, at: Position) {
        let src = frame.as_rgba();
        let x0 = i64::from(at.x).max(0);
        let y0 = i64::from(at.y).max(0);
        let x1 = (i64::from(at.x) + i64::from(src.width())).min(i64::from(self.width));
        let y1 = (i64::from(at.y) + i64::from(src.height())).min(i64::from(self.height));

        for y in y0..y1 {
            let sy = (y - i64::from(at.y)) as u32;
            let row = (y as usize) * (self.width as usize);
            for x in x0..x1 {
                let sx = (x - i64::from(at.x)) as u32;
                let [r, g, b, a] = src.get_pixel(sx, sy).0;
                if a == 0 {
                    continue;
                }
                let dst = &mut self.pixels[row + x as usize];
                *dst = if a == u8::MAX {
                    Rgb::new(r, g, b)
                } else {
                    Rgb::new(blend(r, dst.r, a), blend(g, dst.g, a), blend(b, dst.b, a))
                };
            }
        }
    }
}

fn blend(src: u8, dst: u8, alpha: u8) -> u8 {
    let a = u32::from(alpha);
    ((u32::from(src) * a + u32::from(dst) * (255 - a) + 127) / 255) as u8
}

impl Canvas<PixelImage> for PixelCanvas {
    type Error = Infallible;

    fn draw_frame(&mut self, frame: &PixelImage, at: Position) {
        self.blit(frame, at);
    }

    fn present(&mut self) -> Result<(), Infallible> {
        self.presented += 1;
        Ok(())
    }
}
