//! PixelImage: an RGBA frame backed by `image::RgbaImage`.

use std::rc::Rc;

use image::{imageops, Rgba, RgbaImage};

use crate::core::FrameImage;

/// Immutable RGBA frame. Clones share pixel storage.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelImage {
    pixels: Rc<RgbaImage>,
}

impl PixelImage {
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self {
            pixels: Rc::new(pixels),
        }
    }

    /// A uniformly colored image.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self::from_rgba(RgbaImage::from_pixel(width, height, Rgba(rgba)))
    }

    /// RGBA at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixels.get_pixel_checked(x, y).map(|p| p.0)
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl FrameImage for PixelImage {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn mirrored(&self) -> Self {
        Self::from_rgba(imageops::flip_horizontal(self.pixels.as_ref()))
    }
}
