//! Frame images, frame sequences, and the host collaborators that produce and
//! consume them.

use std::ops::Index;
use std::path::Path;
use std::rc::Rc;

use crate::error::AssetError;
use crate::types::Position;

/// An opaque, immutable frame image.
pub trait FrameImage {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Horizontally flipped copy.
    fn mirrored(&self) -> Self
    where
        Self: Sized;
}

/// Decodes art files into frames.
pub trait AssetLoader<F> {
    /// Load a still image.
    fn load_image(&mut self, path: &Path) -> Result<F, AssetError>;

    /// Load an animated image sequence, returning the per-frame duration in
    /// milliseconds and the frames in display order.
    fn load_animation(&mut self, path: &Path) -> Result<(u32, Vec<F>), AssetError>;
}

/// Render target for frames.
pub trait Canvas<F> {
    type Error;

    fn draw_frame(&mut self, frame: &F, at: Position);

    /// Show everything drawn since the last present.
    fn present(&mut self) -> Result<(), Self::Error>;
}

/// Non-empty, read-only, shareable sequence of frames.
#[derive(Debug)]
pub struct FrameSequence<F> {
    frames: Rc<[F]>,
}

impl<F> Clone for FrameSequence<F> {
    fn clone(&self) -> Self {
        Self {
            frames: Rc::clone(&self.frames),
        }
    }
}

impl<F> FrameSequence<F> {
    /// Build from decoded frames; `None` when `frames` is empty.
    pub fn new(frames: Vec<F>) -> Option<Self> {
        if frames.is_empty() {
            return None;
        }
        Some(Self {
            frames: frames.into(),
        })
    }

    pub fn single(frame: F) -> Self {
        Self {
            frames: Rc::from(vec![frame]),
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn first(&self) -> &F {
        &self.frames[0]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, F> {
        self.frames.iter()
    }

    /// True when both sequences share the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.frames, &other.frames)
    }
}

impl<F: FrameImage> FrameSequence<F> {
    pub fn mirrored(&self) -> Self {
        Self {
            frames: self.frames.iter().map(FrameImage::mirrored).collect(),
        }
    }
}

impl<F> Index<usize> for FrameSequence<F> {
    type Output = F;

    fn index(&self, index: usize) -> &F {
        &self.frames[index]
    }
}
