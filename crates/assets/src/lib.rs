//! Asset module - decoding art files into frames.
//!
//! Bridges the `image` crate to the core's collaborator traits:
//!
//! - [`PixelImage`] implements [`core::FrameImage`] (size, horizontal mirroring)
//! - [`ImageLoader`] implements [`core::AssetLoader`] for still images (any
//!   format `image` can open) and animated GIFs
//!
//! Loading is a startup-only concern; any failure is an
//! [`AssetError`](core::AssetError) and aborts before the main loop.

pub mod loader;
pub mod pixel;

pub use tui_sidescroll_core as core;

pub use loader::ImageLoader;
pub use pixel::PixelImage;
