//! Terminal "scene renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. Frames are
//! composed on a fixed-size pixel canvas, scaled into the terminal with
//! half-block cells (two pixels per cell), and flushed as a diff against the
//! previous frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the pixel-to-cell mapping pure ([`SceneView`]) so it can be unit-tested
//! - Touch the terminal only from [`TerminalRenderer`]

pub mod canvas;
pub mod fb;
pub mod renderer;
pub mod scene_view;
pub mod terminal_canvas;

pub use tui_sidescroll_assets as assets;
pub use tui_sidescroll_core as core;
pub use tui_sidescroll_types as types;

pub use canvas::PixelCanvas;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb, HALF_BLOCK};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scene_view::{SceneView, Viewport};
pub use terminal_canvas::TerminalCanvas;
