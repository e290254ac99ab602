//! Core types module - shared data structures and constants
//!
//! This module defines the small value types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! from the deterministic core, the terminal layer, and the input layer alike.
//!
//! # Timing Constants
//!
//! The simulation runs on whole-millisecond ticks. Every timer in the core is
//! expressed as a number of ticks, never as a number of rendered frames.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 1 | Length of one simulation tick |
//! | `DEFAULT_MOVE_INTERVAL_TICKS` | 7 | Ticks between one-pixel steps of a walking character |
//! | `DEFAULT_WALK_FRAME_DIVISOR` | 2 | Walk animations play this many times faster than authored |
//! | `DEFAULT_FRAME_INTERVAL_MS` | 16 | Render pacing of the terminal loop (~60 FPS) |
//! | `DEFAULT_KEY_RELEASE_TIMEOUT_MS` | 550 | Held-key fallback for terminals without release events |
//!
//! # Canvas
//!
//! The scene is composed on a fixed pixel canvas (500x375 by default) which the
//! terminal layer scales into whatever viewport is available.
//!
//! # Examples
//!
//! ```
//! use tui_sidescroll_types::{Facing, Position};
//!
//! let p = Position::new(30, 230);
//! assert_eq!(p.offset(Facing::Left.step()), Position::new(29, 230));
//! assert_eq!(Facing::Left.opposite(), Facing::Right);
//! ```

/// Length of one simulation tick in milliseconds.
pub const TICK_MS: u64 = 1;

/// Default pixel canvas width.
pub const CANVAS_WIDTH: u32 = 500;

/// Default pixel canvas height.
pub const CANVAS_HEIGHT: u32 = 375;

/// Default spawn position of the controlled character (top-left of its sprite).
pub const DEFAULT_START_POSITION: Position = Position::new(30, 230);

/// Ticks between one-pixel movement steps of a walking character.
pub const DEFAULT_MOVE_INTERVAL_TICKS: u32 = 7;

/// Walk animations are authored slow; their frame duration is divided by this.
pub const DEFAULT_WALK_FRAME_DIVISOR: u32 = 2;

/// Render pacing for the terminal loop (16ms ≈ 60 FPS).
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

/// How long a key counts as held without a refresh when the terminal does not
/// report key releases. Must exceed the typical auto-repeat start delay.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 550;

/// Signed integer pixel position (top-left corner of a sprite).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by `delta`, saturating at the `i32` range.
    pub fn offset(self, delta: Position) -> Self {
        Self {
            x: self.x.saturating_add(delta.x),
            y: self.y.saturating_add(delta.y),
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Horizontal facing of a directional character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Unit movement delta for one step in this direction.
    ///
    /// ```
    /// use tui_sidescroll_types::{Facing, Position};
    ///
    /// assert_eq!(Facing::Left.step(), Position::new(-1, 0));
    /// assert_eq!(Facing::Right.step(), Position::new(1, 0));
    /// ```
    pub const fn step(self) -> Position {
        match self {
            Facing::Left => Position::new(-1, 0),
            Facing::Right => Position::new(1, 0),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }
}

/// Logical keys the simulation cares about, independent of the physical binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    Left,
    Right,
}

impl LogicalKey {
    pub fn facing(self) -> Facing {
        match self {
            LogicalKey::Left => Facing::Left,
            LogicalKey::Right => Facing::Right,
        }
    }
}
