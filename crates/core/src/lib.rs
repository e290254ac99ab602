//! Core simulation module - pure, deterministic, and testable
//!
//! This crate holds the timing and state model of the side-scroller. It has
//! **no dependencies** on terminals, image codecs, or wall clocks: every host
//! capability comes in through a small trait, which keeps it
//!
//! - **Deterministic**: the same sequence of clock readings and key samples
//!   always produces the same frames and positions
//! - **Testable**: frames can be any type implementing [`FrameImage`]
//! - **Frame-rate independent**: timers count ticks, not render calls
//!
//! # Module Structure
//!
//! - [`timebase`]: clock readings to whole-millisecond ticks
//! - [`frame`]: frame sequences and the collaborator traits ([`AssetLoader`], [`Canvas`])
//! - [`sprite`]: [`AnimatedSprite`] with independent frame and movement timers
//! - [`character`]: [`DirectionalCharacter`], four variants plus the facing/walking state machine
//! - [`scene`]: [`Scene`], lock-step tick replay and painting
//!
//! # Example
//!
//! ```
//! use tui_sidescroll_core::{AnimatedSprite, DirectionalCharacter, FrameImage, Scene};
//! use tui_sidescroll_types::Facing;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Art(&'static str);
//!
//! impl FrameImage for Art {
//!     fn width(&self) -> u32 { 16 }
//!     fn height(&self) -> u32 { 32 }
//!     fn mirrored(&self) -> Self { self.clone() }
//! }
//!
//! let hero = DirectionalCharacter::from_sprites(
//!     None,
//!     Some(AnimatedSprite::still(Art("idle"))),
//!     None,
//!     Some(AnimatedSprite::still(Art("walk"))),
//! )
//! .unwrap();
//!
//! let mut scene = Scene::new();
//! let id = scene.push_character(hero);
//! scene.set_controlled(id);
//!
//! // Left twice: turn, then walk.
//! scene.handle_directional_input(true, false);
//! scene.handle_directional_input(true, false);
//! assert_eq!(scene.update(10).unwrap(), 10);
//!
//! let hero = scene.controlled().unwrap();
//! assert_eq!(hero.facing(), Facing::Left);
//! assert!(hero.is_walking());
//! assert_eq!(hero.position().x, -10);
//! ```
//!
//! # Timing
//!
//! One tick is one millisecond. [`Scene::update`] replays exactly as many ticks
//! as milliseconds passed since the previous call: infrequent calls produce
//! larger catch-up batches, calls faster than 1kHz produce zero-tick no-ops.

pub mod character;
pub mod error;
pub mod frame;
pub mod scene;
pub mod sprite;
pub mod timebase;

pub use tui_sidescroll_types as types;

// Re-export commonly used types for convenience
pub use character::{CharacterAssets, DirectionalCharacter};
pub use error::{AssetError, ClockError};
pub use frame::{AssetLoader, Canvas, FrameImage, FrameSequence};
pub use scene::{Entity, EntityId, Scene};
pub use sprite::AnimatedSprite;
pub use timebase::{normalize_ticks, Clock, MonotonicClock, Timebase};
