//! Terminal input module (engine-facing).
//!
//! Maps
//! `crossterm` key events onto [`crate::types::LogicalKey`]s, tracks which of
//! them are held (including on terminals without key-release events), and
//! drains pending events without blocking the simulation.

pub mod held;
pub mod map;
pub mod pump;

pub use tui_sidescroll_types as types;

pub use held::HeldKeys;
pub use map::{logical_key, should_quit};
pub use pump::{disable_key_release_events, enable_key_release_events, pump_events, InputPoll};
