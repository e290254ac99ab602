//! TUI side-scroller (workspace facade crate).
//!
//! Re-exports the member crates as `tui_sidescroll::{assets,core,input,term,types}`
//! and adds the application layer used by the binary: scene manifests and
//! runtime configuration ([`config`]), logging setup ([`logging`]), and scene
//! construction from a manifest ([`setup`]).

pub mod config;
pub mod logging;
pub mod setup;

pub use tui_sidescroll_assets as assets;
pub use tui_sidescroll_core as core;
pub use tui_sidescroll_input as input;
pub use tui_sidescroll_term as term;
pub use tui_sidescroll_types as types;
