//! Scene manifests and runtime configuration.
//!
//! A scene manifest is a JSON file naming the art for the background and the
//! controlled character. Every field is optional:
//!
//! ```json
//! {
//!   "canvas": { "width": 500, "height": 375 },
//!   "background": "bg.jpg",
//!   "character": {
//!     "idle_right": "char.gif",
//!     "walk_right": "walkanim.gif",
//!     "position": [30, 230],
//!     "move_interval_ms": 7,
//!     "walk_frame_divisor": 2
//!   }
//! }
//! ```
//!
//! Relative paths resolve against the manifest's directory.
//!
//! # Environment Variables
//!
//! - `SIDESCROLL_SCENE`: manifest path (the first CLI argument wins over it)
//! - `SIDESCROLL_FRAME_MS`: render pacing in milliseconds (default: 16)
//! - `SIDESCROLL_KEY_RELEASE_TIMEOUT_MS`: held-key fallback timeout (default: 550)
//! - `SIDESCROLL_LOG_PATH`: append logs to this file (default: no logging)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::CharacterAssets;
use crate::types::{
    Position, CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_FRAME_INTERVAL_MS, DEFAULT_KEY_RELEASE_TIMEOUT_MS,
    DEFAULT_MOVE_INTERVAL_TICKS, DEFAULT_START_POSITION, DEFAULT_WALK_FRAME_DIVISOR,
};

/// Directory the built-in demo scene loads its art from.
pub const CLASSIC_ASSET_DIR: &str = "assets";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CharacterManifest {
    pub idle_left: Option<PathBuf>,
    pub idle_right: Option<PathBuf>,
    pub walk_left: Option<PathBuf>,
    pub walk_right: Option<PathBuf>,
    pub position: [i32; 2],
    /// Ticks between one-pixel steps. `<= 0` means every tick.
    pub move_interval_ms: i64,
    /// Walk animations play this many times faster than authored. 0 acts as 1.
    pub walk_frame_divisor: u32,
}

impl Default for CharacterManifest {
    fn default() -> Self {
        Self {
            idle_left: None,
            idle_right: None,
            walk_left: None,
            walk_right: None,
            position: [DEFAULT_START_POSITION.x, DEFAULT_START_POSITION.y],
            move_interval_ms: i64::from(DEFAULT_MOVE_INTERVAL_TICKS),
            walk_frame_divisor: DEFAULT_WALK_FRAME_DIVISOR,
        }
    }
}

impl CharacterManifest {
    pub fn position(&self) -> Position {
        Position::new(self.position[0], self.position[1])
    }

    pub fn assets(&self) -> CharacterAssets {
        CharacterAssets {
            idle_left: self.idle_left.clone(),
            idle_right: self.idle_right.clone(),
            walk_left: self.walk_left.clone(),
            walk_right: self.walk_right.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneManifest {
    pub canvas: CanvasSize,
    pub background: Option<PathBuf>,
    pub character: CharacterManifest,
}

impl SceneManifest {
    /// The classic demo: a background plus a right-facing idle/walk pair,
    /// with the left-facing art mirrored.
    pub fn classic() -> Self {
        Self {
            background: Some("bg.jpg".into()),
            character: CharacterManifest {
                idle_right: Some("char.gif".into()),
                walk_right: Some("walkanim.gif".into()),
                ..CharacterManifest::default()
            },
            ..Self::default()
        }
        .resolve_paths(Path::new(CLASSIC_ASSET_DIR))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid scene manifest")
    }

    /// Read a manifest file and resolve its paths against its directory.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scene manifest {}", path.display()))?;
        let manifest =
            Self::from_json(&json).with_context(|| format!("in {}", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(manifest.resolve_paths(base))
    }

    /// Join every relative asset path onto `base`.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        let resolve = |p: &mut Option<PathBuf>| {
            if let Some(path) = p.as_mut() {
                if path.is_relative() {
                    *path = base.join(&*path);
                }
            }
        };
        resolve(&mut self.background);
        resolve(&mut self.character.idle_left);
        resolve(&mut self.character.idle_right);
        resolve(&mut self.character.walk_left);
        resolve(&mut self.character.walk_right);
        self
    }
}

/// Process-level settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub scene_path: Option<PathBuf>,
    pub frame_interval_ms: u64,
    pub key_release_timeout_ms: u64,
    pub log_path: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            scene_path: None,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            log_path: None,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let scene_path = non_empty(lookup("SIDESCROLL_SCENE")).map(PathBuf::from);

        let frame_interval_ms = lookup("SIDESCROLL_FRAME_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(defaults.frame_interval_ms);

        let key_release_timeout_ms = lookup("SIDESCROLL_KEY_RELEASE_TIMEOUT_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.key_release_timeout_ms);

        let log_path = non_empty(lookup("SIDESCROLL_LOG_PATH")).map(PathBuf::from);

        Self {
            scene_path,
            frame_interval_ms,
            key_release_timeout_ms,
            log_path,
        }
    }

    /// A first positional argument names the scene manifest.
    pub fn with_args(mut self, mut args: impl Iterator<Item = String>) -> Self {
        if let Some(path) = non_empty(args.next()) {
            self.scene_path = Some(PathBuf::from(path));
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_manifest_uses_defaults() {
        let m = SceneManifest::from_json("{}").unwrap();
        assert_eq!(m, SceneManifest::default());
        assert_eq!(m.canvas, CanvasSize { width: 500, height: 375 });
        assert_eq!(m.character.move_interval_ms, 7);
        assert_eq!(m.character.position(), Position::new(30, 230));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(SceneManifest::from_json(r#"{"backgrund": "x.png"}"#).is_err());
    }

    #[test]
    fn relative_paths_resolve_against_base() {
        let m = SceneManifest::from_json(
            r#"{"background": "bg.png", "character": {"idle_left": "/abs/idle.png"}}"#,
        )
        .unwrap()
        .resolve_paths(Path::new("levels"));
        assert_eq!(m.background, Some(PathBuf::from("levels/bg.png")));
        assert_eq!(m.character.idle_left, Some(PathBuf::from("/abs/idle.png")));
    }

    #[test]
    fn classic_scene_mirrors_left_art() {
        let m = SceneManifest::classic();
        let assets = m.character.assets();
        assert!(assets.idle_left.is_none());
        assert_eq!(assets.idle_right, Some(Path::new(CLASSIC_ASSET_DIR).join("char.gif")));
        assert_eq!(m.character.walk_frame_divisor, 2);
    }

    #[test]
    fn runtime_config_reads_lookup_and_args() {
        let cfg = RuntimeConfig::from_lookup(|key| match key {
            "SIDESCROLL_SCENE" => Some("env.json".to_string()),
            "SIDESCROLL_FRAME_MS" => Some("0".to_string()),
            "SIDESCROLL_KEY_RELEASE_TIMEOUT_MS" => Some(" 300 ".to_string()),
            "SIDESCROLL_LOG_PATH" => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(cfg.scene_path, Some(PathBuf::from("env.json")));
        assert_eq!(cfg.frame_interval_ms, DEFAULT_FRAME_INTERVAL_MS);
        assert_eq!(cfg.key_release_timeout_ms, 300);
        assert_eq!(cfg.log_path, None);

        let cfg = cfg.with_args(vec!["cli.json".to_string()].into_iter());
        assert_eq!(cfg.scene_path, Some(PathBuf::from("cli.json")));
    }
}
