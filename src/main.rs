//! Terminal side-scroller runner (default binary).
//!
//! Loads the scene named by the manifest (or the classic demo from `assets/`),
//! then alternates render → simulate catch-up → poll input until Escape, `q`,
//! or Ctrl-C. Left/right (or a/d, h/l) turn and walk the character.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use tui_sidescroll::assets::{ImageLoader, PixelImage};
use tui_sidescroll::config::{RuntimeConfig, SceneManifest};
use tui_sidescroll::core::{Clock, MonotonicClock, Scene};
use tui_sidescroll::input::{
    disable_key_release_events, enable_key_release_events, pump_events, HeldKeys,
};
use tui_sidescroll::logging::init_logging;
use tui_sidescroll::setup::build_scene;
use tui_sidescroll::term::TerminalCanvas;

const STATUS: &str = " ←/→ walk   esc quit";

fn main() -> Result<()> {
    let config = RuntimeConfig::from_env().with_args(std::env::args().skip(1));
    init_logging(config.log_path.as_deref())?;

    let manifest = match config.scene_path.as_deref() {
        Some(path) => SceneManifest::load(path)?,
        None => SceneManifest::classic(),
    };

    // Assets load before the terminal is taken over so errors print normally.
    let clock = MonotonicClock::new();
    let mut loader = ImageLoader::new();
    let (mut scene, _player) =
        build_scene(&manifest, &mut loader, clock.now_ms()).context("failed to load scene")?;

    let mut canvas = TerminalCanvas::new(manifest.canvas.width, manifest.canvas.height);
    canvas.set_status(Some(STATUS.to_string()));
    canvas.enter()?;
    let release_events = enable_key_release_events().unwrap_or(false);

    let result = run(&mut scene, &mut canvas, &clock, &config, release_events);

    // Always try to restore terminal state.
    if release_events {
        let _ = disable_key_release_events();
    }
    let _ = canvas.exit();
    if let Err(err) = &result {
        log::error!("exiting with error: {err:#}");
    }
    result
}

fn run(
    scene: &mut Scene<PixelImage>,
    canvas: &mut TerminalCanvas,
    clock: &impl Clock,
    config: &RuntimeConfig,
    release_events: bool,
) -> Result<()> {
    let mut keys = HeldKeys::new()
        .with_release_timeout_ms(config.key_release_timeout_ms)
        .with_release_events(release_events);
    let frame_interval = Duration::from_millis(config.frame_interval_ms);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        scene.render(canvas)?;

        // Simulate every millisecond that passed since the last update.
        scene.update(clock.now_ms())?;

        // Input, waiting no longer than the next frame deadline.
        let timeout = frame_interval.saturating_sub(last_frame.elapsed());
        let poll = pump_events(&mut keys, timeout, || clock.now_ms())?;
        last_frame = Instant::now();

        if poll.quit {
            log::info!("quit requested");
            return Ok(());
        }
        if poll.resized {
            canvas.invalidate();
        }

        let (left, right) = keys.directional(clock.now_ms());
        scene.handle_directional_input(left, right);
    }
}
