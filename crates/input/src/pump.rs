//! Event pump: drains pending terminal events into [`HeldKeys`].

use std::io::{self, Write};
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::{terminal, QueueableCommand};

use crate::held::HeldKeys;
use crate::map::should_quit;

/// What the last pump observed besides key state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputPoll {
    pub quit: bool,
    pub resized: bool,
}

/// Drain every pending event, waiting at most `timeout` for the first one.
///
/// Never waits past `timeout`; with `Duration::ZERO` this is a pure poll.
/// `now_ms` is read as each event arrives, so key timestamps reflect when the
/// event was read rather than when the wait began.
pub fn pump_events(
    keys: &mut HeldKeys,
    timeout: Duration,
    now_ms: impl FnMut() -> u64,
) -> io::Result<InputPoll> {
    drain(keys, timeout, now_ms, event::poll, event::read)
}

fn drain(
    keys: &mut HeldKeys,
    timeout: Duration,
    mut now_ms: impl FnMut() -> u64,
    mut poll_next: impl FnMut(Duration) -> io::Result<bool>,
    mut read_next: impl FnMut() -> io::Result<Event>,
) -> io::Result<InputPoll> {
    let mut poll = InputPoll::default();
    let mut wait = timeout;
    while poll_next(wait)? {
        match read_next()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Release && should_quit(key) {
                    poll.quit = true;
                }
                keys.handle_key_event(key, now_ms());
            }
            Event::Resize(w, h) => {
                log::debug!("terminal resized to {w}x{h}");
                poll.resized = true;
            }
            _ => {}
        }
        wait = Duration::ZERO;
    }
    keys.expire(now_ms());
    Ok(poll)
}

/// Ask the terminal to report key releases. Returns whether it will.
///
/// Must be called in raw mode. Pair with [`disable_key_release_events`].
pub fn enable_key_release_events() -> io::Result<bool> {
    if !terminal::supports_keyboard_enhancement()? {
        log::info!("terminal does not report key releases; using release timeout");
        return Ok(false);
    }
    let mut stdout = io::stdout();
    stdout.queue(PushKeyboardEnhancementFlags(
        KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
    ))?;
    stdout.flush()?;
    log::info!("key release events enabled");
    Ok(true)
}

pub fn disable_key_release_events() -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.queue(PopKeyboardEnhancementFlags)?;
    stdout.flush()
}
