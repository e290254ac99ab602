//! Held-key tracking for terminal environments.
//!
//! Terminals only report key presses by default (plus auto-repeat presses while
//! a key stays down). When release events are unavailable a key counts as held
//! until it has not been refreshed for `release_timeout_ms`.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::logical_key;
use crate::types::{LogicalKey, DEFAULT_KEY_RELEASE_TIMEOUT_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeldKey {
    key: LogicalKey,
    last_seen_ms: u64,
}

/// Tracks which logical keys are currently down.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    held: ArrayVec<HeldKey, 2>,
    release_timeout_ms: u64,
    release_events: bool,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self {
            held: ArrayVec::new(),
            release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            release_events: false,
        }
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    /// Declare whether the terminal reports key releases. When it does, keys
    /// stay held until released and the timeout is ignored.
    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.release_events = enabled;
        self
    }

    pub fn release_timeout_ms(&self) -> u64 {
        self.release_timeout_ms
    }

    pub fn press(&mut self, key: LogicalKey, now_ms: u64) {
        if let Some(entry) = self.held.iter_mut().find(|h| h.key == key) {
            entry.last_seen_ms = now_ms;
            return;
        }
        let _ = self.held.try_push(HeldKey {
            key,
            last_seen_ms: now_ms,
        });
    }

    pub fn release(&mut self, key: LogicalKey) {
        self.held.retain(|h| h.key != key);
    }

    /// Apply a terminal key event. Returns true if it touched a logical key.
    pub fn handle_key_event(&mut self, key: KeyEvent, now_ms: u64) -> bool {
        let Some(logical) = logical_key(key.code) else {
            return false;
        };
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.press(logical, now_ms),
            KeyEventKind::Release => self.release(logical),
        }
        true
    }

    pub fn is_held(&self, key: LogicalKey, now_ms: u64) -> bool {
        self.held
            .iter()
            .any(|h| h.key == key && self.is_fresh(h, now_ms))
    }

    /// Sample (left_held, right_held).
    pub fn directional(&self, now_ms: u64) -> (bool, bool) {
        (
            self.is_held(LogicalKey::Left, now_ms),
            self.is_held(LogicalKey::Right, now_ms),
        )
    }

    /// Drop keys whose release timeout has passed.
    pub fn expire(&mut self, now_ms: u64) {
        let release_events = self.release_events;
        let timeout = self.release_timeout_ms;
        self.held
            .retain(|h| release_events || now_ms.saturating_sub(h.last_seen_ms) <= timeout);
    }

    pub fn reset(&mut self) {
        self.held.clear();
    }

    fn is_fresh(&self, h: &HeldKey, now_ms: u64) -> bool {
        self.release_events || now_ms.saturating_sub(h.last_seen_ms) <= self.release_timeout_ms
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}
