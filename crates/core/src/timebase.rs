//! Timebase: turns monotonic clock readings into whole-millisecond ticks.

use std::time::Instant;

use crate::error::ClockError;

/// Source of monotonic milliseconds.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock anchored at construction time.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Counts whole ticks elapsed between successive clock readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timebase {
    last_tick_ms: u64,
}

impl Timebase {
    pub fn new(start_ms: u64) -> Self {
        Self {
            last_tick_ms: start_ms,
        }
    }

    pub fn last_tick_ms(&self) -> u64 {
        self.last_tick_ms
    }

    /// Advance to `now_ms`, returning the number of ticks that elapsed.
    ///
    /// Equal readings yield 0. A reading earlier than the previous one is an
    /// invariant violation: it is logged and returned as an error, and the
    /// timebase keeps its previous reading.
    pub fn advance(&mut self, now_ms: u64) -> Result<u64, ClockError> {
        let Some(elapsed) = now_ms.checked_sub(self.last_tick_ms) else {
            let err = ClockError::NonMonotonic {
                last_ms: self.last_tick_ms,
                now_ms,
            };
            log::error!("{err}");
            return Err(err);
        };
        Ok(self.consume(elapsed, tui_sidescroll_types::TICK_MS))
    }
}

impl Timebase {
    /// Take whole ticks of `tick_ms` out of `elapsed`; any remainder stays
    /// pending for the next reading.
    fn consume(&mut self, elapsed: u64, tick_ms: u64) -> u64 {
        let ticks = elapsed / tick_ms;
        self.last_tick_ms += ticks * tick_ms;
        ticks
    }
}

impl Default for Timebase {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Normalize an authored duration/interval to a tick count.
///
/// Values `<= 0` are a valid authoring choice meaning "every tick" and map to 0,
/// which the timers treat as always-advance. Oversized values saturate.
pub fn normalize_ticks(raw: i64) -> u32 {
    if raw <= 0 {
        if raw < 0 {
            log::warn!("timer interval {raw} is negative; treating as every tick");
        }
        return 0;
    }
    u32::try_from(raw).unwrap_or(u32::MAX)
}
