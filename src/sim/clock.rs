//! Frame clock and the read-only per-tick context
//!
//! The clock counts completed ticks of the current epoch. Periodic triggers test
//! the ordinal of the tick in flight (`ticks + 1`), so the first 100-tick spawn
//! lands on the tick where the clock reaches 100.
//!
//! Wraparound policy: the counter is a `u64` and advances with wrapping
//! arithmetic. At one tick per 60 Hz frame it would take billions of years to
//! wrap, but the behaviour is defined rather than a debug-build panic.

use serde::{Deserialize, Serialize};

use super::phase::Phase;

/// Monotonic tick counter for the current epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameClock {
    ticks: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary tick count (replays, long-session tests)
    pub fn starting_at(ticks: u64) -> Self {
        Self { ticks }
    }

    /// Completed ticks
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Ordinal of the tick about to run
    #[inline]
    pub fn next_frame(&self) -> u64 {
        self.ticks.wrapping_add(1)
    }

    /// Commit one completed tick
    #[inline]
    pub fn advance(&mut self) {
        self.ticks = self.next_frame();
    }

    pub fn reset(&mut self) {
        self.ticks = 0;
    }
}

/// Shared read-only inputs for the subsystem update functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickContext {
    /// Ordinal of the tick being processed
    pub frame: u64,
    /// Phase at the start of the tick
    pub phase: Phase,
}

impl TickContext {
    pub fn new(clock: &FrameClock, phase: Phase) -> Self {
        Self {
            frame: clock.next_frame(),
            phase,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_advances_and_resets() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.ticks(), 0);
        assert_eq!(clock.next_frame(), 1);
        clock.advance();
        clock.advance();
        assert_eq!(clock.ticks(), 2);
        clock.reset();
        assert_eq!(clock.ticks(), 0);
    }

    #[test]
    fn test_clock_past_u32_range() {
        let mut clock = FrameClock::starting_at(u32::MAX as u64);
        clock.advance();
        assert_eq!(clock.ticks(), u32::MAX as u64 + 1);
    }

    #[test]
    fn test_clock_wraps_at_u64_max() {
        let mut clock = FrameClock::starting_at(u64::MAX);
        assert_eq!(clock.next_frame(), 0);
        clock.advance();
        assert_eq!(clock.ticks(), 0);
    }

    #[test]
    fn test_context_uses_next_frame() {
        let clock = FrameClock::starting_at(99);
        let ctx = TickContext::new(&clock, Phase::Active);
        assert_eq!(ctx.frame, 100);
        assert!(ctx.is_active());
    }
}
