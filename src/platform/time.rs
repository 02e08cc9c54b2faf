//! Fixed-step ticking from a wall clock

use std::time::{Duration, Instant};

use crate::consts::MAX_SUBSTEPS;

/// Turns elapsed wall time into a count of fixed simulation steps.
#[derive(Debug, Clone)]
pub struct FixedTicker {
    step: Duration,
    accumulator: Duration,
    last: Option<Instant>,
}

impl FixedTicker {
    pub fn new(step_ms: u32) -> Self {
        Self {
            step: Duration::from_millis(step_ms as u64),
            accumulator: Duration::ZERO,
            last: None,
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Steps due at `now`. The first call only starts the clock.
    pub fn advance(&mut self, now: Instant) -> u32 {
        let Some(last) = self.last.replace(now) else {
            return 0;
        };
        self.accumulate(now.saturating_duration_since(last))
    }

    /// Steps due after `elapsed` more time, at most `MAX_SUBSTEPS`.
    /// Time beyond the cap is dropped so a stall does not replay in a burst.
    pub fn accumulate(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;
        let mut steps = 0;
        while self.accumulator >= self.step && steps < MAX_SUBSTEPS {
            self.accumulator -= self.step;
            steps += 1;
        }
        if steps == MAX_SUBSTEPS && self.accumulator >= self.step {
            log::warn!("Simulation fell behind, dropping {:?}", self.accumulator);
            self.accumulator = Duration::ZERO;
        }
        steps
    }

    /// Time left until the next step is due
    pub fn until_next_step(&self) -> Duration {
        self.step.saturating_sub(self.accumulator)
    }
}
