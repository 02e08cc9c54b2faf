//! Millisecond countdown used by animations

/// Accumulates elapsed time and reports when a period has been reached.
/// The caller decides when to `reset`, so a missed reset keeps it triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionTimer {
    period_ms: u32,
    elapsed_ms: u32,
}

impl ActionTimer {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms,
            elapsed_ms: 0,
        }
    }

    pub fn update(&mut self, dt_ms: u32) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
    }

    pub fn is_triggered(&self) -> bool {
        self.elapsed_ms >= self.period_ms
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }
}
