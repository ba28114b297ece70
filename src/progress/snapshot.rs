//! Point-in-time view of a transfer.

use std::time::Duration;

/// Progress derived from a session after each chunk.
///
/// Nothing here is stored between chunks; a snapshot is recomputed from the
/// running byte count and the elapsed time. Every derived value is defined for
/// all inputs: an unknown total yields `None` for the total-dependent fields
/// and a zero elapsed time yields a zero speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSnapshot {
    transferred: u64,
    total: Option<u64>,
    elapsed: Duration,
}

impl ProgressSnapshot {
    /// Create a new [`ProgressSnapshot`].
    pub fn new(transferred: u64, total: Option<u64>, elapsed: Duration) -> Self {
        Self {
            transferred,
            total,
            elapsed,
        }
    }

    /// Bytes received so far.
    pub fn transferred(&self) -> u64 {
        self.transferred
    }

    /// Declared size of the transfer, if known.
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// Time since the transfer started.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Fraction complete in `[0, 1]`.
    ///
    /// A declared size of zero counts as complete.
    pub fn percent(&self) -> Option<f64> {
        self.total.map(|total| {
            if total == 0 {
                1.0
            } else {
                (self.transferred as f64 / total as f64).clamp(0.0, 1.0)
            }
        })
    }

    /// Average throughput in bytes per second.
    pub fn average_speed(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.transferred as f64 / secs
        } else {
            0.0
        }
    }

    /// Seconds left, extrapolated linearly from the average rate so far.
    pub fn eta(&self) -> Option<f64> {
        let total = self.total?;
        if self.transferred == 0 {
            return Some(0.0);
        }
        let remaining = total.saturating_sub(self.transferred) as f64;
        Some(remaining * self.elapsed.as_secs_f64() / self.transferred as f64)
    }

    /// Whether every declared byte has arrived. Always `true` without a total.
    pub fn is_complete(&self) -> bool {
        self.total.map_or(true, |total| self.transferred >= total)
    }
}
