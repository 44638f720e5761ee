//! Monotonic timing for benchmark runs
//!
//! [`Stopwatch`] wraps `std::time::Instant`, which is monotonic and immune
//! to wall-clock adjustments. A [`TimingResult`] pairs the raw elapsed
//! duration with a per-operation figure derived from a workload-defined
//! operation count.

use std::time::{Duration, Instant};

/// Captures a start instant and reads elapsed time from it.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    /// Start timing now.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Wall-clock time since [`Stopwatch::start`].
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Measured timing for one benchmark run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingResult {
    /// Total wall-clock time from first spawn to barrier release
    pub elapsed: Duration,
    /// `elapsed / ops`, truncated to nanosecond granularity
    pub per_op: Duration,
}

impl TimingResult {
    /// Derive a result from an elapsed duration and an operation count.
    ///
    /// Callers guarantee `ops >= 1`; every workload's validated config
    /// yields a positive count.
    pub fn from_elapsed(elapsed: Duration, ops: u64) -> Self {
        debug_assert!(ops >= 1, "operation count must be positive");
        let per_op = Duration::from_nanos((elapsed.as_nanos() / u128::from(ops)) as u64);
        Self { elapsed, per_op }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn stopwatch_is_monotonic() {
        let watch = Stopwatch::start();
        let first = watch.elapsed();
        let second = watch.elapsed();
        assert!(second >= first);
    }

    #[test]
    fn per_op_divides_evenly() {
        let timing = TimingResult::from_elapsed(Duration::from_micros(100), 100);
        assert_eq!(timing.per_op, Duration::from_micros(1));
    }

    #[test]
    fn per_op_with_single_op_equals_elapsed() {
        let elapsed = Duration::from_millis(7);
        let timing = TimingResult::from_elapsed(elapsed, 1);
        assert_eq!(timing.per_op, elapsed);
    }

    proptest! {
        // per_op * ops recovers elapsed up to the integer-division remainder,
        // which is strictly smaller than ops nanoseconds.
        #[test]
        fn per_op_times_ops_recovers_elapsed(
            elapsed_ns in 0u64..10_000_000_000,
            ops in 1u64..10_000_001,
        ) {
            let timing = TimingResult::from_elapsed(Duration::from_nanos(elapsed_ns), ops);
            let recovered = timing.per_op.as_nanos() as u64 * ops;
            prop_assert!(recovered <= elapsed_ns);
            prop_assert!(elapsed_ns - recovered < ops);
        }
    }
}
