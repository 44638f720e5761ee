//! Intentionally racy shared counter
//!
//! [`ScratchCell`] is the shared mutable integer the workloads hammer to
//! generate contended write traffic. Its final value is explicitly allowed
//! to be non-deterministic: [`ScratchCell::bump`] is a Relaxed load followed
//! by a Relaxed store, so concurrent bumps can overwrite each other and
//! updates get lost under contention. That is the measured property, not a
//! bug - do not replace the pair with `fetch_add` or a lock, either would
//! change what the benchmarks exercise.
//!
//! Exact completion accounting lives in the workloads' own counters, never
//! here.

use std::sync::atomic::{AtomicU64, Ordering};

/// Shared scratch counter with deliberately lossy increments.
#[derive(Debug, Default)]
pub struct ScratchCell(AtomicU64);

impl ScratchCell {
    /// Fresh cell starting at zero.
    pub fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    /// Racy increment: load, add one, store. Concurrent callers may observe
    /// the same value and collapse their increments into one.
    pub fn bump(&self) {
        let v = self.0.load(Ordering::Relaxed);
        self.0.store(v.wrapping_add(1), Ordering::Relaxed);
    }

    /// Current value. Only bounds are meaningful, never an exact sum.
    pub fn value(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn sequential_bumps_count_exactly() {
        let cell = ScratchCell::new();
        for _ in 0..100 {
            cell.bump();
        }
        assert_eq!(cell.value(), 100);
    }

    // The final value under contention is non-deterministic by design:
    // anywhere from 1 (every increment but one lost) up to the bump count.
    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_value_is_bounded_not_exact() {
        let cell = Arc::new(ScratchCell::new());
        let mut handles = Vec::with_capacity(64);
        for _ in 0..64 {
            let cell = Arc::clone(&cell);
            handles.push(tokio::spawn(async move {
                for _ in 0..100 {
                    cell.bump();
                }
            }));
        }
        for handle in handles {
            handle.await.expect("bump task must not panic");
        }
        let value = cell.value();
        assert!(value >= 1);
        assert!(value <= 6_400);
    }
}
