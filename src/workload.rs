//! The three benchmark workload generators
//!
//! Each generator builds a task graph on the ambient tokio runtime, drives
//! it to completion through a [`CompletionBarrier`], and returns a
//! [`RunOutcome`]. The stopwatch spans from just before the first spawn to
//! the moment the top-level barrier releases, so the measured interval
//! covers scheduling overhead, execution, and completion synchronization -
//! not merely spawning.
//!
//! Workloads never invoke each other, and every run builds its state fresh:
//! barriers, the scratch cell, and the exact completion counter all live for
//! exactly one invocation.
//!
//! Two counters, two purposes: the [`ScratchCell`] takes deliberately racy
//! bumps to create write contention, while `completed` is a precise
//! fetch-add counter that lets tests assert the task graph's shape.

use crate::barrier::CompletionBarrier;
use crate::config::{BenchConfig, WorkloadKind, TOTAL_YIELD_BUDGET};
use crate::scratch::ScratchCell;
use crate::timing::{Stopwatch, TimingResult};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Everything observable from one completed benchmark run
#[derive(Debug, Clone, Copy)]
pub struct RunOutcome {
    /// Elapsed and per-operation timing
    pub timing: TimingResult,
    /// The per-op divisor used, as defined by the workload
    pub ops: u64,
    /// Exact number of completed operations (tasks or yields), counted with
    /// synchronized increments - independent of the racy scratch value
    pub completed: u64,
}

/// Run the workload a validated config describes.
pub async fn run(config: &BenchConfig) -> RunOutcome {
    match config.kind {
        WorkloadKind::Creation => run_creation(config.size).await,
        WorkloadKind::Yield => run_yield(config.size).await,
        WorkloadKind::NestedFanOut => {
            // Validation guarantees the inner size is present and positive.
            run_nested(config.size, config.inner_size.unwrap_or(1)).await
        }
    }
}

/// Creation throughput: spawn `size` tasks that each do one fixed-cost
/// bump and signal, then fan in.
///
/// Isolates the cost of spawning and tearing down a large number of
/// schedulable units relative to almost-zero per-unit work.
/// `per_op = elapsed / size`.
pub async fn run_creation(size: usize) -> RunOutcome {
    let scratch = Arc::new(ScratchCell::new());
    let completed = Arc::new(AtomicU64::new(0));
    let barrier = Arc::new(CompletionBarrier::new(size));

    let watch = Stopwatch::start();
    for _ in 0..size {
        let scratch = Arc::clone(&scratch);
        let completed = Arc::clone(&completed);
        let barrier = Arc::clone(&barrier);
        tokio::spawn(async move {
            scratch.bump();
            completed.fetch_add(1, Ordering::Relaxed);
            barrier.signal();
        });
    }
    barrier.wait().await;
    let elapsed = watch.elapsed();

    let ops = size as u64;
    RunOutcome {
        timing: TimingResult::from_elapsed(elapsed, ops),
        ops,
        completed: completed.load(Ordering::Acquire),
    }
}

/// Cooperative yield: `size` tasks each perform their integer-division
/// share of [`TOTAL_YIELD_BUDGET`] explicit yields, then fan in.
///
/// `per_op = elapsed / TOTAL_YIELD_BUDGET` - the total budget, not the task
/// count - so the figure is the scheduler's per-yield context-switch cost
/// under the configured fan-out. When `size` does not divide the budget the
/// remainder yields are dropped per task, which validation has already
/// warned about.
pub async fn run_yield(size: usize) -> RunOutcome {
    let completed = Arc::new(AtomicU64::new(0));
    let barrier = Arc::new(CompletionBarrier::new(size));
    let yields_per_task = TOTAL_YIELD_BUDGET / size as u64;

    let watch = Stopwatch::start();
    for _ in 0..size {
        let completed = Arc::clone(&completed);
        let barrier = Arc::clone(&barrier);
        tokio::spawn(async move {
            for _ in 0..yields_per_task {
                tokio::task::yield_now().await;
            }
            // One synchronized add per task keeps the counter out of the
            // measured per-yield path.
            completed.fetch_add(yields_per_task, Ordering::Relaxed);
            barrier.signal();
        });
    }
    barrier.wait().await;
    let elapsed = watch.elapsed();

    RunOutcome {
        timing: TimingResult::from_elapsed(elapsed, TOTAL_YIELD_BUDGET),
        ops: TOTAL_YIELD_BUDGET,
        completed: completed.load(Ordering::Acquire),
    }
}

/// Nested fan-out/fan-in: `outer` tasks each spawn `inner` leaves behind a
/// fresh inner barrier, await it, and only then signal the outer barrier.
///
/// Leaf completion must propagate through the intermediate barrier before
/// the top level observes it, which is what distinguishes this from a flat
/// fan-out of `outer * inner` tasks. `per_op = elapsed / (outer * inner)`.
pub async fn run_nested(outer: usize, inner: usize) -> RunOutcome {
    let scratch = Arc::new(ScratchCell::new());
    let completed = Arc::new(AtomicU64::new(0));
    let outer_barrier = Arc::new(CompletionBarrier::new(outer));

    let watch = Stopwatch::start();
    for _ in 0..outer {
        let scratch = Arc::clone(&scratch);
        let completed = Arc::clone(&completed);
        let outer_barrier = Arc::clone(&outer_barrier);
        tokio::spawn(async move {
            let inner_barrier = Arc::new(CompletionBarrier::new(inner));
            for _ in 0..inner {
                let scratch = Arc::clone(&scratch);
                let inner_barrier = Arc::clone(&inner_barrier);
                tokio::spawn(async move {
                    scratch.bump();
                    inner_barrier.signal();
                });
            }
            inner_barrier.wait().await;
            // Crediting the leaves only after the inner barrier released
            // makes the fan-in ordering observable to tests.
            completed.fetch_add(inner as u64, Ordering::Relaxed);
            outer_barrier.signal();
        });
    }
    outer_barrier.wait().await;
    let elapsed = watch.elapsed();

    let ops = outer as u64 * inner as u64;
    RunOutcome {
        timing: TimingResult::from_elapsed(elapsed, ops),
        ops,
        completed: completed.load(Ordering::Acquire),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn creation_completes_every_task() {
        for size in [1, 10, 1000] {
            let outcome = run_creation(size).await;
            assert_eq!(outcome.completed, size as u64);
            assert_eq!(outcome.ops, size as u64);
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn nested_completes_every_leaf() {
        let outcome = run_nested(4, 5).await;
        assert_eq!(outcome.completed, 20);
        assert_eq!(outcome.ops, 20);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn timing_relates_elapsed_and_per_op() {
        let outcome = run_creation(100).await;
        let recovered = outcome.timing.per_op.as_nanos() * u128::from(outcome.ops);
        // Integer division truncates by less than one nanosecond per op.
        assert!(recovered <= outcome.timing.elapsed.as_nanos());
        assert!(outcome.timing.elapsed.as_nanos() - recovered < u128::from(outcome.ops));
    }
}
