//! Fan-in completion barrier
//!
//! A [`CompletionBarrier`] lets a single coordinator park until a known
//! number of independently scheduled tasks have each reported completion
//! exactly once. It is the only blocking point in the harness: workload
//! coordinators and outer tasks suspend in [`CompletionBarrier::wait`],
//! never in a spin loop.
//!
//! One barrier serves one fan-in. It is not reusable after release, and the
//! design assumes a single waiter per barrier.
//!
//! # Memory Ordering
//!
//! The outstanding count uses AcqRel on the decrement and Acquire on the
//! waiter's reads: the release half of each `signal` publishes the task's
//! work to the coordinator, so a `wait` return happens-after every signal.
//! That edge is the only ordering guarantee the harness provides - sibling
//! tasks are deliberately unordered with respect to each other.

use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;

/// Counting barrier releasing a single waiter after `expected` signals.
#[derive(Debug)]
pub struct CompletionBarrier {
    outstanding: AtomicUsize,
    expected: usize,
    released: Notify,
}

impl CompletionBarrier {
    /// Barrier expecting exactly `expected` signals.
    ///
    /// With `expected == 0` the barrier starts released and
    /// [`CompletionBarrier::wait`] returns immediately.
    pub fn new(expected: usize) -> Self {
        Self {
            outstanding: AtomicUsize::new(expected),
            expected,
            released: Notify::new(),
        }
    }

    /// Report one task completion.
    ///
    /// Each logical task must call this at most once. Signaling more than
    /// `expected` times total is a programming defect; the barrier detects
    /// the underflow and panics with the expected count rather than wrapping
    /// into a state where `wait` could return early or hang.
    pub fn signal(&self) {
        let prev = match self.outstanding.fetch_update(
            Ordering::AcqRel,
            Ordering::Acquire,
            |n| n.checked_sub(1),
        ) {
            Ok(prev) => prev,
            Err(_) => panic!(
                "CompletionBarrier over-signaled: expected exactly {} signals",
                self.expected
            ),
        };
        if prev == 1 {
            // notify_one stores a permit, so a waiter arriving after this
            // point still observes the release.
            self.released.notify_one();
        }
    }

    /// Park until all expected signals have arrived.
    ///
    /// Returns immediately when the outstanding count is already zero.
    /// Registers interest on the notifier before re-checking the count, so
    /// a signal landing between the check and the await cannot be lost.
    pub async fn wait(&self) {
        loop {
            if self.outstanding.load(Ordering::Acquire) == 0 {
                return;
            }
            let released = self.released.notified();
            if self.outstanding.load(Ordering::Acquire) == 0 {
                return;
            }
            released.await;
        }
    }

    /// Signals still outstanding. Exposed for tests and diagnostics.
    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::Acquire)
    }
}
