//! Benchmark configuration
//!
//! A [`BenchConfig`] is an immutable description of one benchmark run:
//! which workload, how many tasks, and (for the nested workload) the
//! per-outer-task fan-out. Validation happens when the driver reaches the
//! config, and a violation aborts the whole queue - a corrupted parameter
//! would make the timing numbers incomparable.

use crate::error::{BenchError, Result};
use std::fmt;
use tracing::warn;

/// Total number of cooperative yields performed per Yield run, spread
/// across however many tasks the run is configured with.
pub const TOTAL_YIELD_BUDGET: u64 = 5_000_000;

/// The three measured access patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkloadKind {
    /// Bulk task creation and teardown
    Creation,
    /// High-frequency cooperative yielding against a fixed total budget
    Yield,
    /// Two-level fan-out/fan-in task graph
    NestedFanOut,
}

impl WorkloadKind {
    /// Short tag used in report lines and diagnostics
    pub fn tag(&self) -> &'static str {
        match self {
            WorkloadKind::Creation => "creation",
            WorkloadKind::Yield => "yield",
            WorkloadKind::NestedFanOut => "nested",
        }
    }
}

impl fmt::Display for WorkloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Parameters for a single benchmark run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    /// Which workload to run
    pub kind: WorkloadKind,
    /// Primary task count
    pub size: usize,
    /// Per-outer-task fan-out, nested workload only
    pub inner_size: Option<usize>,
}

impl BenchConfig {
    /// Creation-throughput run over `size` tasks
    pub fn creation(size: usize) -> Self {
        Self {
            kind: WorkloadKind::Creation,
            size,
            inner_size: None,
        }
    }

    /// Cooperative-yield run over `size` tasks sharing [`TOTAL_YIELD_BUDGET`]
    pub fn yields(size: usize) -> Self {
        Self {
            kind: WorkloadKind::Yield,
            size,
            inner_size: None,
        }
    }

    /// Nested fan-out/fan-in run: `outer` tasks each spawning `inner` leaves
    pub fn nested(outer: usize, inner: usize) -> Self {
        Self {
            kind: WorkloadKind::NestedFanOut,
            size: outer,
            inner_size: Some(inner),
        }
    }

    /// Check the run's preconditions.
    ///
    /// A Yield size that does not divide [`TOTAL_YIELD_BUDGET`] is a
    /// degradation, not an error: each task performs the integer-division
    /// share and the remainder yields are dropped. That is logged at warn
    /// level so the truncated total is visible next to the reported numbers.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(BenchError::InvalidSize {
                kind: self.kind,
                size: self.size,
            });
        }
        match self.kind {
            WorkloadKind::NestedFanOut => match self.inner_size {
                None => Err(BenchError::MissingInnerSize { kind: self.kind }),
                Some(0) => Err(BenchError::InvalidInnerSize {
                    kind: self.kind,
                    size: 0,
                }),
                Some(_) => Ok(()),
            },
            WorkloadKind::Creation | WorkloadKind::Yield => {
                if self.inner_size.is_some() {
                    return Err(BenchError::UnexpectedInnerSize { kind: self.kind });
                }
                if self.kind == WorkloadKind::Yield
                    && TOTAL_YIELD_BUDGET % self.size as u64 != 0
                {
                    let performed = (TOTAL_YIELD_BUDGET / self.size as u64) * self.size as u64;
                    warn!(
                        target: "schedbench::config",
                        size = self.size,
                        budget = TOTAL_YIELD_BUDGET,
                        performed,
                        "yield task count does not divide the budget, remainder dropped"
                    );
                }
                Ok(())
            }
        }
    }

    /// Workload-specific operation count used as the per-op divisor.
    ///
    /// Yield divides by the *total* budget regardless of task count while
    /// Creation divides by the task count. The asymmetry is intentional:
    /// per-yield cost and per-task cost answer different questions.
    pub fn ops(&self) -> u64 {
        match self.kind {
            WorkloadKind::Creation => self.size as u64,
            WorkloadKind::Yield => TOTAL_YIELD_BUDGET,
            WorkloadKind::NestedFanOut => {
                self.size as u64 * self.inner_size.unwrap_or(0) as u64
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_configs_pass() {
        assert!(BenchConfig::creation(1).validate().is_ok());
        assert!(BenchConfig::yields(1_000).validate().is_ok());
        assert!(BenchConfig::nested(4, 5).validate().is_ok());
    }

    #[test]
    fn zero_size_rejected() {
        let err = BenchConfig::creation(0).validate().unwrap_err();
        assert_eq!(
            err,
            BenchError::InvalidSize {
                kind: WorkloadKind::Creation,
                size: 0
            }
        );
    }

    #[test]
    fn nested_requires_inner_size() {
        let config = BenchConfig {
            kind: WorkloadKind::NestedFanOut,
            size: 4,
            inner_size: None,
        };
        assert_eq!(
            config.validate().unwrap_err(),
            BenchError::MissingInnerSize {
                kind: WorkloadKind::NestedFanOut
            }
        );
    }

    #[test]
    fn nested_rejects_zero_inner_size() {
        let err = BenchConfig::nested(4, 0).validate().unwrap_err();
        assert_eq!(
            err,
            BenchError::InvalidInnerSize {
                kind: WorkloadKind::NestedFanOut,
                size: 0
            }
        );
    }

    #[test]
    fn flat_workloads_reject_inner_size() {
        let config = BenchConfig {
            kind: WorkloadKind::Yield,
            size: 10,
            inner_size: Some(3),
        };
        assert_eq!(
            config.validate().unwrap_err(),
            BenchError::UnexpectedInnerSize {
                kind: WorkloadKind::Yield
            }
        );
    }

    #[test]
    fn non_dividing_yield_size_is_accepted() {
        // 3 does not divide 5,000,000; truncation is a warning, not an error.
        assert!(BenchConfig::yields(3).validate().is_ok());
    }

    #[test]
    fn ops_divisors_per_workload() {
        assert_eq!(BenchConfig::creation(10_000).ops(), 10_000);
        assert_eq!(BenchConfig::yields(100).ops(), TOTAL_YIELD_BUDGET);
        assert_eq!(BenchConfig::nested(100, 1_000).ops(), 100_000);
    }
}
