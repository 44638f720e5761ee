//! Error types for the benchmark harness
//!
//! The only fallible surface is configuration: a benchmark parameter that
//! violates its precondition invalidates timing comparability, so every
//! variant here is fatal and aborts the remaining run queue. Barrier misuse
//! is a programming defect, not a configuration error, and panics at the
//! call site instead of appearing here.

use crate::config::WorkloadKind;
use thiserror::Error;

/// Result type alias for harness operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Configuration errors detected before a benchmark run starts
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// Primary task count is zero
    #[error("{kind} benchmark requires a positive task count, got {size}")]
    InvalidSize {
        /// Workload the bad parameter belongs to
        kind: WorkloadKind,
        /// The rejected task count
        size: usize,
    },

    /// Nested workload configured without an inner fan-out count
    #[error("{kind} benchmark requires an inner fan-out count")]
    MissingInnerSize {
        /// Workload the bad parameter belongs to
        kind: WorkloadKind,
    },

    /// Inner fan-out count is zero
    #[error("{kind} benchmark requires a positive inner fan-out count, got {size}")]
    InvalidInnerSize {
        /// Workload the bad parameter belongs to
        kind: WorkloadKind,
        /// The rejected inner fan-out count
        size: usize,
    },

    /// Inner fan-out count supplied to a flat workload
    #[error("{kind} benchmark does not take an inner fan-out count")]
    UnexpectedInnerSize {
        /// Workload the bad parameter belongs to
        kind: WorkloadKind,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_size_names_workload_and_value() {
        let err = BenchError::InvalidSize {
            kind: WorkloadKind::Creation,
            size: 0,
        };
        let msg = err.to_string();
        assert!(msg.contains("creation"));
        assert!(msg.contains('0'));
    }

    #[test]
    fn missing_inner_size_names_workload() {
        let err = BenchError::MissingInnerSize {
            kind: WorkloadKind::NestedFanOut,
        };
        assert!(err.to_string().contains("nested"));
    }
}
