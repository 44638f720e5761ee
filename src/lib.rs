//! schedbench - micro-benchmark harness for lightweight-task scheduling overhead
//!
//! Measures what spawning, yielding, and joining N concurrent units of work
//! costs on the tokio multi-thread scheduler, under three access patterns:
//!
//! - **Creation throughput**: bulk task spawn/teardown with near-zero work
//!   per task.
//! - **Cooperative yield**: a fixed total budget of `yield_now` calls spread
//!   across a varying number of tasks.
//! - **Nested fan-out/fan-in**: two-level task graphs where leaf completion
//!   must propagate through an intermediate barrier before the top level
//!   observes it.
//!
//! Each run is single-shot: build the task graph, drive it to completion
//! through a [`CompletionBarrier`], report elapsed wall-clock time and a
//! per-operation figure. No warm-up, no percentiles - the point is raw,
//! comparable numbers across runs and scheduler configurations, not a
//! statistical study.
//!
//! # Quick start
//!
//! ```ignore
//! use schedbench::{BenchConfig, Driver};
//!
//! let driver = Driver::new(vec![
//!     BenchConfig::creation(10_000),
//!     BenchConfig::yields(1_000),
//!     BenchConfig::nested(100, 1_000),
//! ]);
//! runtime.block_on(driver.run())?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod barrier;
pub mod config;
pub mod driver;
pub mod error;
pub mod report;
pub mod scratch;
pub mod timing;
pub mod workload;

pub use barrier::CompletionBarrier;
pub use config::{BenchConfig, WorkloadKind, TOTAL_YIELD_BUDGET};
pub use driver::Driver;
pub use error::{BenchError, Result};
pub use report::Reporter;
pub use scratch::ScratchCell;
pub use timing::{Stopwatch, TimingResult};
pub use workload::RunOutcome;
