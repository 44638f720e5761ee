//! Report-line formatting
//!
//! One structured, human-readable line per executed benchmark: workload
//! tag, labeled parameters, elapsed time in milliseconds, per-operation
//! time in nanoseconds. Units are fixed per [`Reporter`] instance so runs
//! of the same kind never silently mix precisions.

use crate::config::{BenchConfig, WorkloadKind, TOTAL_YIELD_BUDGET};
use crate::timing::TimingResult;

/// Formats benchmark results for stdout.
#[derive(Debug, Clone)]
pub struct Reporter {
    runtime_tag: String,
}

impl Reporter {
    /// Reporter labeling every line with the scheduler under test.
    pub fn new(runtime_tag: impl Into<String>) -> Self {
        Self {
            runtime_tag: runtime_tag.into(),
        }
    }

    /// Render one result line.
    ///
    /// The per-op figure is recomputed from raw nanoseconds so sub-nanosecond
    /// fractions survive formatting; `TimingResult::per_op` itself truncates
    /// to whole nanoseconds.
    pub fn render(&self, config: &BenchConfig, timing: &TimingResult) -> String {
        let elapsed_ms = timing.elapsed.as_secs_f64() * 1_000.0;
        let per_op_ns = timing.elapsed.as_nanos() as f64 / config.ops() as f64;
        format!(
            "<{}:{}:{}> duration: {:9.3} ms, {:9.3} ns/op",
            self.runtime_tag,
            config.kind.tag(),
            Self::params(config),
            elapsed_ms,
            per_op_ns,
        )
    }

    fn params(config: &BenchConfig) -> String {
        match config.kind {
            WorkloadKind::Creation => format!("tasks={}", config.size),
            WorkloadKind::Yield => {
                format!("tasks={}:budget={}", config.size, TOTAL_YIELD_BUDGET)
            }
            WorkloadKind::NestedFanOut => format!(
                "outer={}:inner={}",
                config.size,
                config.inner_size.unwrap_or(0)
            ),
        }
    }
}
