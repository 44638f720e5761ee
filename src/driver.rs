//! Sequential benchmark driver
//!
//! Owns the ordered queue of configured runs and executes them strictly one
//! at a time: a later benchmark never starts before the earlier one's timing
//! has been reported, so runs cannot contaminate each other's scheduler
//! load. On the first configuration error the remaining queue is abandoned -
//! partial results from a corrupted parameter set are worse than none.

use crate::config::BenchConfig;
use crate::error::Result;
use crate::report::Reporter;
use crate::workload;
use tracing::info;

/// Executes an ordered queue of benchmark configs.
#[derive(Debug)]
pub struct Driver {
    queue: Vec<BenchConfig>,
    reporter: Reporter,
}

impl Driver {
    /// Driver over `queue`, reporting against the tokio scheduler tag.
    pub fn new(queue: Vec<BenchConfig>) -> Self {
        Self::with_reporter(queue, Reporter::new("tokio"))
    }

    /// Driver with a custom reporter, for alternate run labeling.
    pub fn with_reporter(queue: Vec<BenchConfig>, reporter: Reporter) -> Self {
        Self { queue, reporter }
    }

    /// Run the queue to completion, or stop at the first invalid config.
    ///
    /// Logging happens outside the measured interval; nothing is traced
    /// between stopwatch start and barrier release.
    pub async fn run(&self) -> Result<()> {
        for config in &self.queue {
            config.validate()?;
            info!(
                target: "schedbench::driver",
                kind = %config.kind,
                size = config.size,
                inner_size = config.inner_size,
                "benchmark starting"
            );
            let outcome = workload::run(config).await;
            println!("{}", self.reporter.render(config, &outcome.timing));
            info!(
                target: "schedbench::driver",
                kind = %config.kind,
                completed = outcome.completed,
                elapsed_ms = outcome.timing.elapsed.as_secs_f64() * 1_000.0,
                "benchmark finished"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorkloadKind;
    use crate::error::BenchError;

    #[tokio::test(flavor = "multi_thread")]
    async fn runs_a_small_queue() {
        let driver = Driver::new(vec![
            BenchConfig::creation(10),
            BenchConfig::nested(2, 3),
        ]);
        driver.run().await.expect("valid queue must complete");
    }

    #[tokio::test]
    async fn invalid_config_aborts_the_queue() {
        let driver = Driver::new(vec![
            BenchConfig::creation(0),
            BenchConfig::creation(10),
        ]);
        let err = driver.run().await.unwrap_err();
        assert_eq!(
            err,
            BenchError::InvalidSize {
                kind: WorkloadKind::Creation,
                size: 0
            }
        );
    }
}
