//! schedbench binary - runs the fixed benchmark queue
//!
//! A thin launcher: no flags, no config file, no environment besides
//! `RUST_LOG` for log filtering. The queue below mirrors the sizes the
//! harness has always run, executed strictly in order on a multi-thread
//! tokio runtime. Exit 0 when the queue completes; any configuration error
//! prints one diagnostic line to stderr and exits 1.

use std::process;

use schedbench::{BenchConfig, Driver};
use tracing_subscriber::EnvFilter;

fn run_queue() -> Vec<BenchConfig> {
    vec![
        BenchConfig::yields(100),
        BenchConfig::yields(1_000),
        BenchConfig::yields(10_000),
        BenchConfig::yields(100_000),
        BenchConfig::creation(10_000),
        BenchConfig::creation(100_000),
        BenchConfig::creation(1_000_000),
        BenchConfig::creation(10_000_000),
        BenchConfig::nested(100, 100_000),
        BenchConfig::nested(1_000, 10_000),
        BenchConfig::nested(10_000, 1_000),
        BenchConfig::nested(100_000, 100),
    ]
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("schedbench: failed to build runtime: {e}");
            process::exit(1);
        }
    };

    let driver = Driver::new(run_queue());
    if let Err(e) = runtime.block_on(driver.run()) {
        eprintln!("schedbench: {e}");
        process::exit(1);
    }
}
