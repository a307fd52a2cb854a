//! CLI entry point: `sgemm-bench m k n`.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sgemm_bench::calibrate::DEFAULT_WORK_BUDGET;
use sgemm_bench::{harness, BenchConfig, Workload};
use sgemm_kernels::KernelVariant;
use tracing_subscriber::EnvFilter;

/// Measure sustained throughput of one SGEMM microkernel variant.
#[derive(Parser)]
#[command(name = "sgemm-bench", version)]
struct Cli {
    /// Rows of A (and of the output)
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    m: u64,

    /// Shared contraction dimension
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    k: u64,

    /// Kernel variant by output-tile width: 24 or 16
    #[arg(value_parser = parse_variant)]
    n: KernelVariant,

    /// Logical processor to pin the measurement thread to
    #[arg(long, default_value_t = 0)]
    cpu: usize,

    /// Total-operation budget dividing into the timed repetition count
    #[arg(long, default_value_t = DEFAULT_WORK_BUDGET)]
    work_budget: u64,

    /// Output path for the reference result artifact
    #[arg(long, default_value = "naive.bin")]
    reference_out: PathBuf,

    /// Output path for the kernel result artifact
    #[arg(long, default_value = "tuned.bin")]
    kernel_out: PathBuf,
}

fn parse_variant(s: &str) -> Result<KernelVariant, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("invalid variant selector '{s}'"))?;
    KernelVariant::try_from(n).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = BenchConfig {
        workload: Workload::new(cli.m as usize, cli.k as usize, cli.n),
        cpu: cli.cpu,
        work_budget: cli.work_budget,
        reference_out: cli.reference_out,
        kernel_out: cli.kernel_out,
    };

    let report = harness::run(&config).context("benchmark run failed")?;

    let w = report.workload;
    println!(
        "{}({}, {}, {}): time = {:.6} us, perf = {:.6} GFLOPS.",
        report.kernel,
        w.m,
        w.n(),
        w.k,
        report.mean_latency_us,
        report.gigaflops,
    );
    println!("reference result: {}", report.reference_out.display());
    println!("{} result: {}", report.kernel, report.kernel_out.display());
    println!("Use fp_diff (https://github.com/pigirons/fp_diff) to compare the results.");

    Ok(())
}
