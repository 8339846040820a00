mod args;

use crate::args::BenchArgs;
use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use transport_bench::benchmark::driver::BenchmarkDriver;
use transport_bench::benchmark::plan::BenchmarkPlan;
use transport_bench::config::BenchConfig;
use transport_bench::payload::generator::RandomUserGenerator;
use transport_bench::transport::{GrpcTransport, RestTransport};
use transport_bench_report::report::RunOutcome;

#[tokio::main]
async fn main() -> Result<()> {
    let args = BenchArgs::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = BenchConfig::load(args.config.as_deref(), &args)?;
    let plan = BenchmarkPlan::try_from(&config)?;
    let request_timeout = config.request_timeout()?;

    let rest = RestTransport::new(&config.rest_url, request_timeout)?;
    let grpc = GrpcTransport::connect(&config.grpc_address, request_timeout).await?;

    info!("Starting the benchmarks...");
    let mut driver = BenchmarkDriver::new(
        RandomUserGenerator::new(),
        Box::new(rest),
        Box::new(grpc),
        plan,
        config.params(),
    );
    let report = driver.run().await;
    info!("Finished the benchmarks.");

    if let RunOutcome::Aborted { trial, size, reason } = report.outcome {
        anyhow::bail!("benchmark aborted in test {trial} at payload size {size}: {reason}");
    }
    Ok(())
}
