mod examples;

use clap::Parser;
use examples::EXAMPLES;
use serde::Serialize;
use std::path::PathBuf;
use transport_bench_report::params::{FailurePolicy, SizeMeasurement};

/// Flags given on the command line. Every value is optional and, when
/// present, overrides the config file and the environment.
#[derive(Parser, Serialize, Debug)]
#[command(author, version, about, long_about = None, after_help = EXAMPLES)]
pub struct BenchArgs {
    /// Path to a TOML config file
    #[arg(long, short = 'c')]
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// URL of the REST bulk-load endpoint
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_url: Option<String>,

    /// Address (host:port) of the gRPC server
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grpc_address: Option<String>,

    /// Comma separated payload sizes (number of users per batch)
    #[arg(long, short = 's', value_delimiter = ',')]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<u32>>,

    /// Number of trials, each trial covers every payload size
    #[arg(long, short = 't')]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trials: Option<u32>,

    /// Source of the reported serialized size: adapter or inline
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_measurement: Option<SizeMeasurement>,

    /// Behavior on a failed call: abort or skip-trial
    #[arg(long = "on-failure")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_policy: Option<FailurePolicy>,

    /// Per-call deadline, e.g. 5s or 250ms, unbounded when not set
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<String>,
}
