use derive_more::derive::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Where the serialized payload length in a result comes from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, Default, Hash)]
pub enum SizeMeasurement {
    /// Reported by the transport adapter for the payload it actually sent.
    #[default]
    #[display("adapter")]
    #[serde(rename = "adapter")]
    Adapter,
    /// Measured by the driver with a separate encoding pass before the call.
    #[display("inline")]
    #[serde(rename = "inline")]
    Inline,
}

impl FromStr for SizeMeasurement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "adapter" => Ok(SizeMeasurement::Adapter),
            "inline" => Ok(SizeMeasurement::Inline),
            _ => Err(format!("Invalid size measurement: {s}, expected adapter or inline")),
        }
    }
}

/// What the driver does when a transport call fails.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, Default, Hash)]
pub enum FailurePolicy {
    /// Stop the whole run, completed trials are still reported.
    #[default]
    #[display("abort")]
    #[serde(rename = "abort")]
    Abort,
    /// Abandon the current trial and continue with the next one.
    #[display("skip-trial")]
    #[serde(rename = "skip-trial")]
    SkipTrial,
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "abort" => Ok(FailurePolicy::Abort),
            "skip-trial" | "skip_trial" | "skip" => Ok(FailurePolicy::SkipTrial),
            _ => Err(format!("Invalid failure policy: {s}, expected abort or skip-trial")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BenchmarkParams {
    pub rest_url: String,
    pub grpc_address: String,
    pub sizes: Vec<u32>,
    pub trials: u32,
    pub size_measurement: SizeMeasurement,
    pub failure_policy: FailurePolicy,
    pub request_timeout: Option<String>,
}

impl BenchmarkParams {
    pub fn format_sizes(&self) -> String {
        self.sizes
            .iter()
            .map(|size| size.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
