use crate::config::BenchConfig;
use crate::error::BenchError;
use transport_bench_report::params::{FailurePolicy, SizeMeasurement};

/// What the driver executes: which sizes, how many times, and how to react to failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkPlan {
    /// Ascending, without duplicates
    pub sizes: Vec<u32>,
    pub trials: u32,
    pub size_measurement: SizeMeasurement,
    pub failure_policy: FailurePolicy,
}

impl BenchmarkPlan {
    pub fn new(
        mut sizes: Vec<u32>,
        trials: u32,
        size_measurement: SizeMeasurement,
        failure_policy: FailurePolicy,
    ) -> Result<Self, BenchError> {
        sizes.sort_unstable();
        sizes.dedup();
        if sizes.is_empty() {
            return Err(BenchError::InvalidConfiguration(
                "At least one payload size is required.".to_owned(),
            ));
        }
        if trials == 0 {
            return Err(BenchError::InvalidConfiguration(
                "Trial count must be greater than 0.".to_owned(),
            ));
        }
        Ok(Self {
            sizes,
            trials,
            size_measurement,
            failure_policy,
        })
    }
}

impl TryFrom<&BenchConfig> for BenchmarkPlan {
    type Error = BenchError;

    fn try_from(config: &BenchConfig) -> Result<Self, Self::Error> {
        BenchmarkPlan::new(
            config.sizes.clone(),
            config.trials,
            config.size_measurement,
            config.failure_policy,
        )
    }
}
