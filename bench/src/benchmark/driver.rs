use super::plan::BenchmarkPlan;
use crate::error::BenchError;
use crate::payload::generator::PayloadGenerator;
use crate::transport::Transport;
use tracing::{debug, error, info};
use transport_bench_report::{
    comparison::SizeComparison,
    params::{BenchmarkParams, FailurePolicy, SizeMeasurement},
    report::{BenchmarkReport, RunOutcome, TrialReport},
    transport::TransportKind,
    trial_result::TrialResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverState {
    #[default]
    Idle,
    Running {
        trial: u32,
        size: u32,
    },
    Reporting {
        trial: u32,
    },
}

struct TrialFailure {
    size: u32,
    error: BenchError,
}

/// Runs every configured size through both transports, one call at a time,
/// for the configured number of trials.
pub struct BenchmarkDriver<G: PayloadGenerator> {
    generator: G,
    rest: Box<dyn Transport>,
    grpc: Box<dyn Transport>,
    plan: BenchmarkPlan,
    params: BenchmarkParams,
    state: DriverState,
}

impl<G: PayloadGenerator> BenchmarkDriver<G> {
    pub fn new(
        generator: G,
        rest: Box<dyn Transport>,
        grpc: Box<dyn Transport>,
        plan: BenchmarkPlan,
        params: BenchmarkParams,
    ) -> Self {
        Self {
            generator,
            rest,
            grpc,
            plan,
            params,
            state: DriverState::Idle,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Executes the whole plan. Trials completed before a failure are always
    /// part of the returned report.
    pub async fn run(&mut self) -> BenchmarkReport {
        let mut report = BenchmarkReport::new(self.params.clone());
        let mut skipped = Vec::new();
        report.print_header();

        for trial in 1..=self.plan.trials {
            info!("Test {}", trial);
            match self.run_trial(trial).await {
                Ok(trial_report) => {
                    self.state = DriverState::Reporting { trial };
                    trial_report.print();
                    report.trials.push(trial_report);
                }
                Err(TrialFailure { size, error }) => {
                    error!(
                        "error while performing test {} for payload size {}: {}",
                        trial, size, error
                    );
                    match self.plan.failure_policy {
                        FailurePolicy::Abort => {
                            report.outcome = RunOutcome::Aborted {
                                trial,
                                size,
                                reason: error.to_string(),
                            };
                            break;
                        }
                        FailurePolicy::SkipTrial => skipped.push(trial),
                    }
                }
            }
        }

        if !skipped.is_empty() && report.outcome == RunOutcome::Completed {
            report.outcome = RunOutcome::CompletedWithSkippedTrials { skipped };
        }
        self.state = DriverState::Idle;
        report.print_summary();
        report
    }

    async fn run_trial(&mut self, trial: u32) -> Result<TrialReport, TrialFailure> {
        let mut comparisons = Vec::with_capacity(self.plan.sizes.len());
        for index in 0..self.plan.sizes.len() {
            let size = self.plan.sizes[index];
            self.state = DriverState::Running { trial, size };
            let rest = self
                .measure(TransportKind::Rest, size)
                .await
                .map_err(|error| TrialFailure { size, error })?;
            let grpc = self
                .measure(TransportKind::Grpc, size)
                .await
                .map_err(|error| TrialFailure { size, error })?;
            comparisons.push(SizeComparison::new(rest, grpc));
        }
        Ok(TrialReport::new(trial, comparisons))
    }

    /// Each transport gets its own freshly generated batch.
    async fn measure(
        &mut self,
        kind: TransportKind,
        size: u32,
    ) -> Result<TrialResult, BenchError> {
        let batch = self.generator.generate(size);
        let transport = match kind {
            TransportKind::Rest => &mut self.rest,
            TransportKind::Grpc => &mut self.grpc,
        };
        debug_assert_eq!(transport.kind(), kind);

        let inline_bytes = match self.plan.size_measurement {
            SizeMeasurement::Inline => Some(transport.encoded_len(&batch)?),
            SizeMeasurement::Adapter => None,
        };
        let sample = transport.send(&batch).await?;
        let serialized_bytes = inline_bytes.unwrap_or(sample.serialized_bytes);

        debug!(
            "{} call for {} users: {} us, {} bytes",
            kind,
            size,
            sample.elapsed.as_micros(),
            serialized_bytes
        );
        Ok(TrialResult::new(size, kind, sample.elapsed, serialized_bytes))
    }
}
