use super::comparison::SizeComparison;
use super::params::BenchmarkParams;
use uuid::Uuid;

/// All size comparisons collected during one full pass over the configured sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialReport {
    /// 1-based trial number
    pub trial: u32,

    pub comparisons: Vec<SizeComparison>,
}

impl TrialReport {
    pub fn new(trial: u32, comparisons: Vec<SizeComparison>) -> Self {
        Self { trial, comparisons }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RunOutcome {
    #[default]
    Completed,
    /// The run stopped at the first failed call.
    Aborted {
        trial: u32,
        size: u32,
        reason: String,
    },
    /// Some trials were abandoned and the run moved on.
    CompletedWithSkippedTrials { skipped: Vec<u32> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    /// Benchmark run unique identifier
    pub run_id: Uuid,

    /// Benchmark parameters
    pub params: BenchmarkParams,

    /// Fully completed trials, in execution order
    pub trials: Vec<TrialReport>,

    pub outcome: RunOutcome,
}

impl BenchmarkReport {
    pub fn new(params: BenchmarkParams) -> Self {
        Self {
            run_id: Uuid::now_v7(),
            params,
            trials: Vec::new(),
            outcome: RunOutcome::Completed,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.outcome == RunOutcome::Completed
    }

    /// Iterates over every size comparison of every completed trial.
    pub fn comparisons(&self) -> impl Iterator<Item = &SizeComparison> {
        self.trials.iter().flat_map(|trial| trial.comparisons.iter())
    }
}
