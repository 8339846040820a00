use colored::{Color, ColoredString, Colorize};
use tracing::{info, warn};

use crate::{
    comparison::SizeComparison,
    report::{BenchmarkReport, RunOutcome, TrialReport},
};

impl BenchmarkReport {
    pub fn print_header(&self) {
        let params = &self.params;
        let timeout = params
            .request_timeout
            .as_deref()
            .unwrap_or("none");
        let params_print = format!(
            "Benchmark run: {}, REST: {}, gRPC: {}, {} trials, payload sizes: [{}], size measurement: {}, on failure: {}, request timeout: {}\n",
            self.run_id,
            params.rest_url,
            params.grpc_address,
            params.trials,
            params.format_sizes(),
            params.size_measurement,
            params.failure_policy,
            timeout,
        )
        .blue();

        info!("{}", params_print);
    }

    pub fn print_summary(&self) {
        let completed = self.trials.len();
        let requested = self.params.trials;
        let (line, color) = match &self.outcome {
            RunOutcome::Completed => (
                format!("Benchmark finished, completed {completed} of {requested} trials."),
                Color::Green,
            ),
            RunOutcome::Aborted {
                trial,
                size,
                reason,
            } => (
                format!(
                    "Benchmark aborted in test {trial} at payload size {size}: {reason}, completed {completed} of {requested} trials."
                ),
                Color::Red,
            ),
            RunOutcome::CompletedWithSkippedTrials { skipped } => (
                format!(
                    "Benchmark finished, completed {completed} of {requested} trials, skipped tests: {:?}.",
                    skipped
                ),
                Color::Yellow,
            ),
        };

        if self.is_complete() {
            info!("{}", line.color(color));
        } else {
            warn!("{}", line.color(color));
        }
    }
}

impl TrialReport {
    pub fn print(&self) {
        self.comparisons.iter().for_each(|comparison| {
            for line in comparison.formatted_lines() {
                info!("{}", line);
            }
        });
    }
}

impl SizeComparison {
    /// Report lines for this size: REST timing, gRPC timing and the speed ratio when defined.
    pub fn formatted_lines(&self) -> Vec<ColoredString> {
        let mut lines = Vec::with_capacity(3);
        lines.push(
            format!(
                "REST time in {} ms for {} bytes",
                self.rest.elapsed_ms(),
                self.rest.serialized_bytes
            )
            .normal(),
        );
        lines.push(
            format!(
                "GRPC time in {} ms for {} bytes",
                self.grpc.elapsed_ms(),
                self.grpc.serialized_bytes
            )
            .normal(),
        );
        if let Some(ratio) = self.speed_ratio() {
            lines.push(format!("GRPC is faster {:.2} times than REST", ratio).green());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use crate::{comparison::SizeComparison, transport::TransportKind, trial_result::TrialResult};
    use std::time::Duration;

    fn comparison(rest_ms: u64, grpc_ms: u64) -> SizeComparison {
        SizeComparison::new(
            TrialResult::new(5, TransportKind::Rest, Duration::from_millis(rest_ms), 1024),
            TrialResult::new(5, TransportKind::Grpc, Duration::from_millis(grpc_ms), 512),
        )
    }

    #[test]
    fn should_print_ratio_line_when_grpc_time_is_non_zero() {
        let lines = comparison(100, 25).formatted_lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(&*lines[0], "REST time in 100 ms for 1024 bytes");
        assert_eq!(&*lines[1], "GRPC time in 25 ms for 512 bytes");
        assert_eq!(&*lines[2], "GRPC is faster 4.00 times than REST");
    }

    #[test]
    fn should_skip_ratio_line_when_grpc_time_is_zero() {
        let lines = comparison(100, 0).formatted_lines();
        assert_eq!(lines.len(), 2);
    }
}
