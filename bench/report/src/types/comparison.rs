use super::trial_result::TrialResult;
use super::transport::TransportKind;

/// Returns how many times faster gRPC was than REST.
///
/// Both values are whole milliseconds. When the gRPC call took less than one
/// millisecond there is nothing meaningful to divide by and `None` is returned.
pub fn speed_ratio(rest_ms: u64, grpc_ms: u64) -> Option<f64> {
    if grpc_ms == 0 {
        return None;
    }
    Some(rest_ms as f64 / grpc_ms as f64)
}

/// REST and gRPC measurements for the same payload size within one trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeComparison {
    pub size: u32,
    pub rest: TrialResult,
    pub grpc: TrialResult,
}

impl SizeComparison {
    pub fn new(rest: TrialResult, grpc: TrialResult) -> Self {
        debug_assert_eq!(rest.transport, TransportKind::Rest);
        debug_assert_eq!(grpc.transport, TransportKind::Grpc);
        debug_assert_eq!(rest.size, grpc.size);
        Self {
            size: rest.size,
            rest,
            grpc,
        }
    }

    pub fn speed_ratio(&self) -> Option<f64> {
        speed_ratio(self.rest.elapsed_ms(), self.grpc.elapsed_ms())
    }
}
