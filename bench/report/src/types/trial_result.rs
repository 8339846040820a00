use super::transport::TransportKind;
use std::time::Duration;

/// Single measurement of one batch sent over one transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialResult {
    /// Number of user records in the batch
    pub size: u32,

    /// Transport the batch was sent over
    pub transport: TransportKind,

    /// Wall-clock time of the network round trip
    pub elapsed: Duration,

    /// Length of the serialized request payload in bytes
    pub serialized_bytes: u64,
}

impl TrialResult {
    pub fn new(
        size: u32,
        transport: TransportKind,
        elapsed: Duration,
        serialized_bytes: u64,
    ) -> Self {
        Self {
            size,
            transport,
            elapsed,
            serialized_bytes,
        }
    }

    /// Elapsed time truncated to whole milliseconds, sub-millisecond calls report 0.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }
}
