pub mod grpc;
pub mod rest;

use crate::error::BenchError;
use crate::payload::user::BatchRequest;
use async_trait::async_trait;
use std::time::Duration;
use transport_bench_report::transport::TransportKind;

pub use grpc::GrpcTransport;
pub use rest::RestTransport;

/// Outcome of a single successful call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportSample {
    /// Network round trip, payload encoding is not included.
    pub elapsed: Duration,
    pub serialized_bytes: u64,
}

/// Encodes a batch and submits it in one call to the server under test.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send {
    fn kind(&self) -> TransportKind;

    /// Length of the encoded request for `batch`, without sending anything.
    fn encoded_len(&self, batch: &BatchRequest) -> Result<u64, BenchError>;

    /// Sends `batch` and waits for the complete response. No retries.
    async fn send(&mut self, batch: &BatchRequest) -> Result<TransportSample, BenchError>;
}
