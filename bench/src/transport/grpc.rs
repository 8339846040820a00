use super::{Transport, TransportSample};
use crate::error::BenchError;
use crate::payload::user::BatchRequest;
use crate::proto::user_service_client::UserServiceClient;
use async_trait::async_trait;
use prost::Message;
use std::time::Duration;
use tokio::time::Instant;
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, info};
use transport_bench_report::transport::TransportKind;

/// Calls `UserService/BulkLoad` over a single plaintext channel opened once
/// and shared by every call.
#[derive(Debug, Clone)]
pub struct GrpcTransport {
    client: UserServiceClient<Channel>,
}

impl GrpcTransport {
    /// Connects to `address`, given either as `host:port` or as a full `http://` URI.
    ///
    /// Without `request_timeout` a call to an unresponsive server waits forever.
    pub async fn connect(
        address: &str,
        request_timeout: Option<Duration>,
    ) -> Result<Self, BenchError> {
        let endpoint = Self::endpoint(address, request_timeout)?;
        info!("Connecting gRPC channel to: {}...", endpoint.uri());
        let channel = endpoint.connect().await?;
        info!("Connected gRPC channel to: {}", endpoint.uri());
        Ok(Self {
            client: UserServiceClient::new(channel),
        })
    }

    fn endpoint(
        address: &str,
        request_timeout: Option<Duration>,
    ) -> Result<Endpoint, BenchError> {
        let uri = if address.starts_with("http://") || address.starts_with("https://") {
            address.to_owned()
        } else {
            format!("http://{address}")
        };
        let mut endpoint = Endpoint::from_shared(uri)
            .map_err(|error| BenchError::InvalidEndpoint(format!("{address}: {error}")))?;
        if let Some(timeout) = request_timeout {
            endpoint = endpoint.timeout(timeout);
        }
        Ok(endpoint)
    }
}

#[async_trait]
impl Transport for GrpcTransport {
    fn kind(&self) -> TransportKind {
        TransportKind::Grpc
    }

    fn encoded_len(&self, batch: &BatchRequest) -> Result<u64, BenchError> {
        Ok(batch.to_proto().encoded_len() as u64)
    }

    async fn send(&mut self, batch: &BatchRequest) -> Result<TransportSample, BenchError> {
        let request = batch.to_proto();
        let serialized_bytes = request.encoded_len() as u64;

        let start = Instant::now();
        self.client.bulk_load(tonic::Request::new(request)).await?;
        let elapsed = start.elapsed();

        debug!(
            "gRPC call with {} users took {} us",
            batch.len(),
            elapsed.as_micros()
        );
        Ok(TransportSample {
            elapsed,
            serialized_bytes,
        })
    }
}
