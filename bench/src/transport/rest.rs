use super::{Transport, TransportSample};
use crate::error::BenchError;
use crate::payload::user::BatchRequest;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};
use transport_bench_report::transport::TransportKind;

/// POSTs the batch as a JSON document. A single client is kept for the whole
/// run so connections are reused between calls.
#[derive(Debug, Clone)]
pub struct RestTransport {
    client: Client,
    url: Url,
}

impl RestTransport {
    pub fn new(url: &str, request_timeout: Option<Duration>) -> Result<Self, BenchError> {
        let url = Url::parse(url)
            .map_err(|error| BenchError::InvalidEndpoint(format!("{url}: {error}")))?;
        let mut builder = Client::builder();
        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        info!("Created REST client for: {}", url);
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl Transport for RestTransport {
    fn kind(&self) -> TransportKind {
        TransportKind::Rest
    }

    fn encoded_len(&self, batch: &BatchRequest) -> Result<u64, BenchError> {
        Ok(batch.to_json()?.len() as u64)
    }

    async fn send(&mut self, batch: &BatchRequest) -> Result<TransportSample, BenchError> {
        let body = batch.to_json()?;
        let serialized_bytes = body.len() as u64;

        let start = Instant::now();
        let response = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        let status = response.status();
        let response_body = response.bytes().await?;
        let elapsed = start.elapsed();

        if !status.is_success() {
            return Err(BenchError::HttpStatus(status.as_u16()));
        }
        // Only a well-formed document is required, its content is ignored.
        serde_json::from_slice::<serde_json::Value>(&response_body)?;

        debug!(
            "REST call with {} users took {} us",
            batch.len(),
            elapsed.as_micros()
        );
        Ok(TransportSample {
            elapsed,
            serialized_bytes,
        })
    }
}
