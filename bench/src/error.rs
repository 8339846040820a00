use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Cannot load configuration: {0}")]
    CannotLoadConfiguration(String),
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP request failed with status: {0}")]
    HttpStatus(u16),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("gRPC transport error: {0}")]
    GrpcTransport(#[from] tonic::transport::Error),
    #[error("gRPC call failed: {0}")]
    GrpcStatus(#[from] tonic::Status),
}
