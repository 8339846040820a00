use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, Hash)]
pub enum TransportKind {
    #[display("REST")]
    #[serde(rename = "rest")]
    Rest,
    #[display("GRPC")]
    #[serde(rename = "grpc")]
    Grpc,
}
