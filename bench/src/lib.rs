pub mod benchmark;
pub mod config;
pub mod error;
pub mod payload;
pub mod proto;
pub mod transport;
