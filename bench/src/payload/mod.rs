pub mod generator;
pub mod user;
