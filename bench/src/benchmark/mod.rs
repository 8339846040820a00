pub mod driver;
pub mod plan;
