pub mod comparison;
pub mod params;
pub mod report;
pub mod transport;
pub mod trial_result;
