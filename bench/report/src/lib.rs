mod prints;
mod types;

pub use types::*;
