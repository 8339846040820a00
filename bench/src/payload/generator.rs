use super::user::{AddressRecord, BatchRequest, UserRecord};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of synthetic bulk-load payloads.
pub trait PayloadGenerator {
    /// Builds a batch of exactly `size` users.
    fn generate(&mut self, size: u32) -> BatchRequest;
}

/// Generates users whose string fields are a fixed prefix followed by a fresh
/// random fraction, one draw per field. Values are cheap to make distinct,
/// not guaranteed unique.
pub struct RandomUserGenerator<R: Rng = StdRng> {
    rng: R,
    address: AddressRecord,
}

impl RandomUserGenerator<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl Default for RandomUserGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomUserGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            address: AddressRecord::fixed(),
        }
    }

    fn fraction(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn generate_user(&mut self) -> UserRecord {
        UserRecord {
            username: format!("someUsername{}", self.fraction()),
            first_name: format!("name{}", self.fraction()),
            last_name: format!("lastName{}", self.fraction()),
            email: format!("email{}@email.com", self.fraction()),
            phone: format!("+34666{}", self.fraction()),
            birth_date: Utc::now(),
            address: self.address.clone(),
        }
    }
}

impl<R: Rng> PayloadGenerator for RandomUserGenerator<R> {
    fn generate(&mut self, size: u32) -> BatchRequest {
        let mut users = Vec::with_capacity(size as usize);
        for _ in 0..size {
            users.push(self.generate_user());
        }
        BatchRequest::new(users)
    }
}
