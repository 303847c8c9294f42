//! Password hashing.

use async_trait::async_trait;
use bcrypt::{DEFAULT_COST, hash, verify};

use crate::Result;

/// One-way password hashing.
#[async_trait]
pub trait HashProvider: Send + Sync {
    async fn generate_hash(&self, payload: &str) -> Result<String>;

    /// Whether `payload` hashes to `hash`.
    async fn compare_hash(&self, payload: &str, hash: &str) -> Result<bool>;
}

/// bcrypt-backed [`HashProvider`].
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new() -> Self {
        Self::with_cost(DEFAULT_COST)
    }

    /// Use a specific work factor (4 to 31).
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HashProvider for BcryptHasher {
    async fn generate_hash(&self, payload: &str) -> Result<String> {
        Ok(hash(payload, self.cost)?)
    }

    async fn compare_hash(&self, payload: &str, hash: &str) -> Result<bool> {
        Ok(verify(payload, hash)?)
    }
}
