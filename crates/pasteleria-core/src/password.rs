//! # Password Hashing
//!
//! Salted, slow password hashing for the credential store.
//!
//! ## How It Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Registration / Login                                 │
//! │                                                                         │
//! │  POST /registro { password: "secret" }                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CredentialHasher::hash("secret")                                      │
//! │       │   random 16-byte salt + argon2id(m, t, p)                      │
//! │       ▼                                                                 │
//! │  "$argon2id$v=19$m=19456,t=2,p=1$<salt>$<digest>"  ← stored            │
//! │                                                                         │
//! │  POST /login { password: "secret" }                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CredentialHasher::verify("secret", stored)                            │
//! │       │   re-derives with the salt AND cost embedded in `stored`       │
//! │       ▼                                                                 │
//! │  true / false                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Verification uses the parameters recorded in the PHC string, so raising
//! the configured cost only affects new registrations.

use argon2::password_hash::{
    rand_core::OsRng, Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier,
    SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Hash Cost
// =============================================================================

/// Argon2 work factor.
///
/// ## Defaults
/// The argon2 crate defaults (19 MiB, 2 passes, 1 lane).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCost {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    /// Number of passes over memory.
    pub iterations: u32,
    /// Degree of parallelism (lanes).
    pub parallelism: u32,
}

impl HashCost {
    /// Creates a cost from explicit parameters.
    pub const fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> Self {
        HashCost {
            memory_kib,
            iterations,
            parallelism,
        }
    }
}

impl Default for HashCost {
    fn default() -> Self {
        HashCost::new(
            Params::DEFAULT_M_COST,
            Params::DEFAULT_T_COST,
            Params::DEFAULT_P_COST,
        )
    }
}

// =============================================================================
// Credential Hasher
// =============================================================================

/// Hashes and verifies passwords with argon2id.
///
/// Cheap to clone; a copy is moved onto the blocking pool for every call.
#[derive(Debug, Clone)]
pub struct CredentialHasher {
    params: Params,
}

impl CredentialHasher {
    /// Creates a hasher, validating the cost up front.
    ///
    /// ## Returns
    /// * `Err(CoreError::InvalidHashCost)` - argon2 rejects the parameters
    pub fn new(cost: HashCost) -> CoreResult<Self> {
        let params = Params::new(cost.memory_kib, cost.iterations, cost.parallelism, None)
            .map_err(|e| CoreError::InvalidHashCost(e.to_string()))?;

        Ok(CredentialHasher { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hashes a plaintext password with a fresh random salt.
    ///
    /// ## Returns
    /// PHC-formatted string carrying algorithm, cost, salt and digest.
    pub fn hash(&self, plaintext: &str) -> CoreResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| CoreError::HashingFailed(e.to_string()))?;

        Ok(hash.to_string())
    }

    /// Checks a plaintext password against a stored hash.
    ///
    /// ## Returns
    /// * `Ok(true)` - Password matches
    /// * `Ok(false)` - Password does not match
    /// * `Err(CoreError::MalformedHash)` - Stored value is not a PHC string
    pub fn verify(&self, plaintext: &str, stored: &str) -> CoreResult<bool> {
        let parsed =
            PasswordHash::new(stored).map_err(|e| CoreError::MalformedHash(e.to_string()))?;

        match self.argon2().verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(e) => Err(CoreError::HashingFailed(e.to_string())),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
