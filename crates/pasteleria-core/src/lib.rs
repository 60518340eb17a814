//! # pasteleria-core: Pure Domain Logic for the Pastelería Backend
//!
//! This crate holds the domain model shared by the database layer and the
//! HTTP API. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Pastelería Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Static frontend (public/)                       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTP + JSON                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 apps/api (axum router)                          │   │
//! │  │    /registro, /login, /api/pasteles, /api/empleados, ...        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ pasteleria-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐                 │   │
//! │  │   │   types   │  │  password  │  │   error   │                 │   │
//! │  │   │  Product  │  │ Credential │  │ CoreError │                 │   │
//! │  │   │  Employee │  │   Hasher   │  │ AuthError │                 │   │
//! │  │   │  Order    │  │  HashCost  │  │           │                 │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              pasteleria-db (document store)                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entities and their JSON wire format
//! - [`coerce`] - Lenient field deserializers for form input
//! - [`password`] - Salted password hashing and verification
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use pasteleria_core::{CredentialHasher, HashCost};
//!
//! let hasher = CredentialHasher::new(HashCost::new(1024, 1, 1)).unwrap();
//! let hash = hasher.hash("secret").unwrap();
//!
//! assert!(hasher.verify("secret", &hash).unwrap());
//! assert!(!hasher.verify("wrong", &hash).unwrap());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod coerce;
pub mod error;
pub mod password;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{AuthError, CoreError, CoreResult};
pub use password::{CredentialHasher, HashCost};
pub use types::*;
