//! Shared application state.

use pasteleria_core::CredentialHasher;
use pasteleria_db::{Database, UserRepository};

/// State handed to every handler.
///
/// Built once at startup; cloning shares the same pool.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub hasher: CredentialHasher,
}

impl AppState {
    pub fn new(db: Database, hasher: CredentialHasher) -> Self {
        AppState { db, hasher }
    }

    /// Credential store using the configured hashing cost.
    pub fn users(&self) -> UserRepository {
        self.db.users(self.hasher.clone())
    }
}
