//! # User Repository (Credential Store)
//!
//! Registration and login over the `usuarios` collection.
//!
//! ## Login Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    authenticate(email, password)                        │
//! │                                                                         │
//! │  oldest user with json_extract(document, '$.email') = email            │
//! │       │                                                                 │
//! │       ├── none ───────────────────────────► AuthError::UserNotFound     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  hasher.verify(password, user.password)   (blocking pool)              │
//! │       │                                                                 │
//! │       ├── false ──────────────────────────► AuthError::InvalidCredentials│
//! │       ├── fault (db, hash, no password) ──► AuthError::Internal         │
//! │       ▼                                                                 │
//! │  Ok(Record<User>)  → "Bienvenido <nombre>"                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Duplicate Emails
//! Email is NOT unique. Registering the same address twice stores two
//! independent users; login always resolves to the oldest one. This is
//! long-standing behavior that clients may rely on, so it is kept.

use pasteleria_core::{AuthError, CoreError, Credentials, CredentialHasher, Record, Registration, User};
use sqlx::SqlitePool;
use tracing::{debug, info, warn};

use crate::error::{DbError, DbResult};
use crate::repository::document::DocumentRepository;

/// JSON field used for login lookups.
const EMAIL_FIELD: &str = "email";

/// Credential store: salted password hashes keyed by email.
#[derive(Debug, Clone)]
pub struct UserRepository {
    documents: DocumentRepository<User>,
    hasher: CredentialHasher,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: SqlitePool, hasher: CredentialHasher) -> Self {
        UserRepository {
            documents: DocumentRepository::new(pool),
            hasher,
        }
    }

    /// Registers a new user.
    ///
    /// The password is hashed on the blocking thread pool; the plaintext is
    /// never stored.
    ///
    /// ## Returns
    /// * `Ok(String)` - Id of the new user
    /// * `Err(DbError::Credential)` - No password, or hashing failed
    pub async fn register(&self, registration: Registration) -> DbResult<String> {
        let Registration {
            name,
            email,
            password,
        } = registration;

        let password = password.ok_or(CoreError::MissingPassword)?;
        let password_hash = self.hash_blocking(password).await?;

        let record = self
            .documents
            .insert(User {
                name,
                email,
                password_hash,
            })
            .await?;

        info!(user_id = %record.id, "User registered");
        Ok(record.id)
    }

    /// Verifies a login attempt.
    ///
    /// ## Returns
    /// * `Ok(Record<User>)` - Password verified
    /// * `Err(AuthError::UserNotFound)` - No user with that email (or no email given)
    /// * `Err(AuthError::InvalidCredentials)` - Wrong password
    /// * `Err(AuthError::Internal)` - Storage fault, missing password, corrupt hash
    pub async fn authenticate(&self, credentials: Credentials) -> Result<Record<User>, AuthError> {
        let Credentials { email, password } = credentials;

        let Some(email) = email else {
            debug!("Login without email");
            return Err(AuthError::UserNotFound);
        };

        let user = self
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let password = password.ok_or(CoreError::MissingPassword)?;

        if !self
            .verify_blocking(password, user.data.password_hash.clone())
            .await?
        {
            warn!(user_id = %user.id, "Login rejected: wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        info!(user_id = %user.id, "Login succeeded");
        Ok(user)
    }

    /// Finds the oldest user registered with `email`.
    pub async fn find_by_email(&self, email: &str) -> DbResult<Option<Record<User>>> {
        self.documents.find_first_by_field(EMAIL_FIELD, email).await
    }

    /// Gets a user by id.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Record<User>>> {
        self.documents.get_by_id(id).await
    }

    /// Counts registered users (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        self.documents.count().await
    }

    async fn hash_blocking(&self, password: String) -> DbResult<String> {
        let hasher = self.hasher.clone();

        let hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DbError::Internal(format!("Hashing task failed: {e}")))??;

        Ok(hash)
    }

    async fn verify_blocking(&self, password: String, stored: String) -> DbResult<bool> {
        let hasher = self.hasher.clone();

        let matches = tokio::task::spawn_blocking(move || hasher.verify(&password, &stored))
            .await
            .map_err(|e| DbError::Internal(format!("Verification task failed: {e}")))??;

        Ok(matches)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
