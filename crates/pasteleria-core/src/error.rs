//! # Error Types
//!
//! Domain-specific error types for pasteleria-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pasteleria-core errors (this file)                                    │
//! │  ├── CoreError   - Password hashing faults                             │
//! │  └── AuthError   - Login outcomes (401 / 500)                          │
//! │                                                                         │
//! │  pasteleria-db errors (separate crate)                                 │
//! │  └── DbError     - Database operation failures                         │
//! │                                                                         │
//! │  API errors (in app)                                                   │
//! │  └── ApiError    - Plain-text HTTP response                            │
//! │                                                                         │
//! │  Flow: CoreError → DbError → ApiError → HTTP client                    │
//! │        CoreError / DbError → AuthError → ApiError (login only)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Password hashing errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The configured work factor is rejected by argon2.
    ///
    /// ## When This Occurs
    /// - Memory cost below 8 KiB per lane
    /// - Zero iterations or zero parallelism
    #[error("Invalid password hash cost: {0}")]
    InvalidHashCost(String),

    /// Hashing or verification failed for a reason other than a mismatch.
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// The stored hash is not a valid PHC string.
    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),

    /// A registration or login body carried no password.
    #[error("Password is required")]
    MissingPassword,
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Auth Error
// =============================================================================

/// Outcome of a failed login.
///
/// The `Display` text is exactly what the client receives as the
/// plain-text response body.
///
/// ## Status Mapping
/// ```text
/// UserNotFound        → 401
/// InvalidCredentials  → 401
/// Internal            → 500 (cause is logged, never sent)
/// ```
#[derive(Debug, Error)]
pub enum AuthError {
    /// No user is registered with the presented email.
    #[error("Usuario no encontrado")]
    UserNotFound,

    /// The stored hash does not verify against the presented password.
    #[error("Contraseña incorrecta")]
    InvalidCredentials,

    /// Any storage or hashing fault during login.
    #[error("Error en el inicio de sesión")]
    Internal(String),
}

impl AuthError {
    /// Returns true for the outcomes that mean "bad credentials" (401).
    pub fn is_rejection(&self) -> bool {
        matches!(self, AuthError::UserNotFound | AuthError::InvalidCredentials)
    }
}

impl From<CoreError> for AuthError {
    fn from(err: CoreError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_messages() {
        assert_eq!(AuthError::UserNotFound.to_string(), "Usuario no encontrado");
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Contraseña incorrecta"
        );
        // The cause stays out of the client-facing text
        let err = AuthError::Internal("pool closed".to_string());
        assert_eq!(err.to_string(), "Error en el inicio de sesión");
    }

    #[test]
    fn test_rejection_classification() {
        assert!(AuthError::UserNotFound.is_rejection());
        assert!(AuthError::InvalidCredentials.is_rejection());
        assert!(!AuthError::Internal("boom".to_string()).is_rejection());
    }

    #[test]
    fn test_core_error_converts_to_internal_auth_error() {
        let auth: AuthError = CoreError::MissingPassword.into();
        match auth {
            AuthError::Internal(detail) => assert_eq!(detail, "Password is required"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
