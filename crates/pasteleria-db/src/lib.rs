//! # pasteleria-db: Document Store for the Pastelería Backend
//!
//! This crate provides database access for the Pastelería backend.
//! Collections are stored as JSON documents in SQLite, with sqlx for
//! async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pastelería Data Flow                             │
//! │                                                                         │
//! │  HTTP handler (GET /api/pasteles)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  pasteleria-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌──────────────────┐   ┌─────────────┐  │   │
//! │  │   │   Database    │    │   Repositories   │   │ Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │                  │   │ (embedded)  │  │   │
//! │  │   │               │    │ DocumentRepo<T>  │   │             │  │   │
//! │  │   │ SqlitePool    │◄───│  pasteles        │   │ 001_        │  │   │
//! │  │   │ Connection    │    │  empleados       │   │ collections │  │   │
//! │  │   │ Management    │    │  pedidos         │   │             │  │   │
//! │  │   │               │    │ UserRepository   │   │             │  │   │
//! │  │   └───────────────┘    └──────────────────┘   └─────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   ./pasteleria.db (WAL mode, JSON1 functions)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Document and credential stores
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pasteleria_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("pasteleria.db")).await?;
//!
//! let created = db.products().insert(product).await?;
//! let products = db.products().list().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::document::DocumentRepository;
pub use repository::user::UserRepository;
