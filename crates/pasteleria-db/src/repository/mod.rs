//! # Repository Module
//!
//! Store implementations for the Pastelería collections.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  db.products().list()                                          │
//! │       ▼                                                                 │
//! │  DocumentRepository<Product>          UserRepository                   │
//! │  ├── list(&self)                      ├── register(&self, body)        │
//! │  ├── insert(&self, product)           └── authenticate(&self, creds)   │
//! │  ├── delete(&self, id)                          │                      │
//! │  ├── get_by_id(&self, id)                       │ reuses               │
//! │  └── count(&self)                 ◄─────────────┘ DocumentRepository   │
//! │       │                                           <User>               │
//! │       │  SQL over JSON documents                                       │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`DocumentRepository`] - Catalog, staff and order stores (generic)
//! - [`UserRepository`] - Credential store

pub mod document;
pub mod user;

pub use document::DocumentRepository;
pub use user::UserRepository;
