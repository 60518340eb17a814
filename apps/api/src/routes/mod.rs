//! HTTP routes.
//!
//! ```text
//! POST   /registro              auth::register
//! POST   /login                 auth::login
//! GET    /api/pasteles          collection::list::<Product>
//! POST   /api/pasteles          collection::create::<Product>
//! DELETE /api/pasteles/{id}     collection::remove::<Product>
//! ...    /api/empleados         same, Employee
//! ...    /api/pedidos           same, Order
//! ```

pub mod auth;
pub mod collection;

use axum::routing::post;
use axum::Router;
use pasteleria_core::{Employee, Order, Product};

use crate::state::AppState;

/// All API routes, without middleware or state.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/registro", post(auth::register))
        .route("/login", post(auth::login))
        .merge(collection::routes::<Product>())
        .merge(collection::routes::<Employee>())
        .merge(collection::routes::<Order>())
}
