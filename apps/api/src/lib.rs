//! # Pastelería API
//!
//! HTTP backend for the bakery frontend: user registration and login, plus
//! list/create/delete over cakes, employees and orders.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Request Pipeline                               │
//! │                                                                         │
//! │  client ──► TraceLayer ──► CorsLayer (any origin) ──► Router           │
//! │                                                          │              │
//! │              ┌───────────────────────────────────────────┤              │
//! │              ▼                        ▼                  ▼              │
//! │      /registro, /login       /api/<collection>     anything else       │
//! │      UserRepository          DocumentRepository<T>  ServeDir(public/)  │
//! │              │                        │                                 │
//! │              └──────────┬─────────────┘                                 │
//! │                         ▼                                               │
//! │                 SQLite (pasteleria.db)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables (all optional):
//! - `PORT` - HTTP port (default: 3000)
//! - `BIND_ADDR` - Bind address (default: 0.0.0.0)
//! - `DATABASE_PATH` - SQLite file (default: pasteleria.db)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `STATIC_DIR` - Static file directory (default: public)
//! - `PASSWORD_HASH_MEMORY_KIB`, `PASSWORD_HASH_ITERATIONS`,
//!   `PASSWORD_HASH_PARALLELISM` - argon2 cost for new registrations
//! - `RUST_LOG` - Log filter (default: info)

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::path::Path;

use axum::http::Method;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;
pub use state::AppState;

/// Builds the complete application: routes, static files and middleware.
///
/// ## Arguments
/// * `state` - Shared database handle and password hasher
/// * `static_dir` - Served for any path no route matches
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(Any);

    routes::api_routes()
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// Router Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use pasteleria_core::{CredentialHasher, HashCost};
    use pasteleria_db::{Database, DbConfig};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn test_app() -> (Router, Database) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let hasher = CredentialHasher::new(HashCost::new(1024, 1, 1)).unwrap();
        let app = router(AppState::new(db.clone(), hasher), "public");
        (app, db)
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn list(app: &Router, uri: &str) -> Vec<Value> {
        let (status, body) = send(app, empty_request(Method::GET, uri)).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_str(&body).unwrap()
    }

    #[tokio::test]
    async fn test_register_and_login() {
        let (app, _db) = test_app().await;

        let (status, body) = send(
            &app,
            json_request(
                Method::POST,
                "/registro",
                json!({ "nombre": "Ana", "email": "a@x.com", "password": "secret" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, "Usuario registrado");

        let (status, body) = send(
            &app,
            json_request(
                Method::POST,
                "/login",
                json!({ "email": "a@x.com", "password": "secret" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Bienvenido Ana");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let (app, _db) = test_app().await;

        send(
            &app,
            json_request(
                Method::POST,
                "/registro",
                json!({ "nombre": "Ana", "email": "a@x.com", "password": "secret" }),
            ),
        )
        .await;

        let (status, body) = send(
            &app,
            json_request(
                Method::POST,
                "/login",
                json!({ "email": "a@x.com", "password": "otra" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, "Contraseña incorrecta");
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let (app, _db) = test_app().await;

        let (status, body) = send(
            &app,
            json_request(
                Method::POST,
                "/login",
                json!({ "email": "nadie@x.com", "password": "secret" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, "Usuario no encontrado");
    }

    #[tokio::test]
    async fn test_login_storage_fault() {
        let (app, db) = test_app().await;
        db.close().await;

        let (status, body) = send(
            &app,
            json_request(
                Method::POST,
                "/login",
                json!({ "email": "a@x.com", "password": "secret" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Error en el inicio de sesión");
    }

    #[tokio::test]
    async fn test_register_same_email_twice() {
        let (app, db) = test_app().await;
        let body = json!({ "nombre": "Ana", "email": "a@x.com", "password": "secret" });

        let (first, _) = send(&app, json_request(Method::POST, "/registro", body.clone())).await;
        let (second, _) = send(&app, json_request(Method::POST, "/registro", body)).await;

        assert_eq!(first, StatusCode::CREATED);
        assert_eq!(second, StatusCode::CREATED);

        let hasher = CredentialHasher::new(HashCost::new(1024, 1, 1)).unwrap();
        assert_eq!(db.users(hasher).count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_register_without_password_fails() {
        let (app, _db) = test_app().await;

        let (status, _) = send(
            &app,
            json_request(Method::POST, "/registro", json!({ "email": "a@x.com" })),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_products_create_list_delete() {
        let (app, _db) = test_app().await;

        let (status, body) = send(
            &app,
            json_request(
                Method::POST,
                "/api/pasteles",
                json!({ "nombre": "Torta", "precio": 10 }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, "Pastel creado");

        let products = list(&app, "/api/pasteles").await;
        assert_eq!(products.len(), 1);
        assert_eq!(products[0]["nombre"], "Torta");
        assert_eq!(products[0]["precio"], json!(10));

        let id = products[0]["_id"].as_str().unwrap().to_string();
        let (status, body) =
            send(&app, empty_request(Method::DELETE, &format!("/api/pasteles/{id}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Pastel eliminado");

        assert!(list(&app, "/api/pasteles").await.is_empty());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let (app, _db) = test_app().await;

        for name in ["Brownie", "Alfajor", "Flan"] {
            send(
                &app,
                json_request(Method::POST, "/api/pasteles", json!({ "nombre": name })),
            )
            .await;
        }

        let names: Vec<Value> = list(&app, "/api/pasteles")
            .await
            .into_iter()
            .map(|p| p["nombre"].clone())
            .collect();
        assert_eq!(names, vec![json!("Brownie"), json!("Alfajor"), json!("Flan")]);
    }

    #[tokio::test]
    async fn test_list_returns_numbers_as_sent() {
        let (app, _db) = test_app().await;

        send(
            &app,
            json_request(Method::POST, "/api/pasteles", json!({ "nombre": "Torta", "precio": 10 })),
        )
        .await;

        let (_, body) = send(&app, empty_request(Method::GET, "/api/pasteles")).await;
        assert!(body.contains(r#""precio":10}"#) || body.contains(r#""precio":10,"#));
        assert!(!body.contains("10.0"));
    }

    #[tokio::test]
    async fn test_form_values_are_coerced() {
        let (app, _db) = test_app().await;

        let (status, body) = send(
            &app,
            json_request(
                Method::POST,
                "/api/pasteles",
                json!({ "nombre": "Torta", "precio": "10" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, "Pastel creado");

        let (status, body) = send(
            &app,
            json_request(Method::POST, "/api/empleados", json!({ "nombre": 123 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, "Empleado creado");

        let products = list(&app, "/api/pasteles").await;
        assert_eq!(products[0]["precio"], json!(10));

        let employees = list(&app, "/api/empleados").await;
        assert_eq!(employees[0]["nombre"], "123");
        assert!(employees[0]["rol"].is_null());
    }

    #[tokio::test]
    async fn test_non_numeric_price_rejected() {
        let (app, _db) = test_app().await;

        let (status, _) = send(
            &app,
            json_request(Method::POST, "/api/pasteles", json!({ "precio": "diez" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(list(&app, "/api/pasteles").await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_fields_are_null() {
        let (app, _db) = test_app().await;

        send(&app, json_request(Method::POST, "/api/pasteles", json!({}))).await;

        let products = list(&app, "/api/pasteles").await;
        assert_eq!(products.len(), 1);
        assert!(products[0]["_id"].is_string());
        assert!(products[0]["nombre"].is_null());
        assert!(products[0]["precio"].is_null());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_succeeds() {
        let (app, _db) = test_app().await;

        let (status, body) =
            send(&app, empty_request(Method::DELETE, "/api/pedidos/no-existe")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Pedido eliminado");
    }

    #[tokio::test]
    async fn test_employees_and_orders() {
        let (app, _db) = test_app().await;

        let (status, body) = send(
            &app,
            json_request(
                Method::POST,
                "/api/empleados",
                json!({ "nombre": "Luis", "rol": "Cajero" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, "Empleado creado");

        let (status, body) = send(
            &app,
            json_request(
                Method::POST,
                "/api/pedidos",
                json!({ "cliente": "Sofía", "producto": "Tres leches" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, "Pedido registrado");

        let employees = list(&app, "/api/empleados").await;
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0]["rol"], "Cajero");

        let orders = list(&app, "/api/pedidos").await;
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0]["cliente"], "Sofía");

        // Collections are independent
        assert!(list(&app, "/api/pasteles").await.is_empty());

        let id = employees[0]["_id"].as_str().unwrap().to_string();
        let (_, body) =
            send(&app, empty_request(Method::DELETE, &format!("/api/empleados/{id}"))).await;
        assert_eq!(body, "Empleado eliminado");
        assert!(list(&app, "/api/empleados").await.is_empty());
        assert_eq!(list(&app, "/api/pedidos").await.len(), 1);
    }

    #[tokio::test]
    async fn test_crud_storage_fault_is_500() {
        let (app, db) = test_app().await;
        db.close().await;

        let (status, _) = send(&app, empty_request(Method::GET, "/api/pasteles")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let (app, _db) = test_app().await;

        let request = Request::builder()
            .method(Method::GET)
            .uri("/api/pasteles")
            .header(header::ORIGIN, "http://localhost:5173")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}
