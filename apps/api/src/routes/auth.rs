//! `POST /registro` and `POST /login`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pasteleria_core::{Credentials, Registration};
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

/// Registers a user. The password is hashed before it is stored.
///
/// ## Returns
/// * `201 Usuario registrado`
/// * `500` - Missing password or storage fault
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    Json(registration): Json<Registration>,
) -> Result<(StatusCode, &'static str), ApiError> {
    state.users().register(registration).await?;
    Ok((StatusCode::CREATED, "Usuario registrado"))
}

/// Checks an email/password pair and greets the user.
///
/// ## Returns
/// * `200 Bienvenido <nombre>`
/// * `401 Usuario no encontrado` / `401 Contraseña incorrecta`
/// * `500 Error en el inicio de sesión`
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<String, ApiError> {
    let user = state.users().authenticate(credentials).await?;
    Ok(user.data.greeting())
}
