//! Admin authentication route handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use shopease_core::Email;

use crate::error::{AppError, FieldError, Result};
use crate::models::session_keys;
use crate::state::AppState;

/// Admin login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Admin session payload.
#[derive(Debug, Serialize)]
pub struct AdminSessionView {
    pub logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
}

/// Log in to the admin panel.
///
/// The credential check is the simulated JWT check in the backend stub.
#[instrument(skip(state, session, req))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AdminSessionView>> {
    let mut errors = Vec::new();
    if req.email.is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    }
    if req.password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let email = Email::parse(&req.email)
        .map_err(|_| AppError::Validation(vec![FieldError::new("email", "Email is invalid")]))?;

    let admin = state.backend().authenticate(&email, &req.password).await?;

    session
        .insert(session_keys::CURRENT_ADMIN, admin.clone())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(AdminSessionView {
        logged_in: true,
        name: Some(admin.name),
        email: Some(admin.email),
    }))
}

/// Log out of the admin panel.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Json<AdminSessionView>> {
    session
        .flush()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(AdminSessionView {
        logged_in: false,
        name: None,
        email: None,
    }))
}
