//! Authentication route handlers.
//!
//! Demo auth: validation is real, authentication is not. The backend
//! call is a latency stub that always accepts, the session records who
//! "logged in", and the storage flag mirrors it for any consumer that
//! only reads the key-value store.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::{instrument, warn};

use shopease_core::Email;

use crate::error::{AppError, FieldError, Result};
use crate::models::{CurrentUser, session_keys};
use crate::state::AppState;
use crate::store::LOGGED_IN_KEY;

// =============================================================================
// Request/Response Types
// =============================================================================

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(default = "default_user_type")]
    pub user_type: String,
}

fn default_user_type() -> String {
    "customer".to_owned()
}

/// Forgot-password request body.
#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Session status payload.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
}

/// Generic message payload.
#[derive(Debug, Serialize)]
pub struct MessageView {
    pub message: String,
}

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length for registration.
const MIN_PASSWORD_LENGTH: usize = 8;

fn validate_login(req: &LoginRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if req.email.is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if Email::parse(&req.email).is_err() {
        errors.push(FieldError::new("email", "Email is invalid"));
    }
    if req.password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    }
    errors
}

fn validate_registration(req: &RegisterRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if req.email.is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if Email::parse(&req.email).is_err() {
        errors.push(FieldError::new("email", "Email is invalid"));
    }

    if req.password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    } else if req.password.len() < MIN_PASSWORD_LENGTH {
        errors.push(FieldError::new(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
        ));
    }

    if req.password != req.confirm_password {
        errors.push(FieldError::new("confirm_password", "Passwords do not match"));
    }

    if !matches!(req.user_type.as_str(), "customer" | "traveller") {
        errors.push(FieldError::new("user_type", "Select an account type"));
    }

    errors
}

// =============================================================================
// Handlers
// =============================================================================

/// Mirror the logged-in flag to storage; a failed write is logged and
/// swallowed like every other storage failure.
fn write_logged_in_flag(state: &AppState, value: bool) {
    if let Err(e) = state
        .storage()
        .write(LOGGED_IN_KEY, if value { "true" } else { "false" })
    {
        warn!(error = %e, "failed to persist logged-in flag");
    }
}

/// Log in.
#[instrument(skip(state, session, req))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<LoginRequest>,
) -> Result<Json<SessionView>> {
    let errors = validate_login(&req);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let email = Email::parse(&req.email)
        .map_err(|e| AppError::Validation(vec![FieldError::new("email", e.to_string())]))?;

    state.backend().authenticate(&email, &req.password).await?;

    session
        .insert(
            session_keys::CURRENT_USER,
            CurrentUser {
                email: email.clone(),
            },
        )
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    write_logged_in_flag(&state, true);

    Ok(Json(SessionView {
        logged_in: true,
        email: Some(email),
    }))
}

/// Log out.
#[instrument(skip(state, session))]
pub async fn logout(State(state): State<AppState>, session: Session) -> Result<Json<SessionView>> {
    session
        .flush()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    write_logged_in_flag(&state, false);

    Ok(Json(SessionView {
        logged_in: false,
        email: None,
    }))
}

/// Current session status (the navbar's auth check).
pub async fn session_status(session: Session) -> Result<Json<SessionView>> {
    let user: Option<CurrentUser> = session
        .get(session_keys::CURRENT_USER)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(SessionView {
        logged_in: user.is_some(),
        email: user.map(|u| u.email),
    }))
}

/// Create an account.
#[instrument(skip(state, req))]
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse> {
    let errors = validate_registration(&req);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let email = Email::parse(&req.email)
        .map_err(|e| AppError::Validation(vec![FieldError::new("email", e.to_string())]))?;

    state.backend().register_account(&email, &req.password).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageView {
            message: "Account created. Please sign in.".to_owned(),
        }),
    ))
}

/// Request a password-reset link.
#[instrument(skip(state, req))]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(req): Json<ForgotPasswordRequest>,
) -> Result<Json<MessageView>> {
    let email = Email::parse(&req.email)
        .map_err(|_| AppError::Validation(vec![FieldError::new("email", "Email is invalid")]))?;

    state.backend().request_password_reset(&email).await?;

    Ok(Json(MessageView {
        message: format!("If an account exists for {email}, a reset link has been sent."),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_request(email: &str, password: &str, confirm: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_owned(),
            password: password.to_owned(),
            confirm_password: confirm.to_owned(),
            user_type: "customer".to_owned(),
        }
    }

    #[test]
    fn test_valid_registration_passes() {
        let req = register_request("user@example.com", "password1", "password1");
        assert!(validate_registration(&req).is_empty());
    }

    #[test]
    fn test_registration_requires_email() {
        let req = register_request("", "password1", "password1");
        let errors = validate_registration(&req);
        assert!(errors.iter().any(|e| e.field == "email"));
    }

    #[test]
    fn test_registration_rejects_malformed_email() {
        let req = register_request("not-an-email", "password1", "password1");
        let errors = validate_registration(&req);
        assert!(
            errors
                .iter()
                .any(|e| e.field == "email" && e.message == "Email is invalid")
        );
    }

    #[test]
    fn test_registration_enforces_password_length() {
        let req = register_request("user@example.com", "short", "short");
        let errors = validate_registration(&req);
        assert!(errors.iter().any(|e| e.field == "password"));
    }

    #[test]
    fn test_registration_requires_matching_confirmation() {
        let req = register_request("user@example.com", "password1", "password2");
        let errors = validate_registration(&req);
        assert!(errors.iter().any(|e| e.field == "confirm_password"));
    }

    #[test]
    fn test_registration_rejects_unknown_account_type() {
        let mut req = register_request("user@example.com", "password1", "password1");
        req.user_type = "wizard".to_owned();
        let errors = validate_registration(&req);
        assert!(errors.iter().any(|e| e.field == "user_type"));
    }

    #[test]
    fn test_login_requires_both_fields() {
        let errors = validate_login(&LoginRequest {
            email: String::new(),
            password: String::new(),
        });
        assert_eq!(errors.len(), 2);
    }
}
