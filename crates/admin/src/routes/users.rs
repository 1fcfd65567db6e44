//! User management route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::instrument;

use shopease_core::{AccountStatus, UserId, UserRole};

use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::models::AdminUser;
use crate::repo::UserChanges;
use crate::state::AppState;

/// Partial user-update request body.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    /// `customer` / `admin` / `traveller`
    pub role: Option<String>,
    /// `active` / `inactive` / `suspended`
    pub status: Option<String>,
}

/// List users.
pub async fn index(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Json<Vec<AdminUser>> {
    Json(state.repo().users().await)
}

/// Update a user's name, role, or status.
#[instrument(skip(state, req), fields(admin = %admin.email, user = %id))]
pub async fn update(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<AdminUser>> {
    let role = req
        .role
        .map(|raw| raw.parse::<UserRole>().map_err(AppError::BadRequest))
        .transpose()?;
    let status = req
        .status
        .map(|raw| parse_account_status(&raw))
        .transpose()?;

    state.backend().save_user(&id).await?;
    let user = state
        .repo()
        .update_user(
            &id,
            UserChanges {
                name: req.name,
                role,
                status,
            },
        )
        .await?;

    Ok(Json(user))
}

/// Delete a user.
#[instrument(skip(state), fields(admin = %admin.email, user = %id))]
pub async fn destroy(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<StatusCode> {
    state.backend().delete_user(&id).await?;
    state.repo().delete_user(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn parse_account_status(raw: &str) -> Result<AccountStatus> {
    match raw {
        "active" => Ok(AccountStatus::Active),
        "inactive" => Ok(AccountStatus::Inactive),
        "suspended" => Ok(AccountStatus::Suspended),
        other => Err(AppError::BadRequest(format!(
            "invalid account status: {other}"
        ))),
    }
}
