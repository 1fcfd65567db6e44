//! Traveller review route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use shopease_core::{TravellerId, TravellerStatus};

use crate::error::{AppError, FieldError, Result};
use crate::middleware::RequireAdminAuth;
use crate::models::Traveller;
use crate::state::AppState;

/// Traveller list query parameters.
#[derive(Debug, Deserialize)]
pub struct TravellersQuery {
    /// `all` (default), `pending`, `approved`, or `rejected`.
    pub status: Option<String>,
}

/// Rejection request body. A reason is mandatory.
#[derive(Debug, Deserialize)]
pub struct RejectRequest {
    #[serde(default)]
    pub reason: String,
}

fn parse_status_filter(raw: Option<&str>) -> Result<Option<TravellerStatus>> {
    match raw {
        None | Some("all") => Ok(None),
        Some("pending") | Some("pending_approval") => Ok(Some(TravellerStatus::PendingApproval)),
        Some("approved") => Ok(Some(TravellerStatus::Approved)),
        Some("rejected") => Ok(Some(TravellerStatus::Rejected)),
        Some(other) => Err(AppError::BadRequest(format!(
            "invalid traveller status: {other}"
        ))),
    }
}

/// List traveller applications, optionally filtered by status.
pub async fn index(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Query(query): Query<TravellersQuery>,
) -> Result<Json<Vec<Traveller>>> {
    let filter = parse_status_filter(query.status.as_deref())?;
    Ok(Json(state.repo().travellers(filter).await))
}

/// Show one application.
pub async fn show(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<TravellerId>,
) -> Result<Json<Traveller>> {
    Ok(Json(state.repo().traveller(&id).await?))
}

/// Approve an application.
#[instrument(skip(state), fields(admin = %admin.email, traveller = %id))]
pub async fn approve(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<TravellerId>,
) -> Result<Json<Traveller>> {
    state.backend().review_traveller(&id, true).await?;
    let traveller = state
        .repo()
        .set_traveller_status(&id, TravellerStatus::Approved, None)
        .await?;
    Ok(Json(traveller))
}

/// Reject an application, recording the reason.
#[instrument(skip(state, req), fields(admin = %admin.email, traveller = %id))]
pub async fn reject(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<TravellerId>,
    Json(req): Json<RejectRequest>,
) -> Result<Json<Traveller>> {
    if req.reason.trim().is_empty() {
        return Err(AppError::Validation(vec![FieldError::new(
            "reason",
            "A rejection reason is required",
        )]));
    }

    state.backend().review_traveller(&id, false).await?;
    let traveller = state
        .repo()
        .set_traveller_status(&id, TravellerStatus::Rejected, Some(req.reason))
        .await?;
    Ok(Json(traveller))
}
