//! Order management route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use shopease_core::{OrderId, OrderStatus};

use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::models::AdminOrder;
use crate::state::AppState;

/// Order list query parameters.
#[derive(Debug, Deserialize)]
pub struct OrdersQuery {
    /// `all` (default) or one of the order statuses.
    pub status: Option<String>,
}

/// Status-update request body.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
    pub note: Option<String>,
}

fn parse_status_filter(raw: Option<&str>) -> Result<Option<OrderStatus>> {
    match raw {
        None | Some("all") => Ok(None),
        Some(value) => value
            .parse::<OrderStatus>()
            .map(Some)
            .map_err(AppError::BadRequest),
    }
}

/// List orders, optionally filtered by status.
pub async fn index(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> Result<Json<Vec<AdminOrder>>> {
    let filter = parse_status_filter(query.status.as_deref())?;
    Ok(Json(state.repo().orders(filter).await))
}

/// Show one order.
pub async fn show(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<AdminOrder>> {
    Ok(Json(state.repo().order(&id).await?))
}

/// Update an order's status, with an optional note.
#[instrument(skip(state, req), fields(admin = %admin.email, order = %id))]
pub async fn update_status(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<AdminOrder>> {
    let status = req
        .status
        .parse::<OrderStatus>()
        .map_err(AppError::BadRequest)?;

    state.backend().update_order_status(&id, status).await?;
    let order = state
        .repo()
        .set_order_status(&id, status, req.note)
        .await?;

    Ok(Json(order))
}
