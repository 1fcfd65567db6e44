//! Order-history route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shopease_core::{OrderId, OrderStatus};

use crate::catalog::orders::{Order, sample_orders};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Order list query parameters.
#[derive(Debug, Deserialize)]
pub struct OrdersQuery {
    /// `all` (default) or one of the order statuses.
    pub status: Option<String>,
}

/// One row of the order-history list.
#[derive(Debug, Serialize)]
pub struct OrderSummaryView {
    pub id: OrderId,
    pub placed_on: NaiveDate,
    pub total: Decimal,
    pub status: OrderStatus,
    pub item_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
}

impl From<&Order> for OrderSummaryView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            placed_on: order.placed_on,
            total: order.total,
            status: order.status,
            item_count: order.items.len(),
            tracking_number: order.tracking_number.clone(),
        }
    }
}

/// Order history, optionally filtered by status tab.
pub async fn index(
    State(_state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> Result<Json<Vec<OrderSummaryView>>> {
    let filter = match query.status.as_deref() {
        None | Some("all") => None,
        Some(raw) => Some(
            raw.parse::<OrderStatus>()
                .map_err(AppError::BadRequest)?,
        ),
    };

    let orders = sample_orders();
    let rows = orders
        .iter()
        .filter(|order| filter.is_none_or(|status| order.status == status))
        .map(OrderSummaryView::from)
        .collect();

    Ok(Json(rows))
}

/// Full order detail.
pub async fn show(
    State(_state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<Order>> {
    sample_orders()
        .into_iter()
        .find(|order| order.id == id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))
}
