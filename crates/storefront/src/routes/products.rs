//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shopease_core::ProductId;

use crate::catalog::{Category, ListingPage, ListingQuery, Product, SortOrder};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ListingParams {
    /// Comma-separated category slugs.
    pub categories: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub sort: Option<SortOrder>,
    pub page: Option<u32>,
}

impl ListingParams {
    /// Normalize into a cache-stable [`ListingQuery`]: slugs are trimmed,
    /// deduplicated, and sorted so equivalent requests share a cache
    /// entry.
    fn into_query(self) -> ListingQuery {
        let mut categories: Vec<String> = self
            .categories
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();
        categories.sort();
        categories.dedup();

        ListingQuery {
            categories,
            min_price: self.min_price,
            max_price: self.max_price,
            sort: self.sort.unwrap_or_default(),
            page: self.page.unwrap_or(1),
        }
    }
}

/// Product detail payload: the product plus others from its category.
#[derive(Debug, Serialize)]
pub struct ProductDetailView {
    pub product: Product,
    pub related: Vec<Product>,
}

/// Product listing with filters, sorting, and pagination.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Json<ListingPage> {
    Json(state.listing(params.into_query()).await)
}

/// Product detail.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<ProductDetailView>> {
    let product = state
        .catalog()
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    let related = state.catalog().related(&product, 4);
    Ok(Json(ProductDetailView { product, related }))
}

/// Browsable categories.
pub async fn categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.catalog().categories().to_vec())
}
