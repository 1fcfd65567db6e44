//! Product management route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use shopease_core::{ProductId, StockStatus};

use crate::error::{AppError, FieldError, Result};
use crate::middleware::RequireAdminAuth;
use crate::models::AdminProduct;
use crate::repo::ProductChanges;
use crate::state::AppState;

/// A product row with its derived stock status.
#[derive(Debug, Serialize)]
pub struct ProductView {
    #[serde(flatten)]
    pub product: AdminProduct,
    pub status: StockStatus,
}

impl From<AdminProduct> for ProductView {
    fn from(product: AdminProduct) -> Self {
        let status = product.status();
        Self { product, status }
    }
}

/// Create-product request body.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub stock: u32,
}

/// Partial-update request body.
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<u32>,
}

fn validate_create(req: &CreateProductRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if req.name.trim().is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    }
    if req.category.trim().is_empty() {
        errors.push(FieldError::new("category", "Category is required"));
    }
    if req.price < Decimal::ZERO {
        errors.push(FieldError::new("price", "Price cannot be negative"));
    }
    errors
}

/// List products.
pub async fn index(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Json<Vec<ProductView>> {
    let products = state.repo().products().await;
    Json(products.into_iter().map(ProductView::from).collect())
}

/// Show one product.
pub async fn show(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<ProductView>> {
    let product = state.repo().product(&id).await?;
    Ok(Json(ProductView::from(product)))
}

/// Create a product.
#[instrument(skip(state, req), fields(admin = %admin.email))]
pub async fn create(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Json(req): Json<CreateProductRequest>,
) -> Result<impl IntoResponse> {
    let errors = validate_create(&req);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let product = state
        .repo()
        .insert_product(req.name, req.category, req.price, req.stock)
        .await;
    state.backend().save_product(&product.id).await?;

    Ok((StatusCode::CREATED, Json(ProductView::from(product))))
}

/// Update a product.
#[instrument(skip(state, req), fields(admin = %admin.email))]
pub async fn update(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(req): Json<UpdateProductRequest>,
) -> Result<Json<ProductView>> {
    if req.price.is_some_and(|price| price < Decimal::ZERO) {
        return Err(AppError::Validation(vec![FieldError::new(
            "price",
            "Price cannot be negative",
        )]));
    }

    state.backend().save_product(&id).await?;
    let product = state
        .repo()
        .update_product(
            &id,
            ProductChanges {
                name: req.name,
                category: req.category,
                price: req.price,
                stock: req.stock,
            },
        )
        .await?;

    Ok(Json(ProductView::from(product)))
}

/// Delete a product.
#[instrument(skip(state), fields(admin = %admin.email))]
pub async fn destroy(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<StatusCode> {
    state.backend().delete_product(&id).await?;
    state.repo().delete_product(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
