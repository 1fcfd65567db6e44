//! In-memory tables behind the admin panel.
//!
//! Seeded from the sample datasets at startup. Mutations live only as
//! long as the process; a restart reseeds every table.

use rust_decimal::Decimal;
use thiserror::Error;
use tokio::sync::RwLock;

use shopease_core::{
    AccountStatus, OrderId, OrderStatus, ProductId, TravellerId, TravellerStatus, UserId,
    UserRole,
};

use crate::data;
use crate::models::{AdminOrder, AdminProduct, AdminUser, Traveller};

/// Errors from table lookups.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{0} not found")]
    NotFound(String),
}

/// A partial product edit; `None` fields are left unchanged.
#[derive(Debug, Default, Clone)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<u32>,
}

/// A partial user edit; `None` fields are left unchanged.
#[derive(Debug, Default, Clone)]
pub struct UserChanges {
    pub name: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<AccountStatus>,
}

/// The admin's in-memory tables.
pub struct AdminRepo {
    products: RwLock<Vec<AdminProduct>>,
    orders: RwLock<Vec<AdminOrder>>,
    users: RwLock<Vec<AdminUser>>,
    travellers: RwLock<Vec<Traveller>>,
}

impl AdminRepo {
    /// Tables loaded with the sample datasets.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            products: RwLock::new(data::seed_products()),
            orders: RwLock::new(data::seed_orders()),
            users: RwLock::new(data::seed_users()),
            travellers: RwLock::new(data::seed_travellers()),
        }
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// All products.
    pub async fn products(&self) -> Vec<AdminProduct> {
        self.products.read().await.clone()
    }

    /// Look up one product.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError::NotFound`] for an unknown id.
    pub async fn product(&self, id: &ProductId) -> Result<AdminProduct, RepoError> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| RepoError::NotFound(format!("product {id}")))
    }

    /// Insert a product, assigning the next numeric id.
    pub async fn insert_product(
        &self,
        name: String,
        category: String,
        price: Decimal,
        stock: u32,
    ) -> AdminProduct {
        let mut products = self.products.write().await;
        let next_id = products
            .iter()
            .filter_map(|p| p.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        let product = AdminProduct {
            id: ProductId::new(next_id.to_string()),
            name,
            category,
            price,
            stock,
        };
        products.push(product.clone());
        product
    }

    /// Apply a partial edit to a product.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError::NotFound`] for an unknown id.
    pub async fn update_product(
        &self,
        id: &ProductId,
        changes: ProductChanges,
    ) -> Result<AdminProduct, RepoError> {
        let mut products = self.products.write().await;
        let product = products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("product {id}")))?;

        if let Some(name) = changes.name {
            product.name = name;
        }
        if let Some(category) = changes.category {
            product.category = category;
        }
        if let Some(price) = changes.price {
            product.price = price;
        }
        if let Some(stock) = changes.stock {
            product.stock = stock;
        }
        Ok(product.clone())
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError::NotFound`] for an unknown id.
    pub async fn delete_product(&self, id: &ProductId) -> Result<(), RepoError> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| &p.id != id);
        if products.len() == before {
            return Err(RepoError::NotFound(format!("product {id}")));
        }
        Ok(())
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Orders, optionally filtered by status.
    pub async fn orders(&self, status: Option<OrderStatus>) -> Vec<AdminOrder> {
        self.orders
            .read()
            .await
            .iter()
            .filter(|o| status.is_none_or(|s| o.status == s))
            .cloned()
            .collect()
    }

    /// Look up one order.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError::NotFound`] for an unknown id.
    pub async fn order(&self, id: &OrderId) -> Result<AdminOrder, RepoError> {
        self.orders
            .read()
            .await
            .iter()
            .find(|o| &o.id == id)
            .cloned()
            .ok_or_else(|| RepoError::NotFound(format!("order {id}")))
    }

    /// Set an order's status, replacing any previous status note.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError::NotFound`] for an unknown id.
    pub async fn set_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
        note: Option<String>,
    ) -> Result<AdminOrder, RepoError> {
        let mut orders = self.orders.write().await;
        let order = orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("order {id}")))?;
        order.status = status;
        order.status_note = note;
        Ok(order.clone())
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// All users.
    pub async fn users(&self) -> Vec<AdminUser> {
        self.users.read().await.clone()
    }

    /// Apply a partial edit to a user.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError::NotFound`] for an unknown id.
    pub async fn update_user(
        &self,
        id: &UserId,
        changes: UserChanges,
    ) -> Result<AdminUser, RepoError> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|u| &u.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("user {id}")))?;

        if let Some(name) = changes.name {
            user.name = name;
        }
        if let Some(role) = changes.role {
            user.role = role;
        }
        if let Some(status) = changes.status {
            user.status = status;
        }
        Ok(user.clone())
    }

    /// Delete a user.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError::NotFound`] for an unknown id.
    pub async fn delete_user(&self, id: &UserId) -> Result<(), RepoError> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| &u.id != id);
        if users.len() == before {
            return Err(RepoError::NotFound(format!("user {id}")));
        }
        Ok(())
    }

    // =========================================================================
    // Travellers
    // =========================================================================

    /// Traveller applications, optionally filtered by status.
    pub async fn travellers(&self, status: Option<TravellerStatus>) -> Vec<Traveller> {
        self.travellers
            .read()
            .await
            .iter()
            .filter(|t| status.is_none_or(|s| t.status == s))
            .cloned()
            .collect()
    }

    /// Look up one traveller application.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError::NotFound`] for an unknown id.
    pub async fn traveller(&self, id: &TravellerId) -> Result<Traveller, RepoError> {
        self.travellers
            .read()
            .await
            .iter()
            .find(|t| &t.id == id)
            .cloned()
            .ok_or_else(|| RepoError::NotFound(format!("traveller {id}")))
    }

    /// Record a review decision. Approval clears any rejection reason.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError::NotFound`] for an unknown id.
    pub async fn set_traveller_status(
        &self,
        id: &TravellerId,
        status: TravellerStatus,
        rejection_reason: Option<String>,
    ) -> Result<Traveller, RepoError> {
        let mut travellers = self.travellers.write().await;
        let traveller = travellers
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("traveller {id}")))?;
        traveller.status = status;
        traveller.rejection_reason = rejection_reason;
        Ok(traveller.clone())
    }
}
