//! Sample product catalog.
//!
//! The demo has no product database: the catalog is a hard-coded array,
//! and browsing is filtering/sorting/paginating over it in memory.

pub mod orders;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shopease_core::{CurrencyCode, Price, ProductId};

/// Products shown per listing page.
pub const PRODUCTS_PER_PAGE: usize = 8;

/// A catalog product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: String,
    pub rating: Decimal,
    pub image: String,
    pub description: String,
    pub is_new: bool,
    /// Percent off, 0 for none.
    pub discount: u8,
}

/// A browsable category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Listing sort orders offered by the products page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Seeded order; the sample data is already ranked by popularity.
    #[default]
    Popularity,
    PriceLowHigh,
    PriceHighLow,
    Rating,
}

/// A normalized listing request; doubles as the listing-cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ListingQuery {
    /// Category slugs; empty means all categories.
    pub categories: Vec<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub sort: SortOrder,
    /// 1-based page number.
    pub page: u32,
}

/// One page of listing results.
#[derive(Debug, Clone, Serialize)]
pub struct ListingPage {
    pub products: Vec<Product>,
    pub total: usize,
    pub page: u32,
    pub per_page: usize,
    pub total_pages: u32,
}

/// Turn a category display name into its listing slug
/// (`Home & Kitchen` -> `home-kitchen`).
#[must_use]
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .filter(|token| *token != "&")
        .collect::<Vec<_>>()
        .join("-")
}

/// The product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    /// The demo catalog: 12 sample products across 5 categories.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            products: sample_products(),
            categories: sample_categories(),
        }
    }

    /// All products in popularity order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All browsable categories.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Products in the same category, excluding the product itself.
    #[must_use]
    pub fn related(&self, product: &Product, limit: usize) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Highest-rated products, for the home page.
    #[must_use]
    pub fn featured(&self, limit: usize) -> Vec<Product> {
        let mut ranked: Vec<Product> = self.products.clone();
        ranked.sort_by(|a, b| b.rating.cmp(&a.rating));
        ranked.truncate(limit);
        ranked
    }

    /// Filter, sort, and paginate the catalog.
    #[must_use]
    pub fn listing(&self, query: &ListingQuery) -> ListingPage {
        let mut matches: Vec<Product> = self
            .products
            .iter()
            .filter(|p| {
                query.min_price.is_none_or(|min| p.price.amount >= min)
                    && query.max_price.is_none_or(|max| p.price.amount <= max)
            })
            .filter(|p| {
                query.categories.is_empty()
                    || query.categories.iter().any(|c| c == &slugify(&p.category))
            })
            .cloned()
            .collect();

        match query.sort {
            SortOrder::Popularity => {}
            SortOrder::PriceLowHigh => {
                matches.sort_by(|a, b| a.price.amount.cmp(&b.price.amount));
            }
            SortOrder::PriceHighLow => {
                matches.sort_by(|a, b| b.price.amount.cmp(&a.price.amount));
            }
            SortOrder::Rating => matches.sort_by(|a, b| b.rating.cmp(&a.rating)),
        }

        let total = matches.len();
        let total_pages = total.div_ceil(PRODUCTS_PER_PAGE).max(1) as u32;
        let page = query.page.clamp(1, total_pages);
        let start = (page as usize - 1) * PRODUCTS_PER_PAGE;
        let products: Vec<Product> = matches
            .into_iter()
            .skip(start)
            .take(PRODUCTS_PER_PAGE)
            .collect();

        ListingPage {
            products,
            total,
            page,
            per_page: PRODUCTS_PER_PAGE,
            total_pages,
        }
    }
}

fn product(
    id: &str,
    name: &str,
    cents: i64,
    category: &str,
    rating_tenths: i64,
    image: &str,
    description: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::from_cents(cents, CurrencyCode::USD),
        category: category.to_owned(),
        rating: Decimal::new(rating_tenths, 1),
        image: image.to_owned(),
        description: description.to_owned(),
        is_new: false,
        discount: 0,
    }
}

/// Sample product data, in popularity order.
fn sample_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Wireless Headphones",
            9999,
            "Electronics",
            45,
            "headphones",
            "Over-ear wireless headphones with noise isolation and 30-hour battery life.",
        ),
        product(
            "2",
            "Cotton T-Shirt",
            2499,
            "Clothing",
            42,
            "tshirt",
            "Classic-fit crew neck in 100% combed cotton.",
        ),
        product(
            "3",
            "Smart Watch",
            14999,
            "Electronics",
            48,
            "watch",
            "Fitness tracking, notifications, and a week of battery on a single charge.",
        ),
        product(
            "4",
            "Running Shoes",
            7999,
            "Sports",
            43,
            "shoes",
            "Lightweight trainers with responsive cushioning for daily runs.",
        ),
        product(
            "5",
            "Bluetooth Speaker",
            5999,
            "Electronics",
            41,
            "speaker",
            "Portable speaker with 360-degree sound and 12-hour playtime.",
        ),
        product(
            "6",
            "Denim Jacket",
            8999,
            "Clothing",
            44,
            "jacket",
            "Medium-wash denim jacket with a relaxed fit.",
        ),
        product(
            "7",
            "Coffee Maker",
            12999,
            "Home & Kitchen",
            47,
            "coffee",
            "12-cup programmable drip coffee maker with thermal carafe.",
        ),
        product(
            "8",
            "Yoga Mat",
            3999,
            "Sports",
            40,
            "yoga",
            "Non-slip 6mm mat with alignment guides.",
        ),
        product(
            "9",
            "Desk Lamp",
            4999,
            "Home & Kitchen",
            42,
            "lamp",
            "Adjustable LED desk lamp with three color temperatures.",
        ),
        product(
            "10",
            "Backpack",
            6999,
            "Accessories",
            45,
            "backpack",
            "Water-resistant 25L backpack with padded laptop sleeve.",
        ),
        product(
            "11",
            "Sunglasses",
            2999,
            "Accessories",
            41,
            "sunglasses",
            "Polarized lenses with UV400 protection.",
        ),
        product(
            "12",
            "Water Bottle",
            1999,
            "Sports",
            43,
            "bottle",
            "Insulated stainless bottle that keeps drinks cold for 24 hours.",
        ),
    ]
}

/// Sample browsable categories.
fn sample_categories() -> Vec<Category> {
    [
        "Electronics",
        "Clothing",
        "Home & Kitchen",
        "Sports",
        "Accessories",
    ]
    .into_iter()
    .map(|name| Category {
        id: slugify(name),
        name: name.to_owned(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Electronics"), "electronics");
        assert_eq!(slugify("Home & Kitchen"), "home-kitchen");
    }

    #[test]
    fn test_demo_catalog_shape() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.products().len(), 12);
        assert_eq!(catalog.categories().len(), 5);
        assert!(catalog.get(&ProductId::new("7")).is_some());
        assert!(catalog.get(&ProductId::new("99")).is_none());
    }

    #[test]
    fn test_listing_defaults_to_first_page_of_eight() {
        let catalog = Catalog::demo();
        let page = catalog.listing(&ListingQuery {
            page: 1,
            ..ListingQuery::default()
        });

        assert_eq!(page.products.len(), 8);
        assert_eq!(page.total, 12);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_listing_category_filter_uses_slugs() {
        let catalog = Catalog::demo();
        let page = catalog.listing(&ListingQuery {
            categories: vec!["home-kitchen".to_owned()],
            page: 1,
            ..ListingQuery::default()
        });

        assert_eq!(page.total, 2);
        assert!(page.products.iter().all(|p| p.category == "Home & Kitchen"));
    }

    #[test]
    fn test_listing_price_range_is_inclusive() {
        let catalog = Catalog::demo();
        let page = catalog.listing(&ListingQuery {
            min_price: Some(Decimal::new(2499, 2)),
            max_price: Some(Decimal::new(3999, 2)),
            page: 1,
            ..ListingQuery::default()
        });

        let names: Vec<_> = page.products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Cotton T-Shirt", "Yoga Mat", "Sunglasses"]);
    }

    #[test]
    fn test_listing_sort_orders() {
        let catalog = Catalog::demo();

        let low_high = catalog.listing(&ListingQuery {
            sort: SortOrder::PriceLowHigh,
            page: 1,
            ..ListingQuery::default()
        });
        let first = low_high.products.first().map(|p| p.name.clone());
        assert_eq!(first.as_deref(), Some("Water Bottle"));

        let by_rating = catalog.listing(&ListingQuery {
            sort: SortOrder::Rating,
            page: 1,
            ..ListingQuery::default()
        });
        let first = by_rating.products.first().map(|p| p.name.clone());
        assert_eq!(first.as_deref(), Some("Smart Watch"));
    }

    #[test]
    fn test_listing_page_out_of_range_clamps() {
        let catalog = Catalog::demo();
        let page = catalog.listing(&ListingQuery {
            page: 99,
            ..ListingQuery::default()
        });

        assert_eq!(page.page, 2);
        assert_eq!(page.products.len(), 4);
    }

    #[test]
    fn test_related_shares_category_and_excludes_self() {
        let catalog = Catalog::demo();
        let watch = catalog.get(&ProductId::new("3")).cloned().expect("seeded");
        let related = catalog.related(&watch, 4);

        assert!(!related.is_empty());
        assert!(related.iter().all(|p| p.category == "Electronics"));
        assert!(related.iter().all(|p| p.id != watch.id));
    }
}
