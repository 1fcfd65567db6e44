//! Home page handler.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::catalog::{Category, Product};
use crate::state::AppState;

/// A hero-carousel slide.
#[derive(Debug, Clone, Serialize)]
pub struct HeroSlide {
    pub title: String,
    pub subtitle: String,
    pub cta_label: String,
    pub cta_href: String,
    pub image: String,
}

/// Home page payload.
#[derive(Debug, Serialize)]
pub struct HomeView {
    pub hero_slides: Vec<HeroSlide>,
    pub featured: Vec<Product>,
    pub categories: Vec<Category>,
}

fn slide(title: &str, subtitle: &str, cta_label: &str, cta_href: &str, image: &str) -> HeroSlide {
    HeroSlide {
        title: title.to_owned(),
        subtitle: subtitle.to_owned(),
        cta_label: cta_label.to_owned(),
        cta_href: cta_href.to_owned(),
        image: image.to_owned(),
    }
}

/// Sample hero slides.
fn hero_slides() -> Vec<HeroSlide> {
    vec![
        slide(
            "Summer Collection",
            "Discover the season's freshest styles",
            "Shop Now",
            "/products?categories=clothing",
            "hero-summer",
        ),
        slide(
            "Tech Deals",
            "Save on headphones, watches, and speakers",
            "Browse Electronics",
            "/products?categories=electronics",
            "hero-tech",
        ),
        slide(
            "Free Shipping Over $100",
            "Fill your cart and ship it on us",
            "Start Shopping",
            "/products",
            "hero-shipping",
        ),
    ]
}

/// Home page: hero carousel plus featured products.
pub async fn home(State(state): State<AppState>) -> Json<HomeView> {
    Json(HomeView {
        hero_slides: hero_slides(),
        featured: state.catalog().featured(4),
        categories: state.catalog().categories().to_vec(),
    })
}
