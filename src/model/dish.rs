//! Menu catalog entities.

use crate::model::FlavorTag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Menu sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DishCategory {
    Appetizers,
    Main,
    Desserts,
    Beverages,
}

/// Cached nutrition estimate for a dish. The estimator is an external
/// collaborator; the catalog only stores its output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionalInfo {
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub allergens: Vec<String>,
    pub dietary_tags: Vec<String>,
}

/// One customer's review of a dish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishReview {
    pub customer_id: String,
    pub stars: u32,
    pub comment: String,
}

/// A menu item, owned by the chef who created it.
///
/// `price` is whatever the chef currently charges; orders snapshot it at
/// checkout, so later edits never rewrite order history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub chef_id: String,
    pub category: DishCategory,
    pub available: bool,
    pub vip_only: bool,
    pub flavor_tags: Vec<FlavorTag>,
    pub created_at: DateTime<Utc>,

    /// Mean of all review stars; recomputed from `reviews` on every rating.
    pub rating: f64,
    pub ratings_count: u32,
    pub reviews: Vec<DishReview>,
    /// Total quantity ordered across all orders.
    pub orders_count: u32,

    pub nutritional_info: Option<NutritionalInfo>,
}

/// Payload for a chef adding a dish to the menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub chef_id: String,
    pub category: DishCategory,
    pub vip_only: bool,
    pub flavor_tags: Vec<FlavorTag>,
}

/// Payload for editing a dish.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DishUpdate {
    pub description: Option<String>,
    pub price: Option<f64>,
    pub available: Option<bool>,
    pub vip_only: Option<bool>,
}
