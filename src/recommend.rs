//! Flavor-based dish recommendations.
//!
//! Preferences are derived from what the customer actually ordered, not from
//! the rating-driven flavor profile: the per-tag score is the percentage of
//! the customer's tagged order history carrying that tag. A candidate dish
//! scores the sum of the customer's percentages for its tags, plus a flat
//! bonus for chefs the customer has ordered from before (+10) and for highly
//! rated dishes (+5 at rating 4.0 or above). The 100-point cap is applied
//! after the bonuses.

use std::collections::{HashMap, HashSet};

use crate::clients::{DishClient, OrderClient};
use crate::model::{Dish, FlavorTag, OrderStatus};
use crate::order_actor::OrderError;
use tracing::debug;

const SAME_CHEF_BONUS: f64 = 10.0;
const HIGH_RATING_BONUS: f64 = 5.0;
const HIGH_RATING_THRESHOLD: f64 = 4.0;
const SCORE_CAP: f64 = 100.0;

/// A menu dish with its match score for one customer, in [0, 100].
#[derive(Debug, Clone)]
pub struct ScoredDish {
    pub dish: Dish,
    pub score: f64,
}

/// Per-tag percentage frequency over the tagged portion of an order history.
///
/// Each history entry counts once per tag it carries; dishes without tags do
/// not dilute the percentages. An empty (or untagged) history yields an
/// empty map, scoring every candidate at bonuses only.
pub fn flavor_preferences(history: &[Dish]) -> HashMap<FlavorTag, f64> {
    let tagged: Vec<&Dish> = history
        .iter()
        .filter(|dish| !dish.flavor_tags.is_empty())
        .collect();
    if tagged.is_empty() {
        return HashMap::new();
    }

    let mut counts: HashMap<FlavorTag, u32> = HashMap::new();
    for dish in &tagged {
        for &tag in &dish.flavor_tags {
            *counts.entry(tag).or_insert(0) += 1;
        }
    }

    let total = tagged.len() as f64;
    counts
        .into_iter()
        .map(|(tag, count)| (tag, f64::from(count) / total * 100.0))
        .collect()
}

/// Match score for one candidate dish: tag preferences summed, bonuses
/// added, then capped at 100.
pub fn match_score(
    dish: &Dish,
    preferences: &HashMap<FlavorTag, f64>,
    known_chefs: &HashSet<String>,
) -> f64 {
    let mut score: f64 = dish
        .flavor_tags
        .iter()
        .map(|tag| preferences.get(tag).copied().unwrap_or(0.0))
        .sum();

    if known_chefs.contains(&dish.chef_id) {
        score += SAME_CHEF_BONUS;
    }
    if dish.rating >= HIGH_RATING_THRESHOLD {
        score += HIGH_RATING_BONUS;
    }

    score.min(SCORE_CAP)
}

/// Scores the live menu against one customer's order history.
#[derive(Clone)]
pub struct Recommender {
    orders: OrderClient,
    dishes: DishClient,
}

impl Recommender {
    pub fn new(orders: OrderClient, dishes: DishClient) -> Self {
        Self { orders, dishes }
    }

    /// The `limit` best-matching available dishes for a customer, best
    /// first. Cancelled orders do not count toward history.
    pub async fn recommend(
        &self,
        customer_id: &str,
        limit: usize,
    ) -> Result<Vec<ScoredDish>, OrderError> {
        let mut history = Vec::new();
        let mut known_chefs = HashSet::new();
        for order in self.orders.for_customer(customer_id).await? {
            if order.status == OrderStatus::Cancelled {
                continue;
            }
            for item in &order.items {
                let dish = self.dishes.fetch(&item.dish_id).await?;
                known_chefs.insert(dish.chef_id.clone());
                history.push(dish);
            }
        }

        let preferences = flavor_preferences(&history);
        debug!(customer = %customer_id, history = history.len(), ?preferences, "Scoring menu");

        let mut scored: Vec<ScoredDish> = self
            .dishes
            .menu()
            .await?
            .into_iter()
            .map(|dish| {
                let score = match_score(&dish, &preferences, &known_chefs);
                ScoredDish { dish, score }
            })
            .collect();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(limit);
        Ok(scored)
    }
}
