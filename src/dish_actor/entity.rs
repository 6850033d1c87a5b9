//! `ActorEntity` implementation for [`Dish`]: the menu catalog.

use crate::dish_actor::DishError;
use crate::framework::ActorEntity;
use crate::model::{Dish, DishCreate, DishReview, DishUpdate, NutritionalInfo};
use async_trait::async_trait;
use chrono::Utc;

/// Custom actions for Dish entities.
#[derive(Debug, Clone)]
pub enum DishAction {
    /// Bump the popularity counter by the ordered quantity.
    RecordOrdered { quantity: u32 },
    /// Append a review and recompute the mean rating from scratch.
    RecordRating {
        customer_id: String,
        stars: u32,
        comment: String,
    },
    /// Take the dish on or off the menu.
    SetAvailability(bool),
    /// Store an externally computed nutrition estimate.
    CacheNutrition(NutritionalInfo),
}

/// Results from DishActions - variants match 1:1 with DishAction.
#[derive(Debug, Clone)]
pub enum DishActionResult {
    RecordOrdered(Dish),
    RecordRating(Dish),
    SetAvailability(Dish),
    CacheNutrition(Dish),
}

#[async_trait]
impl ActorEntity for Dish {
    type Id = String;
    type CreateParams = DishCreate;
    type UpdateParams = DishUpdate;
    type Action = DishAction;
    type ActionResult = DishActionResult;
    type Context = ();
    type Error = DishError;

    fn from_create_params(id: String, params: DishCreate) -> Result<Self, DishError> {
        if params.name.trim().is_empty() {
            return Err(DishError::Validation("name must not be empty".into()));
        }
        if params.price <= 0.0 {
            return Err(DishError::Validation("price must be positive".into()));
        }
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            price: params.price,
            chef_id: params.chef_id,
            category: params.category,
            available: true,
            vip_only: params.vip_only,
            flavor_tags: params.flavor_tags,
            created_at: Utc::now(),
            rating: 0.0,
            ratings_count: 0,
            reviews: Vec::new(),
            orders_count: 0,
            nutritional_info: None,
        })
    }

    async fn on_update(&mut self, update: DishUpdate, _ctx: &()) -> Result<(), DishError> {
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            if price <= 0.0 {
                return Err(DishError::Validation("price must be positive".into()));
            }
            // Existing orders keep their snapshotted price.
            self.price = price;
        }
        if let Some(available) = update.available {
            self.available = available;
        }
        if let Some(vip_only) = update.vip_only {
            self.vip_only = vip_only;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: DishAction,
        _ctx: &(),
    ) -> Result<DishActionResult, DishError> {
        match action {
            DishAction::RecordOrdered { quantity } => {
                self.orders_count += quantity;
                Ok(DishActionResult::RecordOrdered(self.clone()))
            }
            DishAction::RecordRating {
                customer_id,
                stars,
                comment,
            } => {
                if !(1..=5).contains(&stars) {
                    return Err(DishError::Validation(
                        "rating must be between 1 and 5".into(),
                    ));
                }
                self.reviews.push(DishReview {
                    customer_id,
                    stars,
                    comment,
                });
                // True arithmetic mean over all reviews, never a running
                // average that could drift.
                self.ratings_count = self.reviews.len() as u32;
                self.rating = self.reviews.iter().map(|r| r.stars).sum::<u32>() as f64
                    / self.reviews.len() as f64;
                Ok(DishActionResult::RecordRating(self.clone()))
            }
            DishAction::SetAvailability(available) => {
                self.available = available;
                Ok(DishActionResult::SetAvailability(self.clone()))
            }
            DishAction::CacheNutrition(info) => {
                self.nutritional_info = Some(info);
                Ok(DishActionResult::CacheNutrition(self.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DishCategory, FlavorTag};

    fn dish() -> Dish {
        Dish::from_create_params(
            "dish_1".to_string(),
            DishCreate {
                name: "Pad Thai".into(),
                description: "Rice noodles".into(),
                price: 12.5,
                chef_id: "chef_1".into(),
                category: DishCategory::Main,
                vip_only: false,
                flavor_tags: vec![FlavorTag::Savory, FlavorTag::Tangy],
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn rating_mean_recomputed_from_reviews() {
        let mut dish = dish();
        for stars in [5, 2] {
            dish.handle_action(
                DishAction::RecordRating {
                    customer_id: "c".into(),
                    stars,
                    comment: String::new(),
                },
                &(),
            )
            .await
            .unwrap();
        }
        assert_eq!(dish.ratings_count, 2);
        assert!((dish.rating - 3.5).abs() < 1e-9);
    }

    #[tokio::test]
    async fn out_of_range_rating_rejected() {
        let mut dish = dish();
        let err = dish
            .handle_action(
                DishAction::RecordRating {
                    customer_id: "c".into(),
                    stars: 6,
                    comment: String::new(),
                },
                &(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DishError::Validation(_)));
        assert!(dish.reviews.is_empty());
    }

    #[test]
    fn non_positive_price_rejected() {
        let result = Dish::from_create_params(
            "dish_2".to_string(),
            DishCreate {
                name: "Free Lunch".into(),
                description: String::new(),
                price: 0.0,
                chef_id: "chef_1".into(),
                category: DishCategory::Main,
                vip_only: false,
                flavor_tags: vec![],
            },
        );
        assert!(matches!(result, Err(DishError::Validation(_))));
    }
}
