//! Typed client for the Dish actor.

use crate::dish_actor::{DishAction, DishActionResult, DishError};
use crate::framework::{ActorError, ResourceClient};
use crate::model::{Dish, DishCreate, DishUpdate, NutritionalInfo};

/// Client handle for menu catalog operations.
#[derive(Clone)]
pub struct DishClient {
    inner: ResourceClient<Dish>,
}

impl DishClient {
    pub fn new(inner: ResourceClient<Dish>) -> Self {
        Self { inner }
    }

    fn lift(err: ActorError<DishError>) -> DishError {
        match err {
            ActorError::Entity(e) => e,
            ActorError::NotFound(id) => DishError::NotFound(id),
            other => DishError::Actor(other.to_string()),
        }
    }

    pub async fn add(&self, params: DishCreate) -> Result<String, DishError> {
        self.inner.create(params).await.map_err(Self::lift)
    }

    pub async fn get(&self, id: &str) -> Result<Option<Dish>, DishError> {
        self.inner.get(id.to_string()).await.map_err(Self::lift)
    }

    /// Like [`get`](Self::get), but absence is an error.
    pub async fn fetch(&self, id: &str) -> Result<Dish, DishError> {
        self.get(id)
            .await?
            .ok_or_else(|| DishError::NotFound(id.to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Dish>, DishError> {
        self.inner.list().await.map_err(Self::lift)
    }

    pub async fn update(&self, id: &str, update: DishUpdate) -> Result<Dish, DishError> {
        self.inner
            .update(id.to_string(), update)
            .await
            .map_err(Self::lift)
    }

    pub async fn remove(&self, id: &str) -> Result<(), DishError> {
        self.inner.delete(id.to_string()).await.map_err(Self::lift)
    }

    async fn act(&self, id: &str, action: DishAction) -> Result<DishActionResult, DishError> {
        self.inner
            .perform_action(id.to_string(), action)
            .await
            .map_err(Self::lift)
    }

    pub async fn record_ordered(&self, id: &str, quantity: u32) -> Result<Dish, DishError> {
        match self.act(id, DishAction::RecordOrdered { quantity }).await? {
            DishActionResult::RecordOrdered(dish) => Ok(dish),
            other => unreachable!("mismatched action result: {other:?}"),
        }
    }

    pub async fn record_rating(
        &self,
        id: &str,
        customer_id: &str,
        stars: u32,
        comment: &str,
    ) -> Result<Dish, DishError> {
        match self
            .act(
                id,
                DishAction::RecordRating {
                    customer_id: customer_id.to_string(),
                    stars,
                    comment: comment.to_string(),
                },
            )
            .await?
        {
            DishActionResult::RecordRating(dish) => Ok(dish),
            other => unreachable!("mismatched action result: {other:?}"),
        }
    }

    pub async fn set_availability(&self, id: &str, available: bool) -> Result<Dish, DishError> {
        match self.act(id, DishAction::SetAvailability(available)).await? {
            DishActionResult::SetAvailability(dish) => Ok(dish),
            other => unreachable!("mismatched action result: {other:?}"),
        }
    }

    pub async fn cache_nutrition(
        &self,
        id: &str,
        info: NutritionalInfo,
    ) -> Result<Dish, DishError> {
        match self.act(id, DishAction::CacheNutrition(info)).await? {
            DishActionResult::CacheNutrition(dish) => Ok(dish),
            other => unreachable!("mismatched action result: {other:?}"),
        }
    }

    /// Dishes currently on the menu.
    pub async fn menu(&self) -> Result<Vec<Dish>, DishError> {
        let mut dishes: Vec<Dish> = self
            .list()
            .await?
            .into_iter()
            .filter(|dish| dish.available)
            .collect();
        dishes.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(dishes)
    }

    /// Most-ordered available dishes, best first.
    pub async fn most_popular(&self, limit: usize) -> Result<Vec<Dish>, DishError> {
        let mut dishes = self.menu().await?;
        dishes.sort_by(|a, b| b.orders_count.cmp(&a.orders_count));
        dishes.truncate(limit);
        Ok(dishes)
    }

    /// Best-rated available dishes, best first. Unrated dishes sort last.
    pub async fn top_rated(&self, limit: usize) -> Result<Vec<Dish>, DishError> {
        let mut dishes = self.menu().await?;
        dishes.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        dishes.truncate(limit);
        Ok(dishes)
    }
}
