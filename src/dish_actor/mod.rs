//! Dish-specific resource logic and entity implementation.

pub mod entity;
pub mod error;

pub use entity::{DishAction, DishActionResult};
pub use error::*;

use crate::clients::DishClient;
use crate::framework::ResourceActor;
use crate::model::Dish;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new Dish actor and its client.
pub fn new() -> (ResourceActor<Dish>, DishClient) {
    let dish_id_counter = Arc::new(AtomicU64::new(1));
    let next_dish_id = move || {
        let id = dish_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("dish_{}", id)
    };

    let (actor, generic_client) = ResourceActor::new(32, next_dish_id);
    let client = DishClient::new(generic_client);

    (actor, client)
}
