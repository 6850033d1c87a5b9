//! Orchestration layer: starting, wiring, and stopping the actor set.

mod system;
mod tracing;

pub use system::RestaurantSystem;
pub use tracing::setup_tracing;
