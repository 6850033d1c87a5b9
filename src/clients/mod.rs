//! Domain-specific clients wrapping the generic [`ResourceClient`].
//!
//! Each wrapper exposes the entity's operations as named methods, flattens
//! [`ActorError`] plumbing failures into the entity's own error type, and
//! unwraps action results back into concrete values. Callers never see the
//! request/response enums.
//!
//! [`ResourceClient`]: crate::framework::ResourceClient
//! [`ActorError`]: crate::framework::ActorError

mod account_client;
mod complaint_client;
mod dish_client;
mod order_client;

pub use account_client::AccountClient;
pub use complaint_client::ComplaintClient;
pub use dish_client::DishClient;
pub use order_client::OrderClient;
