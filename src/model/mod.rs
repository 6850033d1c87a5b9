//! Pure data structures implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod account;
pub mod bid;
pub mod complaint;
pub mod dish;
pub mod order;

pub use account::*;
pub use bid::*;
pub use complaint::*;
pub use dish::*;
pub use order::*;
