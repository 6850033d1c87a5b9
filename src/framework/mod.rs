//! Generic actor framework for resource management.
//!
//! Provides the building blocks for type-safe actor systems that manage
//! resource entities with CRUD operations, a collection `List`, and custom
//! actions.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - generic actor that owns one entity collection
//! - [`ResourceClient`] - type-safe handle for talking to an actor
//! - [`ActorError`] - channel-level errors wrapping the entity's typed error
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

pub use core::*;
pub use mock::MockClient;
