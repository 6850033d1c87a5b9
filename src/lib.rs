//! # Bistro
//!
//! > **An actor-based restaurant ordering core.**
//!
//! Order lifecycle, a delivery-bidding marketplace, and a reputation engine,
//! built as a set of resource-oriented actors on Tokio. Each entity
//! collection (accounts, dishes, orders, complaints) is owned by one actor
//! that processes messages sequentially, so every business rule runs as an
//! atomic check-then-mutate step with no locks.
//!
//! ## Design Notes
//!
//! ### 1. One Actor per Collection
//! The generic [`framework::ResourceActor`] provides CRUD plus typed custom
//! actions for any [`framework::ActorEntity`]. Domain rules live in the
//! entity implementations; the message loop was written once.
//!
//! ### 2. Linearized Order State
//! Delivery bids are stored inside the order they target. Status
//! transitions and bid resolution for one order therefore flow through a
//! single message queue: two managers cannot accept different bids, and no
//! transition is computed from a stale status read.
//!
//! ### 3. Atomic Reputation Rules
//! Balance debits, warnings, VIP promotion and demotion, and employee
//! performance checks all run inside single Account actor messages. The
//! deliberate quirk that a failed debit still costs a warning is preserved
//! and documented where it happens.
//!
//! ### 4. Authoritative Snapshots
//! Every mutating operation returns the post-mutation entity. Callers
//! (session caches especially) refresh their copies from the return value
//! instead of retaining stale references.
//!
//! ## Module Tour
//!
//! - [`framework`]: the generic actor engine and mock test utilities.
//! - [`model`]: pure data types for accounts, dishes, orders, bids, and
//!   complaints, including the role-transition graph.
//! - [`account_actor`], [`dish_actor`], [`order_actor`],
//!   [`complaint_actor`]: the domain entities behind each actor.
//! - [`clients`]: typed wrappers hiding the message passing.
//! - [`recommend`]: flavor-match scoring over the live menu.
//! - [`config`]: the policy constants (thresholds, discounts, ratios).
//! - [`lifecycle`]: system startup, wiring, tracing, and shutdown.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod account_actor;
pub mod clients;
pub mod complaint_actor;
pub mod config;
pub mod dish_actor;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod recommend;
