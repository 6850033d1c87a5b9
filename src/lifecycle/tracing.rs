//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the whole actor
//! system with the `tracing` crate.
//!
//! The compact format hides module paths (`with_target(false)`); actor log
//! lines carry an `entity_type` field instead, which keeps output short
//! while staying filterable.
//!
//! Levels are driven by `RUST_LOG`:
//!
//! ```bash
//! # Lifecycle events only (actor start/stop, creates, role transitions)
//! RUST_LOG=info cargo run
//!
//! # Every request with full payloads
//! RUST_LOG=debug cargo run
//!
//! # Filter to one layer
//! RUST_LOG=bistro::framework=debug cargo run
//! ```
//!
//! A typical order placement at `debug` shows the cross-actor flow:
//!
//! ```text
//! DEBUG Create params=OrderCreate { customer_id: "account_1", .. }
//! DEBUG Get account_1 found=true
//! DEBUG Get dish_1 found=true
//! DEBUG Action account_1 action=ChargeOrder { subtotal: 25.0 }
//! INFO  Action ok account_1
//! INFO  Order placed order=order_1 customer=account_1 total=25.0
//! INFO  Created order_1 size=1
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Module paths are noise; entity_type carries the context
        .compact()
        .init();
}
