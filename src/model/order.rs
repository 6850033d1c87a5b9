//! Orders: the state machine at the center of the system.

use crate::model::DeliveryBid;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order lifecycle states.
///
/// Normal flow is `pending -> preparing -> ready -> delivering -> delivered`;
/// `cancelled` is a manager-only escape hatch from any non-terminal state.
/// `ready -> delivering` only happens as a side effect of bid acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Delivering,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivering => "delivering",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(tag)
    }
}

/// One line of an order, with the dish price snapshotted at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub dish_id: String,
    pub quantity: u32,
    pub price: f64,
}

/// A cart line as submitted at checkout, before price snapshotting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemRequest {
    pub dish_id: String,
    pub quantity: u32,
}

/// A customer order, including its bid set.
///
/// `items` and their prices are immutable once created (audit history).
/// `total` is post-discount and grows by the delivery fee when a paid bid
/// is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub delivery_address: String,

    pub discount_applied: f64,
    /// Earned at checkout (every Nth VIP order); consumed at bid acceptance.
    pub free_delivery: bool,

    pub delivery_person_id: Option<String>,
    /// Accepted bid amount, recorded even when the fee is waived.
    pub delivery_bid: Option<f64>,
    /// Fee actually charged to the customer (0 when waived).
    pub delivery_fee: f64,

    /// Write-once: set by the single rating submission allowed per order.
    pub food_rating: Option<u32>,
    pub delivery_rating: Option<u32>,

    pub bids: Vec<DeliveryBid>,
    /// Monotonic counter backing per-order bid IDs.
    pub bid_seq: u64,
}

/// Payload for placing an order at checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer_id: String,
    pub items: Vec<OrderItemRequest>,
    pub delivery_address: String,
}
