//! Delivery bids: a courier's proposed price to fulfill a ready order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bid transitions `pending -> {accepted, rejected}` exactly once; both
/// outcomes are terminal. Resubmitting a bid for the same order updates the
/// amount and resets the status to pending instead of creating a duplicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BidStatus {
    Pending,
    Accepted,
    Rejected,
}

/// One courier's bid on one order. Bids are owned by the order they target,
/// so bid resolution is linearized with the order's status transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryBid {
    pub id: String,
    pub order_id: String,
    pub delivery_person_id: String,
    pub bid_amount: f64,
    pub status: BidStatus,
    pub created_at: DateTime<Utc>,
    /// Required when the manager accepts a bid above the current minimum.
    pub manager_memo: Option<String>,
}
