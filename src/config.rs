//! Tunable business-policy knobs.
//!
//! Everything threshold-like lives here so the actors stay free of magic
//! numbers. The struct is serde-deserializable so an embedding application
//! can load it from its own config source; [`Default`] gives the production
//! values.

use serde::{Deserialize, Serialize};

/// Policy constants governing VIP status, warnings, and employee performance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RestaurantPolicy {
    /// Total spending that promotes a customer to VIP.
    pub vip_spending_threshold: f64,
    /// Order count that promotes a complaint-free customer to VIP.
    pub vip_orders_without_complaints: u32,
    /// Percentage discount applied to VIP cart subtotals.
    pub vip_discount_percent: f64,
    /// A VIP earns one free delivery every this-many orders.
    pub vip_free_delivery_ratio: u32,

    /// Warnings at which a non-VIP customer is deregistered and blacklisted.
    pub max_warnings_before_deregistration: u32,
    /// Warnings at which a VIP is downgraded to customer (warnings reset).
    pub max_warnings_for_vip_downgrade: u32,

    /// A positive employee rating below this triggers demotion.
    pub low_rating_threshold: f64,
    /// An employee rating at or above this triggers a bonus.
    pub high_rating_threshold: f64,
    /// Complaint count that triggers demotion.
    pub complaints_for_demotion: u32,
    /// Compliment count that triggers a bonus.
    pub compliments_for_bonus: u32,
    /// Demotions after which an employee is terminated.
    pub demotions_before_firing: u32,
}

impl Default for RestaurantPolicy {
    fn default() -> Self {
        Self {
            vip_spending_threshold: 100.0,
            vip_orders_without_complaints: 3,
            vip_discount_percent: 5.0,
            vip_free_delivery_ratio: 3,
            max_warnings_before_deregistration: 3,
            max_warnings_for_vip_downgrade: 2,
            low_rating_threshold: 2.0,
            high_rating_threshold: 4.0,
            complaints_for_demotion: 3,
            compliments_for_bonus: 3,
            demotions_before_firing: 2,
        }
    }
}
