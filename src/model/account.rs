//! The unified account entity: customers, VIPs, employees, and managers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The closed set of roles an account can hold.
///
/// Serialized as the lowercase tag used by existing stored records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Visitor,
    Customer,
    Vip,
    Chef,
    Delivery,
    Manager,
}

impl Role {
    /// Customer-tier roles: subject to warnings, discounts, promotion.
    pub fn is_customer_tier(self) -> bool {
        matches!(self, Role::Customer | Role::Vip)
    }

    /// Employee roles: subject to demotion/bonus performance checks.
    pub fn is_employee(self) -> bool {
        matches!(self, Role::Chef | Role::Delivery)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Role::Visitor => "visitor",
            Role::Customer => "customer",
            Role::Vip => "vip",
            Role::Chef => "chef",
            Role::Delivery => "delivery",
            Role::Manager => "manager",
        };
        f.write_str(tag)
    }
}

/// The complete role-transition graph.
///
/// Every mutation site goes through [`Account::transition_role`], which
/// consults this predicate; there are no inline role reassignments anywhere
/// else in the crate.
pub fn role_transition_allowed(from: Role, to: Role) -> bool {
    use Role::*;
    matches!(
        (from, to),
        (Visitor, Customer)     // registration approved
            | (Customer, Vip)   // promotion
            | (Vip, Customer)   // downgrade
            | (Customer, Visitor) // deregistration
            | (Chef, Customer)  // termination
            | (Delivery, Customer)
            | (Customer, Chef)  // hiring
            | (Customer, Delivery)
    )
}

/// The four fixed taste categories used for recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlavorTag {
    Spicy,
    Sweet,
    Savory,
    Tangy,
}

impl FlavorTag {
    pub const ALL: [FlavorTag; 4] = [
        FlavorTag::Spicy,
        FlavorTag::Sweet,
        FlavorTag::Savory,
        FlavorTag::Tangy,
    ];
}

/// Per-account affinity scores across the four taste categories, each in [0, 10].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlavorProfile {
    pub spicy: f64,
    pub sweet: f64,
    pub savory: f64,
    pub tangy: f64,
}

impl FlavorProfile {
    pub fn get(&self, tag: FlavorTag) -> f64 {
        match tag {
            FlavorTag::Spicy => self.spicy,
            FlavorTag::Sweet => self.sweet,
            FlavorTag::Savory => self.savory,
            FlavorTag::Tangy => self.tangy,
        }
    }

    fn get_mut(&mut self, tag: FlavorTag) -> &mut f64 {
        match tag {
            FlavorTag::Spicy => &mut self.spicy,
            FlavorTag::Sweet => &mut self.sweet,
            FlavorTag::Savory => &mut self.savory,
            FlavorTag::Tangy => &mut self.tangy,
        }
    }

    /// Nudge the profile after a food rating: each tagged flavor moves by
    /// `(rating - 3) * 0.5`, clamped to [0, 10]. A 5-star rating pulls the
    /// tags up, a 1-star rating pushes them down.
    pub fn nudge(&mut self, tags: &[FlavorTag], stars: u32) {
        let delta = (stars as f64 - 3.0) * 0.5;
        for &tag in tags {
            let slot = self.get_mut(tag);
            *slot = (*slot + delta).clamp(0.0, 10.0);
        }
    }
}

/// A registered account: identity, ledger, and reputation counters.
///
/// One struct covers every role; employee fields (salary, demotions) are
/// zero for customers and vice versa, matching the stored-record layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    /// Set by manager approval; customer-tier accounts cannot order before it.
    pub approved: bool,
    pub blacklisted: bool,
    pub closure_requested: bool,

    // Ledger
    pub balance: f64,
    pub total_spent: f64,
    pub orders_count: u32,

    // Reputation
    pub warnings: u32,
    pub complaints_count: u32,
    pub compliments: u32,
    /// Mean of `rating_history`, kept for stored-record compatibility.
    pub rating: f64,
    pub ratings_count: u32,
    /// Every individual rating ever received, so the mean is recomputed
    /// rather than incrementally drifted.
    pub rating_history: Vec<u32>,

    // Employee
    pub salary: f64,
    pub demotions: u32,
    pub bonuses: u32,
    pub deliveries_completed: u32,

    // VIP
    pub vip_since: Option<DateTime<Utc>>,
    pub free_deliveries_earned: u32,
    pub free_deliveries_used: u32,

    pub flavor_profile: FlavorProfile,
}

/// Payload for registering a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountCreate {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub balance: f64,
    pub salary: f64,
}

/// Payload for updating account contact/payroll details.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountUpdate {
    pub email: Option<String>,
    pub salary: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_graph_permits_lifecycle_edges() {
        assert!(role_transition_allowed(Role::Customer, Role::Vip));
        assert!(role_transition_allowed(Role::Vip, Role::Customer));
        assert!(role_transition_allowed(Role::Customer, Role::Visitor));
        assert!(role_transition_allowed(Role::Chef, Role::Customer));
        assert!(role_transition_allowed(Role::Delivery, Role::Customer));
        assert!(role_transition_allowed(Role::Visitor, Role::Customer));
    }

    #[test]
    fn transition_graph_rejects_shortcuts() {
        assert!(!role_transition_allowed(Role::Visitor, Role::Vip));
        assert!(!role_transition_allowed(Role::Vip, Role::Chef));
        assert!(!role_transition_allowed(Role::Customer, Role::Manager));
        assert!(!role_transition_allowed(Role::Manager, Role::Customer));
        assert!(!role_transition_allowed(Role::Chef, Role::Delivery));
    }

    #[test]
    fn flavor_profile_nudge_clamps() {
        let mut profile = FlavorProfile::default();
        // 1-star rating cannot push below zero.
        profile.nudge(&[FlavorTag::Sweet], 1);
        assert_eq!(profile.sweet, 0.0);

        // 5-star ratings add +1.0 per rating and cap at 10.
        for _ in 0..15 {
            profile.nudge(&[FlavorTag::Sweet], 5);
        }
        assert_eq!(profile.sweet, 10.0);

        // 3 stars is neutral.
        profile.nudge(&[FlavorTag::Spicy], 3);
        assert_eq!(profile.spicy, 0.0);
    }
}
