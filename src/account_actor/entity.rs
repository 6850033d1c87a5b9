//! `ActorEntity` implementation for [`Account`]: the ledger and the
//! reputation engine.
//!
//! Every state rule that touches money, warnings, or role lives here, inside
//! single actor messages, so each check-then-mutate sequence is atomic with
//! respect to the account. Mutations made before a returned error (the
//! insufficient-funds warning) deliberately persist.

use std::sync::Arc;

use crate::account_actor::AccountError;
use crate::config::RestaurantPolicy;
use crate::framework::ActorEntity;
use crate::model::{
    role_transition_allowed, Account, AccountCreate, AccountUpdate, ComplaintKind, FlavorProfile,
    FlavorTag, Role,
};
use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

/// Custom actions for Account entities.
#[derive(Debug, Clone)]
pub enum AccountAction {
    /// Credit the balance ledger.
    Deposit { amount: f64 },
    /// Manager approval of a pending registration.
    Approve,
    /// Checkout: apply VIP discount, debit the balance, bump spend/order
    /// counters, evaluate VIP promotion and free-delivery entitlement.
    ChargeOrder { subtotal: f64 },
    /// Debit the delivery fee after a winning bid.
    ChargeDeliveryFee { amount: f64 },
    /// Consume one earned free-delivery credit.
    UseFreeDelivery,
    /// Issue a warning and run the downgrade/deregistration check.
    AddWarning,
    /// Apply a filed complaint/compliment at the given weight.
    ApplyFeedback { kind: ComplaintKind, weight: u32 },
    /// Undo a previously applied filing (complaint overruled).
    ReverseFeedback { kind: ComplaintKind, weight: u32 },
    /// Record an individual courier rating and recompute the mean.
    RecordDeliveryRating { stars: u32 },
    /// Bump the courier's completed-delivery counter.
    RecordDelivery,
    /// Nudge the flavor profile after a food rating.
    AdjustFlavorProfile { tags: Vec<FlavorTag>, stars: u32 },
    /// Flag the account for closure; actual removal is a manager decision.
    RequestClosure,
}

/// Results from AccountActions - variants match 1:1 with AccountAction.
///
/// Every mutation returns the authoritative post-mutation [`Account`] so
/// callers (session caches included) can refresh their copies instead of
/// retaining stale references.
#[derive(Debug, Clone)]
pub enum AccountActionResult {
    Deposit(Account),
    Approve(Account),
    ChargeOrder(OrderCharge),
    ChargeDeliveryFee(Account),
    UseFreeDelivery(Account),
    AddWarning(Account),
    ApplyFeedback(Account),
    ReverseFeedback(Account),
    RecordDeliveryRating(Account),
    RecordDelivery(Account),
    AdjustFlavorProfile(Account),
    RequestClosure(Account),
}

/// Outcome of a successful [`AccountAction::ChargeOrder`].
#[derive(Debug, Clone)]
pub struct OrderCharge {
    pub discount: f64,
    /// Post-discount amount actually debited.
    pub total: f64,
    /// Whether this order earned (and carries) a free-delivery credit.
    pub free_delivery: bool,
    pub account: Account,
}

#[async_trait]
impl ActorEntity for Account {
    type Id = String;
    type CreateParams = AccountCreate;
    type UpdateParams = AccountUpdate;
    type Action = AccountAction;
    type ActionResult = AccountActionResult;
    type Context = Arc<RestaurantPolicy>;
    type Error = AccountError;

    /// Registration: accounts start unapproved except the seeded manager.
    fn from_create_params(id: String, params: AccountCreate) -> Result<Self, AccountError> {
        if params.name.trim().is_empty() {
            return Err(AccountError::Validation("name must not be empty".into()));
        }
        if params.balance < 0.0 {
            return Err(AccountError::Validation(
                "opening balance must not be negative".into(),
            ));
        }
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
            approved: params.role == Role::Manager,
            role: params.role,
            created_at: Utc::now(),
            blacklisted: false,
            closure_requested: false,
            balance: params.balance,
            total_spent: 0.0,
            orders_count: 0,
            warnings: 0,
            complaints_count: 0,
            compliments: 0,
            rating: 0.0,
            ratings_count: 0,
            rating_history: Vec::new(),
            salary: params.salary,
            demotions: 0,
            bonuses: 0,
            deliveries_completed: 0,
            vip_since: None,
            free_deliveries_earned: 0,
            free_deliveries_used: 0,
            flavor_profile: FlavorProfile::default(),
        })
    }

    async fn on_update(
        &mut self,
        update: AccountUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), AccountError> {
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(salary) = update.salary {
            if salary < 0.0 {
                return Err(AccountError::Validation(
                    "salary must not be negative".into(),
                ));
            }
            self.salary = salary;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: AccountAction,
        policy: &Self::Context,
    ) -> Result<AccountActionResult, AccountError> {
        match action {
            AccountAction::Deposit { amount } => {
                if amount <= 0.0 {
                    return Err(AccountError::Validation(
                        "deposit amount must be positive".into(),
                    ));
                }
                self.balance += amount;
                Ok(AccountActionResult::Deposit(self.clone()))
            }
            AccountAction::Approve => {
                if self.approved {
                    return Err(AccountError::InvalidState("account already approved".into()));
                }
                if self.blacklisted {
                    return Err(AccountError::Forbidden("account is blacklisted".into()));
                }
                if self.role == Role::Visitor {
                    self.transition_role(Role::Customer)?;
                }
                self.approved = true;
                Ok(AccountActionResult::Approve(self.clone()))
            }
            AccountAction::ChargeOrder { subtotal } => {
                let charge = self.charge_order(subtotal, policy)?;
                Ok(AccountActionResult::ChargeOrder(charge))
            }
            AccountAction::ChargeDeliveryFee { amount } => {
                self.debit_or_warn(amount, policy)?;
                Ok(AccountActionResult::ChargeDeliveryFee(self.clone()))
            }
            AccountAction::UseFreeDelivery => {
                if self.free_deliveries_used >= self.free_deliveries_earned {
                    return Err(AccountError::InvalidState(
                        "no unused free-delivery credit".into(),
                    ));
                }
                self.free_deliveries_used += 1;
                Ok(AccountActionResult::UseFreeDelivery(self.clone()))
            }
            AccountAction::AddWarning => {
                self.add_warning(policy);
                Ok(AccountActionResult::AddWarning(self.clone()))
            }
            AccountAction::ApplyFeedback { kind, weight } => {
                match kind {
                    ComplaintKind::Complaint => {
                        self.complaints_count += weight;
                    }
                    ComplaintKind::Compliment => {
                        self.compliments += weight;
                        // Compliments cancel outstanding complaints 1:1,
                        // never below zero.
                        self.complaints_count = self.complaints_count.saturating_sub(weight);
                    }
                }
                self.check_employee_performance(policy);
                Ok(AccountActionResult::ApplyFeedback(self.clone()))
            }
            AccountAction::ReverseFeedback { kind, weight } => {
                match kind {
                    ComplaintKind::Complaint => {
                        self.complaints_count = self.complaints_count.saturating_sub(weight);
                    }
                    ComplaintKind::Compliment => {
                        self.compliments = self.compliments.saturating_sub(weight);
                    }
                }
                self.check_employee_performance(policy);
                Ok(AccountActionResult::ReverseFeedback(self.clone()))
            }
            AccountAction::RecordDeliveryRating { stars } => {
                if !(1..=5).contains(&stars) {
                    return Err(AccountError::Validation(
                        "rating must be between 1 and 5".into(),
                    ));
                }
                self.rating_history.push(stars);
                self.ratings_count = self.rating_history.len() as u32;
                self.rating = self.rating_history.iter().sum::<u32>() as f64
                    / self.rating_history.len() as f64;
                self.check_employee_performance(policy);
                Ok(AccountActionResult::RecordDeliveryRating(self.clone()))
            }
            AccountAction::RecordDelivery => {
                self.deliveries_completed += 1;
                Ok(AccountActionResult::RecordDelivery(self.clone()))
            }
            AccountAction::AdjustFlavorProfile { tags, stars } => {
                self.flavor_profile.nudge(&tags, stars);
                Ok(AccountActionResult::AdjustFlavorProfile(self.clone()))
            }
            AccountAction::RequestClosure => {
                if self.closure_requested {
                    return Err(AccountError::InvalidState(
                        "closure already requested".into(),
                    ));
                }
                self.closure_requested = true;
                Ok(AccountActionResult::RequestClosure(self.clone()))
            }
        }
    }
}

impl Account {
    /// Reassign the role, consulting the central transition graph.
    fn transition_role(&mut self, to: Role) -> Result<(), AccountError> {
        if !role_transition_allowed(self.role, to) {
            return Err(AccountError::InvalidState(format!(
                "role transition {} -> {} not permitted",
                self.role, to
            )));
        }
        info!(account = %self.id, from = %self.role, to = %to, "Role transition");
        self.role = to;
        Ok(())
    }

    /// Debit `amount`, or add a warning and fail. Failed debits still cost
    /// reputation; the warning is not rolled back.
    fn debit_or_warn(&mut self, amount: f64, policy: &RestaurantPolicy) -> Result<(), AccountError> {
        if self.balance < amount {
            let available = self.balance;
            self.add_warning(policy);
            return Err(AccountError::InsufficientFunds {
                needed: amount,
                available,
            });
        }
        self.balance -= amount;
        Ok(())
    }

    fn charge_order(
        &mut self,
        subtotal: f64,
        policy: &RestaurantPolicy,
    ) -> Result<OrderCharge, AccountError> {
        if !self.role.is_customer_tier() {
            return Err(AccountError::Forbidden(format!(
                "role {} cannot place orders",
                self.role
            )));
        }
        if self.blacklisted {
            return Err(AccountError::Forbidden("account is blacklisted".into()));
        }
        if !self.approved {
            return Err(AccountError::Forbidden(
                "account is pending approval".into(),
            ));
        }

        let discount = if self.role == Role::Vip {
            subtotal * policy.vip_discount_percent / 100.0
        } else {
            0.0
        };
        let total = subtotal - discount;

        self.debit_or_warn(total, policy)?;

        // Free-delivery entitlement: every Nth VIP order earns one credit
        // and marks the order itself as free-delivery eligible.
        let free_delivery = self.role == Role::Vip
            && (self.orders_count + 1) % policy.vip_free_delivery_ratio == 0;
        if free_delivery {
            self.free_deliveries_earned += 1;
        }

        self.total_spent += total;
        self.orders_count += 1;

        // VIP promotion is evaluated after the counters move, so the order
        // that crosses the threshold is the one that promotes.
        if self.role == Role::Customer {
            let by_spending = self.total_spent >= policy.vip_spending_threshold;
            let by_orders = self.orders_count >= policy.vip_orders_without_complaints
                && self.complaints_count == 0;
            if by_spending || by_orders {
                self.transition_role(Role::Vip)?;
                self.vip_since = Some(Utc::now());
            }
        }

        Ok(OrderCharge {
            discount,
            total,
            free_delivery,
            account: self.clone(),
        })
    }

    fn add_warning(&mut self, policy: &RestaurantPolicy) {
        self.warnings += 1;
        self.check_customer_warnings(policy);
    }

    /// Downgrade a VIP or deregister a customer once warnings accumulate.
    fn check_customer_warnings(&mut self, policy: &RestaurantPolicy) {
        match self.role {
            Role::Vip if self.warnings >= policy.max_warnings_for_vip_downgrade => {
                // Warnings reset on downgrade; the customer starts clean.
                if self.transition_role(Role::Customer).is_ok() {
                    self.warnings = 0;
                    self.vip_since = None;
                }
            }
            Role::Customer if self.warnings >= policy.max_warnings_before_deregistration => {
                if self.transition_role(Role::Visitor).is_ok() {
                    self.approved = false;
                    self.blacklisted = true;
                }
            }
            _ => {}
        }
    }

    /// Demotion and bonus checks for chefs and couriers.
    ///
    /// The two checks are independent and can both fire in one evaluation
    /// (low rating with many compliments yields a demotion and a bonus);
    /// thresholds are structured so either condition stands alone.
    fn check_employee_performance(&mut self, policy: &RestaurantPolicy) {
        if !self.role.is_employee() {
            return;
        }

        let low_rating = self.rating > 0.0 && self.rating < policy.low_rating_threshold;
        let many_complaints = self.complaints_count >= policy.complaints_for_demotion;
        if low_rating || many_complaints {
            self.demotions += 1;
            self.salary = (self.salary * 0.9).max(0.0);
            info!(account = %self.id, demotions = self.demotions, "Employee demoted");

            if self.demotions >= policy.demotions_before_firing
                && self.transition_role(Role::Customer).is_ok()
            {
                self.approved = false;
                info!(account = %self.id, "Employee terminated");
            }
        }

        let high_rating = self.rating >= policy.high_rating_threshold;
        let many_compliments = self.compliments >= policy.compliments_for_bonus;
        if high_rating || many_compliments {
            self.bonuses += 1;
            self.salary *= 1.1;
            info!(account = %self.id, bonuses = self.bonuses, "Employee bonus");
        }
    }
}
