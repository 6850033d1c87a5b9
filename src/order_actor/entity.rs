//! `ActorEntity` implementation for [`Order`]: the lifecycle state machine
//! and the delivery-bidding marketplace.
//!
//! Bids live inside the order they target, so every bid mutation and every
//! status transition for one order flows through the same actor message
//! queue. There is no window where two managers can accept different bids,
//! or a courier can bid on an order that is concurrently leaving `ready`.

use crate::clients::{AccountClient, DishClient};
use crate::framework::ActorEntity;
use crate::model::{
    BidStatus, DeliveryBid, Order, OrderCreate, OrderItem, OrderStatus, Role,
};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

/// Dependencies injected into the Order actor's event loop.
#[derive(Clone)]
pub struct OrderContext {
    pub accounts: AccountClient,
    pub dishes: DishClient,
}

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Move the order along its lifecycle. Chefs may advance
    /// `pending -> preparing -> ready` for orders containing their dishes;
    /// managers may force any transition out of a non-terminal state.
    SetStatus {
        actor_id: String,
        new_status: OrderStatus,
    },
    /// A courier offers to deliver a ready order at the given price.
    /// Resubmission updates the existing bid and resets it to pending.
    SubmitBid { courier_id: String, amount: f64 },
    /// Manager resolves the bid set. Accepting above the current minimum
    /// requires a non-empty justification memo.
    AcceptBid {
        manager_id: String,
        bid_id: String,
        memo: Option<String>,
    },
    /// The assigned courier confirms the hand-off.
    MarkDelivered { courier_id: String },
    /// The customer's one-shot rating of the order: always the dish, and
    /// optionally the assigned courier in the same call.
    SubmitRating {
        customer_id: String,
        dish_id: String,
        food_stars: u32,
        delivery_stars: Option<u32>,
        comment: String,
    },
}

/// Results from OrderActions - variants match 1:1 with OrderAction.
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    SetStatus(Order),
    SubmitBid(DeliveryBid),
    AcceptBid(Order),
    MarkDelivered(Order),
    SubmitRating(Order),
}

#[async_trait]
impl ActorEntity for Order {
    type Id = String;
    type CreateParams = OrderCreate;
    type UpdateParams = ();
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: String, params: OrderCreate) -> Result<Self, OrderError> {
        if params.items.is_empty() {
            return Err(OrderError::Validation(
                "order must contain at least one item".into(),
            ));
        }
        if params.items.iter().any(|item| item.quantity == 0) {
            return Err(OrderError::Validation(
                "item quantity must be positive".into(),
            ));
        }
        if params.delivery_address.trim().is_empty() {
            return Err(OrderError::Validation(
                "delivery address must not be empty".into(),
            ));
        }
        Ok(Self {
            id,
            customer_id: params.customer_id,
            // Prices are snapshotted from the catalog in on_create.
            items: params
                .items
                .into_iter()
                .map(|item| OrderItem {
                    dish_id: item.dish_id,
                    quantity: item.quantity,
                    price: 0.0,
                })
                .collect(),
            total: 0.0,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            delivery_address: params.delivery_address,
            discount_applied: 0.0,
            free_delivery: false,
            delivery_person_id: None,
            delivery_bid: None,
            delivery_fee: 0.0,
            food_rating: None,
            delivery_rating: None,
            bids: Vec::new(),
            bid_seq: 0,
        })
    }

    /// Checkout: snapshot prices, gate availability and VIP-only dishes,
    /// charge the customer, bump dish popularity. A failure at any step
    /// keeps the order out of the store entirely.
    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), OrderError> {
        let customer = ctx.accounts.fetch(&self.customer_id).await?;

        let mut subtotal = 0.0;
        for item in &mut self.items {
            let dish = ctx.dishes.fetch(&item.dish_id).await?;
            if !dish.available {
                return Err(OrderError::InvalidState(format!(
                    "dish {} is not currently available",
                    dish.name
                )));
            }
            if dish.vip_only && customer.role != Role::Vip {
                return Err(OrderError::Forbidden(format!(
                    "dish {} is reserved for VIP customers",
                    dish.name
                )));
            }
            item.price = dish.price;
            subtotal += dish.price * f64::from(item.quantity);
        }

        // The charge carries the role/approval gates, the VIP discount, the
        // promotion check and the free-delivery entitlement. An
        // insufficient-funds failure has already cost the customer a
        // warning by the time it surfaces here.
        let charge = ctx.accounts.charge_order(&self.customer_id, subtotal).await?;
        self.total = charge.total;
        self.discount_applied = charge.discount;
        self.free_delivery = charge.free_delivery;

        for item in &self.items {
            ctx.dishes.record_ordered(&item.dish_id, item.quantity).await?;
        }

        info!(order = %self.id, customer = %self.customer_id, total = self.total, "Order placed");
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &OrderContext) -> Result<(), OrderError> {
        Err(OrderError::InvalidState(
            "orders cannot be edited after checkout".into(),
        ))
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &OrderContext,
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::SetStatus {
                actor_id,
                new_status,
            } => {
                self.set_status(&actor_id, new_status, ctx).await?;
                Ok(OrderActionResult::SetStatus(self.clone()))
            }
            OrderAction::SubmitBid { courier_id, amount } => {
                let bid = self.submit_bid(&courier_id, amount, ctx).await?;
                Ok(OrderActionResult::SubmitBid(bid))
            }
            OrderAction::AcceptBid {
                manager_id,
                bid_id,
                memo,
            } => {
                self.accept_bid(&manager_id, &bid_id, memo, ctx).await?;
                Ok(OrderActionResult::AcceptBid(self.clone()))
            }
            OrderAction::MarkDelivered { courier_id } => {
                self.mark_delivered(&courier_id, ctx).await?;
                Ok(OrderActionResult::MarkDelivered(self.clone()))
            }
            OrderAction::SubmitRating {
                customer_id,
                dish_id,
                food_stars,
                delivery_stars,
                comment,
            } => {
                self.submit_rating(&customer_id, &dish_id, food_stars, delivery_stars, comment, ctx)
                    .await?;
                Ok(OrderActionResult::SubmitRating(self.clone()))
            }
        }
    }
}

impl Order {
    async fn set_status(
        &mut self,
        actor_id: &str,
        new_status: OrderStatus,
        ctx: &OrderContext,
    ) -> Result<(), OrderError> {
        if self.status.is_terminal() {
            return Err(OrderError::InvalidState(format!(
                "order is already {}",
                self.status
            )));
        }

        let actor = ctx.accounts.fetch(actor_id).await?;
        match actor.role {
            // Escalation path: any transition out of a non-terminal state.
            Role::Manager => {}
            Role::Chef => {
                let allowed = matches!(
                    (self.status, new_status),
                    (OrderStatus::Pending, OrderStatus::Preparing)
                        | (OrderStatus::Preparing, OrderStatus::Ready)
                );
                if !allowed {
                    return Err(OrderError::InvalidState(format!(
                        "chefs cannot move an order from {} to {}",
                        self.status, new_status
                    )));
                }
                if !self.contains_dish_by(actor_id, ctx).await? {
                    return Err(OrderError::Forbidden(
                        "order contains none of this chef's dishes".into(),
                    ));
                }
            }
            other => {
                return Err(OrderError::Forbidden(format!(
                    "role {other} cannot change order status"
                )));
            }
        }

        info!(order = %self.id, from = %self.status, to = %new_status, by = %actor_id, "Status change");
        self.status = new_status;
        Ok(())
    }

    async fn contains_dish_by(&self, chef_id: &str, ctx: &OrderContext) -> Result<bool, OrderError> {
        for item in &self.items {
            if ctx.dishes.fetch(&item.dish_id).await?.chef_id == chef_id {
                return Ok(true);
            }
        }
        Ok(false)
    }

    async fn submit_bid(
        &mut self,
        courier_id: &str,
        amount: f64,
        ctx: &OrderContext,
    ) -> Result<DeliveryBid, OrderError> {
        let courier = ctx.accounts.fetch(courier_id).await?;
        if courier.role != Role::Delivery {
            return Err(OrderError::Forbidden(format!(
                "role {} cannot bid on deliveries",
                courier.role
            )));
        }
        if amount <= 0.0 {
            return Err(OrderError::Validation("bid amount must be positive".into()));
        }
        if self.status != OrderStatus::Ready || self.delivery_person_id.is_some() {
            return Err(OrderError::InvalidState(
                "bidding is only open while the order is ready and unassigned".into(),
            ));
        }

        // At most one bid per courier per order: resubmission updates the
        // amount and reopens the bid, even after a rejection.
        if let Some(bid) = self
            .bids
            .iter_mut()
            .find(|bid| bid.delivery_person_id == courier_id)
        {
            bid.bid_amount = amount;
            bid.status = BidStatus::Pending;
            bid.manager_memo = None;
            return Ok(bid.clone());
        }

        self.bid_seq += 1;
        let bid = DeliveryBid {
            id: format!("{}_bid_{}", self.id, self.bid_seq),
            order_id: self.id.clone(),
            delivery_person_id: courier_id.to_string(),
            bid_amount: amount,
            status: BidStatus::Pending,
            created_at: Utc::now(),
            manager_memo: None,
        };
        self.bids.push(bid.clone());
        Ok(bid)
    }

    async fn accept_bid(
        &mut self,
        manager_id: &str,
        bid_id: &str,
        memo: Option<String>,
        ctx: &OrderContext,
    ) -> Result<(), OrderError> {
        let manager = ctx.accounts.fetch(manager_id).await?;
        if manager.role != Role::Manager {
            return Err(OrderError::Forbidden(
                "only managers resolve delivery bids".into(),
            ));
        }
        // Acceptance is one-shot: once a courier is assigned the order has
        // left `ready`, so a second attempt lands here instead of
        // re-rejecting the bid set.
        if self.status != OrderStatus::Ready || self.delivery_person_id.is_some() {
            return Err(OrderError::InvalidState(
                "order is not awaiting bid resolution".into(),
            ));
        }

        let chosen = self
            .bids
            .iter()
            .find(|bid| bid.id == bid_id)
            .cloned()
            .ok_or_else(|| OrderError::NotFound(bid_id.to_string()))?;
        if chosen.status != BidStatus::Pending {
            return Err(OrderError::InvalidState("bid is already resolved".into()));
        }

        let min_pending = self
            .bids
            .iter()
            .filter(|bid| bid.status == BidStatus::Pending)
            .map(|bid| bid.bid_amount)
            .fold(f64::INFINITY, f64::min);
        let memo = memo
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());
        if chosen.bid_amount > min_pending && memo.is_none() {
            return Err(OrderError::Validation(
                "accepting a bid above the minimum requires a justification memo".into(),
            ));
        }

        // Settle the fee before touching any order state, so a failed debit
        // leaves the bid set intact and re-acceptable.
        let fee = if self.free_delivery {
            ctx.accounts.use_free_delivery(&self.customer_id).await?;
            0.0
        } else {
            ctx.accounts
                .charge_delivery_fee(&self.customer_id, chosen.bid_amount)
                .await?;
            chosen.bid_amount
        };

        for bid in &mut self.bids {
            if bid.status == BidStatus::Pending {
                bid.status = if bid.id == chosen.id {
                    BidStatus::Accepted
                } else {
                    BidStatus::Rejected
                };
                if bid.id == chosen.id {
                    bid.manager_memo = memo.clone();
                }
            }
        }

        self.delivery_person_id = Some(chosen.delivery_person_id.clone());
        self.delivery_bid = Some(chosen.bid_amount);
        self.delivery_fee = fee;
        self.total += fee;
        self.status = OrderStatus::Delivering;

        info!(
            order = %self.id,
            courier = %chosen.delivery_person_id,
            fee,
            waived = self.free_delivery,
            "Bid accepted"
        );
        Ok(())
    }

    async fn mark_delivered(
        &mut self,
        courier_id: &str,
        ctx: &OrderContext,
    ) -> Result<(), OrderError> {
        if self.status != OrderStatus::Delivering {
            return Err(OrderError::InvalidState(format!(
                "order is {}, not delivering",
                self.status
            )));
        }
        if self.delivery_person_id.as_deref() != Some(courier_id) {
            return Err(OrderError::Forbidden(
                "only the assigned courier can mark the order delivered".into(),
            ));
        }

        self.status = OrderStatus::Delivered;
        ctx.accounts.record_delivery(courier_id).await?;
        info!(order = %self.id, courier = %courier_id, "Delivered");
        Ok(())
    }

    async fn submit_rating(
        &mut self,
        customer_id: &str,
        dish_id: &str,
        food_stars: u32,
        delivery_stars: Option<u32>,
        comment: String,
        ctx: &OrderContext,
    ) -> Result<(), OrderError> {
        if customer_id != self.customer_id {
            return Err(OrderError::Forbidden(
                "only the ordering customer can rate this order".into(),
            ));
        }
        // Write-once guard.
        if self.food_rating.is_some() {
            return Err(OrderError::InvalidState("order is already rated".into()));
        }
        if !(1..=5).contains(&food_stars) {
            return Err(OrderError::Validation(
                "rating must be between 1 and 5".into(),
            ));
        }
        if !self.items.iter().any(|item| item.dish_id == dish_id) {
            return Err(OrderError::Validation(
                "dish is not part of this order".into(),
            ));
        }
        let courier_to_rate = match delivery_stars {
            Some(stars) => {
                if !(1..=5).contains(&stars) {
                    return Err(OrderError::Validation(
                        "rating must be between 1 and 5".into(),
                    ));
                }
                match self.delivery_person_id.clone() {
                    Some(courier_id) => Some((courier_id, stars)),
                    None => {
                        return Err(OrderError::Validation(
                            "no courier is assigned to this order".into(),
                        ));
                    }
                }
            }
            None => None,
        };

        let dish = ctx
            .dishes
            .record_rating(dish_id, customer_id, food_stars, &comment)
            .await?;
        ctx.accounts
            .adjust_flavor_profile(customer_id, dish.flavor_tags, food_stars)
            .await?;
        self.food_rating = Some(food_stars);

        if let Some((courier_id, stars)) = courier_to_rate {
            ctx.accounts
                .record_delivery_rating(&courier_id, stars)
                .await?;
            self.delivery_rating = Some(stars);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account_actor::AccountActionResult;
    use crate::framework::MockClient;
    use crate::model::{Account, AccountCreate, Dish, OrderItemRequest};

    fn account(id: &str, role: Role) -> Account {
        let mut account = Account::from_create_params(
            id.to_string(),
            AccountCreate {
                name: id.to_string(),
                email: format!("{id}@example.com"),
                role,
                balance: 100.0,
                salary: 0.0,
            },
        )
        .unwrap();
        account.approved = true;
        account
    }

    fn ready_order() -> Order {
        let mut order = Order::from_create_params(
            "order_1".to_string(),
            OrderCreate {
                customer_id: "cust_1".into(),
                items: vec![OrderItemRequest {
                    dish_id: "dish_1".into(),
                    quantity: 1,
                }],
                delivery_address: "12 Elm St".into(),
            },
        )
        .unwrap();
        order.items[0].price = 20.0;
        order.total = 20.0;
        order.status = OrderStatus::Ready;
        order
    }

    fn pending_bid(order: &mut Order, courier_id: &str, amount: f64) -> String {
        order.bid_seq += 1;
        let id = format!("{}_bid_{}", order.id, order.bid_seq);
        order.bids.push(DeliveryBid {
            id: id.clone(),
            order_id: order.id.clone(),
            delivery_person_id: courier_id.to_string(),
            bid_amount: amount,
            status: BidStatus::Pending,
            created_at: Utc::now(),
            manager_memo: None,
        });
        id
    }

    struct Mocks {
        accounts: MockClient<Account>,
        dishes: MockClient<Dish>,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                accounts: MockClient::new(),
                dishes: MockClient::new(),
            }
        }

        fn ctx(&self) -> OrderContext {
            OrderContext {
                accounts: AccountClient::new(self.accounts.client()),
                dishes: DishClient::new(self.dishes.client()),
            }
        }
    }

    #[tokio::test]
    async fn bidding_requires_ready_order() {
        let mut mocks = Mocks::new();
        mocks
            .accounts
            .expect_get("courier_1".to_string())
            .return_ok(Some(account("courier_1", Role::Delivery)));

        let mut order = ready_order();
        order.status = OrderStatus::Preparing;

        let err = order
            .handle_action(
                OrderAction::SubmitBid {
                    courier_id: "courier_1".into(),
                    amount: 5.0,
                },
                &mocks.ctx(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::InvalidState(_)));
        assert!(order.bids.is_empty());
        mocks.accounts.verify();
    }

    #[tokio::test]
    async fn resubmitted_bid_updates_in_place_and_reopens() {
        let mut mocks = Mocks::new();
        for _ in 0..2 {
            mocks
                .accounts
                .expect_get("courier_1".to_string())
                .return_ok(Some(account("courier_1", Role::Delivery)));
        }

        let mut order = ready_order();
        let bid_id = pending_bid(&mut order, "courier_1", 8.0);
        order.bids[0].status = BidStatus::Rejected;

        // First resubmission reopens the rejected bid.
        order
            .handle_action(
                OrderAction::SubmitBid {
                    courier_id: "courier_1".into(),
                    amount: 6.0,
                },
                &mocks.ctx(),
            )
            .await
            .unwrap();
        // Second adjusts the amount again without duplicating.
        let result = order
            .handle_action(
                OrderAction::SubmitBid {
                    courier_id: "courier_1".into(),
                    amount: 5.5,
                },
                &mocks.ctx(),
            )
            .await
            .unwrap();

        assert_eq!(order.bids.len(), 1);
        assert_eq!(order.bids[0].id, bid_id);
        assert_eq!(order.bids[0].status, BidStatus::Pending);
        assert_eq!(order.bids[0].bid_amount, 5.5);
        let OrderActionResult::SubmitBid(bid) = result else {
            panic!("expected SubmitBid result");
        };
        assert_eq!(bid.id, bid_id);
    }

    #[tokio::test]
    async fn non_minimum_bid_without_memo_rejected() {
        let mut mocks = Mocks::new();
        mocks
            .accounts
            .expect_get("mgr_1".to_string())
            .return_ok(Some(account("mgr_1", Role::Manager)));

        let mut order = ready_order();
        pending_bid(&mut order, "courier_1", 5.0);
        let high_bid = pending_bid(&mut order, "courier_2", 8.0);

        let err = order
            .handle_action(
                OrderAction::AcceptBid {
                    manager_id: "mgr_1".into(),
                    bid_id: high_bid,
                    memo: Some("   ".into()),
                },
                &mocks.ctx(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, OrderError::Validation(_)));
        assert_eq!(order.status, OrderStatus::Ready);
        assert!(order.bids.iter().all(|b| b.status == BidStatus::Pending));
    }

    #[tokio::test]
    async fn non_minimum_bid_with_memo_accepted() {
        let mut mocks = Mocks::new();
        mocks
            .accounts
            .expect_get("mgr_1".to_string())
            .return_ok(Some(account("mgr_1", Role::Manager)));
        mocks
            .accounts
            .expect_action("cust_1".to_string())
            .return_ok(AccountActionResult::ChargeDeliveryFee(account(
                "cust_1",
                Role::Customer,
            )));

        let mut order = ready_order();
        pending_bid(&mut order, "courier_1", 5.0);
        let high_bid = pending_bid(&mut order, "courier_2", 8.0);

        order
            .handle_action(
                OrderAction::AcceptBid {
                    manager_id: "mgr_1".into(),
                    bid_id: high_bid.clone(),
                    memo: Some("courier_1 is across town".into()),
                },
                &mocks.ctx(),
            )
            .await
            .unwrap();

        assert_eq!(order.status, OrderStatus::Delivering);
        assert_eq!(order.delivery_person_id.as_deref(), Some("courier_2"));
        assert_eq!(order.delivery_fee, 8.0);
        assert_eq!(order.total, 28.0);
        let accepted = order.bids.iter().find(|b| b.id == high_bid).unwrap();
        assert_eq!(accepted.status, BidStatus::Accepted);
        assert_eq!(
            accepted.manager_memo.as_deref(),
            Some("courier_1 is across town")
        );
        assert!(order
            .bids
            .iter()
            .filter(|b| b.id != high_bid)
            .all(|b| b.status == BidStatus::Rejected));
        mocks.accounts.verify();
    }

    #[tokio::test]
    async fn free_delivery_credit_waives_fee() {
        let mut mocks = Mocks::new();
        mocks
            .accounts
            .expect_get("mgr_1".to_string())
            .return_ok(Some(account("mgr_1", Role::Manager)));
        mocks
            .accounts
            .expect_action("cust_1".to_string())
            .return_ok(AccountActionResult::UseFreeDelivery(account(
                "cust_1",
                Role::Vip,
            )));

        let mut order = ready_order();
        order.free_delivery = true;
        let bid_id = pending_bid(&mut order, "courier_1", 5.0);

        order
            .handle_action(
                OrderAction::AcceptBid {
                    manager_id: "mgr_1".into(),
                    bid_id,
                    memo: None,
                },
                &mocks.ctx(),
            )
            .await
            .unwrap();

        assert_eq!(order.delivery_fee, 0.0);
        assert_eq!(order.total, 20.0);
        assert_eq!(order.delivery_bid, Some(5.0));
        mocks.accounts.verify();
    }

    #[tokio::test]
    async fn second_acceptance_fails_without_touching_bids() {
        let mut mocks = Mocks::new();
        mocks
            .accounts
            .expect_get("mgr_1".to_string())
            .return_ok(Some(account("mgr_1", Role::Manager)));

        let mut order = ready_order();
        let bid_id = pending_bid(&mut order, "courier_1", 5.0);
        order.bids[0].status = BidStatus::Accepted;
        order.delivery_person_id = Some("courier_1".into());
        order.status = OrderStatus::Delivering;

        let err = order
            .handle_action(
                OrderAction::AcceptBid {
                    manager_id: "mgr_1".into(),
                    bid_id,
                    memo: None,
                },
                &mocks.ctx(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, OrderError::InvalidState(_)));
        assert_eq!(order.bids[0].status, BidStatus::Accepted);
    }

    #[tokio::test]
    async fn only_assigned_courier_marks_delivered() {
        let mut mocks = Mocks::new();
        let mut order = ready_order();
        order.status = OrderStatus::Delivering;
        order.delivery_person_id = Some("courier_1".into());

        let err = order
            .handle_action(
                OrderAction::MarkDelivered {
                    courier_id: "courier_2".into(),
                },
                &mocks.ctx(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::Forbidden(_)));
        assert_eq!(order.status, OrderStatus::Delivering);

        mocks
            .accounts
            .expect_action("courier_1".to_string())
            .return_ok(AccountActionResult::RecordDelivery(account(
                "courier_1",
                Role::Delivery,
            )));
        order
            .handle_action(
                OrderAction::MarkDelivered {
                    courier_id: "courier_1".into(),
                },
                &mocks.ctx(),
            )
            .await
            .unwrap();
        assert_eq!(order.status, OrderStatus::Delivered);
        mocks.accounts.verify();
    }

    #[tokio::test]
    async fn food_rating_is_write_once() {
        let mocks = Mocks::new();
        let mut order = ready_order();
        order.status = OrderStatus::Delivered;
        order.food_rating = Some(4);

        let err = order
            .handle_action(
                OrderAction::SubmitRating {
                    customer_id: "cust_1".into(),
                    dish_id: "dish_1".into(),
                    food_stars: 5,
                    delivery_stars: None,
                    comment: String::new(),
                },
                &mocks.ctx(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::InvalidState(_)));
        assert_eq!(order.food_rating, Some(4));
    }

    #[tokio::test]
    async fn chef_cannot_skip_lifecycle_steps() {
        let mut mocks = Mocks::new();
        mocks
            .accounts
            .expect_get("chef_1".to_string())
            .return_ok(Some(account("chef_1", Role::Chef)));

        let mut order = ready_order();
        order.status = OrderStatus::Pending;

        let err = order
            .handle_action(
                OrderAction::SetStatus {
                    actor_id: "chef_1".into(),
                    new_status: OrderStatus::Ready,
                },
                &mocks.ctx(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::InvalidState(_)));
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn manager_can_cancel_non_terminal_order() {
        let mut mocks = Mocks::new();
        mocks
            .accounts
            .expect_get("mgr_1".to_string())
            .return_ok(Some(account("mgr_1", Role::Manager)));

        let mut order = ready_order();
        order
            .handle_action(
                OrderAction::SetStatus {
                    actor_id: "mgr_1".into(),
                    new_status: OrderStatus::Cancelled,
                },
                &mocks.ctx(),
            )
            .await
            .unwrap();
        assert_eq!(order.status, OrderStatus::Cancelled);

        // Terminal states are final, even for managers.
        let err = order
            .handle_action(
                OrderAction::SetStatus {
                    actor_id: "mgr_1".into(),
                    new_status: OrderStatus::Pending,
                },
                &mocks.ctx(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::InvalidState(_)));
    }
}
