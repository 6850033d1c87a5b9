//! Typed client for the Order actor.

use crate::framework::{ActorError, ResourceClient};
use crate::model::{DeliveryBid, Order, OrderCreate, OrderStatus};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};

/// Client handle for order lifecycle and bidding operations.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    fn lift(err: ActorError<OrderError>) -> OrderError {
        match err {
            ActorError::Entity(e) => e,
            ActorError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::Actor(other.to_string()),
        }
    }

    /// Checkout: creates the order, which charges the customer and snapshots
    /// prices before it is stored. Returns the stored order.
    pub async fn place(&self, params: OrderCreate) -> Result<Order, OrderError> {
        let id = self.inner.create(params).await.map_err(Self::lift)?;
        self.fetch(&id).await
    }

    pub async fn get(&self, id: &str) -> Result<Option<Order>, OrderError> {
        self.inner.get(id.to_string()).await.map_err(Self::lift)
    }

    /// Like [`get`](Self::get), but absence is an error.
    pub async fn fetch(&self, id: &str) -> Result<Order, OrderError> {
        self.get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Order>, OrderError> {
        self.inner.list().await.map_err(Self::lift)
    }

    /// One customer's orders, newest first.
    pub async fn for_customer(&self, customer_id: &str) -> Result<Vec<Order>, OrderError> {
        let mut orders: Vec<Order> = self
            .list()
            .await?
            .into_iter()
            .filter(|order| order.customer_id == customer_id)
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    async fn act(&self, id: &str, action: OrderAction) -> Result<OrderActionResult, OrderError> {
        self.inner
            .perform_action(id.to_string(), action)
            .await
            .map_err(Self::lift)
    }

    pub async fn update_status(
        &self,
        order_id: &str,
        actor_id: &str,
        new_status: OrderStatus,
    ) -> Result<Order, OrderError> {
        match self
            .act(
                order_id,
                OrderAction::SetStatus {
                    actor_id: actor_id.to_string(),
                    new_status,
                },
            )
            .await?
        {
            OrderActionResult::SetStatus(order) => Ok(order),
            other => unreachable!("mismatched action result: {other:?}"),
        }
    }

    pub async fn submit_bid(
        &self,
        order_id: &str,
        courier_id: &str,
        amount: f64,
    ) -> Result<DeliveryBid, OrderError> {
        match self
            .act(
                order_id,
                OrderAction::SubmitBid {
                    courier_id: courier_id.to_string(),
                    amount,
                },
            )
            .await?
        {
            OrderActionResult::SubmitBid(bid) => Ok(bid),
            other => unreachable!("mismatched action result: {other:?}"),
        }
    }

    pub async fn accept_bid(
        &self,
        order_id: &str,
        bid_id: &str,
        manager_id: &str,
        memo: Option<&str>,
    ) -> Result<Order, OrderError> {
        match self
            .act(
                order_id,
                OrderAction::AcceptBid {
                    manager_id: manager_id.to_string(),
                    bid_id: bid_id.to_string(),
                    memo: memo.map(str::to_string),
                },
            )
            .await?
        {
            OrderActionResult::AcceptBid(order) => Ok(order),
            other => unreachable!("mismatched action result: {other:?}"),
        }
    }

    pub async fn mark_delivered(&self, order_id: &str, courier_id: &str) -> Result<Order, OrderError> {
        match self
            .act(
                order_id,
                OrderAction::MarkDelivered {
                    courier_id: courier_id.to_string(),
                },
            )
            .await?
        {
            OrderActionResult::MarkDelivered(order) => Ok(order),
            other => unreachable!("mismatched action result: {other:?}"),
        }
    }

    /// Rates the dish and, when `delivery_stars` is given, the assigned
    /// courier. One submission per order.
    #[allow(clippy::too_many_arguments)]
    pub async fn submit_rating(
        &self,
        order_id: &str,
        customer_id: &str,
        dish_id: &str,
        food_stars: u32,
        delivery_stars: Option<u32>,
        comment: &str,
    ) -> Result<Order, OrderError> {
        match self
            .act(
                order_id,
                OrderAction::SubmitRating {
                    customer_id: customer_id.to_string(),
                    dish_id: dish_id.to_string(),
                    food_stars,
                    delivery_stars,
                    comment: comment.to_string(),
                },
            )
            .await?
        {
            OrderActionResult::SubmitRating(order) => Ok(order),
            other => unreachable!("mismatched action result: {other:?}"),
        }
    }
}
