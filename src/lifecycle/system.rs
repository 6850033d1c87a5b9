use std::sync::Arc;

use crate::clients::{AccountClient, ComplaintClient, DishClient, OrderClient};
use crate::config::RestaurantPolicy;
use crate::order_actor::OrderContext;
use crate::recommend::Recommender;
use tracing::{error, info};

/// The runtime orchestrator for the restaurant platform.
///
/// `RestaurantSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping all actors in the system
/// - **Dependency Wiring**: injecting the clients each actor's context needs
/// - **Policy Distribution**: sharing one [`RestaurantPolicy`] across actors
///
/// # Architecture
///
/// Four actors run, one per entity collection:
/// - **Account Actor**: the ledger and reputation engine (context: policy)
/// - **Dish Actor**: the menu catalog (no dependencies)
/// - **Order Actor**: lifecycle and bidding, calling into accounts and dishes
/// - **Complaint Actor**: filing and resolution, calling into accounts
///
/// # Example
///
/// ```ignore
/// let system = RestaurantSystem::new();
///
/// let customer_id = system.accounts.register(params).await?;
/// let order = system.orders.place(order_params).await?;
///
/// system.shutdown().await?;
/// ```
pub struct RestaurantSystem {
    /// Client for account, ledger, and reputation operations.
    pub accounts: AccountClient,

    /// Client for menu catalog operations.
    pub dishes: DishClient,

    /// Client for order lifecycle and bidding operations.
    pub orders: OrderClient,

    /// Client for complaint filing and resolution.
    pub complaints: ComplaintClient,

    /// Flavor-match scoring over the live menu.
    pub recommender: Recommender,

    /// Task handles for all running actors (used for graceful shutdown).
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RestaurantSystem {
    /// Starts the system with the production policy constants.
    pub fn new() -> Self {
        Self::with_policy(RestaurantPolicy::default())
    }

    /// Starts all actors with the given policy and wires their contexts.
    pub fn with_policy(policy: RestaurantPolicy) -> Self {
        let policy = Arc::new(policy);

        let (account_actor, accounts) = crate::account_actor::new();
        let (dish_actor, dishes) = crate::dish_actor::new();
        let (order_actor, orders) = crate::order_actor::new();
        let (complaint_actor, complaints) = crate::complaint_actor::new();

        // Accounts and dishes have no cross-actor dependencies; orders and
        // complaints get clients injected through their contexts.
        let account_handle = tokio::spawn(account_actor.run(policy));
        let dish_handle = tokio::spawn(dish_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(OrderContext {
            accounts: accounts.clone(),
            dishes: dishes.clone(),
        }));
        let complaint_handle = tokio::spawn(complaint_actor.run(accounts.clone()));

        let recommender = Recommender::new(orders.clone(), dishes.clone());

        Self {
            accounts,
            dishes,
            orders,
            complaints,
            recommender,
            handles: vec![account_handle, dish_handle, order_handle, complaint_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes their channels; each actor drains its
    /// queue and exits. Returns an error if any actor task panicked.
    ///
    /// Note: the Order and Complaint actors hold cloned Account and Dish
    /// clients in their contexts, so those two actors must stop before the
    /// Account and Dish channels fully close. Joining in reverse start
    /// order handles this.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.recommender);
        drop(self.complaints);
        drop(self.orders);
        drop(self.dishes);
        drop(self.accounts);

        for handle in self.handles.into_iter().rev() {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for RestaurantSystem {
    fn default() -> Self {
        Self::new()
    }
}
