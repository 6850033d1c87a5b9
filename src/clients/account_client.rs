//! Typed client for the Account actor.

use crate::account_actor::{AccountAction, AccountActionResult, AccountError, OrderCharge};
use crate::framework::{ActorError, ResourceClient};
use crate::model::{Account, AccountCreate, AccountUpdate, ComplaintKind, FlavorTag};

/// Client handle for account operations: the ledger, registration, and the
/// reputation counters.
#[derive(Clone)]
pub struct AccountClient {
    inner: ResourceClient<Account>,
}

impl AccountClient {
    pub fn new(inner: ResourceClient<Account>) -> Self {
        Self { inner }
    }

    fn lift(err: ActorError<AccountError>) -> AccountError {
        match err {
            ActorError::Entity(e) => e,
            ActorError::NotFound(id) => AccountError::NotFound(id),
            other => AccountError::Actor(other.to_string()),
        }
    }

    /// Registers a new account and returns its ID. Non-manager accounts
    /// start unapproved.
    pub async fn register(&self, params: AccountCreate) -> Result<String, AccountError> {
        self.inner.create(params).await.map_err(Self::lift)
    }

    pub async fn get(&self, id: &str) -> Result<Option<Account>, AccountError> {
        self.inner.get(id.to_string()).await.map_err(Self::lift)
    }

    /// Like [`get`](Self::get), but absence is an error.
    pub async fn fetch(&self, id: &str) -> Result<Account, AccountError> {
        self.get(id)
            .await?
            .ok_or_else(|| AccountError::NotFound(id.to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Account>, AccountError> {
        self.inner.list().await.map_err(Self::lift)
    }

    pub async fn update(&self, id: &str, update: AccountUpdate) -> Result<Account, AccountError> {
        self.inner
            .update(id.to_string(), update)
            .await
            .map_err(Self::lift)
    }

    async fn act(&self, id: &str, action: AccountAction) -> Result<AccountActionResult, AccountError> {
        self.inner
            .perform_action(id.to_string(), action)
            .await
            .map_err(Self::lift)
    }

    pub async fn deposit(&self, id: &str, amount: f64) -> Result<Account, AccountError> {
        match self.act(id, AccountAction::Deposit { amount }).await? {
            AccountActionResult::Deposit(account) => Ok(account),
            other => unreachable!("mismatched action result: {other:?}"),
        }
    }

    pub async fn approve(&self, id: &str) -> Result<Account, AccountError> {
        match self.act(id, AccountAction::Approve).await? {
            AccountActionResult::Approve(account) => Ok(account),
            other => unreachable!("mismatched action result: {other:?}"),
        }
    }

    /// Checkout debit: discount, promotion and free-delivery evaluation all
    /// happen inside the single actor message.
    pub async fn charge_order(&self, id: &str, subtotal: f64) -> Result<OrderCharge, AccountError> {
        match self.act(id, AccountAction::ChargeOrder { subtotal }).await? {
            AccountActionResult::ChargeOrder(charge) => Ok(charge),
            other => unreachable!("mismatched action result: {other:?}"),
        }
    }

    pub async fn charge_delivery_fee(&self, id: &str, amount: f64) -> Result<Account, AccountError> {
        match self
            .act(id, AccountAction::ChargeDeliveryFee { amount })
            .await?
        {
            AccountActionResult::ChargeDeliveryFee(account) => Ok(account),
            other => unreachable!("mismatched action result: {other:?}"),
        }
    }

    pub async fn use_free_delivery(&self, id: &str) -> Result<Account, AccountError> {
        match self.act(id, AccountAction::UseFreeDelivery).await? {
            AccountActionResult::UseFreeDelivery(account) => Ok(account),
            other => unreachable!("mismatched action result: {other:?}"),
        }
    }

    pub async fn add_warning(&self, id: &str) -> Result<Account, AccountError> {
        match self.act(id, AccountAction::AddWarning).await? {
            AccountActionResult::AddWarning(account) => Ok(account),
            other => unreachable!("mismatched action result: {other:?}"),
        }
    }

    pub async fn apply_feedback(
        &self,
        id: &str,
        kind: ComplaintKind,
        weight: u32,
    ) -> Result<Account, AccountError> {
        match self
            .act(id, AccountAction::ApplyFeedback { kind, weight })
            .await?
        {
            AccountActionResult::ApplyFeedback(account) => Ok(account),
            other => unreachable!("mismatched action result: {other:?}"),
        }
    }

    pub async fn reverse_feedback(
        &self,
        id: &str,
        kind: ComplaintKind,
        weight: u32,
    ) -> Result<Account, AccountError> {
        match self
            .act(id, AccountAction::ReverseFeedback { kind, weight })
            .await?
        {
            AccountActionResult::ReverseFeedback(account) => Ok(account),
            other => unreachable!("mismatched action result: {other:?}"),
        }
    }

    pub async fn record_delivery_rating(
        &self,
        id: &str,
        stars: u32,
    ) -> Result<Account, AccountError> {
        match self
            .act(id, AccountAction::RecordDeliveryRating { stars })
            .await?
        {
            AccountActionResult::RecordDeliveryRating(account) => Ok(account),
            other => unreachable!("mismatched action result: {other:?}"),
        }
    }

    pub async fn record_delivery(&self, id: &str) -> Result<Account, AccountError> {
        match self.act(id, AccountAction::RecordDelivery).await? {
            AccountActionResult::RecordDelivery(account) => Ok(account),
            other => unreachable!("mismatched action result: {other:?}"),
        }
    }

    /// Flags the account for closure. Removal itself stays a manager call
    /// to [`remove`](Self::remove).
    pub async fn request_closure(&self, id: &str) -> Result<Account, AccountError> {
        match self.act(id, AccountAction::RequestClosure).await? {
            AccountActionResult::RequestClosure(account) => Ok(account),
            other => unreachable!("mismatched action result: {other:?}"),
        }
    }

    /// Removes the account entirely.
    pub async fn remove(&self, id: &str) -> Result<(), AccountError> {
        self.inner.delete(id.to_string()).await.map_err(Self::lift)
    }

    pub async fn adjust_flavor_profile(
        &self,
        id: &str,
        tags: Vec<FlavorTag>,
        stars: u32,
    ) -> Result<Account, AccountError> {
        match self
            .act(id, AccountAction::AdjustFlavorProfile { tags, stars })
            .await?
        {
            AccountActionResult::AdjustFlavorProfile(account) => Ok(account),
            other => unreachable!("mismatched action result: {other:?}"),
        }
    }
}
