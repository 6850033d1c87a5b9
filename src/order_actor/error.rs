//! Error types for the Order actor.

use crate::account_actor::AccountError;
use crate::dish_actor::DishError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order, dish, account, or bid was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The status transition or bid operation is not permitted from the
    /// current state.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The customer's balance cannot cover a debit. The warning issued
    /// alongside this failure is intentional and not rolled back.
    #[error("Insufficient balance: need ${needed:.2} but have ${available:.2}")]
    InsufficientFunds { needed: f64, available: f64 },

    /// The acting account's identity or role does not permit the operation.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The payload failed validation (out-of-range rating, empty memo,
    /// non-positive bid).
    #[error("Validation error: {0}")]
    Validation(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    Actor(String),
}

// Cross-actor failures keep their place in the error taxonomy: an account
// InsufficientFunds surfaces as an order InsufficientFunds, not as an opaque
// wrapper.

impl From<AccountError> for OrderError {
    fn from(e: AccountError) -> Self {
        match e {
            AccountError::NotFound(id) => OrderError::NotFound(id),
            AccountError::InsufficientFunds { needed, available } => {
                OrderError::InsufficientFunds { needed, available }
            }
            AccountError::Forbidden(msg) => OrderError::Forbidden(msg),
            AccountError::InvalidState(msg) => OrderError::InvalidState(msg),
            AccountError::Validation(msg) => OrderError::Validation(msg),
            AccountError::Actor(msg) => OrderError::Actor(msg),
        }
    }
}

impl From<DishError> for OrderError {
    fn from(e: DishError) -> Self {
        match e {
            DishError::NotFound(id) => OrderError::NotFound(id),
            DishError::Validation(msg) => OrderError::Validation(msg),
            DishError::Actor(msg) => OrderError::Actor(msg),
        }
    }
}
