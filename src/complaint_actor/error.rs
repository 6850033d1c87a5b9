//! Error types for the Complaint actor.

use crate::account_actor::AccountError;
use thiserror::Error;

/// Errors that can occur while filing or resolving complaints.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ComplaintError {
    /// The complaint or a referenced account was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The complaint is not in a state that permits the operation.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The acting account may not perform this operation.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The filing payload failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    Actor(String),
}

impl From<AccountError> for ComplaintError {
    fn from(e: AccountError) -> Self {
        match e {
            AccountError::NotFound(id) => ComplaintError::NotFound(id),
            AccountError::Forbidden(msg) => ComplaintError::Forbidden(msg),
            AccountError::InvalidState(msg) => ComplaintError::InvalidState(msg),
            AccountError::Validation(msg) => ComplaintError::Validation(msg),
            AccountError::InsufficientFunds { needed, available } => ComplaintError::InvalidState(
                format!("balance short: need ${needed:.2}, have ${available:.2}"),
            ),
            AccountError::Actor(msg) => ComplaintError::Actor(msg),
        }
    }
}
