//! Error types for the Account actor.

use thiserror::Error;

/// Errors that can occur during account operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccountError {
    /// The requested account was not found.
    #[error("Account not found: {0}")]
    NotFound(String),

    /// The balance cannot cover a debit. Filing this error has already cost
    /// the account a warning; that side effect is not rolled back.
    #[error("Insufficient balance: need ${needed:.2} but have ${available:.2}")]
    InsufficientFunds { needed: f64, available: f64 },

    /// The acting or target account's role does not permit the operation.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The account is not in a state that permits the operation.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The payload failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    Actor(String),
}
