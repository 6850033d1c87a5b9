//! Account-specific resource logic and entity implementation.

pub mod entity;
pub mod error;

pub use entity::{AccountAction, AccountActionResult, OrderCharge};
pub use error::*;

use crate::clients::AccountClient;
use crate::framework::ResourceActor;
use crate::model::Account;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new Account actor and its client.
pub fn new() -> (ResourceActor<Account>, AccountClient) {
    let account_id_counter = Arc::new(AtomicU64::new(1));
    let next_account_id = move || {
        let id = account_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("account_{}", id)
    };

    let (actor, generic_client) = ResourceActor::new(32, next_account_id);
    let client = AccountClient::new(generic_client);

    (actor, client)
}
