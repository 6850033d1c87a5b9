//! Complaint-specific resource logic and entity implementation.

pub mod entity;
pub mod error;

pub use entity::{ComplaintAction, ComplaintActionResult};
pub use error::*;

use crate::clients::ComplaintClient;
use crate::framework::ResourceActor;
use crate::model::Complaint;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new Complaint actor and its client.
pub fn new() -> (ResourceActor<Complaint>, ComplaintClient) {
    let complaint_id_counter = Arc::new(AtomicU64::new(1));
    let next_complaint_id = move || {
        let id = complaint_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("complaint_{}", id)
    };

    let (actor, generic_client) = ResourceActor::new(32, next_complaint_id);
    let client = ComplaintClient::new(generic_client);

    (actor, client)
}
