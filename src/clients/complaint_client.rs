//! Typed client for the Complaint actor.

use crate::complaint_actor::{ComplaintAction, ComplaintActionResult, ComplaintError};
use crate::framework::{ActorError, ResourceClient};
use crate::model::{Complaint, ComplaintCreate, ComplaintStatus, DisputeResolution};

/// Client handle for filing and resolving complaints and compliments.
#[derive(Clone)]
pub struct ComplaintClient {
    inner: ResourceClient<Complaint>,
}

impl ComplaintClient {
    pub fn new(inner: ResourceClient<Complaint>) -> Self {
        Self { inner }
    }

    fn lift(err: ActorError<ComplaintError>) -> ComplaintError {
        match err {
            ActorError::Entity(e) => e,
            ActorError::NotFound(id) => ComplaintError::NotFound(id),
            other => ComplaintError::Actor(other.to_string()),
        }
    }

    /// Files a complaint or compliment. The target's counters move before
    /// this returns.
    pub async fn file(&self, params: ComplaintCreate) -> Result<Complaint, ComplaintError> {
        let id = self.inner.create(params).await.map_err(Self::lift)?;
        self.fetch(&id).await
    }

    pub async fn get(&self, id: &str) -> Result<Option<Complaint>, ComplaintError> {
        self.inner.get(id.to_string()).await.map_err(Self::lift)
    }

    /// Like [`get`](Self::get), but absence is an error.
    pub async fn fetch(&self, id: &str) -> Result<Complaint, ComplaintError> {
        self.get(id)
            .await?
            .ok_or_else(|| ComplaintError::NotFound(id.to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Complaint>, ComplaintError> {
        self.inner.list().await.map_err(Self::lift)
    }

    /// Filings still awaiting a manager verdict, oldest first.
    pub async fn open(&self) -> Result<Vec<Complaint>, ComplaintError> {
        let mut complaints: Vec<Complaint> = self
            .list()
            .await?
            .into_iter()
            .filter(|c| c.status != ComplaintStatus::Resolved)
            .collect();
        complaints.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(complaints)
    }

    async fn act(
        &self,
        id: &str,
        action: ComplaintAction,
    ) -> Result<ComplaintActionResult, ComplaintError> {
        self.inner
            .perform_action(id.to_string(), action)
            .await
            .map_err(Self::lift)
    }

    pub async fn dispute(&self, id: &str, actor_id: &str) -> Result<Complaint, ComplaintError> {
        match self
            .act(
                id,
                ComplaintAction::Dispute {
                    actor_id: actor_id.to_string(),
                },
            )
            .await?
        {
            ComplaintActionResult::Dispute(complaint) => Ok(complaint),
            other => unreachable!("mismatched action result: {other:?}"),
        }
    }

    pub async fn resolve(
        &self,
        id: &str,
        manager_id: &str,
        outcome: DisputeResolution,
    ) -> Result<Complaint, ComplaintError> {
        match self
            .act(
                id,
                ComplaintAction::Resolve {
                    manager_id: manager_id.to_string(),
                    outcome,
                },
            )
            .await?
        {
            ComplaintActionResult::Resolve(complaint) => Ok(complaint),
            other => unreachable!("mismatched action result: {other:?}"),
        }
    }
}
