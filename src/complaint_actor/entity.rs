//! `ActorEntity` implementation for [`Complaint`]: filing, disputing, and
//! manager resolution.
//!
//! The target's counters move at filing time (inside `on_create`), so a
//! complaint that never gets resolved still counts. Resolution either
//! confirms the standing effect (upheld) or unwinds it and penalizes the
//! filer (dismissed).

use crate::clients::AccountClient;
use crate::complaint_actor::ComplaintError;
use crate::framework::ActorEntity;
use crate::model::{
    Complaint, ComplaintCreate, ComplaintKind, ComplaintStatus, DisputeResolution, Role,
    TargetType,
};
use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

/// Custom actions for Complaint entities.
#[derive(Debug, Clone)]
pub enum ComplaintAction {
    /// The target contests a pending complaint, blocking silent resolution
    /// until a manager rules on it.
    Dispute { actor_id: String },
    /// Manager verdict: uphold the filing or dismiss it as false.
    Resolve {
        manager_id: String,
        outcome: DisputeResolution,
    },
}

/// Results from ComplaintActions - variants match 1:1 with ComplaintAction.
#[derive(Debug, Clone)]
pub enum ComplaintActionResult {
    Dispute(Complaint),
    Resolve(Complaint),
}

#[async_trait]
impl ActorEntity for Complaint {
    type Id = String;
    type CreateParams = ComplaintCreate;
    type UpdateParams = ();
    type Action = ComplaintAction;
    type ActionResult = ComplaintActionResult;
    type Context = AccountClient;
    type Error = ComplaintError;

    fn from_create_params(id: String, params: ComplaintCreate) -> Result<Self, ComplaintError> {
        if params.complainant_id == params.target_id {
            return Err(ComplaintError::Validation(
                "cannot file against yourself".into(),
            ));
        }
        Ok(Self {
            id,
            complainant_id: params.complainant_id,
            target_id: params.target_id,
            target_type: params.target_type,
            complaint_type: params.kind,
            description: params.description,
            status: ComplaintStatus::Pending,
            // Set from the filer's role in on_create.
            weight: 0,
            created_at: Utc::now(),
            resolved_by: None,
            resolved_at: None,
            dispute_resolution: None,
        })
    }

    /// Filing: check who may file against whom, fix the weight from the
    /// filer's current role, and move the target's counters immediately.
    async fn on_create(&mut self, accounts: &AccountClient) -> Result<(), ComplaintError> {
        let filer = accounts.fetch(&self.complainant_id).await?;
        let target = accounts.fetch(&self.target_id).await?;

        match filer.role {
            Role::Customer | Role::Vip => {}
            // Couriers may only file against customers.
            Role::Delivery if self.target_type == TargetType::Customer => {}
            Role::Delivery => {
                return Err(ComplaintError::Forbidden(
                    "couriers can only file against customers".into(),
                ));
            }
            other => {
                return Err(ComplaintError::Forbidden(format!(
                    "role {other} cannot file complaints"
                )));
            }
        }

        let type_matches = match self.target_type {
            TargetType::Chef => target.role == Role::Chef,
            TargetType::Delivery => target.role == Role::Delivery,
            TargetType::Customer => target.role.is_customer_tier(),
        };
        if !type_matches {
            return Err(ComplaintError::Validation(format!(
                "target {} does not hold the {} role",
                target.id,
                match self.target_type {
                    TargetType::Chef => "chef",
                    TargetType::Delivery => "delivery",
                    TargetType::Customer => "customer",
                }
            )));
        }

        self.weight = if filer.role == Role::Vip { 2 } else { 1 };
        accounts
            .apply_feedback(&self.target_id, self.complaint_type, self.weight)
            .await?;

        info!(
            complaint = %self.id,
            filer = %self.complainant_id,
            target = %self.target_id,
            weight = self.weight,
            "Filed"
        );
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &AccountClient) -> Result<(), ComplaintError> {
        Err(ComplaintError::InvalidState(
            "complaints cannot be edited after filing".into(),
        ))
    }

    async fn handle_action(
        &mut self,
        action: ComplaintAction,
        accounts: &AccountClient,
    ) -> Result<ComplaintActionResult, ComplaintError> {
        match action {
            ComplaintAction::Dispute { actor_id } => {
                if actor_id != self.target_id {
                    return Err(ComplaintError::Forbidden(
                        "only the target may dispute a complaint".into(),
                    ));
                }
                // One dispute per complaint, and only before resolution.
                if self.status != ComplaintStatus::Pending {
                    return Err(ComplaintError::InvalidState(format!(
                        "complaint is {:?}, not pending",
                        self.status
                    )));
                }
                self.status = ComplaintStatus::Disputed;
                Ok(ComplaintActionResult::Dispute(self.clone()))
            }
            ComplaintAction::Resolve {
                manager_id,
                outcome,
            } => {
                self.resolve(&manager_id, outcome, accounts).await?;
                Ok(ComplaintActionResult::Resolve(self.clone()))
            }
        }
    }
}

impl Complaint {
    async fn resolve(
        &mut self,
        manager_id: &str,
        outcome: DisputeResolution,
        accounts: &AccountClient,
    ) -> Result<(), ComplaintError> {
        let manager = accounts.fetch(manager_id).await?;
        if manager.role != Role::Manager {
            return Err(ComplaintError::Forbidden(
                "only managers resolve complaints".into(),
            ));
        }
        if self.status == ComplaintStatus::Resolved {
            return Err(ComplaintError::InvalidState(
                "complaint is already resolved".into(),
            ));
        }

        match outcome {
            DisputeResolution::Dismissed => {
                // Unwind the counters this filing added, then penalize the
                // filer for the false report.
                accounts
                    .reverse_feedback(&self.target_id, self.complaint_type, self.weight)
                    .await?;
                let filer = accounts.fetch(&self.complainant_id).await?;
                if filer.role.is_customer_tier() {
                    accounts.add_warning(&self.complainant_id).await?;
                } else if filer.role.is_employee() {
                    accounts
                        .apply_feedback(&self.complainant_id, ComplaintKind::Complaint, 1)
                        .await?;
                }
            }
            DisputeResolution::Upheld => {
                // Customer-tier targets take a warning; employee targets are
                // already covered by the complaint-count demotion check that
                // ran at filing time.
                if self.complaint_type == ComplaintKind::Complaint {
                    let target = accounts.fetch(&self.target_id).await?;
                    if target.role.is_customer_tier() {
                        accounts.add_warning(&self.target_id).await?;
                    }
                }
            }
        }

        self.status = ComplaintStatus::Resolved;
        self.resolved_by = Some(manager_id.to_string());
        self.resolved_at = Some(Utc::now());
        self.dispute_resolution = Some(outcome);
        info!(complaint = %self.id, ?outcome, by = %manager_id, "Resolved");
        Ok(())
    }
}
