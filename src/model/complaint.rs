//! Complaints and compliments feeding the reputation engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a filing counts against or in favor of its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplaintKind {
    Complaint,
    Compliment,
}

/// The kind of account a filing targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    Chef,
    Delivery,
    Customer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplaintStatus {
    Pending,
    Disputed,
    Resolved,
}

/// Manager verdict on a resolved complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisputeResolution {
    /// The complaint stands; the target may be penalized.
    Upheld,
    /// The complaint was judged false; the complainant is penalized and the
    /// counters added at filing time are reversed.
    Dismissed,
}

/// A filed complaint or compliment.
///
/// `weight` records what was applied to the target's counters at filing
/// time (2 for VIP filers, 1 otherwise), so a later reversal undoes exactly
/// that amount even if the filer's role has since changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: String,
    pub complainant_id: String,
    pub target_id: String,
    pub target_type: TargetType,
    pub complaint_type: ComplaintKind,
    pub description: String,
    pub status: ComplaintStatus,
    pub weight: u32,
    pub created_at: DateTime<Utc>,
    pub resolved_by: Option<String>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub dispute_resolution: Option<DisputeResolution>,
}

/// Payload for filing a complaint or compliment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintCreate {
    pub complainant_id: String,
    pub target_id: String,
    pub target_type: TargetType,
    pub kind: ComplaintKind,
    pub description: String,
}
