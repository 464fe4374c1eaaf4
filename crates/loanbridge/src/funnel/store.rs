use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::eligibility::{BorrowerProfile, EligibilityResult, LoanRequest};
use crate::employers::EmployerCategory;

/// Identifier wrapper for captured leads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadId(pub String);

/// What the funnel persists after an eligibility check: the inputs, the
/// verdict, and when it happened. The engine itself never touches storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub lead_id: LeadId,
    pub employer_name: String,
    pub employer_category: EmployerCategory,
    pub profile: BorrowerProfile,
    pub request: LoanRequest,
    pub result: EligibilityResult,
    pub submitted_at: DateTime<Utc>,
}

impl LeadRecord {
    pub fn view(&self) -> LeadView {
        LeadView {
            lead_id: self.lead_id.clone(),
            employer_name: self.employer_name.clone(),
            employer_category: self.employer_category.label(),
            eligible: self.result.eligible,
            max_eligible_amount: self.result.max_eligible_amount,
            message: self.result.message.clone(),
            submitted_at: self.submitted_at,
        }
    }
}

/// Sanitized lead representation for API responses and the admin table.
#[derive(Debug, Clone, Serialize)]
pub struct LeadView {
    pub lead_id: LeadId,
    pub employer_name: String,
    pub employer_category: &'static str,
    pub eligible: bool,
    pub max_eligible_amount: f64,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

/// Storage abstraction so the funnel service can be exercised in isolation;
/// production deployments back this with the hosted database service.
pub trait LeadStore: Send + Sync {
    fn insert(&self, record: LeadRecord) -> Result<LeadRecord, LeadStoreError>;
    fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, LeadStoreError>;
    /// Most recent leads first, at most `limit` of them.
    fn recent(&self, limit: usize) -> Result<Vec<LeadRecord>, LeadStoreError>;
}

/// Error enumeration for lead-store failures.
#[derive(Debug, thiserror::Error)]
pub enum LeadStoreError {
    #[error("lead already exists")]
    Conflict,
    #[error("lead store unavailable: {0}")]
    Unavailable(String),
}
