use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::store::{LeadId, LeadRecord, LeadStore, LeadStoreError};
use crate::eligibility::{
    BorrowerProfile, EligibilityEngine, EligibilityResult, EmploymentType, LoanRequest, LoanType,
    RiskBand,
};
use crate::employers::{CategoryMatch, EmployerDirectory, ImportError, ImportStats};

/// Raw check inputs as collected by the form. The interest rate is optional;
/// when absent the product's base rate applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckSubmission {
    pub employer_name: String,
    pub monthly_salary: f64,
    pub employment_type: EmploymentType,
    pub risk_band: RiskBand,
    #[serde(default)]
    pub existing_monthly_obligations: f64,
    pub loan_type: LoanType,
    pub amount: f64,
    pub tenor_months: u32,
    #[serde(default)]
    pub annual_rate_percent: Option<f64>,
}

/// One completed check: the classification, the verdict, and the stored lead.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub lead_id: LeadId,
    pub employer: CategoryMatch,
    pub result: EligibilityResult,
}

static LEAD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_lead_id() -> LeadId {
    let id = LEAD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    LeadId(format!("lead-{id:06}"))
}

/// Service composing the employer directory, the eligibility engine, and
/// the lead store behind one facade for the routes and the CLI.
pub struct LeadFunnelService<S> {
    directory: Arc<EmployerDirectory>,
    engine: Arc<EligibilityEngine>,
    store: Arc<S>,
}

impl<S> LeadFunnelService<S>
where
    S: LeadStore + 'static,
{
    pub fn new(directory: Arc<EmployerDirectory>, engine: Arc<EligibilityEngine>, store: Arc<S>) -> Self {
        Self {
            directory,
            engine,
            store,
        }
    }

    pub fn directory(&self) -> &EmployerDirectory {
        &self.directory
    }

    pub fn engine(&self) -> &EligibilityEngine {
        &self.engine
    }

    /// Run the full funnel step: classify the employer, evaluate the
    /// request, persist the lead, and return everything the UI renders.
    pub fn check(&self, submission: CheckSubmission) -> Result<CheckOutcome, FunnelError> {
        let employer = self.directory.classify(&submission.employer_name);

        let annual_rate_percent = submission.annual_rate_percent.unwrap_or_else(|| {
            self.engine
                .loan_config(submission.loan_type)
                .map(|config| config.base_rate)
                .unwrap_or_default()
        });

        let profile = BorrowerProfile {
            monthly_salary: submission.monthly_salary,
            employer_category: employer.category,
            employment_type: submission.employment_type,
            risk_band: submission.risk_band,
            existing_monthly_obligations: submission.existing_monthly_obligations,
        };
        let request = LoanRequest {
            loan_type: submission.loan_type,
            amount: submission.amount,
            tenor_months: submission.tenor_months,
            annual_rate_percent,
        };

        let result = self.engine.evaluate(&profile, &request);

        let record = LeadRecord {
            lead_id: next_lead_id(),
            employer_name: submission.employer_name,
            employer_category: employer.category,
            profile,
            request,
            result,
            submitted_at: Utc::now(),
        };
        let stored = self.store.insert(record)?;

        info!(
            lead_id = %stored.lead_id.0,
            category = stored.employer_category.label(),
            eligible = stored.result.eligible,
            "lead captured"
        );

        Ok(CheckOutcome {
            lead_id: stored.lead_id,
            employer,
            result: stored.result,
        })
    }

    pub fn classify(&self, name: &str) -> CategoryMatch {
        self.directory.classify(name)
    }

    pub fn suggest(&self, input: &str, limit: usize) -> Vec<String> {
        self.directory.suggest(input, limit)
    }

    pub fn import_csv<R: std::io::Read>(&self, reader: R) -> Result<ImportStats, FunnelError> {
        Ok(self.directory.import_csv(reader)?)
    }

    pub fn recent_leads(&self, limit: usize) -> Result<Vec<LeadRecord>, FunnelError> {
        Ok(self.store.recent(limit)?)
    }
}

/// Error raised by the funnel service.
#[derive(Debug, thiserror::Error)]
pub enum FunnelError {
    #[error(transparent)]
    Store(#[from] LeadStoreError),
    #[error(transparent)]
    Import(#[from] ImportError),
}
