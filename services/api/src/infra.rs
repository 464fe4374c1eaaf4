use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use loanbridge::eligibility::{EmploymentType, LoanType, RiskBand};
use loanbridge::funnel::{LeadId, LeadRecord, LeadStore, LeadStoreError};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Lead persistence for single-node deployments. Records are kept in
/// insertion order so `recent` can return the newest leads first.
#[derive(Default, Clone)]
pub(crate) struct InMemoryLeadStore {
    records: Arc<Mutex<HashMap<LeadId, LeadRecord>>>,
    order: Arc<Mutex<Vec<LeadId>>>,
}

impl LeadStore for InMemoryLeadStore {
    fn insert(&self, record: LeadRecord) -> Result<LeadRecord, LeadStoreError> {
        let mut guard = self.records.lock().map_err(poisoned)?;
        if guard.contains_key(&record.lead_id) {
            return Err(LeadStoreError::Conflict);
        }
        guard.insert(record.lead_id.clone(), record.clone());
        self.order.lock().map_err(poisoned)?.push(record.lead_id.clone());
        Ok(record)
    }

    fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, LeadStoreError> {
        let guard = self.records.lock().map_err(poisoned)?;
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<LeadRecord>, LeadStoreError> {
        let records = self.records.lock().map_err(poisoned)?;
        let order = self.order.lock().map_err(poisoned)?;
        Ok(order
            .iter()
            .rev()
            .take(limit)
            .filter_map(|id| records.get(id).cloned())
            .collect())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> LeadStoreError {
    LeadStoreError::Unavailable("lead store mutex poisoned".to_string())
}

pub(crate) fn parse_loan_type(raw: &str) -> Result<LoanType, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "personal" => Ok(LoanType::Personal),
        "home" => Ok(LoanType::Home),
        "business" => Ok(LoanType::Business),
        "doctor" => Ok(LoanType::Doctor),
        other => Err(format!(
            "unknown loan type '{other}' (expected personal, home, business, or doctor)"
        )),
    }
}

pub(crate) fn parse_employment_type(raw: &str) -> Result<EmploymentType, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "salaried" => Ok(EmploymentType::Salaried),
        "government" => Ok(EmploymentType::Government),
        "self_employed" | "self-employed" => Ok(EmploymentType::SelfEmployed),
        "business_owner" | "business-owner" => Ok(EmploymentType::BusinessOwner),
        "retired" => Ok(EmploymentType::Retired),
        other => Err(format!(
            "unknown employment type '{other}' (expected salaried, government, self_employed, business_owner, or retired)"
        )),
    }
}

pub(crate) fn parse_risk_band(raw: &str) -> Result<RiskBand, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "prime" => Ok(RiskBand::Prime),
        "standard" => Ok(RiskBand::Standard),
        "subprime" => Ok(RiskBand::Subprime),
        other => Err(format!(
            "unknown risk band '{other}' (expected prime, standard, or subprime)"
        )),
    }
}
