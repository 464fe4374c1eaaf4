use serde::{Deserialize, Serialize};

use crate::employers::EmployerCategory;

/// Loan products offered through the funnel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LoanType {
    Personal,
    Home,
    Business,
    Doctor,
}

impl LoanType {
    pub const fn label(self) -> &'static str {
        match self {
            LoanType::Personal => "personal",
            LoanType::Home => "home",
            LoanType::Business => "business",
            LoanType::Doctor => "doctor",
        }
    }
}

/// Product bounds used by the UI to clamp its sliders. The engine itself
/// tolerates out-of-range values rather than validating against these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTypeConfig {
    pub min_amount: f64,
    pub max_amount: f64,
    pub min_term_months: u32,
    pub max_term_months: u32,
    pub base_rate: f64,
    pub amount_step: f64,
}

/// Employment segment from the application form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    Salaried,
    Government,
    SelfEmployed,
    BusinessOwner,
    Retired,
}

/// Secondary borrower-risk classification, distinct from the employer
/// category; selects among multiplier sub-tables for an employment type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Prime,
    Standard,
    Subprime,
}

/// Bucketed monthly income, the lookup key for FOIR and multiplier tables.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SalaryBand {
    Under25K,
    From25To35K,
    From35To38K,
    From38To40K,
    From40To50K,
    From50To75K,
    Above75K,
}

impl SalaryBand {
    /// Total over all inputs: non-finite or negative salaries land in the
    /// lowest band so degenerate form state still produces a verdict.
    pub fn of(monthly_salary: f64) -> Self {
        if !monthly_salary.is_finite() || monthly_salary < 25_000.0 {
            SalaryBand::Under25K
        } else if monthly_salary < 35_000.0 {
            SalaryBand::From25To35K
        } else if monthly_salary < 38_000.0 {
            SalaryBand::From35To38K
        } else if monthly_salary < 40_000.0 {
            SalaryBand::From38To40K
        } else if monthly_salary < 50_000.0 {
            SalaryBand::From40To50K
        } else if monthly_salary < 75_000.0 {
            SalaryBand::From50To75K
        } else {
            SalaryBand::Above75K
        }
    }
}

/// Borrower snapshot consumed by one eligibility check. Built fresh per
/// call by the UI; never persisted by the engine itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorrowerProfile {
    pub monthly_salary: f64,
    pub employer_category: EmployerCategory,
    pub employment_type: EmploymentType,
    pub risk_band: RiskBand,
    pub existing_monthly_obligations: f64,
}

/// Requested loan parameters. Bounds checking against [`LoanTypeConfig`]
/// belongs to the calling UI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub loan_type: LoanType,
    pub amount: f64,
    pub tenor_months: u32,
    pub annual_rate_percent: f64,
}
