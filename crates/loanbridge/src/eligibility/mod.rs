//! Loan eligibility engine.
//!
//! Two caps are computed per check and the borrower gets the conservative
//! one: a FOIR cap (how much EMI the income can carry after existing
//! obligations, converted to principal by inverse amortization) and a
//! multiplier cap (bank-style income multiple looked up by employment type,
//! risk band, salary band, and tenor).

pub mod amortization;
mod domain;
mod policy;
mod rules;
pub mod tables;

pub use domain::{
    BorrowerProfile, EmploymentType, LoanRequest, LoanType, LoanTypeConfig, RiskBand, SalaryBand,
};
pub use tables::{MultiplierTable, RateBook, TenorLadder, ANCHOR_TENORS};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless evaluator applying a [`RateBook`] to borrower profiles.
pub struct EligibilityEngine {
    book: RateBook,
}

impl Default for EligibilityEngine {
    fn default() -> Self {
        Self::new(RateBook::builtin())
    }
}

impl EligibilityEngine {
    pub fn new(book: RateBook) -> Self {
        Self { book }
    }

    pub fn book(&self) -> &RateBook {
        &self.book
    }

    pub fn loan_config(&self, loan_type: LoanType) -> Option<&LoanTypeConfig> {
        self.book.loan_config(loan_type)
    }

    /// Compute payment figures, both affordability caps, and the verdict.
    ///
    /// Never fails and never returns non-finite numbers: degenerate inputs
    /// (zero tenor, zero or negative rate, negative salary) degrade to a
    /// zero-eligibility ineligible result, because this is invoked from a
    /// live form on every input change.
    pub fn evaluate(&self, profile: &BorrowerProfile, request: &LoanRequest) -> EligibilityResult {
        let caps = rules::assess(profile, request, &self.book);
        let (eligible, message) = policy::verdict(request, &caps);

        debug!(
            loan_type = request.loan_type.label(),
            amount = request.amount,
            cap_by_foir = caps.cap_by_foir,
            cap_by_multiplier = caps.cap_by_multiplier,
            eligible,
            "eligibility evaluated"
        );

        EligibilityResult {
            monthly_payment: caps.monthly_payment,
            total_payment: caps.total_payment,
            total_interest: caps.total_interest,
            max_eligible_amount: caps.max_eligible_amount,
            eligible,
            message,
        }
    }
}

/// Purely derived verdict for one check; carries no identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub max_eligible_amount: f64,
    pub eligible: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employers::EmployerCategory;

    fn profile(salary: f64, obligations: f64) -> BorrowerProfile {
        BorrowerProfile {
            monthly_salary: salary,
            employer_category: EmployerCategory::A,
            employment_type: EmploymentType::Salaried,
            risk_band: RiskBand::Prime,
            existing_monthly_obligations: obligations,
        }
    }

    fn personal(amount: f64, tenor: u32, rate: f64) -> LoanRequest {
        LoanRequest {
            loan_type: LoanType::Personal,
            amount,
            tenor_months: tenor,
            annual_rate_percent: rate,
        }
    }

    #[test]
    fn clean_profile_below_cap_is_eligible() {
        let engine = EligibilityEngine::default();
        let result = engine.evaluate(&profile(50_000.0, 0.0), &personal(300_000.0, 36, 10.0));

        assert!(result.eligible);
        assert!(result.message.starts_with("eligible for up to"));
        assert!(result.monthly_payment > 0.0);
        // 50k x multiplier 18 binds below the FOIR cap here.
        assert_eq!(result.max_eligible_amount, 900_000.0);
    }

    #[test]
    fn payment_totals_satisfy_amortization_identities() {
        let engine = EligibilityEngine::default();
        for (amount, tenor, rate) in [
            (100_000.0, 12u32, 8.0),
            (300_000.0, 36, 10.0),
            (2_500_000.0, 240, 7.25),
        ] {
            let result = engine.evaluate(&profile(90_000.0, 0.0), &personal(amount, tenor, rate));
            let total = result.monthly_payment * f64::from(tenor);
            assert!((result.total_payment - total).abs() < 1e-6);
            assert!((result.total_interest - (total - amount)).abs() < 1e-6);
        }
    }

    #[test]
    fn exhausted_obligations_beat_any_requested_amount() {
        let engine = EligibilityEngine::default();
        // FOIR allowance at 30k salary is 13,500; obligations exceed it.
        for amount in [1_000.0, 100_000.0, 5_000_000.0] {
            let result = engine.evaluate(&profile(30_000.0, 20_000.0), &personal(amount, 36, 10.0));
            assert!(!result.eligible);
            assert_eq!(result.message, super::policy::OBLIGATIONS_EXHAUSTED);
        }
    }

    #[test]
    fn foir_cap_binds_when_obligations_are_heavy() {
        let engine = EligibilityEngine::default();
        let result = engine.evaluate(&profile(50_000.0, 25_000.0), &personal(200_000.0, 36, 10.0));

        // max EMI = 50k * 0.65 - 25k = 7,500; at 10%/36m that services
        // roughly 2.32 lakh, well under the 9 lakh multiplier cap.
        assert!(result.max_eligible_amount > 220_000.0);
        assert!(result.max_eligible_amount < 240_000.0);
        assert_eq!(result.max_eligible_amount.fract(), 0.0, "cap is floored");
        assert!(result.eligible);
    }

    #[test]
    fn requested_amount_above_cap_is_rejected_with_cap_in_message() {
        let engine = EligibilityEngine::default();
        let result =
            engine.evaluate(&profile(50_000.0, 0.0), &personal(2_000_000.0, 36, 10.0));

        assert!(!result.eligible);
        assert!(result.message.contains("exceeds eligibility of"));
        assert!(result.message.contains("900000"));
    }

    #[test]
    fn zero_multiplier_means_not_offered() {
        let engine = EligibilityEngine::default();
        let borrower = BorrowerProfile {
            employment_type: EmploymentType::Retired,
            ..profile(80_000.0, 0.0)
        };
        // Retired borrowers have no 60-month card; the multiplier is 0 and
        // the verdict must be ineligible rather than a zero-amount offer.
        let result = engine.evaluate(&borrower, &personal(100_000.0, 60, 10.0));
        assert!(!result.eligible);
        assert_eq!(result.max_eligible_amount, 0.0);
    }

    #[test]
    fn longer_tenor_never_hurts_a_salaried_borrower() {
        let engine = EligibilityEngine::default();
        let borrower = profile(50_000.0, 0.0);

        let mut previous_payment = f64::MAX;
        let mut previous_cap = 0.0_f64;
        for tenor in [12u32, 24, 36, 48, 60] {
            let result = engine.evaluate(&borrower, &personal(300_000.0, tenor, 10.0));
            assert!(result.monthly_payment < previous_payment);
            assert!(result.max_eligible_amount >= previous_cap);
            previous_payment = result.monthly_payment;
            previous_cap = result.max_eligible_amount;
        }
    }

    #[test]
    fn degenerate_inputs_never_panic_and_render_ineligible() {
        let engine = EligibilityEngine::default();

        let zero_tenor = engine.evaluate(&profile(50_000.0, 0.0), &personal(100_000.0, 0, 10.0));
        assert_eq!(zero_tenor.monthly_payment, 0.0);
        assert!(!zero_tenor.eligible);

        let zero_rate = engine.evaluate(&profile(50_000.0, 0.0), &personal(100_000.0, 36, 0.0));
        assert_eq!(zero_rate.monthly_payment, 0.0);
        assert_eq!(zero_rate.total_interest, 0.0);
        assert!(!zero_rate.eligible);

        let negative_salary =
            engine.evaluate(&profile(-10_000.0, 0.0), &personal(100_000.0, 36, 10.0));
        assert!(!negative_salary.eligible);
        assert_eq!(negative_salary.message, super::policy::OBLIGATIONS_EXHAUSTED);

        let negative_rate =
            engine.evaluate(&profile(50_000.0, 0.0), &personal(100_000.0, 36, -4.0));
        assert!(!negative_rate.eligible);
        assert!(negative_rate.monthly_payment.is_finite());
    }
}
