use super::domain::LoanRequest;
use super::rules::CapBreakdown;

/// Distinct from "amount too high": the borrower's existing EMIs already
/// consume the whole FOIR allowance, so no amount would qualify.
pub(crate) const OBLIGATIONS_EXHAUSTED: &str =
    "existing obligations exceed the maximum allowed affordability ratio for this loan type";

/// Verdict composition. Message priority: exhausted affordability first,
/// then approval, then amount-too-high.
pub(crate) fn verdict(request: &LoanRequest, caps: &CapBreakdown) -> (bool, String) {
    if caps.max_emi_foir <= 0.0 {
        return (false, OBLIGATIONS_EXHAUSTED.to_string());
    }

    if request.amount <= caps.max_eligible_amount {
        (
            true,
            format!("eligible for up to \u{20b9}{:.0}", caps.max_eligible_amount),
        )
    } else {
        (
            false,
            format!(
                "requested amount exceeds eligibility of \u{20b9}{:.0}",
                caps.max_eligible_amount
            ),
        )
    }
}
