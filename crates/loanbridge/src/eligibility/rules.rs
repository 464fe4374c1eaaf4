use super::amortization;
use super::domain::{BorrowerProfile, LoanRequest, SalaryBand};
use super::tables::RateBook;

/// Intermediate numbers behind one eligibility verdict, kept so the policy
/// layer and the engine tests can see every cap separately.
pub(crate) struct CapBreakdown {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub max_emi_foir: f64,
    pub cap_by_foir: f64,
    pub cap_by_multiplier: f64,
    pub max_eligible_amount: f64,
}

pub(crate) fn assess(
    profile: &BorrowerProfile,
    request: &LoanRequest,
    book: &RateBook,
) -> CapBreakdown {
    let rate = amortization::monthly_rate(request.annual_rate_percent);

    let monthly_payment = amortization::emi(request.amount, rate, request.tenor_months);
    let (total_payment, total_interest) = if monthly_payment > 0.0 {
        let total = monthly_payment * f64::from(request.tenor_months);
        (total, total - request.amount)
    } else {
        (0.0, 0.0)
    };

    // Degenerate form state (negative or NaN numbers) is treated as zero so
    // the verdict stays defined.
    let salary = sanitize(profile.monthly_salary);
    let obligations = sanitize(profile.existing_monthly_obligations);
    let band = SalaryBand::of(salary);

    let max_emi_foir = salary * book.foir.fraction(band) - obligations;
    let cap_by_foir =
        amortization::principal_supported_by(max_emi_foir.max(0.0), rate, request.tenor_months);

    let multiplier = book.multipliers.multiplier(
        profile.employment_type,
        profile.risk_band,
        band,
        request.tenor_months,
    );
    let cap_by_multiplier = salary * multiplier;

    // The two caps embody different lending policies; the borrower gets the
    // conservative one.
    let max_eligible_amount = cap_by_foir.min(cap_by_multiplier).max(0.0).floor();

    CapBreakdown {
        monthly_payment,
        total_payment,
        total_interest,
        max_emi_foir,
        cap_by_foir,
        cap_by_multiplier,
        max_eligible_amount,
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
