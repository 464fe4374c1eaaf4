//! EMI amortization math.
//!
//! Degenerate inputs (zero or negative rate, zero tenor) resolve to 0 rather
//! than an error or NaN: the calculator runs on every slider move and must
//! always render a number.

/// Per-month rate from an annual percentage.
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

/// Equated monthly installment for `principal` over `tenor_months` at
/// `rate` per month: `p * r / (1 - (1 + r)^-n)`.
pub fn emi(principal: f64, rate: f64, tenor_months: u32) -> f64 {
    if rate <= 0.0 || tenor_months == 0 {
        return 0.0;
    }

    let n = f64::from(tenor_months);
    let payment = principal * rate / (1.0 - (1.0 + rate).powf(-n));
    if payment.is_finite() {
        payment
    } else {
        0.0
    }
}

/// Inverse amortization: the principal a fixed monthly payment can service,
/// `emi * (1 - (1 + r)^-n) / r`. Zero when the rate or tenor is degenerate.
pub fn principal_supported_by(max_emi: f64, rate: f64, tenor_months: u32) -> f64 {
    if rate <= 0.0 || tenor_months == 0 {
        return 0.0;
    }

    let n = f64::from(tenor_months);
    let principal = max_emi * (1.0 - (1.0 + rate).powf(-n)) / rate;
    if principal.is_finite() {
        principal
    } else {
        0.0
    }
}
