//! Bank-style rate and rule tables.
//!
//! A [`RateBook`] bundles the per-product bounds, the FOIR caps keyed by
//! salary band, and the income-multiplier grids keyed by employment type,
//! risk band, salary band, and tenor. The book is a versioned configuration
//! asset: it can be loaded from JSON so rate revisions ship as data, with
//! [`RateBook::builtin`] as the compiled-in default.
//!
//! Loaded tables may be sparse. Lookups are total: a missing salary band
//! falls back to the nearest lower defined band, and a combination with no
//! grid at all yields multiplier 0, which downstream means "not offered".

use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Serialize};

use super::domain::{EmploymentType, LoanType, LoanTypeConfig, RiskBand, SalaryBand};

/// Tenors the multiplier grids are published at; requested tenors snap to
/// the nearest anchor, lower anchor winning ties.
pub const ANCHOR_TENORS: [u32; 5] = [12, 24, 36, 48, 60];

pub(crate) fn nearest_anchor(tenor_months: u32) -> usize {
    let mut best = 0;
    let mut best_distance = i64::MAX;
    for (index, anchor) in ANCHOR_TENORS.iter().enumerate() {
        let distance = (i64::from(tenor_months) - i64::from(*anchor)).abs();
        if distance < best_distance {
            best = index;
            best_distance = distance;
        }
    }
    best
}

/// Multipliers per anchor tenor for one salary band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TenorLadder(pub [f64; 5]);

impl TenorLadder {
    pub fn at(&self, tenor_months: u32) -> f64 {
        self.0[nearest_anchor(tenor_months)]
    }
}

/// Maximum fraction of monthly income allowed toward debt service, by
/// salary band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoirTable {
    caps: BTreeMap<SalaryBand, f64>,
}

impl FoirTable {
    pub fn fraction(&self, band: SalaryBand) -> f64 {
        match self.caps.range(..=band).next_back() {
            Some((_, fraction)) => *fraction,
            None => 0.0,
        }
    }
}

type Grid = BTreeMap<SalaryBand, TenorLadder>;

/// Income-multiplier grids: employment type -> risk band -> salary band ->
/// tenor -> multiplier. A multiplier of 0 means the combination is not
/// offered and must render ineligible, never a zero-amount offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiplierTable {
    grids: BTreeMap<EmploymentType, BTreeMap<RiskBand, Grid>>,
}

impl MultiplierTable {
    pub fn multiplier(
        &self,
        employment: EmploymentType,
        risk: RiskBand,
        band: SalaryBand,
        tenor_months: u32,
    ) -> f64 {
        let Some(grid) = self
            .grids
            .get(&employment)
            .and_then(|by_risk| by_risk.get(&risk))
        else {
            return 0.0;
        };

        match grid.range(..=band).next_back() {
            Some((_, ladder)) => ladder.at(tenor_months),
            None => 0.0,
        }
    }
}

/// The full rule asset consumed by the eligibility engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateBook {
    pub loans: BTreeMap<LoanType, LoanTypeConfig>,
    pub foir: FoirTable,
    pub multipliers: MultiplierTable,
}

impl RateBook {
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    pub fn loan_config(&self, loan_type: LoanType) -> Option<&LoanTypeConfig> {
        self.loans.get(&loan_type)
    }

    /// Compiled-in default book.
    pub fn builtin() -> Self {
        let mut loans = BTreeMap::new();
        loans.insert(
            LoanType::Personal,
            LoanTypeConfig {
                min_amount: 10_000.0,
                max_amount: 500_000.0,
                min_term_months: 12,
                max_term_months: 60,
                base_rate: 10.0,
                amount_step: 10_000.0,
            },
        );
        loans.insert(
            LoanType::Home,
            LoanTypeConfig {
                min_amount: 500_000.0,
                max_amount: 10_000_000.0,
                min_term_months: 60,
                max_term_months: 360,
                base_rate: 7.0,
                amount_step: 100_000.0,
            },
        );
        loans.insert(
            LoanType::Business,
            LoanTypeConfig {
                min_amount: 100_000.0,
                max_amount: 5_000_000.0,
                min_term_months: 12,
                max_term_months: 84,
                base_rate: 8.0,
                amount_step: 100_000.0,
            },
        );
        loans.insert(
            LoanType::Doctor,
            LoanTypeConfig {
                min_amount: 200_000.0,
                max_amount: 2_500_000.0,
                min_term_months: 12,
                max_term_months: 84,
                base_rate: 9.0,
                amount_step: 50_000.0,
            },
        );

        let foir = FoirTable {
            caps: BTreeMap::from([
                (SalaryBand::Under25K, 0.40),
                (SalaryBand::From25To35K, 0.45),
                (SalaryBand::From35To38K, 0.48),
                (SalaryBand::From38To40K, 0.50),
                (SalaryBand::From40To50K, 0.60),
                (SalaryBand::From50To75K, 0.65),
                (SalaryBand::Above75K, 0.70),
            ]),
        };

        let mut grids: BTreeMap<EmploymentType, BTreeMap<RiskBand, Grid>> = BTreeMap::new();

        let salaried_prime = grid(&SALARIED_PRIME);
        let salaried_standard = grid(&SALARIED_STANDARD);
        let salaried_subprime = grid(&SALARIED_SUBPRIME);
        let self_employed_prime = grid(&SELF_EMPLOYED_PRIME);
        let self_employed_standard = grid(&SELF_EMPLOYED_STANDARD);
        let self_employed_subprime = grid(&SELF_EMPLOYED_SUBPRIME);
        let retired_prime = grid(&RETIRED_PRIME);
        let retired_standard = grid(&RETIRED_STANDARD);

        grids.insert(
            EmploymentType::Salaried,
            BTreeMap::from([
                (RiskBand::Prime, salaried_prime.clone()),
                (RiskBand::Standard, salaried_standard.clone()),
                (RiskBand::Subprime, salaried_subprime),
            ]),
        );
        // Government payrolls are underwritten on the salaried card, one
        // risk notch up.
        grids.insert(
            EmploymentType::Government,
            BTreeMap::from([
                (RiskBand::Prime, salaried_prime.clone()),
                (RiskBand::Standard, salaried_prime),
                (RiskBand::Subprime, salaried_standard),
            ]),
        );
        grids.insert(
            EmploymentType::SelfEmployed,
            BTreeMap::from([
                (RiskBand::Prime, self_employed_prime),
                (RiskBand::Standard, self_employed_standard.clone()),
                (RiskBand::Subprime, self_employed_subprime.clone()),
            ]),
        );
        // Business owners ride the self-employed card one notch down;
        // subprime business owners are not offered unsecured products.
        grids.insert(
            EmploymentType::BusinessOwner,
            BTreeMap::from([
                (RiskBand::Prime, self_employed_standard),
                (RiskBand::Standard, self_employed_subprime),
            ]),
        );
        grids.insert(
            EmploymentType::Retired,
            BTreeMap::from([
                (RiskBand::Prime, retired_prime),
                (RiskBand::Standard, retired_standard),
            ]),
        );

        Self {
            loans,
            foir,
            multipliers: MultiplierTable { grids },
        }
    }
}

fn grid(rows: &[(SalaryBand, [f64; 5])]) -> Grid {
    rows.iter()
        .map(|(band, ladder)| (*band, TenorLadder(*ladder)))
        .collect()
}

// Published multiplier cards, rows ordered low to high salary band, columns
// at the anchor tenors 12/24/36/48/60.

const SALARIED_PRIME: [(SalaryBand, [f64; 5]); 7] = [
    (SalaryBand::Under25K, [4.0, 6.0, 8.0, 9.0, 10.0]),
    (SalaryBand::From25To35K, [5.0, 8.0, 10.0, 11.0, 12.0]),
    (SalaryBand::From35To38K, [6.0, 9.0, 11.0, 12.0, 13.0]),
    (SalaryBand::From38To40K, [6.0, 9.0, 12.0, 13.0, 14.0]),
    (SalaryBand::From40To50K, [8.0, 12.0, 15.0, 17.0, 18.0]),
    (SalaryBand::From50To75K, [10.0, 14.0, 18.0, 20.0, 22.0]),
    (SalaryBand::Above75K, [12.0, 18.0, 22.0, 26.0, 30.0]),
];

const SALARIED_STANDARD: [(SalaryBand, [f64; 5]); 7] = [
    (SalaryBand::Under25K, [3.0, 5.0, 6.0, 7.0, 8.0]),
    (SalaryBand::From25To35K, [4.0, 6.0, 8.0, 9.0, 10.0]),
    (SalaryBand::From35To38K, [5.0, 7.0, 9.0, 10.0, 11.0]),
    (SalaryBand::From38To40K, [5.0, 8.0, 10.0, 11.0, 12.0]),
    (SalaryBand::From40To50K, [6.0, 10.0, 12.0, 14.0, 15.0]),
    (SalaryBand::From50To75K, [8.0, 12.0, 15.0, 17.0, 18.0]),
    (SalaryBand::Above75K, [10.0, 15.0, 18.0, 21.0, 24.0]),
];

const SALARIED_SUBPRIME: [(SalaryBand, [f64; 5]); 7] = [
    (SalaryBand::Under25K, [0.0, 3.0, 4.0, 5.0, 5.0]),
    (SalaryBand::From25To35K, [3.0, 4.0, 5.0, 6.0, 7.0]),
    (SalaryBand::From35To38K, [3.0, 5.0, 6.0, 7.0, 8.0]),
    (SalaryBand::From38To40K, [4.0, 5.0, 7.0, 8.0, 9.0]),
    (SalaryBand::From40To50K, [5.0, 7.0, 9.0, 10.0, 11.0]),
    (SalaryBand::From50To75K, [6.0, 9.0, 11.0, 12.0, 13.0]),
    (SalaryBand::Above75K, [8.0, 11.0, 13.0, 15.0, 17.0]),
];

const SELF_EMPLOYED_PRIME: [(SalaryBand, [f64; 5]); 7] = [
    (SalaryBand::Under25K, [3.0, 5.0, 6.0, 7.0, 8.0]),
    (SalaryBand::From25To35K, [4.0, 6.0, 8.0, 9.0, 10.0]),
    (SalaryBand::From35To38K, [5.0, 7.0, 9.0, 10.0, 11.0]),
    (SalaryBand::From38To40K, [5.0, 8.0, 10.0, 11.0, 12.0]),
    (SalaryBand::From40To50K, [7.0, 10.0, 13.0, 14.0, 15.0]),
    (SalaryBand::From50To75K, [8.0, 12.0, 15.0, 17.0, 18.0]),
    (SalaryBand::Above75K, [10.0, 15.0, 18.0, 21.0, 25.0]),
];

const SELF_EMPLOYED_STANDARD: [(SalaryBand, [f64; 5]); 7] = [
    (SalaryBand::Under25K, [0.0, 3.0, 5.0, 5.0, 6.0]),
    (SalaryBand::From25To35K, [3.0, 5.0, 6.0, 7.0, 8.0]),
    (SalaryBand::From35To38K, [4.0, 6.0, 7.0, 8.0, 9.0]),
    (SalaryBand::From38To40K, [4.0, 6.0, 8.0, 9.0, 10.0]),
    (SalaryBand::From40To50K, [5.0, 8.0, 10.0, 11.0, 12.0]),
    (SalaryBand::From50To75K, [7.0, 10.0, 12.0, 14.0, 15.0]),
    (SalaryBand::Above75K, [8.0, 12.0, 15.0, 17.0, 20.0]),
];

const SELF_EMPLOYED_SUBPRIME: [(SalaryBand, [f64; 5]); 7] = [
    (SalaryBand::Under25K, [0.0, 0.0, 3.0, 3.0, 4.0]),
    (SalaryBand::From25To35K, [0.0, 3.0, 4.0, 5.0, 5.0]),
    (SalaryBand::From35To38K, [3.0, 4.0, 5.0, 6.0, 6.0]),
    (SalaryBand::From38To40K, [3.0, 4.0, 6.0, 6.0, 7.0]),
    (SalaryBand::From40To50K, [4.0, 6.0, 7.0, 8.0, 9.0]),
    (SalaryBand::From50To75K, [5.0, 7.0, 9.0, 10.0, 11.0]),
    (SalaryBand::Above75K, [6.0, 9.0, 11.0, 13.0, 14.0]),
];

// Retired borrowers only get the short tenors.
const RETIRED_PRIME: [(SalaryBand, [f64; 5]); 7] = [
    (SalaryBand::Under25K, [3.0, 4.0, 0.0, 0.0, 0.0]),
    (SalaryBand::From25To35K, [3.0, 5.0, 0.0, 0.0, 0.0]),
    (SalaryBand::From35To38K, [4.0, 5.0, 0.0, 0.0, 0.0]),
    (SalaryBand::From38To40K, [4.0, 6.0, 0.0, 0.0, 0.0]),
    (SalaryBand::From40To50K, [5.0, 6.0, 0.0, 0.0, 0.0]),
    (SalaryBand::From50To75K, [5.0, 7.0, 0.0, 0.0, 0.0]),
    (SalaryBand::Above75K, [6.0, 8.0, 0.0, 0.0, 0.0]),
];

const RETIRED_STANDARD: [(SalaryBand, [f64; 5]); 7] = [
    (SalaryBand::Under25K, [0.0, 3.0, 0.0, 0.0, 0.0]),
    (SalaryBand::From25To35K, [3.0, 4.0, 0.0, 0.0, 0.0]),
    (SalaryBand::From35To38K, [3.0, 4.0, 0.0, 0.0, 0.0]),
    (SalaryBand::From38To40K, [3.0, 5.0, 0.0, 0.0, 0.0]),
    (SalaryBand::From40To50K, [4.0, 5.0, 0.0, 0.0, 0.0]),
    (SalaryBand::From50To75K, [4.0, 6.0, 0.0, 0.0, 0.0]),
    (SalaryBand::Above75K, [5.0, 7.0, 0.0, 0.0, 0.0]),
];
