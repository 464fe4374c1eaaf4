use crate::infra::{parse_employment_type, parse_loan_type, parse_risk_band, InMemoryLeadStore};
use clap::Args;
use std::sync::Arc;

use loanbridge::eligibility::{
    EligibilityEngine, EmploymentType, LoanType, RateBook, RiskBand,
};
use loanbridge::employers::EmployerDirectory;
use loanbridge::error::AppError;
use loanbridge::funnel::{CheckSubmission, FunnelError, LeadFunnelService};

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Employer name as entered on the form
    #[arg(long)]
    pub(crate) employer: String,
    /// Gross monthly salary in rupees
    #[arg(long)]
    pub(crate) salary: f64,
    /// Employment type: salaried, government, self_employed, business_owner, retired
    #[arg(long, value_parser = parse_employment_type, default_value = "salaried")]
    pub(crate) employment: EmploymentType,
    /// Risk band: prime, standard, subprime
    #[arg(long, value_parser = parse_risk_band, default_value = "standard")]
    pub(crate) risk_band: RiskBand,
    /// Existing monthly obligations (EMIs, rent commitments)
    #[arg(long, default_value_t = 0.0)]
    pub(crate) obligations: f64,
    /// Loan product: personal, home, business, doctor
    #[arg(long, value_parser = parse_loan_type, default_value = "personal")]
    pub(crate) loan_type: LoanType,
    /// Requested loan amount in rupees
    #[arg(long)]
    pub(crate) amount: f64,
    /// Requested tenor in months
    #[arg(long)]
    pub(crate) tenor: u32,
    /// Annual interest rate in percent (defaults to the product's base rate)
    #[arg(long)]
    pub(crate) rate: Option<f64>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Employer name used for the scripted walkthrough
    #[arg(long, default_value = "HDFC Bank")]
    pub(crate) employer: String,
    /// Monthly salary for the demo borrower
    #[arg(long, default_value_t = 50_000.0)]
    pub(crate) salary: f64,
    /// Requested amount for the demo check
    #[arg(long, default_value_t = 300_000.0)]
    pub(crate) amount: f64,
    /// Tenor in months for the demo check
    #[arg(long, default_value_t = 36)]
    pub(crate) tenor: u32,
}

fn build_service() -> LeadFunnelService<InMemoryLeadStore> {
    LeadFunnelService::new(
        Arc::new(EmployerDirectory::with_seed()),
        Arc::new(EligibilityEngine::new(RateBook::builtin())),
        Arc::new(InMemoryLeadStore::default()),
    )
}

fn into_app_error(err: FunnelError) -> AppError {
    match err {
        FunnelError::Import(err) => AppError::Import(err),
        FunnelError::Store(err) => AppError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            err.to_string(),
        )),
    }
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let service = build_service();

    let outcome = service
        .check(CheckSubmission {
            employer_name: args.employer,
            monthly_salary: args.salary,
            employment_type: args.employment,
            risk_band: args.risk_band,
            existing_monthly_obligations: args.obligations,
            loan_type: args.loan_type,
            amount: args.amount,
            tenor_months: args.tenor,
            annual_rate_percent: args.rate,
        })
        .map_err(into_app_error)?;

    match serde_json::to_string_pretty(&outcome) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("verdict unavailable: {err}"),
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = build_service();

    println!("Lead funnel demo");
    println!("\nEmployer classification");
    for name in [args.employer.as_str(), "Infosys", "Corner Tea Stall"] {
        let matched = service.classify(name);
        println!(
            "- {name}: Category {} ({})",
            matched.category.label(),
            matched.description
        );
    }

    let prefix: String = args.employer.chars().take(3).collect();
    let suggestions = service.suggest(&prefix, 5);
    println!("\nSuggestions for '{prefix}'");
    if suggestions.is_empty() {
        println!("- none");
    } else {
        for suggestion in &suggestions {
            println!("- {suggestion}");
        }
    }

    println!("\nEligibility checks across products");
    for loan_type in [
        LoanType::Personal,
        LoanType::Home,
        LoanType::Business,
        LoanType::Doctor,
    ] {
        let outcome = match service.check(CheckSubmission {
            employer_name: args.employer.clone(),
            monthly_salary: args.salary,
            employment_type: EmploymentType::Salaried,
            risk_band: RiskBand::Prime,
            existing_monthly_obligations: 0.0,
            loan_type,
            amount: args.amount,
            tenor_months: args.tenor,
            annual_rate_percent: None,
        }) {
            Ok(outcome) => outcome,
            Err(err) => {
                println!("- {}: check unavailable ({err})", loan_type.label());
                continue;
            }
        };

        println!(
            "- {}: EMI {:.0}, max eligible {:.0} -> {}",
            loan_type.label(),
            outcome.result.monthly_payment,
            outcome.result.max_eligible_amount,
            outcome.result.message
        );
    }

    let leads = service.recent_leads(10).map_err(into_app_error)?;
    println!("\nCaptured leads: {}", leads.len());
    for lead in &leads {
        println!(
            "- {} | {} | Category {} | {}",
            lead.lead_id.0,
            lead.employer_name,
            lead.employer_category.label(),
            if lead.result.eligible {
                "eligible"
            } else {
                "not eligible"
            }
        );
    }

    Ok(())
}
