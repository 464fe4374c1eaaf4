pub mod config;
pub mod eligibility;
pub mod employers;
pub mod error;
pub mod funnel;
pub mod telemetry;
