//! Lead funnel: the service facade and HTTP surface tying the employer
//! directory and the eligibility engine to an external lead store.

mod router;
mod service;
mod store;

pub use router::funnel_router;
pub use service::{CheckOutcome, CheckSubmission, FunnelError, LeadFunnelService};
pub use store::{LeadId, LeadRecord, LeadStore, LeadStoreError, LeadView};
