use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::service::{CheckSubmission, FunnelError, LeadFunnelService};
use super::store::LeadStore;

const DEFAULT_SUGGESTION_LIMIT: usize = 6;
const DEFAULT_LEAD_LIMIT: usize = 50;

/// Router builder exposing the funnel over HTTP for the web front end.
pub fn funnel_router<S>(service: Arc<LeadFunnelService<S>>) -> Router
where
    S: LeadStore + 'static,
{
    Router::new()
        .route("/api/v1/eligibility/check", post(check_handler::<S>))
        .route("/api/v1/employers/classify", get(classify_handler::<S>))
        .route("/api/v1/employers/suggest", get(suggest_handler::<S>))
        .route("/api/v1/employers/import", post(import_handler::<S>))
        .route("/api/v1/leads", get(leads_handler::<S>))
        .with_state(service)
}

pub(crate) async fn check_handler<S>(
    State(service): State<Arc<LeadFunnelService<S>>>,
    axum::Json(submission): axum::Json<CheckSubmission>,
) -> Response
where
    S: LeadStore + 'static,
{
    match service.check(submission) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(error) => funnel_error_response(error),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClassifyParams {
    #[serde(default)]
    name: String,
}

pub(crate) async fn classify_handler<S>(
    State(service): State<Arc<LeadFunnelService<S>>>,
    Query(params): Query<ClassifyParams>,
) -> Response
where
    S: LeadStore + 'static,
{
    let matched = service.classify(&params.name);
    let payload = json!({
        "name": params.name,
        "category": matched.category,
        "description": matched.description,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

#[derive(Debug, Deserialize)]
pub(crate) struct SuggestParams {
    #[serde(default)]
    q: String,
    limit: Option<usize>,
}

pub(crate) async fn suggest_handler<S>(
    State(service): State<Arc<LeadFunnelService<S>>>,
    Query(params): Query<SuggestParams>,
) -> Response
where
    S: LeadStore + 'static,
{
    let limit = params.limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT);
    let suggestions = service.suggest(&params.q, limit);
    (StatusCode::OK, axum::Json(suggestions)).into_response()
}

pub(crate) async fn import_handler<S>(
    State(service): State<Arc<LeadFunnelService<S>>>,
    body: String,
) -> Response
where
    S: LeadStore + 'static,
{
    match service.import_csv(body.as_bytes()) {
        Ok(stats) => (StatusCode::OK, axum::Json(stats)).into_response(),
        Err(FunnelError::Import(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => funnel_error_response(other),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct LeadsParams {
    limit: Option<usize>,
}

pub(crate) async fn leads_handler<S>(
    State(service): State<Arc<LeadFunnelService<S>>>,
    Query(params): Query<LeadsParams>,
) -> Response
where
    S: LeadStore + 'static,
{
    let limit = params.limit.unwrap_or(DEFAULT_LEAD_LIMIT);
    match service.recent_leads(limit) {
        Ok(records) => {
            let views: Vec<_> = records.iter().map(|record| record.view()).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(error) => funnel_error_response(error),
    }
}

fn funnel_error_response(error: FunnelError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
