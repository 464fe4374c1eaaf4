//! Integration coverage for the lead funnel.
//!
//! Scenarios run through the public service facade and the HTTP router so
//! classification, eligibility math, bulk import, and lead capture are
//! validated end to end without reaching into private modules.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use loanbridge::eligibility::{
        EligibilityEngine, EmploymentType, LoanType, RateBook, RiskBand,
    };
    use loanbridge::employers::EmployerDirectory;
    use loanbridge::funnel::{
        CheckSubmission, LeadFunnelService, LeadId, LeadRecord, LeadStore, LeadStoreError,
    };

    #[derive(Default)]
    pub(super) struct MemoryLeadStore {
        records: Mutex<HashMap<LeadId, LeadRecord>>,
        order: Mutex<Vec<LeadId>>,
    }

    impl LeadStore for MemoryLeadStore {
        fn insert(&self, record: LeadRecord) -> Result<LeadRecord, LeadStoreError> {
            let mut records = self.records.lock().expect("store mutex poisoned");
            if records.contains_key(&record.lead_id) {
                return Err(LeadStoreError::Conflict);
            }
            records.insert(record.lead_id.clone(), record.clone());
            self.order
                .lock()
                .expect("store mutex poisoned")
                .push(record.lead_id.clone());
            Ok(record)
        }

        fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, LeadStoreError> {
            let records = self.records.lock().expect("store mutex poisoned");
            Ok(records.get(id).cloned())
        }

        fn recent(&self, limit: usize) -> Result<Vec<LeadRecord>, LeadStoreError> {
            let records = self.records.lock().expect("store mutex poisoned");
            let order = self.order.lock().expect("store mutex poisoned");
            Ok(order
                .iter()
                .rev()
                .take(limit)
                .filter_map(|id| records.get(id).cloned())
                .collect())
        }
    }

    pub(super) fn build_service(
    ) -> (LeadFunnelService<MemoryLeadStore>, Arc<MemoryLeadStore>) {
        let store = Arc::new(MemoryLeadStore::default());
        let service = LeadFunnelService::new(
            Arc::new(EmployerDirectory::with_seed()),
            Arc::new(EligibilityEngine::new(RateBook::builtin())),
            store.clone(),
        );
        (service, store)
    }

    pub(super) fn submission() -> CheckSubmission {
        CheckSubmission {
            employer_name: "HDFC Bank".to_string(),
            monthly_salary: 50_000.0,
            employment_type: EmploymentType::Salaried,
            risk_band: RiskBand::Prime,
            existing_monthly_obligations: 0.0,
            loan_type: LoanType::Personal,
            amount: 300_000.0,
            tenor_months: 36,
            annual_rate_percent: Some(10.0),
        }
    }
}

mod service {
    use super::common::*;
    use loanbridge::employers::EmployerCategory;
    use loanbridge::funnel::LeadStore;

    #[test]
    fn check_classifies_evaluates_and_persists_a_lead() {
        let (service, store) = build_service();

        let outcome = service.check(submission()).expect("check succeeds");

        assert_eq!(outcome.employer.category, EmployerCategory::A);
        assert!(outcome.result.eligible);
        assert!(outcome.result.message.starts_with("eligible for up to"));

        let stored = store
            .fetch(&outcome.lead_id)
            .expect("fetch succeeds")
            .expect("lead persisted");
        assert_eq!(stored.employer_category, EmployerCategory::A);
        assert_eq!(stored.result, outcome.result);
        assert_eq!(stored.request.annual_rate_percent, 10.0);
    }

    #[test]
    fn missing_rate_falls_back_to_the_product_base_rate() {
        let (service, _store) = build_service();
        let mut submission = submission();
        submission.annual_rate_percent = None;

        let outcome = service.check(submission).expect("check succeeds");
        assert!(outcome.result.monthly_payment > 0.0);

        let leads = service.recent_leads(1).expect("recent leads");
        assert_eq!(leads[0].request.annual_rate_percent, 10.0);
    }

    #[test]
    fn ineligible_checks_still_capture_the_lead() {
        let (service, _store) = build_service();
        let mut submission = submission();
        submission.amount = 5_000_000.0;

        let outcome = service.check(submission).expect("check succeeds");
        assert!(!outcome.result.eligible);
        assert!(outcome.result.message.contains("exceeds eligibility"));

        let leads = service.recent_leads(10).expect("recent leads");
        assert_eq!(leads.len(), 1);
        assert!(!leads[0].result.eligible);
    }

    #[test]
    fn recent_leads_are_newest_first_and_limited() {
        let (service, _store) = build_service();
        for amount in [100_000.0, 200_000.0, 300_000.0] {
            let mut submission = submission();
            submission.amount = amount;
            service.check(submission).expect("check succeeds");
        }

        let leads = service.recent_leads(2).expect("recent leads");
        assert_eq!(leads.len(), 2);
        assert_eq!(leads[0].request.amount, 300_000.0);
        assert_eq!(leads[1].request.amount, 200_000.0);
    }

    #[test]
    fn csv_import_extends_the_directory_first_write_wins() {
        let (service, _store) = build_service();
        let csv = "Company Name,Category\n\
                   Acme Widgets,B\n\
                   HDFC Bank,D\n";

        let stats = service.import_csv(csv.as_bytes()).expect("import succeeds");
        assert_eq!(stats.total, 2);
        assert_eq!(stats.added, 1);
        assert_eq!(stats.skipped, 1);

        assert_eq!(
            service.classify("acme widgets").category,
            EmployerCategory::B
        );
        assert_eq!(
            service.classify("hdfc bank").category,
            EmployerCategory::A
        );
    }
}

mod routing {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use loanbridge::funnel::funnel_router;
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn build_router() -> axum::Router {
        let (service, _store) = build_service();
        funnel_router(Arc::new(service))
    }

    #[tokio::test]
    async fn post_check_returns_the_verdict() {
        let router = build_router();
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/eligibility/check")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_vec(&submission()).expect("serialize submission"),
            ))
            .expect("request");

        let response = router.oneshot(request).await.expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        assert!(payload.get("lead_id").is_some());
        assert_eq!(
            payload
                .pointer("/employer/category")
                .and_then(Value::as_str),
            Some("A")
        );
        assert_eq!(
            payload.pointer("/result/eligible").and_then(Value::as_bool),
            Some(true)
        );
    }

    #[tokio::test]
    async fn classify_endpoint_defaults_unknown_names_to_d() {
        let router = build_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/employers/classify?name=Zzyzx%20Quarry%20Llp")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024).await.expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(payload.get("category").and_then(Value::as_str), Some("D"));
    }

    #[tokio::test]
    async fn suggest_endpoint_honors_the_limit() {
        let router = build_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/employers/suggest?q=bank&limit=3")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        let suggestions = payload.as_array().expect("array");
        assert!(!suggestions.is_empty());
        assert!(suggestions.len() <= 3);
    }

    #[tokio::test]
    async fn import_endpoint_accepts_csv_and_reports_stats() {
        let router = build_router();
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/employers/import")
                    .header("content-type", "text/csv")
                    .body(Body::from("Employer,Category\nAcme Widgets,B\n"))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024).await.expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(payload.get("added").and_then(Value::as_u64), Some(1));
    }

    #[tokio::test]
    async fn import_endpoint_rejects_headerless_data() {
        let router = build_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/employers/import")
                    .header("content-type", "text/csv")
                    .body(Body::from("Address,Category\nSomewhere,A\n"))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn leads_endpoint_lists_captured_checks() {
        let (service, _store) = build_service();
        let service = Arc::new(service);
        service.check(submission()).expect("check succeeds");

        let router = funnel_router(service);
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/leads?limit=10")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        let leads = payload.as_array().expect("array");
        assert_eq!(leads.len(), 1);
        assert_eq!(
            leads[0].get("employer_category").and_then(Value::as_str),
            Some("A")
        );
        assert_eq!(
            leads[0].get("eligible").and_then(Value::as_bool),
            Some(true)
        );
    }
}
