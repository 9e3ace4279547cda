// Degraded inputs and failing collaborators

use std::sync::Arc;

use founder_readiness_lib::db::DbPool;
use founder_readiness_lib::models::assessment::{AssessmentRecord, ResponseRecord, ResponseType};
use founder_readiness_lib::models::profile::RiskTolerance;
use founder_readiness_lib::services::assessment_gateway::{
    AssessmentGateway, SqliteAssessmentGateway,
};
use founder_readiness_lib::services::dashboard_service::DashboardService;
use founder_readiness_lib::services::fallback_generator;
use founder_readiness_lib::services::profile_analyzer::analyze_profile;
use founder_readiness_lib::services::recommendation_service::RecommendationService;
use founder_readiness_lib::{AppError, AppResult, EngineConfig};
use tempfile::tempdir;

const FIXED_TIMESTAMP: &str = "2026-02-01T12:00:00+00:00";

struct FailingGateway;

impl AssessmentGateway for FailingGateway {
    fn get_assessments(&self, _user_id: &str) -> AppResult<Vec<AssessmentRecord>> {
        Err(AppError::database("database is locked"))
    }

    fn is_available(&self) -> bool {
        false
    }
}

#[test]
fn gateway_fault_yields_fallback_summary() {
    let service = DashboardService::new(Arc::new(FailingGateway));
    let mut rng = rand::thread_rng();
    let summary = service.generate_executive_summary_with("u1", &mut rng, FIXED_TIMESTAMP);

    assert_eq!(summary, fallback_generator::fallback_summary(FIXED_TIMESTAMP));
}

#[test]
fn gateway_fault_yields_onboarding_report() {
    let service = RecommendationService::new(Arc::new(FailingGateway));
    let report = service.generate_recommendations_at("u1", FIXED_TIMESTAMP);

    assert_eq!(
        report,
        fallback_generator::onboarding_recommendations(FIXED_TIMESTAMP)
    );
}

#[test]
fn health_check_reports_unavailable_gateway() {
    let report = DashboardService::new(Arc::new(FailingGateway)).health_check();
    assert_eq!(report.status, "unhealthy");
    assert_eq!(report.components.gateway, "unavailable");
    assert_eq!(report.components.scoring_engine, "operational");
}

#[test]
fn non_numeric_scale_answers_are_ignored() {
    let records = vec![AssessmentRecord::new(
        "Self Discovery Assessment",
        100.0,
        vec![
            ResponseRecord::new("a", ResponseType::Scale, "N/A"),
            ResponseRecord::new("b", ResponseType::Scale, "4.5"),
            ResponseRecord::new("c", ResponseType::Scale, "-3"),
            ResponseRecord::new("d", ResponseType::Scale, "5"),
            ResponseRecord::new("e", ResponseType::Scale, "4"),
        ],
    )];

    // only "5" and "4" count
    assert_eq!(analyze_profile(&records).risk_tolerance, RiskTolerance::High);
}

#[test]
fn out_of_range_completion_is_clamped() {
    let records = vec![
        AssessmentRecord::new("Market Research", 250.0, vec![]),
        AssessmentRecord::new("Business Development", -40.0, vec![]),
        AssessmentRecord::new("Product Concept Testing", f64::NAN, vec![]),
    ];
    let service = DashboardService::new(Arc::new(FailingGateway));
    let summary =
        service.build_summary(&records, &mut rand::thread_rng(), FIXED_TIMESTAMP);

    assert!((0.0..=1.0).contains(&summary.data_completeness));
    assert!((20..=95).contains(&summary.overall_score));
    for element in &summary.sub_elements {
        assert!((15..=95).contains(&element.score));
    }
}

#[test]
fn invalid_configuration_is_rejected() {
    let err = EngineConfig::from_lookup(|key| match key {
        "READINESS_CACHE_TTL_SECS" => Some("-5".to_string()),
        _ => None,
    })
    .unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn unreadable_database_path_fails_fast() {
    let dir = tempdir().expect("temp dir");
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"file").expect("write blocker");

    let result = DbPool::new(blocker.join("readiness.sqlite"));
    assert!(result.is_err());
}

#[test]
fn corrupt_database_file_falls_back() {
    let dir = tempdir().expect("temp dir");
    let db_path = dir.path().join("corrupt.sqlite");
    let pool = DbPool::new(&db_path).expect("db pool");
    std::fs::write(&db_path, vec![b'x'; 4096]).expect("overwrite");
    let _ = std::fs::remove_file(dir.path().join("corrupt.sqlite-wal"));
    let _ = std::fs::remove_file(dir.path().join("corrupt.sqlite-shm"));

    let gateway = SqliteAssessmentGateway::new(pool);
    assert!(gateway.get_assessments("anyone").is_err());

    let summary = DashboardService::new(Arc::new(gateway)).generate_executive_summary("anyone");
    assert_eq!(summary.overall_score, 32);
}
