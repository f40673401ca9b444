use std::time::Duration;

use super::common::*;
use crate::config::AnalysisConfig;
use crate::workflows::siting::locale::DisplayLocale;
use crate::workflows::siting::validation::ValidationIssue;
use crate::workflows::siting::{AnalysisError, SiteAnalysisService};

#[test]
fn analyze_ranks_scored_districts() {
    let service = scripted_service(
        vec![poor_draws(), extreme_draws(), moderate_draws()],
        Duration::ZERO,
    );

    let report = service.analyze(&valid_form()).expect("analysis succeeds");

    let order: Vec<(&str, u8)> = report
        .rows
        .iter()
        .map(|row| (row.district.as_str(), row.score))
        .collect();
    assert_eq!(
        order,
        vec![("Tverskoy", 84), ("Basmanny", 56), ("Arbat", 0)]
    );
    assert_eq!(report.rows[0].rank, 1);
    assert_eq!(report.rows[0].rent_display, "1,500");
    assert_eq!(report.rows[0].recommendation_label, "favorable to open");
    assert_eq!(report.rows[0].score_class, "score--high");
    assert_eq!(report.banner(), Some("Recommended: Tverskoy — score 84"));
    assert_eq!(report.city, "Moscow");
}

#[test]
fn analyze_rejects_invalid_form_without_scoring() {
    let service = scripted_service(vec![moderate_draws()], Duration::ZERO);
    let mut form = valid_form();
    form.city.clear();
    form.max_rent = "free".to_string();

    match service.analyze(&form) {
        Err(AnalysisError::Invalid(errors)) => {
            assert_eq!(errors.len(), 2);
            assert!(errors.contains(ValidationIssue::MissingCity));
            assert!(errors.contains(ValidationIssue::InvalidRent));
        }
        other => panic!("expected validation failure, got {other:?}"),
    }

    // The scripted draw is still available, so nothing was scored.
    let report = service.analyze(&valid_form()).expect("valid form scores");
    assert!(report.rows.iter().any(|row| row.score == 56));
}

#[test]
fn russian_locale_formats_rows() {
    let service = SiteAnalysisService::new(
        crate::workflows::siting::DistrictScorer::new(
            crate::workflows::siting::ScriptedDraws::new([moderate_draws()]),
        ),
        DisplayLocale::Russian,
        Duration::ZERO,
    );
    let mut form = valid_form();
    form.districts = "Арбат".to_string();

    let report = service.analyze(&form).expect("analysis succeeds");
    let row = &report.rows[0];

    assert_eq!(row.rent_display, "2\u{a0}000");
    assert_eq!(row.traffic_label, "высокая");
    assert_eq!(row.recommendation_label, "средний потенциал 🟡");
    assert_eq!(report.banner(), Some("Рекомендуем: Арбат — индекс 56"));
}

#[tokio::test(start_paused = true)]
async fn latency_stage_waits_before_scoring() {
    let service = scripted_service(vec![moderate_draws()], Duration::from_millis(1500));
    let started = tokio::time::Instant::now();

    let report = service
        .analyze_with_latency(&valid_form(), std::future::pending())
        .await
        .expect("analysis succeeds");

    assert!(started.elapsed() >= Duration::from_millis(1500));
    assert_eq!(report.rows.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn cancelling_during_latency_skips_scoring() {
    let service = scripted_service(vec![extreme_draws()], Duration::from_millis(1500));

    let result = service
        .analyze_with_latency(
            &valid_form(),
            tokio::time::sleep(Duration::from_millis(200)),
        )
        .await;
    assert!(matches!(result, Err(AnalysisError::Cancelled)));

    let report = service.analyze(&valid_form()).expect("analysis succeeds");
    assert_eq!(report.rows[0].score, 84, "scripted draw was not consumed");
}

#[tokio::test(start_paused = true)]
async fn validation_fails_fast_without_waiting() {
    let service = scripted_service(Vec::new(), Duration::from_secs(60));
    let started = tokio::time::Instant::now();

    let result = service
        .analyze_with_latency(&Default::default(), std::future::pending())
        .await;

    assert!(matches!(result, Err(AnalysisError::Invalid(_))));
    assert_eq!(started.elapsed(), Duration::ZERO);
}

#[test]
fn seeded_services_reproduce_reports() {
    let config = AnalysisConfig {
        latency_ms: 0,
        locale: DisplayLocale::English,
        seed: Some(2024),
    };
    let first = SiteAnalysisService::from_config(&config)
        .analyze(&valid_form())
        .expect("first run");
    let second = SiteAnalysisService::from_config(&config)
        .analyze(&valid_form())
        .expect("second run");

    assert_eq!(first.rows, second.rows);
}
