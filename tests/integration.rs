//! End-to-end tests for attendance report generation.
//!
//! This test suite covers:
//! - Log parsing with malformed rows and both timestamp formats
//! - Punch deduplication and positional slot inference
//! - Two-column month layout for 28, 29, 30 and 31 day months
//! - Artifact naming and storage
//! - The HTTP shell (generate, then download)

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use attendance_report::api::{AppState, create_router};
use attendance_report::config::ReportConfig;
use attendance_report::models::{MonthlyReport, NameTable, YearMonth};
use attendance_report::processing::{ReportGenerator, monthly_reports, parse_log};
use attendance_report::render::{OutputFormat, PAGE_BREAK};

// =============================================================================
// Test Helpers
// =============================================================================

const HEADER: &str = "No\tTMNo\tEnNo\tName\tGMNo\tMode\tDateTime";

fn row(id: &str, name: &str, timestamp: &str) -> String {
    format!("1\t1\t{id}\t{name}\t1\t0\t{timestamp}")
}

fn log_text(rows: &[String]) -> String {
    let mut text = String::from(HEADER);
    for r in rows {
        text.push('\n');
        text.push_str(r);
    }
    text.push('\n');
    text
}

/// A realistic export: two employees in January, one only in February,
/// slash and dash timestamps, duplicates and junk rows.
fn january_export() -> Vec<String> {
    vec![
        row("1001", "Ana Torres", "2024/01/15 07:58:41"),
        row("1001", "Ana Torres", "2024/01/15 07:58:50"),
        row("1001", "Ana Torres", "2024/01/15 12:01:03"),
        row("1001", "Ana Torres", "2024/01/15 12:59:10"),
        row("1001", "Ana Torres", "2024/01/15 17:02:00"),
        row("1001", "Ana Torres", "2024/01/15 17:05:00"),
        row("1001", "Ana Torres", "2024-01-31 08:00:00"),
        row("1002", "Luis Perez", "2024-01-02 09:00:00"),
        row("1002", "Luis Perez", "2024-01-02 09:00:10"),
        row("1002", "Luis Perez", "2024-01-02 09:05:00"),
        row("1003", "Eva Ruiz", "2024/02/05 08:00:00"),
        "1\t1\t1004\tShort".to_string(),
        row("1005", "Mal Formado", "05.01.2024 08:00:00"),
    ]
}

fn reports_for(rows: &[String], month: &str) -> Vec<MonthlyReport> {
    let text = log_text(rows);
    let parsed = parse_log(text.lines()).unwrap();
    monthly_reports(
        &parsed.records,
        &YearMonth::parse(month).unwrap(),
        &NameTable::default(),
        chrono::Duration::seconds(30),
    )
}

fn find_report<'a>(reports: &'a [MonthlyReport], id: &str) -> &'a MonthlyReport {
    reports
        .iter()
        .find(|r| r.employee_id == id)
        .unwrap_or_else(|| panic!("no report for {id}"))
}

fn router_in(dir: &std::path::Path) -> Router {
    create_router(AppState::new(ReportGenerator::new(ReportConfig {
        output_dir: dir.to_path_buf(),
        ..ReportConfig::default()
    })))
}

async fn post_reports(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/reports")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

// =============================================================================
// SECTION 1: Parsing
// =============================================================================

#[test]
fn test_malformed_rows_are_skipped_without_affecting_others() {
    let text = log_text(&january_export());
    let parsed = parse_log(text.lines()).unwrap();

    assert_eq!(parsed.records.len(), 11);
    assert_eq!(parsed.skipped.len(), 2);
    assert_eq!(parsed.skipped[0].line, 13);
    assert_eq!(parsed.skipped[1].line, 14);
}

#[test]
fn test_both_timestamp_formats_normalise_identically() {
    let text = log_text(&[
        row("1", "A", "2024/03/04 10:11:12"),
        row("1", "A", "2024-03-04 10:11:12"),
    ]);
    let parsed = parse_log(text.lines()).unwrap();

    assert_eq!(parsed.records[0].timestamp, parsed.records[1].timestamp);
    assert_eq!(parsed.records[0].canonical_timestamp(), "2024-03-04 10:11:12");
}

// =============================================================================
// SECTION 2: Grouping, deduplication and slots
// =============================================================================

#[test]
fn test_employee_outside_month_gets_no_report() {
    let reports = reports_for(&january_export(), "2024-01");

    let ids: Vec<&str> = reports.iter().map(|r| r.employee_id.as_str()).collect();
    assert_eq!(ids, vec!["1001", "1002"]);
}

#[test]
fn test_duplicate_punch_within_window_is_dropped() {
    let reports = reports_for(&january_export(), "2024-01");
    let luis = find_report(&reports, "1002");
    let day2 = luis.cells().find(|c| c.day == 2).unwrap();

    assert_eq!(day2.slots.morning_in.unwrap().to_string(), "09:00:00");
    assert_eq!(day2.slots.morning_out.unwrap().to_string(), "09:05:00");
    assert!(day2.slots.afternoon_in.is_none());
}

#[test]
fn test_fifth_punch_is_truncated() {
    let reports = reports_for(&january_export(), "2024-01");
    let ana = find_report(&reports, "1001");
    let day15 = ana.cells().find(|c| c.day == 15).unwrap();

    // 07:58:50 coalesces with 07:58:41; 17:05:00 is the fifth kept punch.
    let slots: Vec<String> = day15
        .slots
        .as_array()
        .iter()
        .map(|s| s.unwrap().to_string())
        .collect();
    assert_eq!(slots, vec!["07:58:41", "12:01:03", "12:59:10", "17:02:00"]);
}

// =============================================================================
// SECTION 3: Layout
// =============================================================================

#[test]
fn test_every_day_of_january_appears_once() {
    let reports = reports_for(&january_export(), "2024-01");
    let ana = find_report(&reports, "1001");

    let mut days: Vec<u32> = ana.cells().map(|c| c.day).collect();
    days.sort_unstable();
    assert_eq!(days, (1..=31).collect::<Vec<_>>());
    assert_eq!(ana.rows.len(), 16);
    assert_eq!(ana.rows[14].right.as_ref().unwrap().day, 31);
    assert!(ana.rows[14].right.as_ref().unwrap().slots.morning_in.is_some());
}

#[test]
fn test_february_non_leap_layout() {
    let rows = vec![row("1", "A", "2023-02-10 08:00:00")];
    let reports = reports_for(&rows, "2023-02");
    let report = &reports[0];

    assert_eq!(report.rows.len(), 14);
    assert_eq!(report.rows[0].left.day, 1);
    assert_eq!(report.rows[0].right.as_ref().unwrap().day, 15);
    assert_eq!(report.rows[13].left.day, 14);
    assert_eq!(report.rows[13].right.as_ref().unwrap().day, 28);
    assert_eq!(report.heading, "FEBRERO 2023");
}

#[test]
fn test_empty_days_have_weekday_and_no_slots() {
    let reports = reports_for(&january_export(), "2024-01");
    let luis = find_report(&reports, "1002");

    // 2024-01-06 was a Saturday.
    let day6 = luis.cells().find(|c| c.day == 6).unwrap();
    assert_eq!(day6.weekday, "Sábado");
    assert!(day6.slots.is_empty());
}

#[test]
fn test_pipeline_is_deterministic() {
    let first = reports_for(&january_export(), "2024-01");
    let second = reports_for(&january_export(), "2024-01");

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
}

// =============================================================================
// SECTION 4: Generation and storage
// =============================================================================

#[test]
fn test_generator_writes_named_text_reports() {
    let dir = tempfile::tempdir().unwrap();
    let generator = ReportGenerator::new(ReportConfig {
        output_dir: dir.path().to_path_buf(),
        ..ReportConfig::default()
    });

    let text = log_text(&january_export());
    let summary = generator.generate_from_lines(text.lines(), "2024-01").unwrap();

    assert_eq!(summary.reports["1001"], "1001_ENERO_2024.txt");
    assert_eq!(summary.reports["1002"], "1002_ENERO_2024.txt");
    assert_eq!(summary.skipped_rows, 2);

    let contents = std::fs::read_to_string(dir.path().join("1001_ENERO_2024.txt")).unwrap();
    assert!(contents.starts_with("Asistencia: Ana Torres | Registro: 1001 | ENERO 2024"));
    assert!(contents.contains("15  | Lunes     | 07:58:41 | 12:01:03 | 12:59:10 | 17:02:00"));
    assert!(!contents.contains(PAGE_BREAK));
}

#[test]
fn test_regenerating_produces_identical_artifacts() {
    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();
    let text = log_text(&january_export());

    for dir in [&dir_a, &dir_b] {
        ReportGenerator::new(ReportConfig {
            output_dir: dir.path().to_path_buf(),
            format: OutputFormat::Json,
            ..ReportConfig::default()
        })
        .generate_from_lines(text.lines(), "2024-01")
        .unwrap();
    }

    let a = std::fs::read(dir_a.path().join("1001_ENERO_2024.json")).unwrap();
    let b = std::fs::read(dir_b.path().join("1001_ENERO_2024.json")).unwrap();
    assert_eq!(a, b);
}

// =============================================================================
// SECTION 5: HTTP shell
// =============================================================================

#[tokio::test]
async fn test_generate_then_download() {
    let dir = tempfile::tempdir().unwrap();
    let router = router_in(dir.path());

    let (status, result) = post_reports(
        router.clone(),
        json!({ "month": "2024-01", "log": log_text(&january_export()) }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["heading"], "ENERO 2024");
    assert_eq!(result["skipped_rows"], 2);
    assert_eq!(result["failures"], json!([]));
    let filename = result["reports"]["1002"].as_str().unwrap().to_string();
    assert_eq!(filename, "1002_ENERO_2024.txt");

    let response = router
        .oneshot(
            Request::builder()
                .uri(format!("/reports/{filename}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(disposition, format!("attachment; filename=\"{filename}\""));

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.starts_with("Asistencia: Luis Perez | Registro: 1002 | ENERO 2024"));
}

#[tokio::test]
async fn test_ids_differing_in_punctuation_download_separately() {
    let dir = tempfile::tempdir().unwrap();
    let router = router_in(dir.path());
    let rows = vec![
        row("A.1", "Ana", "2024-01-15 08:00:00"),
        row("A/1", "Luis", "2024-01-15 09:00:00"),
    ];

    let (status, result) = post_reports(
        router.clone(),
        json!({ "month": "2024-01", "log": log_text(&rows) }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["reports"]["A.1"], "A~2E1_ENERO_2024.txt");
    assert_eq!(result["reports"]["A/1"], "A~2F1_ENERO_2024.txt");

    for (filename, title) in [
        ("A~2E1_ENERO_2024.txt", "Asistencia: Ana | Registro: A.1"),
        ("A~2F1_ENERO_2024.txt", "Asistencia: Luis | Registro: A/1"),
    ] {
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/reports/{filename}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(String::from_utf8(body.to_vec()).unwrap().starts_with(title));
    }
}

#[tokio::test]
async fn test_trailing_blank_line_is_not_unparseable() {
    let dir = tempfile::tempdir().unwrap();
    let (status, result) = post_reports(
        router_in(dir.path()),
        json!({ "month": "2024-01", "log": format!("{HEADER}\n\n") }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["reports"], json!({}));
    assert_eq!(result["skipped_rows"], 0);
}

#[tokio::test]
async fn test_unparseable_log_returns_400() {
    let dir = tempfile::tempdir().unwrap();
    let (status, result) = post_reports(
        router_in(dir.path()),
        json!({ "month": "2024-01", "log": format!("{HEADER}\nnothing\there\n") }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "UNPARSEABLE_LOG");
}

#[tokio::test]
async fn test_empty_log_returns_400() {
    let dir = tempfile::tempdir().unwrap();
    let (status, result) =
        post_reports(router_in(dir.path()), json!({ "month": "2024-01", "log": "" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "EMPTY_LOG");
}

#[tokio::test]
async fn test_missing_month_field_returns_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let (status, result) =
        post_reports(router_in(dir.path()), json!({ "log": log_text(&[]) })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_month_with_no_punches_returns_empty_mapping() {
    let dir = tempfile::tempdir().unwrap();
    let (status, result) = post_reports(
        router_in(dir.path()),
        json!({ "month": "2024-03", "log": log_text(&january_export()) }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["reports"], json!({}));
}
