//! Per-bank transaction drill-down against the mock `/charge/details` endpoint

use crate::common::fixtures::{daily_json, transaction_json};
use crate::common::mock_api::{
    fast_options, fetcher_for, forbid_day, json_body, mount_day, request_count, text_body,
};
use chrono::NaiveDate;
use pix_monitor::analysis::{available_statuses, TransactionFilter};
use pix_monitor::api::NO_DATA_SENTINEL;
use pix_monitor::errors::FetchError;
use pix_monitor::fetch::ReduceMode;
use pix_monitor::types::DateWindow;
use serde_json::json;
use wiremock::matchers::{path, query_param};
use wiremock::{Mock, MockServer};

const DETAILS: &str = "/charge/details";
const GENERAL: &str = "/charge/general";

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[tokio::test]
async fn test_bank_transactions_across_window() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(path(DETAILS))
        .and(query_param("bank_num", "001"))
        .and(query_param("date_from", "2025-09-01"))
        .respond_with(json_body(json!([
            transaction_json("PX-1", "001", "2025-09-01", 100.0, "ATIVA"),
            transaction_json("PX-2", "001", "2025-09-01", 50.0, "CONCLUIDA"),
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(path(DETAILS))
        .and(query_param("bank_num", "001"))
        .and(query_param("date_from", "2025-09-02"))
        .respond_with(text_body(NO_DATA_SENTINEL))
        .expect(1)
        .mount(&server)
        .await;

    let window = DateWindow::new(date("2025-09-01"), date("2025-09-02"))?;
    let range = fetcher_for(&server)
        .fetch_bank_transactions(&window, "001", &fast_options(15, ReduceMode::Concat))
        .await?;

    assert_eq!(range.records.len(), 2);
    assert_eq!(range.days_with_data, vec![date("2025-09-01")]);
    assert_eq!(
        range.records[0].bank_image_url,
        "https://cdn.example/banks/001.svg"
    );
    assert_eq!(available_statuses(&range.records), vec!["ATIVA", "CONCLUIDA"]);

    let filter = TransactionFilter::new(Some("px-2".to_string()), None);
    let shown = filter.apply(&range.records);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].value, 50.0);
    Ok(())
}

#[tokio::test]
async fn test_transaction_window_limit_is_fifteen_days() {
    let server = MockServer::start().await;
    let window = DateWindow::new(date("2025-09-01"), date("2025-09-16")).unwrap();

    let result = fetcher_for(&server)
        .fetch_bank_transactions(&window, "001", &fast_options(15, ReduceMode::Concat))
        .await;

    assert!(matches!(result, Err(FetchError::Validation(_))));
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_bank_number_is_required() {
    let server = MockServer::start().await;
    let window = DateWindow::new(date("2025-09-01"), date("2025-09-01")).unwrap();

    let result = fetcher_for(&server)
        .fetch_bank_transactions(&window, " ", &fast_options(15, ReduceMode::Concat))
        .await;

    assert!(matches!(result, Err(FetchError::Validation(_))));
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_refetch_only_days_with_data() -> anyhow::Result<()> {
    let server = MockServer::start().await;

    // summary pass for bank 001
    mount_day(
        &server,
        GENERAL,
        "2025-09-01",
        json_body(json!([daily_json("001", "2025-09-01", 100.0, 0.0, 0.0)])),
    )
    .await;
    mount_day(&server, GENERAL, "2025-09-02", text_body(NO_DATA_SENTINEL)).await;
    mount_day(
        &server,
        GENERAL,
        "2025-09-03",
        json_body(json!([daily_json("001", "2025-09-03", 0.0, 40.0, 0.0)])),
    )
    .await;

    // drill-down touches only days 1 and 3
    mount_day(
        &server,
        DETAILS,
        "2025-09-01",
        json_body(json!([transaction_json("PX-1", "001", "2025-09-01", 100.0, "CONCLUIDA")])),
    )
    .await;
    forbid_day(&server, DETAILS, "2025-09-02").await;
    mount_day(
        &server,
        DETAILS,
        "2025-09-03",
        json_body(json!([transaction_json("PX-3", "001", "2025-09-03", 40.0, "ATIVA")])),
    )
    .await;

    let fetcher = fetcher_for(&server);
    let window = DateWindow::new(date("2025-09-01"), date("2025-09-03"))?;
    let summary = fetcher
        .fetch_summary(&window, Some("001"), &fast_options(30, ReduceMode::Concat))
        .await?;
    assert_eq!(
        summary.days_with_data,
        vec![date("2025-09-01"), date("2025-09-03")]
    );

    let range = fetcher
        .fetch_bank_transactions_on_days(
            &window,
            &summary.days_with_data,
            "001",
            &fast_options(15, ReduceMode::Concat),
        )
        .await?;

    assert_eq!(range.days.len(), 2);
    let ids: Vec<&str> = range.records.iter().map(|t| t.pix_id.as_str()).collect();
    assert_eq!(ids, vec!["PX-1", "PX-3"]);
    Ok(())
}

#[tokio::test]
async fn test_days_with_data_drill_down_checks_limit_before_summary() {
    let server = MockServer::start().await;
    let window = DateWindow::new(date("2025-09-01"), date("2025-09-16")).unwrap();

    let result = fetcher_for(&server)
        .fetch_bank_transactions_with_data(
            &window,
            "341",
            &fast_options(30, ReduceMode::Concat),
            &fast_options(15, ReduceMode::Concat),
        )
        .await;

    assert!(matches!(result, Err(FetchError::Validation(_))));
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_days_with_data_drill_down() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_day(
        &server,
        GENERAL,
        "2025-09-01",
        json_body(json!([daily_json("341", "2025-09-01", 75.0, 0.0, 0.0)])),
    )
    .await;
    mount_day(&server, GENERAL, "2025-09-02", text_body(NO_DATA_SENTINEL)).await;
    mount_day(
        &server,
        DETAILS,
        "2025-09-01",
        json_body(json!([transaction_json("PX-9", "341", "2025-09-01", 75.0, "CONCLUIDA")])),
    )
    .await;
    forbid_day(&server, DETAILS, "2025-09-02").await;

    let window = DateWindow::new(date("2025-09-01"), date("2025-09-02"))?;
    let range = fetcher_for(&server)
        .fetch_bank_transactions_with_data(
            &window,
            "341",
            &fast_options(30, ReduceMode::Concat),
            &fast_options(15, ReduceMode::Concat),
        )
        .await?;

    assert_eq!(range.days_with_data, vec![date("2025-09-01")]);
    assert_eq!(range.records.len(), 1);
    assert_eq!(range.records[0].pix_id, "PX-9");
    assert_eq!(range.failed_days().count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_refetch_rejects_day_outside_window() {
    let server = MockServer::start().await;
    let window = DateWindow::new(date("2025-09-01"), date("2025-09-03")).unwrap();

    let result = fetcher_for(&server)
        .fetch_bank_transactions_on_days(
            &window,
            &[date("2025-09-02"), date("2025-09-09")],
            "001",
            &fast_options(15, ReduceMode::Concat),
        )
        .await;

    assert!(matches!(result, Err(FetchError::Validation(_))));
    assert_eq!(request_count(&server).await, 0);
}
