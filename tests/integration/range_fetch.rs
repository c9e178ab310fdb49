//! Day-range fan-out against the mock `/charge/general` endpoint

use crate::common::fixtures::daily_json;
use crate::common::mock_api::{
    fast_options, fetcher_for, forbid_day, json_body, mount_day, request_count,
    signed_out_fetcher, text_body, with_tokens, TokenLostOnCall,
};
use chrono::NaiveDate;
use pix_monitor::analysis::{group_by_bank, SummaryStatistics};
use pix_monitor::api::NO_DATA_SENTINEL;
use pix_monitor::errors::FetchError;
use pix_monitor::fetch::{DayOutcome, Endpoint, FetchGeneration, RangeFetch, ReduceMode};
use pix_monitor::types::{DailyRecord, DateWindow};
use serde_json::json;
use std::time::Duration;
use wiremock::{MockServer, ResponseTemplate};

const GENERAL: &str = "/charge/general";

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn window(from: &str, to: &str) -> DateWindow {
    DateWindow::new(date(from), date(to)).unwrap()
}

#[tokio::test]
async fn test_end_to_end_three_day_window() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_day(
        &server,
        GENERAL,
        "2025-09-01",
        json_body(json!([
            daily_json("001", "2025-09-01", 100.0, 50.0, 0.0),
            daily_json("237", "2025-09-01", 0.0, 0.0, 0.0),
        ])),
    )
    .await;
    mount_day(&server, GENERAL, "2025-09-02", text_body(NO_DATA_SENTINEL)).await;
    mount_day(
        &server,
        GENERAL,
        "2025-09-03",
        json_body(json!([daily_json("001", "2025-09-03", 200.0, 0.0, 0.0)])),
    )
    .await;

    let fetcher = fetcher_for(&server);
    let report = fetcher
        .fetch_summary(
            &window("2025-09-01", "2025-09-03"),
            None,
            &fast_options(30, ReduceMode::Concat),
        )
        .await?;

    // the zero-activity row is dropped, the sentinel day contributes nothing
    assert_eq!(report.records.len(), 2);
    assert_eq!(report.records[0].date, "2025-09-01");
    assert_eq!(report.records[1].date, "2025-09-03");
    assert_eq!(
        report.days_with_data,
        vec![date("2025-09-01"), date("2025-09-03")]
    );
    assert_eq!(report.days[1].outcome, DayOutcome::NoData);

    let grouped = group_by_bank(&report.records);
    assert_eq!(grouped.len(), 1);
    assert_eq!(grouped[0].bank_num, "001");
    assert_eq!(grouped[0].total_amount, 350.0);
    assert_eq!(grouped[0].date, "2025-09-03");

    let expected_count: u64 = report.records.iter().map(|r| r.total_count).sum();
    assert_eq!(report.statistics.total_transactions, expected_count);
    assert_eq!(report.statistics.total_amount, 350.0);
    assert_eq!(report.performance.request_count, 3);

    // image URLs are unescaped
    assert_eq!(
        report.records[0].bank_image_url,
        "https://cdn.example/banks/001.svg"
    );
    Ok(())
}

#[tokio::test]
async fn test_one_request_per_day() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let w = window("2025-08-28", "2025-09-03");
    for day in w.days() {
        let day = day.format("%Y-%m-%d").to_string();
        mount_day(
            &server,
            GENERAL,
            &day,
            json_body(json!([daily_json("341", &day, 10.0, 0.0, 0.0)])),
        )
        .await;
    }

    let fetched: RangeFetch<DailyRecord> = fetcher_for(&server)
        .fetch_range(&w, Endpoint::ChargeGeneral, None, &fast_options(30, ReduceMode::Concat))
        .await?;

    assert_eq!(request_count(&server).await, 7);
    assert_eq!(fetched.records.len(), 7);
    assert_eq!(fetched.days_with_data.len(), 7);
    Ok(())
}

#[tokio::test]
async fn test_window_over_limit_sends_nothing() {
    let server = MockServer::start().await;
    let fetcher = fetcher_for(&server);

    // 16 days against the 15-day transaction limit
    let result = fetcher
        .fetch_summary(
            &window("2025-09-01", "2025-09-16"),
            None,
            &fast_options(15, ReduceMode::Concat),
        )
        .await;

    assert!(matches!(result, Err(FetchError::Validation(_))));
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_signed_out_sends_nothing() {
    let server = MockServer::start().await;

    let result = signed_out_fetcher(&server)
        .fetch_summary(
            &window("2025-09-01", "2025-09-03"),
            None,
            &fast_options(30, ReduceMode::Concat),
        )
        .await;

    assert_eq!(result.unwrap_err(), FetchError::Unauthenticated);
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_blank_bank_filter_is_rejected() {
    let server = MockServer::start().await;

    let result = fetcher_for(&server)
        .fetch_summary(
            &window("2025-09-01", "2025-09-01"),
            Some("  "),
            &fast_options(30, ReduceMode::Concat),
        )
        .await;

    assert!(matches!(result, Err(FetchError::Validation(_))));
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_bad_days_do_not_abort_siblings() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_day(
        &server,
        GENERAL,
        "2025-09-01",
        json_body(json!([daily_json("001", "2025-09-01", 10.0, 0.0, 0.0)])),
    )
    .await;
    mount_day(
        &server,
        GENERAL,
        "2025-09-02",
        text_body("[{\"bank_num\": \"001\", "),
    )
    .await;
    mount_day(&server, GENERAL, "2025-09-03", ResponseTemplate::new(401)).await;
    mount_day(
        &server,
        GENERAL,
        "2025-09-04",
        text_body("<html>gateway timeout</html>"),
    )
    .await;
    mount_day(
        &server,
        GENERAL,
        "2025-09-05",
        json_body(json!({"message": "not an array"})),
    )
    .await;
    mount_day(&server, GENERAL, "2025-09-06", ResponseTemplate::new(500)).await;
    mount_day(
        &server,
        GENERAL,
        "2025-09-07",
        json_body(json!([daily_json("033", "2025-09-07", 0.0, 20.0, 5.0)])),
    )
    .await;

    let report = fetcher_for(&server)
        .fetch_summary(
            &window("2025-09-01", "2025-09-07"),
            None,
            &fast_options(30, ReduceMode::Concat),
        )
        .await?;

    let banks: Vec<&str> = report.records.iter().map(|r| r.bank_num.as_str()).collect();
    assert_eq!(banks, vec!["001", "033"]);
    assert_eq!(
        report.days_with_data,
        vec![date("2025-09-01"), date("2025-09-07")]
    );

    let failed: Vec<NaiveDate> = report
        .days
        .iter()
        .filter(|d| matches!(d.outcome, DayOutcome::Failed(_)))
        .map(|d| d.day)
        .collect();
    assert_eq!(failed.len(), 5);
    assert!(!failed.contains(&date("2025-09-01")));
    Ok(())
}

#[tokio::test]
async fn test_token_lost_mid_range_fails_only_that_day() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_day(
        &server,
        GENERAL,
        "2025-09-01",
        json_body(json!([daily_json("001", "2025-09-01", 10.0, 0.0, 0.0)])),
    )
    .await;
    forbid_day(&server, GENERAL, "2025-09-02").await;
    mount_day(
        &server,
        GENERAL,
        "2025-09-03",
        json_body(json!([daily_json("237", "2025-09-03", 0.0, 30.0, 0.0)])),
    )
    .await;

    // pre-check, day 1, then day 2 finds no session
    let fetcher = with_tokens(&server, TokenLostOnCall::new(2));
    let options =
        fast_options(30, ReduceMode::Concat).with_stagger(Duration::from_millis(25));
    let range: RangeFetch<DailyRecord> = fetcher
        .fetch_range(
            &window("2025-09-01", "2025-09-03"),
            Endpoint::ChargeGeneral,
            None,
            &options,
        )
        .await?;

    let failed: Vec<NaiveDate> = range.failed_days().map(|d| d.day).collect();
    assert_eq!(failed, vec![date("2025-09-02")]);

    let banks: Vec<&str> = range.records.iter().map(|r| r.bank_num.as_str()).collect();
    assert_eq!(banks, vec!["001", "237"]);
    assert_eq!(
        range.days_with_data,
        vec![date("2025-09-01"), date("2025-09-03")]
    );
    assert_eq!(request_count(&server).await, 2);
    Ok(())
}

#[tokio::test]
async fn test_one_bad_row_fails_its_whole_day() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let mut bad_row = daily_json("237", "2025-09-01", 5.0, 0.0, 0.0);
    bad_row["total_count"] = json!(-1);
    mount_day(
        &server,
        GENERAL,
        "2025-09-01",
        json_body(json!([daily_json("001", "2025-09-01", 10.0, 0.0, 0.0), bad_row])),
    )
    .await;
    mount_day(
        &server,
        GENERAL,
        "2025-09-02",
        json_body(json!([daily_json("033", "2025-09-02", 20.0, 0.0, 0.0)])),
    )
    .await;

    let range: RangeFetch<DailyRecord> = fetcher_for(&server)
        .fetch_range(
            &window("2025-09-01", "2025-09-02"),
            Endpoint::ChargeGeneral,
            None,
            &fast_options(30, ReduceMode::Concat),
        )
        .await?;

    let failed: Vec<NaiveDate> = range.failed_days().map(|d| d.day).collect();
    assert_eq!(failed, vec![date("2025-09-01")]);
    let banks: Vec<&str> = range.records.iter().map(|r| r.bank_num.as_str()).collect();
    assert_eq!(banks, vec!["033"]);
    assert_eq!(range.days_with_data, vec![date("2025-09-02")]);
    Ok(())
}

#[tokio::test]
async fn test_entirely_empty_window_is_not_an_error() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_day(&server, GENERAL, "2025-09-01", text_body(NO_DATA_SENTINEL)).await;
    mount_day(&server, GENERAL, "2025-09-02", json_body(json!([]))).await;

    let report = fetcher_for(&server)
        .fetch_summary(
            &window("2025-09-01", "2025-09-02"),
            None,
            &fast_options(30, ReduceMode::Concat),
        )
        .await?;

    assert!(report.records.is_empty());
    assert!(report.days_with_data.is_empty());
    assert_eq!(report.statistics, SummaryStatistics::default());
    assert_eq!(report.days[1].outcome, DayOutcome::Records(0));
    Ok(())
}

#[tokio::test]
async fn test_bank_filter_is_sent() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::path(GENERAL))
        .and(wiremock::matchers::query_param("bank_num", "341"))
        .and(wiremock::matchers::query_param("date_from", "2025-09-01"))
        .respond_with(json_body(json!([daily_json(
            "341",
            "2025-09-01",
            5.0,
            0.0,
            0.0
        )])))
        .expect(1)
        .mount(&server)
        .await;

    let report = fetcher_for(&server)
        .fetch_summary(
            &window("2025-09-01", "2025-09-01"),
            Some("341"),
            &fast_options(30, ReduceMode::Concat),
        )
        .await?;

    assert_eq!(report.bank_filter.as_deref(), Some("341"));
    assert_eq!(report.records.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_sum_by_bank_mode() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_day(
        &server,
        GENERAL,
        "2025-09-01",
        json_body(json!([
            daily_json("001", "2025-09-01", 100.0, 50.0, 0.0),
            daily_json("237", "2025-09-01", 0.0, 0.0, 30.0),
        ])),
    )
    .await;
    mount_day(
        &server,
        GENERAL,
        "2025-09-02",
        json_body(json!([daily_json("001", "2025-09-02", 200.0, 0.0, 0.0)])),
    )
    .await;

    let report = fetcher_for(&server)
        .fetch_summary(
            &window("2025-09-01", "2025-09-02"),
            None,
            &fast_options(30, ReduceMode::SumByBank),
        )
        .await?;

    assert_eq!(report.reduce_mode, ReduceMode::SumByBank);
    assert_eq!(report.records.len(), 2);
    assert_eq!(report.records[0].bank_num, "001");
    assert_eq!(report.records[0].total_amount, 350.0);
    assert_eq!(report.records[0].date, "2025-09-02");
    assert!((report.records[0].percent_sum() - 100.0).abs() < 1e-9);
    assert_eq!(report.statistics.total_amount, 380.0);
    Ok(())
}

#[tokio::test]
async fn test_superseded_fetch_is_discarded() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let slow = |day: &str| {
        json_body(json!([daily_json("001", day, 10.0, 0.0, 0.0)]))
            .set_delay(Duration::from_millis(100))
    };
    wiremock::Mock::given(wiremock::matchers::path(GENERAL))
        .and(wiremock::matchers::query_param("date_from", "2025-09-01"))
        .respond_with(slow("2025-09-01"))
        .mount(&server)
        .await;

    let generation = FetchGeneration::new();
    let first = fetcher_for(&server).with_generation(generation.clone());
    let second = fetcher_for(&server).with_generation(generation.clone());
    let w = window("2025-09-01", "2025-09-01");
    let options = fast_options(30, ReduceMode::Concat);

    let (older, newer) = tokio::join!(
        first.fetch_summary(&w, None, &options),
        second.fetch_summary(&w, None, &options)
    );

    assert_eq!(
        older.unwrap_err(),
        FetchError::Superseded { generation: 1 }
    );
    assert_eq!(newer?.records.len(), 1);
    assert_eq!(generation.current(), 2);
    Ok(())
}
