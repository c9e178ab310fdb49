//! Single-charge detail and history lookups

use crate::common::fixtures::{details_json, history_json};
use crate::common::mock_api::{fetcher_for, json_body, request_count, signed_out_fetcher, text_body};
use pix_monitor::api::NO_DATA_SENTINEL;
use pix_monitor::errors::FetchError;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_details(server: &MockServer, pix_id: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/charge/details"))
        .and(query_param("pix_id", pix_id))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_history(server: &MockServer, pix_id: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/history/{}", pix_id)))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

fn not_found(pix_id: &str) -> FetchError {
    FetchError::NotFound {
        pix_id: pix_id.to_string(),
    }
}

#[tokio::test]
async fn test_details_object() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_details(&server, "PX-1", json_body(details_json("PX-1"))).await;

    let details = fetcher_for(&server).fetch_details("PX-1").await?;
    assert_eq!(details.pix_id, "PX-1");
    assert_eq!(details.value, 150.75);
    assert_eq!(details.customer_document(), "12345678900");
    assert_eq!(
        details.qr_code.as_ref().map(|qr| qr.image.as_str()),
        Some("https://qr.example/code.png")
    );
    Ok(())
}

#[tokio::test]
async fn test_details_single_element_array() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_details(&server, "PX-2", json_body(json!([details_json("PX-2")]))).await;

    let details = fetcher_for(&server).fetch_details("PX-2").await?;
    assert_eq!(details.pix_id, "PX-2");
    Ok(())
}

#[tokio::test]
async fn test_details_degraded_bodies_are_not_found() {
    let server = MockServer::start().await;
    mount_details(&server, "PX-S", text_body(NO_DATA_SENTINEL)).await;
    mount_details(&server, "PX-E", json_body(json!([]))).await;
    mount_details(&server, "PX-H", text_body("<html>oops</html>")).await;
    mount_details(&server, "PX-M", text_body("{\"pix_id\": ")).await;

    let fetcher = fetcher_for(&server);
    for pix_id in ["PX-S", "PX-E", "PX-H", "PX-M"] {
        assert_eq!(
            fetcher.fetch_details(pix_id).await.unwrap_err(),
            not_found(pix_id),
            "{}",
            pix_id
        );
    }
}

#[tokio::test]
async fn test_details_http_error_is_reported() {
    let server = MockServer::start().await;
    mount_details(&server, "PX-1", ResponseTemplate::new(503)).await;

    let err = fetcher_for(&server).fetch_details("PX-1").await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 503, .. }));
}

#[tokio::test]
async fn test_details_requires_id_and_token() {
    let server = MockServer::start().await;

    let err = fetcher_for(&server).fetch_details("  ").await.unwrap_err();
    assert!(matches!(err, FetchError::Validation(_)));

    let err = signed_out_fetcher(&server)
        .fetch_details("PX-1")
        .await
        .unwrap_err();
    assert_eq!(err, FetchError::Unauthenticated);
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_history_sorted_newest_first() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_history(
        &server,
        "PX-1",
        json_body(json!([
            history_json("1", "2025-09-01 10:00:00", "CRIADA"),
            history_json("2", "", "SEM_DATA"),
            history_json("3", "2025-09-03 08:30:00", "CONCLUIDA"),
            history_json("4", "2025-09-02T12:00:00", "ATIVA"),
        ])),
    )
    .await;

    let entries = fetcher_for(&server).fetch_history("PX-1").await?;
    let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "4", "1", "2"]);
    assert_eq!(entries[0].description, "changed by workflow");
    Ok(())
}

#[tokio::test]
async fn test_history_degraded_bodies_are_empty() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_history(&server, "PX-S", text_body(NO_DATA_SENTINEL)).await;
    mount_history(&server, "PX-H", text_body("Internal error")).await;
    mount_history(&server, "PX-O", json_body(json!({"error": "x"}))).await;

    let fetcher = fetcher_for(&server);
    for pix_id in ["PX-S", "PX-H", "PX-O"] {
        assert!(fetcher.fetch_history(pix_id).await?.is_empty(), "{}", pix_id);
    }
    Ok(())
}
