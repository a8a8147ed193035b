//! Fetcher behavior tests against a mock HTTP server.
//!
//! No real network access: `httptest` serves controlled responses on
//! localhost. TLS fallback is exercised by pointing an `https://` URL at the
//! plain-HTTP mock server, which fails the handshake deterministically.

use httptest::{matchers::*, responders::*, Expectation, Server};
use std::io::Write;

use super::{downgrade_to_http, truncate_reason, PageFetcher};
use crate::config::AnalyzerConfig;
use crate::models::FetchOutcome;

fn fetcher() -> PageFetcher {
    let config = AnalyzerConfig {
        timeout: std::time::Duration::from_secs(5),
        ..Default::default()
    };
    PageFetcher::new(&config).expect("fetcher should build")
}

#[tokio::test]
async fn test_fetch_success_captures_status_body_and_timing() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/")).respond_with(
            status_code(200)
                .append_header("Server", "nginx/1.18.0")
                .body("<html><title>Hello</title></html>"),
        ),
    );

    let url = format!("http://{}/", server.addr());
    match fetcher().fetch(&url).await {
        FetchOutcome::Success(page) => {
            assert_eq!(page.status, 200);
            assert_eq!(page.body, "<html><title>Hello</title></html>");
            assert_eq!(
                page.headers.get("server").and_then(|v| v.to_str().ok()),
                Some("nginx/1.18.0")
            );
        }
        FetchOutcome::Failure { reason } => panic!("expected success, got failure: {reason}"),
    }
}

#[tokio::test]
async fn test_fetch_error_status_is_failure_not_fallback() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/missing"))
            .respond_with(status_code(404)),
    );

    let url = format!("http://{}/missing", server.addr());
    match fetcher().fetch(&url).await {
        FetchOutcome::Failure { reason } => assert_eq!(reason, "HTTP Status: 404"),
        FetchOutcome::Success(_) => panic!("expected failure for 404"),
    }
}

#[tokio::test]
async fn test_fetch_server_error_status() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/")).respond_with(status_code(503)),
    );

    let url = format!("http://{}/", server.addr());
    match fetcher().fetch(&url).await {
        FetchOutcome::Failure { reason } => assert_eq!(reason, "HTTP Status: 503"),
        FetchOutcome::Success(_) => panic!("expected failure for 503"),
    }
}

#[tokio::test]
async fn test_fetch_follows_redirects_to_success() {
    let server = Server::run();
    let final_url = format!("http://{}/final", server.addr());
    server.expect(
        Expectation::matching(request::method_path("GET", "/start"))
            .respond_with(status_code(302).append_header("Location", final_url)),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/final"))
            .respond_with(status_code(200).body("made it")),
    );

    let url = format!("http://{}/start", server.addr());
    match fetcher().fetch(&url).await {
        FetchOutcome::Success(page) => {
            assert_eq!(page.status, 200);
            assert_eq!(page.body, "made it");
        }
        FetchOutcome::Failure { reason } => panic!("expected success, got failure: {reason}"),
    }
}

#[tokio::test]
async fn test_https_transport_failure_falls_back_to_http() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .respond_with(status_code(200).body("served over plain http")),
    );

    // The mock server speaks plain HTTP, so the HTTPS attempt fails at the
    // TLS handshake and the fetcher retries over http://.
    let url = format!("https://{}/", server.addr());
    match fetcher().fetch(&url).await {
        FetchOutcome::Success(page) => assert_eq!(page.body, "served over plain http"),
        FetchOutcome::Failure { reason } => panic!("expected fallback success, got: {reason}"),
    }
}

#[tokio::test]
async fn test_https_and_http_both_failing() {
    // Port 1 is reserved and nothing listens on it; both attempts fail at
    // the transport level.
    match fetcher().fetch("https://127.0.0.1:1/").await {
        FetchOutcome::Failure { reason } => assert_eq!(reason, "Both HTTPS and HTTP failed"),
        FetchOutcome::Success(_) => panic!("expected failure"),
    }
}

#[tokio::test]
async fn test_http_transport_failure_has_no_fallback() {
    match fetcher().fetch("http://127.0.0.1:1/").await {
        FetchOutcome::Failure { reason } => {
            assert_ne!(reason, "Both HTTPS and HTTP failed");
            assert!(reason.chars().count() <= 100);
            assert!(!reason.is_empty());
        }
        FetchOutcome::Success(_) => panic!("expected failure"),
    }
}

#[tokio::test]
async fn test_gzip_body_is_decoded_and_header_preserved() {
    let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder
        .write_all(b"<html><h1>compressed</h1></html>")
        .unwrap();
    let compressed = encoder.finish().unwrap();

    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/")).respond_with(
            status_code(200)
                .append_header("Content-Encoding", "gzip")
                .body(compressed),
        ),
    );

    let url = format!("http://{}/", server.addr());
    match fetcher().fetch(&url).await {
        FetchOutcome::Success(page) => {
            assert_eq!(page.body, "<html><h1>compressed</h1></html>");
            assert_eq!(
                page.headers
                    .get("content-encoding")
                    .and_then(|v| v.to_str().ok()),
                Some("gzip")
            );
        }
        FetchOutcome::Failure { reason } => panic!("expected success, got: {reason}"),
    }
}

#[test]
fn test_downgrade_to_http() {
    assert_eq!(
        downgrade_to_http("https://example.com/path"),
        Some("http://example.com/path".to_string())
    );
    assert_eq!(
        downgrade_to_http("HTTPS://example.com"),
        Some("http://example.com".to_string())
    );
    assert_eq!(downgrade_to_http("http://example.com"), None);
    assert_eq!(downgrade_to_http("example.com"), None);
    assert_eq!(downgrade_to_http(""), None);
}

#[test]
fn test_truncate_reason() {
    let long = "x".repeat(250);
    assert_eq!(truncate_reason(&long).chars().count(), 100);
    assert_eq!(truncate_reason("short"), "short");
}
