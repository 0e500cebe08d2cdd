//! tests/api/formspree.rs

use serde_json::json;
use sproof::models::{ErrorKind, SubmissionError};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{form_path, request, spawn_relay, unreachable_relay};

#[tokio::test]
async fn join_posts_json_payload_to_the_form_endpoint() {
    let relay = spawn_relay().await;
    let signup = request("shop@example.com", "Acme", "print-shop")
        .validate()
        .unwrap();

    Mock::given(method("POST"))
        .and(path(form_path()))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(body_partial_json(json!({
            "email": "shop@example.com",
            "company_name": "Acme",
            "business_type": "print-shop",
            "source": "S-Proof Website",
            "_subject": "New S-Proof waitlist signup from Acme",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "next": "/thanks", "ok": true })))
        .expect(1)
        .mount(&relay.formspree_server)
        .await;

    relay.client.join(&signup).await.unwrap();
}

#[tokio::test]
async fn timestamp_is_iso_8601_utc() {
    let relay = spawn_relay().await;
    let signup = request("shop@example.com", "", "").validate().unwrap();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&relay.formspree_server)
        .await;

    relay.client.join(&signup).await.unwrap();

    let received = relay.formspree_server.received_requests().await.unwrap();
    let body: serde_json::Value = received[0].body_json().unwrap();
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(timestamp.ends_with('Z'), "{timestamp} is not UTC");
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    assert_eq!(body["_subject"], "New S-Proof waitlist signup from shop@example.com");
}

#[tokio::test]
async fn success_without_json_body_is_still_accepted() {
    let relay = spawn_relay().await;
    let signup = request("shop@example.com", "", "").validate().unwrap();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&relay.formspree_server)
        .await;

    assert!(relay.client.join(&signup).await.is_ok());
}

#[tokio::test]
async fn recaptcha_rejection_asks_to_disable_bot_verification() {
    let relay = spawn_relay().await;
    let signup = request("shop@example.com", "", "").validate().unwrap();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({ "error": "reCAPTCHA required" })))
        .expect(1)
        .mount(&relay.formspree_server)
        .await;

    let err = relay.client.join(&signup).await.unwrap_err();
    assert_eq!(err, SubmissionError::BotVerification);
    assert!(err.to_string().contains("disable reCAPTCHA"));
}

#[tokio::test]
async fn unprocessable_submission_asks_to_check_email() {
    let relay = spawn_relay().await;
    let signup = request("shop@example.com", "", "").validate().unwrap();

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({ "errors": [{ "field": "email", "code": "TYPE_EMAIL" }] })),
        )
        .expect(1)
        .mount(&relay.formspree_server)
        .await;

    let err = relay.client.join(&signup).await.unwrap_err();
    assert_eq!(err, SubmissionError::InvalidSubmission);
}

#[tokio::test]
async fn rate_limited_submission_asks_to_wait() {
    let relay = spawn_relay().await;
    let signup = request("shop@example.com", "", "").validate().unwrap();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&relay.formspree_server)
        .await;

    let err = relay.client.join(&signup).await.unwrap_err();
    assert!(err.to_string().contains("Too many requests"));
    assert_eq!(err.kind(), ErrorKind::ClientRejected);
}

#[tokio::test]
async fn server_failure_with_empty_body_reports_status() {
    let relay = spawn_relay().await;
    let signup = request("shop@example.com", "", "").validate().unwrap();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&relay.formspree_server)
        .await;

    let err = relay.client.join(&signup).await.unwrap_err();
    assert_eq!(err, SubmissionError::Server { status: 502 });
    assert_eq!(err.to_string(), "Server error (502). Please try again.");
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_error() {
    let client = unreachable_relay();
    let signup = request("shop@example.com", "", "").validate().unwrap();

    let err = client.join(&signup).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.to_string().contains("check your internet connection"));
}
