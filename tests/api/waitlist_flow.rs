//! tests/api/waitlist_flow.rs

use serde_json::json;
use sproof::models::{ErrorKind, SubmissionState};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{form_path, request, spawn_relay};

#[tokio::test]
async fn invalid_emails_never_reach_the_network() {
    let relay = spawn_relay().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&relay.formspree_server)
        .await;

    for email in ["", "shop", "shop@", "shop@example", "@example.com", "sh op@example.com"] {
        let mut state = SubmissionState::Idle;
        let started = state.begin(&request(email, "Acme", "print-shop"));

        let err = started.expect_err("invalid email should not start a submission");
        assert_eq!(err.kind(), ErrorKind::Validation, "email {email:?}");
        assert!(state.error().is_some());
    }
}

#[tokio::test]
async fn print_shop_signup_reaches_success() {
    let relay = spawn_relay().await;

    Mock::given(method("POST"))
        .and(path(form_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&relay.formspree_server)
        .await;

    let mut state = SubmissionState::Idle;
    let signup = state
        .begin(&request("shop@example.com", "Acme", "print-shop"))
        .unwrap()
        .expect("submission should start");

    // A second submit while the first is in flight is ignored
    assert!(state
        .begin(&request("shop@example.com", "Acme", "print-shop"))
        .unwrap()
        .is_none());

    let outcome = relay.client.join(&signup).await;
    let mut success_callbacks = 0;
    if state.finish(outcome.clone()) {
        success_callbacks += 1;
    }
    if state.finish(outcome) {
        success_callbacks += 1;
    }

    assert!(state.is_success());
    assert_eq!(success_callbacks, 1);

    let received = relay.formspree_server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    let body: serde_json::Value = received[0].body_json().unwrap();
    assert_eq!(body["business_type"], "print-shop");
    assert_eq!(body["company_name"], "Acme");
}

#[tokio::test]
async fn failed_attempt_leaves_form_editable_for_retry() {
    let relay = spawn_relay().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .expect(1)
        .mount(&relay.formspree_server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&relay.formspree_server)
        .await;

    let mut state = SubmissionState::Idle;
    let form = request("shop@example.com", "", "freelancer");

    let signup = state.begin(&form).unwrap().unwrap();
    assert!(!state.finish(relay.client.join(&signup).await));
    assert!(state.error().unwrap().to_string().contains("wait a moment"));
    assert!(state.can_submit("shop@example.com"));

    let signup = state.begin(&form).unwrap().unwrap();
    assert!(state.finish(relay.client.join(&signup).await));
    assert!(state.is_success());
}
