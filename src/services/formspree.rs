use chrono::Utc;
use reqwest::{header, Client};
use serde_json::Value;

use crate::config::WaitlistConfig;
use crate::models::{classify_error, Failure, NewSignup, SubmissionError, WaitlistSubmission};

/// Relays waitlist signups to the Formspree form endpoint
#[derive(Debug, Clone)]
pub struct FormspreeClient {
    http: Client,
    endpoint: String,
    source: String,
}

impl FormspreeClient {
    pub fn new(config: &WaitlistConfig) -> Self {
        Self {
            http: Client::new(),
            endpoint: config.endpoint(),
            source: config.source.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Builds the payload for `signup`, stamped now, and sends it once.
    pub async fn join(&self, signup: &NewSignup) -> Result<(), SubmissionError> {
        let submission = WaitlistSubmission::new(signup, &self.source, Utc::now());
        self.submit(&submission).await
    }

    #[tracing::instrument(
        name = "Forwarding waitlist signup",
        skip(self, submission),
        fields(business_type = %submission.business_type.analytics_label())
    )]
    pub async fn submit(&self, submission: &WaitlistSubmission) -> Result<(), SubmissionError> {
        let res = self
            .http
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .json(submission)
            .send()
            .await
            .map_err(request_failure)?;

        let status = res.status();
        // Error bodies may be empty or not JSON at all
        let body: Value = res.json().await.unwrap_or(Value::Null);

        if status.is_success() {
            tracing::info!(
                event = "waitlist_signup",
                event_category = "conversion",
                event_label = submission.business_type.analytics_label(),
                "Waitlist signup accepted"
            );
            Ok(())
        } else {
            tracing::warn!(status = status.as_u16(), body = %body, "Waitlist signup rejected");
            Err(classify_error(Failure::Status {
                status: status.as_u16(),
                body: &body,
            }))
        }
    }
}

fn request_failure(err: reqwest::Error) -> SubmissionError {
    let reason = err.to_string();
    if err.is_connect() || err.is_timeout() || err.is_request() {
        tracing::error!(error = %reason, "Form endpoint unreachable");
        classify_error(Failure::Transport(&reason))
    } else {
        tracing::error!(error = %reason, "Waitlist request failed");
        classify_error(Failure::Other(&reason))
    }
}
