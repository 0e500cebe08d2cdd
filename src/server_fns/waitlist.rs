use leptos::prelude::*;

use crate::models::SubmissionError;

/// Validates a signup and forwards it to the form-collection service.
#[server]
pub async fn join_waitlist(
    email: String,
    company_name: String,
    business_type: String,
) -> Result<(), SubmissionError> {
    use axum::Extension;
    use crate::{models::WaitlistRequest, state::AppState};
    use leptos_axum::extract;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| SubmissionError::Unexpected(e.to_string()))?;

    let signup = WaitlistRequest {
        email,
        company_name,
        business_type,
    }
    .validate()
    .inspect_err(|e| tracing::info!(error = %e, "Rejected waitlist signup"))?;

    state.formspree.join(&signup).await
}
