use leptos::server_fn::codec::JsonEncoding;
use leptos::server_fn::error::{FromServerFnError, ServerFnErrorErr};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Errors a waitlist submission can end in. Every variant leaves the form editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum SubmissionError {
    #[error("{0}")]
    Validation(String),
    #[error("Please disable reCAPTCHA in your Formspree form settings for AJAX submissions.")]
    BotVerification,
    #[error("Please check your email address and try again.")]
    InvalidSubmission,
    #[error("Too many requests. Please wait a moment and try again.")]
    RateLimited,
    #[error("Server error ({status}). Please try again.")]
    Server { status: u16 },
    #[error("Network error. Please check your internet connection and try again.")]
    Network(String),
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caught before any request is made
    Validation,
    /// 4xx the user can act on
    ClientRejected,
    Server,
    /// No response was received
    Transport,
    Unexpected,
}

impl SubmissionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SubmissionError::Validation(_) => ErrorKind::Validation,
            SubmissionError::BotVerification
            | SubmissionError::InvalidSubmission
            | SubmissionError::RateLimited => ErrorKind::ClientRejected,
            SubmissionError::Server { .. } => ErrorKind::Server,
            SubmissionError::Network(_) => ErrorKind::Transport,
            SubmissionError::Unexpected(_) => ErrorKind::Unexpected,
        }
    }
}

impl FromServerFnError for SubmissionError {
    type Encoder = JsonEncoding;

    fn from_server_fn_error(value: ServerFnErrorErr) -> Self {
        match value {
            // the browser never reached our server
            ServerFnErrorErr::Request(reason) => classify_error(Failure::Transport(&reason)),
            other => classify_error(Failure::Other(&other.to_string())),
        }
    }
}

/// How a submission attempt failed, before it is mapped to a user-facing error
#[derive(Debug, Clone, Copy)]
pub enum Failure<'a> {
    /// A response arrived with a non-2xx status
    Status { status: u16, body: &'a Value },
    /// The request never produced a response
    Transport(&'a str),
    Other(&'a str),
}

/// Maps a failed attempt to the message shown on the form.
pub fn classify_error(failure: Failure<'_>) -> SubmissionError {
    match failure {
        Failure::Status { status: 403, body } if requires_bot_verification(body) => {
            SubmissionError::BotVerification
        }
        Failure::Status { status: 422, .. } => SubmissionError::InvalidSubmission,
        Failure::Status { status: 429, .. } => SubmissionError::RateLimited,
        Failure::Status { status, .. } => SubmissionError::Server { status },
        Failure::Transport(reason) => SubmissionError::Network(reason.to_string()),
        Failure::Other(reason) => SubmissionError::Unexpected(reason.to_string()),
    }
}

fn requires_bot_verification(body: &Value) -> bool {
    body.get("error")
        .and_then(Value::as_str)
        .is_some_and(|msg| msg.to_ascii_lowercase().contains("recaptcha"))
}
