use super::error::SubmissionError;
use super::waitlist::{NewSignup, WaitlistRequest};

/// Lifecycle of one waitlist form instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    /// Terminal for the session
    Success,
    Error(SubmissionError),
}

impl SubmissionState {
    /// Validates `request` and moves to `Submitting`.
    ///
    /// Yields the signup to send, or `None` when a submission is already in
    /// flight or has succeeded. Invalid input moves to `Error` without
    /// producing anything to send.
    pub fn begin(&mut self, request: &WaitlistRequest) -> Result<Option<NewSignup>, SubmissionError> {
        if matches!(self, SubmissionState::Submitting | SubmissionState::Success) {
            return Ok(None);
        }
        match request.validate() {
            Ok(signup) => {
                *self = SubmissionState::Submitting;
                Ok(Some(signup))
            }
            Err(err) => {
                *self = SubmissionState::Error(err.clone());
                Err(err)
            }
        }
    }

    /// Applies the outcome of the in-flight request. Returns `true` only on
    /// the transition into `Success`.
    pub fn finish(&mut self, outcome: Result<(), SubmissionError>) -> bool {
        if *self != SubmissionState::Submitting {
            return false;
        }
        match outcome {
            Ok(()) => {
                *self = SubmissionState::Success;
                true
            }
            Err(err) => {
                *self = SubmissionState::Error(err);
                false
            }
        }
    }

    /// Any input change clears a displayed error
    pub fn edit(&mut self) {
        if let SubmissionState::Error(_) = self {
            *self = SubmissionState::Idle;
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionState::Success)
    }

    pub fn error(&self) -> Option<&SubmissionError> {
        match self {
            SubmissionState::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Whether the submit button is enabled for the current email input
    pub fn can_submit(&self, email: &str) -> bool {
        !matches!(self, SubmissionState::Submitting | SubmissionState::Success)
            && !email.trim().is_empty()
    }
}
