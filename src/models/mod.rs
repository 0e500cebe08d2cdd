mod error;
mod submission;
mod waitlist;

pub use error::{classify_error, ErrorKind, Failure, SubmissionError};
pub use submission::SubmissionState;
pub use waitlist::{
    is_valid_email, BusinessType, NewSignup, SignupEmail, WaitlistRequest, WaitlistSubmission,
    DEFAULT_SOURCE, INVALID_EMAIL,
};
