use thiserror::Error;

/// Reasons a submit attempt is refused before any request is issued
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("the previous submission has not been acknowledged")]
    NotIdle,
    #[error("honeypot field is filled in")]
    HoneypotFilled,
}

/// Failure of the outbound submission request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("could not build request: {0}")]
    Request(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("endpoint answered {status}: {message}")]
    Status { status: u16, message: String },
}
