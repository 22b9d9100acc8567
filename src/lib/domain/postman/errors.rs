//! Error types for the postman module

use thiserror::Error;
use tracing::debug;

/// Errors that can occur when handling a `SendEmail` call
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SendEmailError {
    /// A required request field was empty
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// The sender address is not a syntactically valid mail address
    #[error("invalid sender email: {0}")]
    InvalidAddress(String),

    /// The mail transport rejected authentication or submission, or the
    /// connection failed
    #[error("{0}")]
    DeliveryFailed(String),

    /// The delivery deadline elapsed before the transport answered
    #[error("delivery deadline exceeded")]
    DeadlineExceeded,
}

/// Errors raised by a [`DeliveryClient`](super::DeliveryClient)
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// Transport or protocol failure, with the transport's own message
    #[error("{0}")]
    Failed(String),

    /// The deadline passed while the submission was in flight
    #[error("delivery deadline exceeded")]
    DeadlineExceeded,
}

impl From<DeliveryError> for SendEmailError {
    fn from(err: DeliveryError) -> Self {
        debug!("DeliveryError -> SendEmailError");

        match err {
            DeliveryError::Failed(message) => SendEmailError::DeliveryFailed(message),
            DeliveryError::DeadlineExceeded => SendEmailError::DeadlineExceeded,
        }
    }
}
