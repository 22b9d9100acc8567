//! Inbound email request and its validation

use std::collections::BTreeMap;

use lettre::Address;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::errors::SendEmailError;

/// A request to send an email, as received from the caller
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct EmailRequest {
    /// The sender's email address
    #[schema(example = "alice@example.com")]
    pub sender_email: String,

    /// The sender's display name
    #[schema(example = "Alice")]
    pub sender_name: String,

    /// The subject line
    #[schema(example = "Hello")]
    pub subject: String,

    /// Flat key/value lines rendered into the body
    #[schema(example = json!({"phone": "+1 555 0100", "text": "Call me back"}))]
    pub message: BTreeMap<String, String>,
}

impl EmailRequest {
    /// Checks the request, returning a [`ValidEmailRequest`] on success.
    ///
    /// Checks run in order and stop at the first failure:
    /// 1. `sender_email` is not empty
    /// 2. `sender_email` is a valid `local-part@domain` address
    /// 3. `sender_name` is not empty
    pub fn validate(self) -> Result<ValidEmailRequest, SendEmailError> {
        if self.sender_email.is_empty() {
            return Err(SendEmailError::EmptyField("sender email"));
        }

        if let Err(e) = self.sender_email.parse::<Address>() {
            return Err(SendEmailError::InvalidAddress(e.to_string()));
        }

        if self.sender_name.is_empty() {
            return Err(SendEmailError::EmptyField("sender name"));
        }

        Ok(ValidEmailRequest(self))
    }
}

/// An [`EmailRequest`] that has passed validation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidEmailRequest(EmailRequest);

impl ValidEmailRequest {
    /// The sender's email address
    pub fn sender_email(&self) -> &str {
        &self.0.sender_email
    }

    /// The sender's display name
    pub fn sender_name(&self) -> &str {
        &self.0.sender_name
    }

    /// The subject line
    pub fn subject(&self) -> &str {
        &self.0.subject
    }

    /// The body fields, ordered by key
    pub fn message(&self) -> &BTreeMap<String, String> {
        &self.0.message
    }
}
