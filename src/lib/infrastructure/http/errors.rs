//! API error-handling module

use std::fmt;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::postman::errors::SendEmailError;

/// An error response
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// The kind of error
    #[schema(example = "EmptyField")]
    pub kind: String,

    /// The error message
    #[schema(example = "sender email must not be empty")]
    pub error: String,
}

/// An error raised in the API
#[derive(Debug)]
pub struct ApiError {
    /// The status code
    pub status: StatusCode,

    /// The kind of error, as reported to the caller
    pub kind: &'static str,

    /// The error message
    pub message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, kind: &'static str, message: &str) -> Self {
        Self {
            status,
            kind,
            message: message.to_string(),
        }
    }

    /// Create a new unprocessable entity error
    pub fn new_422(kind: &'static str, message: &str) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, kind, message)
    }

    /// Create a new bad gateway error
    pub fn new_502(kind: &'static str, message: &str) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, kind, message)
    }

    /// Create a new gateway timeout error
    pub fn new_504(kind: &'static str, message: &str) -> Self {
        Self::new(StatusCode::GATEWAY_TIMEOUT, kind, message)
    }

    /// Create new internal server error
    pub fn new_500(message: &str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal", message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                kind: self.kind.to_string(),
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::new_500(&err.to_string())
    }
}

impl From<SendEmailError> for ApiError {
    fn from(err: SendEmailError) -> Self {
        let message = err.to_string();

        match err {
            SendEmailError::EmptyField(_) => ApiError::new_422("EmptyField", &message),
            SendEmailError::InvalidAddress(_) => ApiError::new_422("InvalidAddress", &message),
            SendEmailError::DeliveryFailed(_) => ApiError::new_502("DeliveryFailed", &message),
            SendEmailError::DeadlineExceeded => ApiError::new_504("DeadlineExceeded", &message),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(rejection.status(), "InvalidRequest", &rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn test_error_response() -> TestResult {
        let error = ApiError::new_500("Internal server error");

        let response = error.into_response();
        let body = to_bytes(response.into_body(), usize::MAX).await?;

        assert_eq!(
            body,
            r#"{"kind":"Internal","error":"Internal server error"}"#
        );

        Ok(())
    }

    #[test]
    fn test_api_error_from_error() {
        let error = anyhow!("Internal server error");
        let api_error = ApiError::from(error);

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.message, "Internal server error");
    }

    #[test]
    fn test_api_error_from_send_email_error() {
        let cases = [
            (
                SendEmailError::EmptyField("sender name"),
                StatusCode::UNPROCESSABLE_ENTITY,
                "EmptyField",
            ),
            (
                SendEmailError::InvalidAddress("Missing domain or user".to_string()),
                StatusCode::UNPROCESSABLE_ENTITY,
                "InvalidAddress",
            ),
            (
                SendEmailError::DeliveryFailed("connection refused".to_string()),
                StatusCode::BAD_GATEWAY,
                "DeliveryFailed",
            ),
            (
                SendEmailError::DeadlineExceeded,
                StatusCode::GATEWAY_TIMEOUT,
                "DeadlineExceeded",
            ),
        ];

        for (err, status, kind) in cases {
            let api_error = ApiError::from(err);

            assert_eq!(api_error.status, status);
            assert_eq!(api_error.kind, kind);
        }
    }

    #[test]
    fn test_delivery_failure_message_is_verbatim() {
        let api_error =
            ApiError::from(SendEmailError::DeliveryFailed("535 auth failed".to_string()));

        assert_eq!(api_error.message, "535 auth failed");
    }
}
