//! Send email handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tokio::time::Instant;
use utoipa::ToSchema;

use crate::{
    domain::postman::{EmailRequest, PostmanService},
    infrastructure::http::{errors::ApiError, state::AppState},
};

/// Empty acknowledgement
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct Empty {}

/// Send an email to the configured receiver
#[utoipa::path(
    post,
    operation_id = "send_email",
    tag = "Postman",
    path = "/api/v1/send-email",
    request_body = EmailRequest,
    responses(
        (status = StatusCode::OK, description = "Email accepted by the mail server", body = Empty),
        (status = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid request", body = ErrorResponse, example = json!({"kind": "EmptyField", "error": "sender email must not be empty"})),
        (status = StatusCode::BAD_GATEWAY, description = "Mail server rejected the message", body = ErrorResponse),
        (status = StatusCode::GATEWAY_TIMEOUT, description = "Delivery deadline exceeded", body = ErrorResponse),
    )
)]
pub async fn handler<P: PostmanService>(
    State(state): State<AppState<P>>,
    request: Result<Json<EmailRequest>, JsonRejection>,
) -> Result<Json<Empty>, ApiError> {
    let Json(request) = request?;

    let deadline = state
        .config
        .delivery_timeout
        .map(|timeout| Instant::now() + timeout);

    state.postman.send_email(request, deadline).await?;

    Ok(Json(Empty {}))
}
