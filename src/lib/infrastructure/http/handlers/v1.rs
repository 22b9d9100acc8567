//! Version 1 of the API

use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    domain::postman::PostmanService,
    infrastructure::http::{open_api::ApiDocs, state::AppState},
};

pub mod send_email;
pub mod stoplight;

pub fn router<P: PostmanService>() -> Router<AppState<P>> {
    Router::new()
        .route("/", get(stoplight::handler))
        .route("/openapi.json", get(Json(ApiDocs::openapi())))
        .route("/send-email", post(send_email::handler::<P>))
}
