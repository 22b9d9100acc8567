//! OpenAPI module

use utoipa::OpenApi;

use crate::{
    domain::postman::EmailRequest,
    infrastructure::http::{errors::ErrorResponse, handlers::v1::*},
};

#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "Postman"),
    paths(send_email::handler),
    components(schemas(EmailRequest, send_email::Empty, ErrorResponse))
)]
pub struct ApiDocs;
