//! Email relay: request validation, message composition and delivery.

mod config;
mod delivery;
mod email_request;
mod message;
mod service;

pub mod errors;

pub use config::{Password, ServerConfig};
pub use delivery::DeliveryClient;
pub use email_request::{EmailRequest, ValidEmailRequest};
pub use message::{compose, compose_at, ComposedMessage, Envelope, DATE_FORMAT};
pub use service::{PostmanService, PostmanServiceImpl};
