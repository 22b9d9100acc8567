//! Adapters: SMTP delivery and the HTTP boundary

pub mod email;
pub mod http;
