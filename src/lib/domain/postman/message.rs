//! Message composition

use chrono::{Local, NaiveDate};

use super::{config::ServerConfig, email_request::ValidEmailRequest};

/// Header date format (month-day-year). Not an RFC 5322 date.
pub const DATE_FORMAT: &str = "%m-%d-%Y";

/// A rendered message, ready to hand to the transport
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposedMessage(String);

impl ComposedMessage {
    /// The message text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The message bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

/// Envelope sender and recipients for a submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope {
    /// `MAIL FROM`
    pub from: String,

    /// `RCPT TO`
    pub to: Vec<String>,
}

impl Envelope {
    /// The envelope every message gets: the configured sender identity
    /// delivering to the configured receiver
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            from: config.sender_name.clone(),
            to: vec![config.receiver_email.clone()],
        }
    }
}

/// Composes the message with today's local date
pub fn compose(request: &ValidEmailRequest, config: &ServerConfig) -> ComposedMessage {
    compose_at(request, config, Local::now().date_naive())
}

/// Composes the message with the given date in the `Date:` header
pub fn compose_at(
    request: &ValidEmailRequest,
    config: &ServerConfig,
    date: NaiveDate,
) -> ComposedMessage {
    let mut body = String::new();
    for (key, value) in request.message() {
        body.push_str(&format!("\n{key}: {value}"));
    }

    ComposedMessage(format!(
        "To: \"{receiver_name}\" <{receiver_email}>\n\
         From: \"{sender_name}\" <{sender_email}>\n\
         Date: {date}\n\
         Subject: {subject}\n\
         \n\
         {body}\n",
        receiver_name = config.receiver_name,
        receiver_email = config.receiver_email,
        sender_name = request.sender_name(),
        sender_email = request.sender_email(),
        date = date.format(DATE_FORMAT),
        subject = request.subject(),
    ))
}
