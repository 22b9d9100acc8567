//! SMTP delivery client

use std::sync::Arc;

use async_trait::async_trait;
use lettre::{
    address::Envelope as SmtpEnvelope,
    transport::smtp::{
        authentication::{Credentials, Mechanism},
        client::{Tls, TlsParameters},
    },
    Address, AsyncSmtpTransport, AsyncTransport, Tokio1Executor,
};
use tokio::time::{timeout_at, Instant};
use tracing::debug;

use crate::domain::postman::{
    errors::DeliveryError, ComposedMessage, DeliveryClient, Envelope, ServerConfig,
};

/// Port messages are submitted on
pub const SMTP_PORT: u16 = 25;

/// Delivers messages to the configured MTA over SMTP
#[derive(Debug, Clone)]
pub struct SmtpDeliveryClient {
    config: Arc<ServerConfig>,
    port: u16,
}

impl SmtpDeliveryClient {
    /// Create a new SMTP delivery client
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self {
            config,
            port: SMTP_PORT,
        }
    }

    /// Submit to a port other than [`SMTP_PORT`]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Build a transport for a single submission.
    ///
    /// Authentication is PLAIN with the configured sender identity, so
    /// STARTTLS is required unless the host is loopback, where it is only
    /// used when offered. There is no transport timeout.
    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, DeliveryError> {
        let host = &self.config.smtp_host;

        let params = TlsParameters::new(host.to_string())
            .map_err(|e| DeliveryError::Failed(e.to_string()))?;

        let tls = if is_loopback_host(host) {
            Tls::Opportunistic(params)
        } else {
            Tls::Required(params)
        };

        let creds = Credentials::new(
            self.config.sender_name.clone(),
            self.config.sender_password.expose().to_string(),
        );

        Ok(AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(self.port)
            .tls(tls)
            .credentials(creds)
            .authentication(vec![Mechanism::Plain])
            .timeout(None)
            .build())
    }
}

#[async_trait]
impl DeliveryClient for SmtpDeliveryClient {
    async fn deliver(
        &self,
        message: &ComposedMessage,
        envelope: &Envelope,
        deadline: Option<Instant>,
    ) -> Result<(), DeliveryError> {
        let envelope = smtp_envelope(envelope)?;
        let payload = wire_payload(message);
        let transport = self.transport()?;

        debug!(
            host = %self.config.smtp_host,
            port = self.port,
            "submitting message"
        );

        let send = transport.send_raw(&envelope, &payload);

        let result = match deadline {
            Some(deadline) => timeout_at(deadline, send)
                .await
                .map_err(|_| DeliveryError::DeadlineExceeded)?,
            None => send.await,
        };

        match result {
            Ok(_) => Ok(()),
            Err(e) => Err(DeliveryError::Failed(e.to_string())),
        }
    }
}

/// Hosts that may receive credentials over an unencrypted session
fn is_loopback_host(host: &str) -> bool {
    matches!(host, "localhost" | "127.0.0.1" | "::1")
}

fn smtp_envelope(envelope: &Envelope) -> Result<SmtpEnvelope, DeliveryError> {
    let from = envelope
        .from
        .parse::<Address>()
        .map_err(|e| DeliveryError::Failed(format!("invalid envelope sender: {e}")))?;

    let to = envelope
        .to
        .iter()
        .map(|to| to.parse::<Address>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| DeliveryError::Failed(format!("invalid envelope recipient: {e}")))?;

    SmtpEnvelope::new(Some(from), to).map_err(|e| DeliveryError::Failed(e.to_string()))
}

/// The DATA payload: every line ending becomes CRLF, and the final line ending
/// is left off because the transport terminates DATA with `CRLF.CRLF`.
fn wire_payload(message: &ComposedMessage) -> Vec<u8> {
    let text = message.as_str();
    let text = text.strip_suffix('\n').unwrap_or(text);
    let text = text.strip_suffix('\r').unwrap_or(text);

    let mut out = Vec::with_capacity(text.len() + text.len() / 16);
    let mut previous = None;

    for byte in text.bytes() {
        if byte == b'\n' && previous != Some(b'\r') {
            out.push(b'\r');
        }
        out.push(byte);
        previous = Some(byte);
    }

    out
}
