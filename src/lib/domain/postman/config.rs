//! Server configuration

use std::fmt;

use clap::Parser;

/// Process-wide mail settings, read once at startup
#[derive(Clone, Debug, Parser)]
pub struct ServerConfig {
    /// Mailbox identity used to authenticate with the MTA and as envelope sender
    #[clap(long, env = "POSTMAN_SENDER_NAME")]
    pub sender_name: String,

    /// Password for the sender mailbox
    #[clap(long, env = "POSTMAN_SENDER_PASSWORD", hide_env_values = true)]
    pub sender_password: Password,

    /// Address every message is delivered to
    #[clap(long, env = "POSTMAN_RECEIVER_EMAIL")]
    pub receiver_email: String,

    /// Display name of the receiver
    #[clap(long, env = "POSTMAN_RECEIVER_NAME")]
    pub receiver_name: String,

    /// The SMTP host
    #[clap(long, env = "POSTMAN_SMTP_HOST")]
    pub smtp_host: String,
}

/// A password that never shows up in logs
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Get the password as a string slice
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<String> for Password {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for Password {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}
