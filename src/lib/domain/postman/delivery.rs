//! Mail delivery

use async_trait::async_trait;
use tokio::time::Instant;

#[cfg(test)]
use mockall::mock;

use super::{
    errors::DeliveryError,
    message::{ComposedMessage, Envelope},
};

/// Submits composed messages to a mail transport
#[async_trait]
pub trait DeliveryClient: Clone + Send + Sync + 'static {
    /// Deliver a message
    ///
    /// # Arguments
    /// * `message` - The [`ComposedMessage`] to submit.
    /// * `envelope` - The envelope sender and recipients.
    /// * `deadline` - Give up at this instant. `None` waits for the transport
    ///   however long it takes.
    ///
    /// # Returns
    /// A [`Result`] indicating success or failure.
    async fn deliver(
        &self,
        message: &ComposedMessage,
        envelope: &Envelope,
        deadline: Option<Instant>,
    ) -> Result<(), DeliveryError>;
}

#[cfg(test)]
mock! {
    pub DeliveryClient {}

    impl Clone for DeliveryClient {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl DeliveryClient for DeliveryClient {
        async fn deliver(&self, message: &ComposedMessage, envelope: &Envelope, deadline: Option<Instant>) -> Result<(), DeliveryError>;
    }
}
