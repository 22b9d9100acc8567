//! Postman service

use std::sync::Arc;

use async_trait::async_trait;
use tokio::time::Instant;
use tracing::{error, info};

#[cfg(test)]
use mockall::mock;

use super::{
    config::ServerConfig,
    delivery::DeliveryClient,
    email_request::EmailRequest,
    errors::SendEmailError,
    message::{compose, Envelope},
};

/// Postman service
#[async_trait]
pub trait PostmanService: Clone + Send + Sync + 'static {
    /// Validates, composes and delivers one email.
    ///
    /// Invalid requests fail before anything is sent. A valid request results
    /// in exactly one delivery attempt.
    ///
    /// # Arguments
    /// * `request` - The [`EmailRequest`] received from the caller.
    /// * `deadline` - Optional instant after which delivery is abandoned.
    ///
    /// # Returns
    /// - [`Ok`] once the transport accepted the message.
    /// - [`Err`] containing a [`SendEmailError`] otherwise.
    async fn send_email(
        &self,
        request: EmailRequest,
        deadline: Option<Instant>,
    ) -> Result<(), SendEmailError>;
}

#[cfg(test)]
mock! {
    pub PostmanService {}

    impl Clone for PostmanService {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl PostmanService for PostmanService {
        async fn send_email(&self, request: EmailRequest, deadline: Option<Instant>) -> Result<(), SendEmailError>;
    }
}

/// Postman service implementation
#[derive(Debug, Clone)]
pub struct PostmanServiceImpl<D>
where
    D: DeliveryClient,
{
    config: Arc<ServerConfig>,
    delivery: Arc<D>,
}

impl<D> PostmanServiceImpl<D>
where
    D: DeliveryClient,
{
    /// Creates a new postman service.
    pub fn new(config: Arc<ServerConfig>, delivery: Arc<D>) -> Self {
        Self { config, delivery }
    }
}

#[async_trait]
impl<D> PostmanService for PostmanServiceImpl<D>
where
    D: DeliveryClient,
{
    async fn send_email(
        &self,
        request: EmailRequest,
        deadline: Option<Instant>,
    ) -> Result<(), SendEmailError> {
        let request = request.validate()?;

        let message = compose(&request, &self.config);
        let envelope = Envelope::from_config(&self.config);

        if let Err(e) = self.delivery.deliver(&message, &envelope, deadline).await {
            error!(sender = request.sender_email(), "failed to send email: {e}");

            return Err(e.into());
        }

        info!(sender = request.sender_email(), "email sent");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use testresult::TestResult;

    use crate::domain::postman::{
        config::tests::test_config,
        delivery::MockDeliveryClient,
        email_request::tests::valid_request,
        errors::DeliveryError,
    };

    use super::*;

    fn service(delivery: MockDeliveryClient) -> PostmanServiceImpl<MockDeliveryClient> {
        PostmanServiceImpl::new(Arc::new(test_config()), Arc::new(delivery))
    }

    #[tokio::test]
    async fn test_send_email_success() -> TestResult {
        let mut delivery = MockDeliveryClient::new();

        delivery
            .expect_deliver()
            .times(1)
            .withf(|message, envelope, deadline| {
                envelope.from == "svc"
                    && envelope.to == vec!["b@example.com".to_string()]
                    && message.as_str().contains(r#"From: "Alice" <a@example.com>"#)
                    && message.as_str().contains("k1: v1")
                    && deadline.is_none()
            })
            .returning(|_, _, _| Ok(()));

        service(delivery).send_email(valid_request(), None).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_sender_email_never_delivers() {
        let mut delivery = MockDeliveryClient::new();
        delivery.expect_deliver().times(0);

        let request = EmailRequest {
            sender_email: String::new(),
            ..valid_request()
        };

        let result = service(delivery).send_email(request, None).await;

        assert_eq!(result, Err(SendEmailError::EmptyField("sender email")));
    }

    #[tokio::test]
    async fn test_invalid_sender_email_never_delivers() {
        let mut delivery = MockDeliveryClient::new();
        delivery.expect_deliver().times(0);

        let request = EmailRequest {
            sender_email: "not-an-address".to_string(),
            ..valid_request()
        };

        let result = service(delivery).send_email(request, None).await;

        assert!(matches!(result, Err(SendEmailError::InvalidAddress(_))));
    }

    #[tokio::test]
    async fn test_empty_sender_name_never_delivers() {
        let mut delivery = MockDeliveryClient::new();
        delivery.expect_deliver().times(0);

        let request = EmailRequest {
            sender_name: String::new(),
            ..valid_request()
        };

        let result = service(delivery).send_email(request, None).await;

        assert_eq!(result, Err(SendEmailError::EmptyField("sender name")));
    }

    #[tokio::test]
    async fn test_identical_requests_are_delivered_twice() -> TestResult {
        let mut delivery = MockDeliveryClient::new();

        delivery
            .expect_deliver()
            .times(2)
            .returning(|_, _, _| Ok(()));

        let service = service(delivery);

        service.send_email(valid_request(), None).await?;
        service.send_email(valid_request(), None).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_delivery_failure_is_propagated() {
        let mut delivery = MockDeliveryClient::new();

        delivery
            .expect_deliver()
            .times(1)
            .returning(|_, _, _| Err(DeliveryError::Failed("connection refused".to_string())));

        let result = service(delivery).send_email(valid_request(), None).await;

        assert_eq!(
            result,
            Err(SendEmailError::DeliveryFailed("connection refused".to_string()))
        );
    }

    #[tokio::test]
    async fn test_deadline_is_passed_to_delivery() {
        let deadline = Instant::now() + Duration::from_secs(5);

        let mut delivery = MockDeliveryClient::new();

        delivery
            .expect_deliver()
            .times(1)
            .withf(move |_, _, d| *d == Some(deadline))
            .returning(|_, _, _| Err(DeliveryError::DeadlineExceeded));

        let result = service(delivery)
            .send_email(valid_request(), Some(deadline))
            .await;

        assert_eq!(result, Err(SendEmailError::DeadlineExceeded));
    }
}
