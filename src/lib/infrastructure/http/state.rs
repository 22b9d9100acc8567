//! Application state module

use std::{fmt, sync::Arc, time::Duration};

use crate::domain::postman::PostmanService;

/// Application configuration
#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    /// How long a single delivery may take; `None` waits indefinitely
    pub delivery_timeout: Option<Duration>,
}

/// Global application state
#[derive(Clone)]
pub struct AppState<P: PostmanService> {
    /// The application configuration
    pub config: AppConfig,

    /// Postman service
    pub postman: Arc<P>,
}

/// Implementation of the application state
impl<P> AppState<P>
where
    P: PostmanService,
{
    /// Create a new application state
    pub fn new(config: AppConfig, postman: P) -> Self {
        Self {
            config,
            postman: Arc::new(postman),
        }
    }
}

impl<P> fmt::Debug for AppState<P>
where
    P: PostmanService,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("postman", &"PostmanService")
            .finish()
    }
}
