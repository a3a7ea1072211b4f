//! Error types for the authorization flow

use thiserror::Error;

use crate::gateway::GatewayError;
use crate::session::SessionError;

/// Errors that can occur while driving the search-to-upload flow
#[derive(Error, Debug)]
pub enum FlowError {
    /// No session matches the state token echoed by the callback
    #[error("Session not found")]
    SessionNotFound,

    /// Error from an upstream provider request
    #[error("Gateway error: {0}")]
    Gateway(GatewayError),

    /// Error from session storage or token generation
    #[error("Session error: {0}")]
    Session(SessionError),
}

impl FlowError {
    /// Log the error and return self
    ///
    /// This method logs the error with appropriate context and returns self,
    /// allowing for method chaining and explicit logging when needed.
    ///
    pub fn log(self) -> Self {
        match &self {
            // A stale or forged state token is routine traffic, not an incident.
            Self::SessionNotFound => tracing::debug!("Session not found"),
            Self::Gateway(err) => tracing::error!("Gateway error: {}", err),
            Self::Session(err) => tracing::error!("Session error: {}", err),
        }
        self
    }
}

// Custom From implementations that automatically log errors

impl From<GatewayError> for FlowError {
    fn from(err: GatewayError) -> Self {
        let error = Self::Gateway(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<SessionError> for FlowError {
    fn from(err: SessionError) -> Self {
        let error = Self::Session(err);
        tracing::error!("{}", error);
        error
    }
}
