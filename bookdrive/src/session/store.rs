use async_trait::async_trait;
use std::collections::HashMap;

use super::errors::SessionError;
use super::types::Session;

/// Storage contract for pending-search sessions.
///
/// The registry is append-only: sessions are written once on search and
/// looked up by state token on callback. There is deliberately no remove
/// operation; entries live for the process lifetime.
#[async_trait]
pub(super) trait SessionStore: Send + Sync + 'static {
    /// Initialize the store
    async fn init(&self) -> Result<(), SessionError>;

    /// Store a session under its state token
    async fn put(&mut self, session: Session) -> Result<(), SessionError>;

    /// Retrieve a session by state token
    async fn get(&self, state: &str) -> Result<Option<Session>, SessionError>;
}

pub(super) struct InMemorySessionStore {
    entry: HashMap<String, Session>,
}

impl InMemorySessionStore {
    pub(super) fn new() -> Self {
        tracing::debug!("Creating new in-memory session store");
        Self {
            entry: HashMap::new(),
        }
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn init(&self) -> Result<(), SessionError> {
        Ok(())
    }

    async fn put(&mut self, session: Session) -> Result<(), SessionError> {
        self.entry.insert(session.state.clone(), session);
        Ok(())
    }

    async fn get(&self, state: &str) -> Result<Option<Session>, SessionError> {
        Ok(self.entry.get(state).cloned())
    }
}
