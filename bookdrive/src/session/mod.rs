//! Pending-search sessions keyed by an unguessable state token
//!
//! A session is created the instant a search yields results and binds the
//! book list to the state token round-tripped through the identity
//! provider. The registry is append-only and lives for the process
//! lifetime; the backing store sits behind a trait so a persistent or
//! expiring backend can replace it without touching the flow.

mod config;
mod errors;
mod main;
mod store;
mod types;

pub use errors::SessionError;
pub use main::find_session;
pub use types::Session;

pub(crate) use main::create_session;

/// Initialize the session store.
pub(crate) async fn init() -> Result<(), SessionError> {
    config::SESSION_STORE.lock().await.init().await
}
