//! bookdrive - search a public book catalog and save the results to a cloud drive
//!
//! This crate implements the server side of a small delegated-authorization
//! flow: a user searches a book catalog, consents to drive access at an
//! identity provider, and the pending search results are rendered to markdown
//! and uploaded to the user's drive.
//!
//! The crate is divided into several modules:
//! - `gateway`: outbound calls to the book-search, identity and storage providers
//! - `session`: registry binding a random state token to a pending book list
//! - `flow`: orchestration of search, consent redirect, callback and upload
//! - `document`: markdown rendering and multipart packaging of the book list

mod document;
mod flow;
mod gateway;
mod session;

#[cfg(test)]
mod test_utils;

pub use flow::{FlowError, SearchOutcome, begin_search_core, finish_authorization_core};

pub use gateway::{Book, GatewayError, SearchQuery};

pub use session::{Session, SessionError, find_session};

/// Initialize the library
///
/// Validates the required configuration early so a misconfigured process
/// fails at startup instead of on the first request, and prepares the
/// session store.
pub async fn init() -> Result<(), Box<dyn std::error::Error>> {
    gateway::init();
    session::init().await?;
    Ok(())
}
