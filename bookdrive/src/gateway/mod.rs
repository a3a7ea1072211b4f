//! Outbound requests to the three collaborating providers
//!
//! The gateway owns every HTTPS call the flow makes: the catalog search,
//! the authorization-code exchange at the identity provider, and the
//! multipart upload to the storage provider. Responses are buffered whole
//! before parsing; nothing is streamed to callers.

mod books;
mod client;
mod config;
mod drive;
mod errors;
mod identity;
mod types;

pub use errors::GatewayError;
pub use types::{Book, SearchQuery};

pub(crate) use books::search_books;
pub(crate) use drive::upload_document;
pub(crate) use identity::{authorize_url, exchange_code_for_token};
pub(crate) use types::NO_DESCRIPTION;

pub(crate) fn init() {
    // Validate required environment variables early
    let _ = *config::OAUTH2_CLIENT_ID;
    let _ = *config::OAUTH2_CLIENT_SECRET;
    let _ = *config::OAUTH2_REDIRECT_URI;
}
