//! Axum front door for the bookdrive search-and-save flow
//!
//! This crate wires the flow entry points of [`bookdrive`] to HTTP:
//! - `/` serves the search form
//! - `/search_books` runs the catalog search and answers with a consent
//!   redirect or a no-results page
//! - `/oauth2callback` receives the identity provider's redirect and
//!   answers with the storage provider's confirmation
//!
//! Mount [`bookdrive_router`] (or the trace-free variant) into an axum
//! application and call [`init`] once at startup.

mod error;
mod handlers;
mod router;

#[cfg(test)]
mod integration_tests;

pub use router::{bookdrive_router, bookdrive_router_no_trace};

// Re-export so applications only need to depend on this crate.
pub use bookdrive::init;
