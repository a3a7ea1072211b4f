//! Router for the search-and-save endpoints

use axum::{Router, routing::get};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::handlers::{index, not_found, oauth2callback, search_books};

/// Create a router for the whole search-and-save flow
///
/// The endpoints will be available at:
/// - `/` - the search form
/// - `/search_books` - search the catalog, then redirect to the consent page
/// - `/oauth2callback` - the redirect URI registered with the identity provider
///
/// Every other path answers 404. Mount this at the application root so the
/// callback path matches the registered redirect URI.
pub fn bookdrive_router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/search_books", get(search_books))
        .route("/oauth2callback", get(oauth2callback))
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(true),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
}

/// Create a router for the whole search-and-save flow without HTTP tracing
///
/// This is the same as `bookdrive_router()` but without the HTTP tracing
/// middleware. Use this if you want to add your own tracing middleware or if
/// you don't need HTTP request tracing.
pub fn bookdrive_router_no_trace() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/search_books", get(search_books))
        .route("/oauth2callback", get(oauth2callback))
        .fallback(not_found)
}
