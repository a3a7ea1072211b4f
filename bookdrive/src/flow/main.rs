use serde_json::Value;

use crate::document::{multipart_related_body, render_markdown};
use crate::gateway::{
    SearchQuery, authorize_url, exchange_code_for_token, search_books, upload_document,
};
use crate::session::{create_session, find_session};

use super::errors::FlowError;

/// Outcome of a search request, decided before anything is sent back to
/// the browser.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The catalog returned results; redirect the caller to this
    /// authorization URL so they can grant drive access.
    Redirect(String),
    /// The catalog returned nothing for the given filters.
    NoResults,
}

/// Run the catalog search and, when it yields results, stage them in a
/// fresh session whose state token is baked into the returned
/// authorization URL.
pub async fn begin_search_core(query: &SearchQuery) -> Result<SearchOutcome, FlowError> {
    let books = search_books(query).await?;

    if books.is_empty() {
        return Ok(SearchOutcome::NoResults);
    }

    let state = create_session(books).await?;
    let auth_url = authorize_url(&state)?;

    Ok(SearchOutcome::Redirect(auth_url))
}

/// Resume the flow when the identity provider calls back: resolve the
/// session behind the echoed state token, exchange the authorization code
/// for an access token, then render and upload the staged results.
///
/// Returns the storage provider's confirmation as received. The access
/// token only ever lives on this function's stack.
pub async fn finish_authorization_core(code: &str, state: &str) -> Result<Value, FlowError> {
    let session = find_session(state)
        .await?
        .ok_or_else(|| FlowError::SessionNotFound.log())?;

    let access_token = exchange_code_for_token(code.to_string()).await?;

    let content = render_markdown(&session.books);
    let body = multipart_related_body(&content);

    let confirmation = upload_document(body, &access_token).await?;
    tracing::info!(
        "Uploaded document for state token {state} covering {} book(s)",
        session.books.len()
    );

    Ok(confirmation)
}
