use serde::{Deserialize, Serialize};

use super::config::BOOK_URL_BASE;

/// Free-text filters for a catalog search. Handlers guarantee at least one
/// field is present before a query reaches the gateway.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub title: Option<String>,
    pub author: Option<String>,
}

/// Response envelope of the catalog's search endpoint. A response without a
/// `docs` array counts as an empty result, not a malformed one.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct SearchResponse {
    #[serde(default)]
    pub(super) docs: Vec<SearchDoc>,
}

/// One result document as the catalog returns it.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct SearchDoc {
    pub(super) title: String,
    pub(super) author_name: Option<Vec<String>>,
    pub(super) description: Option<String>,
    pub(super) key: String,
    pub(super) author_key: Option<Vec<String>>,
}

/// Sentinel substituted when the catalog supplies no description.
pub(crate) const NO_DESCRIPTION: &str = "No description available";

/// A catalog result reduced to the fields the rendered document needs.
/// Immutable once constructed from a search response document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author_name: Option<Vec<String>>,
    pub description: String,
    pub url: String,
    pub author_key: Option<Vec<String>>,
}

impl From<SearchDoc> for Book {
    fn from(doc: SearchDoc) -> Self {
        Self {
            title: doc.title,
            author_name: doc.author_name,
            description: doc.description.unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            url: format!("{}{}", BOOK_URL_BASE.as_str(), doc.key),
            author_key: doc.author_key,
        }
    }
}

/// Token endpoint response. Only the access token is read; it is used once
/// for the upload and dropped. The type deliberately does not derive `Debug`
/// so the credential cannot end up in logs.
#[derive(Deserialize)]
pub(super) struct TokenResponse {
    pub(super) access_token: String,
}
