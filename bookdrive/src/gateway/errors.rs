use thiserror::Error;

/// Errors raised by outbound calls to the catalog, identity and storage
/// providers. Every variant surfaces to the client as the same generic
/// upstream failure; the payload is for server-side logs only.
#[derive(Debug, Error, Clone)]
pub enum GatewayError {
    /// Book search request failed
    #[error("Book search error: {0}")]
    Search(String),

    /// Building the consent redirect failed
    #[error("Authorize URL error: {0}")]
    AuthorizeUrl(String),

    /// Code-for-token exchange with the identity provider failed
    #[error("Token exchange error: {0}")]
    TokenExchange(String),

    /// Drive upload request failed
    #[error("Upload error: {0}")]
    Upload(String),

    /// Serialization/Deserialization error
    #[error("Serde error: {0}")]
    Serde(String),
}
