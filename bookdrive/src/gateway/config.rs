use std::{env, sync::LazyLock};

/// Search endpoint of the public book catalog.
pub(super) static BOOK_SEARCH_URL: LazyLock<String> = LazyLock::new(|| {
    env::var("BOOK_SEARCH_URL")
        .ok()
        .unwrap_or("https://openlibrary.org/search.json".to_string())
});

/// Base of the public page URL built from each result's `key`.
pub(super) static BOOK_URL_BASE: LazyLock<String> = LazyLock::new(|| {
    env::var("BOOK_URL_BASE")
        .ok()
        .unwrap_or("https://openlibrary.org".to_string())
});

// The catalog rejects requests that carry no browser-like user agent.
pub(super) static BOOK_SEARCH_USER_AGENT: LazyLock<String> = LazyLock::new(|| {
    env::var("BOOK_SEARCH_USER_AGENT")
        .ok()
        .unwrap_or("Mozilla/5.0".to_string())
});

pub(super) static OAUTH2_AUTH_URL: LazyLock<String> = LazyLock::new(|| {
    env::var("OAUTH2_AUTH_URL")
        .ok()
        .unwrap_or("https://accounts.google.com/o/oauth2/v2/auth".to_string())
});

pub(super) static OAUTH2_TOKEN_URL: LazyLock<String> = LazyLock::new(|| {
    env::var("OAUTH2_TOKEN_URL")
        .ok()
        .unwrap_or("https://oauth2.googleapis.com/token".to_string())
});

/// Scope requested at the consent page. The default grants access to files
/// the application itself creates, nothing wider.
pub(super) static OAUTH2_SCOPE: LazyLock<String> = LazyLock::new(|| {
    env::var("OAUTH2_SCOPE")
        .ok()
        .unwrap_or("https://www.googleapis.com/auth/drive.file".to_string())
});

pub(super) static OAUTH2_RESPONSE_TYPE: LazyLock<String> =
    LazyLock::new(|| env::var("OAUTH2_RESPONSE_TYPE").unwrap_or("code".to_string()));

pub(crate) static OAUTH2_CLIENT_ID: LazyLock<String> =
    LazyLock::new(|| env::var("OAUTH2_CLIENT_ID").expect("OAUTH2_CLIENT_ID must be set"));

pub(crate) static OAUTH2_CLIENT_SECRET: LazyLock<String> =
    LazyLock::new(|| env::var("OAUTH2_CLIENT_SECRET").expect("OAUTH2_CLIENT_SECRET must be set"));

/// Redirect target registered with the identity provider. The same value is
/// sent with the consent redirect and the token exchange; providers reject
/// the exchange when the two differ.
pub(crate) static OAUTH2_REDIRECT_URI: LazyLock<String> =
    LazyLock::new(|| env::var("OAUTH2_REDIRECT_URI").expect("OAUTH2_REDIRECT_URI must be set"));

pub(super) static DRIVE_UPLOAD_URL: LazyLock<String> = LazyLock::new(|| {
    env::var("DRIVE_UPLOAD_URL")
        .ok()
        .unwrap_or("https://www.googleapis.com/upload/drive/v3/files?uploadType=multipart".to_string())
});

// Endpoint resolution is exercised by the end-to-end tests, which override
// every URL here through the environment to reach local mock providers.
