use url::Url;

use super::client::get_client;
use super::config::{
    OAUTH2_AUTH_URL, OAUTH2_CLIENT_ID, OAUTH2_CLIENT_SECRET, OAUTH2_REDIRECT_URI,
    OAUTH2_RESPONSE_TYPE, OAUTH2_SCOPE, OAUTH2_TOKEN_URL,
};
use super::errors::GatewayError;
use super::types::TokenResponse;

/// Build the consent-page URL the browser is redirected to. The session's
/// state token rides along as the anti-forgery parameter and comes back
/// unchanged on the callback.
pub(crate) fn authorize_url(state: &str) -> Result<String, GatewayError> {
    let mut url = Url::parse(OAUTH2_AUTH_URL.as_str())
        .map_err(|e| GatewayError::AuthorizeUrl(format!("Invalid authorization endpoint: {e}")))?;

    url.query_pairs_mut()
        .append_pair("client_id", OAUTH2_CLIENT_ID.as_str())
        .append_pair("redirect_uri", OAUTH2_REDIRECT_URI.as_str())
        .append_pair("response_type", OAUTH2_RESPONSE_TYPE.as_str())
        .append_pair("scope", OAUTH2_SCOPE.as_str())
        .append_pair("state", state);

    Ok(url.to_string())
}

/// Exchange the callback's authorization code for a bearer access token.
/// Server-to-server call; the client secret never reaches the browser side
/// of the flow, and the token itself is never logged.
pub(crate) async fn exchange_code_for_token(code: String) -> Result<String, GatewayError> {
    let client = get_client();
    let response = client
        .post(OAUTH2_TOKEN_URL.as_str())
        .form(&[
            ("code", code),
            ("client_id", OAUTH2_CLIENT_ID.to_string()),
            ("client_secret", OAUTH2_CLIENT_SECRET.to_string()),
            ("redirect_uri", OAUTH2_REDIRECT_URI.to_string()),
            ("grant_type", "authorization_code".to_string()),
        ])
        .send()
        .await
        .map_err(|e| GatewayError::TokenExchange(e.to_string()))?;

    match response.status() {
        reqwest::StatusCode::OK => {}
        status => {
            tracing::debug!("Token exchange returned status {}", status);
            return Err(GatewayError::TokenExchange(status.to_string()));
        }
    };

    let response_body = response
        .text()
        .await
        .map_err(|e| GatewayError::TokenExchange(e.to_string()))?;
    let token_response: TokenResponse = serde_json::from_str(&response_body)
        .map_err(|e| GatewayError::Serde(format!("Failed to deserialize token response: {e}")))?;

    Ok(token_response.access_token)
}
