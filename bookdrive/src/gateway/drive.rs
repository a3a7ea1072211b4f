use serde_json::Value;

use super::client::get_client;
use super::config::DRIVE_UPLOAD_URL;
use super::errors::GatewayError;
use crate::document::MULTIPART_BOUNDARY;

/// Upload a finished multipart body under the bearer token from the
/// exchange. The provider's JSON confirmation is returned as-is, whatever
/// its status; the provider reports its own errors in the body and callers
/// pass the payload through to the client without re-validation.
pub(crate) async fn upload_document(
    body: String,
    access_token: &str,
) -> Result<Value, GatewayError> {
    let client = get_client();
    let response = client
        .post(DRIVE_UPLOAD_URL.as_str())
        .bearer_auth(access_token)
        .header(
            reqwest::header::CONTENT_TYPE,
            format!("multipart/related; boundary={MULTIPART_BOUNDARY}"),
        )
        .body(body)
        .send()
        .await
        .map_err(|e| GatewayError::Upload(e.to_string()))?;

    let status = response.status();
    let response_body = response
        .text()
        .await
        .map_err(|e| GatewayError::Upload(e.to_string()))?;

    tracing::debug!("Upload returned status {}", status);

    let confirmation: Value = serde_json::from_str(&response_body).map_err(|e| {
        GatewayError::Serde(format!("Failed to deserialize upload confirmation: {e}"))
    })?;

    Ok(confirmation)
}
