use bookdrive::FlowError;
use http::StatusCode;

/// Helper trait for converting errors to a standard response error format
pub(super) trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

/// Implementation for FlowError to map variants to appropriate status codes
///
/// Response bodies stay generic on purpose: the detail is logged where the
/// error was raised and must not reach the browser. A missing session and a
/// malformed request both answer a plain 404 so a caller probing state
/// tokens learns nothing from the shape of the response.
impl<T> IntoResponseError<T> for Result<T, FlowError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| match e {
            FlowError::SessionNotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
            FlowError::Gateway(_) | FlowError::Session(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error".to_string(),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookdrive::{FlowError, GatewayError, SessionError};

    #[test]
    fn test_session_not_found_maps_to_not_found() {
        // Create a Result with FlowError::SessionNotFound
        let result: Result<(), FlowError> = Err(FlowError::SessionNotFound);

        // Convert to response
        let response_error = result.into_response_error();

        // Verify status code is NOT_FOUND (404) with an opaque body
        assert!(response_error.is_err());
        if let Err((status, body)) = response_error {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body, "Not Found");
        }
    }

    #[test]
    fn test_gateway_error_maps_to_internal_server_error() {
        let result: Result<(), FlowError> = Err(FlowError::Gateway(GatewayError::Search(
            "catalog returned 503".to_string(),
        )));

        let response_error = result.into_response_error();

        // Verify status code is INTERNAL_SERVER_ERROR (500) and that the
        // upstream detail does not leak into the body
        assert!(response_error.is_err());
        if let Err((status, body)) = response_error {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, "Internal Server Error");
            assert!(!body.contains("503"));
        }
    }

    #[test]
    fn test_session_error_maps_to_internal_server_error() {
        let result: Result<(), FlowError> = Err(FlowError::Session(SessionError::Storage(
            "store unavailable".to_string(),
        )));

        let response_error = result.into_response_error();

        assert!(response_error.is_err());
        if let Err((status, body)) = response_error {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, "Internal Server Error");
        }
    }

    #[test]
    fn test_success_case() {
        // Create a successful Result
        let result: Result<String, FlowError> = Ok("Success".to_string());

        // Convert to response error
        let response_error = result.into_response_error();

        // Verify the result is Ok
        assert!(response_error.is_ok());
        if let Ok(value) = response_error {
            assert_eq!(value, "Success");
        }
    }
}
