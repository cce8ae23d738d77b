use crate::errors::internal::InternalError;
use crate::types::dto::common::ErrorResponse;
use poem_openapi::payload::Json;
use std::fmt;

/// Item endpoint error kinds
///
/// The API only ever reports two failures: the item doesn't exist (404) or
/// the request couldn't be understood (405).
#[derive(Debug, Clone, PartialEq)]
pub enum ItemApiError {
    NotFound(ErrorResponse),
    MalformedInput(ErrorResponse),
}

impl ItemApiError {
    /// Create a NotFound error for an item id as it appeared in the request
    pub fn not_found(item_id: impl fmt::Display) -> Self {
        ItemApiError::NotFound(ErrorResponse {
            error: "not_found".to_string(),
            message: format!("Item not found: {}", item_id),
            status_code: 404,
        })
    }

    /// Create a MalformedInput error
    pub fn malformed_input(message: impl Into<String>) -> Self {
        ItemApiError::MalformedInput(ErrorResponse {
            error: "malformed_input".to_string(),
            message: message.into(),
            status_code: 405,
        })
    }

    /// Convert InternalError to ItemApiError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::ItemNotFound(id) => Self::not_found(id),
            InternalError::MalformedInput { field, .. } => {
                tracing::debug!("Rejecting malformed {}: {}", field, err);
                Self::malformed_input(err.to_string())
            }
        }
    }

    /// Convert a request parsing failure raised by poem-openapi
    ///
    /// Covers invalid JSON bodies, missing required fields, failed
    /// validators and query parameters of the wrong type.
    pub fn from_parse_request_error(err: poem::Error) -> Self {
        tracing::debug!("Rejecting request that failed to parse: {}", err);
        Self::malformed_input(err.to_string())
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> &str {
        match self {
            ItemApiError::NotFound(body) => &body.message,
            ItemApiError::MalformedInput(body) => &body.message,
        }
    }

    /// Get the HTTP status code from the error variant
    pub fn status_code(&self) -> u16 {
        match self {
            ItemApiError::NotFound(body) => body.status_code,
            ItemApiError::MalformedInput(body) => body.status_code,
        }
    }

    /// Take the response body
    pub fn into_body(self) -> Json<ErrorResponse> {
        match self {
            ItemApiError::NotFound(body) => Json(body),
            ItemApiError::MalformedInput(body) => Json(body),
        }
    }
}

impl fmt::Display for ItemApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
