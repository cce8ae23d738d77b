use thiserror::Error;

/// Internal error type for store and service operations
///
/// Never sent to clients as-is. API endpoints convert it into their
/// response types, which decide the status code and message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InternalError {
    /// No item is stored under the id, kept as it appeared in the request
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// A request value could not be understood
    #[error("Malformed input: {field}: {message}")]
    MalformedInput {
        field: String,
        message: String,
    },
}

impl InternalError {
    /// Create a malformed input error for the named field
    pub fn malformed_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            field: field.into(),
            message: message.into(),
        }
    }
}
