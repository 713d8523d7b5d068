//! Error handling for the Fleet Ops Dashboard
//!
//! Every screen isolates its own error state; an error is never fatal
//! to the whole application. API failures are collapsed to a coarse
//! user-facing message while the underlying detail is kept for logs.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Any failed request against the remote API
    #[error("API request failed: {detail}")]
    Api {
        detail: String,
        status: Option<u16>,
    },

    #[error("Failed to decode API response: {0}")]
    Decode(String),

    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("{0} is not yet implemented")]
    NotImplemented(&'static str),

    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Local persistence of the filter slice failed
    #[error("Persistence error: {0}")]
    Persistence(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// The coarse message shown to the user
    ///
    /// HTTP status and validation detail from the backend are not
    /// parsed into the surface; only client-side validation carries a
    /// specific message.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api { .. } | AppError::Decode(_) => {
                "Request failed. Please try again.".to_string()
            }
            AppError::Validation { message, .. } => message.clone(),
            AppError::NotFound(resource) => format!("{} not found", resource),
            AppError::NotImplemented(feature) => {
                format!("{} is not yet implemented", feature)
            }
            AppError::Configuration(_)
            | AppError::Persistence(_)
            | AppError::Serialization(_)
            | AppError::Internal(_) => "Something went wrong. Please try again.".to_string(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Api {
                detail: err.to_string(),
                status: err.status().map(|s| s.as_u16()),
            }
        }
    }
}

impl From<&'static str> for AppError {
    fn from(message: &'static str) -> Self {
        AppError::Validation {
            field: String::new(),
            message: message.to_string(),
        }
    }
}

/// Result type alias for the dashboard
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_errors_collapse_to_generic_message() {
        let err = AppError::Api {
            detail: "500 Internal Server Error: constraint violation".to_string(),
            status: Some(500),
        };
        assert_eq!(err.user_message(), "Request failed. Please try again.");
    }

    #[test]
    fn test_validation_message_preserved() {
        let err = AppError::validation("quantity", "Adjustment quantity must not exceed current stock");
        assert_eq!(
            err.user_message(),
            "Adjustment quantity must not exceed current stock"
        );
    }
}
