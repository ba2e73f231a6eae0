use salvo::http::StatusCode;
use thiserror::Error;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    TimeError(#[from] pservice_time::error::TimeError),

    #[error(transparent)]
    CoreError(#[from] pservice_core::error::CoreError),

    #[error("Encoding failure: {0}")]
    EncodingFailure(#[from] serde_json::Error),
}

impl AppError {
    /// ## Summary
    /// Maps the error to a response status: validation failures are client
    /// errors, everything else is a server error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::TimeError(_) => StatusCode::BAD_REQUEST,
            Self::CoreError(_) | Self::EncodingFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// ## Summary
    /// Human-readable description for the error payload. Server errors are
    /// not described to the client.
    #[must_use]
    pub fn description(&self) -> String {
        if self.status_code().is_client_error() {
            self.to_string()
        } else {
            "Internal server error".to_string()
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
