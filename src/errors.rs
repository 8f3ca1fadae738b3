use axum::http::StatusCode;
use thiserror::Error;

pub const EMPTY_MEAL_WARNING: &str = "⚠️ Please enter a meal before analyzing.";
pub const RESPONSE_FAILED: &str = "Failed to fetch results";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

/// Why a meal analysis did not render.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("⚠️ Please enter a meal before analyzing.")]
    Validation,

    #[error("Failed to fetch results")]
    Response { status: u16 },

    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for AnalyzeError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
