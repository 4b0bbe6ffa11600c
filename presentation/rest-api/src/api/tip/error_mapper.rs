use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::tip::errors::TipError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for TipError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            TipError::UnknownPreset => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "tip.unknown_preset",
            ),
            TipError::InvalidCustomPercent => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "tip.invalid_custom_percent",
            ),
        }
    }
}
