use poem::http::StatusCode;
use poem_openapi::payload::Json;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};
use crate::api::receipt::image::ImagePayloadError;

impl IntoErrorResponse for ImagePayloadError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            ImagePayloadError::InvalidBase64 => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "receipt.invalid_base64",
            ),
        }
    }
}
