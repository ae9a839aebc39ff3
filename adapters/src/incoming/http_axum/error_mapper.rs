use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::incoming::http_axum::dto::responses::ErrorResponse;
use watermark_application::error::AppError;

pub struct HttpError(pub AppError);

impl HttpError {
    /// Only validation failures are client errors; anything raised while
    /// decoding, drawing or encoding the image is reported as a processing
    /// error.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        let app_error = &self.0;
        if app_error.is_client_error() {
            (StatusCode::BAD_REQUEST, app_error.to_string())
        } else {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Processing error: {app_error}"),
            )
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status_code, message) = self.status_and_message();

        if status_code.is_client_error() {
            debug!("Client error response generated: {}", message);
        } else {
            error!(error = ?self.0, "Server error response generated: {}", message);
        }

        (status_code, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<AppError> for HttpError {
    fn from(app_error: AppError) -> Self {
        HttpError(app_error)
    }
}
