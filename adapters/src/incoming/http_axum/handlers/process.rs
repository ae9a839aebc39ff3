use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, header::CONTENT_TYPE},
};
use tracing::{debug, instrument};

use crate::incoming::http_axum::{
    dto::{
        requests::{CONTENT_TYPE_MESSAGE, ProcessImageRequest, is_json_content_type},
        responses::ProcessImageResponse,
    },
    error_mapper::HttpError,
};
use crate::shared::app_state::AppState;
#[cfg(feature = "docs")]
use crate::incoming::http_axum::dto::common_responses::{BadRequestResponse, ProcessingErrorResponse};
use watermark_application::error::AppError;

#[cfg_attr(feature = "docs", utoipa::path(
    post,
    path = "/api/process",
    request_body(content = ProcessImageRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "Image processed", body = ProcessImageResponse),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = ProcessingErrorResponse)
    ),
    tag = "watermark",
    summary = "Add or remove a text watermark",
    description = "Decodes a base64 image (optionally a data URI), applies the requested action and returns the result as a PNG data URI. `remove` returns the image unchanged.",
    operation_id = "process_image"
))]
#[instrument(skip_all, fields(body_len = body.len()))]
pub async fn process_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ProcessImageResponse>, HttpError> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if !is_json_content_type(content_type) {
        debug!(content_type, "Rejected non-JSON request");
        return Err(HttpError(AppError::validation(CONTENT_TYPE_MESSAGE)));
    }

    let command = ProcessImageRequest::from_body(&body)?.into_command();
    let processed = state
        .process_image_service
        .process_image(command)
        .await
        .map_err(HttpError)?;

    debug!(
        width = processed.width,
        height = processed.height,
        "Image processed"
    );
    Ok(Json(ProcessImageResponse::from(processed)))
}
