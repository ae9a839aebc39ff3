use crate::incoming::http_axum::{dto, handlers};
use dto::common_responses::{BadRequestResponse, ProcessingErrorResponse};
use domain::action::WatermarkAction;
use dto::requests::ProcessImageRequest;
use dto::responses::{ErrorResponse, HealthResponse, ProcessImageResponse, ServerTestResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::process::process_image,
        handlers::health::health_check,
        handlers::health::server_test,
    ),
    components(
        schemas(
            ProcessImageRequest,
            ProcessImageResponse,
            ErrorResponse,
            HealthResponse,
            ServerTestResponse,
            WatermarkAction
        ),
        responses(BadRequestResponse, ProcessingErrorResponse)
    ),
    tags(
        (name = "watermark", description = "Add a centered, shadowed text watermark to an image or pass it through unchanged"),
        (name = "system", description = "Liveness endpoints")
    ),
    info(
        title = "Watermark Service API",
        description = "Accepts base64 images (raw or as data URIs) and returns processed PNG data URIs. Every response carries permissive CORS headers and an X-Request-Id.",
        contact(
            name = "Watermark Service",
        ),
    ),
    servers(
        (url = "http://localhost:5001", description = "Development server"),
    )
)]
pub struct ApiDoc;
