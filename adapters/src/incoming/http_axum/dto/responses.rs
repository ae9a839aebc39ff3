use serde::Serialize;
#[cfg(feature = "docs")]
use utoipa::ToSchema;

use watermark_application::watermark::request::ProcessedImage;

pub const SERVICE_NAME: &str = "watermark-app";
pub const SERVER_RUNNING_MESSAGE: &str = "Server is running!";

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[cfg_attr(feature = "docs", schema(
    description = "Processed image as a PNG data URI",
    example = json!({
        "success": true,
        "processedImage": "data:image/png;base64,iVBORw0KGgo...",
        "message": "Watermark added successfully"
    })
))]
#[derive(Debug, Clone, Serialize)]
pub struct ProcessImageResponse {
    pub success: bool,
    #[serde(rename = "processedImage")]
    pub processed_image: String,
    pub message: String,
}

impl From<ProcessedImage> for ProcessImageResponse {
    fn from(processed: ProcessedImage) -> Self {
        Self {
            success: true,
            processed_image: processed.data_uri,
            message: processed.message.to_string(),
        }
    }
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[cfg_attr(feature = "docs", schema(
    example = json!({"error": "Processing error: Invalid base64 image data: Invalid padding"})
))]
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    #[cfg_attr(feature = "docs", schema(example = "healthy"))]
    pub status: &'static str,
    #[cfg_attr(feature = "docs", schema(example = "watermark-app"))]
    pub service: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            service: SERVICE_NAME,
        }
    }
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Serialize)]
pub struct ServerTestResponse {
    #[cfg_attr(feature = "docs", schema(example = "Server is running!"))]
    pub message: &'static str,
    #[cfg_attr(feature = "docs", schema(example = "ok"))]
    pub status: &'static str,
}

impl ServerTestResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            message: SERVER_RUNNING_MESSAGE,
            status: "ok",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn process_response_uses_camel_case_image_key() {
        let response = ProcessImageResponse::from(ProcessedImage {
            data_uri: "data:image/png;base64,AAAA".to_string(),
            width: 1,
            height: 1,
            message: "Watermark added successfully",
        });

        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({
                "success": true,
                "processedImage": "data:image/png;base64,AAAA",
                "message": "Watermark added successfully"
            })
        );
    }

    #[test]
    fn health_body_names_the_service() {
        assert_eq!(
            serde_json::to_value(HealthResponse::healthy()).unwrap(),
            json!({"status": "healthy", "service": "watermark-app"})
        );
    }
}
