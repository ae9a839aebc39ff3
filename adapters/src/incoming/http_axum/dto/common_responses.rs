#[cfg(feature = "docs")]
use utoipa::ToResponse;

#[allow(dead_code)]
#[cfg_attr(feature = "docs", derive(ToResponse))]
#[cfg_attr(feature = "docs", response(
    description = "Bad Request: wrong content type, missing JSON body, unknown action or missing image",
    content_type = "application/json",
    example = json!({"error": "Invalid action. Use 'add' or 'remove'"})
))]
pub struct BadRequestResponse;

#[allow(dead_code)]
#[cfg_attr(feature = "docs", derive(ToResponse))]
#[cfg_attr(feature = "docs", response(
    description = "Processing failed while decoding, drawing or encoding the image",
    content_type = "application/json",
    example = json!({"error": "Processing error: Invalid color format: 'red' contains non-hex characters"})
))]
pub struct ProcessingErrorResponse;
