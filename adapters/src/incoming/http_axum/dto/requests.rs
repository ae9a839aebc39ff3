use serde::Deserialize;
use serde_json::Value;
#[cfg(feature = "docs")]
use utoipa::ToSchema;

use watermark_application::{
    error::{AppError, AppResult},
    watermark::request::{ColorInput, OpacityInput, ProcessImageCommand},
};

pub const CONTENT_TYPE_MESSAGE: &str = "Content-Type must be application/json";
pub const NO_JSON_MESSAGE: &str = "No JSON data provided";

/// Body of `POST /api/process`.
///
/// Fields stay loosely typed so a wrong type is reported with the same
/// messages as a missing field.
#[cfg_attr(feature = "docs", derive(ToSchema))]
#[cfg_attr(feature = "docs", schema(
    description = "Image to process. `text`, `color` and `opacity` are only read for `add`.",
    example = json!({
        "action": "add",
        "image": "data:image/png;base64,iVBORw0KGgo...",
        "text": "(c) Example",
        "color": "#FFFFFF",
        "opacity": 50
    })
))]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProcessImageRequest {
    #[cfg_attr(feature = "docs", schema(value_type = Option<String>, example = "add"))]
    pub action: Option<Value>,
    #[cfg_attr(feature = "docs", schema(value_type = Option<String>))]
    pub image: Option<Value>,
    #[cfg_attr(feature = "docs", schema(value_type = Option<String>, example = "Watermark"))]
    pub text: Option<Value>,
    #[cfg_attr(feature = "docs", schema(value_type = Option<String>, example = "#FFFFFF"))]
    pub color: Option<Value>,
    #[cfg_attr(feature = "docs", schema(value_type = Option<i64>, minimum = 0, maximum = 100, example = 50))]
    pub opacity: Option<Value>,
}

impl ProcessImageRequest {
    /// Parses a request body, rejecting anything but a non-empty JSON object.
    pub fn from_body(body: &[u8]) -> AppResult<Self> {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) if !map.is_empty() => {
                serde_json::from_value(Value::Object(map))
                    .map_err(|_| AppError::validation(NO_JSON_MESSAGE))
            }
            _ => Err(AppError::validation(NO_JSON_MESSAGE)),
        }
    }

    pub fn into_command(self) -> ProcessImageCommand {
        ProcessImageCommand {
            action: self.action.and_then(string_only),
            image: self.image.and_then(string_only),
            text: self.text.and_then(stringify),
            color: self.color.and_then(color_input),
            opacity: self.opacity.and_then(opacity_input),
        }
    }
}

fn string_only(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        _ => None,
    }
}

fn stringify(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn color_input(value: Value) -> Option<ColorInput> {
    match value {
        Value::Null => None,
        Value::String(hex) => Some(ColorInput::Hex(hex)),
        other => Some(ColorInput::Other(other.to_string())),
    }
}

fn opacity_input(value: Value) -> Option<OpacityInput> {
    let input = match value {
        Value::Null => return None,
        Value::Bool(flag) => OpacityInput::Integer(i64::from(flag)),
        Value::Number(number) => match (number.as_i64(), number.as_f64()) {
            (Some(integer), _) => OpacityInput::Integer(integer),
            (None, Some(float)) => OpacityInput::Float(float),
            (None, None) => OpacityInput::Other(number.to_string()),
        },
        Value::String(text) => OpacityInput::Text(text),
        other => OpacityInput::Other(other.to_string()),
    };
    Some(input)
}

/// `application/json` or any `application/*+json` type, parameters ignored.
pub fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json"
        || (mime.starts_with("application/") && mime.ends_with("+json"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("application/json")]
    #[case("application/json; charset=utf-8")]
    #[case("Application/JSON")]
    #[case("application/vnd.api+json")]
    fn accepts_json_content_types(#[case] content_type: &str) {
        assert!(is_json_content_type(content_type));
    }

    #[rstest]
    #[case("")]
    #[case("text/plain")]
    #[case("multipart/form-data; boundary=x")]
    #[case("text/json")]
    fn rejects_other_content_types(#[case] content_type: &str) {
        assert!(!is_json_content_type(content_type));
    }

    #[rstest]
    #[case(b"".as_slice())]
    #[case(b"not json".as_slice())]
    #[case(b"null".as_slice())]
    #[case(b"{}".as_slice())]
    #[case(b"[1, 2]".as_slice())]
    #[case(b"\"add\"".as_slice())]
    #[case(b"0".as_slice())]
    fn empty_or_non_object_bodies_carry_no_data(#[case] body: &[u8]) {
        let err = ProcessImageRequest::from_body(body).unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), NO_JSON_MESSAGE);
    }

    #[test]
    fn non_string_action_and_image_read_as_missing() {
        let command = ProcessImageRequest::from_body(br#"{"action": 1, "image": ["x"]}"#)
            .unwrap()
            .into_command();
        assert_eq!(command.action, None);
        assert_eq!(command.image, None);
    }

    #[test]
    fn style_fields_keep_their_json_shape() {
        let body = json!({
            "action": "add",
            "image": "aGk=",
            "text": 2025,
            "color": null,
            "opacity": "75"
        });
        let command = ProcessImageRequest::from_body(body.to_string().as_bytes())
            .unwrap()
            .into_command();

        assert_eq!(command.action.as_deref(), Some("add"));
        assert_eq!(command.text.as_deref(), Some("2025"));
        assert_eq!(command.color, None);
        assert_eq!(command.opacity, Some(OpacityInput::Text("75".to_string())));
    }

    #[rstest]
    #[case(json!("#0AF"), Some(ColorInput::Hex("#0AF".to_string())))]
    #[case(json!(123), Some(ColorInput::Other("123".to_string())))]
    #[case(json!(["#FFF"]), Some(ColorInput::Other(r##"["#FFF"]"##.to_string())))]
    #[case(json!(null), None)]
    fn color_values_map_to_inputs(#[case] value: Value, #[case] expected: Option<ColorInput>) {
        assert_eq!(color_input(value), expected);
    }

    #[rstest]
    #[case(json!(80), Some(OpacityInput::Integer(80)))]
    #[case(json!(12.5), Some(OpacityInput::Float(12.5)))]
    #[case(json!(true), Some(OpacityInput::Integer(1)))]
    #[case(json!(null), None)]
    #[case(json!([50]), Some(OpacityInput::Other("[50]".to_string())))]
    fn opacity_values_map_to_inputs(#[case] value: Value, #[case] expected: Option<OpacityInput>) {
        assert_eq!(opacity_input(value), expected);
    }
}
