use domain::{
    action::WatermarkAction,
    color::HexColor,
    error::DomainError,
    opacity::Opacity,
    watermark::{DEFAULT_WATERMARK_TEXT, TextStyle, WatermarkRequest},
};

use super::data_uri::{decode_base64_payload, strip_data_uri_prefix};
use crate::error::{AppError, AppResult};

pub const INVALID_ACTION_MESSAGE: &str = "Invalid action. Use 'add' or 'remove'";
pub const MISSING_IMAGE_MESSAGE: &str = "No image data provided";

/// Opacity exactly as it appeared in the request body.
#[derive(Debug, Clone, PartialEq)]
pub enum OpacityInput {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(String),
}

impl OpacityInput {
    /// Integers pass through, floats truncate toward zero and strings must
    /// hold an integer.
    pub fn to_percent(&self) -> AppResult<i64> {
        match self {
            Self::Integer(value) => Ok(*value),
            Self::Float(value) if value.is_finite() => {
                #[allow(clippy::cast_possible_truncation)]
                let truncated = value.trunc() as i64;
                Ok(truncated)
            }
            Self::Float(value) => Err(AppError::InvalidOpacity {
                message: value.to_string(),
            }),
            Self::Text(text) => {
                text.trim()
                    .parse::<i64>()
                    .map_err(|_| AppError::InvalidOpacity {
                        message: format!("'{text}' is not an integer"),
                    })
            }
            Self::Other(repr) => Err(AppError::InvalidOpacity {
                message: repr.clone(),
            }),
        }
    }
}

/// Color exactly as it appeared in the request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorInput {
    Hex(String),
    /// Any non-string JSON value, kept as its JSON text.
    Other(String),
}

impl ColorInput {
    pub fn to_hex_color(self) -> AppResult<HexColor> {
        match self {
            Self::Hex(hex) => Ok(HexColor::new(hex)),
            Self::Other(repr) => Err(DomainError::InvalidColorFormat(format!(
                "expected a hex string, got {repr}"
            ))
            .into()),
        }
    }
}

/// Loosely-typed request fields, before any validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessImageCommand {
    pub action: Option<String>,
    pub image: Option<String>,
    pub text: Option<String>,
    pub color: Option<ColorInput>,
    pub opacity: Option<OpacityInput>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedImage {
    pub data_uri: String,
    pub width: u32,
    pub height: u32,
    pub message: &'static str,
}

/// A command that passed validation; its image is still base64 text.
#[derive(Debug, Clone)]
pub struct ValidatedCommand {
    action: WatermarkAction,
    encoded_image: String,
    text: Option<String>,
    color: Option<ColorInput>,
    opacity: Option<OpacityInput>,
}

impl ValidatedCommand {
    /// Decodes the image payload and resolves style defaults.
    ///
    /// Style fields are only interpreted for [`WatermarkAction::Add`].
    pub fn into_request(self) -> AppResult<WatermarkRequest> {
        let image_bytes = decode_base64_payload(strip_data_uri_prefix(&self.encoded_image))?;

        let style = match self.action {
            WatermarkAction::Add => TextStyle {
                text: self
                    .text
                    .unwrap_or_else(|| DEFAULT_WATERMARK_TEXT.to_string()),
                color: self
                    .color
                    .map(ColorInput::to_hex_color)
                    .transpose()?
                    .unwrap_or_default(),
                opacity: self
                    .opacity
                    .as_ref()
                    .map(OpacityInput::to_percent)
                    .transpose()?
                    .map(Opacity::from_percent)
                    .unwrap_or_default(),
            },
            WatermarkAction::Remove => TextStyle::default(),
        };

        Ok(WatermarkRequest::new(self.action, image_bytes, style))
    }
}

pub fn validate_command(command: ProcessImageCommand) -> AppResult<ValidatedCommand> {
    let action = command
        .action
        .as_deref()
        .and_then(|action| action.parse::<WatermarkAction>().ok())
        .ok_or_else(|| AppError::validation(INVALID_ACTION_MESSAGE))?;

    let encoded_image = command
        .image
        .filter(|image| !image.is_empty())
        .ok_or_else(|| AppError::validation(MISSING_IMAGE_MESSAGE))?;

    Ok(ValidatedCommand {
        action,
        encoded_image,
        text: command.text,
        color: command.color,
        opacity: command.opacity,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn command(action: Option<&str>, image: Option<&str>) -> ProcessImageCommand {
        ProcessImageCommand {
            action: action.map(ToString::to_string),
            image: image.map(ToString::to_string),
            ..ProcessImageCommand::default()
        }
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("Add"))]
    #[case(Some("watermark"))]
    fn rejects_missing_or_unknown_action(#[case] action: Option<&str>) {
        let err = validate_command(command(action, Some("aGVsbG8="))).unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), INVALID_ACTION_MESSAGE);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    fn rejects_missing_image(#[case] image: Option<&str>) {
        let err = validate_command(command(Some("add"), image)).unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), MISSING_IMAGE_MESSAGE);
    }

    #[test]
    fn action_is_checked_before_image() {
        let err = validate_command(command(None, None)).unwrap_err();
        assert_eq!(err.to_string(), INVALID_ACTION_MESSAGE);
    }

    #[test]
    fn add_uses_style_defaults() {
        let request = validate_command(command(Some("add"), Some("data:image/png;base64,aGk=")))
            .unwrap()
            .into_request()
            .unwrap();

        assert_eq!(request.action, WatermarkAction::Add);
        assert_eq!(request.image_bytes, b"hi");
        assert_eq!(request.style, TextStyle::default());
    }

    #[test]
    fn add_reads_explicit_style() {
        let validated = validate_command(ProcessImageCommand {
            action: Some("add".to_string()),
            image: Some("aGk=".to_string()),
            text: Some("(c) 2025".to_string()),
            color: Some(ColorInput::Hex("#0AF".to_string())),
            opacity: Some(OpacityInput::Text(" 75 ".to_string())),
        })
        .unwrap();

        let style = validated.into_request().unwrap().style;
        assert_eq!(style.text, "(c) 2025");
        assert_eq!(style.color.as_str(), "#0AF");
        assert_eq!(style.opacity.percent(), 75);
    }

    #[test]
    fn remove_ignores_style_fields() {
        let validated = validate_command(ProcessImageCommand {
            action: Some("remove".to_string()),
            image: Some("aGk=".to_string()),
            opacity: Some(OpacityInput::Text("lots".to_string())),
            ..ProcessImageCommand::default()
        })
        .unwrap();

        let request = validated.into_request().unwrap();
        assert_eq!(request.action, WatermarkAction::Remove);
        assert_eq!(request.style, TextStyle::default());
    }

    #[test]
    fn malformed_base64_is_a_decode_error() {
        let err = validate_command(command(Some("add"), Some("not-valid-base64!!!")))
            .unwrap()
            .into_request()
            .unwrap_err();
        assert!(matches!(err, AppError::DecodeError { .. }));
        assert!(!err.is_client_error());
    }

    #[test]
    fn non_string_color_is_a_color_format_error() {
        let err = validate_command(ProcessImageCommand {
            color: Some(ColorInput::Other("123".to_string())),
            ..command(Some("add"), Some("aGk="))
        })
        .unwrap()
        .into_request()
        .unwrap_err();

        assert!(matches!(
            err,
            AppError::Domain(DomainError::InvalidColorFormat(_))
        ));
        assert!(!err.is_client_error());
    }

    #[test]
    fn remove_ignores_non_string_color() {
        let request = validate_command(ProcessImageCommand {
            color: Some(ColorInput::Other("[1,2,3]".to_string())),
            ..command(Some("remove"), Some("aGk="))
        })
        .unwrap()
        .into_request()
        .unwrap();

        assert_eq!(request.style, TextStyle::default());
    }

    #[rstest]
    #[case(OpacityInput::Integer(80), 80)]
    #[case(OpacityInput::Integer(-5), -5)]
    #[case(OpacityInput::Float(50.9), 50)]
    #[case(OpacityInput::Float(-0.5), 0)]
    #[case(OpacityInput::Text("42".to_string()), 42)]
    fn opacity_inputs_convert_like_integer_casts(#[case] input: OpacityInput, #[case] expected: i64) {
        assert_eq!(input.to_percent().unwrap(), expected);
    }

    #[rstest]
    #[case(OpacityInput::Text("12.5".to_string()))]
    #[case(OpacityInput::Text("half".to_string()))]
    #[case(OpacityInput::Float(f64::INFINITY))]
    #[case(OpacityInput::Other("[50]".to_string()))]
    fn invalid_opacity_inputs_fail(#[case] input: OpacityInput) {
        assert!(matches!(
            input.to_percent(),
            Err(AppError::InvalidOpacity { .. })
        ));
    }
}
