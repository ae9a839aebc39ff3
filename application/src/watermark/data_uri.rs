use base64::{
    Engine,
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig, general_purpose::STANDARD},
};

use crate::error::{AppError, AppResult};

pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Standard alphabet with required padding that tolerates non-zero trailing
/// bits, which browsers and other encoders occasionally emit.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Returns the base64 body of a data URI, or the input when it has no comma.
///
/// Only the segment between the first and second comma is kept.
#[must_use]
pub fn strip_data_uri_prefix(payload: &str) -> &str {
    if payload.contains(',') {
        payload.split(',').nth(1).unwrap_or_default()
    } else {
        payload
    }
}

/// Decodes base64, skipping characters outside the standard alphabet such as
/// line breaks.
pub fn decode_base64_payload(payload: &str) -> AppResult<Vec<u8>> {
    let filtered: String = payload
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '='))
        .collect();

    LENIENT_STANDARD
        .decode(filtered.as_bytes())
        .map_err(|e| AppError::decode(format!("Invalid base64 image data: {e}")))
}

#[must_use]
pub fn encode_png_data_uri(png_bytes: &[u8]) -> String {
    let mut uri = String::with_capacity(PNG_DATA_URI_PREFIX.len() + png_bytes.len() * 4 / 3 + 4);
    uri.push_str(PNG_DATA_URI_PREFIX);
    STANDARD.encode_string(png_bytes, &mut uri);
    uri
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn strips_data_uri_prefix() {
        assert_eq!(strip_data_uri_prefix("data:image/png;base64,AAAA"), "AAAA");
        assert_eq!(strip_data_uri_prefix("AAAA"), "AAAA");
    }

    #[test]
    fn keeps_only_second_comma_segment() {
        assert_eq!(strip_data_uri_prefix("a,b,c"), "b");
        assert_eq!(strip_data_uri_prefix("data:image/png;base64,"), "");
    }

    #[test]
    fn decodes_standard_base64() {
        assert_eq!(decode_base64_payload("aGVsbG8=").unwrap(), b"hello");
    }

    #[test]
    fn ignores_whitespace_and_line_breaks() {
        assert_eq!(decode_base64_payload("aGVs\nbG8=\r\n").unwrap(), b"hello");
    }

    #[test]
    fn rejects_truncated_payload() {
        let err = decode_base64_payload("aGVsbG8").unwrap_err();
        assert!(matches!(err, AppError::DecodeError { .. }));
        assert!(err.to_string().starts_with("Invalid base64 image data"));
    }

    #[test]
    fn encodes_png_data_uri() {
        assert_eq!(encode_png_data_uri(b"hello"), "data:image/png;base64,aGVsbG8=");
    }
}
