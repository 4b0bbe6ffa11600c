use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use once_cell::sync::Lazy;
use regex::Regex;

const DEFAULT_MIME_TYPE: &str = "image/jpeg";

static DATA_URL_PREFIX: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^data:(image/[A-Za-z0-9.+-]+);base64,").ok());

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ImagePayloadError {
    #[error("receipt.invalid_base64")]
    InvalidBase64,
}

/// Image bytes decoded from an inline payload.
#[derive(Debug, PartialEq)]
pub struct DecodedImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// Decodes a bare base64 string or a `data:image/<type>;base64,` URL.
///
/// An explicit `mime_type` wins over the data URL's; without either the image
/// is assumed to be JPEG. Whitespace inside the payload is ignored.
pub fn decode_inline_image(
    raw: &str,
    mime_type: Option<&str>,
) -> Result<DecodedImage, ImagePayloadError> {
    let raw = raw.trim();
    let (url_mime_type, payload) = match DATA_URL_PREFIX.as_ref().and_then(|re| re.captures(raw)) {
        Some(caps) => (
            caps.get(1).map(|m| m.as_str().to_string()),
            &raw[caps.get(0).map_or(0, |m| m.end())..],
        ),
        None => (None, raw),
    };

    let clean: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD
        .decode(clean)
        .map_err(|_| ImagePayloadError::InvalidBase64)?;

    let mime_type = mime_type
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .or(url_mime_type)
        .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string());

    Ok(DecodedImage { bytes, mime_type })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_bare_base64_as_jpeg() {
        let image = decode_inline_image("cmVjZWlwdA==", None).unwrap();

        assert_eq!(image.bytes, b"receipt");
        assert_eq!(image.mime_type, "image/jpeg");
    }

    #[test]
    fn should_take_media_type_from_data_url() {
        let image = decode_inline_image("data:image/png;base64,cmVjZWlwdA==", None).unwrap();

        assert_eq!(image.bytes, b"receipt");
        assert_eq!(image.mime_type, "image/png");
    }

    #[test]
    fn should_prefer_explicit_media_type() {
        let image =
            decode_inline_image("data:image/png;base64,cmVjZWlwdA==", Some("image/webp")).unwrap();

        assert_eq!(image.mime_type, "image/webp");
    }

    #[test]
    fn should_ignore_whitespace_in_payload() {
        let image = decode_inline_image("cmVj\nZWlw\r\ndA==", None).unwrap();
        assert_eq!(image.bytes, b"receipt");
    }

    #[test]
    fn should_decode_empty_payload_to_no_bytes() {
        let image = decode_inline_image("", None).unwrap();
        assert!(image.bytes.is_empty());
    }

    #[test]
    fn should_reject_invalid_base64() {
        assert_eq!(
            decode_inline_image("not base64!", None),
            Err(ImagePayloadError::InvalidBase64)
        );
    }
}
