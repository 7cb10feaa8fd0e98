// models/src/medical/image.rs
//! Self-describing encoded image payloads.
//!
//! Captured frames and enrollment photos travel as data URIs
//! (`data:<mime>;base64,<content>`). The wire form is kept verbatim in
//! serialized documents; in memory the format tag and content are split so
//! callers cannot forward an unvalidated payload to the face oracle.
use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EncodedImage {
    /// MIME format tag, e.g. `image/png`.
    pub format: String,
    /// Base64-encoded image bytes.
    pub content: String,
}

impl EncodedImage {
    /// Parses a `data:<mime>;base64,<content>` URI, rejecting payloads with
    /// a missing format tag or content that is not valid base64.
    pub fn from_data_uri(uri: &str) -> Result<Self, ValidationError> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| ValidationError::InvalidImageEncoding("missing data: scheme".into()))?;
        let (format, content) = rest
            .split_once(";base64,")
            .ok_or_else(|| ValidationError::InvalidImageEncoding("missing base64 marker".into()))?;
        if format.is_empty() {
            return Err(ValidationError::InvalidImageEncoding("empty format tag".into()));
        }
        BASE64
            .decode(content)
            .map_err(|e| ValidationError::InvalidImageEncoding(e.to_string()))?;
        Ok(Self {
            format: format.to_string(),
            content: content.to_string(),
        })
    }

    /// Wraps raw image bytes.
    pub fn from_bytes(format: &str, bytes: &[u8]) -> Self {
        Self {
            format: format.to_string(),
            content: BASE64.encode(bytes),
        }
    }

    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.format, self.content)
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl fmt::Display for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_data_uri())
    }
}

impl TryFrom<String> for EncodedImage {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        EncodedImage::from_data_uri(&value)
    }
}

impl From<EncodedImage> for String {
    fn from(image: EncodedImage) -> Self {
        image.to_data_uri()
    }
}

#[cfg(test)]
mod tests {
    use super::EncodedImage;

    #[test]
    fn should_parse_data_uri() {
        let image = EncodedImage::from_data_uri("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(image.format, "image/png");
        assert_eq!(image.content, "aGVsbG8=");
    }

    #[test]
    fn should_round_trip_data_uri() {
        let uri = "data:image/jpeg;base64,aGVsbG8=";
        let image = EncodedImage::from_data_uri(uri).unwrap();
        assert_eq!(image.to_data_uri(), uri);
    }

    #[test]
    fn should_reject_missing_scheme() {
        assert!(EncodedImage::from_data_uri("image/png;base64,aGVsbG8=").is_err());
    }

    #[test]
    fn should_reject_missing_format_tag() {
        assert!(EncodedImage::from_data_uri("data:;base64,aGVsbG8=").is_err());
    }

    #[test]
    fn should_reject_invalid_base64() {
        assert!(EncodedImage::from_data_uri("data:image/png;base64,!!!").is_err());
    }

    #[test]
    fn should_serialize_as_wire_string() {
        let image = EncodedImage::from_bytes("image/png", b"hello");
        let json = serde_json::to_string(&image).unwrap();
        assert_eq!(json, "\"data:image/png;base64,aGVsbG8=\"");
        let back: EncodedImage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, image);
    }
}
