//! Core data types shared by the toy capabilities.

use serde::{Deserialize, Serialize};

/// MIME type of rendered badges.
pub const SVG_MIME: &str = "image/svg+xml";

/// A rendered image, ready to travel inside a JSON payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub encoding: PayloadEncoding,
    pub data: String,
}

/// How `ImagePayload::data` is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadEncoding {
    Base64,
}

impl ImagePayload {
    /// Wrap raw image bytes as a base64 payload.
    pub fn base64(mime_type: &str, bytes: &[u8]) -> Self {
        use base64::Engine;
        Self {
            mime_type: mime_type.to_string(),
            encoding: PayloadEncoding::Base64,
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }

    /// Decode the payload back into raw bytes.
    pub fn decode(&self) -> ToyResult<Vec<u8>> {
        use base64::Engine;
        match self.encoding {
            PayloadEncoding::Base64 => base64::engine::general_purpose::STANDARD
                .decode(&self.data)
                .map_err(|e| ToyError::Render(format!("invalid base64 payload: {e}"))),
        }
    }
}

/// Errors raised by the toy capabilities.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ToyError {
    /// The input lies outside the function's domain.
    #[error("{0}")]
    Domain(String),

    /// The renderer cannot encode the inputs.
    #[error("{0}")]
    Render(String),
}

/// Convenience result type.
pub type ToyResult<T> = Result<T, ToyError>;
