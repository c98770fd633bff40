//! Core types for data URL decoding.

use thiserror::Error;

/// Display name given to every decoded file, whatever its MIME type.
pub const FILE_NAME: &str = "image.jpg";

/// Error types for data URL decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The header has no `:<mime>;` segment.
    #[error("Invalid data URL: missing MIME type in header '{0}'")]
    MissingMimeType(String),

    /// There is no comma separating the header from the payload.
    #[error("Invalid data URL: missing payload")]
    MissingPayload,

    /// The payload is not valid Base64.
    #[error("Invalid data URL: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

/// A file decoded from a data URL.
///
/// Owned by a single share invocation and dropped once the host has been
/// handed the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFile {
    bytes: Vec<u8>,
    mime_type: String,
}

impl DecodedFile {
    /// Create a new decoded file from raw bytes and a MIME type.
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    /// File name presented to the share target. Always [`FILE_NAME`].
    pub fn name(&self) -> &str {
        FILE_NAME
    }

    /// MIME type taken from the data URL header.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consume the file and return its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
