//! Error types for share dispatch.

use thiserror::Error;

use crate::decode::DecodeError;

/// A failure raised by the host share capability.
///
/// Hosts may throw values that are not proper errors. Those are kept for
/// logging but carry no message, so they are never forwarded to the fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.message.as_deref().unwrap_or(&self.description))]
pub struct HostError {
    message: Option<String>,
    description: String,
}

impl HostError {
    /// A recognised host error with a user-facing message.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            description: message.clone(),
            message: Some(message),
        }
    }

    /// A thrown value that is not a recognised error.
    pub fn unrecognized(description: impl Into<String>) -> Self {
        Self {
            message: None,
            description: description.into(),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_recognized(&self) -> bool {
        self.message.is_some()
    }
}

/// Error types for a share invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    /// The host exposes no share capability.
    #[error("Can't share on this, make sure you are running on Android or iOS devices")]
    Unavailable,

    /// The request has an empty title.
    #[error("Title is required")]
    TitleRequired,

    /// An entry in `images` was an empty string.
    #[error("Image {0} is empty")]
    EmptyImage(usize),

    /// An image could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The host capability failed.
    #[error(transparent)]
    Host(#[from] HostError),
}

impl ShareError {
    /// Message handed to the fallback callback, if this error is reported
    /// there at all.
    pub fn fallback_message(&self) -> Option<String> {
        match self {
            ShareError::Host(err) => err.message().map(str::to_string),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_error_recognized() {
        let err = HostError::new("denied");
        assert!(err.is_recognized());
        assert_eq!(err.message(), Some("denied"));
        assert_eq!(err.to_string(), "denied");
    }

    #[test]
    fn test_host_error_unrecognized() {
        let err = HostError::unrecognized("JsValue(42)");
        assert!(!err.is_recognized());
        assert_eq!(err.message(), None);
        assert_eq!(err.to_string(), "JsValue(42)");
    }

    #[test]
    fn test_fallback_messages() {
        assert_eq!(
            ShareError::Unavailable.fallback_message().as_deref(),
            Some("Can't share on this, make sure you are running on Android or iOS devices")
        );
        assert_eq!(
            ShareError::TitleRequired.fallback_message().as_deref(),
            Some("Title is required")
        );
        assert_eq!(
            ShareError::EmptyImage(2).fallback_message().as_deref(),
            Some("Image 2 is empty")
        );
        assert_eq!(
            ShareError::from(DecodeError::MissingPayload)
                .fallback_message()
                .as_deref(),
            Some("Invalid data URL: missing payload")
        );
        assert_eq!(
            ShareError::from(HostError::new("denied"))
                .fallback_message()
                .as_deref(),
            Some("denied")
        );
    }

    #[test]
    fn test_unrecognized_host_error_has_no_fallback_message() {
        assert_eq!(
            ShareError::from(HostError::unrecognized("undefined")).fallback_message(),
            None
        );
    }
}
