//! Request and payload types for share dispatch.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use super::error::ShareError;
use crate::decode::{decode_data_url, DecodedFile};

/// What the caller wants to share.
///
/// Field names match the JavaScript object accepted by `shareOnMobile`.
/// Fields of the wrong type are treated as absent rather than failing the
/// whole request, so a non-array `images` is simply ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShareRequest {
    /// Title of the shared content. Required; also sent as the share text.
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    /// Optional description. Accepted for API compatibility; the share text
    /// is always the title.
    #[serde(default, deserialize_with = "lenient")]
    pub text: Option<String>,
    /// Optional link, passed through unvalidated.
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    /// Optional Base64 data URLs, shared as files in this order.
    #[serde(default, deserialize_with = "lenient")]
    pub images: Option<Vec<String>>,
}

/// A value of the expected type, or anything else.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Other(IgnoredAny),
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Option::<Lenient<T>>::deserialize(deserializer)? {
        Some(Lenient::Value(value)) => Some(value),
        Some(Lenient::Other(IgnoredAny)) | None => None,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient(deserializer).map(Option::unwrap_or_default)
}

impl ShareRequest {
    /// Create a request with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Append one data URL to `images`.
    pub fn with_image(mut self, data_url: impl Into<String>) -> Self {
        self.images.get_or_insert_with(Vec::new).push(data_url.into());
        self
    }

    /// Check the request can be shared at all.
    pub fn validate(&self) -> Result<(), ShareError> {
        if self.title.is_empty() {
            return Err(ShareError::TitleRequired);
        }
        Ok(())
    }
}

/// The bundle handed to the host share action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    text: String,
    title: String,
    url: Option<String>,
    files: Option<Vec<DecodedFile>>,
}

impl SharePayload {
    /// Build the payload for a validated request.
    ///
    /// The title doubles as the share text. An empty `url` is left out, and
    /// each image is decoded in order. Any image that is empty or malformed
    /// fails the whole payload.
    pub fn from_request(request: &ShareRequest) -> Result<Self, ShareError> {
        let files = match &request.images {
            Some(images) => Some(
                images
                    .iter()
                    .enumerate()
                    .map(|(index, image)| {
                        decode_data_url(image)?.ok_or(ShareError::EmptyImage(index))
                    })
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            None => None,
        };

        Ok(Self {
            text: request.title.clone(),
            title: request.title.clone(),
            url: request.url.clone().filter(|url| !url.is_empty()),
            files,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Decoded files, or `None` when the request carried no `images`.
    pub fn files(&self) -> Option<&[DecodedFile]> {
        self.files.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::DecodeError;
    use serde_json::json;

    #[test]
    fn test_builder() {
        let request = ShareRequest::new("Hello")
            .with_text("World")
            .with_url("https://example.com")
            .with_image("data:image/png;base64,AAAA")
            .with_image("data:image/gif;base64,AAAA");

        assert_eq!(request.title, "Hello");
        assert_eq!(request.text.as_deref(), Some("World"));
        assert_eq!(request.url.as_deref(), Some("https://example.com"));
        assert_eq!(request.images.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_deserialize_full_request() {
        let request: ShareRequest = serde_json::from_value(json!({
            "title": "Hello",
            "text": "World",
            "url": "https://example.com",
            "images": ["data:image/png;base64,AAAA"],
        }))
        .unwrap();

        assert_eq!(
            request,
            ShareRequest::new("Hello")
                .with_text("World")
                .with_url("https://example.com")
                .with_image("data:image/png;base64,AAAA")
        );
    }

    #[test]
    fn test_deserialize_missing_and_null_fields() {
        let request: ShareRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request, ShareRequest::default());

        let request: ShareRequest =
            serde_json::from_value(json!({ "title": null, "url": null })).unwrap();
        assert_eq!(request, ShareRequest::default());
    }

    #[test]
    fn test_deserialize_ignores_mistyped_fields() {
        let request: ShareRequest = serde_json::from_value(json!({
            "title": "Hello",
            "text": 5,
            "url": false,
            "images": "data:image/png;base64,AAAA",
        }))
        .unwrap();

        assert_eq!(request, ShareRequest::new("Hello"));
    }

    #[test]
    fn test_deserialize_mistyped_title_is_empty() {
        let request: ShareRequest = serde_json::from_value(json!({ "title": 42 })).unwrap();
        assert_eq!(request.validate(), Err(ShareError::TitleRequired));
    }

    #[test]
    fn test_validate() {
        assert!(ShareRequest::new("Hello").validate().is_ok());
        assert_eq!(
            ShareRequest::new("").validate(),
            Err(ShareError::TitleRequired)
        );
    }

    #[test]
    fn test_payload_title_only() {
        let payload = SharePayload::from_request(&ShareRequest::new("Hello")).unwrap();

        assert_eq!(payload.text(), "Hello");
        assert_eq!(payload.title(), "Hello");
        assert_eq!(payload.url(), None);
        assert_eq!(payload.files(), None);
    }

    #[test]
    fn test_payload_text_is_title() {
        let request = ShareRequest::new("Hello").with_text("ignored");
        let payload = SharePayload::from_request(&request).unwrap();
        assert_eq!(payload.text(), "Hello");
    }

    #[test]
    fn test_payload_empty_url_is_dropped() {
        let request = ShareRequest::new("Hello").with_url("");
        let payload = SharePayload::from_request(&request).unwrap();
        assert_eq!(payload.url(), None);
    }

    #[test]
    fn test_payload_files_keep_order() {
        let request = ShareRequest::new("Hello")
            .with_image("data:image/png;base64,AAAA")
            .with_image("data:image/jpeg;base64,AAAAAA==");
        let payload = SharePayload::from_request(&request).unwrap();

        let files = payload.files().unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].mime_type(), "image/png");
        assert_eq!(files[0].len(), 3);
        assert_eq!(files[1].mime_type(), "image/jpeg");
        assert_eq!(files[1].len(), 4);
    }

    #[test]
    fn test_payload_empty_images_list() {
        let mut request = ShareRequest::new("Hello");
        request.images = Some(Vec::new());
        let payload = SharePayload::from_request(&request).unwrap();
        assert_eq!(payload.files(), Some(&[][..]));
    }

    #[test]
    fn test_payload_empty_image_fails() {
        let request = ShareRequest::new("Hello")
            .with_image("data:image/png;base64,AAAA")
            .with_image("");
        assert_eq!(
            SharePayload::from_request(&request),
            Err(ShareError::EmptyImage(1))
        );
    }

    #[test]
    fn test_payload_malformed_image_fails() {
        let request = ShareRequest::new("Hello").with_image("not a data url,AAAA");
        assert_eq!(
            SharePayload::from_request(&request),
            Err(ShareError::Decode(DecodeError::MissingMimeType(
                "not a data url".to_string()
            )))
        );
    }
}
