//! Base64 data URL decoding.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use super::types::{DecodeError, DecodedFile};

/// Standard alphabet with the leniency of the browser's `atob`: padding is
/// optional and stray trailing bits are discarded.
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decode a `data:<mime>;base64,<payload>` string into a [`DecodedFile`].
///
/// An empty string yields `Ok(None)`. Anything else must carry a MIME type
/// between `:` and `;` in the header; a header without one is an error rather
/// than `None`.
///
/// # Errors
///
/// - [`DecodeError::MissingPayload`] if there is no comma
/// - [`DecodeError::MissingMimeType`] if the header lacks `:<mime>;`
/// - [`DecodeError::InvalidBase64`] if the payload does not decode
pub fn decode_data_url(data_url: &str) -> Result<Option<DecodedFile>, DecodeError> {
    if data_url.is_empty() {
        return Ok(None);
    }

    let (header, payload) = data_url
        .split_once(',')
        .ok_or(DecodeError::MissingPayload)?;
    let mime_type =
        mime_type(header).ok_or_else(|| DecodeError::MissingMimeType(header.to_string()))?;

    let payload: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = FORGIVING.decode(payload)?;

    Ok(Some(DecodedFile::new(bytes, mime_type)))
}

/// Text between the first `:` and the `;` that follows it.
fn mime_type(header: &str) -> Option<&str> {
    let (_, rest) = header.split_once(':')?;
    let (mime, _) = rest.split_once(';')?;
    Some(mime)
}
