//! Conversion between decoded files and DOM `File` objects.
//!
//! The core crate knows nothing about the DOM; this module wraps each
//! [`DecodedFile`] as a `File` so it can ride along in `navigator.share`.

use js_sys::{Array, Uint8Array};
use mobile_share_core::decode::{decode_data_url, DecodedFile};
use wasm_bindgen::prelude::*;
use web_sys::{File, FilePropertyBag};

/// Build a DOM `File` holding a copy of the decoded bytes.
pub(crate) fn to_js_file(file: &DecodedFile) -> Result<File, JsValue> {
    let parts = Array::of1(&JsValue::from(Uint8Array::from(file.bytes())));
    let options = FilePropertyBag::new();
    options.set_type(file.mime_type());
    File::new_with_u8_array_sequence_and_options(&parts, file.name(), &options)
}

/// Convert a Base64 data URL into a `File`.
///
/// Returns `undefined` for an empty string and throws for a malformed URL.
///
/// # Example
///
/// ```typescript
/// const file = dataUrlToFile(canvas.toDataURL("image/png"));
/// console.log(file.name, file.type); // "image.jpg" "image/png"
/// ```
#[wasm_bindgen(js_name = dataUrlToFile)]
pub fn data_url_to_file(data_url: &str) -> Result<Option<File>, JsValue> {
    decode_data_url(data_url)
        .map_err(|e| JsValue::from_str(&e.to_string()))?
        .map(|file| to_js_file(&file))
        .transpose()
}
