//! Data URL decoding for shared images.
//!
//! Images reach the share pipeline as `data:<mime>;base64,<payload>` strings,
//! typically produced by `canvas.toDataURL()`. This module turns them into
//! [`DecodedFile`] values that the host can wrap as native file objects.
//!
//! # Examples
//!
//! ```ignore
//! use mobile_share_core::decode::decode_data_url;
//!
//! let file = decode_data_url("data:image/png;base64,AAAA")?.unwrap();
//! assert_eq!(file.mime_type(), "image/png");
//! assert_eq!(file.len(), 3);
//! ```

mod data_url;
mod types;

pub use data_url::decode_data_url;
pub use types::{DecodeError, DecodedFile, FILE_NAME};
