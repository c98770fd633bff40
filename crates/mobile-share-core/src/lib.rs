//! Mobile Share Core - data URL decoding and share dispatch
//!
//! This crate holds the platform-independent half of mobile-share: turning
//! Base64 data URLs into in-memory files and negotiating with a host share
//! capability. The host itself is abstracted behind [`ShareHost`] so the
//! dispatcher runs unchanged in the browser and in native tests.

pub mod decode;
pub mod share;

pub use decode::{decode_data_url, DecodeError, DecodedFile, FILE_NAME};
pub use share::{
    share, HostError, HostFuture, ShareError, ShareHost, SharePayload, ShareRequest, ShareState,
};
