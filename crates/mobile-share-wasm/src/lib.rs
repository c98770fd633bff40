//! Mobile Share WASM - Web Share API bindings for mobile-share
//!
//! This crate exposes the mobile-share-core dispatcher to JavaScript,
//! backed by the browser's `navigator.share` / `navigator.canShare`.
//!
//! # Module Structure
//!
//! - `share` - `shareOnMobile` and the capability probe
//! - `host` - `ShareHost` implementation over `navigator`
//! - `types` - conversion of decoded files into DOM `File` objects
//! - `logger` - `log` backend writing to the devtools console
//!
//! # Usage
//!
//! ```typescript
//! import init, { shareOnMobile } from '@mobile-share/wasm';
//!
//! await init();
//!
//! shareOnMobile(
//!   { title: "Mobile Share", url: "https://example.com", images: [imgBase64] },
//!   (message) => console.error("Share failed:", message),
//! );
//! ```

use wasm_bindgen::prelude::*;

mod host;
mod logger;
mod share;
mod types;

pub use host::NavigatorHost;
pub use share::{is_share_supported, share_on_mobile};
pub use types::data_url_to_file;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logger::init();
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
