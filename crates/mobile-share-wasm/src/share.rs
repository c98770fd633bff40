//! Share entry points exported to JavaScript.
//!
//! # Example
//!
//! ```typescript
//! import { shareOnMobile, isShareSupported } from '@mobile-share/wasm';
//!
//! button.hidden = !isShareSupported();
//! button.onclick = () =>
//!   shareOnMobile(
//!     { title: "Mobile Share", url: location.href, images: [canvas.toDataURL()] },
//!     (message) => toast(message),
//!   );
//! ```

use js_sys::Function;
use mobile_share_core::{share, ShareHost, ShareRequest};
use wasm_bindgen::prelude::*;

use crate::host::NavigatorHost;

/// Share content through the Web Share API.
///
/// `data` is an object `{ title, text?, url?, images? }` where `images` holds
/// Base64 data URLs. `fallback`, if given, is called with a message whenever
/// sharing is impossible or fails; it is never called on success.
///
/// Only `Error` objects (including `DOMException`) reach `fallback`. A share
/// promise rejected with any other value is logged but not forwarded, where
/// the older JavaScript helper called `fallback(undefined)`.
///
/// Returns immediately; the share sheet outcome is reported later.
#[wasm_bindgen(js_name = shareOnMobile)]
pub fn share_on_mobile(data: JsValue, fallback: Option<Function>) {
    let on_unavailable = fallback.map(|function| move |message: String| call(&function, &message));
    share_value(&NavigatorHost::new(), data, on_unavailable);
}

/// Dispatch a raw JS `data` value through `host`.
///
/// The capability check runs before `data` is inspected, so an unsupported
/// host always reports unavailability.
fn share_value<H, F>(host: &H, data: JsValue, on_unavailable: Option<F>)
where
    H: ShareHost,
    F: FnOnce(String) + 'static,
{
    if !host.is_supported() {
        share(host, &ShareRequest::default(), on_unavailable);
        return;
    }

    match serde_wasm_bindgen::from_value::<ShareRequest>(data) {
        Ok(request) => {
            let state = share(host, &request, on_unavailable);
            log::debug!("share request '{}' ended in {:?}", request.title, state);
        }
        Err(e) => {
            log::error!("invalid share data: {e}");
            if let Some(callback) = on_unavailable {
                callback(e.to_string());
            }
        }
    }
}

/// Whether the current environment exposes `navigator.share`.
#[wasm_bindgen(js_name = isShareSupported)]
pub fn is_share_supported() -> bool {
    NavigatorHost::new().is_supported()
}

fn call(function: &Function, message: &str) {
    if let Err(e) = function.call1(&JsValue::NULL, &JsValue::from_str(message)) {
        log::error!("share fallback threw: {e:?}");
    }
}
