//! `ShareHost` implementation over the browser's `navigator`.

use futures::FutureExt;
use js_sys::{Array, Object, Promise, Reflect};
use mobile_share_core::{HostError, HostFuture, ShareHost, SharePayload};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::types::to_js_file;

#[wasm_bindgen]
extern "C" {
    /// The subset of `Navigator` used for sharing, bound structurally so it
    /// works wherever a global `navigator` exists.
    #[wasm_bindgen(extends = Object)]
    #[derive(Debug, Clone)]
    type ShareNavigator;

    #[wasm_bindgen(method, catch, js_name = share)]
    fn share(this: &ShareNavigator, data: &Object) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch, js_name = canShare)]
    fn can_share(this: &ShareNavigator, data: &Object) -> Result<bool, JsValue>;
}

/// Share host backed by `navigator.share` and `navigator.canShare`.
#[derive(Debug, Clone)]
pub struct NavigatorHost {
    navigator: Option<ShareNavigator>,
}

impl NavigatorHost {
    /// Bind to the global `navigator`, if there is one.
    pub fn new() -> Self {
        let navigator = Reflect::get(&js_sys::global(), &JsValue::from_str("navigator"))
            .ok()
            .filter(|value| value.is_object())
            .map(|value| value.unchecked_into::<ShareNavigator>());
        Self { navigator }
    }

    fn member(&self, name: &str) -> Option<JsValue> {
        let navigator = self.navigator.as_ref()?;
        Reflect::get(navigator, &JsValue::from_str(name))
            .ok()
            .filter(|value| !value.is_undefined())
    }

    fn navigator(&self) -> Result<&ShareNavigator, HostError> {
        self.navigator
            .as_ref()
            .ok_or_else(|| HostError::new("navigator is not available"))
    }
}

impl Default for NavigatorHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ShareHost for NavigatorHost {
    fn is_supported(&self) -> bool {
        self.member("share").is_some()
    }

    fn can_share(&self, payload: &SharePayload) -> Result<Option<bool>, HostError> {
        if !self.member("canShare").is_some_and(|value| value.is_truthy()) {
            return Ok(None);
        }
        let data = share_data(payload).map_err(host_error)?;
        self.navigator()?
            .can_share(&data)
            .map(Some)
            .map_err(host_error)
    }

    fn share(&self, payload: SharePayload) -> Result<HostFuture, HostError> {
        let data = share_data(&payload).map_err(host_error)?;
        let promise = self.navigator()?.share(&data).map_err(host_error)?;
        Ok(async move {
            JsFuture::from(promise)
                .await
                .map(drop)
                .map_err(host_error)
        }
        .boxed_local())
    }

    fn spawn(&self, task: futures::future::LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

/// Build the `ShareData` dictionary for `payload`.
fn share_data(payload: &SharePayload) -> Result<Object, JsValue> {
    let data = Object::new();
    Reflect::set(&data, &"text".into(), &payload.text().into())?;
    Reflect::set(&data, &"title".into(), &payload.title().into())?;
    if let Some(url) = payload.url() {
        Reflect::set(&data, &"url".into(), &url.into())?;
    }
    if let Some(files) = payload.files() {
        let array = Array::new();
        for file in files {
            array.push(&JsValue::from(to_js_file(file)?));
        }
        Reflect::set(&data, &"files".into(), &JsValue::from(array))?;
    }
    Ok(data)
}

/// Map a thrown or rejected JS value onto a [`HostError`].
///
/// Only `Error` instances (including `DOMException`) carry a message through
/// to the fallback callback.
fn host_error(value: JsValue) -> HostError {
    match value.dyn_into::<js_sys::Error>() {
        Ok(err) => HostError::new(String::from(err.message())),
        Err(other) => HostError::unrecognized(format!("{other:?}")),
    }
}
