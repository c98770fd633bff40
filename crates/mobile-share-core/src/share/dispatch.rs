//! The share dispatcher.

use futures::FutureExt;

use super::error::ShareError;
use super::host::ShareHost;
use super::types::{SharePayload, ShareRequest};

/// How far a single invocation of [`share`] got before returning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareState {
    /// Stopped before the host share action was started. The error has
    /// already been logged and, where applicable, sent to the fallback.
    Rejected(ShareError),
    /// The host predicate declined the payload. Nothing was reported.
    NotShareable,
    /// The host share action is running; its outcome is reported when it
    /// settles.
    Dispatched,
}

/// Share `request` through `host`.
///
/// Fire-and-forget: failures go to `on_unavailable` (at most once) and the
/// log, and success is only logged. The returned [`ShareState`] says which
/// path was taken, but callers are not required to look at it.
///
/// Steps, in order:
/// 1. no share capability: report [`ShareError::Unavailable`], decode nothing
/// 2. empty title: report [`ShareError::TitleRequired`]
/// 3. build the payload, decoding images in order
/// 4. consult the host predicate if there is one; a `false` is silent
/// 5. start the share action and report its outcome asynchronously
///
/// Failures in steps 3 to 5 that occur before the share action is running
/// are reported the same way as a rejected share action.
pub fn share<H, F>(host: &H, request: &ShareRequest, on_unavailable: Option<F>) -> ShareState
where
    H: ShareHost + ?Sized,
    F: FnOnce(String) + 'static,
{
    if !host.is_supported() {
        log::error!("share capability is not available");
        return reject(ShareError::Unavailable, on_unavailable);
    }
    if let Err(err) = request.validate() {
        log::error!("title is required");
        return reject(err, on_unavailable);
    }

    let payload = match SharePayload::from_request(request) {
        Ok(payload) => payload,
        Err(err) => return fail(err, on_unavailable),
    };

    match host.can_share(&payload) {
        Ok(Some(false)) => {
            log::debug!("host declined payload '{}'", payload.title());
            return ShareState::NotShareable;
        }
        Ok(_) => {}
        Err(err) => return fail(err.into(), on_unavailable),
    }

    let completion = match host.share(payload) {
        Ok(completion) => completion,
        Err(err) => return fail(err.into(), on_unavailable),
    };

    host.spawn(
        async move {
            match completion.await {
                Ok(()) => log::info!("Shared successful."),
                Err(err) => {
                    let err = ShareError::from(err);
                    log::error!("Sharing failed: {err}");
                    notify(&err, on_unavailable);
                }
            }
        }
        .boxed_local(),
    );

    ShareState::Dispatched
}

fn reject<F: FnOnce(String)>(err: ShareError, on_unavailable: Option<F>) -> ShareState {
    notify(&err, on_unavailable);
    ShareState::Rejected(err)
}

fn fail<F: FnOnce(String)>(err: ShareError, on_unavailable: Option<F>) -> ShareState {
    log::error!("share failed: {err}");
    reject(err, on_unavailable)
}

fn notify<F: FnOnce(String)>(err: &ShareError, on_unavailable: Option<F>) {
    if let (Some(callback), Some(message)) = (on_unavailable, err.fallback_message()) {
        callback(message);
    }
}
