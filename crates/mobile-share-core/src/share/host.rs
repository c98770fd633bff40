//! The host share capability seam.

use futures::future::LocalBoxFuture;

use super::error::HostError;
use super::types::SharePayload;

/// Completion of a host share action.
pub type HostFuture = LocalBoxFuture<'static, Result<(), HostError>>;

/// A native share surface the dispatcher can hand payloads to.
///
/// In the browser this is `navigator.share`; tests substitute a fake.
/// Everything is single-threaded, so futures are `!Send`.
pub trait ShareHost {
    /// Whether the host exposes a share action at all.
    fn is_supported(&self) -> bool;

    /// Ask the host whether `payload` can be shared.
    ///
    /// Returns `Ok(None)` when the host offers no such predicate, in which
    /// case the dispatcher goes ahead and shares. Note that the older
    /// JavaScript helper (`navigator.canShare && navigator.canShare(data)`)
    /// skipped the share entirely on browsers without `canShare`.
    fn can_share(&self, payload: &SharePayload) -> Result<Option<bool>, HostError>;

    /// Start the share action.
    ///
    /// An `Err` here is a synchronous failure; the returned future resolves
    /// once the user completes or dismisses the share sheet.
    fn share(&self, payload: SharePayload) -> Result<HostFuture, HostError>;

    /// Run `task` to completion without blocking the caller.
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}
