//! Share dispatch against a host share capability.
//!
//! [`share`] validates a [`ShareRequest`], decodes its images, asks the
//! [`ShareHost`] whether the payload is acceptable and hands it over. Outcomes
//! are reported through an optional fallback callback and the `log` facade;
//! nothing is returned to the caller beyond an informational [`ShareState`].

mod dispatch;
mod error;
mod host;
mod types;

pub use dispatch::{share, ShareState};
pub use error::{HostError, ShareError};
pub use host::{HostFuture, ShareHost};
pub use types::{SharePayload, ShareRequest};
