//! Push message domain module

mod credentials;
mod payload;

pub use credentials::ServiceCredentials;
pub use payload::{MalformedReason, PushPayload};
