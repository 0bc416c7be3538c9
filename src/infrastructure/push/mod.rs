//! Push delivery infrastructure module

mod hosted;

pub use hosted::HostedPushSource;
