//! Bridge session domain module

mod session;

pub use session::{BridgeSession, BridgeState};
