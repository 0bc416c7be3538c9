//! Bridge session state machine

use std::fmt;

/// Bridge worker states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BridgeState {
    #[default]
    Idle,
    Handling,
}

impl BridgeState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Handling => "handling",
        }
    }
}

impl fmt::Display for BridgeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bridge session entity.
/// Tracks the worker lifecycle across delivered messages.
///
/// State machine:
///   IDLE -> HANDLING (begin_handling)
///   HANDLING -> IDLE (finish_handling)
///
/// Both transitions are unconditional: every delivered message is handled
/// the same way whether or not it produces a notification. The session
/// also counts completed handlings for status output.
#[derive(Debug, Default)]
pub struct BridgeSession {
    state: BridgeState,
    handled: u64,
}

impl BridgeSession {
    /// Create a new session in idle state
    pub fn new() -> Self {
        Self {
            state: BridgeState::Idle,
            handled: 0,
        }
    }

    /// Get the current state
    pub fn state(&self) -> BridgeState {
        self.state
    }

    /// Check if currently idle
    pub fn is_idle(&self) -> bool {
        self.state == BridgeState::Idle
    }

    /// Check if currently handling a message
    pub fn is_handling(&self) -> bool {
        self.state == BridgeState::Handling
    }

    /// Number of messages handled so far
    pub fn handled(&self) -> u64 {
        self.handled
    }

    /// Transition from IDLE to HANDLING
    pub fn begin_handling(&mut self) {
        self.state = BridgeState::Handling;
    }

    /// Transition from HANDLING back to IDLE, counting the message
    pub fn finish_handling(&mut self) {
        self.state = BridgeState::Idle;
        self.handled += 1;
    }
}
