//! Application input events.
//!
//! This module defines [`AppEvent`], the set of inputs that drive the
//! [`crate::App`] state machine.
//!
//! Events originate from two distinct sources:
//! - The terminal (resize; keystrokes reach the app via
//!   [`crate::InputState`]).
//! - The runtime (rotation-timer ticks and request resolution).

use veritas_client::Verification;

/// Events processed by the App state machine.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// Rotation-timer tick while a request is in flight.
    StatusTick,

    /// The in-flight request resolved with a verdict.
    VerdictReceived(Verification),

    /// The in-flight request failed.
    CheckFailed {
        /// Failure description; an empty message is replaced with a generic
        /// fallback.
        message: String,
    },
}
