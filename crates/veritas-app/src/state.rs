//! Observable request-lifecycle state.
//!
//! [`CheckState`] is the "view model" for rendering: the subset of lifecycle
//! state the UI needs, with no handle on timers or sockets. Exactly one
//! variant is active at any time.

use veritas_client::Verification;

/// Progress labels cycled while a request is in flight.
///
/// Cosmetic only: rotation is driven by a fixed-period timer and carries no
/// information about actual backend progress.
pub const STATUS_MESSAGES: [&str; 4] = [
    "Submitting claim…",
    "Gathering sources…",
    "Analyzing data…",
    "Finalizing verdict…",
];

/// Progress label for a rotation index.
///
/// Indexed modulo the sequence length, so any counter value is valid.
pub fn status_message(index: usize) -> &'static str {
    STATUS_MESSAGES[index % STATUS_MESSAGES.len()]
}

/// Request-lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CheckState {
    /// No request in flight, no prior result shown.
    #[default]
    Idle,
    /// Request in flight.
    Submitting {
        /// Index into [`STATUS_MESSAGES`].
        status_index: usize,
    },
    /// Terminal: the backend returned a verdict.
    Succeeded(Verification),
    /// Terminal: the request failed.
    Failed {
        /// Human-readable failure description. Never empty.
        message: String,
    },
}

impl CheckState {
    /// Whether a request is currently in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }
}
