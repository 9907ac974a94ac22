//! Request-lifecycle state machine.
//!
//! This module defines the [`App`] state machine, which manages the
//! claim-submission lifecycle completely decoupled from I/O.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # State machine
//!
//! ```text
//! Idle --submit--> Submitting --success--> Succeeded
//!                  Submitting --failure--> Failed
//! Succeeded --submit--> Submitting   (re-entrant: replaces old result)
//! Failed    --submit--> Submitting
//! ```
//!
//! `Succeeded` and `Failed` are terminal per request but not for the app;
//! both are re-enterable via a new submission.

use veritas_client::GENERIC_FAILURE;

use crate::{AppAction, AppEvent, CheckState, state::STATUS_MESSAGES};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable without a terminal or network.
#[derive(Debug, Clone, Default)]
pub struct App {
    /// Lifecycle state of the current (or most recent) request.
    check: CheckState,
}

impl App {
    /// Create a new App in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `claim` may be submitted right now.
    ///
    /// True iff the trimmed claim is non-empty and no request is in flight.
    pub fn can_submit(&self, claim: &str) -> bool {
        !claim.trim().is_empty() && !self.check.is_submitting()
    }

    /// Begin a verification request for `claim`.
    ///
    /// No-op when submission is not allowed (blank claim or a request already
    /// in flight). Otherwise any previous result or error is replaced by
    /// `Submitting` and the runtime is instructed to issue exactly one
    /// request.
    pub fn submit(&mut self, claim: &str) -> Vec<AppAction> {
        if !self.can_submit(claim) {
            return vec![];
        }

        // Entering Submitting discards the previous terminal state.
        self.check = CheckState::Submitting { status_index: 0 };
        vec![AppAction::Submit { claim: claim.trim().to_string() }, AppAction::Render]
    }

    /// Process an event and return actions for the runtime.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Resize(_, _) => vec![AppAction::Render],
            AppEvent::StatusTick => self.advance_status(),
            AppEvent::VerdictReceived(verification) => {
                if !self.check.is_submitting() {
                    tracing::warn!("verdict received with no request in flight");
                }
                self.check = CheckState::Succeeded(verification);
                vec![AppAction::Render]
            },
            AppEvent::CheckFailed { message } => {
                let message = if message.trim().is_empty() {
                    GENERIC_FAILURE.to_string()
                } else {
                    message
                };
                self.check = CheckState::Failed { message };
                vec![AppAction::Render]
            },
        }
    }

    /// Quit the application.
    pub fn quit(&self) -> Vec<AppAction> {
        vec![AppAction::Quit]
    }

    /// Current lifecycle state.
    pub fn check_state(&self) -> &CheckState {
        &self.check
    }

    /// Advance the rotating status label; ignored outside `Submitting`.
    fn advance_status(&mut self) -> Vec<AppAction> {
        match self.check {
            CheckState::Submitting { status_index } => {
                self.check = CheckState::Submitting {
                    status_index: (status_index + 1) % STATUS_MESSAGES.len(),
                };
                vec![AppAction::Render]
            },
            _ => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use veritas_client::Verification;

    use super::*;

    fn verification() -> Verification {
        Verification {
            verdict: "True".into(),
            justification: "J".into(),
            evidence_urls: vec!["https://a".into()],
        }
    }

    #[test]
    fn blank_claims_cannot_be_submitted() {
        let mut app = App::new();

        for claim in ["", "   ", "\t\n"] {
            assert!(!app.can_submit(claim));
            assert!(app.submit(claim).is_empty());
            assert_eq!(app.check_state(), &CheckState::Idle);
        }
    }

    #[test]
    fn submit_emits_exactly_one_request() {
        let mut app = App::new();
        let actions = app.submit("  the earth is round  ");

        assert!(matches!(actions.as_slice(), [
            AppAction::Submit { claim },
            AppAction::Render
        ] if claim == "the earth is round"));
        assert_eq!(app.check_state(), &CheckState::Submitting { status_index: 0 });
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut app = App::new();
        let _ = app.submit("claim");

        assert!(!app.can_submit("another claim"));
        assert!(app.submit("another claim").is_empty());
        assert_eq!(app.check_state(), &CheckState::Submitting { status_index: 0 });
    }

    #[test]
    fn status_ticks_advance_and_wrap() {
        let mut app = App::new();
        let _ = app.submit("claim");

        for expected in [1, 2, 3, 0, 1] {
            let actions = app.handle(AppEvent::StatusTick);
            assert_eq!(actions, vec![AppAction::Render]);
            assert_eq!(app.check_state(), &CheckState::Submitting { status_index: expected });
        }
    }

    #[test]
    fn status_tick_outside_submitting_is_ignored() {
        let mut app = App::new();
        assert!(app.handle(AppEvent::StatusTick).is_empty());
        assert_eq!(app.check_state(), &CheckState::Idle);

        let _ = app.submit("claim");
        let _ = app.handle(AppEvent::VerdictReceived(verification()));
        assert!(app.handle(AppEvent::StatusTick).is_empty());
    }

    #[test]
    fn verdict_transitions_to_succeeded_with_exact_fields() {
        let mut app = App::new();
        let _ = app.submit("claim");

        let actions = app.handle(AppEvent::VerdictReceived(verification()));

        assert_eq!(actions, vec![AppAction::Render]);
        match app.check_state() {
            CheckState::Succeeded(result) => {
                assert_eq!(result.verdict, "True");
                assert_eq!(result.justification, "J");
                assert_eq!(result.evidence_urls, vec!["https://a".to_string()]);
            },
            other => panic!("expected Succeeded, got {other:?}"),
        }
    }

    #[test]
    fn failure_transitions_to_failed_with_message() {
        let mut app = App::new();
        let _ = app.submit("claim");

        let _ = app.handle(AppEvent::CheckFailed { message: "bad request".into() });

        assert_eq!(app.check_state(), &CheckState::Failed { message: "bad request".into() });
    }

    #[test]
    fn failure_without_message_gets_generic_fallback() {
        let mut app = App::new();
        let _ = app.submit("claim");

        let _ = app.handle(AppEvent::CheckFailed { message: "  ".into() });

        match app.check_state() {
            CheckState::Failed { message } => {
                assert!(!message.trim().is_empty());
                assert_eq!(message, GENERIC_FAILURE);
            },
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn resubmit_from_terminal_states_clears_previous_result() {
        let mut app = App::new();

        let _ = app.submit("claim");
        let _ = app.handle(AppEvent::VerdictReceived(verification()));
        assert!(app.can_submit("claim"));

        let actions = app.submit("claim");
        assert!(!actions.is_empty(), "resubmission from Succeeded must be allowed");
        assert_eq!(app.check_state(), &CheckState::Submitting { status_index: 0 });

        let _ = app.handle(AppEvent::CheckFailed { message: "boom".into() });
        let actions = app.submit("claim");
        assert!(!actions.is_empty(), "resubmission from Failed must be allowed");
        assert_eq!(app.check_state(), &CheckState::Submitting { status_index: 0 });
    }
}
