//! Fuzz target for the request-lifecycle state machine
//!
//! # Strategy
//!
//! - Arbitrary interleavings of submissions, cosmetic ticks, resolutions,
//!   failures, and resizes
//! - Claims include blank, whitespace-only, and multi-byte text
//!
//! # Invariants
//!
//! - The state machine never panics on any event order
//! - A `Failed` state never carries a blank message
//! - The status index stays within the label sequence
//! - No submission is accepted while a request is in flight

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use veritas_app::{App, AppAction, AppEvent, CheckState, STATUS_MESSAGES};
use veritas_client::Verification;

#[derive(Debug, Clone, Arbitrary)]
enum Op {
    Submit(String),
    Tick,
    Verdict { verdict: String, justification: String, evidence: Vec<String> },
    Fail(String),
    Resize(u16, u16),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut app = App::new();

    for op in ops {
        let was_submitting = app.check_state().is_submitting();

        let actions = match op {
            Op::Submit(claim) => app.submit(&claim),
            Op::Tick => app.handle(AppEvent::StatusTick),
            Op::Verdict { verdict, justification, evidence } => {
                app.handle(AppEvent::VerdictReceived(Verification {
                    verdict,
                    justification,
                    evidence_urls: evidence,
                }))
            }
            Op::Fail(message) => app.handle(AppEvent::CheckFailed { message }),
            Op::Resize(cols, rows) => app.handle(AppEvent::Resize(cols, rows)),
        };

        if was_submitting {
            assert!(
                !actions.iter().any(|a| matches!(a, AppAction::Submit { .. })),
                "second request issued while one was in flight"
            );
        }

        match app.check_state() {
            CheckState::Submitting { status_index } => {
                assert!(*status_index < STATUS_MESSAGES.len());
            }
            CheckState::Failed { message } => {
                assert!(!message.trim().is_empty());
            }
            CheckState::Idle | CheckState::Succeeded(_) => {}
        }
    }
});
