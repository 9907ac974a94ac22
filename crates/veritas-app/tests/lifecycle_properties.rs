//! Property-based tests for the request-lifecycle state machine.
//!
//! Tests verify that invariants hold under arbitrary operation sequences.
//! This ensures behavioral correctness across all possible execution paths.

use proptest::prelude::*;
use veritas_app::{App, AppAction, AppEvent, CheckState, STATUS_MESSAGES};
use veritas_client::Verification;

/// One externally-driven operation against the app.
#[derive(Debug, Clone)]
enum Op {
    Submit(String),
    Tick,
    Verdict(String),
    Fail(String),
    Resize(u16, u16),
}

/// Generate random operations, weighted toward the interesting ones.
fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => "[ a-z]{0,12}".prop_map(Op::Submit),
        3 => Just(Op::Tick),
        2 => "(True|False|Unverifiable)".prop_map(Op::Verdict),
        2 => "[ a-z]{0,8}".prop_map(Op::Fail),
        1 => (1u16..200, 1u16..100).prop_map(|(cols, rows)| Op::Resize(cols, rows)),
    ]
}

/// Drive one operation and return the produced actions.
fn apply(app: &mut App, op: Op) -> Vec<AppAction> {
    match op {
        Op::Submit(claim) => app.submit(&claim),
        Op::Tick => app.handle(AppEvent::StatusTick),
        Op::Verdict(verdict) => app.handle(AppEvent::VerdictReceived(Verification {
            verdict,
            justification: String::new(),
            evidence_urls: vec![],
        })),
        Op::Fail(message) => app.handle(AppEvent::CheckFailed { message }),
        Op::Resize(cols, rows) => app.handle(AppEvent::Resize(cols, rows)),
    }
}

proptest! {
    #[test]
    fn prop_lifecycle_invariants_hold(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut app = App::new();

        for op in ops {
            let was_submitting = app.check_state().is_submitting();
            let actions = apply(&mut app, op);

            // While a request is in flight, no second request may be issued.
            if was_submitting {
                prop_assert!(
                    !actions.iter().any(|a| matches!(a, AppAction::Submit { .. })),
                    "submit while in flight must not issue a request"
                );
            }

            // Oracle checks that must hold after every transition.
            match app.check_state() {
                CheckState::Submitting { status_index } => {
                    prop_assert!(*status_index < STATUS_MESSAGES.len());
                },
                CheckState::Failed { message } => {
                    prop_assert!(!message.trim().is_empty(), "Failed message must never be blank");
                },
                CheckState::Idle | CheckState::Succeeded(_) => {},
            }
        }
    }

    #[test]
    fn prop_status_index_cycles_modulo_length(ticks in 0usize..40) {
        let mut app = App::new();
        let _ = app.submit("claim");

        for _ in 0..ticks {
            let _ = app.handle(AppEvent::StatusTick);
        }

        prop_assert_eq!(
            app.check_state(),
            &CheckState::Submitting { status_index: ticks % STATUS_MESSAGES.len() }
        );
    }

    #[test]
    fn prop_blank_claims_never_submit(claim in "[ \t\r\n]{0,16}") {
        let mut app = App::new();

        prop_assert!(!app.can_submit(&claim));
        prop_assert!(app.submit(&claim).is_empty());
        prop_assert_eq!(app.check_state(), &CheckState::Idle);
    }

    #[test]
    fn prop_accepted_submit_issues_exactly_one_request(claim in "[a-z][ a-z]{0,20}") {
        let mut app = App::new();
        let actions = app.submit(&claim);

        let requests = actions
            .iter()
            .filter(|a| matches!(a, AppAction::Submit { .. }))
            .count();
        prop_assert_eq!(requests, 1);

        // Submitted claims are always trimmed.
        for action in &actions {
            if let AppAction::Submit { claim: submitted } = action {
                prop_assert_eq!(submitted.trim(), submitted.as_str());
            }
        }
    }
}
