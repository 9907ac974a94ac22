//! Terminal UI for the veritas fact-check client
//!
//! A thin shell over [`veritas_app`]: terminal I/O (crossterm), rendering
//! (ratatui), and the async event loop. All lifecycle decisions live in the
//! veritas-app state machine; this crate executes its actions and owns the
//! rotation-timer resource.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod runtime;
pub mod ui;

pub use runtime::{Runtime, RuntimeError};
pub use veritas_app::{App, AppAction, AppEvent, CheckState, InputState, KeyInput};
