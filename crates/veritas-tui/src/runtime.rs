//! Async runtime
//!
//! Event loop that drives terminal I/O and coordinates between the App state
//! machine, the rotation timer, and the backend client. Uses tokio::select!
//! to handle terminal events, rotation ticks, and request resolution
//! concurrently.
//!
//! The runtime exclusively owns the per-request resources: the rotation
//! interval and the resolution channel exist only while a request is in
//! flight and are released together, exactly once per submission cycle, on
//! every exit path. The network call itself is never aborted mid-flight;
//! only the cosmetic timer is cancelled.

use std::io::{self, Stdout, stdout};
use std::time::Duration;

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;
use tokio::sync::oneshot;
use tokio::time::{Instant, Interval};
use veritas_app::{App, AppAction, AppEvent, InputState, KeyInput};
use veritas_client::{ClientError, FactCheckClient, Verification};

use crate::ui;

/// Period of the cosmetic status-rotation timer.
const ROTATION_PERIOD: Duration = Duration::from_millis(2000);

/// Runtime errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Outcome of one spawned verification request.
type RequestOutcome = Result<Verification, ClientError>;

/// Async runtime for the TUI.
///
/// Manages terminal setup/teardown and the main event loop, coordinating the
/// App state machine, the claim input, and the backend client.
pub struct Runtime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    app: App,
    input: InputState,
    client: FactCheckClient,
    /// Rotation interval; `Some` only while a request is in flight.
    rotation: Option<Interval>,
    /// Resolution channel for the in-flight request.
    pending: Option<oneshot::Receiver<RequestOutcome>>,
}

impl Runtime {
    /// Create a runtime targeting the backend at `server_url`.
    pub fn new(server_url: String) -> Result<Self, RuntimeError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app: App::new(),
            input: InputState::new(),
            client: FactCheckClient::new(server_url),
            rotation: None,
            pending: None,
        })
    }

    /// Run the main event loop.
    pub async fn run(mut self) -> Result<(), RuntimeError> {
        self.render()?;

        let mut event_stream = EventStream::new();

        loop {
            let should_quit = tokio::select! {
                // Terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_terminal_event(event)?,
                        Some(Err(e)) => return Err(RuntimeError::Io(e)),
                        None => true,
                    }
                }

                // Rotation tick while a request is in flight
                _ = rotation_tick(&mut self.rotation) => {
                    let actions = self.app.handle(AppEvent::StatusTick);
                    self.process_actions(actions)?
                }

                // In-flight request resolved
                outcome = request_outcome(&mut self.pending) => {
                    self.handle_outcome(outcome)?
                }
            };

            if should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle a terminal event and return whether to quit.
    fn handle_terminal_event(&mut self, event: Event) -> Result<bool, RuntimeError> {
        let actions = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match convert_key(key.code) {
                    Some(key_input) => self.input.handle_key(key_input, &mut self.app),
                    None => vec![],
                }
            },
            Event::Resize(cols, rows) => self.app.handle(AppEvent::Resize(cols, rows)),
            _ => vec![],
        };

        self.process_actions(actions)
    }

    /// Process actions returned by the app. Returns true if should quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, RuntimeError> {
        for action in actions {
            match action {
                AppAction::Render => self.render()?,
                AppAction::Quit => return Ok(true),
                AppAction::Submit { claim } => self.begin_request(claim),
            }
        }
        Ok(false)
    }

    /// Acquire the rotation timer and issue exactly one verification request.
    ///
    /// The app guarantees no request is in flight when this action is
    /// emitted, so the slots are empty here.
    fn begin_request(&mut self, claim: String) {
        // First tick one full period after acquisition; the label at index 0
        // is already visible from submission time.
        let start = Instant::now() + ROTATION_PERIOD;
        self.rotation = Some(tokio::time::interval_at(start, ROTATION_PERIOD));

        let (reply, pending) = oneshot::channel();
        self.pending = Some(pending);

        let client = self.client.clone();
        tokio::spawn(async move {
            let outcome = client.verify(&claim).await;
            // A dropped receiver means the runtime already shut down.
            let _ = reply.send(outcome);
        });
        tracing::debug!("verification request issued");
    }

    /// Resolve the in-flight request: release the per-request resources, then
    /// feed the outcome to the state machine.
    fn handle_outcome(
        &mut self,
        outcome: Result<RequestOutcome, oneshot::error::RecvError>,
    ) -> Result<bool, RuntimeError> {
        release(&mut self.rotation, &mut self.pending);

        let event = match outcome {
            Ok(Ok(verification)) => AppEvent::VerdictReceived(verification),
            Ok(Err(error)) => AppEvent::CheckFailed { message: error.to_string() },
            // Request task dropped without reporting (e.g. it panicked); the
            // app substitutes its generic failure message.
            Err(_) => AppEvent::CheckFailed { message: String::new() },
        };

        let actions = self.app.handle(event);
        self.process_actions(actions)
    }

    /// Render the UI.
    fn render(&mut self) -> Result<(), RuntimeError> {
        self.terminal.draw(|frame| {
            ui::render(frame, &self.app, &self.input);
        })?;
        Ok(())
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        // The rotation timer (if still armed) is released with the runtime;
        // the network call itself is never aborted mid-flight.
        release(&mut self.rotation, &mut self.pending);

        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

/// Release the per-request resources.
///
/// Takes both slots so the release is idempotent even if teardown races
/// request completion. Returns whether anything was actually released.
fn release(
    rotation: &mut Option<Interval>,
    pending: &mut Option<oneshot::Receiver<RequestOutcome>>,
) -> bool {
    let released = rotation.is_some() || pending.is_some();
    drop(rotation.take());
    drop(pending.take());
    released
}

/// Wait for the next rotation tick; pends forever while no timer is armed.
async fn rotation_tick(rotation: &mut Option<Interval>) {
    match rotation {
        Some(interval) => {
            interval.tick().await;
        },
        None => std::future::pending().await,
    }
}

/// Wait for the in-flight request to resolve; pends forever while none is.
async fn request_outcome(
    pending: &mut Option<oneshot::Receiver<RequestOutcome>>,
) -> Result<RequestOutcome, oneshot::error::RecvError> {
    match pending {
        Some(receiver) => receiver.await,
        None => std::future::pending().await,
    }
}

/// Convert crossterm `KeyCode` to `KeyInput`.
fn convert_key(code: KeyCode) -> Option<KeyInput> {
    match code {
        KeyCode::Char(c) => Some(KeyInput::Char(c)),
        KeyCode::Enter => Some(KeyInput::Enter),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Delete => Some(KeyInput::Delete),
        KeyCode::Esc => Some(KeyInput::Esc),
        KeyCode::Left => Some(KeyInput::Left),
        KeyCode::Right => Some(KeyInput::Right),
        KeyCode::Home => Some(KeyInput::Home),
        KeyCode::End => Some(KeyInput::End),
        _ => None,
    }
}
