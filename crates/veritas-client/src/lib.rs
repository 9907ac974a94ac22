//! HTTP client for the fact-check verification backend.
//!
//! The backend is an opaque collaborator reached over a single endpoint:
//! `POST /fact-check` with a JSON claim, answered by a verdict, a
//! justification, and the evidence URLs that support it. Everything that can
//! go wrong on the wire is normalized into [`ClientError`] so callers see one
//! failure shape regardless of cause.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod client;
mod error;

pub use client::{DEFAULT_SERVER_URL, FactCheckClient, Verification, decode_response};
pub use error::{ClientError, GENERIC_FAILURE};
