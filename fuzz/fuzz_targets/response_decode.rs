//! Fuzz target for backend response decoding
//!
//! # Strategy
//!
//! - Arbitrary status codes paired with arbitrary body bytes
//! - Covers malformed JSON, truncated UTF-8 sequences, wrong field types,
//!   and huge claimed structures
//!
//! # Invariants
//!
//! - Decoding never panics on any (status, body) pair
//! - Non-success statuses always produce an error with a non-empty message

#![no_main]

use libfuzzer_sys::fuzz_target;
use veritas_client::decode_response;

fuzz_target!(|input: (u16, &str)| {
    let (status, body) = input;

    match decode_response(status, body) {
        Ok(_) => {
            assert!((200..300).contains(&status), "success outcome from non-2xx status");
        }
        Err(error) => {
            assert!(!error.to_string().is_empty(), "error message must never be empty");
        }
    }
});
