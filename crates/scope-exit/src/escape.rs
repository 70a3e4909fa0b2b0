//! Containment for deferred actions that panic during disposal.
//!
//! Disposal runs at scope exit, possibly while a panic is already
//! unwinding the stack. A panic escaping a destructor there cannot be
//! recovered from, so the contract classifies it as fatal: the condition is
//! logged and the process is aborted.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::process;

/// A deferred action panicked during disposal.
///
/// Never surfaced as a recoverable error value; it exists to give the
/// pre-abort diagnostic a structured rendering.
#[derive(Debug, thiserror::Error)]
#[error("deferred action panicked during disposal: {message}")]
struct EscapedAction {
    message: String,
}

/// Runs a deferred action, aborting the process if it panics.
///
/// The abort is unconditional. When the disposal itself is part of an
/// unwind, the runtime already treats a second panic as fatal; this makes
/// the normal-exit path behave the same way instead of letting the panic
/// propagate out of the drop.
pub(crate) fn run_contained<F: FnOnce()>(action: F) {
    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(action)) {
        let escaped = EscapedAction {
            message: panic_message(payload.as_ref()),
        };
        tracing::error!("{escaped}; aborting");
        process::abort();
    }
}

/// Extracts the human-readable message from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "opaque panic payload".to_string()
    }
}
