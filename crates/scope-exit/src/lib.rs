//! Deterministic scope-exit cleanup.
//!
//! This crate provides a single construct: the [`ScopeGuard`], a move-only
//! value that owns one deferred cleanup action and runs it exactly once when
//! the enclosing lexical scope is exited, whether by normal fall-through, an
//! early `return`, or an unwinding panic. It exists so that resources such
//! as file handles, locks, and sockets are released on every exit path
//! without duplicating the cleanup at each one.
//!
//! ## Key Components
//!
//! - **`guard`**: the [`ScopeGuard`] type and the [`defer`] constructor,
//!   covering the full lifecycle: create, transfer by move, disarm, and
//!   dispose on drop.
//! - **[`defer!`]**: the statement form, registering a block of cleanup
//!   statements against the current scope.
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//!
//! let events = RefCell::new(Vec::new());
//! {
//!     let _flush = scope_exit::defer(|| events.borrow_mut().push("flushed"));
//!     events.borrow_mut().push("written");
//! }
//! assert_eq!(*events.borrow(), ["written", "flushed"]);
//! ```
//!
//! ## Contract
//!
//! A deferred action must complete without panicking and without otherwise
//! transferring control out of itself. Disposal can run mid-unwind, where no
//! recovery is possible; an action that panics during disposal is therefore
//! a fatal condition. It is logged and the process is aborted.

mod escape;
pub mod guard;
mod macros;

pub use self::guard::{defer, ScopeGuard};
