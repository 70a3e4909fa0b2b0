//! Move-only scope guards that run a deferred action on disposal.
//!
//! A guard is never duplicated. It has no `Clone` or `Copy` impl, so a
//! duplication attempt is rejected at compile time:
//!
//! ```compile_fail
//! fn duplicate<T: Clone>(value: &T) -> T {
//!     value.clone()
//! }
//!
//! let guard = scope_exit::defer(|| {});
//! let copy = duplicate(&guard);
//! ```
//!
//! Ownership transfer is an ordinary move. The source binding is statically
//! dead afterwards, so its action can never run through it again:
//!
//! ```compile_fail
//! let first = scope_exit::defer(|| {});
//! let second = first;
//! first.is_armed();
//! ```

use std::fmt;

use crate::escape;

/// Owns one deferred action and runs it exactly once when dropped.
///
/// The guard is armed on creation. Dropping an armed guard runs the action
/// synchronously, inline at the point of scope exit; dropping a disarmed
/// guard does nothing. Moving the guard transfers exclusive responsibility
/// for the action to the new owner, for example out of a factory function
/// and into the caller's scope.
///
/// Guards declared in the same scope dispose in reverse declaration order,
/// mirroring stack unwinding. That guarantee is about local bindings; guards
/// stored in a collection follow the collection's own element drop order
/// instead.
///
/// The action must complete without panicking. An action that panics during
/// disposal aborts the process (see the crate-level contract).
///
/// ```
/// use std::cell::Cell;
///
/// let released = Cell::new(false);
/// {
///     let _guard = scope_exit::ScopeGuard::new(|| released.set(true));
///     assert!(!released.get());
/// }
/// assert!(released.get());
/// ```
#[must_use = "a guard that is not bound to a variable is dropped, and disposed, immediately"]
pub struct ScopeGuard<F: FnOnce()> {
    /// `Some` while armed. Taken exactly once, on disposal or disarm.
    action: Option<F>,
}

impl<F: FnOnce()> ScopeGuard<F> {
    /// Creates an armed guard that will run `action` when dropped.
    ///
    /// The action is captured, not invoked; creation has no other side
    /// effects.
    pub fn new(action: F) -> Self {
        Self {
            action: Some(action),
        }
    }

    /// Whether the action is still scheduled to run on disposal.
    pub fn is_armed(&self) -> bool {
        self.action.is_some()
    }

    /// Drops the action without running it.
    ///
    /// Disarming is one-way and idempotent. Once disarmed, disposal becomes
    /// a no-op and a move transfers only the disarmed state. This is the
    /// rollback-unless-committed pattern: the cleanup runs on every exit
    /// path except the one that explicitly disarms.
    ///
    /// ```
    /// use std::cell::Cell;
    ///
    /// let rolled_back = Cell::new(false);
    /// {
    ///     let mut rollback = scope_exit::defer(|| rolled_back.set(true));
    ///     // The work succeeded, so the rollback is no longer wanted.
    ///     rollback.disarm();
    ///     assert!(!rollback.is_armed());
    /// }
    /// assert!(!rolled_back.get());
    /// ```
    pub fn disarm(&mut self) {
        self.action = None;
    }
}

impl<F: FnOnce()> Drop for ScopeGuard<F> {
    fn drop(&mut self) {
        if let Some(action) = self.action.take() {
            escape::run_contained(action);
        }
    }
}

impl<F: FnOnce()> fmt::Debug for ScopeGuard<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeGuard")
            .field("armed", &self.is_armed())
            .finish()
    }
}

/// Creates an armed guard; shorthand for [`ScopeGuard::new`].
///
/// ```
/// use std::cell::Cell;
///
/// let closed = Cell::new(false);
/// {
///     let _guard = scope_exit::defer(|| closed.set(true));
/// }
/// assert!(closed.get());
/// ```
pub fn defer<F: FnOnce()>(action: F) -> ScopeGuard<F> {
    ScopeGuard::new(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_action_not_invoked_at_creation() {
        let calls = Cell::new(0);
        let guard = ScopeGuard::new(|| calls.set(calls.get() + 1));
        assert_eq!(calls.get(), 0);
        drop(guard);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_armed_guard_runs_exactly_once() {
        let calls = Cell::new(0);
        {
            let _guard = defer(|| calls.set(calls.get() + 1));
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_disarm_skips_action() {
        let mut cleaned = false;
        {
            let mut guard = ScopeGuard::new(|| {
                cleaned = true;
            });
            guard.disarm();
        }
        assert!(!cleaned);
    }

    #[test]
    fn test_disarm_is_idempotent() {
        let calls = Cell::new(0);
        {
            let mut guard = defer(|| calls.set(calls.get() + 1));
            guard.disarm();
            guard.disarm();
            assert!(!guard.is_armed());
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_is_armed_reflects_state() {
        let mut guard = defer(|| {});
        assert!(guard.is_armed());
        guard.disarm();
        assert!(!guard.is_armed());
    }

    #[test]
    fn test_intra_action_statement_order() {
        let order = RefCell::new(Vec::new());
        {
            let _guard = defer(|| {
                order.borrow_mut().push(1);
                order.borrow_mut().push(2);
            });
        }
        assert_eq!(*order.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_move_transfers_the_action() {
        let calls = Cell::new(0);
        {
            let first = defer(|| calls.set(calls.get() + 1));
            let _second = first;
            assert_eq!(calls.get(), 0);
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_moving_a_disarmed_guard_transfers_nothing() {
        let calls = Cell::new(0);
        {
            let mut first = defer(|| calls.set(calls.get() + 1));
            first.disarm();
            let second = first;
            assert!(!second.is_armed());
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_debug_reports_armed_state() {
        let mut guard = defer(|| {});
        assert_eq!(format!("{guard:?}"), "ScopeGuard { armed: true }");
        guard.disarm();
        assert_eq!(format!("{guard:?}"), "ScopeGuard { armed: false }");
    }
}
