//! The `defer!` statement form.

/// Registers a block of statements to run when the current scope exits.
///
/// Expands to a hidden [`ScopeGuard`](crate::ScopeGuard) local whose action
/// is the given statements. The statements run in the order they are
/// written; multiple `defer!` statements in one scope run in reverse
/// declaration order on exit, like any other guards.
///
/// ```
/// use std::cell::Cell;
///
/// fn copy_flag(source: &Cell<bool>) -> bool {
///     scope_exit::defer! {
///         source.set(false);
///     }
///     source.get()
/// }
///
/// let flag = Cell::new(true);
/// assert!(copy_flag(&flag));
/// assert!(!flag.get());
/// ```
#[macro_export]
macro_rules! defer {
    ($($body:tt)*) => {
        let _guard = $crate::ScopeGuard::new(|| {
            $($body)*
        });
    };
}
