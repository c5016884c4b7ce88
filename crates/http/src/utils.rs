//! Utility macros used internally by the crate.

/// Returns early with `$error` if `$predicate` is false.
///
/// Like `assert!`, but for validation that should surface as an `Err` instead of a panic.
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;
