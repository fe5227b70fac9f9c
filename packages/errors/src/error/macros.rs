//! Macros for error creation and handling

/// Create an [`Error`](crate::Error) from a format string
///
/// `err!("missing {}", key)` builds an unclassified error;
/// `err!(code = Code::NOT_FOUND, "missing {}", key)` attaches a code.
#[macro_export]
macro_rules! err {
    (code = $code:expr, $fmt:literal $($rest:tt)*) => {
        $crate::Error::new_code($code, format!($fmt $($rest)*))
    };
    ($fmt:literal $($rest:tt)*) => {
        $crate::Error::new(format!($fmt $($rest)*))
    };
}

/// Wrap an optional cause with a formatted message
///
/// Evaluates to `Option<Error>`: `None` when the cause is `None`.
/// `wrap_err!(cause, "reading {}", path)` or
/// `wrap_err!(cause, code = Code::INTERNAL, "reading {}", path)`.
#[macro_export]
macro_rules! wrap_err {
    ($cause:expr, code = $code:expr, $fmt:literal $($rest:tt)*) => {
        $crate::Error::wrap_code($code, $cause, format!($fmt $($rest)*))
    };
    ($cause:expr, $fmt:literal $($rest:tt)*) => {
        $crate::Error::wrap($cause, format!($fmt $($rest)*))
    };
}

/// Return early with an error built by [`err!`]
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::err!($($arg)*))
    };
}

/// Return early with an error unless a condition holds
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            $crate::bail!($($arg)*);
        }
    };
}
