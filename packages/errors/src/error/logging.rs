//! Structured logging of error chains
//!
//! Provides env_logger-based initialisation and helpers that report a
//! [`Fault`] through the standard log crate with its code and trace.

use crate::capability::{AsFault, Fault};
use crate::walk;
use log::{debug, error, info, warn};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging infrastructure for error reporting
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// Configure logging levels via `RUST_LOG`:
    /// - `RUST_LOG=debug` - include stack traces of reported errors
    /// - `RUST_LOG=error` - only the error lines
    /// - `RUST_LOG=cryypt_errors=trace` - stack capture diagnostics
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Use this in tests to avoid initialization conflicts
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Report a failed operation with its message and resolved code
    ///
    /// The stack trace follows at debug level when the error carries one.
    pub fn log_fault<'a>(operation: &str, err: impl AsFault<'a>) {
        let Some(err) = err.as_fault() else {
            return;
        };
        let code = walk::code(err);
        if code.is_nil() {
            error!("{operation} failed: {err}");
        } else {
            error!("{operation} failed: {err} (code: {code})");
        }
        if walk::has_stack(err) {
            debug!("{operation} stack:\n{}", walk::stack(err));
        }
    }

    /// Report every level of a chain, outermost first
    pub fn log_wrapped<'a>(operation: &str, err: impl AsFault<'a>) {
        for (depth, level) in Self::levels(err.as_fault()).into_iter().enumerate() {
            warn!("{operation} [{depth}] {level}");
        }
    }

    /// Render each level of a chain on its own
    fn levels(mut err: Option<&dyn Fault>) -> Vec<String> {
        let mut levels = Vec::new();
        while let Some(level) = err {
            let current = walk::current(level);
            levels.push(match current {
                Some(current) => current.to_string(),
                None => level.to_string(),
            });
            err = walk::unwrap(level);
        }
        levels
    }
}

/// Macro for logging an error chain at a given level
#[macro_export]
macro_rules! log_fault {
    (ERROR, $operation:expr, $err:expr) => {
        log::error!(
            "{} failed: {} (code: {})",
            $operation,
            $err,
            $crate::code(&$err)
        );
    };
    (WARN, $operation:expr, $err:expr) => {
        log::warn!(
            "{} failed: {} (code: {})",
            $operation,
            $err,
            $crate::code(&$err)
        );
    };
}
