//! Opaque classification codes
//!
//! The error chain never interprets a [`Code`]; it only stores, compares and
//! propagates it. [`Code::NIL`] is the reserved "unclassified" value.

use std::borrow::Cow;
use std::fmt;

/// Classification code attached to an error
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    value: i32,
    message: Cow<'static, str>,
}

impl Code {
    /// No code; the node does not classify itself
    pub const NIL: Code = Code::new(-1, "");

    /// Success
    pub const OK: Code = Code::new(0, "OK");

    /// Internal error
    pub const INTERNAL: Code = Code::new(50, "Internal Error");

    /// Validation failed
    pub const VALIDATION_FAILED: Code = Code::new(51, "Validation Failed");

    /// Invalid parameter
    pub const INVALID_PARAMETER: Code = Code::new(53, "Invalid Parameter");

    /// Missing parameter
    pub const MISSING_PARAMETER: Code = Code::new(54, "Missing Parameter");

    /// Invalid operation
    pub const INVALID_OPERATION: Code = Code::new(55, "Invalid Operation");

    /// Invalid configuration
    pub const INVALID_CONFIGURATION: Code = Code::new(56, "Invalid Configuration");

    /// Not implemented
    pub const NOT_IMPLEMENTED: Code = Code::new(58, "Not Implemented");

    /// Not supported
    pub const NOT_SUPPORTED: Code = Code::new(59, "Not Supported");

    /// Operation failed
    pub const OPERATION_FAILED: Code = Code::new(60, "Operation Failed");

    /// Not authorized
    pub const NOT_AUTHORIZED: Code = Code::new(61, "Not Authorized");

    /// Not found
    pub const NOT_FOUND: Code = Code::new(65, "Not Found");

    /// Unknown error
    pub const UNKNOWN: Code = Code::new(64, "Unknown Error");

    /// Create a code with a static message
    #[must_use]
    pub const fn new(value: i32, message: &'static str) -> Self {
        Self {
            value,
            message: Cow::Borrowed(message),
        }
    }

    /// Create a code with a message built at runtime
    #[must_use]
    pub fn with_message<S: Into<String>>(value: i32, message: S) -> Self {
        Self {
            value,
            message: Cow::Owned(message.into()),
        }
    }

    /// Numeric value of the code
    #[must_use]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Human readable message of the code
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether this is [`Code::NIL`]
    #[must_use]
    pub fn is_nil(&self) -> bool {
        *self == Self::NIL
    }
}

impl Default for Code {
    fn default() -> Self {
        Self::NIL
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{}:{}", self.value, self.message)
        }
    }
}
