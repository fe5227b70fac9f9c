//! Core error types and definitions

use crate::capability::Fault;
use crate::code::Code;
use crate::stack::Callers;
use std::sync::Arc;

/// A node in an error chain
///
/// Holds a message, an optional classification code, an optional stack
/// snapshot and an optional wrapped cause. Everything but the code is fixed
/// at construction; see [`Error::set_code`].
#[derive(Debug, Clone)]
pub struct Error {
    pub(super) inner: Box<ErrorInner>,
}

#[derive(Debug, Clone)]
pub(super) struct ErrorInner {
    /// Message of this level
    pub text: String,
    /// Explicit code of this level, `Code::NIL` when unclassified
    pub code: Code,
    /// Stack captured at creation
    pub stack: Option<Callers>,
    /// Wrapped cause
    pub cause: Option<Arc<dyn Fault>>,
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
