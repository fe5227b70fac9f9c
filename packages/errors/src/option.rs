//! Option based construction
//!
//! [`Options`] assembles an [`Error`] from a single record. Unlike the wrap
//! constructors it does **not** short-circuit on an absent cause: building
//! with `cause: None` yields a causeless node, never `None`. Callers that
//! want "no cause, no error" must check before building.

use crate::capability::Fault;
use crate::code::Code;
use crate::error::{join_text, Error};
use crate::stack;
use std::sync::Arc;

/// Everything needed to build an error in one go
#[derive(Debug, Default)]
pub struct Options {
    /// Wrapped cause, if any
    pub cause: Option<Box<dyn Fault>>,
    /// Whether to record the call stack
    pub stack: bool,
    /// Message of the new node
    pub text: String,
    /// Code of the new node
    pub code: Code,
}

impl Options {
    /// Empty options: no cause, no stack, empty text, [`Code::NIL`]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wrapped cause
    #[must_use]
    pub fn cause<E: Fault>(mut self, cause: E) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Record the call stack when building
    #[must_use]
    pub fn stack(mut self, stack: bool) -> Self {
        self.stack = stack;
        self
    }

    /// Set the message
    #[must_use]
    pub fn text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }

    /// Set the message from several parts joined by `", "`
    #[must_use]
    pub fn text_parts<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.text = join_text(parts);
        self
    }

    /// Set the code
    #[must_use]
    pub fn code(mut self, code: Code) -> Self {
        self.code = code;
        self
    }

    /// Build the error; see [`Error::with_options`]
    #[must_use]
    pub fn build(self) -> Error {
        Error::with_options(self)
    }
}

impl Error {
    /// Create an error from [`Options`]
    ///
    /// An absent `cause` produces a causeless node rather than `None`; this
    /// path deliberately differs from [`Error::wrap`].
    #[must_use]
    #[inline(never)]
    pub fn with_options(options: Options) -> Self {
        let callers = if options.stack {
            Some(stack::capture(0))
        } else {
            None
        };
        Self::assemble(
            options.code,
            options.text,
            callers,
            options.cause.map(Arc::from),
        )
    }

    /// Create an error from [`Options`]
    #[deprecated(note = "use `Error::with_options` instead")]
    #[must_use]
    pub fn new_option(options: Options) -> Self {
        Self::with_options(options)
    }
}
