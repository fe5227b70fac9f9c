//! Error constructors and methods

use super::types::{Error, ErrorInner};
use crate::capability::Fault;
use crate::code::Code;
use crate::stack::{self, Callers};
use crate::walk;
use std::sync::Arc;

/// Separator used when a message is given in several parts
pub const TEXT_SEPARATOR: &str = ", ";

/// Join message parts the way multi-part constructors do
pub fn join_text<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::new();
    for (index, part) in parts.into_iter().enumerate() {
        if index > 0 {
            text.push_str(TEXT_SEPARATOR);
        }
        text.push_str(part.as_ref());
    }
    text
}

impl Error {
    pub(crate) fn assemble(
        code: Code,
        text: String,
        stack: Option<Callers>,
        cause: Option<Arc<dyn Fault>>,
    ) -> Self {
        Self {
            inner: Box::new(ErrorInner {
                text,
                code,
                stack: stack.filter(|callers| !callers.is_empty()),
                cause,
            }),
        }
    }

    /// Create an unclassified error with the given text
    #[must_use]
    #[inline(never)]
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self::assemble(Code::NIL, text.into(), Some(stack::capture(0)), None)
    }

    /// Create an unclassified error, skipping `skip` extra caller frames
    #[must_use]
    #[inline(never)]
    pub fn new_skip<S: Into<String>>(skip: usize, text: S) -> Self {
        Self::assemble(Code::NIL, text.into(), Some(stack::capture(skip)), None)
    }

    /// Create an error with a code and the given text
    #[must_use]
    #[inline(never)]
    pub fn new_code<S: Into<String>>(code: Code, text: S) -> Self {
        Self::assemble(code, text.into(), Some(stack::capture(0)), None)
    }

    /// Create an error with a code, skipping `skip` extra caller frames
    #[must_use]
    #[inline(never)]
    pub fn new_code_skip<S: Into<String>>(code: Code, skip: usize, text: S) -> Self {
        Self::assemble(code, text.into(), Some(stack::capture(skip)), None)
    }

    /// Wrap `cause` with the given text
    ///
    /// Returns `None` when `cause` is `None`, so wrapping preserves the
    /// absence of an error.
    #[must_use]
    #[inline(never)]
    pub fn wrap<E: Fault, S: Into<String>>(cause: Option<E>, text: S) -> Option<Self> {
        let cause = cause?;
        Some(Self::assemble(
            Code::NIL,
            text.into(),
            Some(stack::capture(0)),
            Some(Arc::new(cause)),
        ))
    }

    /// Wrap `cause` with the given text, skipping `skip` extra caller frames
    ///
    /// Returns `None` when `cause` is `None`.
    #[must_use]
    #[inline(never)]
    pub fn wrap_skip<E: Fault, S: Into<String>>(
        skip: usize,
        cause: Option<E>,
        text: S,
    ) -> Option<Self> {
        let cause = cause?;
        Some(Self::assemble(
            Code::NIL,
            text.into(),
            Some(stack::capture(skip)),
            Some(Arc::new(cause)),
        ))
    }

    /// Wrap `cause` with a code and text
    ///
    /// Returns `None` when `cause` is `None`.
    #[must_use]
    #[inline(never)]
    pub fn wrap_code<E: Fault, S: Into<String>>(
        code: Code,
        cause: Option<E>,
        text: S,
    ) -> Option<Self> {
        let cause = cause?;
        Some(Self::assemble(
            code,
            text.into(),
            Some(stack::capture(0)),
            Some(Arc::new(cause)),
        ))
    }

    /// Wrap `cause` with a code and text, skipping `skip` extra caller frames
    ///
    /// Returns `None` when `cause` is `None`.
    #[must_use]
    #[inline(never)]
    pub fn wrap_code_skip<E: Fault, S: Into<String>>(
        code: Code,
        skip: usize,
        cause: Option<E>,
        text: S,
    ) -> Option<Self> {
        let cause = cause?;
        Some(Self::assemble(
            code,
            text.into(),
            Some(stack::capture(skip)),
            Some(Arc::new(cause)),
        ))
    }

    /// The message of this level only
    #[must_use]
    pub fn text(&self) -> &str {
        &self.inner.text
    }

    /// The resolved code
    ///
    /// An explicit code on this node wins; an unclassified node reports the
    /// code of its cause chain instead.
    #[must_use]
    pub fn code(&self) -> Code {
        if self.inner.code.is_nil() {
            return walk::code(self.next());
        }
        self.inner.code.clone()
    }

    /// Replace the code of this node
    ///
    /// This is the only mutation a node allows after construction. Nodes
    /// shared between threads need external synchronisation around it.
    pub fn set_code(&mut self, code: Code) {
        self.inner.code = code;
    }

    /// The stack snapshot of this level, if one was captured
    #[must_use]
    pub fn callers(&self) -> Option<&Callers> {
        self.inner.stack.as_ref()
    }

    /// The directly wrapped cause
    #[must_use]
    pub fn next(&self) -> Option<&dyn Fault> {
        self.inner.cause.as_deref()
    }

    /// The root cause of the chain
    ///
    /// Nested nodes are followed down to the first foreign cause, which is
    /// asked for its own root cause if it designates one.
    #[must_use]
    pub fn cause(&self) -> Option<&dyn Fault> {
        let mut node = self;
        loop {
            let Some(next) = node.next() else {
                return Some(node);
            };
            if let Some(inner) = crate::capability::as_node(next) {
                node = inner;
            } else if let Some(designated) = next.as_cause() {
                return designated.cause();
            } else {
                return Some(next);
            }
        }
    }

    /// A copy of this level without its cause
    #[must_use]
    pub fn current(&self) -> Self {
        Self::assemble(
            self.inner.code.clone(),
            self.inner.text.clone(),
            self.inner.stack.clone(),
            None,
        )
    }

    /// The text this level is compared and listed by
    ///
    /// Falls back to the full rendering when the node has no text.
    pub(crate) fn level_text(&self) -> String {
        if self.inner.text.is_empty() {
            self.to_string()
        } else {
            self.inner.text.clone()
        }
    }
}
