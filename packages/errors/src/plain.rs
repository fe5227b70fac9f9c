//! Capability-less leaf errors
//!
//! [`Plain`] is a bare message with no code, stack or cause. The std error
//! types below take part in chains the same way: every probe reports the
//! capability as absent.

use crate::capability::Fault;
use thiserror::Error;

/// A bare message error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct Plain(String);

impl Plain {
    /// Create a bare message error
    #[must_use]
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self(text.into())
    }

    /// The message
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl Fault for Plain {}

impl Fault for std::io::Error {}

impl Fault for std::fmt::Error {}

impl Fault for std::num::ParseIntError {}

impl Fault for std::num::ParseFloatError {}

impl Fault for std::str::Utf8Error {}

impl Fault for std::string::FromUtf8Error {}
