//! Display, serialization and trait implementations for Error

use super::types::Error;
use serde::{Serialize, Serializer};
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let own: &str = if self.inner.text.is_empty() && !self.inner.code.is_nil() {
            self.inner.code.message()
        } else {
            &self.inner.text
        };
        f.write_str(own)?;

        if let Some(cause) = &self.inner.cause {
            if !own.is_empty() {
                f.write_str(": ")?;
            }
            write!(f, "{cause}")?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner
            .cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

/// Serialises as the rendered chain message, a plain string
impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
