//! Coded, stack-carrying error chains
//!
//! This crate provides:
//! - [`Error`], a chain node with a message, an optional [`Code`], an
//!   optional stack snapshot and an optional wrapped cause
//! - Capability traits ([`Fault`] and the `With*` family) that any error type
//!   can implement to take part in a chain
//! - Chain walkers ([`code()`], [`has_code`], [`cause`], [`stack()`],
//!   [`current`], [`unwrap`], [`equal`], [`is`], [`has_stack`],
//!   [`has_error`]) that inspect heterogeneous chains
//!
//! ```
//! use cryypt_errors::{Code, Error};
//!
//! let root = Error::new_code(Code::NOT_FOUND, "no such key");
//! let err = Error::wrap(Some(root), "loading config").unwrap_or_else(|| Error::new("none"));
//!
//! assert_eq!(err.to_string(), "loading config: no such key");
//! assert_eq!(cryypt_errors::code(&err), Code::NOT_FOUND);
//! assert!(Error::wrap(None::<Error>, "loading config").is_none());
//! ```

pub mod capability;
pub mod code;
pub mod error;
pub mod option;
pub mod plain;
pub mod stack;
pub mod walk;

pub use capability::{
    AsFault, Fault, WithCause, WithCode, WithCurrent, WithEqual, WithIs, WithStack, WithUnwrap,
};
pub use code::Code;
pub use error::{join_text, Error, LoggingTransformer, Result, TEXT_SEPARATOR};
pub use option::Options;
pub use plain::Plain;
pub use stack::{Callers, StackConfig, MAX_STACK_DEPTH};
pub use walk::{
    cause, code, current, equal, has_code, has_error, has_stack, is, set_code, stack, unwrap,
    Level,
};
