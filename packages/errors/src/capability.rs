//! Capability contracts for error values
//!
//! Every error that takes part in a chain implements [`Fault`]. Beyond that,
//! each of the seven capabilities is its own small trait, and a value opts in
//! by returning `Some(self)` from the matching `as_*` probe. Nothing requires
//! an error to support more than it naturally does:
//!
//! ```
//! use cryypt_errors::{Code, Fault, WithCode};
//!
//! #[derive(Debug)]
//! struct Timeout;
//!
//! impl std::fmt::Display for Timeout {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         f.write_str("timed out")
//!     }
//! }
//!
//! impl std::error::Error for Timeout {}
//!
//! impl WithCode for Timeout {
//!     fn code(&self) -> Code {
//!         Code::OPERATION_FAILED
//!     }
//! }
//!
//! impl Fault for Timeout {
//!     fn as_code(&self) -> Option<&dyn WithCode> {
//!         Some(self)
//!     }
//! }
//!
//! assert_eq!(cryypt_errors::code(&Timeout), Code::OPERATION_FAILED);
//! ```

use crate::code::Code;
use std::any::Any;

/// An error value that can be inspected by the chain walkers
///
/// Each probe defaults to `None`, meaning the capability is absent.
pub trait Fault: Any + std::error::Error + Send + Sync + 'static {
    /// Probe for the Code capability
    fn as_code(&self) -> Option<&dyn WithCode> {
        None
    }

    /// Probe for the Stack capability
    fn as_stack(&self) -> Option<&dyn WithStack> {
        None
    }

    /// Probe for the Cause capability
    fn as_cause(&self) -> Option<&dyn WithCause> {
        None
    }

    /// Probe for the Current capability
    fn as_current(&self) -> Option<&dyn WithCurrent> {
        None
    }

    /// Probe for the Unwrap capability
    fn as_unwrap(&self) -> Option<&dyn WithUnwrap> {
        None
    }

    /// Probe for the Equal capability
    fn as_equal(&self) -> Option<&dyn WithEqual> {
        None
    }

    /// Probe for the Is capability
    fn as_is(&self) -> Option<&dyn WithIs> {
        None
    }
}

/// Reports a classification code
pub trait WithCode {
    /// The resolved code of this value
    fn code(&self) -> Code;
}

/// Reports a formatted stack trace
pub trait WithStack {
    /// The formatted trace
    fn stack(&self) -> String;
}

/// Designates a root cause explicitly
pub trait WithCause {
    /// The root cause, if any
    fn cause(&self) -> Option<&dyn Fault>;
}

/// Produces a copy of the value without its wrapped cause
pub trait WithCurrent {
    /// The current level on its own
    fn current(&self) -> Option<Box<dyn Fault>>;
}

/// Exposes the directly wrapped cause
pub trait WithUnwrap {
    /// The next level down, if any
    fn unwrap(&self) -> Option<&dyn Fault>;
}

/// Custom equality against another error value
pub trait WithEqual {
    /// Whether `target` is considered equal to this value
    fn equal(&self, target: &dyn Fault) -> bool;
}

/// Custom "matches" test against another error value
pub trait WithIs {
    /// Whether this value matches `target`
    fn is(&self, target: &dyn Fault) -> bool;
}

/// Anything the walkers accept as a possibly absent error value
pub trait AsFault<'a> {
    /// View as an optional trait object
    fn as_fault(self) -> Option<&'a dyn Fault>;
}

impl<'a, F: Fault> AsFault<'a> for &'a F {
    fn as_fault(self) -> Option<&'a dyn Fault> {
        Some(self)
    }
}

impl<'a> AsFault<'a> for &'a dyn Fault {
    fn as_fault(self) -> Option<&'a dyn Fault> {
        Some(self)
    }
}

impl<'a, F: Fault> AsFault<'a> for Option<&'a F> {
    fn as_fault(self) -> Option<&'a dyn Fault> {
        self.map(|fault| fault as &dyn Fault)
    }
}

impl<'a> AsFault<'a> for Option<&'a dyn Fault> {
    fn as_fault(self) -> Option<&'a dyn Fault> {
        self
    }
}

/// Identity of two error values: same concrete type at the same address
///
/// Zero-sized values and a struct's leading field can share an address with
/// another value, so the address alone is not enough.
pub(crate) fn same(a: &dyn Fault, b: &dyn Fault) -> bool {
    if !std::ptr::addr_eq(a as *const dyn Fault, b as *const dyn Fault) {
        return false;
    }
    let (a, b): (&dyn Any, &dyn Any) = (a, b);
    a.type_id() == b.type_id()
}

/// View a trait object as this crate's chain node, if it is one
pub(crate) fn as_node(fault: &dyn Fault) -> Option<&crate::Error> {
    let fault: &(dyn std::error::Error + 'static) = fault;
    fault.downcast_ref::<crate::Error>()
}
