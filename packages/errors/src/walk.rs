//! Chain walkers
//!
//! Free functions that inspect any [`Fault`], probing for each capability and
//! falling back when it is missing. The rules differ per operation and are
//! kept as separate functions on purpose:
//!
//! | walker | capability present | otherwise |
//! |---|---|---|
//! | [`code`] | that code, one level | recurse through Unwrap, else `NIL` |
//! | [`has_code`] | match at this level | recurse through Unwrap, else false |
//! | [`cause`] | designated cause | recurse through Unwrap, else the value itself |
//! | [`stack`] | formatted trace | rendered message |
//! | [`current`] | stripped copy | the value itself |
//! | [`unwrap`] | wrapped cause | absent |
//! | [`equal`] | delegate (either side) | identity only |
//! | [`is`] | delegate | false |
//!
//! Absent input is always a defined case and never panics.

use crate::capability::{same, AsFault, Fault};
use crate::code::Code;
use crate::error::Error;
use std::ops::Deref;

/// The code of `err`, or [`Code::NIL`]
pub fn code<'a>(err: impl AsFault<'a>) -> Code {
    code_of(err.as_fault())
}

fn code_of(err: Option<&dyn Fault>) -> Code {
    let Some(err) = err else {
        return Code::NIL;
    };
    if let Some(coded) = err.as_code() {
        return coded.code();
    }
    if let Some(wrapper) = err.as_unwrap() {
        return code_of(wrapper.unwrap());
    }
    Code::NIL
}

/// Whether any level of `err` reports `target` as its code
///
/// Each level is checked on its own, so a code shadowed by an outer explicit
/// code is still found.
pub fn has_code<'a>(err: impl AsFault<'a>, target: &Code) -> bool {
    has_code_of(err.as_fault(), target)
}

fn has_code_of(err: Option<&dyn Fault>, target: &Code) -> bool {
    let Some(err) = err else {
        return false;
    };
    if err.as_code().is_some_and(|coded| coded.code() == *target) {
        return true;
    }
    match err.as_unwrap() {
        Some(wrapper) => has_code_of(wrapper.unwrap(), target),
        None => false,
    }
}

/// The root cause of `err`
///
/// A designated cause is returned as is; otherwise the chain is unwrapped
/// until a level can go no further, and that level is the root.
pub fn cause<'a>(err: impl AsFault<'a>) -> Option<&'a dyn Fault> {
    cause_of(err.as_fault())
}

fn cause_of(err: Option<&dyn Fault>) -> Option<&dyn Fault> {
    let err = err?;
    if let Some(designated) = err.as_cause() {
        return designated.cause();
    }
    if let Some(wrapper) = err.as_unwrap() {
        return cause_of(wrapper.unwrap());
    }
    Some(err)
}

/// The formatted stack of `err`, or its message when it has none
pub fn stack<'a>(err: impl AsFault<'a>) -> String {
    let Some(err) = err.as_fault() else {
        return String::new();
    };
    match err.as_stack() {
        Some(traced) => traced.stack(),
        None => err.to_string(),
    }
}

/// Result of [`current`]: either the input itself or a stripped copy
#[derive(Debug)]
pub enum Level<'a> {
    /// The value had no Current capability and is returned unchanged
    Borrowed(&'a dyn Fault),
    /// A copy of the value without its cause
    Owned(Box<dyn Fault>),
}

impl Level<'_> {
    /// Whether this is the stripped copy
    #[must_use]
    pub fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }
}

impl Deref for Level<'_> {
    type Target = dyn Fault;

    fn deref(&self) -> &Self::Target {
        match self {
            Self::Borrowed(fault) => *fault,
            Self::Owned(fault) => &**fault,
        }
    }
}

/// The current level of `err`, without its wrapped cause
pub fn current<'a>(err: impl AsFault<'a>) -> Option<Level<'a>> {
    let err = err.as_fault()?;
    match err.as_current() {
        Some(layered) => layered.current().map(Level::Owned),
        None => Some(Level::Borrowed(err)),
    }
}

/// The next level of `err`, if it exposes one
pub fn unwrap<'a>(err: impl AsFault<'a>) -> Option<&'a dyn Fault> {
    err.as_fault()?.as_unwrap()?.unwrap()
}

/// Whether `err` has a formatted stack
pub fn has_stack<'a>(err: impl AsFault<'a>) -> bool {
    err.as_fault().is_some_and(|err| err.as_stack().is_some())
}

/// Whether `err` and `target` are equal
///
/// The same value (same type at the same address) is always equal to
/// itself. Otherwise `err` is asked first, then `target`; values without the
/// Equal capability only equal themselves.
///
/// Two absent values are equal. When exactly one side is absent the result
/// is `false` without consulting the present side, since [`WithEqual`]
/// cannot be handed an absent target.
///
/// [`WithEqual`]: crate::WithEqual
pub fn equal<'a, 'b>(err: impl AsFault<'a>, target: impl AsFault<'b>) -> bool {
    match (err.as_fault(), target.as_fault()) {
        (None, None) => true,
        (Some(err), Some(target)) => {
            if same(err, target) {
                return true;
            }
            if let Some(comparer) = err.as_equal() {
                return comparer.equal(target);
            }
            if let Some(comparer) = target.as_equal() {
                return comparer.equal(err);
            }
            false
        }
        _ => false,
    }
}

/// Whether `err` matches `target`
///
/// Only values with the Is capability can match; there is no fallback walk
/// through the chain. If either side is absent the result is `false` and no
/// capability is consulted, since [`WithIs`] cannot be handed an absent
/// target.
///
/// [`WithIs`]: crate::WithIs
pub fn is<'a, 'b>(err: impl AsFault<'a>, target: impl AsFault<'b>) -> bool {
    let (Some(err), Some(target)) = (err.as_fault(), target.as_fault()) else {
        return false;
    };
    err.as_is().is_some_and(|matcher| matcher.is(target))
}

/// Alias of [`is`]
pub fn has_error<'a, 'b>(err: impl AsFault<'a>, target: impl AsFault<'b>) -> bool {
    is(err, target)
}

/// Set the code of `err` when it is present
pub fn set_code(err: Option<&mut Error>, code: Code) {
    if let Some(err) = err {
        err.set_code(code);
    }
}
