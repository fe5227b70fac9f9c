//! Capability implementations for Error

use super::types::Error;
use crate::capability::{
    as_node, Fault, WithCause, WithCode, WithCurrent, WithEqual, WithIs, WithStack, WithUnwrap,
};
use crate::code::Code;
use crate::stack::{self, StackConfig, StackInfo};
use crate::walk;

impl Fault for Error {
    fn as_code(&self) -> Option<&dyn WithCode> {
        Some(self)
    }

    fn as_stack(&self) -> Option<&dyn WithStack> {
        self.has_captured_stack().then_some(self as &dyn WithStack)
    }

    fn as_cause(&self) -> Option<&dyn WithCause> {
        Some(self)
    }

    fn as_current(&self) -> Option<&dyn WithCurrent> {
        Some(self)
    }

    fn as_unwrap(&self) -> Option<&dyn WithUnwrap> {
        Some(self)
    }

    fn as_equal(&self) -> Option<&dyn WithEqual> {
        Some(self)
    }

    fn as_is(&self) -> Option<&dyn WithIs> {
        Some(self)
    }
}

impl WithCode for Error {
    fn code(&self) -> Code {
        Error::code(self)
    }
}

impl WithCause for Error {
    fn cause(&self) -> Option<&dyn Fault> {
        Error::cause(self)
    }
}

impl WithCurrent for Error {
    fn current(&self) -> Option<Box<dyn Fault>> {
        Some(Box::new(Error::current(self)))
    }
}

impl WithUnwrap for Error {
    fn unwrap(&self) -> Option<&dyn Fault> {
        self.next()
    }
}

impl WithEqual for Error {
    /// Two errors are equal when both their code and their text match
    fn equal(&self, target: &dyn Fault) -> bool {
        if crate::capability::same(self, target) {
            return true;
        }
        if self.inner.code != walk::code(target) {
            return false;
        }
        self.inner.text == level_text(target)
    }
}

impl WithIs for Error {
    fn is(&self, target: &dyn Fault) -> bool {
        if walk::equal(self, target) {
            return true;
        }
        let Some(next) = self.next() else {
            return false;
        };
        if walk::equal(next, target) {
            return true;
        }
        next.as_is().is_some_and(|matcher| matcher.is(target))
    }
}

impl WithStack for Error {
    fn stack(&self) -> String {
        let config = StackConfig::global();
        let mut infos = Vec::new();
        let mut node = self;
        loop {
            infos.push(StackInfo {
                message: node.level_text(),
                lines: node
                    .callers()
                    .map(|callers| callers.lines(config))
                    .unwrap_or_default(),
            });
            let Some(next) = node.next() else {
                break;
            };
            match as_node(next) {
                Some(inner) => node = inner,
                None => {
                    infos.push(StackInfo {
                        message: next.to_string(),
                        lines: Vec::new(),
                    });
                    break;
                }
            }
        }
        stack::dedup_levels(&mut infos);
        stack::format_levels(&infos)
    }
}

impl Error {
    /// Whether this node or a nested node of this crate carries a snapshot
    fn has_captured_stack(&self) -> bool {
        let mut node = self;
        loop {
            if node.callers().is_some() {
                return true;
            }
            match node.next().and_then(as_node) {
                Some(inner) => node = inner,
                None => return false,
            }
        }
    }
}

/// Text a target is compared by: a node's own level text, otherwise the
/// full rendering
fn level_text(target: &dyn Fault) -> String {
    match as_node(target) {
        Some(node) => node.level_text(),
        None => target.to_string(),
    }
}
