//! Call stack snapshots
//!
//! A snapshot is a bounded list of return addresses taken when an error is
//! built. Symbol resolution is deferred until a trace is actually rendered.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fmt::Write as _;

/// Maximum number of frames recorded per snapshot
pub const MAX_STACK_DEPTH: usize = 64;

/// Environment variable toggling brief traces
pub const BRIEF_ENV: &str = "CRYYPT_ERRORS_BRIEF";

/// Frame name prefixes that are never rendered
const INTERNAL_PREFIXES: &[&str] = &["cryypt_errors::", "backtrace::"];

/// Frame name prefixes hidden in brief mode
const RUNTIME_PREFIXES: &[&str] = &[
    "std::",
    "core::",
    "alloc::",
    "<core::",
    "<alloc::",
    "<std::",
    "test::",
    "__rust",
    "__libc",
    "_start",
];

static CONFIG: Lazy<StackConfig> = Lazy::new(StackConfig::from_env);

/// Rendering configuration for stack traces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackConfig {
    /// Hide runtime frames (`std`, `core`, entry shims)
    pub brief: bool,
}

impl StackConfig {
    /// Read the configuration from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        let brief = std::env::var(BRIEF_ENV).map_or(true, |value| {
            !matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "off" | "no"
            )
        });
        Self { brief }
    }

    /// The process wide configuration, read once
    #[must_use]
    pub fn global() -> Self {
        *CONFIG
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        Self { brief: true }
    }
}

/// Return addresses captured at error construction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Callers {
    frames: Vec<usize>,
}

/// A symbolised frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StackLine {
    pub function: String,
    pub file_line: String,
}

impl Callers {
    /// Raw return addresses, innermost first
    #[must_use]
    pub fn frames(&self) -> &[usize] {
        &self.frames
    }

    /// Number of recorded frames
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether nothing was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Resolve the snapshot into displayable lines, dropping hidden frames
    pub(crate) fn lines(&self, config: StackConfig) -> Vec<StackLine> {
        self.frames
            .iter()
            .filter_map(|&ip| resolve(ip))
            .filter(|line| !hidden(&line.function, config))
            .collect()
    }
}

/// Capture the current call stack
///
/// Frames of the capturer and of the library constructor calling it are
/// skipped, plus `skip` more for wrapper layers. The result holds at most
/// [`MAX_STACK_DEPTH`] frames and may be empty.
#[cfg(feature = "full-backtrace")]
#[inline(never)]
pub fn capture(skip: usize) -> Callers {
    let anchor = capture as fn(usize) -> Callers as usize;
    let mut frames = Vec::with_capacity(MAX_STACK_DEPTH);
    let mut pending = 0usize;
    let mut anchored = false;

    backtrace::trace(|frame| {
        if !anchored && frame.symbol_address() as usize == anchor {
            // Everything seen so far belongs to the unwinder.
            anchored = true;
            frames.clear();
            pending = skip + 1;
            return true;
        }
        if pending > 0 {
            pending -= 1;
            return true;
        }
        frames.push(frame.ip() as usize);
        frames.len() < MAX_STACK_DEPTH
    });

    if !anchored {
        log::trace!(
            "stack capture could not locate its own frame; keeping {} raw frames",
            frames.len()
        );
    }

    Callers { frames }
}

/// Capture the current call stack (disabled without `full-backtrace`)
#[cfg(not(feature = "full-backtrace"))]
#[inline(never)]
pub fn capture(_skip: usize) -> Callers {
    Callers::default()
}

fn resolve(ip: usize) -> Option<StackLine> {
    let mut line = None;
    backtrace::resolve(ip as *mut std::ffi::c_void, |symbol| {
        if line.is_some() {
            return;
        }
        let function = symbol
            .name()
            .map_or_else(|| format!("{ip:#x}"), |name| format!("{name:#}"));
        let file = symbol
            .filename()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "?".to_string());
        let file_line = match symbol.lineno() {
            Some(lineno) => format!("{file}:{lineno}"),
            None => file,
        };
        line = Some(StackLine {
            function,
            file_line,
        });
    });
    line
}

fn hidden(function: &str, config: StackConfig) -> bool {
    if INTERNAL_PREFIXES
        .iter()
        .any(|prefix| function.starts_with(prefix) || function.starts_with(&format!("<{prefix}")))
    {
        return true;
    }
    config.brief
        && (function == "main"
            || RUNTIME_PREFIXES
                .iter()
                .any(|prefix| function.starts_with(prefix)))
}

/// One level of a rendered chain trace
#[derive(Debug)]
pub(crate) struct StackInfo {
    pub message: String,
    pub lines: Vec<StackLine>,
}

/// Keep each `file:line` once, in the deepest level that shows it
///
/// Repeats inside one level (recursion) collapse to their first occurrence.
/// The function name is part of the key so unresolved locations (`?`) do
/// not swallow each other.
pub(crate) fn dedup_levels(infos: &mut [StackInfo]) {
    let mut seen = HashSet::new();
    for info in infos.iter_mut().rev() {
        info.lines
            .retain(|line| seen.insert((line.file_line.clone(), line.function.clone())));
    }
}

/// Render levels as a numbered trace
pub(crate) fn format_levels(infos: &[StackInfo]) -> String {
    let mut out = String::new();
    for (index, info) in infos.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", index + 1, info.message);
        for (i, line) in info.lines.iter().enumerate() {
            let space = if i >= 9 { " " } else { "  " };
            let _ = writeln!(
                out,
                "   {}).{}{}\n        {}",
                i + 1,
                space,
                line.function,
                line.file_line
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(function: &str) -> StackLine {
        StackLine {
            function: function.to_string(),
            file_line: format!("src/{function}.rs:1"),
        }
    }

    #[test]
    fn test_hidden_frames() {
        let brief = StackConfig { brief: true };
        let full = StackConfig { brief: false };

        assert!(hidden("cryypt_errors::stack::capture", full));
        assert!(hidden("backtrace::backtrace::trace", full));
        assert!(hidden("std::rt::lang_start", brief));
        assert!(!hidden("std::rt::lang_start", full));
        assert!(!hidden("my_app::handler", brief));
    }

    #[test]
    fn test_dedup_keeps_deepest() {
        let mut infos = vec![
            StackInfo {
                message: "outer".into(),
                lines: vec![line("app::outer"), line("app::main")],
            },
            StackInfo {
                message: "inner".into(),
                lines: vec![line("app::inner"), line("app::main")],
            },
        ];
        dedup_levels(&mut infos);
        assert_eq!(infos[0].lines, vec![line("app::outer")]);
        assert_eq!(infos[1].lines.len(), 2);
    }

    #[test]
    fn test_dedup_collapses_recursion() {
        let mut infos = vec![StackInfo {
            message: "deep".into(),
            lines: vec![
                line("app::walk"),
                line("app::walk"),
                line("app::walk"),
                line("app::main"),
            ],
        }];
        dedup_levels(&mut infos);
        assert_eq!(infos[0].lines, vec![line("app::walk"), line("app::main")]);
    }

    #[test]
    fn test_format_indent() {
        let infos = vec![StackInfo {
            message: "boom".into(),
            lines: (0..10).map(|i| line(&format!("app::f{i}"))).collect(),
        }];
        let text = format_levels(&infos);
        assert!(text.starts_with("1. boom\n"));
        assert!(text.contains("   1).  app::f0\n        src/app::f0.rs:1\n"));
        assert!(text.contains("   10). app::f9\n"));
    }
}
