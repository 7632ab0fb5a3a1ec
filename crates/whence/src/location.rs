// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

use crate::backtrace::StackDump;

/// The call site an error was built at, rendered as `file:line`.
///
/// A location that cannot be resolved never fails: it carries a stack dump instead and renders
/// a placeholder that says so.
///
/// # Examples
///
/// ```rust
/// use whence::Location;
///
/// let location = Location::new("src/svc.rs", 42);
/// assert_eq!(location.to_string(), "src/svc.rs:42");
/// ```
#[derive(Debug, Clone)]
pub struct Location {
    site: Site,
}

#[derive(Debug, Clone)]
enum Site {
    Resolved { file: &'static str, line: u32 },
    Unresolved(StackDump),
}

impl Location {
    /// Creates a location from a file and a line.
    #[must_use]
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self {
            site: Site::Resolved { file, line },
        }
    }

    /// Returns the location of the caller.
    ///
    /// Every function between the public constructor and this call must be `#[track_caller]`,
    /// otherwise the reported frame is an internal one.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        let caller = std::panic::Location::caller();
        Self::resolve(caller.file(), caller.line())
    }

    fn resolve(file: &'static str, line: u32) -> Self {
        if file.is_empty() {
            Self::unresolved()
        } else {
            Self::new(file, line)
        }
    }

    pub(crate) fn unresolved() -> Self {
        #[cfg(feature = "logs")]
        tracing::event!(
            name: "whence.location.unresolved",
            tracing::Level::WARN,
            "caller location unavailable, falling back to a stack dump"
        );

        Self {
            site: Site::Unresolved(StackDump::force_capture()),
        }
    }

    /// Returns the file, or `None` if the location could not be resolved.
    #[must_use]
    pub fn file(&self) -> Option<&'static str> {
        match self.site {
            Site::Resolved { file, .. } => Some(file),
            Site::Unresolved(_) => None,
        }
    }

    /// Returns the line, or `None` if the location could not be resolved.
    #[must_use]
    pub fn line(&self) -> Option<u32> {
        match self.site {
            Site::Resolved { line, .. } => Some(line),
            Site::Unresolved(_) => None,
        }
    }

    /// Returns `true` if the file and line are known.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self.site, Site::Resolved { .. })
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        match (&self.site, &other.site) {
            (Site::Resolved { file: f1, line: l1 }, Site::Resolved { file: f2, line: l2 }) => f1 == f2 && l1 == l2,
            (Site::Unresolved(a), Site::Unresolved(b)) => a.same_as(b),
            _ => false,
        }
    }
}

impl Eq for Location {}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.site {
            Site::Resolved { file, line } => write!(f, "{file}:{line}"),
            Site::Unresolved(dump) => write!(f, "could not locate the error, getting stacktrace:\n\t({dump})"),
        }
    }
}
