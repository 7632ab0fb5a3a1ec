// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Stack dump carried by a location that could not be resolved.

use std::backtrace::{Backtrace as StdBacktrace, BacktraceStatus};
use std::fmt;
use std::sync::Arc;

/// A clonable stack dump used as the fallback for an unresolved [`Location`](crate::Location).
///
/// Captured dumps are shared through an [`Arc`] so cloning a location never copies frames.
/// Platforms without unwinding support produce no allocation at all.
#[derive(Debug, Clone)]
pub(crate) enum StackDump {
    /// A captured stack dump
    Captured(Arc<StdBacktrace>),
    /// Stack dumps are not supported on this platform
    Unsupported,
}

impl StackDump {
    #[cfg_attr(coverage_nightly, coverage(off))] // we can't create Unsupported backtraces in tests
    #[cfg_attr(test, mutants::skip)] // we can't create Unsupported backtraces in tests
    fn from_backtrace(bt: StdBacktrace) -> Self {
        match bt.status() {
            BacktraceStatus::Captured => Self::Captured(Arc::new(bt)),
            _ => Self::Unsupported,
        }
    }

    /// Captures the current stack regardless of `RUST_BACKTRACE`.
    pub(crate) fn force_capture() -> Self {
        Self::from_backtrace(StdBacktrace::force_capture())
    }

    /// Returns `true` if both values share the same captured frames.
    pub(crate) fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Captured(a), Self::Captured(b)) => Arc::ptr_eq(a, b),
            (Self::Unsupported, Self::Unsupported) => true,
            _ => false,
        }
    }
}

impl fmt::Display for StackDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Captured(bt) => write!(f, "{bt}"),
            Self::Unsupported => f.write_str("stack trace unavailable"),
        }
    }
}
