// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Test utilities for the whence crate.
//!
//! This module is only available when the `test-util` feature is enabled.

use std::sync::LazyLock;

use regex::Regex;

static LOCATION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" at [^\s:]+:\d+$").expect("location pattern is valid"));

/// Removes every ` at file:line` suffix from a rendered chain.
///
/// Unresolved locations span several lines and are left untouched.
#[must_use]
pub fn strip_locations(rendered: &str) -> String {
    rendered
        .split('\n')
        .map(|line| LOCATION_SUFFIX.replace(line, ""))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assert that the rendered chain of an error matches the expected value, ignoring locations.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "test-util")]
/// # {
/// use whence::assert_trace;
///
/// let error = whence::wrap_locate("disk read failed", Some(whence::new("EOF")));
/// assert_trace!(error, "disk read failed\n\tcaused by:\nEOF");
/// # }
/// ```
#[macro_export]
#[cfg_attr(coverage_nightly, coverage(off))] // coverage doesn't handle panics well
macro_rules! assert_trace {
    ($error:expr, $expected:expr) => {{
        let root: &(dyn ::std::error::Error + 'static) = &$error;
        let actual = $crate::test_util::strip_locations(&$crate::trace(root));
        let expected: &str = $expected;
        if actual != expected {
            panic!("left : {expected}\nright: {actual}");
        }
    }};
}

/// Assert that an error chain lists the expected messages, outermost first.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "test-util")]
/// # {
/// use whence::assert_stack;
///
/// let error = whence::Trail::wrap("outer", whence::new_locate("inner"));
/// assert_stack!(error, ["outer", "inner"]);
/// # }
/// ```
#[macro_export]
#[cfg_attr(coverage_nightly, coverage(off))] // coverage doesn't handle panics well
macro_rules! assert_stack {
    ($error:expr, [$($expected:expr),* $(,)?]) => {{
        let root: &(dyn ::std::error::Error + 'static) = &$error;
        let actual: ::std::vec::Vec<::std::string::String> = $crate::stack(Some(root))
            .unwrap_or_default()
            .into_iter()
            .map(|frame| frame.message)
            .collect();
        let expected: &[&str] = &[$($expected),*];
        if actual != expected {
            panic!("left : {expected:?}\nright: {actual:?}");
        }
    }};
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Trail, new_locate};

    #[test]
    fn strips_resolved_locations() {
        assert_eq!(strip_locations("a at src/lib.rs:12"), "a");
        assert_eq!(
            strip_locations("a at x.rs:1\n\tcaused by:\nb at y.rs:2"),
            "a\n\tcaused by:\nb"
        );
        assert_eq!(strip_locations("x at here at src/main.rs:7"), "x at here");
    }

    #[test]
    fn keeps_lookalikes() {
        assert_eq!(strip_locations("look at this"), "look at this");
        assert_eq!(strip_locations("ratio at 1:x"), "ratio at 1:x");
        assert_eq!(strip_locations("at :12"), "at :12");
        assert_eq!(strip_locations(" at :12"), " at :12");
        assert_eq!(strip_locations("a at f.rs:"), "a at f.rs:");
        assert_eq!(strip_locations("a at f.rs:12 trailing"), "a at f.rs:12 trailing");
    }

    #[test]
    fn assert_trace_ignores_locations() {
        let error = Trail::wrap_located("outer", new_locate("inner"));
        assert_trace!(error, "outer\n\tcaused by:\ninner");
    }

    #[test]
    #[should_panic(expected = "left : expected\nright: actual")]
    fn assert_trace_mismatch() {
        assert_trace!(Trail::new("actual"), "expected");
    }

    #[test]
    fn assert_stack_lists_messages() {
        let error = Trail::wrap("a", Trail::wrap("b", "c"));
        assert_stack!(error, ["a", "b", "c"]);
    }

    #[test]
    #[should_panic(expected = "left : [\"a\"]")]
    fn assert_stack_mismatch() {
        assert_stack!(Trail::new("b"), ["a"]);
    }
}
