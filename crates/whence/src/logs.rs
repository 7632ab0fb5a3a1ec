// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::error::Error as StdError;

use crate::render::{Frame, trace};

/// Logs the chain of `error` as a single `ERROR` event named `whence.chain`.
///
/// The event carries the outermost link's message and location, the number of links on the
/// single-cause path, and the full rendering of the chain.
///
/// # Examples
///
/// ```rust
/// let error = whence::wrap_locate("disk read failed", Some(whence::new("EOF")));
/// whence::emit(&error);
/// ```
pub fn emit(error: &(dyn StdError + 'static)) {
    let head = Frame::of(error);
    let location = head.location.as_ref().map(ToString::to_string).unwrap_or_default();

    tracing::event!(
        name: "whence.chain",
        tracing::Level::ERROR,
        error.message = %head.message,
        error.location = %location,
        error.depth = crate::links(error).count(),
        error.trace = %trace(error),
    );
}
