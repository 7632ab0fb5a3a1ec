// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The process-wide message used when an error is built without a description.

use std::borrow::Cow;
use std::sync::OnceLock;

/// Message substituted for an empty description, unless [`set_default_message`] overrides it.
pub const DEFAULT_MESSAGE: &str = "error with no description";

static CONFIGURED: OnceLock<Cow<'static, str>> = OnceLock::new();

/// Error returned when the default message cannot be configured.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DefaultMessageError {
    /// An empty default message would defeat its purpose.
    #[error("the default message cannot be empty")]
    Empty,
    /// The default message was already configured or already read.
    #[error("the default message is already in use: {0:?}")]
    AlreadySet(&'static str),
}

/// Overrides the default message for the rest of the process.
///
/// Call this once at startup. The default message is frozen by the first successful call or by
/// the first time anything reads it, whichever comes first: building an error with an empty
/// description, calling [`default_message`], or a call here that fails with
/// [`DefaultMessageError::AlreadySet`]. After that every call fails, even when nothing was
/// configured before. A call rejected as [`DefaultMessageError::Empty`] freezes nothing.
///
/// # Errors
///
/// Returns [`DefaultMessageError::Empty`] for an empty message and
/// [`DefaultMessageError::AlreadySet`] when the default message is already fixed.
///
/// # Examples
///
/// ```rust
/// use whence::{DefaultMessageError, set_default_message};
///
/// assert_eq!(set_default_message(""), Err(DefaultMessageError::Empty));
/// ```
pub fn set_default_message(message: impl Into<Cow<'static, str>>) -> Result<(), DefaultMessageError> {
    let message = message.into();
    if message.is_empty() {
        return Err(DefaultMessageError::Empty);
    }

    if CONFIGURED.set(message).is_ok() {
        Ok(())
    } else {
        Err(DefaultMessageError::AlreadySet(default_message()))
    }
}

/// Returns the message used for errors built with an empty description.
#[must_use]
pub fn default_message() -> &'static str {
    CONFIGURED.get_or_init(|| Cow::Borrowed(DEFAULT_MESSAGE))
}

/// Substitutes the default message for an empty description.
pub(crate) fn describe(message: Cow<'static, str>) -> Cow<'static, str> {
    if message.is_empty() {
        Cow::Borrowed(default_message())
    } else {
        message
    }
}
