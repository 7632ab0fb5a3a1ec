// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use crate::cause::{Cause, as_link, into_cause};
use crate::message::describe;
use crate::render::{CAUSED_BY, Trace};
use crate::{Frame, Location, TrailBuilder};

/// One link of an error chain: a description, an optional call-site location, and an optional cause.
///
/// A `Trail` is immutable once built. Its [`source`](StdError::source) is the cause, so any code
/// that walks standard error chains walks through it, and any standard error can be its cause.
///
/// The rendered form is the message, then ` at file:line` when a location was captured, then
/// the cause on the next lines after a `caused by:` marker.
///
/// # Examples
///
/// ```rust
/// use whence::Trail;
///
/// let error = Trail::wrap("disk read failed", Trail::new("EOF"));
/// assert_eq!(error.to_string(), "disk read failed\n\tcaused by:\nEOF");
/// ```
#[derive(Debug, Clone)]
pub struct Trail {
    message: Cow<'static, str>,
    location: Option<Location>,
    cause: Option<Cause>,
}

impl Trail {
    /// Creates a leaf link with no location and no cause.
    #[must_use]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self::from_parts(message.into(), None, None)
    }

    /// Creates a leaf link located at the caller.
    #[must_use]
    #[track_caller]
    pub fn new_located(message: impl Into<Cow<'static, str>>) -> Self {
        Self::from_parts(message.into(), Some(Location::caller()), None)
    }

    /// Creates a link explaining `cause`, without capturing a location.
    ///
    /// Pass an `Arc<dyn Error + Send + Sync>` to keep the cause's identity for [`is`](crate::is).
    #[must_use]
    pub fn wrap<E>(message: impl Into<Cow<'static, str>>, cause: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        Self::from_parts(message.into(), None, Some(into_cause(cause)))
    }

    /// Creates a link explaining `cause`, located at the caller.
    #[must_use]
    #[track_caller]
    pub fn wrap_located<E>(message: impl Into<Cow<'static, str>>, cause: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        Self::from_parts(message.into(), Some(Location::caller()), Some(into_cause(cause)))
    }

    /// Creates a new [`TrailBuilder`].
    #[must_use]
    pub fn builder() -> TrailBuilder {
        TrailBuilder::new()
    }

    pub(crate) fn from_parts(message: Cow<'static, str>, location: Option<Location>, cause: Option<Cause>) -> Self {
        Self {
            message: describe(message),
            location,
            cause,
        }
    }

    /// Returns the description of this link alone. It is never empty.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns where this link was built, if it was built by a locating constructor.
    #[must_use]
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// Returns the immediate cause.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Returns the message and location of this link as a [`Frame`].
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame::new(self.message.as_ref(), self.location.clone())
    }
}

impl fmt::Display for Trail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;

        if let Some(location) = &self.location {
            write!(f, " at {location}")?;
        }

        if let Some(cause) = &self.cause {
            write!(f, "{CAUSED_BY}{}", Trace::new(cause.as_ref()))?;
        }

        Ok(())
    }
}

impl StdError for Trail {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_ref().map(as_link)
    }
}
