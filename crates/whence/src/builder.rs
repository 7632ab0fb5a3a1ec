// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;
use std::error::Error as StdError;

use crate::cause::{Cause, into_cause};
use crate::{Location, Trail};

/// Policy for capturing the call-site location of a [`Trail`].
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationPolicy {
    /// Never capture a location.
    #[default]
    Never,
    /// Capture the location of the code calling [`TrailBuilder::build`].
    Caller,
}

/// Builder for creating [`Trail`] instances with custom configurations.
///
/// # Examples
///
/// ```rust
/// use whence::{LocationPolicy, Trail};
///
/// let error = Trail::builder()
///     .message("request failed")
///     .cause("connection reset")
///     .location_policy(LocationPolicy::Caller)
///     .build();
///
/// assert!(error.location().is_some());
/// ```
#[derive(Debug, Default)]
pub struct TrailBuilder {
    message: Cow<'static, str>,
    cause: Option<Cause>,
    location_policy: LocationPolicy,
}

impl TrailBuilder {
    /// Creates a new [`TrailBuilder`] with no message, no cause and no location capture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the description. An empty description is replaced by the default message.
    #[must_use]
    pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the cause.
    #[must_use]
    pub fn cause<E>(mut self, cause: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        self.cause = Some(into_cause(cause));
        self
    }

    /// Sets the location capture policy.
    #[must_use]
    pub fn location_policy(mut self, policy: LocationPolicy) -> Self {
        self.location_policy = policy;
        self
    }

    /// Builds the [`Trail`] instance.
    #[must_use]
    #[track_caller]
    pub fn build(self) -> Trail {
        let location = match self.location_policy {
            LocationPolicy::Never => None,
            LocationPolicy::Caller => Some(Location::caller()),
        };
        Trail::from_parts(self.message, location, self.cause)
    }
}
