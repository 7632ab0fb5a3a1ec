// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;
use std::error::Error as StdError;

use crate::{Joined, Location, Trail, trace};

/// Creates a leaf error. An empty message is replaced by the default message.
///
/// # Examples
///
/// ```rust
/// assert_eq!(whence::new("boom").to_string(), "boom");
/// assert_eq!(whence::new("").to_string(), "error with no description");
/// ```
#[must_use]
pub fn new(message: impl Into<Cow<'static, str>>) -> Trail {
    Trail::new(message)
}

/// Creates a leaf error located at the caller.
#[must_use]
#[track_caller]
pub fn new_locate(message: impl Into<Cow<'static, str>>) -> Trail {
    Trail::new_located(message)
}

/// Wraps an optional cause with a description, without capturing a location.
///
/// Returns `None` only when there is neither a cause nor a description, since there is nothing
/// to report. Without a cause the result is a leaf; with a cause and no description the default
/// message is used.
///
/// # Examples
///
/// ```rust
/// use whence::Trail;
///
/// assert!(whence::wrap("", None::<Trail>).is_none());
/// assert_eq!(whence::wrap("no cause", None::<Trail>).unwrap().to_string(), "no cause");
///
/// let error = whence::wrap("", Some("EOF")).unwrap();
/// assert_eq!(error.to_string(), "error with no description\n\tcaused by:\nEOF");
/// ```
#[must_use]
pub fn wrap<E>(message: impl Into<Cow<'static, str>>, cause: Option<E>) -> Option<Trail>
where
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    let message = message.into();
    match cause {
        Some(cause) => Some(Trail::wrap(message, cause)),
        None if message.is_empty() => None,
        None => Some(Trail::new(message)),
    }
}

/// Wraps an optional cause with a description and the location of the caller.
///
/// Unlike [`wrap`] this always returns an error, since the location alone is worth reporting.
///
/// # Examples
///
/// ```rust
/// let (error, line) = (whence::wrap_locate("disk read failed", Some(whence::new("EOF"))), line!());
/// assert_eq!(
///     error.to_string(),
///     format!("disk read failed at {}:{line}\n\tcaused by:\nEOF", file!())
/// );
/// ```
#[must_use]
#[track_caller]
pub fn wrap_locate<E>(message: impl Into<Cow<'static, str>>, cause: Option<E>) -> Trail
where
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    match cause {
        Some(cause) => Trail::wrap_located(message, cause),
        None => Trail::new_located(message),
    }
}

/// Stamps the location of the caller onto an existing error.
///
/// The result is a snapshot: its message is the full rendering of `error` and it has no cause,
/// so the original chain is no longer reachable through it. Use [`wrap_locate`] to keep the
/// chain. Returns `None` for `None`.
///
/// # Examples
///
/// ```rust
/// assert!(whence::locate(None::<whence::Trail>).is_none());
///
/// let (error, line) = (whence::locate(Some(std::io::Error::other("EOF"))).unwrap(), line!());
/// assert_eq!(error.to_string(), format!("EOF at {}:{line}", file!()));
/// assert!(error.cause().is_none());
/// ```
#[must_use]
#[track_caller]
pub fn locate<E>(error: Option<E>) -> Option<Trail>
where
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    let error: Box<dyn StdError + Send + Sync> = error?.into();
    Some(Trail::from_parts(Cow::Owned(trace(&*error)), Some(Location::caller()), None))
}

/// Joins the present errors. Returns `None` if all of them are missing.
///
/// See [`Joined`] for how joins render.
///
/// # Examples
///
/// ```rust
/// assert!(whence::join([None::<&str>, None]).is_none());
///
/// let joined = whence::join([Some("a"), None, Some("b")]).unwrap();
/// assert_eq!(joined.to_string(), "1-joined:[\n\ta\n\tjoined with:\n\tb\n]-1");
/// ```
#[must_use]
pub fn join<I, E>(errors: I) -> Option<Joined>
where
    I: IntoIterator<Item = Option<E>>,
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    Joined::new(errors)
}
