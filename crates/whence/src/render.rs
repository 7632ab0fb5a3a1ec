// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::error::Error as StdError;
use std::fmt;

use crate::{Joined, Location, Trail, links};

/// Separates a link from the rendering of its cause.
pub(crate) const CAUSED_BY: &str = "\n\tcaused by:\n";

/// Renders a whole chain, following the sources of errors that are not part of this crate.
///
/// [`Trail`] and [`Joined`] already render their causes, so they end the walk.
pub(crate) struct Trace<'a>(&'a (dyn StdError + 'static));

impl<'a> Trace<'a> {
    pub(crate) fn new(error: &'a (dyn StdError + 'static)) -> Self {
        Self(error)
    }
}

impl fmt::Display for Trace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut link = self.0;
        loop {
            write!(f, "{link}")?;
            if link.is::<Trail>() || link.is::<Joined>() {
                return Ok(());
            }
            match link.source() {
                Some(next) => {
                    f.write_str(CAUSED_BY)?;
                    link = next;
                }
                None => return Ok(()),
            }
        }
    }
}

/// Renders the full chain of `error`, including causes that are not part of this crate.
///
/// For a [`Trail`] or a [`Joined`] this is the same as its [`Display`](fmt::Display) output.
///
/// # Examples
///
/// ```rust
/// let io = std::io::Error::other("EOF");
/// let error = whence::Trail::wrap("disk read failed", io);
/// assert_eq!(whence::trace(&error), "disk read failed\n\tcaused by:\nEOF");
/// ```
#[must_use]
pub fn trace(error: &(dyn StdError + 'static)) -> String {
    Trace::new(error).to_string()
}

/// One entry of a [`stack`]: a message and the location it was raised at, if known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// The message of this entry alone, without its causes.
    pub message: String,
    /// Where the entry was raised, if it was located.
    pub location: Option<Location>,
}

impl Frame {
    /// Creates a new frame.
    #[must_use]
    pub fn new(message: impl Into<String>, location: Option<Location>) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }

    /// Describes a single link.
    pub(crate) fn of(link: &(dyn StdError + 'static)) -> Self {
        if let Some(trail) = link.downcast_ref::<Trail>() {
            trail.frame()
        } else if link.is::<Joined>() {
            // Only a join at the head of `emit` lands here; it keeps its whole rendering.
            Self::new(trace(link), None)
        } else {
            Self::new(link.to_string(), None)
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(location) = &self.location {
            write!(f, " at {location}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Frame {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let len = if self.location.is_some() { 2 } else { 1 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("error", &self.message)?;
        if let Some(location) = &self.location {
            map.serialize_entry("at", &location.to_string())?;
        }
        map.end()
    }
}

/// Lists the links of a chain from the outermost to the innermost.
///
/// Each [`Trail`] contributes its own message and location. Any other error contributes its own
/// message and the walk continues with its source. A [`Joined`] ends the walk; each of its
/// children is listed as one entry holding the child's full rendering.
///
/// Returns `None` when there is no error.
///
/// # Examples
///
/// ```rust
/// use whence::{Frame, Trail, stack};
///
/// assert!(stack(None).is_none());
///
/// let error = Trail::wrap("outer", Trail::new("inner"));
/// let frames = stack(Some(&error)).unwrap();
/// assert_eq!(frames, [Frame::new("outer", None), Frame::new("inner", None)]);
/// ```
#[must_use]
pub fn stack(error: Option<&(dyn StdError + 'static)>) -> Option<Vec<Frame>> {
    let mut frames = Vec::new();
    for link in links(error?) {
        match link.downcast_ref::<Joined>() {
            Some(joined) => frames.extend(joined.children().map(|child| Frame::new(trace(child), None))),
            None => frames.push(Frame::of(link)),
        }
    }
    Some(frames)
}
