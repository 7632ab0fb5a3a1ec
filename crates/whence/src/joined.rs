// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::error::Error as StdError;
use std::fmt;

use crate::cause::{Cause, as_link, into_cause};
use crate::render::Trace;

const JOIN_MARKER: &str = "-joined:[";
const JOINED_WITH: &str = "\n\tjoined with:\n\t";

/// An error aggregating several independent causes.
///
/// A `Joined` has no single [`source`](StdError::source); its causes are reached through
/// [`children`](Self::children) or [`unwrap_all`](crate::unwrap_all). The traversal functions of this
/// crate descend into every child.
///
/// It renders as a block tagged with its nesting depth. The depth is one more than the number of
/// join tags already present in the rendered children, so nested joins count up from the
/// innermost one and sibling joins add up:
///
/// ```text
/// 2-joined:[
///     1-joined:[
///     a
///     joined with:
///     b
/// ]-1
///     joined with:
///     c
/// ]-2
/// ```
///
/// # Examples
///
/// ```rust
/// use whence::Joined;
///
/// let joined = Joined::new([Some("a"), None, Some("b")]).unwrap();
/// assert_eq!(joined.children().len(), 2);
/// assert_eq!(joined.to_string(), "1-joined:[\n\ta\n\tjoined with:\n\tb\n]-1");
/// ```
#[derive(Debug, Clone)]
pub struct Joined {
    children: Vec<Cause>,
}

impl Joined {
    /// Joins the present errors in order. Returns `None` if there are none.
    pub fn new<I, E>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = Option<E>>,
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        let children: Vec<_> = errors.into_iter().flatten().map(into_cause).collect();
        (!children.is_empty()).then_some(Self { children })
    }

    /// Returns the joined errors in the order they were given.
    pub fn children(&self) -> impl ExactSizeIterator<Item = &(dyn StdError + 'static)> {
        self.children.iter().map(as_link)
    }

    /// Returns the nesting depth this join renders with.
    #[must_use]
    pub fn depth(&self) -> usize {
        depth_of(&self.rendered_children())
    }

    fn rendered_children(&self) -> Vec<String> {
        self.children().map(|child| Trace::new(child).to_string()).collect()
    }
}

fn depth_of(rendered: &[String]) -> usize {
    rendered
        .iter()
        .map(|text| count_tags(text))
        .fold(1, usize::saturating_add)
}

/// Counts the `N-joined:[` openings in `text`.
fn count_tags(text: &str) -> usize {
    text.match_indices(JOIN_MARKER)
        .filter(|(at, _)| text[..*at].ends_with(|c: char| c.is_ascii_digit()))
        .count()
}

impl fmt::Display for Joined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.rendered_children();
        let depth = depth_of(&rendered);

        write!(f, "{depth}{JOIN_MARKER}\n\t")?;
        for (index, child) in rendered.iter().enumerate() {
            if index > 0 {
                f.write_str(JOINED_WITH)?;
            }
            f.write_str(child)?;
        }
        write!(f, "\n]-{depth}")
    }
}

impl StdError for Joined {}
