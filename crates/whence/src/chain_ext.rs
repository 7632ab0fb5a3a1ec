// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::error::Error as StdError;

use crate::{Frame, Links};

/// Extension trait for walking and rendering the chain of any error.
///
/// It is implemented for every sized error type, including [`Trail`](crate::Trail),
/// [`Joined`](crate::Joined) and errors from other crates. For `dyn Error` values use the free
/// functions of this crate.
///
/// # Examples
///
/// ```rust
/// use whence::{ChainExt, Trail};
///
/// let error = Trail::wrap("service failed", Trail::wrap_located("io failed", std::io::Error::other("EOF")));
///
/// let io = error.find_link::<std::io::Error>().unwrap();
/// assert_eq!(io.to_string(), "EOF");
/// assert_eq!(error.stack().len(), 3);
/// ```
pub trait ChainExt {
    /// Iterates the single-cause path, starting with this error. See [`links`](crate::links).
    fn links(&self) -> Links<'_>;

    /// Returns `true` if `target` itself is part of the chain. See [`is`](crate::is).
    fn contains<T: StdError + 'static>(&self, target: &T) -> bool;

    /// Returns `true` if a link equal to `target` is part of the chain. See [`is_eq`](crate::is_eq).
    fn contains_eq<T: StdError + PartialEq + 'static>(&self, target: &T) -> bool;

    /// Returns the first link of type `T`, this error included. See [`find`](crate::find).
    fn find_link<T: StdError + 'static>(&self) -> Option<&T>;

    /// Returns the first link of type `T` that satisfies `predicate`. See [`find_with`](crate::find_with).
    fn find_link_with<T: StdError + 'static>(&self, predicate: impl Fn(&T) -> bool) -> Option<&T>;

    /// Lists the links of the chain. See [`stack`](crate::stack).
    fn stack(&self) -> Vec<Frame>;

    /// Renders the whole chain. See [`trace`](crate::trace).
    fn trace(&self) -> String;
}

impl<E: StdError + 'static> ChainExt for E {
    fn links(&self) -> Links<'_> {
        crate::links(self)
    }

    fn contains<T: StdError + 'static>(&self, target: &T) -> bool {
        let root: &(dyn StdError + 'static) = self;
        crate::is(Some(root), target)
    }

    fn contains_eq<T: StdError + PartialEq + 'static>(&self, target: &T) -> bool {
        let root: &(dyn StdError + 'static) = self;
        crate::is_eq(Some(root), target)
    }

    fn find_link<T: StdError + 'static>(&self) -> Option<&T> {
        let root: &(dyn StdError + 'static) = self;
        crate::find(Some(root))
    }

    fn find_link_with<T: StdError + 'static>(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        let root: &(dyn StdError + 'static) = self;
        crate::find_with(Some(root), predicate)
    }

    fn stack(&self) -> Vec<Frame> {
        let root: &(dyn StdError + 'static) = self;
        crate::stack(Some(root)).unwrap_or_default()
    }

    fn trace(&self) -> String {
        crate::trace(self)
    }
}
