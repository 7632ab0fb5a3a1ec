// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Walking error chains.
//!
//! Every function here accepts any standard error, so chains that mix [`Trail`](crate::Trail)
//! links with errors from other crates are walked end to end through
//! [`source`](StdError::source). A [`Joined`] has no single source; the searches descend into each
//! of its children as an independent chain.

use std::error::Error as StdError;
use std::iter::FusedIterator;

use crate::Joined;

/// Returns the immediate cause of `error`.
///
/// A [`Joined`] has no single cause and yields `None`; use [`unwrap_all`] for its children.
#[must_use]
pub fn unwrap<'a>(error: Option<&'a (dyn StdError + 'static)>) -> Option<&'a (dyn StdError + 'static)> {
    error?.source()
}

/// Returns the children of `error` if it is a [`Joined`], otherwise an empty list.
#[must_use]
pub fn unwrap_all<'a>(error: Option<&'a (dyn StdError + 'static)>) -> Vec<&'a (dyn StdError + 'static)> {
    error
        .and_then(|error| error.downcast_ref::<Joined>())
        .map_or_else(Vec::new, |joined| joined.children().collect())
}

/// Returns `true` if `target` itself appears anywhere in the chain of `error`.
///
/// A link matches when it is a `T` stored at the same address as `target`. A cause passed by
/// value is moved into the chain, so share it through an `Arc<dyn Error + Send + Sync>` to find
/// it again. Use [`is_eq`] to compare by value.
///
/// # Examples
///
/// ```rust
/// use std::error::Error;
/// use std::sync::Arc;
///
/// let cause = Arc::new(std::io::Error::other("EOF"));
/// let shared: Arc<dyn Error + Send + Sync> = Arc::clone(&cause) as _;
/// let error = whence::Trail::wrap("read failed", shared);
///
/// assert!(whence::is(Some(&error), &*cause));
/// ```
#[must_use]
pub fn is<T>(error: Option<&(dyn StdError + 'static)>, target: &T) -> bool
where
    T: StdError + 'static,
{
    error.is_some_and(|root| {
        walk(root, &mut |link| {
            link.downcast_ref::<T>().is_some_and(|candidate| std::ptr::eq(candidate, target))
        })
    })
}

/// Returns `true` if a link of type `T` equal to `target` appears anywhere in the chain of `error`.
#[must_use]
pub fn is_eq<T>(error: Option<&(dyn StdError + 'static)>, target: &T) -> bool
where
    T: StdError + PartialEq + 'static,
{
    error.is_some_and(|root| walk(root, &mut |link| link.downcast_ref::<T>() == Some(target)))
}

/// Returns the first link of type `T` in the chain of `error`, `error` itself included.
///
/// # Examples
///
/// ```rust
/// use whence::Trail;
///
/// let error = Trail::wrap("config", std::io::Error::from(std::io::ErrorKind::NotFound));
/// let io = whence::find::<std::io::Error>(Some(&error)).unwrap();
/// assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
/// ```
#[must_use]
pub fn find<'a, T>(error: Option<&'a (dyn StdError + 'static)>) -> Option<&'a T>
where
    T: StdError + 'static,
{
    find_with(error, |_| true)
}

/// Returns the first link of type `T` in the chain of `error` that satisfies `predicate`.
pub fn find_with<'a, T>(error: Option<&'a (dyn StdError + 'static)>, predicate: impl Fn(&T) -> bool) -> Option<&'a T>
where
    T: StdError + 'static,
{
    let mut found = None;
    if let Some(root) = error {
        walk(root, &mut |link: &'a (dyn StdError + 'static)| match link.downcast_ref::<T>() {
            Some(candidate) if predicate(candidate) => {
                found = Some(candidate);
                true
            }
            _ => false,
        });
    }
    found
}

/// Visits the chain depth first until `visit` returns `true`.
fn walk<'a, F>(root: &'a (dyn StdError + 'static), visit: &mut F) -> bool
where
    F: FnMut(&'a (dyn StdError + 'static)) -> bool,
{
    let mut link = Some(root);
    while let Some(current) = link {
        if visit(current) {
            return true;
        }
        if let Some(joined) = current.downcast_ref::<Joined>() {
            return joined.children().any(|child| walk(child, visit));
        }
        link = current.source();
    }
    false
}

/// Iterates the single-cause path of `error`, starting with `error` itself.
///
/// The iteration ends at the innermost cause, or at a [`Joined`], which is the last link yielded.
///
/// # Examples
///
/// ```rust
/// use whence::Trail;
///
/// let error = Trail::wrap("a", Trail::wrap("b", "c"));
/// let messages: Vec<_> = whence::links(&error).map(|link| link.to_string()).collect();
/// assert_eq!(messages[2], "c");
/// assert_eq!(messages.len(), 3);
/// ```
#[must_use]
pub fn links<'a>(error: &'a (dyn StdError + 'static)) -> Links<'a> {
    Links { next: Some(error) }
}

/// Iterator over the links of an error chain, created by [`links`].
#[derive(Debug, Clone)]
pub struct Links<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Links<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Links<'_> {}
