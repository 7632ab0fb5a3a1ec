// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::error::Error as StdError;
use std::sync::Arc;

/// An error held as the cause of a chain link.
pub(crate) type Cause = Arc<dyn StdError + Send + Sync>;

/// Converts any error into a shared cause.
///
/// An `Arc<dyn Error + Send + Sync>` is kept as is, so the caller can still test it for identity.
pub(crate) fn into_cause<E>(error: E) -> Cause
where
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    let boxed: Box<dyn StdError + Send + Sync> = error.into();
    match boxed.downcast::<Cause>() {
        Ok(shared) => *shared,
        Err(boxed) => Arc::from(boxed),
    }
}

/// Views a cause as a plain chain link.
pub(crate) fn as_link<'a>(cause: &'a Cause) -> &'a (dyn StdError + 'static) {
    cause.as_ref()
}
