// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Error types shared by the integration tests.

#![allow(dead_code, reason = "not every test uses every helper")]

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// An error from another crate that only knows the standard `source` protocol.
#[derive(Debug)]
pub struct Foreign {
    message: &'static str,
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl Foreign {
    pub fn new(message: &'static str) -> Self {
        Self { message, source: None }
    }

    pub fn caused_by(message: &'static str, source: impl Error + Send + Sync + 'static) -> Self {
        Self {
            message,
            source: Some(Box::new(source)),
        }
    }
}

impl fmt::Display for Foreign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl Error for Foreign {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            Some(source) => Some(source.as_ref()),
            None => None,
        }
    }
}

/// A leaf error compared by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("code {0}")]
pub struct Code(pub u16);

/// Boxes an error so differently typed errors can be joined together.
pub fn boxed(error: impl Error + Send + Sync + 'static) -> Option<Box<dyn Error + Send + Sync>> {
    Some(Box::new(error))
}

/// Shares a typed error so it can be placed in a chain and still be found by identity.
pub fn shared<E: Error + Send + Sync + 'static>(error: &Arc<E>) -> Arc<dyn Error + Send + Sync> {
    Arc::clone(error) as _
}
