// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(
    not(all(feature = "logs", feature = "test-util")),
    expect(rustdoc::broken_intra_doc_links)
)]

//! Error chains that remember where they came from.
//!
//! Whence lets call sites attach a description, an optional call-site location and an optional
//! cause to an error, and lets consumers walk the resulting chain to test identity, extract a
//! typed cause or render a full trace.
//!
//! # Key Features
//!
//! - [**`Trail`**](Trail): One link of a chain, with a message, an optional location and an optional cause
//! - [**`Joined`**](Joined): A link aggregating several independent causes
//! - [**Traversal**](#traversal): [`unwrap`], [`is`], [`is_eq`], [`find`] and [`links`] over any standard error
//! - [**Rendering**](#rendering): [`trace`] for the full text of a chain and [`stack`] for its frames
//! - [**`ChainExt`**](ChainExt): The traversal and rendering functions as methods on every error type
//!
//! # Quick Start
//!
//! ```rust
//! fn read_block() -> Result<Vec<u8>, whence::Trail> {
//!     Err(whence::new("EOF"))
//! }
//!
//! fn load() -> Result<Vec<u8>, whence::Trail> {
//!     read_block().map_err(|e| whence::wrap_locate("disk read failed", Some(e)))
//! }
//!
//! let error = load().unwrap_err();
//! assert!(error.to_string().starts_with("disk read failed at "));
//! assert!(error.to_string().ends_with("\n\tcaused by:\nEOF"));
//! ```
//!
//! # Construction
//!
//! [`new`] and [`wrap`] never capture a location and are cheap enough for hot paths.
//! [`new_locate`] and [`wrap_locate`] record the file and line of their direct caller. They
//! are `#[track_caller]`, so a helper that forwards to them must be `#[track_caller]` too for
//! the location to point past it. [`locate`] stamps the caller's location onto an error that
//! already exists, keeping its rendering but not its chain.
//!
//! An empty description is replaced by [`DEFAULT_MESSAGE`], which an application may override
//! once at startup with [`set_default_message`].
//!
//! # Traversal
//!
//! A [`Trail`] exposes its cause through [`std::error::Error::source`], so the chain is an ordinary
//! standard error chain and errors from other crates take part in it unchanged. The free
//! functions take `Option<&dyn Error>` so that "no error" is always a valid input.
//!
//! ```rust
//! use std::error::Error;
//! use std::sync::Arc;
//!
//! use whence::Trail;
//!
//! #[derive(Debug)]
//! struct Adapter(Trail);
//!
//! impl std::fmt::Display for Adapter {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         f.write_str("adapter failed")
//!     }
//! }
//!
//! impl Error for Adapter {
//!     fn source(&self) -> Option<&(dyn Error + 'static)> {
//!         Some(&self.0)
//!     }
//! }
//!
//! let root = Arc::new(std::io::Error::other("EOF"));
//! let shared: Arc<dyn Error + Send + Sync> = Arc::clone(&root) as _;
//! let error = Trail::wrap("request failed", Adapter(Trail::wrap("read failed", shared)));
//!
//! assert!(whence::is(Some(&error), &*root));
//! assert!(whence::find::<Adapter>(Some(&error)).is_some());
//! ```
//!
//! # Rendering
//!
//! ```rust
//! use whence::{Frame, Trail};
//!
//! let error = Trail::wrap("outer", whence::join([Some("a"), Some("b")]).unwrap());
//! assert_eq!(
//!     whence::trace(&error),
//!     "outer\n\tcaused by:\n1-joined:[\n\ta\n\tjoined with:\n\tb\n]-1"
//! );
//!
//! let frames = whence::stack(Some(&error)).unwrap();
//! assert_eq!(frames, [Frame::new("outer", None), Frame::new("a", None), Frame::new("b", None)]);
//! ```
//!
//! # Features
//!
//! - `logs`: [`emit`] logs a chain through `tracing`, and unresolved locations are logged as warnings
//! - `serde`: [`Frame`] implements `Serialize` as `{"error": ..., "at": ...}`
//! - `test-util`: the [`assert_trace!`] and [`assert_stack!`] macros

mod backtrace;
mod builder;
mod cause;
mod chain_ext;
mod constructors;
mod joined;
mod location;
#[cfg(feature = "logs")]
mod logs;
mod message;
mod render;
mod trail;
mod traverse;

#[cfg(any(feature = "test-util", test))]
pub mod test_util;

pub use builder::{LocationPolicy, TrailBuilder};
pub use chain_ext::ChainExt;
pub use constructors::{join, locate, new, new_locate, wrap, wrap_locate};
pub use joined::Joined;
pub use location::Location;
#[cfg(feature = "logs")]
pub use logs::emit;
pub use message::{DEFAULT_MESSAGE, DefaultMessageError, default_message, set_default_message};
pub use render::{Frame, stack, trace};
pub use trail::Trail;
pub use traverse::{Links, find, find_with, is, is_eq, links, unwrap, unwrap_all};
