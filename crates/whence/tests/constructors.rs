// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Tests for building chain links.

mod util;

use std::error::Error;

use util::Foreign;
use whence::{DEFAULT_MESSAGE, LocationPolicy, Trail};

#[test]
fn new_contains_description_verbatim() {
    for description in ["x", "disk full", "multi\nline", "  padded  ", "ünïcode"] {
        assert!(whence::new(description).to_string().contains(description));
    }
}

#[test]
fn new_substitutes_default_message() {
    let error = whence::new("");
    assert_eq!(error.message(), DEFAULT_MESSAGE);
    assert_eq!(error.to_string(), "error with no description");
}

#[test]
fn wrap_without_anything_is_none() {
    assert!(whence::wrap("", None::<Trail>).is_none());
}

#[test]
fn wrap_without_cause_is_leaf() {
    let error = whence::wrap("only description", None::<std::io::Error>).unwrap();
    assert_eq!(error.to_string(), "only description");
    assert!(error.source().is_none());
}

#[test]
fn wrap_without_description_uses_default() {
    let error = whence::wrap("", Some(std::io::Error::other("inner"))).unwrap();
    assert_eq!(error.message(), DEFAULT_MESSAGE);
    assert!(error.to_string().contains("caused by:"));
    assert!(error.location().is_none());
}

#[test]
fn wrap_locate_scenario() {
    let (error, line) = (whence::wrap_locate("disk read failed", Some(whence::new("EOF"))), line!());
    assert_eq!(
        error.to_string(),
        format!("disk read failed at {}:{line}\n\tcaused by:\nEOF", file!())
    );
}

#[test]
fn wrap_locate_always_returns_an_error() {
    let error = whence::wrap_locate("", None::<Trail>);
    assert!(error.to_string().starts_with("error with no description at "));
    assert!(error.location().unwrap().is_resolved());
}

#[track_caller]
fn fail_here(message: &'static str) -> Trail {
    whence::new_locate(message)
}

fn fail_inside(message: &'static str) -> (Trail, u32) {
    (whence::new_locate(message), line!())
}

#[test]
fn locating_helpers_need_track_caller() {
    let (forwarded, caller_line) = (fail_here("forwarded"), line!());
    assert_eq!(forwarded.location().unwrap().line(), Some(caller_line));

    let (inside, inside_line) = fail_inside("inside");
    assert_eq!(inside.location().unwrap().line(), Some(inside_line));
}

#[test]
fn every_locating_entry_point_reports_its_caller() {
    let located = [
        (whence::new_locate("a"), line!()),
        (whence::wrap_locate("b", Some("c")), line!()),
        (Trail::new_located("d"), line!()),
        (Trail::wrap_located("e", "f"), line!()),
        (Trail::builder().location_policy(LocationPolicy::Caller).build(), line!()),
        (whence::locate(Some(whence::new("g"))).unwrap(), line!()),
    ];

    for (error, line) in &located {
        let location = error.location().unwrap();
        assert_eq!(location.file(), Some(file!()));
        assert_eq!(location.line(), Some(*line));
    }
}

#[test]
fn locate_keeps_rendering_of_foreign_chain() {
    assert!(whence::locate(None::<Foreign>).is_none());

    let foreign = Foreign::caused_by("adapter", std::io::Error::other("EOF"));
    let (error, line) = (whence::locate(Some(foreign)).unwrap(), line!());
    assert_eq!(error.to_string(), format!("adapter\n\tcaused by:\nEOF at {}:{line}", file!()));
    assert!(whence::unwrap(Some(&error)).is_none());
    assert!(whence::find::<Foreign>(Some(&error)).is_none());
}

#[test]
fn plain_constructors_never_locate() {
    assert!(whence::new("a").location().is_none());
    assert!(whence::wrap("a", Some("b")).unwrap().location().is_none());
    assert!(Trail::wrap("a", "b").location().is_none());
    assert!(Trail::builder().message("a").build().location().is_none());
}

#[test]
fn links_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<Trail>();
    assert_send_sync::<whence::Joined>();
    assert_send_sync::<whence::Frame>();

    let error = std::sync::Arc::new(whence::wrap_locate("shared", Some("cause")));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let error = std::sync::Arc::clone(&error);
            std::thread::spawn(move || error.to_string())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), error.to_string());
    }
}
