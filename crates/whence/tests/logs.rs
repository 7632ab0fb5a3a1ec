// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Tests for logging chains through `tracing`.

use tracing_test::traced_test;

#[test]
#[traced_test]
fn emit_logs_outermost_link() {
    let error = whence::wrap("disk read failed", Some(whence::wrap("read", Some(whence::new("EOF"))).unwrap())).unwrap();
    whence::emit(&error);

    assert!(logs_contain("ERROR"));
    assert!(logs_contain("error.message=disk read failed"));
    assert!(logs_contain("error.depth=3"));
}

#[test]
#[traced_test]
fn emit_logs_location() {
    let (error, line) = (whence::new_locate("boom"), line!());
    whence::emit(&error);

    assert!(logs_contain(&format!("error.location={}:{line}", file!())));
    assert!(logs_contain("error.depth=1"));
}

#[test]
#[traced_test]
fn emit_accepts_foreign_errors() {
    let error = std::io::Error::other("plain io");
    whence::emit(&error);

    assert!(logs_contain("error.message=plain io"));
    assert!(logs_contain("error.trace=plain io"));
}

#[test]
#[traced_test]
fn emit_logs_join_as_one_link() {
    let joined = whence::join([Some("a"), Some("b")]).unwrap();
    whence::emit(&joined);

    assert!(logs_contain("error.message=1-joined:["));
    assert!(logs_contain("error.depth=1"));
}
