// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Tests for configuring the default message. This binary owns the process-wide setting.

use whence::DefaultMessageError;

#[test]
fn configured_default_message_is_used_then_frozen() {
    assert_eq!(whence::set_default_message(""), Err(DefaultMessageError::Empty));

    whence::set_default_message("unspecified failure").unwrap();
    assert_eq!(whence::default_message(), "unspecified failure");
    assert_eq!(whence::new("").message(), "unspecified failure");
    assert_eq!(whence::wrap("", Some("cause")).unwrap().message(), "unspecified failure");

    assert_eq!(
        whence::set_default_message("another"),
        Err(DefaultMessageError::AlreadySet("unspecified failure"))
    );
    assert_eq!(whence::DEFAULT_MESSAGE, "error with no description");
}
