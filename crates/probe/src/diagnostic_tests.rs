// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn error_plain_text_when_not_terminal() {
    let mut buf = Vec::new();
    write_error(&mut buf, "switch 'mgmt01' is in neither spine_list nor leaf_list", false);
    let output = String::from_utf8(buf).unwrap();
    assert_eq!(
        output,
        "verify-blackhole-route: error: switch 'mgmt01' is in neither spine_list nor leaf_list\n"
    );
}

#[test]
fn error_with_ansi_when_terminal() {
    let mut buf = Vec::new();
    write_error(&mut buf, "bad params", true);
    let output = String::from_utf8(buf).unwrap();
    assert_eq!(
        output,
        "verify-blackhole-route: \x1b[1;31merror:\x1b[0m bad params\n"
    );
}
