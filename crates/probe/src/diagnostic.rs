// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output for the command-line entry point.

use std::io::{self, IsTerminal, Write};

/// Name the binary reports its errors under
pub const PROGRAM: &str = "verify-blackhole-route";

/// Report a probe that produced no result.
///
/// Written as `verify-blackhole-route: error: {err}`; the tag is coloured
/// when stderr is a terminal.
pub fn print_error(err: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), err, is_tty);
}

/// Write one diagnostic line, ignoring write failures.
fn write_error<W: Write>(writer: &mut W, err: impl std::fmt::Display, colour: bool) {
    let tag = if colour { "\x1b[1;31merror:\x1b[0m" } else { "error:" };
    let _ = writeln!(writer, "{}: {} {}", PROGRAM, tag, err);
}

#[cfg(test)]
#[path = "diagnostic_tests.rs"]
mod tests;
