// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command runner: tokenizes a command line and reduces the transport's
//! result to a single optional output string.

use crate::transport::{CommandOutput, Transport};

/// Runs command lines through a [`Transport`]
pub struct CommandRunner<'t> {
    transport: &'t mut dyn Transport,
}

impl<'t> CommandRunner<'t> {
    pub fn new(transport: &'t mut dyn Transport) -> Self {
        Self { transport }
    }

    /// Execute `command` on `host` and return what it printed.
    ///
    /// The line is split with shell word rules before it reaches the
    /// transport. Exit status is ignored: see [`select_output`].
    pub fn execute(&mut self, host: &str, command: &str) -> Option<String> {
        let Some(argv) = split_words(command) else {
            tracing::warn!(command, "unbalanced quoting, command not run");
            return Some(format!("cannot tokenize command: {}", command));
        };
        let output = self.transport.run(host, &argv);
        tracing::trace!(
            command,
            exit_code = ?output.exit_code,
            stdout_len = output.stdout.len(),
            stderr_len = output.stderr.len(),
            "command finished"
        );
        select_output(&output)
    }
}

/// Split `command` into words, honouring quotes and backslash escapes.
///
/// Returns `None` on unbalanced quoting or a trailing backslash. A word
/// starting with `#` is an ordinary argument, not a comment.
pub fn split_words(command: &str) -> Option<Vec<String>> {
    shlex::split(&escape_comment_marks(command))
}

/// Backslash-escape every unquoted `#` that begins a word.
fn escape_comment_marks(command: &str) -> String {
    #[derive(PartialEq)]
    enum Quote {
        None,
        Single,
        Double,
    }

    let mut escaped = String::with_capacity(command.len());
    let mut quote = Quote::None;
    let mut in_word = false;
    let mut chars = command.chars();
    while let Some(c) = chars.next() {
        match quote {
            Quote::Single => {
                if c == '\'' {
                    quote = Quote::None;
                }
                escaped.push(c);
            }
            Quote::Double => {
                escaped.push(c);
                match c {
                    '"' => quote = Quote::None,
                    '\\' => escaped.extend(chars.next()),
                    _ => {}
                }
            }
            Quote::None if matches!(c, ' ' | '\t' | '\n') => {
                in_word = false;
                escaped.push(c);
            }
            Quote::None => {
                if c == '#' && !in_word {
                    escaped.push('\\');
                }
                in_word = true;
                escaped.push(c);
                match c {
                    '\'' => quote = Quote::Single,
                    '"' => quote = Quote::Double,
                    '\\' => escaped.extend(chars.next()),
                    _ => {}
                }
            }
        }
    }
    escaped
}

/// Pick stdout if it is non-empty, else stderr if non-empty, else nothing.
///
/// The chosen stream has trailing whitespace trimmed. Exit status plays no
/// part, so output is not evidence of success: a failing command that
/// prints an error looks the same as one that printed a result.
pub fn select_output(output: &CommandOutput) -> Option<String> {
    if !output.stdout.is_empty() {
        Some(output.stdout.trim_end().to_string())
    } else if !output.stderr.is_empty() {
        Some(output.stderr.trim_end().to_string())
    } else {
        None
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
