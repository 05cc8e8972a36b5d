// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command transports.
//!
//! A transport takes an already-tokenized argument vector and hands back
//! whatever the command produced. How the command reaches the switch is the
//! transport's business; the rest of the probe only sees [`CommandOutput`].

use std::collections::HashMap;
use std::process::Command;

/// Raw result of one command execution
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit status; `None` when the process never ran or was killed by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Output with only stdout set and a zero exit status
    pub fn stdout(text: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: text.into(),
            stderr: String::new(),
        }
    }

    /// Output with only stderr set and a failing exit status
    pub fn stderr(text: impl Into<String>) -> Self {
        Self {
            exit_code: Some(1),
            stdout: String::new(),
            stderr: text.into(),
        }
    }
}

/// Executes argument vectors against a target host
pub trait Transport {
    /// Run `argv` on `host`.
    ///
    /// Failures to run at all are reported through `stderr`, not as errors:
    /// callers cannot tell a broken transport from a command that complained.
    fn run(&mut self, host: &str, argv: &[String]) -> CommandOutput;
}

/// Runs commands as child processes of the probe itself.
///
/// The automation layer places the probe on the switch under test, so the
/// host argument is informational only.
#[derive(Clone, Debug, Default)]
pub struct LocalTransport;

impl LocalTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Transport for LocalTransport {
    fn run(&mut self, _host: &str, argv: &[String]) -> CommandOutput {
        let Some((program, args)) = argv.split_first() else {
            return CommandOutput {
                exit_code: None,
                stdout: String::new(),
                stderr: "empty command".to_string(),
            };
        };

        match Command::new(program).args(args).output() {
            Ok(output) => CommandOutput {
                exit_code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            },
            Err(e) => CommandOutput {
                exit_code: None,
                stdout: String::new(),
                stderr: format!("{}: {}", program, e),
            },
        }
    }
}

/// Transport answering from canned responses keyed by command text.
///
/// Commands are matched on their space-joined argument vector. Anything
/// without a canned response produces no output at all. Every call is kept
/// in a journal for later inspection.
#[derive(Clone, Debug, Default)]
pub struct ScriptedTransport {
    responses: HashMap<String, CommandOutput>,
    calls: Vec<(String, Vec<String>)>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `command` with the given output
    pub fn respond(mut self, command: &str, output: CommandOutput) -> Self {
        self.responses.insert(command.to_string(), output);
        self
    }

    /// Answer `command` with stdout text
    pub fn respond_stdout(self, command: &str, text: &str) -> Self {
        self.respond(command, CommandOutput::stdout(text))
    }

    /// Answer the clock query with a fixed timestamp
    pub fn with_clock(self, timestamp: &str) -> Self {
        self.respond_stdout(crate::session::CLOCK_COMMAND, timestamp)
    }

    /// Every `(host, argv)` pair seen so far, in order
    pub fn calls(&self) -> &[(String, Vec<String>)] {
        &self.calls
    }

    /// Joined command lines seen so far, in order
    pub fn command_lines(&self) -> Vec<String> {
        self.calls.iter().map(|(_, argv)| argv.join(" ")).collect()
    }
}

impl Transport for ScriptedTransport {
    fn run(&mut self, host: &str, argv: &[String]) -> CommandOutput {
        self.calls.push((host.to_string(), argv.to_vec()));
        self.responses
            .get(&argv.join(" "))
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;
