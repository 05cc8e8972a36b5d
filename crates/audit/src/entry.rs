// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Audit entry data types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text rendered in place of output when a command produced none.
pub const ABSENT_MARKER: &str = "None";

/// Structured identity of one command execution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandKey {
    /// Host the command was issued against
    pub host: String,

    /// Host-reported execution time (absent when the clock query printed nothing)
    pub timestamp: Option<String>,

    /// Command text exactly as issued
    pub command: String,
}

impl CommandKey {
    /// Create a new command key
    pub fn new(
        host: impl Into<String>,
        timestamp: Option<String>,
        command: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            timestamp,
            command: command.into(),
        }
    }

    /// Render the flat `"{host} {timestamp} {command}"` key.
    ///
    /// This is the only form written to log files and report payloads. It has
    /// no delimiters of its own: a host or command containing spaces cannot
    /// be split back apart, so anything needing the fields reads the struct.
    pub fn display_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CommandKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.host,
            self.timestamp.as_deref().unwrap_or(ABSENT_MARKER),
            self.command
        )
    }
}

/// Where an audit entry came from
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntryOrigin {
    /// A command issued against the host
    Command(CommandKey),
    /// A summary value stored under a fixed name (e.g. `result.status`)
    Reserved { name: String },
}

/// One line item of the audit trail
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Insertion sequence number
    pub seq: u64,

    /// Command identity or reserved name
    pub origin: EntryOrigin,

    /// Captured output; `None` when nothing was produced or the command was skipped
    pub output: Option<String>,
}

impl AuditEntry {
    /// The flat key this entry is stored and rendered under
    pub fn key(&self) -> String {
        match &self.origin {
            EntryOrigin::Command(key) => key.display_key(),
            EntryOrigin::Reserved { name } => name.clone(),
        }
    }

    /// Command identity, if this entry records a command
    pub fn command(&self) -> Option<&CommandKey> {
        match &self.origin {
            EntryOrigin::Command(key) => Some(key),
            EntryOrigin::Reserved { .. } => None,
        }
    }

    /// Output text, with the absence marker standing in for `None`
    pub fn rendered_output(&self) -> &str {
        self.output.as_deref().unwrap_or(ABSENT_MARKER)
    }

    /// Log file rendering: key, value, blank separator.
    pub fn render(&self) -> String {
        format!("{}\n{}\n\n", self.key(), self.rendered_output())
    }
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
