// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-invocation probe session.
//!
//! The session owns the audit trail for one run and is passed explicitly to
//! every rule. Each command goes through [`ProbeSession::record`], which
//! decides whether it actually runs, stamps it with the host's clock and
//! appends it to the trail.

use crate::config::ProbeParams;
use crate::runner::CommandRunner;
use crate::transport::Transport;
use regtest_audit::{AuditTrail, CommandKey};

/// Command used to read the host's clock for audit keys
pub const CLOCK_COMMAND: &str = "date +%Y%m%d%T";

/// Whether a command would restart a service on the switch.
///
/// Such commands are recorded but never run during verification.
pub fn is_disruptive(command: &str) -> bool {
    command.contains("service") && command.contains("restart")
}

/// Mutable state of one probe run
pub struct ProbeSession<'a> {
    params: &'a ProbeParams,
    runner: CommandRunner<'a>,
    trail: AuditTrail,
}

impl<'a> ProbeSession<'a> {
    pub fn new(params: &'a ProbeParams, transport: &'a mut dyn Transport) -> Self {
        Self {
            params,
            runner: CommandRunner::new(transport),
            trail: AuditTrail::new(),
        }
    }

    pub fn params(&self) -> &ProbeParams {
        self.params
    }

    pub fn trail(&self) -> &AuditTrail {
        &self.trail
    }

    pub fn into_trail(self) -> AuditTrail {
        self.trail
    }

    /// Run `command` (unless skipped) and record it in the trail.
    ///
    /// Disruptive commands and every command in dry-run mode are skipped and
    /// recorded with no output. The clock query always runs, skipped or not.
    pub fn record(&mut self, command: &str) -> Option<String> {
        let host = self.params.switch_name.as_str();

        let output = if is_disruptive(command) {
            tracing::info!(host, command, "skipping service restart");
            None
        } else if self.params.dry_run_mode {
            tracing::debug!(host, command, "dry run, not executing");
            None
        } else {
            self.runner.execute(host, command)
        };

        let timestamp = self.runner.execute(host, CLOCK_COMMAND);
        let key = CommandKey::new(host, timestamp, command);
        tracing::debug!(key = %key, has_output = output.is_some(), "recorded command");
        self.trail.record_command(key, output.clone());

        output
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
