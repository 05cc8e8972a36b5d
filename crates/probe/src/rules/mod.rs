// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verification rules.
//!
//! A rule issues its own commands through the session, inspects what came
//! back and returns a failure description. An empty description is a pass.

mod ping;
mod route_tables;

pub use ping::{ping_command, PingRule, LOSS_MARKER, PACKET_COUNT};
pub use route_tables::{
    check_fib, check_kernel_routes, scan_tcam, RouteTableRule, TcamScan, FIB_TABLE,
    KERNEL_ROUTES, TCAM_TABLE,
};

use crate::session::ProbeSession;

/// What one rule found
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: &'static str,
    /// Accumulated failure clauses; empty when the rule passed
    pub failure: String,
}

impl RuleOutcome {
    pub fn passed(&self) -> bool {
        self.failure.is_empty()
    }
}

/// A single independent check against the switch
pub trait VerificationRule {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Run the rule's commands and judge their output
    fn verify(&self, session: &mut ProbeSession<'_>) -> RuleOutcome;
}
