// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reduction of rule outcomes to a single verdict.

use crate::rules::RuleOutcome;
use regtest_audit::AuditTrail;
use serde::Serialize;
use std::fmt;

/// Reserved audit key holding the concatenated failure text
pub const DETAIL_KEY: &str = "result.detail";
/// Reserved audit key holding `Passed` or `Failed`
pub const STATUS_KEY: &str = "result.status";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Status {
    Passed,
    Failed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed => f.write_str("Passed"),
            Self::Failed => f.write_str("Failed"),
        }
    }
}

/// Overall result of one probe run
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub status: Status,
    pub detail: String,
}

impl Verdict {
    /// Passed only if every rule passed; detail is all failures in rule order.
    pub fn from_outcomes(outcomes: &[RuleOutcome]) -> Self {
        let detail: String = outcomes.iter().map(|o| o.failure.as_str()).collect();
        let status = if outcomes.iter().all(RuleOutcome::passed) {
            Status::Passed
        } else {
            Status::Failed
        };
        Self { status, detail }
    }

    pub fn passed(&self) -> bool {
        self.status == Status::Passed
    }

    /// Append the verdict to the trail under the reserved keys
    pub fn record(&self, trail: &mut AuditTrail) {
        trail.annotate(DETAIL_KEY, self.detail.clone());
        trail.annotate(STATUS_KEY, self.status.to_string());
    }
}

#[cfg(test)]
#[path = "verdict_tests.rs"]
mod tests;
