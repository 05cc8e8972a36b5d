// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blackhole presence in the kernel, FIB and TCAM tables.

use super::{RuleOutcome, VerificationRule};
use crate::session::ProbeSession;
use crate::target::BlackholeTarget;

/// Kernel routing table listing
pub const KERNEL_ROUTES: &str = "ip route";
/// Forwarding table listing
pub const FIB_TABLE: &str = "goes vnet show ip fib";
/// Hardware TCAM listing
pub const TCAM_TABLE: &str = "goes vnet show fe1 tcam";

/// Checks that the blackhole reached every route table on the switch
#[derive(Clone, Debug)]
pub struct RouteTableRule {
    target: BlackholeTarget,
}

impl RouteTableRule {
    pub fn new(target: BlackholeTarget) -> Self {
        Self { target }
    }
}

impl VerificationRule for RouteTableRule {
    fn name(&self) -> &'static str {
        "route_tables"
    }

    fn verify(&self, session: &mut ProbeSession<'_>) -> RuleOutcome {
        let mut failure = String::new();

        let routes = session.record(KERNEL_ROUTES).unwrap_or_default();
        failure.push_str(&check_kernel_routes(&routes, &self.target));

        let fib = session.record(FIB_TABLE).unwrap_or_default();
        failure.push_str(&check_fib(&fib, &self.target));

        let tcam = session.record(TCAM_TABLE).unwrap_or_default();
        let scan = scan_tcam(&tcam, &self.target);
        tracing::debug!(
            cidr = %self.target.cidr,
            matching_lines = scan.matching_lines,
            "tcam scan"
        );
        failure.push_str(&scan.failure);

        RuleOutcome {
            rule: self.name(),
            failure,
        }
    }
}

/// The kernel table must mention the probe address somewhere.
pub fn check_kernel_routes(output: &str, target: &BlackholeTarget) -> String {
    if output.contains(&target.probe) {
        String::new()
    } else {
        format!(
            "blackhole {} not added in kernel route table",
            target.cidr
        )
    }
}

/// The first FIB line carrying the prefix must also say `drop`.
///
/// Later lines with the same prefix are not looked at.
pub fn check_fib(output: &str, target: &BlackholeTarget) -> String {
    match output.lines().find(|line| line.contains(&target.cidr)) {
        Some(line) if !line.contains("drop") => format!(
            "Drop not found in goES table for blackhole {}",
            target.cidr
        ),
        _ => String::new(),
    }
}

/// Result of scanning the TCAM listing
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TcamScan {
    pub failure: String,
    /// Lines that mention the probe address
    pub matching_lines: usize,
}

/// Every TCAM line mentioning the probe address must say `Drop`.
///
/// Each offending line adds its own clause. The number of matching lines is
/// reported only; the one-entry-per-pipeline check (four on this platform)
/// is disabled.
pub fn scan_tcam(output: &str, target: &BlackholeTarget) -> TcamScan {
    let mut scan = TcamScan::default();
    for line in output.lines().filter(|line| line.contains(&target.probe)) {
        if !line.contains("Drop") {
            scan.failure.push_str(&format!(
                " Adj:Drop not found in tcam table for blackhole {}",
                target.cidr
            ));
        }
        scan.matching_lines += 1;
    }
    scan
}

#[cfg(test)]
#[path = "route_tables_tests.rs"]
mod tests;
