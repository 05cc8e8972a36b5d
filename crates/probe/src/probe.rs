// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Probe entry points.

use crate::config::ProbeParams;
use crate::error::ProbeError;
use crate::plan;
use crate::report::{self, ProbeReport};
use crate::rules::{PingRule, RouteTableRule, RuleOutcome, VerificationRule};
use crate::session::ProbeSession;
use crate::target::BlackholeTarget;
use crate::topology::Topology;
use crate::transport::Transport;
use crate::verdict::Verdict;

/// Dry-run or verify, depending on the parameters
pub fn run(params: &ProbeParams, transport: &mut dyn Transport) -> Result<ProbeReport, ProbeError> {
    if params.dry_run_mode {
        Ok(plan::plan(params, transport)?)
    } else {
        verify(params, transport)
    }
}

/// Verify the blackhole, log the trail and report the verdict.
///
/// Parameters and topology are checked before any command is issued.
pub fn verify(
    params: &ProbeParams,
    transport: &mut dyn Transport,
) -> Result<ProbeReport, ProbeError> {
    let settings = params.verify_settings()?;
    let topology = Topology::resolve(params)?;
    tracing::info!(
        host = %topology.host,
        role = %topology.role,
        peer = %topology.peer,
        subnet_mask = %settings.subnet_mask,
        "verifying blackhole"
    );

    let target = BlackholeTarget::new(&params.eth_list, settings.subnet_mask, &topology.peer);
    let rules: Vec<Box<dyn VerificationRule>> = vec![
        Box::new(RouteTableRule::new(target)),
        Box::new(PingRule::new(&params.eth_list, &topology)),
    ];

    let mut session = ProbeSession::new(params, transport);
    let outcomes: Vec<RuleOutcome> = rules
        .iter()
        .map(|rule| {
            let outcome = rule.verify(&mut session);
            if outcome.passed() {
                tracing::info!(rule = outcome.rule, "rule passed");
            } else {
                tracing::warn!(rule = outcome.rule, failure = %outcome.failure, "rule failed");
            }
            outcome
        })
        .collect();

    let verdict = Verdict::from_outcomes(&outcomes);
    let mut trail = session.into_trail();
    verdict.record(&mut trail);

    report::append_log(&settings.log_file_path, &trail)?;
    tracing::info!(
        status = %verdict.status,
        log_file = %settings.log_file_path.display(),
        "probe complete"
    );

    Ok(ProbeReport::Verified {
        hash_dict: trail,
        log_file_path: settings.log_file_path,
        verdict,
    })
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
