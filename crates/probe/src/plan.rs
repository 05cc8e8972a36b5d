// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dry-run planner.
//!
//! Lists, in order, every command a full blackhole regression would issue:
//! route setup, the three table listings, the ping, the BMC power-cycle flag
//! and a final status query. Nothing but the clock query actually runs.

use crate::config::{ConfigError, ProbeParams};
use crate::report::ProbeReport;
use crate::rules::{ping_command, FIB_TABLE, KERNEL_ROUTES, TCAM_TABLE};
use crate::session::ProbeSession;
use crate::transport::Transport;

/// The fixed command sequence for these parameters.
///
/// The ping targets the first leaf regardless of this switch's own role.
pub fn planned_commands(params: &ProbeParams) -> Result<Vec<String>, ConfigError> {
    let octet = params.plan_octet();
    let leaf = params
        .leaf_list
        .first()
        .ok_or(ConfigError::Missing("leaf_list"))?;

    Ok(vec![
        format!("ip route delete 10.0.{}.0/24", octet),
        format!("ip route add blackhole 10.0.{}.0/24", octet),
        KERNEL_ROUTES.to_string(),
        FIB_TABLE.to_string(),
        TCAM_TABLE.to_string(),
        ping_command(&octet, &params.switch_name, leaf),
        format!(
            "redis-cli -h \"{}\" hset platina psu.powercycle true",
            params.redis_host
        ),
        "goes status".to_string(),
    ])
}

/// Record the planned commands without running them.
pub fn plan(
    params: &ProbeParams,
    transport: &mut dyn Transport,
) -> Result<ProbeReport, ConfigError> {
    let commands = planned_commands(params)?;
    let params = ProbeParams {
        dry_run_mode: true,
        ..params.clone()
    };

    let mut session = ProbeSession::new(&params, transport);
    for command in &commands {
        session.record(command);
    }
    let cmds: Vec<String> = session.trail().keys().map(String::from).collect();
    tracing::info!(commands = cmds.len(), "dry run planned");

    Ok(ProbeReport::Plan { cmds })
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
