// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Traffic toward the blackholed peer must be dropped.

use super::{RuleOutcome, VerificationRule};
use crate::session::ProbeSession;
use crate::topology::{host_suffix, Topology};

/// Echo requests sent per probe
pub const PACKET_COUNT: u32 = 5;
/// Ping summary text that means nothing came back
pub const LOSS_MARKER: &str = "100% packet loss";

/// Build the ping from this switch's address to the peer's on `eth`
pub fn ping_command(eth: &str, source: &str, peer: &str) -> String {
    format!(
        "ping -c {count} -I 10.0.{eth}.{src} 10.0.{eth}.{dst}",
        count = PACKET_COUNT,
        eth = eth,
        src = host_suffix(source),
        dst = host_suffix(peer),
    )
}

/// Passes only when every packet to the peer is lost.
///
/// Any reply means the blackhole let traffic through, so a reachable peer is
/// the failure case here.
#[derive(Clone, Debug)]
pub struct PingRule {
    host: String,
    peer: String,
    command: String,
}

impl PingRule {
    pub fn new(eth: &str, topology: &Topology) -> Self {
        Self {
            host: topology.host.clone(),
            peer: topology.peer.clone(),
            command: ping_command(eth, &topology.host, &topology.peer),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl VerificationRule for PingRule {
    fn name(&self) -> &'static str {
        "ping"
    }

    fn verify(&self, session: &mut ProbeSession<'_>) -> RuleOutcome {
        let output = session.record(&self.command).unwrap_or_default();
        let failure = if output.contains(LOSS_MARKER) {
            String::new()
        } else {
            format!(
                "Ping from switch {} to {} are received in the output of command {}\n",
                self.host, self.peer, self.command
            )
        };

        RuleOutcome {
            rule: self.name(),
            failure,
        }
    }
}

#[cfg(test)]
#[path = "ping_tests.rs"]
mod tests;
