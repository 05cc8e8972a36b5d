// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spine/leaf role resolution and peer selection.

use crate::config::ProbeParams;
use std::fmt;
use thiserror::Error;

/// Errors resolving the switch's place in the fabric
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("switch '{0}' is in neither spine_list nor leaf_list")]
    NotAMember(String),

    #[error("switch '{0}' is in both spine_list and leaf_list")]
    Ambiguous(String),

    #[error("switch '{host}' is a {role} but {peer_list} is empty")]
    NoPeers {
        host: String,
        role: Role,
        peer_list: &'static str,
    },
}

/// Which topology group the switch under test belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Leaf,
    Spine,
    /// Listed in neither group, or in both
    Unknown,
}

impl Role {
    /// Classify `host` by containment in the two lists
    pub fn classify(host: &str, leaf_list: &[String], spine_list: &[String]) -> Self {
        let in_leaf = leaf_list.iter().any(|h| h == host);
        let in_spine = spine_list.iter().any(|h| h == host);
        match (in_leaf, in_spine) {
            (true, false) => Self::Leaf,
            (false, true) => Self::Spine,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Leaf => "leaf",
            Self::Spine => "spine",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// The switch's resolved role and the peer it probes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topology {
    pub host: String,
    pub role: Role,
    /// First entry of the opposite group
    pub peer: String,
}

impl Topology {
    /// Resolve role and peer, failing on anything but exactly one membership.
    pub fn resolve(params: &ProbeParams) -> Result<Self, TopologyError> {
        let host = &params.switch_name;
        let role = Role::classify(host, &params.leaf_list, &params.spine_list);
        let (peers, peer_list) = match role {
            Role::Leaf => (&params.spine_list, "spine_list"),
            Role::Spine => (&params.leaf_list, "leaf_list"),
            Role::Unknown => {
                return Err(if params.leaf_list.contains(host) {
                    TopologyError::Ambiguous(host.clone())
                } else {
                    TopologyError::NotAMember(host.clone())
                });
            }
        };
        let peer = peers.first().ok_or_else(|| TopologyError::NoPeers {
            host: host.clone(),
            role,
            peer_list,
        })?;

        Ok(Self {
            host: host.clone(),
            role,
            peer: peer.clone(),
        })
    }

    pub fn host_suffix(&self) -> &str {
        host_suffix(&self.host)
    }

    pub fn peer_suffix(&self) -> &str {
        host_suffix(&self.peer)
    }
}

/// Last two characters of a host identifier, used as an address octet.
///
/// Names shorter than two characters are returned whole.
pub fn host_suffix(name: &str) -> &str {
    match name.char_indices().rev().nth(1) {
        Some((idx, _)) => &name[idx..],
        None => name,
    }
}

#[cfg(test)]
#[path = "topology_tests.rs"]
mod tests;
