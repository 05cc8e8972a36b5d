// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blackhole addresses derived from the probe parameters.

use crate::config::SubnetMask;
use crate::topology::host_suffix;

/// The blackhole prefix expected on the switch and the bare address used to
/// find it in table listings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlackholeTarget {
    /// e.g. `10.0.5.0/24`
    pub cidr: String,
    /// e.g. `10.0.5.0`
    pub probe: String,
}

impl BlackholeTarget {
    /// Address the blackhole for `eth` under the given mask.
    ///
    /// A `/24` covers the whole `10.0.{eth}.0` network. A `/32` targets the
    /// single peer address whose last octet is the peer name's suffix.
    pub fn new(eth: &str, mask: SubnetMask, peer: &str) -> Self {
        let probe = match mask {
            SubnetMask::Slash24 => format!("10.0.{}.0", eth),
            SubnetMask::Slash32 => format!("10.0.{}.{}", eth, host_suffix(peer)),
        };
        Self {
            cidr: format!("{}/{}", probe, mask.prefix_len()),
            probe,
        }
    }
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
