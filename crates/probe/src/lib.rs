// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blackhole route regression probe.
//!
//! Runs a fixed set of commands on a switch under test and checks that a
//! blackhole route made it into the kernel, forwarding and TCAM tables and
//! that traffic toward the blackholed peer is dropped. Every command and its
//! output is kept in an audit trail that is appended to a log file and
//! returned with the pass/fail verdict.
//!
//! A dry run lists the commands a full regression would issue instead.

pub mod cli;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod plan;
pub mod probe;
pub mod report;
pub mod rules;
pub mod runner;
pub mod session;
pub mod target;
pub mod topology;
pub mod transport;
pub mod verdict;

pub use error::ProbeError;
pub use probe::{run, verify};

/// Process exit codes
pub mod exit_codes {
    /// The probe ran to completion; the verdict is in the payload
    pub const SUCCESS: i32 = 0;
    /// Bad parameters, unresolvable topology or an unwritable log
    pub const ERROR: i32 = 1;
}
