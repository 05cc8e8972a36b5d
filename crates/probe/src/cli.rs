// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{ConfigError, HostList, ProbeParams, RawParams};

/// Verify that a blackhole route is installed and enforced on a switch
#[derive(Parser, Debug, Clone)]
#[command(name = "verify-blackhole-route", version, about)]
pub struct Cli {
    /// Load parameters from a TOML or JSON file; flags override its values
    #[arg(long, value_name = "FILE", env = "VERIFY_BLACKHOLE_PARAMS")]
    pub params: Option<PathBuf>,

    /// Name of the switch under test
    #[arg(long)]
    pub switch_name: Option<String>,

    /// Spine switches (repeatable or comma-separated)
    #[arg(long = "spine", value_name = "HOST", value_delimiter = ',')]
    pub spine_list: Vec<String>,

    /// Leaf switches (repeatable or comma-separated)
    #[arg(long = "leaf", value_name = "HOST", value_delimiter = ',')]
    pub leaf_list: Vec<String>,

    /// Blackhole prefix length: 24 or 32
    #[arg(long)]
    pub subnet_mask: Option<String>,

    /// Ethernet selector, used as the third address octet
    #[arg(long)]
    pub eth_list: Option<String>,

    /// Interface whose last character selects the dry-run octet
    #[arg(long)]
    pub interface_name: Option<String>,

    /// Result key; the log file is named after it
    #[arg(long, env = "VERIFY_BLACKHOLE_HASH_NAME")]
    pub hash_name: Option<String>,

    /// Directory the log file is appended in
    #[arg(long, env = "VERIFY_BLACKHOLE_LOG_DIR")]
    pub log_dir_path: Option<PathBuf>,

    /// List the commands a run would issue without verifying anything;
    /// `--dry-run=false` overrides a params file that enables it
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub dry_run: Option<bool>,

    /// BMC redis host used in the dry-run plan
    #[arg(long, env = "VERIFY_BLACKHOLE_REDIS_HOST")]
    pub redis_host: Option<String>,

    /// Log probe progress to stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parameters set on the command line, as an override layer
    pub fn overrides(&self) -> RawParams {
        let list = |hosts: &Vec<String>| (!hosts.is_empty()).then(|| HostList::Many(hosts.clone()));
        RawParams {
            switch_name: self.switch_name.clone(),
            spine_list: list(&self.spine_list),
            leaf_list: list(&self.leaf_list),
            subnet_mask: self.subnet_mask.clone(),
            eth_list: self.eth_list.clone(),
            interface_name: self.interface_name.clone(),
            hash_name: self.hash_name.clone(),
            log_dir_path: self.log_dir_path.clone(),
            dry_run_mode: self.dry_run,
            redis_host: self.redis_host.clone(),
        }
    }

    /// Resolve the params file (if any) and flag overrides into parameters
    pub fn probe_params(&self) -> Result<ProbeParams, ConfigError> {
        let base = match &self.params {
            Some(path) => RawParams::load(path)?,
            None => RawParams::default(),
        };
        ProbeParams::from_raw(base.merge(self.overrides()))
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
