// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Probe parameters: loading, merging and validation.
//!
//! Parameters arrive from a TOML or JSON file, from command-line flags, or
//! both. Field names follow the automation module's argument spec so an
//! existing playbook's `vars` can be dropped into a params file unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Redis host used by the dry-run plan when none is configured
pub const DEFAULT_REDIS_HOST: &str = "localhost";

/// Errors that can occur while assembling probe parameters
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read params file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid subnet_mask '{0}': expected \"24\" or \"32\"")]
    SubnetMask(String),

    #[error("Missing required parameter: {0}")]
    Missing(&'static str),
}

/// Prefix length of the blackhole route under test
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubnetMask {
    #[serde(rename = "24")]
    Slash24,
    #[serde(rename = "32")]
    Slash32,
}

impl SubnetMask {
    pub fn prefix_len(self) -> u8 {
        match self {
            Self::Slash24 => 24,
            Self::Slash32 => 32,
        }
    }
}

impl FromStr for SubnetMask {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "24" => Ok(Self::Slash24),
            "32" => Ok(Self::Slash32),
            other => Err(ConfigError::SubnetMask(other.to_string())),
        }
    }
}

impl fmt::Display for SubnetMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix_len())
    }
}

/// A host list given either as a sequence or as one comma-separated string.
///
/// Inventory lookups such as `groups['spine'][1]` hand over a bare host name
/// rather than a list, so both shapes are accepted.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum HostList {
    Many(Vec<String>),
    One(String),
}

impl HostList {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::Many(hosts) => hosts,
            Self::One(s) => s
                .split(',')
                .map(str::trim)
                .filter(|h| !h.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Unvalidated parameters as read from a file or the command line.
///
/// Every field is optional so that a file and a set of flag overrides can be
/// layered with [`RawParams::merge`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawParams {
    pub switch_name: Option<String>,
    pub spine_list: Option<HostList>,
    pub leaf_list: Option<HostList>,
    pub subnet_mask: Option<String>,
    pub eth_list: Option<String>,
    pub interface_name: Option<String>,
    pub hash_name: Option<String>,
    pub log_dir_path: Option<PathBuf>,
    pub dry_run_mode: Option<bool>,
    pub redis_host: Option<String>,
}

impl RawParams {
    /// Load parameters from a TOML or JSON file (JSON by `.json` extension)
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let raw: RawParams = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        Ok(raw)
    }

    /// Layer `overrides` on top of `self`; set fields in `overrides` win.
    pub fn merge(self, overrides: RawParams) -> Self {
        Self {
            switch_name: overrides.switch_name.or(self.switch_name),
            spine_list: overrides.spine_list.or(self.spine_list),
            leaf_list: overrides.leaf_list.or(self.leaf_list),
            subnet_mask: overrides.subnet_mask.or(self.subnet_mask),
            eth_list: overrides.eth_list.or(self.eth_list),
            interface_name: overrides.interface_name.or(self.interface_name),
            hash_name: overrides.hash_name.or(self.hash_name),
            log_dir_path: overrides.log_dir_path.or(self.log_dir_path),
            dry_run_mode: overrides.dry_run_mode.or(self.dry_run_mode),
            redis_host: overrides.redis_host.or(self.redis_host),
        }
    }
}

/// Immutable parameters for one probe invocation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeParams {
    /// Identity of the switch under test
    pub switch_name: String,
    pub spine_list: Vec<String>,
    pub leaf_list: Vec<String>,
    pub subnet_mask: Option<SubnetMask>,
    /// Ethernet selector; becomes the third octet of every probed address
    pub eth_list: String,
    pub interface_name: Option<String>,
    /// Result-store key; also names the log file
    pub hash_name: Option<String>,
    pub log_dir_path: Option<PathBuf>,
    pub dry_run_mode: bool,
    pub redis_host: String,
}

/// Settings that only a verification run needs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifySettings {
    pub subnet_mask: SubnetMask,
    pub log_file_path: PathBuf,
}

impl ProbeParams {
    /// Build from layered raw parameters, applying the module's defaults
    pub fn from_raw(raw: RawParams) -> Result<Self, ConfigError> {
        let switch_name = raw
            .switch_name
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("switch_name"))?;
        let subnet_mask = raw
            .subnet_mask
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.parse::<SubnetMask>())
            .transpose()?;

        Ok(Self {
            switch_name,
            spine_list: raw.spine_list.map(HostList::into_vec).unwrap_or_default(),
            leaf_list: raw.leaf_list.map(HostList::into_vec).unwrap_or_default(),
            subnet_mask,
            eth_list: raw.eth_list.unwrap_or_default(),
            interface_name: raw.interface_name,
            hash_name: raw.hash_name,
            log_dir_path: raw.log_dir_path,
            dry_run_mode: raw.dry_run_mode.unwrap_or(false),
            redis_host: raw
                .redis_host
                .unwrap_or_else(|| DEFAULT_REDIS_HOST.to_string()),
        })
    }

    /// Check the parameters a verification run depends on.
    ///
    /// The log file lands at `{log_dir_path}/{hash_name}.log`.
    pub fn verify_settings(&self) -> Result<VerifySettings, ConfigError> {
        let subnet_mask = self.subnet_mask.ok_or(ConfigError::Missing("subnet_mask"))?;
        let hash_name = self
            .hash_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("hash_name"))?;
        let log_dir = self
            .log_dir_path
            .as_ref()
            .ok_or(ConfigError::Missing("log_dir_path"))?;

        Ok(VerifySettings {
            subnet_mask,
            log_file_path: log_dir.join(format!("{}.log", hash_name)),
        })
    }

    /// Third octet used by the dry-run plan: last character of the interface
    /// name when one is set, the ethernet selector otherwise.
    pub fn plan_octet(&self) -> String {
        self.interface_name
            .as_deref()
            .and_then(|name| name.chars().last())
            .map(String::from)
            .unwrap_or_else(|| self.eth_list.clone())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
