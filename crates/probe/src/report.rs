// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Result payloads and the append-only log file.

use crate::verdict::Verdict;
use regtest_audit::AuditTrail;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors persisting a run
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write log file '{path}': {source}")]
    Log {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What an invocation hands back to its caller
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ProbeReport {
    /// Dry run: the audit keys of every command that would have run
    Plan { cmds: Vec<String> },
    /// Verification run: the full trail and where it was logged
    Verified {
        hash_dict: AuditTrail,
        log_file_path: PathBuf,
        #[serde(skip)]
        verdict: Verdict,
    },
}

impl ProbeReport {
    /// Verdict of a verification run; `None` for a dry run
    pub fn verdict(&self) -> Option<&Verdict> {
        match self {
            Self::Plan { .. } => None,
            Self::Verified { verdict, .. } => Some(verdict),
        }
    }
}

/// Append every trail entry to `path`, creating the file if needed.
///
/// The file is opened and closed within this call.
pub fn append_log(path: &Path, trail: &AuditTrail) -> Result<(), ReportError> {
    let log_error = |source| ReportError::Log {
        path: path.to_path_buf(),
        source,
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(log_error)?;
    let mut writer = BufWriter::new(file);
    trail.write_log(&mut writer).map_err(log_error)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
