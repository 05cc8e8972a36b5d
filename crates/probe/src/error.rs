// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Top-level probe error.

use crate::config::ConfigError;
use crate::report::ReportError;
use crate::topology::TopologyError;
use thiserror::Error;

/// Anything that stops a probe from producing a report.
///
/// Failed checks are not errors; they end up in the verdict.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Report(#[from] ReportError),
}
