// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Audit trail for commands issued during a regression probe.
//!
//! Every command a probe runs is recorded together with the host it ran on,
//! the host-reported timestamp and whatever output came back. The trail
//! doubles as the probe's debug log and as its final report payload.

mod entry;
mod trail;

pub use entry::{AuditEntry, CommandKey, EntryOrigin, ABSENT_MARKER};
pub use trail::AuditTrail;
