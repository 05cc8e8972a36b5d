// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Insertion-ordered audit trail.

use crate::entry::{AuditEntry, CommandKey, EntryOrigin};
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::io::{self, Write};

/// Ordered record of every command a probe issued.
///
/// Entries are keyed by their flat display key. Recording a second entry
/// under an existing key replaces the earlier value in place, keeping its
/// position and sequence number, so `seq` always rises in iteration order.
#[derive(Clone, Debug, Default)]
pub struct AuditTrail {
    entries: IndexMap<String, AuditEntry>,
    next_seq: u64,
}

impl AuditTrail {
    /// Create an empty trail
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a command execution and its output
    pub fn record_command(&mut self, key: CommandKey, output: Option<String>) {
        self.insert(EntryOrigin::Command(key), output);
    }

    /// Store a summary value under a reserved name
    pub fn annotate(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.insert(
            EntryOrigin::Reserved { name: name.into() },
            Some(value.into()),
        );
    }

    fn insert(&mut self, origin: EntryOrigin, output: Option<String>) {
        let entry = AuditEntry {
            seq: self.next_seq,
            origin,
            output,
        };
        match self.entries.entry(entry.key()) {
            Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                existing.origin = entry.origin;
                existing.output = entry.output;
            }
            Entry::Vacant(slot) => {
                slot.insert(entry);
                self.next_seq += 1;
            }
        }
    }

    /// Look up an entry by its flat key
    pub fn get(&self, key: &str) -> Option<&AuditEntry> {
        self.entries.get(key)
    }

    /// Flat keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in insertion order
    pub fn entries(&self) -> impl Iterator<Item = &AuditEntry> {
        self.entries.values()
    }

    /// Command identities in insertion order, skipping reserved entries
    pub fn commands(&self) -> impl Iterator<Item = &CommandKey> {
        self.entries.values().filter_map(AuditEntry::command)
    }

    /// Entries whose command text contains `pattern`
    pub fn find_by_command(&self, pattern: &str) -> Vec<&AuditEntry> {
        self.entries
            .values()
            .filter(|e| e.command().is_some_and(|c| c.command.contains(pattern)))
            .collect()
    }

    /// Get the total number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write every entry in log file form.
    pub fn write_log<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for entry in self.entries.values() {
            writer.write_all(entry.render().as_bytes())?;
        }
        writer.flush()
    }

    /// Render the whole trail in log file form
    pub fn render_log(&self) -> String {
        self.entries.values().map(AuditEntry::render).collect()
    }
}

impl Serialize for AuditTrail {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in &self.entries {
            map.serialize_entry(key, &entry.output)?;
        }
        map.end()
    }
}

#[cfg(test)]
#[path = "trail_tests.rs"]
mod tests;
