// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use proptest::prelude::*;

fn key(ts: &str, command: &str) -> CommandKey {
    CommandKey::new("leaf01", Some(ts.to_string()), command)
}

#[test]
fn test_record_and_lookup() {
    let mut trail = AuditTrail::new();
    trail.record_command(key("20261019", "ip route"), Some("default via 10.0.0.1".into()));

    assert_eq!(trail.len(), 1);
    let entry = trail.get("leaf01 20261019 ip route").unwrap();
    assert_eq!(entry.seq, 0);
    assert_eq!(entry.output.as_deref(), Some("default via 10.0.0.1"));
}

#[test]
fn test_keys_follow_insertion_order() {
    let mut trail = AuditTrail::new();
    trail.record_command(key("t1", "ip route"), None);
    trail.record_command(key("t2", "goes vnet show ip fib"), None);
    trail.annotate("result.status", "Passed");

    let keys: Vec<_> = trail.keys().collect();
    assert_eq!(
        keys,
        vec![
            "leaf01 t1 ip route",
            "leaf01 t2 goes vnet show ip fib",
            "result.status"
        ]
    );
}

#[test]
fn test_collision_overwrites_in_place() {
    let mut trail = AuditTrail::new();
    trail.record_command(key("t1", "ip route"), Some("first".into()));
    trail.record_command(key("t1", "goes status"), Some("status".into()));
    trail.record_command(key("t1", "ip route"), Some("second".into()));

    assert_eq!(trail.len(), 2);
    let keys: Vec<_> = trail.keys().collect();
    assert_eq!(keys[0], "leaf01 t1 ip route");
    assert_eq!(
        trail.get("leaf01 t1 ip route").unwrap().output.as_deref(),
        Some("second")
    );
}

#[test]
fn test_collision_keeps_sequence_number() {
    let mut trail = AuditTrail::new();
    trail.record_command(key("t1", "ip route"), Some("first".into()));
    trail.record_command(key("t1", "goes status"), None);
    trail.record_command(key("t1", "ip route"), Some("second".into()));
    trail.annotate("result.status", "Passed");

    let seqs: Vec<_> = trail.entries().map(|e| e.seq).collect();
    assert_eq!(seqs, vec![0, 1, 2]);
}

#[test]
fn test_commands_skip_reserved_entries() {
    let mut trail = AuditTrail::new();
    trail.record_command(key("t1", "ip route"), None);
    trail.annotate("result.detail", "");

    let commands: Vec<_> = trail.commands().map(|c| c.command.as_str()).collect();
    assert_eq!(commands, vec!["ip route"]);
}

#[test]
fn test_find_by_command() {
    let mut trail = AuditTrail::new();
    trail.record_command(key("t1", "goes vnet show ip fib"), None);
    trail.record_command(key("t2", "goes vnet show fe1 tcam"), None);
    trail.record_command(key("t3", "ip route"), None);

    let found = trail.find_by_command("goes vnet");
    assert_eq!(found.len(), 2);
    assert!(trail.find_by_command("ping").is_empty());
}

#[test]
fn test_render_log_matches_write_log() {
    let mut trail = AuditTrail::new();
    trail.record_command(key("t1", "ip route"), Some("blackhole 10.0.5.0/24".into()));
    trail.record_command(key("t2", "goes status"), None);
    trail.annotate("result.status", "Failed");

    let mut buf = Vec::new();
    trail.write_log(&mut buf).unwrap();
    let written = String::from_utf8(buf).unwrap();

    assert_eq!(written, trail.render_log());
    assert_eq!(
        written,
        "leaf01 t1 ip route\nblackhole 10.0.5.0/24\n\n\
         leaf01 t2 goes status\nNone\n\n\
         result.status\nFailed\n\n"
    );
}

#[test]
fn test_serializes_as_ordered_map() {
    let mut trail = AuditTrail::new();
    trail.record_command(key("t1", "ip route"), None);
    trail.annotate("result.status", "Passed");

    let json = serde_json::to_string(&trail).unwrap();
    assert_eq!(
        json,
        r#"{"leaf01 t1 ip route":null,"result.status":"Passed"}"#
    );
}

#[test]
fn test_empty_trail() {
    let trail = AuditTrail::new();
    assert!(trail.is_empty());
    assert_eq!(trail.render_log(), "");
}

proptest! {
    #[test]
    fn distinct_commands_keep_order(commands in proptest::collection::hash_set("[a-z]{1,12}", 1..20)) {
        let commands: Vec<String> = commands.into_iter().collect();
        let mut trail = AuditTrail::new();
        for c in &commands {
            trail.record_command(key("t", c), None);
        }
        let recorded: Vec<_> = trail.commands().map(|c| c.command.clone()).collect();
        prop_assert_eq!(recorded, commands);
    }
}
