// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

fn outcome(rule: &'static str, failure: &str) -> RuleOutcome {
    RuleOutcome {
        rule,
        failure: failure.to_string(),
    }
}

#[test]
fn test_all_empty_passes() {
    let verdict = Verdict::from_outcomes(&[outcome("route_tables", ""), outcome("ping", "")]);
    assert!(verdict.passed());
    assert_eq!(verdict.detail, "");
}

#[test]
fn test_any_failure_fails_and_concatenates_in_order() {
    let verdict = Verdict::from_outcomes(&[
        outcome("route_tables", "first."),
        outcome("ping", ""),
        outcome("extra", "second."),
    ]);
    assert_eq!(verdict.status, Status::Failed);
    assert_eq!(verdict.detail, "first.second.");
}

#[test]
fn test_no_rules_passes() {
    assert!(Verdict::from_outcomes(&[]).passed());
}

#[test]
fn test_record_appends_reserved_keys() {
    let mut trail = AuditTrail::new();
    Verdict::from_outcomes(&[outcome("ping", "lost\n")]).record(&mut trail);

    let keys: Vec<_> = trail.keys().collect();
    assert_eq!(keys, vec![DETAIL_KEY, STATUS_KEY]);
    assert_eq!(trail.get(DETAIL_KEY).unwrap().output.as_deref(), Some("lost\n"));
    assert_eq!(trail.get(STATUS_KEY).unwrap().output.as_deref(), Some("Failed"));
}
