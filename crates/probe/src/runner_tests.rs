// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::transport::ScriptedTransport;
use rstest::rstest;

fn output(stdout: &str, stderr: &str, code: Option<i32>) -> CommandOutput {
    CommandOutput {
        exit_code: code,
        stdout: stdout.to_string(),
        stderr: stderr.to_string(),
    }
}

#[rstest]
#[case(output("routes\n\n", "", Some(0)), Some("routes"))]
#[case(output("", "permission denied\n", Some(1)), Some("permission denied"))]
#[case(output("both\n", "warning\n", Some(0)), Some("both"))]
#[case(output("", "", Some(0)), None)]
#[case(output("", "", None), None)]
#[case(output("  \n", "ignored", Some(0)), Some(""))]
fn test_select_output(#[case] out: CommandOutput, #[case] expected: Option<&str>) {
    assert_eq!(select_output(&out).as_deref(), expected);
}

#[test]
fn test_exit_code_does_not_decide_output() {
    let out = output("looks fine", "", Some(2));
    assert_eq!(select_output(&out).as_deref(), Some("looks fine"));
}

#[test]
fn test_execute_splits_shell_words() {
    let mut transport = ScriptedTransport::new();
    {
        let mut runner = CommandRunner::new(&mut transport);
        runner.execute(
            "leaf01",
            r#"redis-cli -h "10.0.0.9" hset platina 'psu.powercycle' true"#,
        );
    }
    assert_eq!(
        transport.calls()[0].1,
        vec!["redis-cli", "-h", "10.0.0.9", "hset", "platina", "psu.powercycle", "true"]
    );
}

#[test]
fn test_hash_word_is_passed_as_argument() {
    let mut transport = ScriptedTransport::new();
    {
        let mut runner = CommandRunner::new(&mut transport);
        runner.execute("leaf01", "echo #tag done");
    }
    assert_eq!(transport.calls()[0].1, vec!["echo", "#tag", "done"]);
}

#[rstest]
#[case("#lead", vec!["#lead"])]
#[case("echo a#b", vec!["echo", "a#b"])]
#[case("echo '#single' \"# double\"", vec!["echo", "#single", "# double"])]
#[case("echo \\#escaped\t#tab", vec!["echo", "#escaped", "#tab"])]
#[case(r#"echo "q\" #in" #out"#, vec!["echo", "q\" #in", "#out"])]
fn test_split_words_keeps_hash(#[case] command: &str, #[case] expected: Vec<&str>) {
    assert_eq!(split_words(command).unwrap(), expected);
}

#[test]
fn test_split_words_rejects_unbalanced_quotes() {
    assert_eq!(split_words("echo '#open"), None);
}

#[test]
fn test_execute_returns_trimmed_output() {
    let mut transport = ScriptedTransport::new().respond_stdout("ip route", "10.0.5.0/24 \n");
    let mut runner = CommandRunner::new(&mut transport);
    assert_eq!(runner.execute("leaf01", "ip route").as_deref(), Some("10.0.5.0/24"));
}

#[test]
fn test_execute_without_output_is_none() {
    let mut transport = ScriptedTransport::new();
    let mut runner = CommandRunner::new(&mut transport);
    assert_eq!(runner.execute("leaf01", "goes status"), None);
}

#[test]
fn test_unbalanced_quotes_are_not_run() {
    let mut transport = ScriptedTransport::new();
    let out = {
        let mut runner = CommandRunner::new(&mut transport);
        runner.execute("leaf01", r#"echo "unterminated"#)
    };
    assert!(out.unwrap().starts_with("cannot tokenize command"));
    assert!(transport.calls().is_empty());
}
