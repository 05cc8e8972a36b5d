// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

//! Shared helpers for binary-level probe tests.
//!
//! Switch commands are answered by small shell stubs placed first on `PATH`,
//! so the real binary runs end to end without touching the host's routes.

use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, TempDir};

pub const CLOCK: &str = "2026101912:00:00";
pub const LOST: &str = "5 packets transmitted, 0 received, 100% packet loss, time 4099ms";
pub const REPLIED: &str = "5 packets transmitted, 5 received, 0% packet loss, time 4005ms";

/// Canned switch state served by the stubs
pub struct SwitchState {
    pub routes: &'static str,
    pub fib: &'static str,
    pub tcam: &'static str,
    pub ping: &'static str,
}

impl SwitchState {
    /// A switch where the 10.0.5.0/24 blackhole is fully installed
    pub fn healthy() -> Self {
        Self {
            routes: "default via 172.17.2.1 dev eth0\nblackhole 10.0.5.0/24",
            fib: "10.0.4.0/24 rewrite\n10.0.5.0/24 drop",
            tcam: "0 10.0.5.0 Adj:Drop\n1 10.0.5.0 Adj:Drop\n2 10.0.5.0 Adj:Drop\n3 10.0.5.0 Adj:Drop",
            ping: LOST,
        }
    }
}

#[cfg(unix)]
fn write_stub(dir: &Path, name: &str, body: &str) {
    use std::os::unix::fs::PermissionsExt;
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

/// Create a directory of stub executables for `date`, `ip`, `goes` and `ping`
#[cfg(unix)]
pub fn stub_switch(state: &SwitchState) -> TempDir {
    let dir = TempDir::new().unwrap();
    write_stub(dir.path(), "date", &format!("echo '{}'", CLOCK));
    write_stub(
        dir.path(),
        "ip",
        &format!("[ \"$*\" = \"route\" ] && printf '%s\\n' '{}'", state.routes),
    );
    write_stub(
        dir.path(),
        "goes",
        &format!(
            "case \"$*\" in\n\"vnet show ip fib\") printf '%s\\n' '{}' ;;\n\"vnet show fe1 tcam\") printf '%s\\n' '{}' ;;\nesac",
            state.fib, state.tcam
        ),
    );
    write_stub(dir.path(), "ping", &format!("printf '%s\\n' '{}'", state.ping));
    dir
}

/// Write a params file; JSON when the content looks like JSON, TOML otherwise
pub fn write_params(content: &str) -> NamedTempFile {
    let is_json = content.trim().starts_with('{');
    let suffix = if is_json { ".json" } else { ".toml" };
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
