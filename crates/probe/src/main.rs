// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blackhole route probe binary entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use blackhole_probe::cli::Cli;
use blackhole_probe::diagnostic::print_error;
use blackhole_probe::exit_codes;
use blackhole_probe::transport::LocalTransport;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let params = match cli.probe_params() {
        Ok(params) => params,
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::ERROR);
        }
    };

    let mut transport = LocalTransport::new();
    let report = match blackhole_probe::run(&params, &mut transport) {
        Ok(report) => report,
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::ERROR);
        }
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::ERROR);
        }
    }
    std::process::exit(exit_codes::SUCCESS);
}
