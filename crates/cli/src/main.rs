// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! satchel - a kit of small command line utilities

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{certinfo, json_indent, password};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "satchel", version, about = "A kit of small command line utilities")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get information about SSL certificates
    Certinfo(certinfo::CertinfoArgs),
    /// Indent JSON text
    JsonIndent(json_indent::JsonIndentArgs),
    /// Generate random passwords
    Password(password::PasswordArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();

    let cli = Cli::parse();
    match cli.command {
        Commands::Certinfo(args) => certinfo::handle(args).await,
        Commands::JsonIndent(args) => json_indent::handle(args),
        Commands::Password(args) => password::handle(args),
    }
}

/// Log to stderr, filtered by the SATCHEL_LOG env var (default: warn).
fn setup_logging() {
    let filter = EnvFilter::try_from_env("SATCHEL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
