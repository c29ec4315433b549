// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Certificate info command

use anyhow::Result;
use clap::{Args, Subcommand};
use satchel_core::certificate::get_host_certificate;

#[derive(Args)]
pub struct CertinfoArgs {
    #[command(subcommand)]
    pub action: CertinfoAction,
}

#[derive(Subcommand)]
pub enum CertinfoAction {
    /// Get certificate for a host
    GetCert {
        /// Hostname in the host[:port] format. Port defaults to 443
        hostname: String,
    },
}

pub async fn handle(args: CertinfoArgs) -> Result<()> {
    match args.action {
        CertinfoAction::GetCert { hostname } => {
            tracing::debug!(host = %hostname, "fetching certificate");
            let certificate = get_host_certificate(&hostname).await?;
            println!("{}", certificate);
            Ok(())
        }
    }
}
