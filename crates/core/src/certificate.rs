// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TLS certificate retrieval
//!
//! Fetches a host's PEM certificate by shelling out to `openssl s_client`,
//! with the command's output collected through
//! [`collect_output`](crate::process::collect_output).

use thiserror::Error;
use tokio::process::Command;

use crate::process::{collect_output, OutputError};

const PEM_BEGIN: &str = "-----BEGIN CERTIFICATE-----";
const PEM_END: &str = "-----END CERTIFICATE-----";

/// Errors from retrieving a host certificate
#[derive(Debug, Error)]
pub enum CertificateError {
    #[error("invalid host URI: {0}")]
    InvalidUri(String),
    #[error("failed to fetch certificate: {0}")]
    Fetch(String),
    #[error("no certificate found in command output")]
    NotFound,
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Return the host certificate in PEM format.
///
/// The URI has the form `[scheme://]host[:port]`; the scheme is optional
/// (and ignored) and the port defaults to 443.
pub async fn get_host_certificate(uri: &str) -> Result<String, CertificateError> {
    let (host, port) = parse_host_port(uri)?;

    let mut command = Command::new("openssl");
    command.args([
        "s_client",
        "-connect",
        &format!("{host}:{port}"),
        "-servername",
        &host,
    ]);

    let output = collect_output(&mut command, None, None).await?;
    let stdout = output.stdout.unwrap_or_default();
    match extract_pem(&stdout) {
        Some(pem) => Ok(pem),
        None if output.status.success() => Err(CertificateError::NotFound),
        None => {
            let stderr = output.stderr.unwrap_or_default();
            let detail = stderr.lines().next().unwrap_or("connection failed");
            Err(CertificateError::Fetch(detail.to_string()))
        }
    }
}

/// Split a `[scheme://]host[:port]` URI into host and port.
pub fn parse_host_port(uri: &str) -> Result<(String, u16), CertificateError> {
    let invalid = || CertificateError::InvalidUri(uri.to_string());

    let mut authority = match uri.split_once("://") {
        Some((_, rest)) => rest,
        None => uri,
    };
    // Drop any path component
    if let Some((host_port, _)) = authority.split_once('/') {
        authority = host_port;
    }
    if authority.is_empty() {
        return Err(invalid());
    }

    match authority.rsplit_once(':') {
        Some((host, port)) => {
            if host.is_empty() {
                return Err(invalid());
            }
            let port = port.parse().map_err(|_| invalid())?;
            Ok((host.to_string(), port))
        }
        None => Ok((authority.to_string(), 443)),
    }
}

/// Extract the first PEM certificate block from command output.
fn extract_pem(text: &str) -> Option<String> {
    let start = text.find(PEM_BEGIN)?;
    let end = text[start..].find(PEM_END)? + start + PEM_END.len();
    Some(text[start..end].to_string())
}

#[cfg(test)]
#[path = "certificate_tests.rs"]
mod tests;
