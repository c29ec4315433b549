// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! satchel-core: Core library for the satchel utility kit
//!
//! This crate provides:
//! - Timed and periodic execution of callables on the tokio runtime
//! - Line-buffered collection of child process stdout/stderr
//! - Typed key/value configuration parsing
//! - Small self-contained helpers (passwords, certificates, filesystem
//!   mapping, keyed collections, JSON and unit conversion utilities)

pub mod certificate;
pub mod collect;
pub mod config;
pub mod convert;
pub mod fsmap;
pub mod iterate;
pub mod json;
pub mod password;
pub mod path;
pub mod periodic;
pub mod process;
pub mod stream;

// Re-exports
pub use certificate::{get_host_certificate, CertificateError};
pub use collect::{Collection, CollectionError, Keyed};
pub use config::{Config, ConfigError, ConfigKey, ConfigValue, KeyType};
pub use fsmap::{Directory, Entry, FsMapError};
pub use password::{generate_password, PasswordProfile, DEFAULT_LENGTH};
pub use periodic::{PeriodicCall, TimedCall, TimedCallError};
pub use process::{collect_output, Channel, CommandOutput, OutputCollector, OutputError, OutputHandle};
pub use stream::{LineBuffer, LineCallback};
