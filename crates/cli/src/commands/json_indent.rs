// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON indent command

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use satchel_core::json::indent_json;

#[derive(Args)]
pub struct JsonIndentArgs {
    /// Number of indentation spaces
    #[arg(short = 'n', long = "num", value_name = "N", default_value_t = 2)]
    pub num: usize,

    /// Force ascii output
    #[arg(short = 'a', long = "ascii")]
    pub ascii: bool,

    /// Input file (stdin if omitted)
    pub input: Option<PathBuf>,

    /// Output file (stdout if omitted)
    pub output: Option<PathBuf>,
}

pub fn handle(args: JsonIndentArgs) -> Result<()> {
    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text).context("reading stdin")?;
            text
        }
    };

    let indented = indent_json(&text, args.num, args.ascii).context("formatting failed")?;

    match &args.output {
        Some(path) => std::fs::write(path, format!("{indented}\n"))
            .with_context(|| format!("writing {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{indented}").context("writing stdout")?;
        }
    }
    Ok(())
}
