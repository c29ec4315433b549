// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Password generator command

use anyhow::Result;
use clap::Args;
use satchel_core::password::{char_defs, PasswordProfile, DEFAULT_LENGTH};

/// Named profiles available out of the box
fn profiles() -> Vec<(&'static str, PasswordProfile)> {
    vec![
        ("default", PasswordProfile::new("{alnum}-_/")),
        ("allchars", PasswordProfile::new("{alnum}{punct}")),
    ]
}

#[derive(Args)]
pub struct PasswordArgs {
    /// Number of passwords to generate
    #[arg(short = 'n', default_value_t = 1)]
    pub count: usize,

    /// Password length
    #[arg(short = 'l', long, default_value_t = DEFAULT_LENGTH)]
    pub length: usize,

    /// Profile to use: the name of a defined profile or a sequence of
    /// character definitions
    #[arg(short = 'p', long, default_value = "default")]
    pub profile: String,

    /// List available profiles
    #[arg(short = 'L', long)]
    pub list_profiles: bool,

    /// List character definitions
    #[arg(short = 'd', long)]
    pub list_defs: bool,
}

pub fn handle(args: PasswordArgs) -> Result<()> {
    if args.list_profiles {
        for (name, profile) in profiles() {
            println!(
                "{}:\n  definition: {}\n  characters: {}",
                name,
                profile.definition(),
                profile.chars().iter().collect::<String>()
            );
        }
        return Ok(());
    }

    if args.list_defs {
        for (tag, chars) in char_defs() {
            println!("{}: {:?}", tag, chars);
        }
        return Ok(());
    }

    let profile = profiles()
        .into_iter()
        .find(|(name, _)| *name == args.profile)
        .map(|(_, profile)| profile)
        .unwrap_or_else(|| PasswordProfile::new(args.profile.as_str()));

    for _ in 0..args.count {
        println!("{}", profile.generate(args.length));
    }
    Ok(())
}
