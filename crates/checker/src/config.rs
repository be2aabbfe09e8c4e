// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line configuration.
//!
//! `-r`, `-t` and `--max` are accepted for compatibility with grading
//! scripts but have no effect on the verdict.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Executable checked when `-e` is not given.
pub const DEFAULT_EXECUTABLE: &str = "./a.out";

#[derive(Debug, Clone, Parser)]
#[command(
    name = "micro-checker",
    version,
    about = "Tests for shell",
    styles = crate::color::styles()
)]
pub struct CheckArgs {
    /// Executable shell file
    #[arg(short = 'e', value_name = "PATH", default_value = DEFAULT_EXECUTABLE)]
    pub executable: PathBuf,

    /// Result file
    #[arg(short = 'r', value_name = "PATH")]
    pub results: Option<PathBuf>,

    /// Run without checks
    #[arg(short = 't')]
    pub without_checks: bool,

    /// Max points number
    #[arg(long = "max", value_enum, default_value_t = MaxScore::Fifteen)]
    pub max: MaxScore,

    /// Print the script that would be sent and exit
    #[arg(long)]
    pub dry_run: bool,
}

/// Allowed score ceilings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum MaxScore {
    #[default]
    #[value(name = "15")]
    Fifteen,
    #[value(name = "20")]
    Twenty,
    #[value(name = "25")]
    TwentyFive,
}

impl MaxScore {
    pub fn points(self) -> u32 {
        match self {
            MaxScore::Fifteen => 15,
            MaxScore::Twenty => 20,
            MaxScore::TwentyFive => 25,
        }
    }
}
