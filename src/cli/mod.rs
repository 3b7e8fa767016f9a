// Copyright 2024 OctoFHIR Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! Command-line interface: the interactive menu plus `eval` and `list`

pub mod config;
pub mod context;
pub mod handlers;
pub mod menu;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use output::OutputFormat;

use crate::core::FormulaError;
use crate::registry::FormulaGroup;

#[derive(Parser, Clone, Debug)]
#[command(name = "linear-formulas")]
#[command(about = "Evaluate a fixed catalogue of closed-form real formulas")]
#[command(version)]
#[command(author = "OctoFHIR Team <funyloony@gmail.com>")]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'o', value_enum, global = true)]
    pub output_format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Do not print the menu listing
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Configuration file to use instead of the default search
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone, Debug, PartialEq)]
pub enum Commands {
    /// Run the interactive numbered menu (default)
    Menu,
    /// Evaluate one formula
    Eval {
        /// Menu number (1..39), or exercise number with --exercise
        selector: u32,
        /// Input values in the order the formula reads them
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
        /// Interpret SELECTOR as an exercise number (1..37)
        #[arg(long, short)]
        exercise: bool,
    },
    /// List the available formulas
    List {
        /// Only formulas of this group (e.g. ab, z, t, y)
        #[arg(long, short)]
        group: Option<FormulaGroup>,
    },
}

/// Re-tag a raw console `io::Error` as `FormulaError` (LF0101)
pub(crate) fn console_error(error: anyhow::Error) -> anyhow::Error {
    match error.downcast::<std::io::Error>() {
        Ok(io_error) => FormulaError::from(io_error).into(),
        Err(other) => other,
    }
}
