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


//! Console menu over the formula catalogue
//!
//! Without a subcommand the numbered menu runs on stdin/stdout; `eval` and
//! `list` are the non-interactive counterparts.

use std::io;
use std::process;

use anyhow::Context;
use clap::Parser;
use linear_formulas::FormulaError;
use linear_formulas::cli::Cli;
use linear_formulas::cli::config::CliConfig;
use linear_formulas::cli::context::CliContext;
use linear_formulas::cli::handlers::handle_command;
use linear_formulas::create_standard_registry;
use log::LevelFilter;

fn load_config(cli: &Cli) -> Result<CliConfig, FormulaError> {
    let loaded = match &cli.config {
        Some(path) => CliConfig::load_from_file(path)
            .with_context(|| format!("Could not load configuration from {}", path.display())),
        None => CliConfig::load(),
    };
    loaded.map_err(|error| FormulaError::config_error(format!("{error:#}")))
}

/// Warn by default, debug with --verbose; RUST_LOG overrides both.
/// Installed before the config file is read so skipped files are reported.
fn init_logging(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Debug)
        .parse_default_env()
        .init();
    set_verbosity(verbose);
}

fn set_verbosity(verbose: bool) {
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }
    log::set_max_level(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
}

fn report_error(error: &anyhow::Error, context: &CliContext) {
    match error.downcast_ref::<FormulaError>() {
        Some(formula_error) => {
            eprintln!("{}", context.create_formatter().format_error(formula_error));
        }
        None => eprintln!("Error: {error:#}"),
    }
}

fn main() {
    // Setup human-panic for better error messages
    human_panic::setup_panic!();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(error) => {
            let context = CliContext::resolve(&cli, &CliConfig::default());
            eprintln!("{}", context.create_formatter().format_error(&error));
            process::exit(1);
        }
    };

    let context = CliContext::resolve(&cli, &config);
    set_verbosity(context.verbose);
    log::debug!("resolved context: {context:?}");

    let registry = create_standard_registry();
    let mut stdout = io::stdout().lock();
    let result = handle_command(cli.command.as_ref(), &registry, &context, &mut stdout);
    drop(stdout);

    if let Err(error) = result {
        report_error(&error, &context);
        process::exit(1);
    }
}
