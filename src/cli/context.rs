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


//! Shared CLI context resolved from flags and the config file

use super::Cli;
use super::config::CliConfig;
use super::output::{FormatterFactory, OutputFormat, OutputFormatter};
use crate::core::DEFAULT_PRECISION;

/// Shared context for CLI commands containing common configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CliContext {
    /// Output format for results
    pub output_format: OutputFormat,
    /// Disable colored output
    pub no_color: bool,
    /// Suppress the menu listing
    pub quiet: bool,
    /// Debug logging
    pub verbose: bool,
    /// Fractional digits for every printed value
    pub precision: usize,
}

impl CliContext {
    /// Merge command-line flags over the config file; flags win
    pub fn resolve(cli: &Cli, config: &CliConfig) -> Self {
        Self {
            output_format: cli
                .output_format
                .or(config.output_format)
                .unwrap_or_default(),
            no_color: cli.no_color || config.no_color,
            quiet: cli.quiet || config.quiet,
            verbose: cli.verbose || config.verbose,
            precision: config.precision.unwrap_or(DEFAULT_PRECISION),
        }
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        !self.no_color && std::env::var("NO_COLOR").is_err()
    }

    /// Create a formatter for this context
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        FormatterFactory::new(!self.use_colors())
            .with_precision(self.precision)
            .create_formatter(self.output_format)
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            no_color: false,
            quiet: false,
            verbose: false,
            precision: DEFAULT_PRECISION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_without_flags_or_config() {
        let cli = Cli::parse_from(["linear-formulas"]);
        let context = CliContext::resolve(&cli, &CliConfig::default());
        assert_eq!(context, CliContext::default());
    }

    #[test]
    fn test_config_fills_unset_flags() {
        let cli = Cli::parse_from(["linear-formulas", "--quiet"]);
        let config = CliConfig {
            output_format: Some(OutputFormat::Json),
            no_color: true,
            precision: Some(2),
            ..CliConfig::default()
        };

        let context = CliContext::resolve(&cli, &config);
        assert_eq!(context.output_format, OutputFormat::Json);
        assert!(context.no_color);
        assert!(context.quiet);
        assert!(!context.verbose);
        assert_eq!(context.precision, 2);
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from(["linear-formulas", "-o", "raw", "list"]);
        let config = CliConfig {
            output_format: Some(OutputFormat::Json),
            ..CliConfig::default()
        };

        let context = CliContext::resolve(&cli, &config);
        assert_eq!(context.output_format, OutputFormat::Raw);
    }
}
