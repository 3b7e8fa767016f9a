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


//! CLI configuration file support

use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::output::OutputFormat;

/// File name looked up in the working and home directories
pub const CONFIG_FILE_NAME: &str = ".formulasrc";

/// CLI configuration loaded from ~/.formulasrc or .formulasrc
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CliConfig {
    /// Default output format
    #[serde(default)]
    pub output_format: Option<OutputFormat>,

    /// Disable colored output by default
    #[serde(default)]
    pub no_color: bool,

    /// Enable quiet mode by default
    #[serde(default)]
    pub quiet: bool,

    /// Enable verbose mode by default
    #[serde(default)]
    pub verbose: bool,

    /// Fractional digits printed for every result
    #[serde(default)]
    pub precision: Option<usize>,
}

impl CliConfig {
    /// Load configuration from standard locations
    ///
    /// Search order:
    /// 1. ./.formulasrc (current directory)
    /// 2. ~/.formulasrc (home directory)
    /// 3. ~/.config/linear-formulas/config.toml
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self::load_first(&Self::search_paths()))
    }

    /// First of `paths` that loads; broken files are skipped with a warning
    fn load_first(paths: &[PathBuf]) -> Self {
        for path in paths.iter().filter(|path| path.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => {
                    debug!("loaded configuration from {}", path.display());
                    return config;
                }
                Err(error) => warn!("ignoring configuration file: {error:#}"),
            }
        }

        // No config found, return default
        Self::default()
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Get default config file path (user's home directory)
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(home_rc) = Self::default_path() {
            paths.push(home_rc);
        }
        if let Some(home) = dirs::home_dir() {
            paths.push(
                home.join(".config")
                    .join("linear-formulas")
                    .join("config.toml"),
            );
        }
        paths
    }
}
