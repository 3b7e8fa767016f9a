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


//! Test helpers for CLI integration tests

use std::path::PathBuf;

use assert_cmd::Command;

/// Get path to test fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// The binary with colors off and a fixed config, so a user's rc file
/// cannot change the output
pub fn formulas() -> Command {
    formulas_with_config("empty.toml")
}

pub fn formulas_with_config(fixture: &str) -> Command {
    let mut command = Command::cargo_bin("linear-formulas").unwrap();
    command
        .arg("--no-color")
        .arg("--config")
        .arg(fixture_path(fixture));
    command
}
