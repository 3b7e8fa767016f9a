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


//! Handler for the `list` command

use std::io::Write;

use crate::cli::context::CliContext;
use crate::registry::{FormulaGroup, FormulaRegistry};

/// Print the formula catalogue, optionally limited to one group
pub fn handle_list(
    registry: &FormulaRegistry,
    group: Option<FormulaGroup>,
    context: &CliContext,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let formulas = match group {
        Some(group) => registry.list_formulas_by_group(group),
        None => registry.list_formulas(),
    };

    let formatter = context.create_formatter();
    writeln!(out, "{}", formatter.format_catalogue(&formulas)?)?;
    Ok(())
}
