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


//! Handler for the `eval` command

use std::io::Write;

use log::debug;

use crate::cli::context::CliContext;
use crate::core::parse_values;
use crate::registry::FormulaRegistry;

/// Evaluate one formula from command-line values
pub fn handle_eval(
    registry: &FormulaRegistry,
    number: u32,
    values: &[String],
    exercise: bool,
    context: &CliContext,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let inputs = parse_values(values)?;
    debug!("eval {number} (exercise: {exercise}) with {inputs:?}");

    let evaluation = if exercise {
        registry.evaluate_exercise(number, &inputs)?
    } else {
        registry.evaluate(number, &inputs)?
    };

    let formatter = context.create_formatter();
    writeln!(out, "{}", formatter.format_evaluation(&evaluation)?)?;
    Ok(())
}
