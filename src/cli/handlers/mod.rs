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


//! Command handlers for CLI operations

pub mod evaluate;
pub mod list;
pub mod menu;

pub use evaluate::handle_eval;
pub use list::handle_list;
pub use menu::handle_menu;

use std::io::Write;

use super::{Commands, console_error};
use super::context::CliContext;
use crate::registry::FormulaRegistry;

/// Run one command; the menu when none was given
pub fn handle_command(
    command: Option<&Commands>,
    registry: &FormulaRegistry,
    context: &CliContext,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let result = match command {
        None | Some(Commands::Menu) => handle_menu(registry, context),
        Some(Commands::Eval {
            selector,
            values,
            exercise,
        }) => handle_eval(registry, *selector, values, *exercise, context, out),
        Some(Commands::List { group }) => handle_list(registry, *group, context, out),
    };
    result.map_err(console_error)
}
