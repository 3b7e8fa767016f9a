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


//! Handler for the interactive menu on stdin/stdout

use std::io;

use crate::cli::context::CliContext;
use crate::cli::menu::MenuSession;
use crate::registry::FormulaRegistry;

pub fn handle_menu(registry: &FormulaRegistry, context: &CliContext) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    MenuSession::new(registry, stdin.lock(), stdout.lock(), context.create_formatter())
        .quiet(context.quiet)
        .run()
}
