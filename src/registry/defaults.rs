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


//! Default formula registrations

use super::FormulaRegistry;
use crate::core::Result;

impl FormulaRegistry {
    /// Register the full menu: demonstrations first, then the exercises in
    /// the order they appear on the exercise sheet
    pub fn register_default_formulas(&mut self) -> Result<()> {
        // Fixed-constant demonstrations (selectors 1 and 2)
        self.register_demo_formulas()?;

        // a and b pairs
        self.register_pair_formulas()?;

        // z and R from x, y
        self.register_two_variable_formulas()?;

        // y from x
        self.register_single_variable_formulas()?;

        // T, S, Q, W, P and V from x, y, z
        self.register_three_variable_formulas()?;

        Ok(())
    }
}
