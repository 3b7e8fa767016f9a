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

//! Three-variable formulas: the T, S, Q, W, P and V groups
//!
//! Every entry reads x, y and z, even when the expression ignores one of
//! them (T variant a never uses y).

use smallvec::smallvec;

use super::{FormulaGroup, FormulaRegistry};
use crate::core::{Inputs, Result, Values};
use crate::register_formula;

impl FormulaRegistry {
    pub fn register_three_variable_formulas(&mut self) -> Result<()> {
        self.register_t_formulas()?;
        self.register_s_formulas()?;
        self.register_q_formulas()?;
        self.register_w_formulas()?;
        self.register_p_formulas()?;
        self.register_v_formulas()?;
        Ok(())
    }

    fn register_t_formulas(&mut self) -> Result<()> {
        register_formula!(
            self,
            selector: 10,
            exercise: 8,
            group: FormulaGroup::T,
            title: "Compute T (a)",
            inputs: ["x", "y", "z"],
            outputs: ["T" => "z^2 / (1 + sin(z^2)) - sqrt(x + 2)"],
            implementation: |v: &Inputs| -> Values {
                let (x, z) = (v.x(), v.z());
                smallvec![z.powf(2.0) / (1.0 + z.powf(2.0).sin()) - (x + 2.0).sqrt()]
            }
        )?;

        register_formula!(
            self,
            selector: 11,
            exercise: 9,
            group: FormulaGroup::T,
            title: "Compute T (b)",
            inputs: ["x", "y", "z"],
            outputs: ["T" => "(exp(x) + ln(y)) / (1 + z^3)"],
            implementation: |v: &Inputs| -> Values {
                let (x, y, z) = (v.x(), v.y(), v.z());
                smallvec![(x.exp() + y.ln()) / (1.0 + z.powf(3.0))]
            }
        )?;

        register_formula!(
            self,
            selector: 12,
            exercise: 10,
            group: FormulaGroup::T,
            title: "Compute T (c)",
            inputs: ["x", "y", "z"],
            outputs: ["T" => "sqrt(x + y) * cos(z) / (1 + |x - y|)"],
            implementation: |v: &Inputs| -> Values {
                let (x, y, z) = (v.x(), v.y(), v.z());
                smallvec![(x + y).sqrt() * z.cos() / (1.0 + (x - y).abs())]
            }
        )
    }

    fn register_s_formulas(&mut self) -> Result<()> {
        register_formula!(
            self,
            selector: 17,
            exercise: 15,
            group: FormulaGroup::S,
            title: "Compute S (a)",
            inputs: ["x", "y", "z"],
            outputs: ["S" => "(x + y + z) / (1 + x^2 + y^2)"],
            implementation: |v: &Inputs| -> Values {
                let (x, y, z) = (v.x(), v.y(), v.z());
                smallvec![(x + y + z) / (1.0 + x.powf(2.0) + y.powf(2.0))]
            }
        )?;

        register_formula!(
            self,
            selector: 18,
            exercise: 16,
            group: FormulaGroup::S,
            title: "Compute S (b)",
            inputs: ["x", "y", "z"],
            outputs: ["S" => "sqrt(x * y) + exp(z) / (1 + sin(x + y))"],
            implementation: |v: &Inputs| -> Values {
                let (x, y, z) = (v.x(), v.y(), v.z());
                smallvec![(x * y).sqrt() + z.exp() / (1.0 + (x + y).sin())]
            }
        )?;

        register_formula!(
            self,
            selector: 19,
            exercise: 17,
            group: FormulaGroup::S,
            title: "Compute S (c)",
            inputs: ["x", "y", "z"],
            outputs: ["S" => "ln(x + y) + z^2 - atan(x / y)"],
            implementation: |v: &Inputs| -> Values {
                let (x, y, z) = (v.x(), v.y(), v.z());
                smallvec![(x + y).ln() + z.powf(2.0) - (x / y).atan()]
            }
        )?;

        register_formula!(
            self,
            selector: 20,
            exercise: 18,
            group: FormulaGroup::S,
            title: "Compute S (d)",
            inputs: ["x", "y", "z"],
            outputs: ["S" => "(sin(x) + cos(y)) * exp(-z) / (1 + |x - y|)"],
            implementation: |v: &Inputs| -> Values {
                let (x, y, z) = (v.x(), v.y(), v.z());
                smallvec![(x.sin() + y.cos()) * (-z).exp() / (1.0 + (x - y).abs())]
            }
        )
    }

    fn register_q_formulas(&mut self) -> Result<()> {
        register_formula!(
            self,
            selector: 25,
            exercise: 23,
            group: FormulaGroup::Q,
            title: "Compute Q (a)",
            inputs: ["x", "y", "z"],
            outputs: ["Q" => "(x + y) / (1 + z^2) + sin(x * y)"],
            implementation: |v: &Inputs| -> Values {
                let (x, y, z) = (v.x(), v.y(), v.z());
                smallvec![(x + y) / (1.0 + z.powf(2.0)) + (x * y).sin()]
            }
        )?;

        // 1 + cos(z) vanishes at z = pi
        register_formula!(
            self,
            selector: 26,
            exercise: 24,
            group: FormulaGroup::Q,
            title: "Compute Q (b)",
            inputs: ["x", "y", "z"],
            outputs: ["Q" => "exp(x + y) / (1 + cos(z)) - sqrt(x * y)"],
            implementation: |v: &Inputs| -> Values {
                let (x, y, z) = (v.x(), v.y(), v.z());
                smallvec![(x + y).exp() / (1.0 + z.cos()) - (x * y).sqrt()]
            }
        )?;

        register_formula!(
            self,
            selector: 27,
            exercise: 25,
            group: FormulaGroup::Q,
            title: "Compute Q (c)",
            inputs: ["x", "y", "z"],
            outputs: ["Q" => "ln(x + y + z) + atan(x / z) / y^2"],
            implementation: |v: &Inputs| -> Values {
                let (x, y, z) = (v.x(), v.y(), v.z());
                smallvec![(x + y + z).ln() + (x / z).atan() / y.powf(2.0)]
            }
        )?;

        register_formula!(
            self,
            selector: 28,
            exercise: 26,
            group: FormulaGroup::Q,
            title: "Compute Q (d)",
            inputs: ["x", "y", "z"],
            outputs: ["Q" => "x^2 * sin(y) + cos(z) / (1 + |x - z|)"],
            implementation: |v: &Inputs| -> Values {
                let (x, y, z) = (v.x(), v.y(), v.z());
                smallvec![x.powf(2.0) * y.sin() + z.cos() / (1.0 + (x - z).abs())]
            }
        )
    }

    fn register_w_formulas(&mut self) -> Result<()> {
        register_formula!(
            self,
            selector: 29,
            exercise: 27,
            group: FormulaGroup::W,
            title: "Compute W (a)",
            inputs: ["x", "y", "z"],
            outputs: ["W" => "sqrt(x + y + z) / (1 + exp(-x)) + ln(y)"],
            implementation: |v: &Inputs| -> Values {
                let (x, y, z) = (v.x(), v.y(), v.z());
                smallvec![(x + y + z).sqrt() / (1.0 + (-x).exp()) + y.ln()]
            }
        )?;

        register_formula!(
            self,
            selector: 30,
            exercise: 28,
            group: FormulaGroup::W,
            title: "Compute W (b)",
            inputs: ["x", "y", "z"],
            outputs: ["W" => "(sin(x) + cos(y)) * exp(z) / (1 + x^2)"],
            implementation: |v: &Inputs| -> Values {
                let (x, y, z) = (v.x(), v.y(), v.z());
                smallvec![(x.sin() + y.cos()) * z.exp() / (1.0 + x.powf(2.0))]
            }
        )?;

        register_formula!(
            self,
            selector: 31,
            exercise: 29,
            group: FormulaGroup::W,
            title: "Compute W (c)",
            inputs: ["x", "y", "z"],
            outputs: ["W" => "atan(x + y) + z^2 / (1 + |x - y|)"],
            implementation: |v: &Inputs| -> Values {
                let (x, y, z) = (v.x(), v.y(), v.z());
                smallvec![(x + y).atan() + z.powf(2.0) / (1.0 + (x - y).abs())]
            }
        )?;

        register_formula!(
            self,
            selector: 32,
            exercise: 30,
            group: FormulaGroup::W,
            title: "Compute W (d)",
            inputs: ["x", "y", "z"],
            outputs: ["W" => "log10(x * y) + sqrt(z) - tan(x + y)"],
            implementation: |v: &Inputs| -> Values {
                let (x, y, z) = (v.x(), v.y(), v.z());
                smallvec![(x * y).log10() + z.sqrt() - (x + y).tan()]
            }
        )
    }

    fn register_p_formulas(&mut self) -> Result<()> {
        register_formula!(
            self,
            selector: 33,
            exercise: 31,
            group: FormulaGroup::P,
            title: "Compute P (a)",
            inputs: ["x", "y", "z"],
            outputs: ["P" => "(x + y) * exp(-z) / (1 + sin(x * y))"],
            implementation: |v: &Inputs| -> Values {
                let (x, y, z) = (v.x(), v.y(), v.z());
                smallvec![(x + y) * (-z).exp() / (1.0 + (x * y).sin())]
            }
        )?;

        register_formula!(
            self,
            selector: 34,
            exercise: 32,
            group: FormulaGroup::P,
            title: "Compute P (b)",
            inputs: ["x", "y", "z"],
            outputs: ["P" => "sqrt(x * y * z) + ln(x + y) / cos(z)"],
            implementation: |v: &Inputs| -> Values {
                let (x, y, z) = (v.x(), v.y(), v.z());
                smallvec![(x * y * z).sqrt() + (x + y).ln() / z.cos()]
            }
        )?;

        register_formula!(
            self,
            selector: 35,
            exercise: 33,
            group: FormulaGroup::P,
            title: "Compute P (c)",
            inputs: ["x", "y", "z"],
            outputs: ["P" => "x^3 + atan(y) / (1 + z^2) - |x - y|"],
            implementation: |v: &Inputs| -> Values {
                let (x, y, z) = (v.x(), v.y(), v.z());
                smallvec![x.powf(3.0) + y.atan() / (1.0 + z.powf(2.0)) - (x - y).abs()]
            }
        )?;

        register_formula!(
            self,
            selector: 36,
            exercise: 34,
            group: FormulaGroup::P,
            title: "Compute P (d)",
            inputs: ["x", "y", "z"],
            outputs: ["P" => "exp(x + y) * sin(z) / (1 + log10(x * y))"],
            implementation: |v: &Inputs| -> Values {
                let (x, y, z) = (v.x(), v.y(), v.z());
                smallvec![(x + y).exp() * z.sin() / (1.0 + (x * y).log10())]
            }
        )
    }

    fn register_v_formulas(&mut self) -> Result<()> {
        register_formula!(
            self,
            selector: 37,
            exercise: 35,
            group: FormulaGroup::V,
            title: "Compute V (a)",
            inputs: ["x", "y", "z"],
            outputs: ["V" => "(x + y + z) / sqrt(1 + x^2 + y^2)"],
            implementation: |v: &Inputs| -> Values {
                let (x, y, z) = (v.x(), v.y(), v.z());
                smallvec![(x + y + z) / (1.0 + x.powf(2.0) + y.powf(2.0)).sqrt()]
            }
        )?;

        register_formula!(
            self,
            selector: 38,
            exercise: 36,
            group: FormulaGroup::V,
            title: "Compute V (b)",
            inputs: ["x", "y", "z"],
            outputs: ["V" => "exp(x) * cos(y) + ln(z + 1) / (1 + sin(x + y))"],
            implementation: |v: &Inputs| -> Values {
                let (x, y, z) = (v.x(), v.y(), v.z());
                smallvec![x.exp() * y.cos() + (z + 1.0).ln() / (1.0 + (x + y).sin())]
            }
        )?;

        register_formula!(
            self,
            selector: 39,
            exercise: 37,
            group: FormulaGroup::V,
            title: "Compute V (c)",
            inputs: ["x", "y", "z"],
            outputs: ["V" => "atan(x + y) + z^3 / (1 + |x - z|) - sqrt(y)"],
            implementation: |v: &Inputs| -> Values {
                let (x, y, z) = (v.x(), v.y(), v.z());
                smallvec![(x + y).atan() + z.powf(3.0) / (1.0 + (x - z).abs()) - y.sqrt()]
            }
        )
    }
}
