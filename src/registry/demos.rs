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

//! Demonstration entries evaluated over fixed constants
//!
//! Neither entry reads input; the constants are part of the formula.

use smallvec::smallvec;

use super::{FormulaGroup, FormulaRegistry};
use crate::core::{Inputs, Result, Values};
use crate::register_formula;

/// Truncated pi used by the example program
const EXAMPLE_PI: f64 = 3.14;
const EXAMPLE_X: f64 = 3.18;
const EXAMPLE_C: f64 = 1.87;

const SHOWCASE_X: f64 = 2.5;
const SHOWCASE_Y: f64 = 3.7;
const SHOWCASE_Z: f64 = 1.2;

fn example_program(_: &Inputs) -> Values {
    let (pi, x, c) = (EXAMPLE_PI, EXAMPLE_X, EXAMPLE_C);
    let z = ((pi / 1.7).cos() + x.powf(3.0)) / ((-x).exp() + c);
    let t = (5.3 + z * z).powf(1.0 / 5.0);
    smallvec![z, t]
}

fn expression_showcase(_: &Inputs) -> Values {
    let (x, y, z) = (SHOWCASE_X, SHOWCASE_Y, SHOWCASE_Z);
    smallvec![
        z.powf(2.0) / (1.0 + z.powf(2.0).sin()) - (x + 2.0).sqrt(),
        x.sqrt() + y.exp() - z.ln(),
        (x - y).abs() + z.powf(3.0),
        x.sin() * y.cos() / z.tan(),
        x.atan() + y.log10() - z.ceil(),
        x.floor() + y.powf(2.0) * (-z).exp(),
        (x.powf(2.0) + y.powf(2.0)).sqrt(),
        (x + y) / (1.0 + z.sin()),
        (x + y).ln() + (x / y).atan(),
        x.exp() / (1.0 + y.powf(2.0)),
        x.cos() + y.sin() * z.sqrt(),
        x.powf(3.0) + y.ln() - z.abs(),
        (x.sin() + y.cos()) / (1.0 + (-z).exp()),
        (x * y).sqrt() + z.atan() / (x + 1.0).ln(),
        (x + y).exp() * z.sin() / (1.0 + x.powf(2.0)),
        (x * y).log10() + z.powf(2.0) - x.tan(),
        x.ceil() + y.floor() * (z + 1.0).sqrt(),
        (x - y).abs() + z.exp() / x.cos(),
        x.powf(2.0) * y.cos() + (z + 1.0).ln() / x.sin(),
        (x + y).atan() + z.sqrt() / (1.0 + (x - y).abs()),
        (x + y + z) / (1.0 + x.powf(2.0) + y.powf(2.0)).sqrt(),
        (-x).exp() * y.sin() + z.log10() - (x / y).atan(),
    ]
}

impl FormulaRegistry {
    pub fn register_demo_formulas(&mut self) -> Result<()> {
        register_formula!(
            self,
            selector: 1,
            group: FormulaGroup::Example,
            title: "Example program 1",
            inputs: [],
            outputs: [
                "z" => "(cos(pi / 1.7) + x^3) / (exp(-x) + c), pi = 3.14, x = 3.18, c = 1.87",
                "t" => "(5.3 + z^2)^(1/5)",
            ],
            implementation: example_program
        )?;

        register_formula!(
            self,
            selector: 2,
            group: FormulaGroup::Expressions,
            title: "20+ expressions",
            inputs: [],
            outputs: [
                "T" => "z^2 / (1 + sin(z^2)) - sqrt(x + 2)",
                "a" => "sqrt(x) + exp(y) - ln(z)",
                "b" => "|x - y| + z^3",
                "c" => "sin(x) * cos(y) / tan(z)",
                "d" => "atan(x) + log10(y) - ceil(z)",
                "e" => "floor(x) + y^2 * exp(-z)",
                "f" => "sqrt(x^2 + y^2)",
                "g" => "(x + y) / (1 + sin(z))",
                "h" => "ln(x + y) + atan(x / y)",
                "i" => "exp(x) / (1 + y^2)",
                "j" => "cos(x) + sin(y) * sqrt(z)",
                "k" => "x^3 + ln(y) - |z|",
                "l" => "(sin(x) + cos(y)) / (1 + exp(-z))",
                "m" => "sqrt(x * y) + atan(z) / ln(x + 1)",
                "n" => "exp(x + y) * sin(z) / (1 + x^2)",
                "o" => "log10(x * y) + z^2 - tan(x)",
                "p" => "ceil(x) + floor(y) * sqrt(z + 1)",
                "q" => "|x - y| + exp(z) / cos(x)",
                "r" => "x^2 * cos(y) + ln(z + 1) / sin(x)",
                "s" => "atan(x + y) + sqrt(z) / (1 + |x - y|)",
                "t" => "(x + y + z) / sqrt(1 + x^2 + y^2)",
                "u" => "exp(-x) * sin(y) + log10(z) - atan(x / y)",
            ],
            implementation: expression_showcase
        )
    }
}
