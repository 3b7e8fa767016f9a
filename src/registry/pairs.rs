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

//! Formulas producing the pair of results `a` and `b` from x, y, z

use smallvec::smallvec;

use super::{FormulaGroup, FormulaRegistry};
use crate::core::{Inputs, Result, Values};
use crate::register_formula;

impl FormulaRegistry {
    pub fn register_pair_formulas(&mut self) -> Result<()> {
        self.register_pair_variant_a()?;
        self.register_pair_variant_b()?;
        self.register_pair_variant_c()?;
        self.register_pair_variant_d()?;
        Ok(())
    }

    fn register_pair_variant_a(&mut self) -> Result<()> {
        register_formula!(
            self,
            selector: 3,
            exercise: 1,
            group: FormulaGroup::AB,
            title: "Compute a and b (a)",
            inputs: ["x", "y", "z"],
            outputs: [
                "a" => "(x^2 + y^2) / (1 + z^2)",
                "b" => "x * (atan(z) + exp(-(x + 3)))",
            ],
            implementation: |v: &Inputs| -> Values {
                let (x, y, z) = (v.x(), v.y(), v.z());
                smallvec![
                    (x.powf(2.0) + y.powf(2.0)) / (1.0 + z.powf(2.0)),
                    x * (z.atan() + (-(x + 3.0)).exp()),
                ]
            }
        )
    }

    fn register_pair_variant_b(&mut self) -> Result<()> {
        register_formula!(
            self,
            selector: 4,
            exercise: 2,
            group: FormulaGroup::AB,
            title: "Compute a and b (b)",
            inputs: ["x", "y", "z"],
            outputs: [
                "a" => "sin(x) + cos(y) / sqrt(z)",
                "b" => "ln(x) + y^2 - z",
            ],
            implementation: |v: &Inputs| -> Values {
                let (x, y, z) = (v.x(), v.y(), v.z());
                smallvec![
                    x.sin() + y.cos() / z.sqrt(),
                    x.ln() + y.powf(2.0) - z,
                ]
            }
        )
    }

    fn register_pair_variant_c(&mut self) -> Result<()> {
        register_formula!(
            self,
            selector: 5,
            exercise: 3,
            group: FormulaGroup::AB,
            title: "Compute a and b (c)",
            inputs: ["x", "y", "z"],
            outputs: [
                "a" => "exp(x) * sin(y) + tan(z)",
                "b" => "sqrt(x + y) / (1 + z^2)",
            ],
            implementation: |v: &Inputs| -> Values {
                let (x, y, z) = (v.x(), v.y(), v.z());
                smallvec![
                    x.exp() * y.sin() + z.tan(),
                    (x + y).sqrt() / (1.0 + z.powf(2.0)),
                ]
            }
        )
    }

    fn register_pair_variant_d(&mut self) -> Result<()> {
        register_formula!(
            self,
            selector: 6,
            exercise: 4,
            group: FormulaGroup::AB,
            title: "Compute a and b (d)",
            inputs: ["x", "y", "z"],
            outputs: [
                "a" => "x^3 + log10(y) - |z|",
                "b" => "(x + y) / (1 + sin(z))",
            ],
            implementation: |v: &Inputs| -> Values {
                let (x, y, z) = (v.x(), v.y(), v.z());
                smallvec![
                    x.powf(3.0) + y.log10() - z.abs(),
                    (x + y) / (1.0 + z.sin()),
                ]
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::registry::FormulaRegistry;
    use rstest::rstest;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_variant_a_unit_inputs() {
        let registry = FormulaRegistry::default();
        let evaluation = registry.evaluate_exercise(1, &[1.0, 1.0, 1.0]).unwrap();

        let a = evaluation.output("a").unwrap();
        let b = evaluation.output("b").unwrap();
        assert_eq!(a.fixed(4), "1.0000");
        assert_eq!(b.fixed(4), "0.8037");
        assert_close(b.value, 1.0_f64.atan() + (-4.0_f64).exp());
    }

    #[rstest]
    #[case(2, [1.0, 2.0, 4.0], 0.841_470_98 + (-0.416_146_84) / 2.0, 0.0 + 4.0 - 4.0)]
    #[case(3, [0.0, 0.0, 0.0], 0.0, 0.0)]
    #[case(4, [2.0, 10.0, -3.0], 8.0 + 1.0 - 3.0, 12.0 / (1.0 - 0.141_120_01))]
    fn test_pair_variants(
        #[case] exercise: u32,
        #[case] inputs: [f64; 3],
        #[case] a: f64,
        #[case] b: f64,
    ) {
        let registry = FormulaRegistry::default();
        let values = registry.evaluate_exercise(exercise, &inputs).unwrap().values();
        assert_close(values[0], a);
        assert_close(values[1], b);
    }

    #[test]
    fn test_variant_b_domain_errors_propagate() {
        let registry = FormulaRegistry::default();
        let values = registry
            .evaluate_exercise(2, &[-1.0, 0.0, -4.0])
            .unwrap()
            .values();
        assert!(values[0].is_nan());
        assert!(values[1].is_nan());
    }
}
