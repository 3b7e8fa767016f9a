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


//! Registry-wide checks over the full formula catalogue

use super::*;
use crate::core::error_code::{LF0001, LF0003, LF0051};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn sample_inputs(arity: usize) -> Vec<f64> {
    [0.7, 1.3, 2.1][..arity].to_vec()
}

#[test]
fn test_standard_registry_has_every_menu_entry() {
    let registry = create_standard_registry();

    assert_eq!(registry.len(), 39);
    assert_eq!(registry.max_selector(), 39);
    for selector in 1..=39 {
        assert!(registry.contains(selector), "missing selector {selector}");
    }
    assert!(!registry.contains(0));
}

#[test]
fn test_exercise_numbers_follow_selectors() {
    let registry = FormulaRegistry::default();

    for exercise in 1..=37 {
        let metadata = registry.get_by_exercise(exercise).unwrap();
        assert_eq!(metadata.selector, exercise + 2);
    }
    assert_eq!(registry.get_formula_metadata(1).unwrap().exercise, None);
    assert_eq!(registry.get_formula_metadata(2).unwrap().exercise, None);
}

#[test]
fn test_every_formula_returns_declared_outputs() {
    let registry = FormulaRegistry::default();

    for metadata in registry.list_formulas() {
        let inputs = sample_inputs(metadata.arity());
        let evaluation = registry.evaluate(metadata.selector, &inputs).unwrap();
        assert_eq!(
            evaluation.outputs.len(),
            metadata.outputs.len(),
            "selector {}",
            metadata.selector
        );
        assert_eq!(evaluation.inputs.len(), metadata.arity());
    }
}

#[test]
fn test_evaluation_is_deterministic() {
    let registry = FormulaRegistry::default();

    for metadata in registry.list_formulas() {
        let inputs = sample_inputs(metadata.arity());
        let first = registry.evaluate(metadata.selector, &inputs).unwrap();
        let second = registry.evaluate(metadata.selector, &inputs).unwrap();

        let bits = |values: Vec<f64>| values.into_iter().map(f64::to_bits).collect::<Vec<_>>();
        assert_eq!(bits(first.values()), bits(second.values()));
    }
}

#[test]
fn test_list_is_in_selector_order() {
    let registry = FormulaRegistry::default();
    let selectors: Vec<u32> = registry.list_formulas().iter().map(|m| m.selector).collect();
    assert_eq!(selectors, (1..=39).collect::<Vec<_>>());
}

#[rstest]
#[case(FormulaGroup::Example, 1)]
#[case(FormulaGroup::Expressions, 1)]
#[case(FormulaGroup::AB, 4)]
#[case(FormulaGroup::Z, 3)]
#[case(FormulaGroup::T, 3)]
#[case(FormulaGroup::Y, 4)]
#[case(FormulaGroup::S, 4)]
#[case(FormulaGroup::R, 4)]
#[case(FormulaGroup::Q, 4)]
#[case(FormulaGroup::W, 4)]
#[case(FormulaGroup::P, 4)]
#[case(FormulaGroup::V, 3)]
fn test_group_sizes(#[case] group: FormulaGroup, #[case] expected: usize) {
    let registry = FormulaRegistry::default();
    let formulas = registry.list_formulas_by_group(group);
    assert_eq!(formulas.len(), expected);
    assert!(formulas.iter().all(|m| m.group == group));
}

#[rstest]
#[case(0)]
#[case(40)]
#[case(999)]
fn test_unknown_selector(#[case] selector: u32) {
    let registry = FormulaRegistry::default();
    let err = registry.evaluate(selector, &[]).unwrap_err();
    assert_eq!(err.error_code(), &LF0001);
}

#[test]
fn test_unknown_exercise() {
    let registry = FormulaRegistry::default();
    let err = registry.evaluate_exercise(38, &[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err.error_code(), &LF0001);
}

#[test]
fn test_arity_mismatch() {
    let registry = FormulaRegistry::default();

    let err = registry.evaluate(7, &[1.0]).unwrap_err();
    assert_eq!(err.error_code(), &LF0051);
    assert_eq!(err.message(), "Formula 7 expects 2 input value(s), got 1");

    let err = registry.evaluate_exercise(11, &[1.0, 2.0]).unwrap_err();
    assert_eq!(err.error_code(), &LF0051);
}

#[test]
fn test_prompts_name_the_inputs() {
    let registry = FormulaRegistry::default();
    let prompt = |selector| registry.get_formula_metadata(selector).unwrap().prompt();

    assert_eq!(prompt(1), None);
    assert_eq!(prompt(3).as_deref(), Some("Enter x, y, z: "));
    assert_eq!(prompt(21).as_deref(), Some("Enter x, y: "));
    assert_eq!(prompt(13).as_deref(), Some("Enter x: "));
}

#[rstest]
#[case("ab", FormulaGroup::AB)]
#[case("AB", FormulaGroup::AB)]
#[case(" v ", FormulaGroup::V)]
#[case("expressions", FormulaGroup::Expressions)]
fn test_group_from_str(#[case] input: &str, #[case] expected: FormulaGroup) {
    assert_eq!(input.parse::<FormulaGroup>().unwrap(), expected);
}

#[test]
fn test_group_from_str_rejects_unknown() {
    let err = "x".parse::<FormulaGroup>().unwrap_err();
    assert_eq!(err.error_code(), &LF0003);
    assert_eq!(
        err.message(),
        "Unknown formula group: x (expected one of example, expressions, ab, z, t, y, s, r, q, w, p, v)"
    );
    assert!(err.help().contains("expressions"));
}

#[test]
fn test_group_display_round_trips() {
    for group in FormulaGroup::ALL {
        assert_eq!(group.to_string().parse::<FormulaGroup>().unwrap(), group);
    }
}

#[test]
fn test_registry_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FormulaRegistry>();
}
