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


//! Integration tests for the linear-formulas binary

use predicates::prelude::*;

mod helpers;
use helpers::{fixture_path, formulas, formulas_with_config};

#[test]
fn test_menu_exits_on_zero() {
    formulas()
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0. Exit"))
        .stdout(predicate::str::contains(" = ").not());
}

#[test]
fn test_menu_exits_on_end_of_input() {
    formulas().write_stdin("").assert().success();
}

#[test]
fn test_menu_invalid_choice_loops() {
    formulas()
        .arg("menu")
        .write_stdin("999\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice!"));
}

#[test]
fn test_menu_evaluates_formula() {
    formulas()
        .arg("--quiet")
        .write_stdin("3\n1 1 1\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter x, y, z: "))
        .stdout(predicate::str::contains("a = 1.0000"))
        .stdout(predicate::str::contains("b = 0.8037"))
        .stdout(predicate::str::contains("1. Example program 1").not());
}

#[test]
fn test_menu_reports_malformed_value() {
    formulas()
        .write_stdin("13\nabc\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("LF0052"))
        .stdout(predicate::str::contains("y = ").not());
}

#[test]
fn test_eval_by_selector() {
    formulas()
        .args(["eval", "3", "1", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a = 1.0000"));
}

#[test]
fn test_eval_by_exercise() {
    formulas()
        .args(["eval", "--exercise", "5", "3", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("z = 4.7629"));
}

#[test]
fn test_eval_negative_values() {
    formulas()
        .args(["-o", "raw", "eval", "21", "-2", "3"])
        .assert()
        .success()
        .stdout("R = 8.5000\n");
}

#[test]
fn test_eval_json() {
    formulas()
        .args(["eval", "1", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"display\": \"16.6797\""));
}

#[test]
fn test_eval_unknown_selector_fails() {
    formulas()
        .args(["eval", "40"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("LF0001"));
}

#[test]
fn test_eval_wrong_arity_fails() {
    formulas()
        .args(["eval", "7", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("LF0051"));
}

#[test]
fn test_eval_bad_number_fails() {
    formulas()
        .args(["eval", "13", "twelve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("LF0052"));
}

#[test]
fn test_list_group() {
    formulas()
        .args(["list", "--group", "v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Formulas (3 found)"))
        .stdout(predicate::str::contains("Compute V (c)"));
}

#[test]
fn test_list_unknown_group_names_valid_groups() {
    formulas()
        .args(["list", "--group", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("LF0003"))
        .stderr(predicate::str::contains("expected one of example, expressions, ab"));
}

#[test]
fn test_malformed_rc_file_is_reported_and_skipped() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join(".formulasrc"), "output_format = \"xml\"\n").unwrap();

    assert_cmd::Command::cargo_bin("linear-formulas")
        .unwrap()
        .current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("RUST_LOG")
        .args(["--no-color", "-o", "raw", "eval", "7", "3", "4"])
        .assert()
        .success()
        .stdout("z = 4.7629\n")
        .stderr(predicate::str::contains("ignoring configuration file"))
        .stderr(predicate::str::contains(".formulasrc"));
}

#[test]
fn test_config_file_sets_format_and_precision() {
    formulas_with_config("raw.toml")
        .args(["eval", "7", "3", "4"])
        .assert()
        .success()
        .stdout("z = 4.76\n");
}

#[test]
fn test_missing_config_file_fails() {
    assert_cmd::Command::cargo_bin("linear-formulas")
        .unwrap()
        .arg("--config")
        .arg(fixture_path("does-not-exist.toml"))
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("LF0102"))
        .stderr(predicate::str::contains("Could not load configuration"));
}
