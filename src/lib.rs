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


//! Console evaluator for a fixed catalogue of closed-form real formulas
//!
//! Every menu entry substitutes its inputs into one expression built from
//! the standard real functions and prints the result(s) with four
//! fractional digits. Out-of-domain arguments are not errors: they flow
//! through as NaN or infinity.

// Main implementation modules
pub mod cli;
pub mod core;
pub mod registry;

pub use crate::core::{
    Evaluation, FormulaError, Inputs, Output, Result, Values, format_fixed, parse_value,
};
pub use registry::{
    FormulaFn, FormulaGroup, FormulaMetadata, FormulaRegistry, create_standard_registry,
};
