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

//! Core types shared by the registry and the CLI

pub mod error;
pub mod error_code;
pub mod format;
pub mod value;

pub use error::{FormulaError, Result};
pub use error_code::{ErrorCategory, ErrorCode};
pub use format::{DEFAULT_PRECISION, format_fixed, format_fixed_with, parse_value, parse_values};
pub use value::{Binding, Evaluation, Inputs, Output, Values};
