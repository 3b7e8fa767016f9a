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

//! Formula builder pattern for easy registration

use super::{FormulaFn, FormulaGroup, FormulaMetadata, FormulaRegistry, OutputMetadata};
use crate::core::Result;

pub struct FormulaBuilder {
    selector: u32,
    exercise: Option<u32>,
    group: FormulaGroup,
    title: String,
    variables: Vec<String>,
    outputs: Vec<OutputMetadata>,
}

impl FormulaBuilder {
    pub fn new(selector: u32, group: FormulaGroup) -> Self {
        Self {
            selector,
            exercise: None,
            group,
            title: String::new(),
            variables: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn exercise(mut self, exercise: u32) -> Self {
        self.exercise = Some(exercise);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn variable(mut self, name: impl Into<String>) -> Self {
        self.variables.push(name.into());
        self
    }

    pub fn output(mut self, name: impl Into<String>, expression: impl Into<String>) -> Self {
        self.outputs.push(OutputMetadata {
            name: name.into(),
            expression: expression.into(),
        });
        self
    }

    pub fn build(self) -> FormulaMetadata {
        FormulaMetadata {
            selector: self.selector,
            exercise: self.exercise,
            group: self.group,
            title: self.title,
            variables: self.variables,
            outputs: self.outputs,
        }
    }

    pub fn register(self, registry: &mut FormulaRegistry, function: FormulaFn) -> Result<()> {
        registry.register_formula(function, self.build())
    }
}

/// Convenience macro for formula registration
#[macro_export]
macro_rules! register_formula {
    (
        @finish $registry:expr, $builder:ident,
        $title:literal, [$($var:literal),*], [$($out_name:literal => $out_expr:literal),+], $impl:expr
    ) => {
        {
            let mut builder = $builder.title($title);

            $(
                builder = builder.variable($var);
            )*

            $(
                builder = builder.output($out_name, $out_expr);
            )+

            builder.register($registry, $impl)
        }
    };

    (
        $registry:expr,
        selector: $selector:literal,
        exercise: $exercise:literal,
        group: $group:expr,
        title: $title:literal,
        inputs: [$($var:literal),*],
        outputs: [$($out_name:literal => $out_expr:literal),+ $(,)?],
        implementation: $impl:expr
    ) => {
        {
            let builder = $crate::registry::builder::FormulaBuilder::new($selector, $group)
                .exercise($exercise);

            $crate::register_formula!(
                @finish $registry, builder,
                $title, [$($var),*], [$($out_name => $out_expr),+], $impl
            )
        }
    };

    (
        $registry:expr,
        selector: $selector:literal,
        group: $group:expr,
        title: $title:literal,
        inputs: [$($var:literal),*],
        outputs: [$($out_name:literal => $out_expr:literal),+ $(,)?],
        implementation: $impl:expr
    ) => {
        {
            let builder = $crate::registry::builder::FormulaBuilder::new($selector, $group);

            $crate::register_formula!(
                @finish $registry, builder,
                $title, [$($var),*], [$($out_name => $out_expr),+], $impl
            )
        }
    };
}
