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


//! Interactive numbered menu
//!
//! Input is read as whitespace-separated tokens, so a selector and its
//! values may share a line or span several. A malformed value drops the
//! rest of its line and the session returns to the menu.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anyhow::Result;
use log::debug;

use super::console_error;
use super::output::OutputFormatter;
use crate::core::parse_value;
use crate::registry::FormulaRegistry;

pub const INVALID_CHOICE: &str = "Invalid choice!";

/// What the menu loop does after one dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Whitespace tokenizer over a line-oriented reader
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, reading further lines as needed; `None` at end of input
    pub fn next_token(&mut self) -> crate::core::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Drop whatever is left of the current line
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }
}

pub struct MenuSession<'a, R, W> {
    registry: &'a FormulaRegistry,
    input: TokenReader<R>,
    output: W,
    formatter: Box<dyn OutputFormatter>,
    show_menu: bool,
}

impl<'a, R: BufRead, W: Write> MenuSession<'a, R, W> {
    pub fn new(
        registry: &'a FormulaRegistry,
        input: R,
        output: W,
        formatter: Box<dyn OutputFormatter>,
    ) -> Self {
        Self {
            registry,
            input: TokenReader::new(input),
            output,
            formatter,
            show_menu: true,
        }
    }

    /// Skip the numbered listing before each prompt
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.show_menu = !quiet;
        self
    }

    /// Run until the user picks 0 or input ends
    ///
    /// Console read and write failures surface as `FormulaError` (LF0101).
    pub fn run(&mut self) -> Result<()> {
        loop {
            if self.step().map_err(console_error)? == Flow::Quit {
                debug!("menu session finished");
                return Ok(());
            }
        }
    }

    /// Show the menu, read one choice and dispatch it
    pub fn step(&mut self) -> Result<Flow> {
        if self.show_menu {
            self.print_menu()?;
        }
        write!(self.output, "Choice: ")?;
        self.output.flush()?;

        let Some(token) = self.input.next_token()? else {
            writeln!(self.output)?;
            return Ok(Flow::Quit);
        };

        match token.parse::<u32>() {
            Ok(selector) => self.dispatch(selector),
            Err(_) => self.invalid_choice(),
        }
    }

    pub fn dispatch(&mut self, selector: u32) -> Result<Flow> {
        if selector == 0 {
            return Ok(Flow::Quit);
        }

        let registry = self.registry;
        let Some(metadata) = registry.get_formula_metadata(selector) else {
            return self.invalid_choice();
        };

        let mut values = Vec::with_capacity(metadata.arity());
        if let Some(prompt) = metadata.prompt() {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
        }
        for _ in 0..metadata.arity() {
            let Some(token) = self.input.next_token()? else {
                writeln!(self.output)?;
                return Ok(Flow::Quit);
            };
            match parse_value(&token) {
                Ok(value) => values.push(value),
                Err(error) => {
                    self.input.discard_line();
                    writeln!(self.output, "{}", self.formatter.format_error(&error))?;
                    return Ok(Flow::Continue);
                }
            }
        }

        let evaluation = registry.evaluate(selector, &values)?;
        writeln!(self.output, "{}", self.formatter.format_evaluation(&evaluation)?)?;
        Ok(Flow::Continue)
    }

    fn invalid_choice(&mut self) -> Result<Flow> {
        self.input.discard_line();
        writeln!(self.output, "{INVALID_CHOICE}")?;
        Ok(Flow::Continue)
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Menu:")?;
        writeln!(self.output, "0. Exit")?;
        for metadata in self.registry.list_formulas() {
            writeln!(self.output, "{}. {}", metadata.selector, metadata.title)?;
        }
        Ok(())
    }

    /// Hand back the output sink
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::output::RawFormatter;
    use crate::core::FormulaError;
    use crate::core::error_code::LF0101;
    use std::io;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn run_session(input: &str) -> String {
        let registry = FormulaRegistry::default();
        let mut session = MenuSession::new(
            &registry,
            Cursor::new(input.to_string()),
            Vec::new(),
            Box::new(RawFormatter::new(4)),
        )
        .quiet(true);
        session.run().unwrap();
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn test_token_reader_spans_lines() {
        let mut reader = TokenReader::new(Cursor::new("3 1\n\n  2 \n"));
        let tokens: Vec<String> = std::iter::from_fn(|| reader.next_token().unwrap()).collect();
        assert_eq!(tokens, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_token_reader_discards_rest_of_line() {
        let mut reader = TokenReader::new(Cursor::new("a b c\nd\n"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("a"));
        reader.discard_line();
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("d"));
        assert_eq!(reader.next_token().unwrap(), None);
    }

    #[test]
    fn test_zero_exits_without_computing() {
        assert_eq!(run_session("0\n"), "Choice: ");
    }

    #[test]
    fn test_end_of_input_exits() {
        assert_eq!(run_session(""), "Choice: \n");
    }

    #[test]
    fn test_invalid_choice_returns_to_menu() {
        let output = run_session("999\nabc\n-1\n0\n");
        assert_eq!(output.matches(INVALID_CHOICE).count(), 3);
        assert!(output.ends_with("Choice: "));
    }

    #[test]
    fn test_formula_prompts_and_prints_results() {
        let output = run_session("3\n1 1 1\n0\n");
        assert_eq!(
            output,
            "Choice: Enter x, y, z: a = 1.0000\nb = 0.8037\nChoice: "
        );
    }

    #[test]
    fn test_values_may_share_the_choice_line() {
        let output = run_session("7 3 4\n0\n");
        assert!(output.contains("z = 4.7629"));
    }

    #[test]
    fn test_demo_needs_no_input() {
        let output = run_session("1\n0\n");
        assert!(output.contains("z = 16.6797\nt = 3.0940"));
        assert!(!output.contains("Enter"));
    }

    #[test]
    fn test_malformed_value_skips_evaluation() {
        let output = run_session("7\n3 oops 5\n0\n");
        assert!(output.contains("error: LF0052: 'oops' is not a real number"));
        assert!(!output.contains("z = "));
        // "5" was on the discarded line, so the next choice read is 0
        assert!(!output.contains(INVALID_CHOICE));
    }

    #[test]
    fn test_non_finite_results_are_printed() {
        let output = run_session("16\n0\n0\n");
        assert!(output.contains("y = inf"));
    }

    #[test]
    fn test_menu_lists_every_entry() {
        let registry = FormulaRegistry::default();
        let mut session = MenuSession::new(
            &registry,
            Cursor::new("0\n"),
            Vec::new(),
            Box::new(RawFormatter::new(4)),
        );
        session.run().unwrap();
        let output = String::from_utf8(session.into_output()).unwrap();

        assert!(output.starts_with("\nMenu:\n0. Exit\n1. Example program 1\n"));
        assert!(output.contains("\n2. 20+ expressions\n"));
        assert!(output.contains("39. Compute V (c)\nChoice: "));
    }

    #[test]
    fn test_unreadable_input_is_an_io_error() {
        let registry = FormulaRegistry::default();
        let mut session = MenuSession::new(
            &registry,
            Cursor::new(vec![0xff, 0xfe, b'\n']),
            Vec::new(),
            Box::new(RawFormatter::new(4)),
        )
        .quiet(true);

        let error = session.run().unwrap_err();
        let formula_error = error.downcast_ref::<FormulaError>().unwrap();
        assert_eq!(formula_error.error_code(), &LF0101);
    }

    struct ClosedOutput;

    impl Write for ClosedOutput {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_closed_output_is_an_io_error() {
        let registry = FormulaRegistry::default();
        let mut session = MenuSession::new(
            &registry,
            Cursor::new("0\n"),
            ClosedOutput,
            Box::new(RawFormatter::new(4)),
        );

        let error = session.run().unwrap_err();
        let formula_error = error.downcast_ref::<FormulaError>().unwrap();
        assert_eq!(formula_error.error_code(), &LF0101);
        assert_eq!(formula_error.message(), "output closed");
    }
}
