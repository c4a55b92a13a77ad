use std::io::{self, Stderr, Stdout, Write};

use bmi_form::{Evaluation, FormView, ListView, ValidationErrors};
use bmi_model::Field;
use log::error;

/// Renders form output as lines of text: results to `out`, field errors to `err`.
pub struct TerminalView<O: Write, E: Write> {
    out: O,
    err: E,
}

impl TerminalView<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> TerminalView<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    /// One line for a numbered form of a batch: the result on `out`, or all
    /// field messages together on `err`.
    pub fn report(
        &mut self,
        index: usize,
        outcome: &Result<Evaluation, ValidationErrors>,
    ) -> io::Result<()> {
        match outcome {
            Ok(evaluation) => writeln!(self.out, "#{}: {}", index, evaluation.message()),
            Err(errors) => writeln!(self.err, "#{}: {}", index, errors),
        }
    }
}

impl<O: Write, E: Write> FormView for TerminalView<O, E> {
    // Terminal output cannot be taken back.
    fn clear(&mut self) {}

    fn show_field_error(&mut self, field: Field, message: &str) {
        if let Err(e) = writeln!(self.err, "{}: {}", field, message) {
            error!("Failed to write field error: {}", e);
        }
    }

    fn show_result(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            error!("Failed to write result: {}", e);
        }
    }
}

impl<O: Write, E: Write> ListView for TerminalView<O, E> {
    fn append_item(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "- {}", text) {
            error!("Failed to write list item: {}", e);
        }
    }
}
