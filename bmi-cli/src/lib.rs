pub mod args;
pub mod batch;
pub mod terminal;

use std::io;

use bmi_form::{Evaluation, RawForm, SubmitHandler};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("form rejected")]
    FormRejected,
    #[error("{rejected} of {total} forms rejected")]
    BatchRejected { rejected: usize, total: usize },
    #[error("invalid forms file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot write output: {0}")]
    Io(#[from] io::Error),
}

/// Submits a single form; a rejected form is an error so the process exits non-zero.
pub fn evaluate(handler: &mut SubmitHandler, form: &RawForm) -> Result<Evaluation, Error> {
    handler.submit(form).ok_or(Error::FormRejected)
}

#[cfg(test)]
mod tests {
    use bmi_model::Category;

    use super::*;
    use crate::terminal::TerminalView;

    #[test]
    fn evaluate_rejected_form_is_an_error() {
        let mut handler = SubmitHandler::new(Box::new(TerminalView::new(Vec::new(), Vec::new())));

        let result = evaluate(&mut handler, &RawForm::new("Ada", "0", "1.75"));
        assert!(matches!(result, Err(Error::FormRejected)));
        assert_eq!(Error::FormRejected.to_string(), "form rejected");
    }

    #[test]
    fn evaluate_valid_form() {
        let mut handler = SubmitHandler::new(Box::new(TerminalView::new(Vec::new(), Vec::new())));

        let evaluation = evaluate(&mut handler, &RawForm::new("Ada", "100", "1.70")).unwrap();
        assert_eq!(evaluation.category, Category::Obesity);
    }
}
