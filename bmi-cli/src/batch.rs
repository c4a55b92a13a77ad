use std::io::{Read, Write};

use bmi_form::{validate, Evaluation, RawForm};
use log::{info, warn};

use crate::{terminal::TerminalView, Error};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BatchSummary {
    pub total: usize,
    pub accepted: usize,
}

impl BatchSummary {
    pub fn rejected(&self) -> usize {
        self.total - self.accepted
    }

    pub fn check(&self) -> Result<(), Error> {
        match self.rejected() {
            0 => Ok(()),
            rejected => Err(Error::BatchRejected {
                rejected,
                total: self.total,
            }),
        }
    }
}

/// Evaluates a JSON array of forms, reporting one line per form numbered from 1.
pub fn evaluate_batch<R: Read, O: Write, E: Write>(
    reader: R,
    view: &mut TerminalView<O, E>,
) -> Result<BatchSummary, Error> {
    let forms: Vec<RawForm> = serde_json::from_reader(reader)?;
    info!("Loaded {} forms", forms.len());

    let mut accepted = 0;
    for (i, form) in forms.iter().enumerate() {
        let outcome = validate(form).map(Evaluation::from);
        match &outcome {
            Ok(evaluation) => {
                info!("BMI for {} is {:.2}.", evaluation.name, evaluation.bmi);
                accepted += 1;
            }
            Err(errors) => warn!("Form #{} rejected: {}", i + 1, errors),
        }
        view.report(i + 1, &outcome)?;
    }

    let summary = BatchSummary {
        total: forms.len(),
        accepted,
    };
    info!("Evaluated {} of {} forms", summary.accepted, summary.total);
    Ok(summary)
}
