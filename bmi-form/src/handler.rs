use bmi_model::Category;
use log::{info, warn};

use crate::{
    form::{self, RawForm, Submission, ValidationErrors},
    view::FormView,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub name: String,
    pub bmi: f64,
    pub category: Category,
}

impl Evaluation {
    pub fn message(&self) -> String {
        format!(
            "{}, your BMI is {:.2}. This is considered: {}.",
            self.name, self.bmi, self.category
        )
    }
}

impl From<Submission> for Evaluation {
    fn from(submission: Submission) -> Self {
        Self {
            bmi: submission.measurement.bmi(),
            category: submission.measurement.category(),
            name: submission.name,
        }
    }
}

/// Wires form submissions to the evaluator and writes the outcome to a view.
pub struct SubmitHandler {
    view: Box<dyn FormView>,
}

impl SubmitHandler {
    pub fn new(view: Box<dyn FormView>) -> Self {
        Self { view }
    }

    pub fn submit(&mut self, form: &RawForm) -> Option<Evaluation> {
        self.view.clear();

        let submission = match form::validate(form) {
            Ok(submission) => submission,
            Err(ValidationErrors(errors)) => {
                warn!("Form rejected with {} invalid field(s)", errors.len());
                for error in errors {
                    self.view.show_field_error(error.field, error.message);
                }
                return None;
            }
        };

        let evaluation = Evaluation::from(submission);

        self.view.show_result(&evaluation.message());
        info!("BMI for {} is {:.2}.", evaluation.name, evaluation.bmi);
        Some(evaluation)
    }
}

#[cfg(test)]
mod tests {
    use bmi_model::Measurement;

    use super::*;

    #[test]
    fn evaluation_from_submission() {
        let test_data = [
            (70.0, 1.75, Category::NormalWeight),
            (100.0, 1.70, Category::Obesity),
            (85.0, 1.75, Category::Overweight),
        ];

        for (i, (weight, height, expected_category)) in test_data.into_iter().enumerate() {
            let measurement = Measurement::new(weight, height).unwrap();
            let evaluation = Evaluation::from(Submission {
                name: "Ada".to_owned(),
                measurement,
            });
            assert_eq!(evaluation.name, "Ada", "Test case #{}", i);
            assert_eq!(evaluation.bmi, weight / (height * height), "Test case #{}", i);
            assert_eq!(evaluation.category, expected_category, "Test case #{}", i);
        }
    }

    #[test]
    fn message_rounds_to_two_decimals() {
        let test_data = [
            (
                Evaluation {
                    name: "Ada".to_owned(),
                    bmi: 22.857142857142858,
                    category: Category::NormalWeight,
                },
                "Ada, your BMI is 22.86. This is considered: Normal Weight.",
            ),
            (
                Evaluation {
                    name: "Bo".to_owned(),
                    bmi: 34.602076124567475,
                    category: Category::Obesity,
                },
                "Bo, your BMI is 34.60. This is considered: Obesity.",
            ),
            (
                Evaluation {
                    name: "Cy".to_owned(),
                    bmi: 17.0,
                    category: Category::Underweight,
                },
                "Cy, your BMI is 17.00. This is considered: Underweight.",
            ),
        ];

        for (i, (evaluation, expected_output)) in test_data.into_iter().enumerate() {
            assert_eq!(evaluation.message(), expected_output, "Test case #{}", i);
        }
    }
}
