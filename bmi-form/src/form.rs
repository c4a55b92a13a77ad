use std::sync::OnceLock;

use bmi_model::{Error, Field, Measurement};
use itertools::Itertools;
use log::debug;
use regex::Regex;
use serde::Deserialize;

/// Form fields exactly as they were typed.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawForm {
    pub name: String,
    pub weight: String,
    pub height: String,
}

impl RawForm {
    pub fn new(name: &str, weight: &str, height: &str) -> Self {
        Self {
            name: name.to_owned(),
            weight: weight.to_owned(),
            height: height.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub name: String,
    pub measurement: Measurement,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl From<Error> for FieldError {
    fn from(error: Error) -> Self {
        let Error::InvalidInput(field) = error;
        Self {
            field,
            message: message(field),
        }
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{}", .0.iter().map(|e| e.message).join(" "))]
pub struct ValidationErrors(pub Vec<FieldError>);

pub fn message(field: Field) -> &'static str {
    match field {
        Field::Name => "Name is required.",
        Field::Weight => "Please enter a valid weight (kg).",
        Field::Height => "Please enter a valid height (m).",
    }
}

/// Checks all fields and reports every one that is unusable, in form order.
pub fn validate(form: &RawForm) -> Result<Submission, ValidationErrors> {
    let name = form.name.trim();
    let name_error = name.is_empty().then_some(Error::InvalidInput(Field::Name));
    let measurement = Measurement::new(parse_number(&form.weight), parse_number(&form.height));

    match (name_error, measurement) {
        (None, Ok(measurement)) => {
            let submission = Submission {
                name: name.to_owned(),
                measurement,
            };
            debug!("Accepted form as {:?}", submission);
            Ok(submission)
        }
        (name_error, measurement) => {
            let errors: Vec<FieldError> = name_error
                .into_iter()
                .chain(measurement.err().into_iter().flatten())
                .map(FieldError::from)
                .collect();
            debug!("Rejected form {:?}: {:?}", form, errors);
            Err(ValidationErrors(errors))
        }
    }
}

/// Reads the longest numeric prefix after leading whitespace, so `"70kg"` is 70.
/// Text without one becomes NaN, which `Measurement::new` rejects.
fn parse_number(text: &str) -> f64 {
    static NUMBER_PREFIX: OnceLock<Regex> = OnceLock::new();
    let number_prefix = NUMBER_PREFIX.get_or_init(|| {
        Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?")
            .expect("number prefix pattern is valid")
    });

    number_prefix
        .find(text.trim_start())
        .and_then(|prefix| prefix.as_str().parse().ok())
        .unwrap_or(f64::NAN)
}
