use strum::Display;

use crate::bmi::{self, Category};

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Weight,
    Height,
}

#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(Field),
}

/// Weight in kilograms and height in meters, both strictly positive and finite.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Measurement {
    weight: f64,
    height: f64,
}

impl Measurement {
    /// Fails with one error per invalid value, weight first.
    pub fn new(weight: f64, height: f64) -> Result<Self, Vec<Error>> {
        match (check(Field::Weight, weight), check(Field::Height, height)) {
            (Ok(weight), Ok(height)) => Ok(Self { weight, height }),
            (weight, height) => Err([weight.err(), height.err()]
                .into_iter()
                .flatten()
                .collect()),
        }
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn bmi(&self) -> f64 {
        bmi::compute(self.weight, self.height)
    }

    pub fn category(&self) -> Category {
        bmi::classify(self.bmi())
    }
}

fn check(field: Field, value: f64) -> Result<f64, Error> {
    // NaN fails both tests.
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidInput(field))
    }
}
