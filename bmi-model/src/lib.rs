pub mod bmi;
pub mod measurement;

pub use bmi::{classify, compute, Category};
pub use measurement::{Error, Field, Measurement};
