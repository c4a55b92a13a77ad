use strum::{Display, EnumIter, EnumString};

#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
pub enum Category {
    Underweight,
    #[strum(serialize = "Normal Weight")]
    NormalWeight,
    Overweight,
    Obesity,
}

/// Body mass index for weight in kilograms and height in meters.
///
/// Does not validate its input; a zero height produces a non-finite value.
pub fn compute(weight: f64, height: f64) -> f64 {
    weight / (height * height)
}

/// Maps a BMI value onto its category.
///
/// Obesity is the fallback for anything the other branches reject, which
/// includes NaN. Negative infinity is Underweight.
pub fn classify(bmi: f64) -> Category {
    if bmi < 18.5 {
        Category::Underweight
    } else if bmi <= 24.9 {
        Category::NormalWeight
    } else if bmi <= 29.9 {
        Category::Overweight
    } else {
        Category::Obesity
    }
}
