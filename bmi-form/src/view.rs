use bmi_model::Field;

/// Output side of the BMI form: per-field error slots and a result area.
#[mockall::automock]
pub trait FormView {
    /// Empties every error slot and the result area.
    fn clear(&mut self);
    fn show_field_error(&mut self, field: Field, message: &str);
    fn show_result(&mut self, text: &str);
}

#[mockall::automock]
pub trait ListView {
    fn append_item(&mut self, text: &str);
}
