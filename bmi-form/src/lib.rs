pub mod form;
pub mod handler;
pub mod principles;
pub mod view;

pub use form::{validate, FieldError, RawForm, Submission, ValidationErrors};
pub use handler::{Evaluation, SubmitHandler};
pub use view::{FormView, ListView};
