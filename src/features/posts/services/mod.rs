pub mod form_service;
pub mod validation;

pub use form_service::{FormStep, PostForm, SkipReason, SubmitOutcome, UploadWarning};
pub use validation::validate_draft;
