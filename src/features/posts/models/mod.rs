pub mod draft;
pub mod errors;

pub use draft::{Building, Category, ImageUpload, ReportDraft, ReportKind};
pub use errors::{FieldErrors, FormField};
