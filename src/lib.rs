//! Headless client for the Lost & Found post submission flow.
//!
//! Separates the original form's concerns into a typed draft model, a pure
//! validation pass, a stateless REST gateway ([`PostApiClient`] behind the
//! [`ReportGateway`] trait), and the [`PostForm`] controller that composes
//! them. A successful submission is announced on a [`PostEvents`] bus so
//! listing views can refresh without a page reload.

pub mod core;
pub mod features;
pub mod shared;

pub use crate::core::config::{ApiConfig, ClientConfig};
pub use crate::core::error::{AppError, Result};
pub use crate::features::posts::clients::{PostApiClient, ReportGateway};
pub use crate::features::posts::dtos::{CreatePostDto, LocationDto};
pub use crate::features::posts::events::{PostEvent, PostEvents};
pub use crate::features::posts::models::{
    Building, Category, FieldErrors, FormField, ImageUpload, ReportDraft, ReportKind,
};
pub use crate::features::posts::services::{
    validate_draft, FormStep, PostForm, SkipReason, SubmitOutcome, UploadWarning,
};
