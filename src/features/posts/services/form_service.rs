use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::future::try_join_all;
use tracing::{debug, info, warn};

use crate::core::error::{AppError, Result};
use crate::features::posts::clients::ReportGateway;
use crate::features::posts::dtos::{is_image_type, CreatePostDto};
use crate::features::posts::events::{PostEvent, PostEvents};
use crate::features::posts::models::{
    Building, Category, FieldErrors, FormField, ImageUpload, ReportDraft, ReportKind,
};
use crate::features::posts::services::validation::validate_draft;
use crate::shared::constants::MAX_IMAGE_SIZE;

/// Which screen of the form is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStep {
    #[default]
    Editing,
    Success,
}

/// Why a picked file was skipped before upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    TooLarge,
    NotAnImage,
}

/// Non-blocking per-file warning; the rest of the batch still uploads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadWarning {
    pub filename: String,
    pub reason: SkipReason,
}

impl UploadWarning {
    pub fn message(&self) -> String {
        match self.reason {
            SkipReason::TooLarge => format!(
                "File \"{}\" is too large, the maximum is {} MB.",
                self.filename,
                MAX_IMAGE_SIZE / 1024 / 1024
            ),
            SkipReason::NotAnImage => {
                format!("File \"{}\" is not an image.", self.filename)
            }
        }
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Server accepted the post; the form moved to the success screen
    Accepted,
    /// Local or remote field errors; the view should scroll to `first_field`
    Invalid { first_field: Option<String> },
    /// Global failure, not attached to any field; the draft is unchanged
    Failed { message: String },
}

/// Stateful controller for the "report lost/found item" form.
///
/// Owns the draft for its lifetime and composes the pure validation pass
/// with a [`ReportGateway`]. Visibility of the surrounding modal belongs to
/// the embedding view; a successful submission is announced on the
/// [`PostEvents`] bus so listings can refresh.
pub struct PostForm {
    gateway: Arc<dyn ReportGateway>,
    events: PostEvents,
    draft: ReportDraft,
    errors: FieldErrors,
    uploading_images: bool,
    submitting: bool,
    step: FormStep,
}

impl PostForm {
    pub fn new(gateway: Arc<dyn ReportGateway>, events: PostEvents) -> Self {
        Self {
            gateway,
            events,
            draft: ReportDraft::default(),
            errors: FieldErrors::new(),
            uploading_images: false,
            submitting: false,
            step: FormStep::Editing,
        }
    }

    pub fn draft(&self) -> &ReportDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn step(&self) -> FormStep {
        self.step
    }

    /// True while an upload batch is in flight; submit stays disabled
    pub fn is_uploading(&self) -> bool {
        self.uploading_images
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    // Field setters. Each clears only its own recorded error; no
    // re-validation happens until the next submit.

    pub fn set_kind(&mut self, kind: ReportKind) {
        self.draft.kind = kind;
        self.errors.clear(FormField::Kind);
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
        self.errors.clear(FormField::Title);
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.draft.category = category;
        self.errors.clear(FormField::CategoryId);
    }

    pub fn set_event_date(&mut self, event_date: Option<DateTime<Utc>>) {
        self.draft.event_date = event_date;
        self.errors.clear(FormField::EventDate);
    }

    pub fn set_building(&mut self, building: Building) {
        self.draft.building = building;
        self.errors.clear(FormField::LocationBuilding);
    }

    pub fn set_location_detail(&mut self, detail: impl Into<String>) {
        self.draft.location_detail = detail.into();
        self.errors.clear(FormField::LocationDetail);
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
        self.errors.clear(FormField::Description);
    }

    pub fn set_contact_phone(&mut self, contact_phone: impl Into<String>) {
        self.draft.contact_phone = contact_phone.into();
        self.errors.clear(FormField::ContactPhone);
    }

    /// Upload a batch of picked files.
    ///
    /// Oversized or non-image files are skipped with a warning and do not
    /// block the rest. Accepted files upload in parallel; the batch is
    /// all-or-nothing, so on any failure no URL is added to the draft. On
    /// success the new URLs are appended in request order.
    pub async fn upload_images(&mut self, files: Vec<ImageUpload>) -> Result<Vec<UploadWarning>> {
        if files.is_empty() {
            return Ok(Vec::new());
        }

        let mut warnings = Vec::new();
        let mut accepted = Vec::new();
        for file in files {
            if file.size() > MAX_IMAGE_SIZE {
                warn!("Skipping oversized file: {} ({} bytes)", file.filename, file.size());
                warnings.push(UploadWarning {
                    filename: file.filename,
                    reason: SkipReason::TooLarge,
                });
            } else if !is_image_type(&file.content_type) {
                warn!(
                    "Skipping non-image file: {} ({})",
                    file.filename, file.content_type
                );
                warnings.push(UploadWarning {
                    filename: file.filename,
                    reason: SkipReason::NotAnImage,
                });
            } else {
                accepted.push(file);
            }
        }

        if accepted.is_empty() {
            return Ok(warnings);
        }

        debug!("Uploading batch of {} images", accepted.len());
        self.uploading_images = true;

        let gateway = Arc::clone(&self.gateway);
        let uploads = accepted.into_iter().map(|file| {
            let gateway = Arc::clone(&gateway);
            async move { gateway.upload_file(file).await }
        });
        let result = try_join_all(uploads).await;

        // Released on both outcomes so the UI can never get stuck busy
        self.uploading_images = false;

        match result {
            Ok(urls) => {
                info!("Uploaded {} images", urls.len());
                self.draft.images.extend(urls);
                Ok(warnings)
            }
            Err(e) => {
                warn!("Upload batch failed: {}", e);
                Err(e)
            }
        }
    }

    /// Remove the image at `index`; out-of-range indexes are a no-op
    pub fn remove_image(&mut self, index: usize) {
        if index < self.draft.images.len() {
            self.draft.images.remove(index);
        } else {
            debug!("remove_image: index {} out of range, ignoring", index);
        }
    }

    /// Run the pure validation pass against the current draft
    pub fn validate(&self) -> FieldErrors {
        validate_draft(&self.draft, Utc::now())
    }

    /// Validate and submit the draft.
    ///
    /// On local validation failure the form stays in editing with the error
    /// set populated. On a server field-error response the remote messages
    /// are merged into the same set. Only a 2xx moves the form to
    /// [`FormStep::Success`] and publishes [`PostEvent::Created`].
    pub async fn submit(&mut self) -> SubmitOutcome {
        let errors = self.validate();
        if !errors.is_empty() {
            debug!("Submit blocked by {} validation errors", errors.len());
            self.errors = errors;
            return SubmitOutcome::Invalid {
                first_field: self.errors.first_field().map(str::to_string),
            };
        }

        self.submitting = true;
        let dto = CreatePostDto::from_draft(&self.draft);
        let result = self.gateway.submit_report(&dto).await;
        self.submitting = false;

        match result {
            Ok(()) => {
                info!("Post accepted: {}", self.draft.title);
                self.errors = FieldErrors::new();
                self.step = FormStep::Success;
                self.events.publish(PostEvent::Created);
                SubmitOutcome::Accepted
            }
            Err(AppError::RemoteValidation(remote)) => {
                warn!("Server rejected post with {} field errors", remote.len());
                self.errors.merge_remote(&remote);
                SubmitOutcome::Invalid {
                    first_field: self.errors.first_field().map(str::to_string),
                }
            }
            Err(AppError::Remote(message))
            | Err(AppError::Upload(message))
            | Err(AppError::Validation(message))
            | Err(AppError::ExternalService(message)) => {
                warn!("Submit failed: {}", message);
                SubmitOutcome::Failed { message }
            }
        }
    }

    /// Clear the draft back to its empty defaults and return to editing.
    /// Intended to run after the user acknowledges the success screen; the
    /// embedding view closes the modal.
    pub fn reset(&mut self) {
        debug!("Resetting form");
        self.draft = ReportDraft::default();
        self.errors = FieldErrors::new();
        self.step = FormStep::Editing;
    }
}
