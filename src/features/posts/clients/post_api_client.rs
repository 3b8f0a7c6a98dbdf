use async_trait::async_trait;
use reqwest::multipart;
use validator::Validate;

use crate::core::config::ApiConfig;
use crate::core::error::{AppError, Result};
use crate::features::posts::dtos::{CreatePostDto, SubmitErrorResponseDto, UploadResponseDto};
use crate::features::posts::models::ImageUpload;

/// Capability interface over the upload/post REST API.
///
/// The form controller only talks to this trait; tests substitute an
/// in-memory fake, production uses [`PostApiClient`].
#[async_trait]
pub trait ReportGateway: Send + Sync {
    /// Upload one file, returning the remote URL on success
    async fn upload_file(&self, file: ImageUpload) -> Result<String>;

    /// Submit a composed report
    async fn submit_report(&self, dto: &CreatePostDto) -> Result<()>;
}

/// Stateless client for the Lost & Found API
pub struct PostApiClient {
    config: ApiConfig,
    http_client: reqwest::Client,
}

impl PostApiClient {
    pub fn new(config: ApiConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .expect("Failed to build HTTP client");

        Self {
            config,
            http_client,
        }
    }
}

#[async_trait]
impl ReportGateway for PostApiClient {
    /// `POST /api/upload`, multipart body with a single `file` field
    async fn upload_file(&self, file: ImageUpload) -> Result<String> {
        let url = self.config.upload_url();

        tracing::debug!(
            "Uploading {} ({}, {} bytes) to {}",
            file.filename,
            file.content_type,
            file.bytes.len(),
            url
        );

        let part = multipart::Part::bytes(file.bytes)
            .file_name(file.filename.clone())
            .mime_str(&file.content_type)
            .map_err(|e| AppError::Upload(format!("Invalid media type: {}", e)))?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .http_client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Upload request failed: {}", e);
                AppError::ExternalService(format!("Upload request failed: {}", e))
            })?;

        let status = response.status();
        let body = response
            .json::<UploadResponseDto>()
            .await
            .map_err(|e| {
                tracing::error!("Failed to parse upload response: {}", e);
                AppError::ExternalService(format!("Failed to parse upload response: {}", e))
            })?;

        match body.url {
            Some(url) if status.is_success() => {
                tracing::info!("Uploaded {} -> {}", file.filename, url);
                Ok(url)
            }
            _ => {
                let message = body.error.unwrap_or_else(|| "Upload failed".to_string());
                tracing::warn!("Upload rejected: HTTP {} - {}", status, message);
                Err(AppError::Upload(message))
            }
        }
    }

    /// `POST /api/posts` with the JSON payload
    async fn submit_report(&self, dto: &CreatePostDto) -> Result<()> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let url = self.config.posts_url();

        tracing::debug!("Submitting {} report to {}", dto.kind.as_str(), url);

        let response = self
            .http_client
            .post(&url)
            .json(dto)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Submit request failed: {}", e);
                AppError::ExternalService(format!("Submit request failed: {}", e))
            })?;

        let status = response.status();

        if status.is_success() {
            tracing::info!("Report submitted: {}", dto.title);
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let parsed: SubmitErrorResponseDto = serde_json::from_str(&body).unwrap_or_default();

        if let Some(errors) = parsed.errors {
            tracing::warn!("Submission rejected with {} field errors", errors.len());
            return Err(AppError::RemoteValidation(errors));
        }

        let message = parsed
            .global_message()
            .map(str::to_string)
            .unwrap_or_else(|| format!("Server error: HTTP {}", status));
        tracing::error!("Submission failed: HTTP {} - {}", status, message);
        Err(AppError::Remote(message))
    }
}
