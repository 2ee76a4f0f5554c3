use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::resume::application::{
    domain::{ResumeFile, ResumeInfo, UploadPolicy},
    ports::{
        incoming::use_cases::{
            DownloadResumeError, DownloadResumeUseCase, UploadResumeCommand, UploadResumeError,
            UploadResumeUseCase,
        },
        outgoing::ResumeStore,
    },
};

pub struct ResumeService<S>
where
    S: ResumeStore,
{
    store: S,
    policy: UploadPolicy,
}

impl<S> ResumeService<S>
where
    S: ResumeStore,
{
    pub fn new(store: S, policy: UploadPolicy) -> Self {
        Self { store, policy }
    }
}

fn generate_filename() -> String {
    format!("resume_{}.pdf", Uuid::new_v4().simple())
}

#[async_trait]
impl<S> UploadResumeUseCase for ResumeService<S>
where
    S: ResumeStore,
{
    async fn execute(&self, command: UploadResumeCommand) -> Result<ResumeInfo, UploadResumeError> {
        self.policy.check(
            command.original_name.as_deref(),
            command.content_type.as_deref(),
            command.content.len(),
        )?;

        let file = ResumeFile {
            filename: generate_filename(),
            content: command.content,
            uploaded_at: Utc::now(),
        };
        let info = file.info();

        self.store
            .replace(file)
            .await
            .map_err(|e| UploadResumeError::StorageError(e.to_string()))?;

        info!(filename = %info.filename, size = info.size_bytes, "Resume replaced");
        Ok(info)
    }

    fn max_file_size_bytes(&self) -> usize {
        self.policy.max_file_size_bytes
    }
}

#[async_trait]
impl<S> DownloadResumeUseCase for ResumeService<S>
where
    S: ResumeStore,
{
    async fn execute(&self) -> Result<ResumeFile, DownloadResumeError> {
        self.store
            .current()
            .await
            .map_err(|e| DownloadResumeError::StorageError(e.to_string()))?
            .ok_or(DownloadResumeError::NotAvailable)
    }
}
