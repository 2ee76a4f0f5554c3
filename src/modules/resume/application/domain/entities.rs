use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The single stored resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    /// Server-generated, `resume_<uuid>.pdf`
    pub filename: String,
    pub content: Vec<u8>,
    pub uploaded_at: DateTime<Utc>,
}

impl ResumeFile {
    pub fn info(&self) -> ResumeInfo {
        ResumeInfo {
            filename: self.filename.clone(),
            size_bytes: self.content.len(),
            uploaded_at: self.uploaded_at,
        }
    }
}

/// Metadata returned after an upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResumeInfo {
    #[schema(example = "resume_3f2a9c4e5b6d4e0f8a1b2c3d4e5f6a7b.pdf")]
    pub filename: String,
    pub size_bytes: usize,
    pub uploaded_at: DateTime<Utc>,
}
