use std::sync::Arc;

use tracing::{info, warn};

use super::require_token;
use crate::client::{
    api::{ResumeApi, ResumeDownload, ResumeUpload},
    auth_session::AuthSession,
    notice::Notice,
    scope::ScreenScope,
};
use crate::resume::application::domain::{ResumeInfo, UploadPolicy, UploadRejection};

/// Upload form for the single resume PDF.
pub struct ResumeScreen<A: ResumeApi> {
    api: Arc<A>,
    scope: ScreenScope,
    selected: Option<ResumeUpload>,
    uploading: bool,
    last_upload: Option<ResumeInfo>,
    notice: Option<Notice>,
}

impl<A: ResumeApi> ResumeScreen<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            scope: ScreenScope::new(),
            selected: None,
            uploading: false,
            last_upload: None,
            notice: None,
        }
    }

    /// Picks the file to upload. Anything but a non-empty PDF is refused here,
    /// before any request is made.
    pub fn select_file(&mut self, file: ResumeUpload) -> bool {
        let rejection = if file.content.is_empty() {
            Some(UploadRejection::Empty)
        } else if !UploadPolicy::is_pdf(Some(&file.filename), Some(&file.content_type)) {
            Some(UploadRejection::NotPdf)
        } else {
            None
        };

        match rejection {
            Some(rejection) => {
                self.selected = None;
                self.notice = Some(Notice::new(rejection.to_string()));
                false
            }
            None => {
                self.selected = Some(file);
                self.notice = None;
                true
            }
        }
    }

    pub fn selected(&self) -> Option<&ResumeUpload> {
        self.selected.as_ref()
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn last_upload(&self) -> Option<&ResumeInfo> {
        self.last_upload.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn scope(&self) -> &ScreenScope {
        &self.scope
    }

    pub async fn upload(&mut self, session: &AuthSession) {
        let token = match require_token(session) {
            Ok(token) => token,
            Err(notice) => {
                self.notice = Some(notice);
                return;
            }
        };
        let Some(file) = self.selected.as_ref() else {
            self.notice = Some(Notice::new("Please select a PDF file"));
            return;
        };

        self.uploading = true;
        let outcome = self.scope.run(self.api.upload_resume(file, token)).await;
        self.uploading = false;

        let Ok(result) = outcome else {
            return;
        };

        match result {
            Ok(stored) => {
                info!(filename = %stored.filename, "Resume uploaded");
                self.last_upload = Some(stored);
                self.selected = None;
                self.notice = Some(Notice::new("Resume uploaded successfully!"));
            }
            Err(e) => {
                warn!(error = %e, "Resume upload failed");
                self.notice = Some(Notice::from_error("Failed to upload resume", &e));
            }
        }
    }

    /// Fetches the current resume for preview.
    pub async fn download(&mut self) -> Option<ResumeDownload> {
        match self.scope.run(self.api.download_resume()).await.ok()? {
            Ok(file) => Some(file),
            Err(e) => {
                self.notice = Some(Notice::from_error("Failed to download resume", &e));
                None
            }
        }
    }
}
