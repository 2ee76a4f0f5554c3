#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejection {
    #[error("No file provided")]
    Empty,

    #[error("Only PDF files are allowed for resume")]
    NotPdf,

    #[error("Resume exceeds the {max_bytes} byte limit")]
    TooLarge { max_bytes: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_file_size_bytes: usize,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_FILE_SIZE_BYTES)
    }
}

impl UploadPolicy {
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: usize = 10 * 1024 * 1024; // 10MB
    pub const PDF_MIME_TYPE: &'static str = "application/pdf";

    pub fn new(max_file_size_bytes: usize) -> Self {
        Self {
            max_file_size_bytes,
        }
    }

    /// A PDF is recognised by its declared content type or a `.pdf` file name.
    pub fn is_pdf(file_name: Option<&str>, content_type: Option<&str>) -> bool {
        let by_type = content_type
            .map(|ct| ct.trim().eq_ignore_ascii_case(Self::PDF_MIME_TYPE))
            .unwrap_or(false);
        let by_name = file_name
            .map(|name| name.trim().to_ascii_lowercase().ends_with(".pdf"))
            .unwrap_or(false);

        by_type || by_name
    }

    pub fn check_size(&self, size_bytes: usize) -> Result<(), UploadRejection> {
        if size_bytes > self.max_file_size_bytes {
            return Err(UploadRejection::TooLarge {
                max_bytes: self.max_file_size_bytes,
            });
        }
        Ok(())
    }

    pub fn check(
        &self,
        file_name: Option<&str>,
        content_type: Option<&str>,
        size_bytes: usize,
    ) -> Result<(), UploadRejection> {
        if size_bytes == 0 {
            return Err(UploadRejection::Empty);
        }
        if !Self::is_pdf(file_name, content_type) {
            return Err(UploadRejection::NotPdf);
        }
        self.check_size(size_bytes)
    }
}
