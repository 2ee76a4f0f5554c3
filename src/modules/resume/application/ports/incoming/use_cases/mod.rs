mod download_resume;
mod upload_resume;

pub use download_resume::{DownloadResumeError, DownloadResumeUseCase};
pub use upload_resume::{UploadResumeCommand, UploadResumeError, UploadResumeUseCase};
