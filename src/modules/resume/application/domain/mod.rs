mod entities;
pub mod policies;

pub use entities::{ResumeFile, ResumeInfo};
pub use policies::upload_policy::{UploadPolicy, UploadRejection};
