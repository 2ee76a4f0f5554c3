mod resume_routes;

pub use resume_routes::{download_resume_handler, upload_resume_handler, ResumeUploadForm};
#[doc(hidden)]
pub use resume_routes::{__path_download_resume_handler, __path_upload_resume_handler};
