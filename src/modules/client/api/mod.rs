mod error;
mod http_client;
mod ports;

pub use error::ApiError;
pub use http_client::HttpApiClient;
pub use ports::{
    AdminLogin, AuthApi, ContentApi, InboxApi, ProfileApi, ResumeApi, ResumeDownload,
    ResumeUpload,
};
