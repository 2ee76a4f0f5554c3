use std::collections::BTreeMap;

use async_trait::async_trait;

use super::ApiError;
use crate::content::application::domain::{ContentResource, Record};
use crate::inbox::{
    adapter::incoming::web::routes::ContactRequest,
    application::domain::{ContactMessage, NewsletterSubscriber},
};
use crate::profile::application::domain::PortfolioProfile;
use crate::resume::application::domain::ResumeInfo;

/// `GET/POST/PUT/DELETE /{resource}` for every content collection.
#[async_trait]
pub trait ContentApi: Send + Sync {
    async fn list<T: ContentResource>(&self) -> Result<Vec<Record<T>>, ApiError>;

    /// `token` may be `None` for collections that accept anonymous creates.
    async fn create<T: ContentResource>(
        &self,
        fields: &T,
        token: Option<&str>,
    ) -> Result<Record<T>, ApiError>;

    async fn update<T: ContentResource>(
        &self,
        record: &Record<T>,
        token: &str,
    ) -> Result<Record<T>, ApiError>;

    async fn delete<T: ContentResource>(&self, id: i64, token: &str) -> Result<(), ApiError>;
}

#[async_trait]
pub trait ProfileApi: Send + Sync {
    async fn fetch_portfolio(&self) -> Result<PortfolioProfile, ApiError>;

    async fn fetch_about(&self) -> Result<String, ApiError>;

    async fn update_about(&self, about: &str, token: &str) -> Result<String, ApiError>;

    async fn fetch_contact_details(&self) -> Result<BTreeMap<String, String>, ApiError>;
}

#[async_trait]
pub trait InboxApi: Send + Sync {
    async fn submit_contact(&self, form: &ContactRequest) -> Result<ContactMessage, ApiError>;

    async fn subscribe_newsletter(&self, email: &str) -> Result<NewsletterSubscriber, ApiError>;

    async fn list_contact_messages(&self, token: &str) -> Result<Vec<ContactMessage>, ApiError>;

    async fn delete_contact_message(&self, id: i64, token: &str) -> Result<(), ApiError>;

    async fn list_subscribers(&self, token: &str) -> Result<Vec<NewsletterSubscriber>, ApiError>;

    async fn delete_subscriber(&self, id: i64, token: &str) -> Result<(), ApiError>;
}

/// A file picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeUpload {
    pub filename: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeDownload {
    /// From `Content-Disposition`, when the server sent one.
    pub filename: Option<String>,
    pub content: Vec<u8>,
}

#[async_trait]
pub trait ResumeApi: Send + Sync {
    async fn upload_resume(
        &self,
        file: &ResumeUpload,
        token: &str,
    ) -> Result<ResumeInfo, ApiError>;

    async fn download_resume(&self) -> Result<ResumeDownload, ApiError>;
}

/// Successful admin login.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct AdminLogin {
    pub token: String,
    pub email: String,
}

#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<AdminLogin, ApiError>;
}
