use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::{header::CONTENT_DISPOSITION, multipart, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Map, Value};
use tracing::debug;

use super::{
    AdminLogin, ApiError, AuthApi, ContentApi, InboxApi, ProfileApi, ResumeApi, ResumeDownload,
    ResumeUpload,
};
use crate::auth::adapter::incoming::web::routes::LoginRequestDto;
use crate::config::ClientConfig;
use crate::content::application::domain::{ContentResource, Record};
use crate::inbox::{
    adapter::incoming::web::routes::{ContactRequest, SubscribeRequest},
    application::domain::{ContactMessage, NewsletterSubscriber},
};
use crate::profile::{
    adapter::incoming::web::routes::AboutBody,
    application::domain::PortfolioProfile,
};
use crate::resume::application::domain::ResumeInfo;

const PORTFOLIO: &str = "portfolio";
const ABOUT: &str = "about";
const CONTACT: &str = "contact";
const CONTACT_MESSAGES: &str = "contact-messages";
const NEWSLETTER: &str = "newsletter";
const RESUME: &str = "resume";
const AUTH: &str = "auth";

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// reqwest-backed client for `{API_BASE_URL}/{resource}`.
///
/// No retries and no caching: every call is one request.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(http: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            http,
            base_url: config.api_base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource)
    }

    /// Sends the request; any non-2xx status becomes [`ApiError::Http`].
    async fn send(&self, resource: &str, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            debug!(resource, error = %e, "API request did not complete");
            ApiError::Network {
                resource: resource.to_string(),
                reason: e.to_string(),
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        debug!(resource, %status, ?message, "API request rejected");

        Err(ApiError::Http {
            resource: resource.to_string(),
            status,
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(resource: &str, response: Response) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(|e| ApiError::Decode {
            resource: resource.to_string(),
            reason: e.to_string(),
        })
    }

    /// Unwraps `{"<key>": [...]}`; a missing key reads as an empty list.
    async fn collection<T: DeserializeOwned>(
        &self,
        resource: &str,
        key: &str,
        token: Option<&str>,
    ) -> Result<Vec<T>, ApiError> {
        let request = authorized(self.http.get(self.url(resource)), token);
        let response = self.send(resource, request).await?;
        let mut body: Map<String, Value> = Self::decode(resource, response).await?;

        match body.remove(key) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(items) => serde_json::from_value(items).map_err(|e| ApiError::Decode {
                resource: resource.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    async fn delete_by_id(&self, resource: &str, id: i64, token: &str) -> Result<(), ApiError> {
        let request = self
            .http
            .delete(self.url(resource))
            .bearer_auth(token)
            .json(&json!({ "id": id }));
        self.send(resource, request).await?;
        Ok(())
    }
}

fn authorized(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

/// `attachment; filename="resume.pdf"` → `resume.pdf`
fn filename_from_disposition(header: &str) -> Option<String> {
    header.split(';').find_map(|part| {
        part.trim()
            .strip_prefix("filename=")
            .map(|name| name.trim_matches('"').to_string())
            .filter(|name| !name.is_empty())
    })
}

#[async_trait]
impl ContentApi for HttpApiClient {
    async fn list<T: ContentResource>(&self) -> Result<Vec<Record<T>>, ApiError> {
        self.collection(T::RESOURCE, T::LIST_KEY, None).await
    }

    async fn create<T: ContentResource>(
        &self,
        fields: &T,
        token: Option<&str>,
    ) -> Result<Record<T>, ApiError> {
        let request = authorized(self.http.post(self.url(T::RESOURCE)), token).json(fields);
        let response = self.send(T::RESOURCE, request).await?;
        Self::decode(T::RESOURCE, response).await
    }

    async fn update<T: ContentResource>(
        &self,
        record: &Record<T>,
        token: &str,
    ) -> Result<Record<T>, ApiError> {
        let request = self
            .http
            .put(self.url(T::RESOURCE))
            .bearer_auth(token)
            .json(record);
        let response = self.send(T::RESOURCE, request).await?;
        Self::decode(T::RESOURCE, response).await
    }

    async fn delete<T: ContentResource>(&self, id: i64, token: &str) -> Result<(), ApiError> {
        self.delete_by_id(T::RESOURCE, id, token).await
    }
}

#[async_trait]
impl ProfileApi for HttpApiClient {
    async fn fetch_portfolio(&self) -> Result<PortfolioProfile, ApiError> {
        let response = self.send(PORTFOLIO, self.http.get(self.url(PORTFOLIO))).await?;
        Self::decode(PORTFOLIO, response).await
    }

    async fn fetch_about(&self) -> Result<String, ApiError> {
        let response = self.send(ABOUT, self.http.get(self.url(ABOUT))).await?;
        let body: AboutBody = Self::decode(ABOUT, response).await?;
        Ok(body.about)
    }

    async fn update_about(&self, about: &str, token: &str) -> Result<String, ApiError> {
        let request = self
            .http
            .put(self.url(ABOUT))
            .bearer_auth(token)
            .json(&json!({ "about": about }));
        let response = self.send(ABOUT, request).await?;
        let body: AboutBody = Self::decode(ABOUT, response).await?;
        Ok(body.about)
    }

    async fn fetch_contact_details(&self) -> Result<BTreeMap<String, String>, ApiError> {
        let response = self.send(CONTACT, self.http.get(self.url(CONTACT))).await?;
        Self::decode(CONTACT, response).await
    }
}

#[async_trait]
impl InboxApi for HttpApiClient {
    async fn submit_contact(&self, form: &ContactRequest) -> Result<ContactMessage, ApiError> {
        let request = self.http.post(self.url(CONTACT)).json(form);
        let response = self.send(CONTACT, request).await?;
        Self::decode(CONTACT, response).await
    }

    async fn subscribe_newsletter(&self, email: &str) -> Result<NewsletterSubscriber, ApiError> {
        let body = SubscribeRequest {
            email: email.to_string(),
        };
        let request = self.http.post(self.url(NEWSLETTER)).json(&body);
        let response = self.send(NEWSLETTER, request).await?;
        Self::decode(NEWSLETTER, response).await
    }

    async fn list_contact_messages(&self, token: &str) -> Result<Vec<ContactMessage>, ApiError> {
        self.collection(CONTACT_MESSAGES, "messages", Some(token))
            .await
    }

    async fn delete_contact_message(&self, id: i64, token: &str) -> Result<(), ApiError> {
        self.delete_by_id(CONTACT_MESSAGES, id, token).await
    }

    async fn list_subscribers(&self, token: &str) -> Result<Vec<NewsletterSubscriber>, ApiError> {
        self.collection(NEWSLETTER, "subscribers", Some(token)).await
    }

    async fn delete_subscriber(&self, id: i64, token: &str) -> Result<(), ApiError> {
        self.delete_by_id(NEWSLETTER, id, token).await
    }
}

#[async_trait]
impl ResumeApi for HttpApiClient {
    async fn upload_resume(
        &self,
        file: &ResumeUpload,
        token: &str,
    ) -> Result<ResumeInfo, ApiError> {
        let part = multipart::Part::bytes(file.content.clone())
            .file_name(file.filename.clone())
            .mime_str(&file.content_type)
            .map_err(|e| ApiError::Network {
                resource: RESUME.to_string(),
                reason: e.to_string(),
            })?;
        let form = multipart::Form::new().part("file", part);

        let request = self
            .http
            .post(self.url(RESUME))
            .bearer_auth(token)
            .multipart(form);
        let response = self.send(RESUME, request).await?;
        Self::decode(RESUME, response).await
    }

    async fn download_resume(&self) -> Result<ResumeDownload, ApiError> {
        let response = self.send(RESUME, self.http.get(self.url(RESUME))).await?;
        let filename = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .and_then(filename_from_disposition);

        let content = response.bytes().await.map_err(|e| ApiError::Decode {
            resource: RESUME.to_string(),
            reason: e.to_string(),
        })?;

        Ok(ResumeDownload {
            filename,
            content: content.to_vec(),
        })
    }
}

#[async_trait]
impl AuthApi for HttpApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<AdminLogin, ApiError> {
        let body = LoginRequestDto {
            email: email.to_string(),
            password: password.to_string(),
        };
        let request = self.http.post(self.url(AUTH)).json(&body);
        let response = self.send(AUTH, request).await?;
        Self::decode(AUTH, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::application::domain::SkillEntry;

    #[test]
    fn url_joins_base_and_resource() {
        let client = HttpApiClient::new(&ClientConfig::new("http://localhost:5000/api/"));

        assert_eq!(client.url("projects"), "http://localhost:5000/api/projects");
    }

    #[test]
    fn filename_is_read_from_quoted_disposition() {
        assert_eq!(
            filename_from_disposition("attachment; filename=\"resume_ab12.pdf\""),
            Some("resume_ab12.pdf".to_string())
        );
        assert_eq!(
            filename_from_disposition("attachment; filename=cv.pdf"),
            Some("cv.pdf".to_string())
        );
        assert_eq!(filename_from_disposition("attachment"), None);
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        // Nothing listens on the discard port.
        let client = HttpApiClient::new(&ClientConfig::new("http://127.0.0.1:9/api"));

        let result = client.list::<SkillEntry>().await;

        match result {
            Err(ApiError::Network { resource, .. }) => assert_eq!(resource, "skills"),
            other => panic!("expected network error, got {:?}", other),
        }
    }
}
