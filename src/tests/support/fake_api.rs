use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use reqwest::StatusCode;
use serde_json::Value;
use tokio::sync::Semaphore;

use crate::client::api::{
    AdminLogin, ApiError, AuthApi, ContentApi, InboxApi, ProfileApi, ResumeApi, ResumeDownload,
    ResumeUpload,
};
use crate::content::application::domain::{
    ContentResource, EducationEntry, Record, SkillEntry,
};
use crate::inbox::{
    adapter::incoming::web::routes::ContactRequest,
    application::domain::{ContactMessage, NewsletterSubscriber},
};
use crate::profile::application::domain::{PortfolioProfile, ProfileDetails};
use crate::resume::application::domain::ResumeInfo;

pub const ADMIN_TOKEN: &str = "admin-token";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "correct horse";

#[derive(Default)]
struct FakeState {
    collections: HashMap<String, Vec<Value>>,
    next_id: i64,
    failing: HashSet<String>,
    calls: Vec<String>,
    details: ProfileDetails,
    messages: Vec<ContactMessage>,
    subscribers: Vec<NewsletterSubscriber>,
    resume: Option<(String, Vec<u8>)>,
}

/// In-process stand-in for the portfolio API.
///
/// Mutations need [`ADMIN_TOKEN`]. Resources marked with [`FakeApi::fail`]
/// answer `500`; resources marked with [`FakeApi::hold`] wait until released.
#[derive(Clone, Default)]
pub struct FakeApi {
    state: Arc<Mutex<FakeState>>,
    held: Arc<Mutex<HashMap<String, Arc<Semaphore>>>>,
}

fn http_error(resource: &str, status: StatusCode, message: Option<&str>) -> ApiError {
    ApiError::Http {
        resource: resource.to_string(),
        status,
        message: message.map(str::to_string),
    }
}

fn unauthorized(resource: &str) -> ApiError {
    http_error(
        resource,
        StatusCode::UNAUTHORIZED,
        Some("Invalid or expired token"),
    )
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&self, resource: &str) {
        self.state.lock().unwrap().failing.insert(resource.to_string());
    }

    pub fn recover(&self, resource: &str) {
        self.state.lock().unwrap().failing.remove(resource);
    }

    /// Calls to `resource` block until [`FakeApi::release`].
    pub fn hold(&self, resource: &str) {
        self.held
            .lock()
            .unwrap()
            .insert(resource.to_string(), Arc::new(Semaphore::new(0)));
    }

    pub fn release(&self, resource: &str) {
        // Closing wakes every waiter, including ones that arrive later.
        if let Some(gate) = self.held.lock().unwrap().remove(resource) {
            gate.close();
        }
    }

    /// `"GET projects"`, `"POST testimonials"`, ... in call order.
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn count_calls(&self, call: &str) -> usize {
        self.calls().iter().filter(|c| c.as_str() == call).count()
    }

    pub fn seed<T: ContentResource>(&self, fields: T) -> Record<T> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let record = Record::new(state.next_id, fields);
        let value = serde_json::to_value(&record).unwrap();
        state
            .collections
            .entry(T::RESOURCE.to_string())
            .or_default()
            .push(value);
        record
    }

    pub fn records<T: ContentResource>(&self) -> Vec<Record<T>> {
        let state = self.state.lock().unwrap();
        state
            .collections
            .get(T::RESOURCE)
            .map(|rows| {
                rows.iter()
                    .map(|row| serde_json::from_value(row.clone()).unwrap())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn set_details(&self, details: ProfileDetails) {
        self.state.lock().unwrap().details = details;
    }

    pub fn seed_message(&self, name: &str, email: &str, message: &str) -> ContactMessage {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let row = ContactMessage {
            id: state.next_id,
            name: name.to_string(),
            email: email.to_string(),
            subject: String::new(),
            message: message.to_string(),
            created_at: Utc::now(),
        };
        state.messages.insert(0, row.clone());
        row
    }

    pub fn subscribers(&self) -> Vec<NewsletterSubscriber> {
        self.state.lock().unwrap().subscribers.clone()
    }

    pub fn messages(&self) -> Vec<ContactMessage> {
        self.state.lock().unwrap().messages.clone()
    }

    pub fn resume(&self) -> Option<(String, Vec<u8>)> {
        self.state.lock().unwrap().resume.clone()
    }

    /// Logs the call, waits while the resource is held, then fails if marked failing.
    async fn enter(&self, method: &str, resource: &str) -> Result<(), ApiError> {
        self.state
            .lock()
            .unwrap()
            .calls
            .push(format!("{method} {resource}"));

        let gate = self.held.lock().unwrap().get(resource).cloned();
        if let Some(gate) = gate {
            let _ = gate.acquire().await;
        }

        if self.state.lock().unwrap().failing.contains(resource) {
            return Err(http_error(
                resource,
                StatusCode::INTERNAL_SERVER_ERROR,
                Some("An unexpected error occurred"),
            ));
        }
        Ok(())
    }
}

fn check_token(resource: &str, token: Option<&str>) -> Result<(), ApiError> {
    match token {
        Some(ADMIN_TOKEN) => Ok(()),
        _ => Err(unauthorized(resource)),
    }
}

#[async_trait]
impl ContentApi for FakeApi {
    async fn list<T: ContentResource>(&self) -> Result<Vec<Record<T>>, ApiError> {
        self.enter("GET", T::RESOURCE).await?;
        Ok(self.records::<T>())
    }

    async fn create<T: ContentResource>(
        &self,
        fields: &T,
        token: Option<&str>,
    ) -> Result<Record<T>, ApiError> {
        self.enter("POST", T::RESOURCE).await?;
        if !T::PUBLIC_CREATE {
            check_token(T::RESOURCE, token)?;
        }
        Ok(self.seed(fields.clone()))
    }

    async fn update<T: ContentResource>(
        &self,
        record: &Record<T>,
        token: &str,
    ) -> Result<Record<T>, ApiError> {
        self.enter("PUT", T::RESOURCE).await?;
        check_token(T::RESOURCE, Some(token))?;

        let mut state = self.state.lock().unwrap();
        let rows = state.collections.entry(T::RESOURCE.to_string()).or_default();
        let slot = rows
            .iter_mut()
            .find(|row| row["id"] == Value::from(record.id))
            .ok_or_else(|| http_error(T::RESOURCE, StatusCode::NOT_FOUND, Some("Not found")))?;
        *slot = serde_json::to_value(record).unwrap();
        Ok(record.clone())
    }

    async fn delete<T: ContentResource>(&self, id: i64, token: &str) -> Result<(), ApiError> {
        self.enter("DELETE", T::RESOURCE).await?;
        check_token(T::RESOURCE, Some(token))?;

        let mut state = self.state.lock().unwrap();
        let rows = state.collections.entry(T::RESOURCE.to_string()).or_default();
        let before = rows.len();
        rows.retain(|row| row["id"] != Value::from(id));
        if rows.len() == before {
            return Err(http_error(T::RESOURCE, StatusCode::NOT_FOUND, Some("Not found")));
        }
        Ok(())
    }
}

#[async_trait]
impl ProfileApi for FakeApi {
    async fn fetch_portfolio(&self) -> Result<PortfolioProfile, ApiError> {
        self.enter("GET", "portfolio").await?;
        let details = self.state.lock().unwrap().details.clone();
        Ok(PortfolioProfile {
            details,
            education: self.records::<EducationEntry>(),
            skills: self.records::<SkillEntry>(),
        })
    }

    async fn fetch_about(&self) -> Result<String, ApiError> {
        self.enter("GET", "about").await?;
        Ok(self.state.lock().unwrap().details.about.clone())
    }

    async fn update_about(&self, about: &str, token: &str) -> Result<String, ApiError> {
        self.enter("PUT", "about").await?;
        check_token("about", Some(token))?;
        let mut state = self.state.lock().unwrap();
        state.details.about = about.to_string();
        Ok(state.details.about.clone())
    }

    async fn fetch_contact_details(&self) -> Result<BTreeMap<String, String>, ApiError> {
        self.enter("GET", "contact").await?;
        Ok(self.state.lock().unwrap().details.contact.clone())
    }
}

#[async_trait]
impl InboxApi for FakeApi {
    async fn submit_contact(&self, form: &ContactRequest) -> Result<ContactMessage, ApiError> {
        self.enter("POST", "contact").await?;
        if form.name.trim().is_empty() || form.message.trim().is_empty() {
            return Err(http_error(
                "contact",
                StatusCode::BAD_REQUEST,
                Some("name is required"),
            ));
        }
        Ok(self.seed_message(&form.name, &form.email, &form.message))
    }

    async fn subscribe_newsletter(&self, email: &str) -> Result<NewsletterSubscriber, ApiError> {
        self.enter("POST", "newsletter").await?;
        let mut state = self.state.lock().unwrap();
        if state.subscribers.iter().any(|s| s.email == email) {
            return Err(http_error(
                "newsletter",
                StatusCode::CONFLICT,
                Some("Email already subscribed"),
            ));
        }
        state.next_id += 1;
        let subscriber = NewsletterSubscriber {
            id: state.next_id,
            email: email.to_string(),
            subscribed_at: Utc::now(),
        };
        state.subscribers.push(subscriber.clone());
        Ok(subscriber)
    }

    async fn list_contact_messages(&self, token: &str) -> Result<Vec<ContactMessage>, ApiError> {
        self.enter("GET", "contact-messages").await?;
        check_token("contact-messages", Some(token))?;
        Ok(self.messages())
    }

    async fn delete_contact_message(&self, id: i64, token: &str) -> Result<(), ApiError> {
        self.enter("DELETE", "contact-messages").await?;
        check_token("contact-messages", Some(token))?;
        self.state.lock().unwrap().messages.retain(|m| m.id != id);
        Ok(())
    }

    async fn list_subscribers(&self, token: &str) -> Result<Vec<NewsletterSubscriber>, ApiError> {
        self.enter("GET", "newsletter").await?;
        check_token("newsletter", Some(token))?;
        Ok(self.subscribers())
    }

    async fn delete_subscriber(&self, id: i64, token: &str) -> Result<(), ApiError> {
        self.enter("DELETE", "newsletter").await?;
        check_token("newsletter", Some(token))?;
        self.state.lock().unwrap().subscribers.retain(|s| s.id != id);
        Ok(())
    }
}

#[async_trait]
impl ResumeApi for FakeApi {
    async fn upload_resume(
        &self,
        file: &ResumeUpload,
        token: &str,
    ) -> Result<ResumeInfo, ApiError> {
        self.enter("POST", "resume").await?;
        check_token("resume", Some(token))?;
        let stored = "resume_fake.pdf".to_string();
        self.state.lock().unwrap().resume = Some((stored.clone(), file.content.clone()));
        Ok(ResumeInfo {
            filename: stored,
            size_bytes: file.content.len(),
            uploaded_at: Utc::now(),
        })
    }

    async fn download_resume(&self) -> Result<ResumeDownload, ApiError> {
        self.enter("GET", "resume").await?;
        match self.resume() {
            Some((filename, content)) => Ok(ResumeDownload {
                filename: Some(filename),
                content,
            }),
            None => Err(http_error(
                "resume",
                StatusCode::NOT_FOUND,
                Some("Resume not available"),
            )),
        }
    }
}

#[async_trait]
impl AuthApi for FakeApi {
    async fn login(&self, email: &str, password: &str) -> Result<AdminLogin, ApiError> {
        self.enter("POST", "auth").await?;
        if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
            Ok(AdminLogin {
                token: ADMIN_TOKEN.to_string(),
                email: email.to_string(),
            })
        } else {
            Err(http_error(
                "auth",
                StatusCode::UNAUTHORIZED,
                Some("Invalid email or password"),
            ))
        }
    }
}
