use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{info, warn};

use crate::client::{
    api::{ContentApi, InboxApi, ProfileApi},
    notice::Notice,
    scope::ScreenScope,
    screen_state::ScreenState,
};
use crate::content::application::domain::{ContentResource, TestimonialEntry};
use crate::inbox::{
    adapter::incoming::web::routes::ContactRequest, application::domain::ContactSubmission,
};

/// Public contact page: contact form, newsletter signup and testimonial form.
///
/// All three submit anonymously. Each form has its own notice and is cleared
/// after a successful submit.
pub struct ContactPage<A> {
    api: Arc<A>,
    scope: ScreenScope,
    details: ScreenState<BTreeMap<String, String>>,
    contact: ContactRequest,
    contact_notice: Option<Notice>,
    newsletter_email: String,
    newsletter_notice: Option<Notice>,
    testimonial: TestimonialEntry,
    testimonial_notice: Option<Notice>,
}

impl<A: InboxApi + ContentApi + ProfileApi> ContactPage<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            scope: ScreenScope::new(),
            details: ScreenState::Loading,
            contact: ContactRequest::default(),
            contact_notice: None,
            newsletter_email: String::new(),
            newsletter_notice: None,
            testimonial: TestimonialEntry::default(),
            testimonial_notice: None,
        }
    }

    /// Creates the page and loads the owner's contact details.
    pub async fn mount(api: Arc<A>) -> Self {
        let mut page = Self::new(api);
        let Ok(result) = page.scope.run(page.api.fetch_contact_details()).await else {
            return page;
        };
        page.details = match result {
            Ok(details) => ScreenState::Ready(details),
            Err(e) => ScreenState::LoadError(Notice::from_error("Failed to load contact details", &e)),
        };
        page
    }

    pub fn details(&self) -> &ScreenState<BTreeMap<String, String>> {
        &self.details
    }

    pub fn scope(&self) -> &ScreenScope {
        &self.scope
    }

    // ── Contact form ──

    pub fn contact_form(&self) -> &ContactRequest {
        &self.contact
    }

    pub fn contact_form_mut(&mut self) -> &mut ContactRequest {
        &mut self.contact
    }

    pub fn contact_notice(&self) -> Option<&Notice> {
        self.contact_notice.as_ref()
    }

    /// Name, email and message must be filled in before anything is sent.
    pub async fn submit_contact(&mut self) {
        let form = &self.contact;
        if let Err(e) = ContactSubmission::new(
            &form.name,
            &form.email,
            form.subject.as_deref(),
            &form.message,
        ) {
            self.contact_notice = Some(Notice::new(e.to_string()));
            return;
        }

        let Ok(result) = self.scope.run(self.api.submit_contact(&self.contact)).await else {
            return;
        };

        self.contact_notice = Some(match result {
            Ok(message) => {
                info!(id = message.id, "Contact message sent");
                self.contact = ContactRequest::default();
                Notice::new("Message sent successfully!")
            }
            Err(e) => {
                warn!(error = %e, "Contact message failed");
                Notice::from_error("Failed to send message. Please try again.", &e)
            }
        });
    }

    // ── Newsletter ──

    pub fn newsletter_email(&self) -> &str {
        &self.newsletter_email
    }

    pub fn set_newsletter_email(&mut self, email: impl Into<String>) {
        self.newsletter_email = email.into();
    }

    pub fn newsletter_notice(&self) -> Option<&Notice> {
        self.newsletter_notice.as_ref()
    }

    pub async fn subscribe(&mut self) {
        let email = self.newsletter_email.trim();
        if email.is_empty() {
            self.newsletter_notice = Some(Notice::new("Email is required"));
            return;
        }

        let Ok(result) = self.scope.run(self.api.subscribe_newsletter(email)).await else {
            return;
        };

        self.newsletter_notice = Some(match result {
            Ok(_) => {
                self.newsletter_email.clear();
                Notice::new("Thank you for subscribing!")
            }
            Err(e) => Notice::from_error("Error subscribing. Please try again.", &e),
        });
    }

    // ── Testimonial ──

    pub fn testimonial_form(&self) -> &TestimonialEntry {
        &self.testimonial
    }

    pub fn testimonial_form_mut(&mut self) -> &mut TestimonialEntry {
        &mut self.testimonial
    }

    pub fn testimonial_notice(&self) -> Option<&Notice> {
        self.testimonial_notice.as_ref()
    }

    /// Posts without a token; testimonials accept anonymous submissions.
    pub async fn submit_testimonial(&mut self) {
        if let Err(e) = self.testimonial.validate() {
            self.testimonial_notice = Some(Notice::new(e.to_string()));
            return;
        }

        let Ok(result) = self
            .scope
            .run(self.api.create(&self.testimonial, None))
            .await
        else {
            return;
        };

        self.testimonial_notice = Some(match result {
            Ok(record) => {
                info!(id = record.id, "Testimonial submitted");
                self.testimonial = TestimonialEntry::default();
                Notice::new("Thank you for your testimonial!")
            }
            Err(e) => Notice::from_error("Failed to submit testimonial. Please try again.", &e),
        });
    }
}
