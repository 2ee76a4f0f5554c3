use std::sync::Arc;

use actix_web::web;

use crate::auth::application::use_cases::login_admin::LoginAdminUseCase;
use crate::content::application::{
    content_use_cases::ContentUseCases,
    domain::{ArticleEntry, ProjectEntry, TestimonialEntry},
};
use crate::email::application::ports::outgoing::InboxEmailNotifier;
use crate::inbox::application::inbox_use_cases::InboxUseCases;
use crate::resume::application::{domain::UploadPolicy, resume_use_cases::ResumeUseCases};
use crate::tests::support::stubs::{RecordingInboxNotifier, StubLoginAdminUseCase};
use crate::AppState;

/// In-memory [`AppState`] with single pieces swapped for stubs.
pub struct TestAppStateBuilder {
    login_admin: Arc<dyn LoginAdminUseCase + Send + Sync>,
    notifier: Arc<dyn InboxEmailNotifier + Send + Sync>,
    upload_policy: UploadPolicy,
    projects: Option<ContentUseCases<ProjectEntry>>,
    testimonials: Option<ContentUseCases<TestimonialEntry>>,
    articles: Option<ContentUseCases<ArticleEntry>>,
    inbox: Option<InboxUseCases>,
    resume: Option<ResumeUseCases>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            login_admin: Arc::new(StubLoginAdminUseCase),
            notifier: Arc::new(RecordingInboxNotifier::default()),
            upload_policy: UploadPolicy::default(),
            projects: None,
            testimonials: None,
            articles: None,
            inbox: None,
            resume: None,
        }
    }
}

impl TestAppStateBuilder {
    pub const OWNER_NAME: &'static str = "Jane Doe";

    pub fn with_login_admin(mut self, uc: impl LoginAdminUseCase + Send + Sync + 'static) -> Self {
        self.login_admin = Arc::new(uc);
        self
    }

    pub fn with_notifier(
        mut self,
        notifier: impl InboxEmailNotifier + Send + Sync + 'static,
    ) -> Self {
        self.notifier = Arc::new(notifier);
        self
    }

    pub fn with_upload_policy(mut self, policy: UploadPolicy) -> Self {
        self.upload_policy = policy;
        self
    }

    pub fn with_projects(mut self, uc: ContentUseCases<ProjectEntry>) -> Self {
        self.projects = Some(uc);
        self
    }

    pub fn with_testimonials(mut self, uc: ContentUseCases<TestimonialEntry>) -> Self {
        self.testimonials = Some(uc);
        self
    }

    pub fn with_articles(mut self, uc: ContentUseCases<ArticleEntry>) -> Self {
        self.articles = Some(uc);
        self
    }

    pub fn with_inbox(mut self, uc: InboxUseCases) -> Self {
        self.inbox = Some(uc);
        self
    }

    pub fn with_resume(mut self, uc: ResumeUseCases) -> Self {
        self.resume = Some(uc);
        self
    }

    pub fn build_state(self) -> AppState {
        let mut state = AppState::in_memory(
            self.login_admin,
            self.notifier,
            self.upload_policy,
            Self::OWNER_NAME,
        );

        if let Some(uc) = self.projects {
            state.projects = uc;
        }
        if let Some(uc) = self.testimonials {
            state.testimonials = uc;
        }
        if let Some(uc) = self.articles {
            state.articles = uc;
        }
        if let Some(uc) = self.inbox {
            state.inbox = uc;
        }
        if let Some(uc) = self.resume {
            state.resume = uc;
        }
        state
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(self.build_state())
    }
}
