pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{admin, auth, client, content, email, inbox, profile, resume, site};

#[cfg(test)]
mod tests;

use actix_web::web;
use std::path::Path;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;
use crate::auth::application::{
    ports::outgoing::TokenProvider, use_cases::login_admin::LoginAdminUseCase,
};
use crate::content::{
    adapter::{
        incoming::web::routes::configure_content_routes,
        outgoing::{InMemoryContentRepository, JsonFileContentRepository},
    },
    application::{
        content_use_cases::ContentUseCases,
        domain::{
            ArticleEntry, CertificationEntry, ContentResource, EducationEntry, ExperienceEntry,
            ProjectEntry, ServiceEntry, SkillEntry, TestimonialEntry,
        },
    },
};
use crate::email::application::ports::outgoing::InboxEmailNotifier;
use crate::inbox::{
    adapter::outgoing::{
        InMemoryContactMessageRepository, InMemorySubscriberRepository,
        JsonFileContactMessageRepository, JsonFileSubscriberRepository,
    },
    application::inbox_use_cases::InboxUseCases,
};
use crate::profile::{
    adapter::outgoing::{InMemoryProfileRepository, JsonFileProfileRepository},
    application::profile_use_cases::ProfileUseCases,
};
use crate::resume::{
    adapter::outgoing::{FileResumeStore, InMemoryResumeStore},
    application::{domain::UploadPolicy, resume_use_cases::ResumeUseCases},
};
use crate::shared::{api::custom_json_config, store::StoreError};

#[derive(Clone)]
pub struct AppState {
    pub education: ContentUseCases<EducationEntry>,
    pub skills: ContentUseCases<SkillEntry>,
    pub experience: ContentUseCases<ExperienceEntry>,
    pub certifications: ContentUseCases<CertificationEntry>,
    pub projects: ContentUseCases<ProjectEntry>,
    pub testimonials: ContentUseCases<TestimonialEntry>,
    pub articles: ContentUseCases<ArticleEntry>,
    pub services: ContentUseCases<ServiceEntry>,
    pub profile: ProfileUseCases,
    pub inbox: InboxUseCases,
    pub resume: ResumeUseCases,
    pub login_admin: Arc<dyn LoginAdminUseCase + Send + Sync>,
}

impl AppState {
    /// Every store kept in process memory.
    pub fn in_memory(
        login_admin: Arc<dyn LoginAdminUseCase + Send + Sync>,
        notifier: Arc<dyn InboxEmailNotifier + Send + Sync>,
        upload_policy: UploadPolicy,
        owner_name: &str,
    ) -> Self {
        let education = ContentUseCases::from_repository(InMemoryContentRepository::new());
        let skills = ContentUseCases::from_repository(InMemoryContentRepository::new());
        let profile = ProfileUseCases::new(
            InMemoryProfileRepository::new(),
            &education,
            &skills,
            owner_name,
        );

        Self {
            education,
            skills,
            experience: ContentUseCases::from_repository(InMemoryContentRepository::new()),
            certifications: ContentUseCases::from_repository(InMemoryContentRepository::new()),
            projects: ContentUseCases::from_repository(InMemoryContentRepository::new()),
            testimonials: ContentUseCases::from_repository(InMemoryContentRepository::new()),
            articles: ContentUseCases::from_repository(InMemoryContentRepository::new()),
            services: ContentUseCases::from_repository(InMemoryContentRepository::new()),
            profile,
            inbox: InboxUseCases::new(
                InMemoryContactMessageRepository::new(),
                InMemorySubscriberRepository::new(),
                notifier,
            ),
            resume: ResumeUseCases::new(InMemoryResumeStore::new(), upload_policy),
            login_admin,
        }
    }

    /// Every store kept as JSON files (and the resume PDF) under `data_dir`,
    /// reloaded on the next start.
    pub async fn persistent(
        data_dir: &Path,
        login_admin: Arc<dyn LoginAdminUseCase + Send + Sync>,
        notifier: Arc<dyn InboxEmailNotifier + Send + Sync>,
        upload_policy: UploadPolicy,
        owner_name: &str,
    ) -> Result<Self, StoreError> {
        let education: ContentUseCases<EducationEntry> = json_collection(data_dir).await?;
        let skills: ContentUseCases<SkillEntry> = json_collection(data_dir).await?;
        let profile = ProfileUseCases::new(
            JsonFileProfileRepository::open(data_dir).await?,
            &education,
            &skills,
            owner_name,
        );

        Ok(Self {
            education,
            skills,
            experience: json_collection(data_dir).await?,
            certifications: json_collection(data_dir).await?,
            projects: json_collection(data_dir).await?,
            testimonials: json_collection(data_dir).await?,
            articles: json_collection(data_dir).await?,
            services: json_collection(data_dir).await?,
            profile,
            inbox: InboxUseCases::new(
                JsonFileContactMessageRepository::open(data_dir).await?,
                JsonFileSubscriberRepository::open(data_dir).await?,
                notifier,
            ),
            resume: ResumeUseCases::new(FileResumeStore::new(data_dir), upload_policy),
            login_admin,
        })
    }
}

async fn json_collection<T: ContentResource>(
    data_dir: &Path,
) -> Result<ContentUseCases<T>, StoreError> {
    let repository = JsonFileContentRepository::<T>::open(data_dir).await?;
    Ok(ContentUseCases::from_repository(repository))
}

/// Shared app data plus every route; used by the binary and the end-to-end tests.
pub fn configure_app(
    cfg: &mut web::ServiceConfig,
    state: &AppState,
    token_provider: &Arc<dyn TokenProvider + Send + Sync>,
) {
    cfg.app_data(web::Data::new(state.clone()))
        .app_data(web::Data::new(Arc::clone(token_provider)))
        .app_data(custom_json_config())
        .configure(init_routes);
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_admin_handler);
    // Content collections
    cfg.configure(configure_content_routes::<EducationEntry>)
        .configure(configure_content_routes::<SkillEntry>)
        .configure(configure_content_routes::<ExperienceEntry>)
        .configure(configure_content_routes::<CertificationEntry>)
        .configure(configure_content_routes::<ProjectEntry>)
        .configure(configure_content_routes::<TestimonialEntry>)
        .configure(configure_content_routes::<ArticleEntry>)
        .configure(configure_content_routes::<ServiceEntry>);
    // Profile
    cfg.service(crate::profile::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::update_portfolio_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::get_about_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::update_about_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::get_contact_details_handler);
    // Inbox
    cfg.service(crate::inbox::adapter::incoming::web::routes::submit_contact_handler);
    cfg.service(crate::inbox::adapter::incoming::web::routes::list_contact_messages_handler);
    cfg.service(crate::inbox::adapter::incoming::web::routes::delete_contact_message_handler);
    cfg.service(crate::inbox::adapter::incoming::web::routes::subscribe_handler);
    cfg.service(crate::inbox::adapter::incoming::web::routes::list_subscribers_handler);
    cfg.service(crate::inbox::adapter::incoming::web::routes::unsubscribe_handler);
    // Resume
    cfg.service(crate::resume::adapter::incoming::web::routes::upload_resume_handler);
    cfg.service(crate::resume::adapter::incoming::web::routes::download_resume_handler);
    // Docs
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}
