use crate::api::schemas::{ErrorResponse, MessageResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{LoginRequestDto, LoginResponse};
// Content
use crate::content::{
    adapter::incoming::web::routes::DeleteRecordRequest,
    application::domain::{
        ArticleEntry, CertificationEntry, EducationEntry, ExperienceEntry, ProjectEntry,
        ServiceEntry, SkillEntry, TestimonialEntry,
    },
};
// Inbox
use crate::inbox::{
    adapter::incoming::web::routes::{ContactRequest, SubscribeRequest},
    application::domain::{ContactMessage, NewsletterSubscriber},
};
// Profile
use crate::profile::{
    adapter::incoming::web::routes::{AboutBody, AboutRequest},
    application::domain::{PortfolioProfile, ProfileDetails, ProfileUpdate},
};
// Resume
use crate::resume::{
    adapter::incoming::web::routes::ResumeUploadForm, application::domain::ResumeInfo,
};

/// Collections (`/api/education`, `/api/projects`, ...) share one generic handler set,
/// so only their entry schemas are listed here.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "API documentation for the portfolio website and its admin panel",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_admin_handler,

        // Profile endpoints
        crate::profile::adapter::incoming::web::routes::get_portfolio_handler,
        crate::profile::adapter::incoming::web::routes::update_portfolio_handler,
        crate::profile::adapter::incoming::web::routes::get_contact_details_handler,
        crate::profile::adapter::incoming::web::routes::get_about_handler,
        crate::profile::adapter::incoming::web::routes::update_about_handler,

        // Inbox endpoints
        crate::inbox::adapter::incoming::web::routes::submit_contact_handler,
        crate::inbox::adapter::incoming::web::routes::list_contact_messages_handler,
        crate::inbox::adapter::incoming::web::routes::delete_contact_message_handler,
        crate::inbox::adapter::incoming::web::routes::subscribe_handler,
        crate::inbox::adapter::incoming::web::routes::list_subscribers_handler,
        crate::inbox::adapter::incoming::web::routes::unsubscribe_handler,

        // Resume endpoints
        crate::resume::adapter::incoming::web::routes::upload_resume_handler,
        crate::resume::adapter::incoming::web::routes::download_resume_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            MessageResponse,

            // Auth DTOs
            LoginRequestDto,
            LoginResponse,

            // Content entries
            EducationEntry,
            SkillEntry,
            ExperienceEntry,
            CertificationEntry,
            ProjectEntry,
            TestimonialEntry,
            ArticleEntry,
            ServiceEntry,
            DeleteRecordRequest,

            // Profile DTOs
            PortfolioProfile,
            ProfileDetails,
            ProfileUpdate,
            AboutBody,
            AboutRequest,

            // Inbox DTOs
            ContactRequest,
            ContactMessage,
            SubscribeRequest,
            NewsletterSubscriber,

            // Resume DTOs
            ResumeUploadForm,
            ResumeInfo
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin login"),
        (name = "content", description = "Portfolio collections: education, skills, projects, ..."),
        (name = "profile", description = "Profile details and about text"),
        (name = "inbox", description = "Contact messages and newsletter subscribers"),
        (name = "resume", description = "Resume upload and download"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by POST /api/auth"))
                        .build(),
                ),
            )
        }
    }
}
