use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AdminUser,
    content::application::{
        content_use_cases::ContentUseCases,
        domain::{
            ArticleEntry, CertificationEntry, ContentResource, ContentValidationError,
            EducationEntry, ExperienceEntry, ProjectEntry, Record, ServiceEntry, SkillEntry,
            TestimonialEntry,
        },
        ports::incoming::use_cases::{
            CreateContentCommand, CreateContentError, DeleteContentError, ListContentError,
            UpdateContentCommand, UpdateContentError,
        },
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Collection wiring
// ──────────────────────────────────────────────────────────
//

/// A collection reachable through [`AppState`].
pub trait ContentSlot: ContentResource {
    fn use_cases(state: &AppState) -> &ContentUseCases<Self>;
}

macro_rules! content_slot {
    ($entry:ty, $field:ident) => {
        impl ContentSlot for $entry {
            fn use_cases(state: &AppState) -> &ContentUseCases<Self> {
                &state.$field
            }
        }
    };
}

content_slot!(EducationEntry, education);
content_slot!(SkillEntry, skills);
content_slot!(ExperienceEntry, experience);
content_slot!(CertificationEntry, certifications);
content_slot!(ProjectEntry, projects);
content_slot!(TestimonialEntry, testimonials);
content_slot!(ArticleEntry, articles);
content_slot!(ServiceEntry, services);

/// Registers `GET/POST/PUT/DELETE /api/{resource}` for one collection.
pub fn configure_content_routes<T: ContentSlot>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(format!("/api/{}", T::RESOURCE))
            .route(web::get().to(list_content_handler::<T>))
            .route(web::post().to(create_content_handler::<T>))
            .route(web::put().to(update_content_handler::<T>))
            .route(web::delete().to(delete_content_handler::<T>)),
    );
}

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteRecordRequest {
    #[schema(example = 3)]
    pub id: i64,
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

pub async fn list_content_handler<T: ContentSlot>(data: web::Data<AppState>) -> HttpResponse {
    match T::use_cases(&data).list.execute().await {
        Ok(records) => ApiResponse::collection(T::LIST_KEY, records),
        Err(ListContentError::QueryFailed(msg)) => {
            error!("Failed to list {}: {}", T::RESOURCE, msg);
            ApiResponse::internal_error()
        }
    }
}

pub async fn create_content_handler<T: ContentSlot>(
    req: HttpRequest,
    data: web::Data<AppState>,
    body: web::Bytes,
) -> HttpResponse {
    // Auth first: the body is only parsed once the caller may create.
    if !T::PUBLIC_CREATE {
        if let Err(response) = AdminUser::from_http_request(&req) {
            return response;
        }
    }

    let fields: T = match serde_json::from_slice(&body) {
        Ok(fields) => fields,
        Err(err) => {
            return ApiResponse::bad_request(
                "VALIDATION_ERROR",
                &format!("Json deserialize error: {}", err),
            )
        }
    };

    let command = match CreateContentCommand::new(fields) {
        Ok(cmd) => cmd,
        Err(err) => return map_validation_error(err),
    };

    match T::use_cases(&data).create.execute(command).await {
        Ok(record) => ApiResponse::created(record),
        Err(CreateContentError::RepositoryError(msg)) => {
            error!("Failed to create {}: {}", T::RESOURCE, msg);
            ApiResponse::internal_error()
        }
    }
}

pub async fn update_content_handler<T: ContentSlot>(
    _admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<Record<T>>,
) -> HttpResponse {
    let command = match UpdateContentCommand::new(payload.into_inner()) {
        Ok(cmd) => cmd,
        Err(err) => return map_validation_error(err),
    };
    let id = command.id();

    match T::use_cases(&data).update.execute(command).await {
        Ok(record) => ApiResponse::success(record),
        Err(UpdateContentError::NotFound) => not_found::<T>(),
        Err(UpdateContentError::RepositoryError(msg)) => {
            error!("Failed to update {} {}: {}", T::RESOURCE, id, msg);
            ApiResponse::internal_error()
        }
    }
}

pub async fn delete_content_handler<T: ContentSlot>(
    _admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<DeleteRecordRequest>,
) -> HttpResponse {
    let id = payload.id;

    match T::use_cases(&data).delete.execute(id).await {
        Ok(()) => ApiResponse::message(format!("{} {} deleted successfully", T::LABEL, id)),
        Err(DeleteContentError::NotFound) => not_found::<T>(),
        Err(DeleteContentError::RepositoryError(msg)) => {
            error!("Failed to delete {} {}: {}", T::RESOURCE, id, msg);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_validation_error(err: ContentValidationError) -> HttpResponse {
    ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
}

fn not_found<T: ContentResource>() -> HttpResponse {
    ApiResponse::not_found("NOT_FOUND", &format!("{} not found", T::LABEL))
}
