use actix_multipart::Multipart;
use actix_web::{
    get,
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    post, web, HttpResponse,
};
use futures::StreamExt;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::auth::AdminUser,
    resume::application::{
        domain::{ResumeInfo, UploadPolicy, UploadRejection},
        ports::incoming::use_cases::{DownloadResumeError, UploadResumeCommand, UploadResumeError},
    },
    shared::api::ApiResponse,
    AppState,
};

/// Multipart field carrying the PDF.
pub const FILE_FIELD: &str = "file";

/// Multipart body of a resume upload (documentation only)
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ResumeUploadForm {
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
}

/// Upload the resume
///
/// Replaces the current resume. Only PDF files are accepted.
#[utoipa::path(
    post,
    path = "/api/resume",
    tag = "resume",
    request_body(content = ResumeUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Stored", body = ResumeInfo),
        (
            status = 400,
            description = "No file or not a PDF",
            body = ErrorResponse,
            example = json!({
                "code": "INVALID_FILE",
                "message": "Only PDF files are allowed for resume"
            })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/resume")]
pub async fn upload_resume_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    mut payload: Multipart,
) -> HttpResponse {
    let max_bytes = data.resume.upload.max_file_size_bytes();

    let command = match read_file_field(&mut payload, max_bytes).await {
        Ok(command) => command,
        Err(response) => return response,
    };

    match data.resume.upload.execute(command).await {
        Ok(info) => ApiResponse::created(info),
        Err(UploadResumeError::Rejected(rejection)) => map_rejection(rejection),
        Err(UploadResumeError::StorageError(msg)) => {
            error!("Failed to store resume: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Download the resume
#[utoipa::path(
    get,
    path = "/api/resume",
    tag = "resume",
    responses(
        (status = 200, description = "The PDF as an attachment", content_type = "application/pdf", body = Vec<u8>),
        (status = 404, description = "No resume uploaded yet", body = ErrorResponse),
    )
)]
#[get("/api/resume")]
pub async fn download_resume_handler(data: web::Data<AppState>) -> HttpResponse {
    match data.resume.download.execute().await {
        Ok(file) => HttpResponse::Ok()
            .content_type(UploadPolicy::PDF_MIME_TYPE)
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(file.filename)],
            })
            .body(file.content),
        Err(DownloadResumeError::NotAvailable) => {
            ApiResponse::not_found("NOT_FOUND", "Resume not available")
        }
        Err(DownloadResumeError::StorageError(msg)) => {
            error!("Failed to read resume: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Reads the `file` field, stopping as soon as it grows past `max_bytes`.
async fn read_file_field(
    payload: &mut Multipart,
    max_bytes: usize,
) -> Result<UploadResumeCommand, HttpResponse> {
    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| {
            warn!("Malformed multipart body: {}", e);
            ApiResponse::bad_request("INVALID_MULTIPART", "Malformed multipart body")
        })?;

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let original_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);
        let content_type = field.content_type().map(|m| m.essence_str().to_string());

        let mut content = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| {
                warn!("Resume upload interrupted: {}", e);
                ApiResponse::bad_request("INVALID_MULTIPART", "Malformed multipart body")
            })?;

            if content.len() + chunk.len() > max_bytes {
                return Err(map_rejection(UploadRejection::TooLarge { max_bytes }));
            }
            content.extend_from_slice(&chunk);
        }

        return Ok(UploadResumeCommand {
            original_name,
            content_type,
            content,
        });
    }

    Err(map_rejection(UploadRejection::Empty))
}

fn map_rejection(rejection: UploadRejection) -> HttpResponse {
    match rejection {
        UploadRejection::TooLarge { .. } => {
            ApiResponse::payload_too_large("FILE_TOO_LARGE", &rejection.to_string())
        }
        UploadRejection::Empty | UploadRejection::NotPdf => {
            ApiResponse::bad_request("INVALID_FILE", &rejection.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header, http::StatusCode, test, App};

    use crate::{
        resume::{
            adapter::outgoing::InMemoryResumeStore, application::resume_use_cases::ResumeUseCases,
        },
        tests::support::{
            app_state_builder::TestAppStateBuilder,
            auth_helper::{bearer, token_provider_data},
            stubs::StubTokenProvider,
        },
    };

    const BOUNDARY: &str = "----portfolio-test-boundary";

    fn multipart_body(field: &str, file_name: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn upload_request(body: Vec<u8>) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/resume")
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(body)
    }

    macro_rules! resume_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state)
                    .app_data(token_provider_data(StubTokenProvider::accepting()))
                    .service(upload_resume_handler)
                    .service(download_resume_handler),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn download_before_upload_is_not_found() {
        let app = resume_app!(TestAppStateBuilder::default().build());

        let req = test::TestRequest::get().uri("/api/resume").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Resume not available");
    }

    #[actix_web::test]
    async fn upload_then_download_returns_same_bytes() {
        // Arrange
        let app = resume_app!(TestAppStateBuilder::default().build());
        let pdf = b"%PDF-1.4 fake resume";

        // Act
        let upload = upload_request(multipart_body("file", "cv.pdf", "application/pdf", pdf))
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, upload).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::CREATED);
        let info: serde_json::Value = test::read_body_json(resp).await;
        let filename = info["filename"].as_str().unwrap().to_string();
        assert!(filename.starts_with("resume_"));

        let download = test::TestRequest::get().uri("/api/resume").to_request();
        let resp = test::call_service(&app, download).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/pdf"
        );
        let disposition = resp
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment"));
        assert!(disposition.contains(&filename));
        let bytes = test::read_body(resp).await;
        assert_eq!(bytes.as_ref(), pdf);
    }

    #[actix_web::test]
    async fn non_pdf_is_bad_request() {
        let app = resume_app!(TestAppStateBuilder::default().build());

        let req = upload_request(multipart_body("file", "cv.docx", "application/msword", b"doc"))
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Only PDF files are allowed for resume");
    }

    #[actix_web::test]
    async fn missing_file_field_is_bad_request() {
        let app = resume_app!(TestAppStateBuilder::default().build());

        let req = upload_request(multipart_body("other", "cv.pdf", "application/pdf", b"%PDF"))
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "No file provided");
    }

    #[actix_web::test]
    async fn oversized_file_is_payload_too_large() {
        let state = TestAppStateBuilder::default()
            .with_resume(ResumeUseCases::new(
                InMemoryResumeStore::new(),
                UploadPolicy::new(8),
            ))
            .build();
        let app = resume_app!(state);

        let req = upload_request(multipart_body(
            "file",
            "cv.pdf",
            "application/pdf",
            b"%PDF-1.4 way more than eight bytes",
        ))
        .insert_header(bearer())
        .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[actix_web::test]
    async fn upload_without_token_is_unauthorized() {
        let app = resume_app!(TestAppStateBuilder::default().build());

        let req = upload_request(multipart_body("file", "cv.pdf", "application/pdf", b"%PDF"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
