use std::sync::Arc;

use crate::resume::application::{
    domain::UploadPolicy,
    ports::{
        incoming::use_cases::{DownloadResumeUseCase, UploadResumeUseCase},
        outgoing::ResumeStore,
    },
    services::ResumeService,
};

#[derive(Clone)]
pub struct ResumeUseCases {
    pub upload: Arc<dyn UploadResumeUseCase + Send + Sync>,
    pub download: Arc<dyn DownloadResumeUseCase + Send + Sync>,
}

impl ResumeUseCases {
    pub fn new<S>(store: S, policy: UploadPolicy) -> Self
    where
        S: ResumeStore + 'static,
    {
        let service = Arc::new(ResumeService::new(store, policy));
        Self {
            upload: service.clone(),
            download: service,
        }
    }
}
