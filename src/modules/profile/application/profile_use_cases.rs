use std::sync::Arc;

use crate::content::application::{
    content_use_cases::ContentUseCases,
    domain::{EducationEntry, SkillEntry},
};
use crate::profile::application::{
    ports::{
        incoming::use_cases::{GetPortfolioUseCase, UpdateProfileUseCase},
        outgoing::ProfileRepository,
    },
    services::ProfileService,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub get: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProfileUseCase + Send + Sync>,
}

impl ProfileUseCases {
    /// The profile embeds the education and skills collections it is given.
    pub fn new<R>(
        repository: R,
        education: &ContentUseCases<EducationEntry>,
        skills: &ContentUseCases<SkillEntry>,
        owner_name: impl Into<String>,
    ) -> Self
    where
        R: ProfileRepository + 'static,
    {
        let service = Arc::new(ProfileService::new(
            repository,
            Arc::clone(&education.list),
            Arc::clone(&skills.list),
            owner_name,
        ));

        Self {
            get: service.clone(),
            update: service,
        }
    }
}
