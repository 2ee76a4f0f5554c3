use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use crate::content::application::{
    domain::{EducationEntry, SkillEntry},
    ports::incoming::use_cases::ListContentUseCase,
};
use crate::profile::application::{
    domain::{PortfolioProfile, ProfileDetails, ProfileUpdate},
    ports::{
        incoming::use_cases::{
            GetPortfolioUseCase, ProfileError, UpdateProfileError, UpdateProfileUseCase,
        },
        outgoing::ProfileRepository,
    },
};

pub struct ProfileService<R>
where
    R: ProfileRepository,
{
    repository: R,
    education: Arc<dyn ListContentUseCase<EducationEntry> + Send + Sync>,
    skills: Arc<dyn ListContentUseCase<SkillEntry> + Send + Sync>,
    owner_name: String,
    // Serializes read-modify-write cycles of the singleton
    write_lock: Mutex<()>,
}

impl<R> ProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(
        repository: R,
        education: Arc<dyn ListContentUseCase<EducationEntry> + Send + Sync>,
        skills: Arc<dyn ListContentUseCase<SkillEntry> + Send + Sync>,
        owner_name: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            education,
            skills,
            owner_name: owner_name.into(),
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl<R> GetPortfolioUseCase for ProfileService<R>
where
    R: ProfileRepository,
{
    async fn execute(&self) -> Result<PortfolioProfile, ProfileError> {
        let (details, education, skills) = futures::try_join!(
            async {
                self.details()
                    .await
                    .map(|d| d.unwrap_or_else(|| ProfileDetails::named(self.owner_name.clone())))
            },
            async {
                self.education
                    .execute()
                    .await
                    .map_err(|e| ProfileError::QueryFailed(e.to_string()))
            },
            async {
                self.skills
                    .execute()
                    .await
                    .map_err(|e| ProfileError::QueryFailed(e.to_string()))
            },
        )?;

        Ok(PortfolioProfile {
            details,
            education,
            skills,
        })
    }

    async fn details(&self) -> Result<Option<ProfileDetails>, ProfileError> {
        self.repository
            .get()
            .await
            .map_err(|e| ProfileError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl<R> UpdateProfileUseCase for ProfileService<R>
where
    R: ProfileRepository,
{
    async fn execute(&self, update: ProfileUpdate) -> Result<ProfileDetails, UpdateProfileError> {
        update.validate()?;

        let _guard = self.write_lock.lock().await;

        let mut details = self
            .repository
            .get()
            .await
            .map_err(|e| UpdateProfileError::RepositoryError(e.to_string()))?
            .unwrap_or_else(|| ProfileDetails::named(self.owner_name.clone()));

        details.apply(update);

        self.repository
            .save(details.clone())
            .await
            .map_err(|e| UpdateProfileError::RepositoryError(e.to_string()))?;

        info!("Profile updated");
        Ok(details)
    }
}
