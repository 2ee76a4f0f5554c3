use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::email::application::ports::outgoing::InboxEmailNotifier;
use crate::inbox::application::{
    domain::{ContactMessage, ContactSubmission},
    ports::{
        incoming::use_cases::{
            DeleteContactMessageUseCase, InboxError, ListContactMessagesUseCase,
            SubmitContactUseCase,
        },
        outgoing::{contact_message_repository::ContactMessageRepository, InboxRepositoryError},
    },
};

pub struct ContactService<R>
where
    R: ContactMessageRepository,
{
    repository: R,
    notifier: Arc<dyn InboxEmailNotifier + Send + Sync>,
}

impl<R> ContactService<R>
where
    R: ContactMessageRepository,
{
    pub fn new(repository: R, notifier: Arc<dyn InboxEmailNotifier + Send + Sync>) -> Self {
        Self {
            repository,
            notifier,
        }
    }
}

fn map_repository_error(err: InboxRepositoryError) -> InboxError {
    match err {
        InboxRepositoryError::NotFound => InboxError::NotFound,
        other => InboxError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<R> SubmitContactUseCase for ContactService<R>
where
    R: ContactMessageRepository,
{
    async fn execute(&self, submission: ContactSubmission) -> Result<ContactMessage, InboxError> {
        let message = self
            .repository
            .insert(submission)
            .await
            .map_err(map_repository_error)?;

        info!(message_id = message.id, "Contact message received");

        // Best effort: the message is stored either way
        if let Err(e) = self.notifier.send_contact_acknowledgement(&message).await {
            warn!(message_id = message.id, error = %e, "Failed to send acknowledgment email");
        }

        Ok(message)
    }
}

#[async_trait]
impl<R> ListContactMessagesUseCase for ContactService<R>
where
    R: ContactMessageRepository,
{
    async fn execute(&self) -> Result<Vec<ContactMessage>, InboxError> {
        self.repository.list().await.map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> DeleteContactMessageUseCase for ContactService<R>
where
    R: ContactMessageRepository,
{
    async fn execute(&self, id: i64) -> Result<(), InboxError> {
        self.repository
            .delete(id)
            .await
            .map_err(map_repository_error)?;

        info!(message_id = id, "Contact message deleted");
        Ok(())
    }
}
