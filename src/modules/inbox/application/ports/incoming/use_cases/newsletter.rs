use async_trait::async_trait;

use super::InboxError;
use crate::inbox::application::domain::{NewsletterSubscriber, SubscriptionRequest};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubscribeError {
    #[error("Email already subscribed")]
    AlreadySubscribed,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubscribeUseCase: Send + Sync {
    async fn execute(
        &self,
        request: SubscriptionRequest,
    ) -> Result<NewsletterSubscriber, SubscribeError>;
}

#[async_trait]
pub trait ListSubscribersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<NewsletterSubscriber>, InboxError>;
}

#[async_trait]
pub trait UnsubscribeUseCase: Send + Sync {
    async fn execute(&self, id: i64) -> Result<(), InboxError>;
}
