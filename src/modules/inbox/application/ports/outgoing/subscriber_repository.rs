use async_trait::async_trait;

use super::InboxRepositoryError;
use crate::inbox::application::domain::{NewsletterSubscriber, SubscriptionRequest};

#[async_trait]
pub trait SubscriberRepository: Send + Sync {
    /// Fails with [`InboxRepositoryError::AlreadySubscribed`] when the email is taken.
    async fn insert(
        &self,
        request: SubscriptionRequest,
    ) -> Result<NewsletterSubscriber, InboxRepositoryError>;

    /// In subscription order.
    async fn list(&self) -> Result<Vec<NewsletterSubscriber>, InboxRepositoryError>;

    async fn delete(&self, id: i64) -> Result<(), InboxRepositoryError>;
}
