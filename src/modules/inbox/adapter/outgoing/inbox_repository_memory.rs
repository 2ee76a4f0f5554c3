use async_trait::async_trait;
use chrono::Utc;

use crate::inbox::application::{
    domain::{ContactMessage, ContactSubmission, NewsletterSubscriber, SubscriptionRequest},
    ports::outgoing::{ContactMessageRepository, InboxRepositoryError, SubscriberRepository},
};
use crate::shared::store::MemoryTable;

#[derive(Clone, Default)]
pub struct InMemoryContactMessageRepository {
    table: MemoryTable<ContactMessage>,
}

impl InMemoryContactMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactMessageRepository for InMemoryContactMessageRepository {
    async fn insert(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactMessage, InboxRepositoryError> {
        let created_at = Utc::now();
        Ok(self
            .table
            .insert_with(|id| submission.into_message(id, created_at))
            .await)
    }

    async fn list(&self) -> Result<Vec<ContactMessage>, InboxRepositoryError> {
        let mut messages = self.table.all().await;
        messages.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(messages)
    }

    async fn delete(&self, id: i64) -> Result<(), InboxRepositoryError> {
        self.table
            .remove(id)
            .await
            .map(|_| ())
            .ok_or(InboxRepositoryError::NotFound)
    }
}

#[derive(Clone, Default)]
pub struct InMemorySubscriberRepository {
    table: MemoryTable<NewsletterSubscriber>,
}

impl InMemorySubscriberRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubscriberRepository for InMemorySubscriberRepository {
    async fn insert(
        &self,
        request: SubscriptionRequest,
    ) -> Result<NewsletterSubscriber, InboxRepositoryError> {
        let subscribed_at = Utc::now();
        self.table
            .insert_unless(
                |existing| existing.email == request.email(),
                |id| NewsletterSubscriber {
                    id,
                    email: request.email().to_string(),
                    subscribed_at,
                },
            )
            .await
            .map_err(|_| InboxRepositoryError::AlreadySubscribed)
    }

    async fn list(&self) -> Result<Vec<NewsletterSubscriber>, InboxRepositoryError> {
        Ok(self.table.all().await)
    }

    async fn delete(&self, id: i64) -> Result<(), InboxRepositoryError> {
        self.table
            .remove(id)
            .await
            .map(|_| ())
            .ok_or(InboxRepositoryError::NotFound)
    }
}
