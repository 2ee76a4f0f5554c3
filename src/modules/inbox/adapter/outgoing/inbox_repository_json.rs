use async_trait::async_trait;
use chrono::Utc;
use std::path::PathBuf;

use crate::inbox::application::{
    domain::{ContactMessage, ContactSubmission, NewsletterSubscriber, SubscriptionRequest},
    ports::outgoing::{ContactMessageRepository, InboxRepositoryError, SubscriberRepository},
};
use crate::shared::store::{JsonFileTable, StoreError};

pub const CONTACT_MESSAGES_FILE: &str = "contact_messages.json";
pub const SUBSCRIBERS_FILE: &str = "subscribers.json";

fn map_store_err(e: StoreError) -> InboxRepositoryError {
    InboxRepositoryError::StorageError(e.to_string())
}

#[derive(Clone)]
pub struct JsonFileContactMessageRepository {
    table: JsonFileTable<ContactMessage>,
}

impl JsonFileContactMessageRepository {
    pub async fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Ok(Self {
            table: JsonFileTable::open(data_dir.into().join(CONTACT_MESSAGES_FILE)).await?,
        })
    }
}

#[async_trait]
impl ContactMessageRepository for JsonFileContactMessageRepository {
    async fn insert(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactMessage, InboxRepositoryError> {
        let created_at = Utc::now();
        self.table
            .insert_with(|id| submission.into_message(id, created_at))
            .await
            .map_err(map_store_err)
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
            .map_err(map_store_err)?
            .map(|_| ())
            .ok_or(InboxRepositoryError::NotFound)
    }
}

#[derive(Clone)]
pub struct JsonFileSubscriberRepository {
    table: JsonFileTable<NewsletterSubscriber>,
}

impl JsonFileSubscriberRepository {
    pub async fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Ok(Self {
            table: JsonFileTable::open(data_dir.into().join(SUBSCRIBERS_FILE)).await?,
        })
    }
}

#[async_trait]
impl SubscriberRepository for JsonFileSubscriberRepository {
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
            .map_err(map_store_err)?
            .map_err(|_| InboxRepositoryError::AlreadySubscribed)
    }

    async fn list(&self) -> Result<Vec<NewsletterSubscriber>, InboxRepositoryError> {
        Ok(self.table.all().await)
    }

    async fn delete(&self, id: i64) -> Result<(), InboxRepositoryError> {
        self.table
            .remove(id)
            .await
            .map_err(map_store_err)?
            .map(|_| ())
            .ok_or(InboxRepositoryError::NotFound)
    }
}
