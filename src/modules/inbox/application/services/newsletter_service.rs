use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::email::application::ports::outgoing::InboxEmailNotifier;
use crate::inbox::application::{
    domain::{NewsletterSubscriber, SubscriptionRequest},
    ports::{
        incoming::use_cases::{
            InboxError, ListSubscribersUseCase, SubscribeError, SubscribeUseCase,
            UnsubscribeUseCase,
        },
        outgoing::{subscriber_repository::SubscriberRepository, InboxRepositoryError},
    },
};

pub struct NewsletterService<R>
where
    R: SubscriberRepository,
{
    repository: R,
    notifier: Arc<dyn InboxEmailNotifier + Send + Sync>,
}

impl<R> NewsletterService<R>
where
    R: SubscriberRepository,
{
    pub fn new(repository: R, notifier: Arc<dyn InboxEmailNotifier + Send + Sync>) -> Self {
        Self {
            repository,
            notifier,
        }
    }
}

#[async_trait]
impl<R> SubscribeUseCase for NewsletterService<R>
where
    R: SubscriberRepository,
{
    async fn execute(
        &self,
        request: SubscriptionRequest,
    ) -> Result<NewsletterSubscriber, SubscribeError> {
        let subscriber = self
            .repository
            .insert(request)
            .await
            .map_err(|e| match e {
                InboxRepositoryError::AlreadySubscribed => SubscribeError::AlreadySubscribed,
                other => SubscribeError::RepositoryError(other.to_string()),
            })?;

        info!(subscriber_id = subscriber.id, "Newsletter subscription added");

        if let Err(e) = self
            .notifier
            .send_subscription_confirmation(&subscriber)
            .await
        {
            warn!(subscriber_id = subscriber.id, error = %e, "Failed to send confirmation email");
        }

        Ok(subscriber)
    }
}

#[async_trait]
impl<R> ListSubscribersUseCase for NewsletterService<R>
where
    R: SubscriberRepository,
{
    async fn execute(&self) -> Result<Vec<NewsletterSubscriber>, InboxError> {
        self.repository
            .list()
            .await
            .map_err(|e| InboxError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> UnsubscribeUseCase for NewsletterService<R>
where
    R: SubscriberRepository,
{
    async fn execute(&self, id: i64) -> Result<(), InboxError> {
        self.repository.delete(id).await.map_err(|e| match e {
            InboxRepositoryError::NotFound => InboxError::NotFound,
            other => InboxError::RepositoryError(other.to_string()),
        })?;

        info!(subscriber_id = id, "Newsletter subscriber removed");
        Ok(())
    }
}
