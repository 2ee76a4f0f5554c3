use std::sync::Arc;

use crate::email::application::ports::outgoing::InboxEmailNotifier;
use crate::inbox::application::{
    ports::{
        incoming::use_cases::{
            DeleteContactMessageUseCase, ListContactMessagesUseCase, ListSubscribersUseCase,
            SubmitContactUseCase, SubscribeUseCase, UnsubscribeUseCase,
        },
        outgoing::{ContactMessageRepository, SubscriberRepository},
    },
    services::{ContactService, NewsletterService},
};

#[derive(Clone)]
pub struct InboxUseCases {
    pub submit_contact: Arc<dyn SubmitContactUseCase + Send + Sync>,
    pub list_messages: Arc<dyn ListContactMessagesUseCase + Send + Sync>,
    pub delete_message: Arc<dyn DeleteContactMessageUseCase + Send + Sync>,
    pub subscribe: Arc<dyn SubscribeUseCase + Send + Sync>,
    pub list_subscribers: Arc<dyn ListSubscribersUseCase + Send + Sync>,
    pub unsubscribe: Arc<dyn UnsubscribeUseCase + Send + Sync>,
}

impl InboxUseCases {
    pub fn new<C, S>(
        messages: C,
        subscribers: S,
        notifier: Arc<dyn InboxEmailNotifier + Send + Sync>,
    ) -> Self
    where
        C: ContactMessageRepository + 'static,
        S: SubscriberRepository + 'static,
    {
        let contact = Arc::new(ContactService::new(messages, Arc::clone(&notifier)));
        let newsletter = Arc::new(NewsletterService::new(subscribers, notifier));

        Self {
            submit_contact: contact.clone(),
            list_messages: contact.clone(),
            delete_message: contact,
            subscribe: newsletter.clone(),
            list_subscribers: newsletter.clone(),
            unsubscribe: newsletter,
        }
    }
}
