use crate::inbox::application::domain::{ContactMessage, NewsletterSubscriber};

#[derive(Debug, thiserror::Error)]
pub enum InboxNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

/// Courtesy emails sent to visitors after they reach out.
#[async_trait::async_trait]
pub trait InboxEmailNotifier: Send + Sync {
    async fn send_contact_acknowledgement(
        &self,
        message: &ContactMessage,
    ) -> Result<(), InboxNotificationError>;

    async fn send_subscription_confirmation(
        &self,
        subscriber: &NewsletterSubscriber,
    ) -> Result<(), InboxNotificationError>;
}
