use crate::email::application::ports::outgoing::{
    email_sender::EmailSender,
    inbox_email_notifier::{InboxEmailNotifier, InboxNotificationError},
};
use crate::inbox::application::domain::{ContactMessage, NewsletterSubscriber};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

pub const CONTACT_ACK_SUBJECT: &str = "Acknowledgment: Your Message Has Been Received";

#[derive(Clone)]
pub struct InboxEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    signature: String,
}

impl fmt::Debug for InboxEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InboxEmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("signature", &self.signature)
            .finish()
    }
}

impl InboxEmailService {
    /// `signature` closes every email, e.g. the site owner's name.
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, signature: impl Into<String>) -> Self {
        Self {
            sender,
            signature: signature.into(),
        }
    }

    fn subscription_subject(&self) -> String {
        format!("Welcome to {}'s Newsletter!", self.signature)
    }
}

#[async_trait]
impl InboxEmailNotifier for InboxEmailService {
    async fn send_contact_acknowledgement(
        &self,
        message: &ContactMessage,
    ) -> Result<(), InboxNotificationError> {
        let body = format!(
            "<html>\
               <body>\
                 <h2>Thank You for Contacting Me!</h2>\
                 <p>Dear {name},</p>\
                 <p>This is an acknowledgment that I have received your message:</p>\
                 <p><strong>Message:</strong> {message}</p>\
                 <p>I will review your message and get back to you as soon as possible.</p>\
                 <p>Best regards,<br>{signature}</p>\
               </body>\
             </html>",
            name = escape_html(&message.name),
            message = escape_html(&message.message),
            signature = escape_html(&self.signature),
        );

        self.sender
            .send_email(&message.email, CONTACT_ACK_SUBJECT, &body)
            .await
            .map_err(InboxNotificationError::EmailSendingFailed)
    }

    async fn send_subscription_confirmation(
        &self,
        subscriber: &NewsletterSubscriber,
    ) -> Result<(), InboxNotificationError> {
        let subject = self.subscription_subject();
        let body = format!(
            "<html>\
               <body>\
                 <h2>{subject}</h2>\
                 <p>Thank you for subscribing to my newsletter. You'll now receive updates \
                 on my latest projects, articles, and technical insights.</p>\
                 <p>Best regards,<br>{signature}</p>\
               </body>\
             </html>",
            subject = escape_html(&subject),
            signature = escape_html(&self.signature),
        );

        self.sender
            .send_email(&subscriber.email, &subject, &body)
            .await
            .map_err(InboxNotificationError::EmailSendingFailed)
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::{mock, predicate::*};

    // Mock EmailSender trait
    mock! {
        pub EmailSenderMock {}
        #[async_trait]
        impl EmailSender for EmailSenderMock {
            async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String>;
        }
    }

    fn contact_message() -> ContactMessage {
        ContactMessage {
            id: 1,
            name: "Ana <script>".to_string(),
            email: "ana@example.com".to_string(),
            subject: String::new(),
            message: "Let's work together".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn debug_hides_sender() {
        let mock_sender = Arc::new(MockEmailSenderMock::new()) as Arc<dyn EmailSender + Send + Sync>;
        let service = InboxEmailService::new(mock_sender, "Jane Doe");

        let debug_output = format!("{:?}", service);

        assert_eq!(
            debug_output,
            "InboxEmailService { sender: \"<dyn EmailSender>\", signature: \"Jane Doe\" }"
        );
    }

    #[tokio::test]
    async fn acknowledgement_goes_to_the_visitor_with_escaped_content() {
        // Arrange
        let mut mock_sender = MockEmailSenderMock::new();
        mock_sender
            .expect_send_email()
            .with(
                eq("ana@example.com"),
                eq(CONTACT_ACK_SUBJECT),
                function(|body: &str| {
                    body.contains("Dear Ana &lt;script&gt;,")
                        && body.contains("Let&#39;s work together")
                        && body.contains("Jane Doe")
                }),
            )
            .times(1)
            .returning(|_, _, _| Ok(()));
        let service = InboxEmailService::new(Arc::new(mock_sender), "Jane Doe");

        // Act
        let result = service.send_contact_acknowledgement(&contact_message()).await;

        // Assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn subscription_confirmation_uses_signature_in_subject() {
        let mut mock_sender = MockEmailSenderMock::new();
        mock_sender
            .expect_send_email()
            .with(
                eq("reader@example.com"),
                eq("Welcome to Jane Doe's Newsletter!"),
                always(),
            )
            .times(1)
            .returning(|_, _, _| Ok(()));
        let service = InboxEmailService::new(Arc::new(mock_sender), "Jane Doe");
        let subscriber = NewsletterSubscriber {
            id: 4,
            email: "reader@example.com".to_string(),
            subscribed_at: Utc::now(),
        };

        let result = service.send_subscription_confirmation(&subscriber).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn sender_failure_is_reported() {
        let mut mock_sender = MockEmailSenderMock::new();
        mock_sender
            .expect_send_email()
            .returning(|_, _, _| Err("smtp down".to_string()));
        let service = InboxEmailService::new(Arc::new(mock_sender), "Jane Doe");

        let result = service.send_contact_acknowledgement(&contact_message()).await;

        assert!(matches!(
            result,
            Err(InboxNotificationError::EmailSendingFailed(ref msg)) if msg == "smtp down"
        ));
    }
}
