use crate::email::application::ports::outgoing::email_sender::EmailSender;
use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    message::header::ContentType, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

#[derive(Debug, thiserror::Error)]
pub enum SmtpSetupError {
    #[error("Invalid SMTP relay {server}: {reason}")]
    InvalidRelay { server: String, reason: String },
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from_email: String,
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
        }
    }

    /// STARTTLS relay with username/password authentication.
    pub fn new(
        smtp_server: &str,
        smtp_username: &str,
        smtp_password: &str,
        from_email: &str,
    ) -> Result<Self, SmtpSetupError> {
        let creds = Credentials::new(smtp_username.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(smtp_server)
            .map_err(|e| SmtpSetupError::InvalidRelay {
                server: smtp_server.to_string(),
                reason: e.to_string(),
            })?
            .credentials(creds)
            .build();

        Ok(Self::new_with_mailer(Box::new(transport), from_email))
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        let email = Message::builder()
            .from(self.from_email.parse().map_err(|e| format!("{:?}", e))?)
            .to(to.parse().map_err(|e| format!("{:?}", e))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(body.to_string())
            .map_err(|e| e.to_string())?;

        self.mailer.send(email).await.map_err(|e| e.to_string())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct RecordingMailer {
        sent: Arc<Mutex<Vec<Message>>>,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, email: Message) -> Result<(), String> {
            self.sent.lock().unwrap().push(email);
            Ok(())
        }
    }

    struct UnreachableMailer;

    #[async_trait]
    impl Mailer for UnreachableMailer {
        async fn send(&self, _: Message) -> Result<(), String> {
            panic!("Should not reach mailer when the message cannot be built");
        }
    }

    struct DownMailer;

    #[async_trait]
    impl Mailer for DownMailer {
        async fn send(&self, _: Message) -> Result<(), String> {
            Err("connection refused".to_string())
        }
    }

    #[tokio::test]
    async fn builds_and_hands_message_to_mailer() {
        let sent = Arc::new(Mutex::new(Vec::new()));
        let sender = SmtpEmailSender::new_with_mailer(
            Box::new(RecordingMailer { sent: sent.clone() }),
            "portfolio@example.com",
        );

        let result = sender
            .send_email("visitor@example.com", "Thanks", "<p>Hello</p>")
            .await;

        assert!(result.is_ok(), "Expected Ok, got {:?}", result);
        let sent = sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let raw = String::from_utf8(sent[0].formatted()).unwrap();
        assert!(raw.contains("To: visitor@example.com"));
        assert!(raw.contains("Subject: Thanks"));
    }

    #[tokio::test]
    async fn invalid_from_address_is_rejected_before_sending() {
        let sender =
            SmtpEmailSender::new_with_mailer(Box::new(UnreachableMailer), "invalid-from-email");

        let result = sender
            .send_email("recipient@example.com", "Subject", "<p>Test</p>")
            .await;

        assert!(result.is_err(), "Expected error from invalid 'from' address");
    }

    #[tokio::test]
    async fn invalid_to_address_is_rejected_before_sending() {
        let sender =
            SmtpEmailSender::new_with_mailer(Box::new(UnreachableMailer), "sender@example.com");

        let result = sender
            .send_email("not-an-email", "Subject", "<p>Test</p>")
            .await;

        assert!(result.is_err(), "Expected error from invalid 'to' address");
    }

    #[tokio::test]
    async fn mailer_failure_is_propagated() {
        let sender = SmtpEmailSender::new_with_mailer(Box::new(DownMailer), "sender@example.com");

        let result = sender
            .send_email("recipient@example.com", "Subject", "<p>Test</p>")
            .await;

        assert_eq!(result, Err("connection refused".to_string()));
    }
}
