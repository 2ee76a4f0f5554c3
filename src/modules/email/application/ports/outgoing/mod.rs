pub mod email_sender;
pub mod inbox_email_notifier;

pub use email_sender::EmailSender;
pub use inbox_email_notifier::{InboxEmailNotifier, InboxNotificationError};
