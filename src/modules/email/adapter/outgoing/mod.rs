pub mod memory_sender;
pub mod smtp_sender;

pub use memory_sender::{MemoryEmailSender, SentEmail};
pub use smtp_sender::{SmtpEmailSender, SmtpSetupError};
