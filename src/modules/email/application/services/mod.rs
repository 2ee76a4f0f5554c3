mod inbox_email_service;

pub use inbox_email_service::InboxEmailService;
