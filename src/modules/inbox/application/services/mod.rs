mod contact_service;
mod newsletter_service;

pub use contact_service::ContactService;
pub use newsletter_service::NewsletterService;
