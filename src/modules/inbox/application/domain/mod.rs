mod entities;

pub use entities::{
    ContactMessage, ContactSubmission, InboxValidationError, NewsletterSubscriber,
    SubscriptionRequest,
};
