mod inbox_repository_json;
mod inbox_repository_memory;

pub use inbox_repository_json::{JsonFileContactMessageRepository, JsonFileSubscriberRepository};
pub use inbox_repository_memory::{InMemoryContactMessageRepository, InMemorySubscriberRepository};
