mod content_repository_json;
mod content_repository_memory;

pub use content_repository_json::JsonFileContentRepository;
pub use content_repository_memory::InMemoryContentRepository;
