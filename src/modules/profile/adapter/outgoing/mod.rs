mod profile_repository_json;
mod profile_repository_memory;

pub use profile_repository_json::JsonFileProfileRepository;
pub use profile_repository_memory::InMemoryProfileRepository;
