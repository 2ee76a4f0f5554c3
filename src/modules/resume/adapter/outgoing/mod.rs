mod resume_store_file;
mod resume_store_memory;

pub use resume_store_file::FileResumeStore;
pub use resume_store_memory::InMemoryResumeStore;
