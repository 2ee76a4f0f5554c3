mod create_content;
mod delete_content;
mod list_content;
mod update_content;

pub use create_content::{CreateContentCommand, CreateContentError, CreateContentUseCase};
pub use delete_content::{DeleteContentError, DeleteContentUseCase};
pub use list_content::{ListContentError, ListContentUseCase};
pub use update_content::{UpdateContentCommand, UpdateContentError, UpdateContentUseCase};
