use async_trait::async_trait;

use crate::content::application::domain::{ContentResource, ContentValidationError, Record};

//
// ──────────────────────────────────────────────────────────
// Create Content Command
// ──────────────────────────────────────────────────────────
//

/// Fields that passed the collection's required-field check.
#[derive(Debug, Clone)]
pub struct CreateContentCommand<T> {
    fields: T,
}

impl<T: ContentResource> CreateContentCommand<T> {
    pub fn new(fields: T) -> Result<Self, ContentValidationError> {
        fields.validate()?;
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &T {
        &self.fields
    }

    pub fn into_fields(self) -> T {
        self.fields
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateContentError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateContentUseCase<T: ContentResource>: Send + Sync {
    async fn execute(&self, command: CreateContentCommand<T>)
        -> Result<Record<T>, CreateContentError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::application::domain::SkillEntry;

    #[test]
    fn command_rejects_blank_required_field() {
        let result = CreateContentCommand::new(SkillEntry::default());

        assert!(matches!(
            result,
            Err(ContentValidationError::MissingField("name"))
        ));
    }

    #[test]
    fn command_keeps_fields_untouched() {
        let fields = SkillEntry {
            name: "  Rust ".to_string(),
            ..Default::default()
        };

        let command = CreateContentCommand::new(fields.clone()).unwrap();

        assert_eq!(command.into_fields(), fields);
    }
}
