use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// A content collection managed through the generic CRUD endpoints.
pub trait ContentResource:
    Serialize + DeserializeOwned + Clone + PartialEq + Debug + Send + Sync + 'static
{
    /// Path segment under the API base, e.g. `projects`.
    const RESOURCE: &'static str;

    /// Key wrapping the list in collection responses.
    const LIST_KEY: &'static str;

    /// Singular, capitalized, e.g. `Project`.
    const LABEL: &'static str;

    /// Anonymous visitors may create records (testimonials).
    const PUBLIC_CREATE: bool = false;

    /// `(field name, value)` pairs that must not be blank.
    fn required_fields(&self) -> Vec<(&'static str, &str)>;

    fn validate(&self) -> Result<(), ContentValidationError> {
        match self
            .required_fields()
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
        {
            Some((name, _)) => Err(ContentValidationError::MissingField(name)),
            None => Ok(()),
        }
    }
}
