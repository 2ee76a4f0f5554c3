use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::content::application::domain::{EducationEntry, Record, SkillEntry};

/// Editable part of the site owner's profile.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct ProfileDetails {
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "Senior Software Engineer")]
    pub title: String,
    pub summary: String,
    pub about: String,
    /// Free-form channels such as `email`, `github`, `location`
    pub contact: BTreeMap<String, String>,
}

impl ProfileDetails {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Applies every field present in `update`, leaving the rest untouched.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(summary) = update.summary {
            self.summary = summary;
        }
        if let Some(about) = update.about {
            self.about = about;
        }
        if let Some(contact) = update.contact {
            self.contact = contact;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileValidationError {
    #[error("name cannot be empty")]
    EmptyName,
}

/// Partial profile change; absent fields keep their value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<BTreeMap<String, String>>,
}

impl ProfileUpdate {
    pub fn about(text: impl Into<String>) -> Self {
        Self {
            about: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        match &self.name {
            Some(name) if name.trim().is_empty() => Err(ProfileValidationError::EmptyName),
            _ => Ok(()),
        }
    }
}

/// The public profile page: details plus the education and skills collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PortfolioProfile {
    #[serde(flatten)]
    pub details: ProfileDetails,
    #[schema(value_type = Vec<Object>)]
    pub education: Vec<Record<EducationEntry>>,
    #[schema(value_type = Vec<Object>)]
    pub skills: Vec<Record<SkillEntry>>,
}
