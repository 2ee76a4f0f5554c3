use std::collections::BTreeMap;

use serde_json::{Map, Number, Value};

use crate::content::application::domain::{ContentResource, TagList};

/// Raw text of every form input, keyed by field name.
pub type FormValues = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    LongText,
    /// Shown as a date picker; the value is sent as typed.
    Date,
    /// A hint only, never validated.
    Url,
    /// Comma-separated text edited as one string, sent as a list.
    List,
    /// Whole number clamped into `min..=max` before sending.
    Integer { min: i64, max: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Blank input is sent as `null` instead of `""`.
    pub nullable: bool,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            nullable: false,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

/// A collection entry that has an admin form.
pub trait AdminForm: ContentResource {
    const FIELDS: &'static [FieldSpec];
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{label} is required")]
    MissingField { label: &'static str },

    #[error("{label} must be a whole number")]
    NotANumber { label: &'static str },

    #[error("Invalid form data: {0}")]
    Shape(String),
}

pub fn empty_form<T: AdminForm>() -> FormValues {
    T::FIELDS
        .iter()
        .map(|field| (field.name.to_string(), String::new()))
        .collect()
}

/// Turns form text into an entry.
///
/// Required fields must be non-blank. Nothing else is validated.
pub fn parse_form<T: AdminForm>(values: &FormValues) -> Result<T, FormError> {
    let mut object = Map::new();

    for field in T::FIELDS {
        let raw = values.get(field.name).map(String::as_str).unwrap_or_default();
        let blank = raw.trim().is_empty();

        if field.required && blank {
            return Err(FormError::MissingField { label: field.label });
        }

        let value = match field.kind {
            _ if blank && field.nullable => Value::Null,
            FieldKind::List => Value::Array(
                TagList::from_comma_text(raw)
                    .iter()
                    .cloned()
                    .map(Value::String)
                    .collect(),
            ),
            FieldKind::Integer { min, max } => {
                if blank {
                    Value::Number(Number::from(min))
                } else {
                    let parsed = raw
                        .trim()
                        .parse::<i64>()
                        .map_err(|_| FormError::NotANumber { label: field.label })?;
                    Value::Number(Number::from(parsed.clamp(min, max)))
                }
            }
            FieldKind::Text | FieldKind::LongText | FieldKind::Date | FieldKind::Url => {
                Value::String(raw.to_string())
            }
        };
        object.insert(field.name.to_string(), value);
    }

    serde_json::from_value(Value::Object(object)).map_err(|e| FormError::Shape(e.to_string()))
}

/// Pre-fills the form from an entry; lists are joined with `", "`.
pub fn fill_form<T: AdminForm>(entry: &T) -> FormValues {
    let object = serde_json::to_value(entry)
        .ok()
        .and_then(|value| match value {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .unwrap_or_default();

    T::FIELDS
        .iter()
        .map(|field| {
            let text = match object.get(field.name) {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                Some(Value::Array(items)) => items
                    .iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<_>>()
                    .join(TagList::SEPARATOR),
                Some(Value::Bool(b)) => b.to_string(),
                Some(Value::Null) | Some(Value::Object(_)) | None => String::new(),
            };
            (field.name.to_string(), text)
        })
        .collect()
}
