use serde::{Deserialize, Deserializer, Serialize};

/// Ordered list of short labels (technologies, tags, features).
///
/// Always normalized: every entry trimmed, empty entries dropped.
/// Forms edit it as one comma-joined string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct TagList(Vec<String>);

impl TagList {
    pub const SEPARATOR: &'static str = ", ";

    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            items
                .into_iter()
                .map(|item| item.as_ref().trim().to_string())
                .filter(|item| !item.is_empty())
                .collect(),
        )
    }

    /// Splits on commas, trimming each segment.
    pub fn from_comma_text(text: &str) -> Self {
        Self::new(text.split(','))
    }

    pub fn to_comma_text(&self) -> String {
        self.0.join(Self::SEPARATOR)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for TagList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            List(Vec<String>),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::List(items) => TagList::new(items),
            Raw::Text(text) => TagList::from_comma_text(&text),
        })
    }
}
