use serde::{Deserialize, Serialize};

use crate::shared::store::Identified;

/// A stored collection item: the server-assigned id next to the item's own fields.
///
/// On the wire the fields are flattened: `{"id": 3, "title": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<T> {
    pub id: i64,
    #[serde(flatten)]
    pub fields: T,
}

impl<T> Record<T> {
    pub fn new(id: i64, fields: T) -> Self {
        Self { id, fields }
    }
}

impl<T> Identified for Record<T> {
    fn id(&self) -> i64 {
        self.id
    }
}
