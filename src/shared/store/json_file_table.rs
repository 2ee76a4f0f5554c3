use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::RwLock;
use tracing::{error, info};

use super::json_file::{load_json, save_json, StoreError};
use super::memory_table::{Identified, TableInner};

/// A table kept in memory and written to one JSON file after every change.
///
/// A change is only applied once the file write succeeded, so memory and disk
/// never disagree. Ids keep increasing across restarts.
pub struct JsonFileTable<T> {
    path: Arc<PathBuf>,
    inner: Arc<RwLock<TableInner<T>>>,
}

impl<T> Clone for JsonFileTable<T> {
    fn clone(&self) -> Self {
        Self {
            path: Arc::clone(&self.path),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> JsonFileTable<T>
where
    T: Identified + Clone + Serialize + DeserializeOwned + Send + Sync,
{
    /// Loads the table from `path`, or starts empty when the file is absent.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let inner: TableInner<T> = load_json(&path).await?.unwrap_or_default();
        info!(path = %path.display(), rows = inner.rows.len(), "Opened table");

        Ok(Self {
            path: Arc::new(path),
            inner: Arc::new(RwLock::new(inner)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Applies `change` to a copy, persists the copy, then swaps it in.
    async fn mutate<R>(
        &self,
        change: impl FnOnce(&mut TableInner<T>) -> R,
    ) -> Result<R, StoreError> {
        let mut guard = self.inner.write().await;
        let mut next = guard.clone();
        let result = change(&mut next);

        save_json(&self.path, &next).await.map_err(|e| {
            error!(path = %self.path.display(), "Failed to persist table: {}", e);
            e
        })?;

        *guard = next;
        Ok(result)
    }

    pub async fn insert_with<F>(&self, build: F) -> Result<T, StoreError>
    where
        F: FnOnce(i64) -> T,
    {
        self.mutate(|inner| inner.insert_with(build)).await
    }

    /// Inner `Err` carries the conflicting row; nothing is written then.
    pub async fn insert_unless<P, F>(
        &self,
        conflict: P,
        build: F,
    ) -> Result<Result<T, T>, StoreError>
    where
        P: Fn(&T) -> bool,
        F: FnOnce(i64) -> T,
    {
        if let Some(existing) = self.inner.read().await.find_by(&conflict) {
            return Ok(Err(existing));
        }
        self.mutate(|inner| inner.insert_unless(conflict, build))
            .await
    }

    pub async fn all(&self) -> Vec<T> {
        self.inner.read().await.rows.clone()
    }

    pub async fn replace(&self, row: T) -> Result<Option<T>, StoreError> {
        let id = row.id();
        if self.inner.read().await.find_by(|r| r.id() == id).is_none() {
            return Ok(None);
        }
        self.mutate(|inner| inner.replace(row)).await
    }

    pub async fn remove(&self, id: i64) -> Result<Option<T>, StoreError> {
        if self.inner.read().await.find_by(|r| r.id() == id).is_none() {
            return Ok(None);
        }
        self.mutate(|inner| inner.remove(id)).await
    }
}
