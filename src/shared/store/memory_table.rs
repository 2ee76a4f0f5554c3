use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Rows stored in a [`MemoryTable`] expose their server-assigned id.
pub trait Identified {
    fn id(&self) -> i64;
}

/// Rows plus the id counter. Also the on-disk shape of a [`JsonFileTable`](super::JsonFileTable).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct TableInner<T> {
    pub(super) next_id: i64,
    pub(super) rows: Vec<T>,
}

impl<T> Default for TableInner<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: Vec::new(),
        }
    }
}

impl<T: Identified + Clone> TableInner<T> {
    pub(super) fn insert_with<F>(&mut self, build: F) -> T
    where
        F: FnOnce(i64) -> T,
    {
        let id = self.next_id;
        self.next_id += 1;

        let row = build(id);
        self.rows.push(row.clone());
        row
    }

    pub(super) fn insert_unless<P, F>(&mut self, conflict: P, build: F) -> Result<T, T>
    where
        P: Fn(&T) -> bool,
        F: FnOnce(i64) -> T,
    {
        if let Some(existing) = self.rows.iter().find(|row| conflict(row)) {
            return Err(existing.clone());
        }
        Ok(self.insert_with(build))
    }

    pub(super) fn find_by<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.rows.iter().find(|row| predicate(row)).cloned()
    }

    pub(super) fn replace(&mut self, row: T) -> Option<T> {
        let slot = self.rows.iter_mut().find(|r| r.id() == row.id())?;
        *slot = row.clone();
        Some(row)
    }

    pub(super) fn remove(&mut self, id: i64) -> Option<T> {
        let index = self.rows.iter().position(|r| r.id() == id)?;
        Some(self.rows.remove(index))
    }
}

/// In-memory table with monotonically increasing ids.
///
/// Ids start at 1 and are never reused, even after deletes.
/// Cloning shares the underlying rows.
pub struct MemoryTable<T> {
    inner: Arc<RwLock<TableInner<T>>>,
}

impl<T> Clone for MemoryTable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for MemoryTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MemoryTable<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(TableInner::default())),
        }
    }
}

impl<T> MemoryTable<T>
where
    T: Identified + Clone + Send + Sync,
{
    /// Assigns the next id and stores the row built from it.
    pub async fn insert_with<F>(&self, build: F) -> T
    where
        F: FnOnce(i64) -> T,
    {
        self.inner.write().await.insert_with(build)
    }

    /// Inserts unless a row matching `conflict` already exists, which is returned instead.
    /// Check and insert happen under one write lock.
    pub async fn insert_unless<P, F>(&self, conflict: P, build: F) -> Result<T, T>
    where
        P: Fn(&T) -> bool,
        F: FnOnce(i64) -> T,
    {
        self.inner.write().await.insert_unless(conflict, build)
    }

    /// Rows in insertion order.
    pub async fn all(&self) -> Vec<T> {
        self.inner.read().await.rows.clone()
    }

    pub async fn find(&self, id: i64) -> Option<T> {
        self.find_by(|row| row.id() == id).await
    }

    pub async fn find_by<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.inner.read().await.find_by(predicate)
    }

    /// Replaces the row carrying the same id. Returns `None` when absent.
    pub async fn replace(&self, row: T) -> Option<T> {
        self.inner.write().await.replace(row)
    }

    pub async fn remove(&self, id: i64) -> Option<T> {
        self.inner.write().await.remove(id)
    }
}
