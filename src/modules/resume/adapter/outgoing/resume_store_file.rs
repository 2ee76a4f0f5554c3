use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::{fs, sync::Mutex};
use tracing::warn;

use crate::resume::application::{
    domain::ResumeFile,
    ports::outgoing::{ResumeStore, ResumeStoreError},
};
use crate::shared::store::{load_json, save_json, write_atomically, StoreError};

const METADATA_FILE: &str = "current.json";

#[derive(Debug, Serialize, Deserialize)]
struct StoredResume {
    filename: String,
    uploaded_at: DateTime<Utc>,
}

/// Keeps the current PDF under `<data dir>/resume/`, next to a small metadata file.
#[derive(Clone)]
pub struct FileResumeStore {
    dir: Arc<PathBuf>,
    // Serializes replacements so the metadata always names a written file.
    write_lock: Arc<Mutex<()>>,
}

impl FileResumeStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Arc::new(data_dir.into().join("resume")),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    async fn metadata(&self) -> Result<Option<StoredResume>, StoreError> {
        load_json(&self.dir.join(METADATA_FILE)).await
    }
}

fn map_store_err(e: StoreError) -> ResumeStoreError {
    ResumeStoreError::StorageError(e.to_string())
}

#[async_trait]
impl ResumeStore for FileResumeStore {
    async fn current(&self) -> Result<Option<ResumeFile>, ResumeStoreError> {
        let Some(stored) = self.metadata().await.map_err(map_store_err)? else {
            return Ok(None);
        };

        let path = self.dir.join(&stored.filename);
        let content = fs::read(&path).await.map_err(|e| {
            ResumeStoreError::StorageError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Ok(Some(ResumeFile {
            filename: stored.filename,
            content,
            uploaded_at: stored.uploaded_at,
        }))
    }

    async fn replace(&self, file: ResumeFile) -> Result<(), ResumeStoreError> {
        let _guard = self.write_lock.lock().await;
        let previous = self.metadata().await.map_err(map_store_err)?;

        write_atomically(&self.dir.join(&file.filename), &file.content)
            .await
            .map_err(map_store_err)?;
        save_json(
            &self.dir.join(METADATA_FILE),
            &StoredResume {
                filename: file.filename.clone(),
                uploaded_at: file.uploaded_at,
            },
        )
        .await
        .map_err(map_store_err)?;

        if let Some(old) = previous.filter(|old| old.filename != file.filename) {
            if let Err(e) = fs::remove_file(self.dir.join(&old.filename)).await {
                warn!(filename = %old.filename, "Failed to remove replaced resume: {}", e);
            }
        }
        Ok(())
    }
}
