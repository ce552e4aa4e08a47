use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::AppError;

/// Flat-file JSON content store: one file per entity type under `data_dir`.
///
/// Every write rewrites the whole backing file. There is no locking, so two
/// concurrent admin writes to the same file race and the later one wins
/// wholesale. Acceptable for the single-operator admin surface this backs.
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    /// Read a whole collection. A missing file is an empty collection (fresh
    /// install); corrupt JSON is an error.
    pub async fn load<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, AppError> {
        match tokio::fs::read(self.path(file)).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Read a collection for a public page: any failure degrades to an empty
    /// collection instead of breaking the render. Never used on admin paths.
    pub async fn load_or_default<T: DeserializeOwned>(&self, file: &str) -> Vec<T> {
        self.load(file).await.unwrap_or_else(|e| {
            tracing::warn!("degrading {} to empty collection: {:?}", file, e);
            Vec::new()
        })
    }

    /// Rewrite a whole collection.
    pub async fn save<T: Serialize>(&self, file: &str, items: &[T]) -> Result<(), AppError> {
        tokio::fs::create_dir_all(&self.data_dir).await?;
        let bytes = serde_json::to_vec_pretty(items)?;
        tokio::fs::write(self.path(file), bytes).await?;
        Ok(())
    }

    /// Read a singleton document (e.g. the featured-projects config). Missing
    /// file resolves to the type's default.
    pub async fn load_object<T: DeserializeOwned + Default>(
        &self,
        file: &str,
    ) -> Result<T, AppError> {
        match tokio::fs::read(self.path(file)).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(T::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn save_object<T: Serialize>(&self, file: &str, value: &T) -> Result<(), AppError> {
        tokio::fs::create_dir_all(&self.data_dir).await?;
        let bytes = serde_json::to_vec_pretty(value)?;
        tokio::fs::write(self.path(file), bytes).await?;
        Ok(())
    }
}
