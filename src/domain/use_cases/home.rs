use std::path::{Path, PathBuf};

use anyhow::Context;
use serde_json::Value;

use crate::errors::AppError;

/// Serves the landing-page document stored as JSON on disk.
///
/// The file is read on every call, so edits show up without a restart.
pub struct HomeHandler {
    pub data_path: PathBuf,
}

impl HomeHandler {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        HomeHandler { data_path: data_path.into() }
    }

    pub async fn load(&self) -> Result<Value, AppError> {
        let document = read_document(&self.data_path).await?;

        match document.get("featuredProjects").and_then(Value::as_array) {
            Some(featured) => tracing::debug!(
                path = %self.data_path.display(),
                "loaded home data with {} featured projects",
                featured.len()
            ),
            None => tracing::debug!(path = %self.data_path.display(), "loaded home data"),
        }

        Ok(document)
    }
}

async fn read_document(path: &Path) -> anyhow::Result<Value> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;

    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}
