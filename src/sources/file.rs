use crate::error::Result;
use crate::models::{coerce_snapshot, PropertyRecord};
use crate::sources::traits::RecordSource;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// Reads a JSON array of stored listing documents from disk
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordSource for JsonFileSource {
    async fn fetch(&self) -> Result<Vec<PropertyRecord>> {
        debug!("Reading snapshot from {}", self.path.display());
        let body = tokio::fs::read_to_string(&self.path).await?;
        debug!("Read {} bytes", body.len());

        let snapshot: serde_json::Value = serde_json::from_str(&body)?;
        coerce_snapshot(&snapshot)
    }

    fn source_name(&self) -> &'static str {
        "json-file"
    }
}
