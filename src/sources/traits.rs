use crate::error::Result;
use crate::models::PropertyRecord;
use async_trait::async_trait;

/// Common trait for anything that hands the catalog a snapshot of listings
///
/// A single one-shot fetch; no live updates are expected.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch every published listing
    async fn fetch(&self) -> Result<Vec<PropertyRecord>>;

    /// Get the name of the source, for logs
    fn source_name(&self) -> &'static str;
}

/// In-memory snapshot
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<PropertyRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<PropertyRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl RecordSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<PropertyRecord>> {
        Ok(self.records.clone())
    }

    fn source_name(&self) -> &'static str {
        "memory"
    }
}
