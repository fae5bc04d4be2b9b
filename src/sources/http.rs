use crate::error::{CatalogError, Result};
use crate::models::{coerce_snapshot, PropertyRecord};
use crate::sources::traits::RecordSource;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

pub(crate) const USER_AGENT: &str = concat!("property-catalog/", env!("CARGO_PKG_VERSION"));

/// Fetches the listing snapshot as JSON over HTTP
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl RecordSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<PropertyRecord>> {
        debug!("Fetching URL: {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            warn!("Listing endpoint returned status: {}", response.status());
            return Err(CatalogError::InvalidSnapshot(format!(
                "{} returned {}",
                self.url,
                response.status()
            )));
        }

        let snapshot: serde_json::Value = response.json().await?;
        let records = coerce_snapshot(&snapshot)?;

        info!("Fetched {} listings from {}", records.len(), self.url);
        Ok(records)
    }

    fn source_name(&self) -> &'static str {
        "http"
    }
}
