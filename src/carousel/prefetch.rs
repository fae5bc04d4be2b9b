use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::debug;

/// Receives "warm this photo" hints from the carousel
///
/// Implementations must not block. The carousel logs and drops any error, so a
/// failing prefetcher never changes what is on screen.
pub trait Prefetcher: Send + Sync {
    fn prefetch(&self, url: &str) -> Result<()>;
}

/// Ignores every hint
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPrefetcher;

impl Prefetcher for NoopPrefetcher {
    fn prefetch(&self, _url: &str) -> Result<()> {
        Ok(())
    }
}

/// Warms photos by issuing a detached GET for each hint
pub struct HttpPrefetcher {
    client: Client,
    runtime: Handle,
}

impl HttpPrefetcher {
    /// Must be called from within a tokio runtime
    pub fn new() -> Result<Self> {
        let runtime = Handle::try_current().context("HttpPrefetcher needs a tokio runtime")?;
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .user_agent(crate::sources::http::USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, runtime })
    }
}

impl Prefetcher for HttpPrefetcher {
    fn prefetch(&self, url: &str) -> Result<()> {
        let request = self.client.get(url);
        let url = url.to_string();

        self.runtime.spawn(async move {
            match request.send().await.and_then(|r| r.error_for_status()) {
                Ok(response) => {
                    if let Err(e) = response.bytes().await {
                        debug!("Prefetch of {} failed mid-body: {}", url, e);
                    }
                }
                Err(e) => debug!("Prefetch of {} failed: {}", url, e),
            }
        });

        Ok(())
    }
}
