pub mod filter;
pub mod rank;
pub mod types;

pub use filter::filter;
pub use rank::rank;
pub use types::{FilterOptions, TypeFilter};

use crate::error::Result;
use crate::models::PropertyRecord;
use crate::search::search;
use crate::sources::RecordSource;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Search, filter and rank in one pass, the order the listing page renders
pub fn pipeline<'a, I>(records: I, opts: &FilterOptions) -> Vec<&'a PropertyRecord>
where
    I: IntoIterator<Item = &'a PropertyRecord>,
{
    let found = search(records, &opts.search);
    let kept = filter(found, opts);
    rank(kept)
}

/// Distinct, non-empty neighborhoods in ascending order, for the neighborhood selector
pub fn neighborhoods<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a PropertyRecord>,
{
    records
        .into_iter()
        .map(|r| r.neighborhood.as_str())
        .filter(|n| !n.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// One loaded snapshot of the listings
///
/// Holds no filter state; every view is computed from the options passed in.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<PropertyRecord>,
    neighborhoods: Vec<String>,
}

impl Catalog {
    pub fn new(records: Vec<PropertyRecord>) -> Self {
        let neighborhoods = neighborhoods(&records);
        Self {
            records,
            neighborhoods,
        }
    }

    /// Fetch a snapshot from the given source
    pub async fn load(source: &dyn RecordSource) -> Result<Self> {
        info!("Loading listings from {}", source.source_name());
        let records = source.fetch().await?;
        info!("Loaded {} listings", records.len());
        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn neighborhoods(&self) -> &[String] {
        &self.neighborhoods
    }

    pub fn get(&self, id: &str) -> Option<&PropertyRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// The ranked listings matching `opts`
    pub fn view(&self, opts: &FilterOptions) -> Vec<&PropertyRecord> {
        let view = pipeline(&self.records, opts);
        debug!(
            "View with {} active filters: {} of {} listings",
            opts.active_count(),
            view.len(),
            self.records.len()
        );
        view
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
