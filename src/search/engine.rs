use super::normalize::normalize;
use crate::models::PropertyRecord;
use tracing::debug;

/// Normalized text a query is matched against
///
/// Non-empty address fields, description and the category's synonyms joined by
/// single spaces.
pub fn searchable_text(record: &PropertyRecord) -> String {
    let parts: Vec<&str> = [
        record.neighborhood.as_str(),
        record.city.as_str(),
        record.street.as_str(),
        record.location.as_str(),
        record.description.as_str(),
        record.category.synonyms(),
    ]
    .into_iter()
    .map(str::trim)
    .filter(|part| !part.is_empty())
    .collect();
    normalize(&parts.join(" "))
}

/// Keep the records whose searchable text contains the query
///
/// Order is preserved. An empty or whitespace-only query returns every record
/// without normalizing anything. Matching is plain substring containment: a
/// multi-word query only hits when those words appear contiguously.
pub fn search<'a, I>(records: I, term: &str) -> Vec<&'a PropertyRecord>
where
    I: IntoIterator<Item = &'a PropertyRecord>,
{
    let term = term.trim();
    if term.is_empty() {
        return records.into_iter().collect();
    }

    let needle = normalize(term);
    let hits: Vec<&PropertyRecord> = records
        .into_iter()
        .filter(|record| searchable_text(record).contains(&needle))
        .collect();

    debug!("Search {:?} matched {} records", needle, hits.len());
    hits
}
