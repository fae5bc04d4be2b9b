use super::types::{is_wildcard, FilterOptions};
use crate::models::PropertyRecord;

/// True when a record satisfies every active predicate of `opts`
///
/// The text query is not considered here; that is the search engine's job.
pub fn matches(record: &PropertyRecord, opts: &FilterOptions) -> bool {
    if !opts.property_type.matches(record.property_type) {
        return false;
    }
    if opts.min_price.is_some_and(|min| record.price < min) {
        return false;
    }
    if opts.max_price.is_some_and(|max| record.price > max) {
        return false;
    }
    if !is_wildcard(&opts.category) && record.category.as_str() != opts.category {
        return false;
    }
    if opts.bedrooms.is_some_and(|min| record.bedrooms < min) {
        return false;
    }
    if !is_wildcard(&opts.neighborhood) && record.neighborhood != opts.neighborhood {
        return false;
    }
    true
}

/// Keep the records that pass every filter, in input order
pub fn filter<'a, I>(records: I, opts: &FilterOptions) -> Vec<&'a PropertyRecord>
where
    I: IntoIterator<Item = &'a PropertyRecord>,
{
    records
        .into_iter()
        .filter(|record| matches(record, opts))
        .collect()
}
