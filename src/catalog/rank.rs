use crate::models::PropertyRecord;
use std::cmp::Ordering;

/// Display order: available listings first, newest first within each group
///
/// Equal timestamps fall back to ascending id so the order is total.
pub fn compare(a: &PropertyRecord, b: &PropertyRecord) -> Ordering {
    b.status
        .is_available()
        .cmp(&a.status.is_available())
        .then_with(|| b.created_at.cmp(&a.created_at))
        .then_with(|| a.id.cmp(&b.id))
}

/// Sort records into display order
pub fn rank<'a, I>(records: I) -> Vec<&'a PropertyRecord>
where
    I: IntoIterator<Item = &'a PropertyRecord>,
{
    let mut ranked: Vec<&PropertyRecord> = records.into_iter().collect();
    ranked.sort_by(|a, b| compare(a, b));
    ranked
}
