//! Coercion of loosely-typed stored documents into [`PropertyRecord`]s.
//!
//! Documents written by older versions of the admin form may miss fields, store
//! numbers as strings or keep the property type inside an array. None of that is
//! fatal: every field gets a default and the record stays browsable.

use super::{AreaUnit, Category, PropertyRecord, PropertyType, Status};
use crate::error::{CatalogError, Result};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use tracing::{debug, warn};

/// Coerce a whole snapshot (a JSON array of documents)
///
/// Entries that are not JSON objects are skipped. A document without an `id`
/// gets a positional one so it still renders.
pub fn coerce_snapshot(snapshot: &Value) -> Result<Vec<PropertyRecord>> {
    let docs = snapshot.as_array().ok_or_else(|| {
        CatalogError::InvalidSnapshot("expected a JSON array of property documents".to_string())
    })?;

    let loaded_at = Utc::now();
    let mut records = Vec::with_capacity(docs.len());

    for (i, doc) in docs.iter().enumerate() {
        if !doc.is_object() {
            warn!("Skipping snapshot entry {}: not an object", i);
            continue;
        }
        let id = text(doc, "id");
        let id = if id.is_empty() { format!("doc_{}", i) } else { id };
        records.push(coerce_document_at(&id, doc, loaded_at));
    }

    debug!("Coerced {} of {} snapshot entries", records.len(), docs.len());
    Ok(records)
}

/// Coerce a single stored document with the given id
pub fn coerce_document(id: &str, doc: &Value) -> PropertyRecord {
    coerce_document_at(id, doc, Utc::now())
}

fn coerce_document_at(id: &str, doc: &Value, loaded_at: DateTime<Utc>) -> PropertyRecord {
    let photos: Vec<String> = doc
        .get("photos")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .filter(|p| !p.trim().is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let stored_cover = text(doc, "coverPhoto");
    let cover_photo = if photos.contains(&stored_cover) {
        stored_cover
    } else {
        if !stored_cover.is_empty() {
            debug!("Record {}: cover photo not among photos, using first photo", id);
        }
        photos.first().cloned().unwrap_or_default()
    };

    let video_url = Some(text(doc, "videoUrl")).filter(|v| !v.trim().is_empty());

    let created_at = timestamp(doc.get("createdAt")).unwrap_or(loaded_at);
    let updated_at = timestamp(doc.get("updatedAt")).unwrap_or(loaded_at);

    PropertyRecord {
        id: id.to_string(),
        location: text(doc, "location"),
        neighborhood: text(doc, "neighborhood"),
        street: text(doc, "street"),
        city: text(doc, "city"),
        number: text(doc, "number"),
        price: number(doc.get("price")),
        price_suffix: text(doc, "priceSuffix"),
        financeable: truthy(doc.get("financeable")),
        property_type: property_type(doc.get("propertyType")),
        status: doc
            .get("status")
            .and_then(Value::as_str)
            .and_then(Status::parse)
            .unwrap_or_default(),
        category: doc
            .get("category")
            .and_then(Value::as_str)
            .map(Category::parse_or_other)
            .unwrap_or_default(),
        bedrooms: count(doc.get("bedrooms")),
        bathrooms: count(doc.get("bathrooms")),
        area: number(doc.get("area")),
        area_unit: match doc.get("areaUnit").and_then(Value::as_str) {
            Some("ha") => AreaUnit::Hectares,
            _ => AreaUnit::SquareMeters,
        },
        photos,
        cover_photo,
        video_url,
        description: text(doc, "description"),
        created_at,
        updated_at,
    }
}

fn text(doc: &Value, key: &str) -> String {
    match doc.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Non-negative finite number; anything else becomes 0
fn number(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    match parsed {
        Some(n) if n.is_finite() && n > 0.0 => n,
        _ => 0.0,
    }
}

fn count(value: Option<&Value>) -> u32 {
    let n = number(value).trunc();
    if n >= u32::MAX as f64 {
        u32::MAX
    } else {
        n as u32
    }
}

fn truthy(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        _ => false,
    }
}

fn property_type(value: Option<&Value>) -> PropertyType {
    let raw = match value {
        Some(Value::Array(items)) => items.first().and_then(Value::as_str),
        Some(Value::String(s)) => Some(s.as_str()),
        _ => None,
    };
    raw.and_then(PropertyType::parse).unwrap_or_default()
}

/// Accepts RFC 3339 strings, epoch milliseconds and `{seconds, nanoseconds}` objects
fn timestamp(value: Option<&Value>) -> Option<DateTime<Utc>> {
    match value? {
        Value::String(s) => DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => n
            .as_i64()
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        Value::Object(map) => {
            let seconds = map
                .get("seconds")
                .or_else(|| map.get("_seconds"))
                .and_then(Value::as_i64)?;
            let nanos = map
                .get("nanoseconds")
                .or_else(|| map.get("_nanoseconds"))
                .and_then(Value::as_u64)
                .unwrap_or(0);
            Utc.timestamp_opt(seconds, nanos.min(999_999_999) as u32).single()
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_get_defaults() {
        let record = coerce_document("abc", &json!({}));

        assert_eq!(record.id, "abc");
        assert_eq!(record.category, Category::Other);
        assert_eq!(record.status, Status::Available);
        assert_eq!(record.property_type, PropertyType::Sale);
        assert_eq!(record.area_unit, AreaUnit::SquareMeters);
        assert_eq!(record.price, 0.0);
        assert_eq!(record.bedrooms, 0);
        assert!(record.photos.is_empty());
        assert!(record.video_url.is_none());
    }

    #[test]
    fn test_numeric_strings_and_garbage() {
        let record = coerce_document(
            "x",
            &json!({
                "price": "350000",
                "bedrooms": "3",
                "bathrooms": "two",
                "area": -10,
            }),
        );

        assert_eq!(record.price, 350_000.0);
        assert_eq!(record.bedrooms, 3);
        assert_eq!(record.bathrooms, 0);
        assert_eq!(record.area, 0.0);
    }

    #[test]
    fn test_property_type_from_array() {
        let record = coerce_document("x", &json!({ "propertyType": ["rent", "sale"] }));
        assert_eq!(record.property_type, PropertyType::Rent);

        let record = coerce_document("x", &json!({ "propertyType": "lease" }));
        assert_eq!(record.property_type, PropertyType::Sale);
    }

    #[test]
    fn test_unknown_category_and_unit() {
        let record = coerce_document(
            "x",
            &json!({ "category": "mansion", "areaUnit": "acre", "status": "sold" }),
        );
        assert_eq!(record.category, Category::Other);
        assert_eq!(record.area_unit, AreaUnit::SquareMeters);
        assert_eq!(record.status, Status::Sold);
    }

    #[test]
    fn test_stale_cover_falls_back() {
        let record = coerce_document(
            "x",
            &json!({ "photos": ["a.jpg", "b.jpg"], "coverPhoto": "z.jpg" }),
        );
        assert_eq!(record.cover_photo, "a.jpg");

        let record = coerce_document(
            "x",
            &json!({ "photos": ["a.jpg", "b.jpg"], "coverPhoto": "b.jpg" }),
        );
        assert_eq!(record.cover_photo, "b.jpg");
    }

    #[test]
    fn test_empty_video_is_none() {
        let record = coerce_document("x", &json!({ "videoUrl": "" }));
        assert!(record.video_url.is_none());
    }

    #[test]
    fn test_timestamp_shapes() {
        let record = coerce_document(
            "x",
            &json!({
                "createdAt": "2024-03-01T12:00:00Z",
                "updatedAt": { "seconds": 1_709_294_400, "nanoseconds": 0 },
            }),
        );
        assert_eq!(record.created_at.to_rfc3339(), "2024-03-01T12:00:00+00:00");
        assert_eq!(record.updated_at.timestamp(), 1_709_294_400);

        let record = coerce_document("x", &json!({ "createdAt": 1_709_294_400_000i64 }));
        assert_eq!(record.created_at.timestamp(), 1_709_294_400);
    }

    #[test]
    fn test_snapshot_skips_non_objects() {
        let records = coerce_snapshot(&json!([
            { "id": "a", "city": "Porteirinha" },
            42,
            { "city": "Janaúba" },
        ]))
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "a");
        assert_eq!(records[1].id, "doc_2");
    }

    #[test]
    fn test_snapshot_must_be_array() {
        let err = coerce_snapshot(&json!({ "id": "a" })).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidSnapshot(_)));
    }
}
