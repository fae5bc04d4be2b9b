use chrono::{DateTime, Duration, TimeZone, Utc};
use property_catalog::{
    filter, pipeline, rank, search, Catalog, Category, FilterOptions, PropertyRecord,
    PropertyType, RecordSource, Result, StaticSource, Status, TypeFilter,
};

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
}

fn listing(id: &str, days: i64) -> PropertyRecord {
    let mut r = PropertyRecord::new(id, base_time() + Duration::days(days));
    r.city = "Porteirinha".to_string();
    r.photos = vec![format!("{}-1.jpg", id)];
    r.cover_photo = r.photos[0].clone();
    r
}

fn fixture() -> Vec<PropertyRecord> {
    let mut casa = listing("casa-centro", 0);
    casa.neighborhood = "Centro".to_string();
    casa.category = Category::House;
    casa.price = 320_000.0;
    casa.bedrooms = 3;
    casa.description = "Casa ampla com quintal".to_string();

    let mut ape = listing("ape-alto", 3);
    ape.neighborhood = "Alto São João".to_string();
    ape.category = Category::Apartment;
    ape.property_type = PropertyType::Rent;
    ape.price = 1_200.0;
    ape.bedrooms = 2;

    let mut lote = listing("lote-vila", 5);
    lote.neighborhood = "Vila Nova".to_string();
    lote.category = Category::Land;
    lote.price = 90_000.0;
    lote.status = Status::Sold;

    let mut chacara = listing("chacara", 1);
    chacara.category = Category::Rural;
    chacara.price = 750_000.0;
    chacara.bedrooms = 4;
    chacara.description = "Chácara com açude e pomar".to_string();

    vec![casa, ape, lote, chacara]
}

fn ids(records: &[&PropertyRecord]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

/// Accents and case in the query must not change the result
#[test]
fn test_search_ignores_accents_and_case() {
    let records = fixture();
    let upper = search(&records, "PORTEIRINHA");
    let lower = search(&records, "porteirinha");
    let accented = search(&records, "Pôrtêirínha");

    assert_eq!(upper.len(), records.len());
    assert_eq!(ids(&upper), ids(&lower));
    assert_eq!(ids(&lower), ids(&accented));
}

/// Neighborhood text is searchable with or without its accents
#[test]
fn test_search_neighborhood_without_accents() {
    let records = fixture();
    assert_eq!(ids(&search(&records, "alto sao joao")), vec!["ape-alto"]);
    assert_eq!(ids(&search(&records, "acude")), vec!["chacara"]);
}

/// Colloquial category names find coded categories
#[test]
fn test_search_category_synonyms() {
    let records = fixture();
    assert_eq!(ids(&search(&records, "terreno")), vec!["lote-vila"]);
    assert_eq!(ids(&search(&records, "sítio")), vec!["chacara"]);
    assert_eq!(ids(&search(&records, "sobrado")), vec!["casa-centro"]);
}

/// A lone record whose description says "casa" is found by "CASA"
#[test]
fn test_search_single_record_scenario() {
    let mut record = PropertyRecord::new("1", base_time());
    record.neighborhood = "Centro".to_string();
    record.description = "casa".to_string();
    let records = vec![record];

    assert_eq!(search(&records, "CASA").len(), 1);
}

/// Combined filters keep only what every predicate keeps
#[test]
fn test_filter_conjunction() {
    let records = fixture();
    let price_only = FilterOptions {
        min_price: Some(100_000.0),
        ..Default::default()
    };
    let bedrooms_only = FilterOptions {
        bedrooms: Some(4),
        ..Default::default()
    };
    let both = FilterOptions {
        min_price: Some(100_000.0),
        bedrooms: Some(4),
        ..Default::default()
    };

    let a = ids(&filter(&records, &price_only));
    let b = ids(&filter(&records, &bedrooms_only));
    let expected: Vec<String> = a.iter().filter(|id| b.contains(id)).cloned().collect();

    assert_eq!(ids(&filter(&records, &both)), expected);
    assert_eq!(expected, vec!["chacara"]);
}

/// Filters never add records and leave the input untouched
#[test]
fn test_filter_does_not_mutate_input() {
    let records = fixture();
    let before = records.clone();
    let opts = FilterOptions {
        property_type: TypeFilter::Sale,
        category: "house".to_string(),
        ..Default::default()
    };

    assert_eq!(ids(&filter(&records, &opts)), vec!["casa-centro"]);
    assert_eq!(records, before);
}

/// Sold listings sink below available ones regardless of age
#[test]
fn test_rank_available_first_then_newest() {
    let records = fixture();
    let ranked = ids(&rank(&records));
    assert_eq!(ranked, vec!["ape-alto", "chacara", "casa-centro", "lote-vila"]);
}

/// Search, then filter, then rank
#[test]
fn test_pipeline_end_to_end() {
    let records = fixture();
    let opts = FilterOptions {
        search: "porteirinha".to_string(),
        property_type: TypeFilter::Sale,
        max_price: Some(800_000.0),
        ..Default::default()
    };

    assert_eq!(
        ids(&pipeline(&records, &opts)),
        vec!["chacara", "casa-centro", "lote-vila"]
    );
}

/// A catalog loaded from a source exposes ranked views and the neighborhood list
#[tokio::test]
async fn test_catalog_from_static_source() -> Result<()> {
    let source = StaticSource::new(fixture());
    assert_eq!(source.source_name(), "memory");

    let catalog = Catalog::load(&source).await?;
    assert_eq!(catalog.len(), 4);
    assert_eq!(
        catalog.neighborhoods(),
        ["Alto São João", "Centro", "Vila Nova"]
    );

    let opts = FilterOptions {
        neighborhood: "Centro".to_string(),
        ..Default::default()
    };
    assert_eq!(ids(&catalog.view(&opts)), vec!["casa-centro"]);
    Ok(())
}
