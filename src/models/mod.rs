pub mod raw;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use raw::{coerce_document, coerce_snapshot};

/// Whether a listing is offered for sale or for rent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    #[default]
    Sale,
    Rent,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Sale => "sale",
            PropertyType::Rent => "rent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "sale" => Some(PropertyType::Sale),
            "rent" => Some(PropertyType::Rent),
            _ => None,
        }
    }
}

/// Availability of a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Available,
    Sold,
    Rented,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::Sold => "sold",
            Status::Rented => "rented",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "available" => Some(Status::Available),
            "sold" => Some(Status::Sold),
            "rented" => Some(Status::Rented),
            _ => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Status::Available)
    }
}

/// Coded property category
///
/// Anything the catalog does not recognise is filed under [`Category::Other`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    House,
    Apartment,
    Land,
    Commercial,
    Rural,
    #[default]
    #[serde(other)]
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::House,
        Category::Apartment,
        Category::Land,
        Category::Commercial,
        Category::Rural,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::House => "house",
            Category::Apartment => "apartment",
            Category::Land => "land",
            Category::Commercial => "commercial",
            Category::Rural => "rural",
            Category::Other => "other",
        }
    }

    /// Parse a stored category code, falling back to `Other`
    pub fn parse_or_other(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == value.trim())
            .unwrap_or(Category::Other)
    }

    /// Colloquial Portuguese terms a buyer might type for this category
    pub fn synonyms(&self) -> &'static str {
        match self {
            Category::House => "casa sobrado residencial",
            Category::Apartment => "apartamento ape flat",
            Category::Land => "lote terreno",
            Category::Commercial => "comercial loja sala galpao",
            Category::Rural => "rural chácara fazenda sítio",
            Category::Other => "outro imóvel",
        }
    }
}

/// Unit the `area` field is expressed in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum AreaUnit {
    #[default]
    #[serde(rename = "m²")]
    SquareMeters,
    #[serde(rename = "ha")]
    Hectares,
}

impl AreaUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            AreaUnit::SquareMeters => "m²",
            AreaUnit::Hectares => "ha",
        }
    }
}

/// Core listing data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: String,
    pub location: String,
    pub neighborhood: String,
    pub street: String,
    pub city: String,
    /// Street number, kept apart from `street` by the admin form
    pub number: String,
    pub price: f64,
    pub price_suffix: String,
    pub financeable: bool,
    pub property_type: PropertyType,
    pub status: Status,
    pub category: Category,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area: f64,
    pub area_unit: AreaUnit,
    pub photos: Vec<String>,
    pub cover_photo: String,
    pub video_url: Option<String>,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PropertyRecord {
    /// Minimal record with empty text fields, used as a base by builders and tests
    pub fn new(id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            location: String::new(),
            neighborhood: String::new(),
            street: String::new(),
            city: String::new(),
            number: String::new(),
            price: 0.0,
            price_suffix: String::new(),
            financeable: false,
            property_type: PropertyType::Sale,
            status: Status::Available,
            category: Category::Other,
            bedrooms: 0,
            bathrooms: 0,
            area: 0.0,
            area_unit: AreaUnit::SquareMeters,
            photos: Vec::new(),
            cover_photo: String::new(),
            video_url: None,
            description: String::new(),
            created_at,
            updated_at: created_at,
        }
    }

    /// Cover image, falling back to the first photo when the stored cover is stale
    pub fn cover(&self) -> Option<&str> {
        if self.photos.iter().any(|p| p == &self.cover_photo) {
            Some(self.cover_photo.as_str())
        } else {
            self.photos.first().map(String::as_str)
        }
    }

    pub fn has_video(&self) -> bool {
        self.video_url.as_deref().is_some_and(|v| !v.trim().is_empty())
    }

    /// A record can be opened in the viewer only with at least one slide
    pub fn is_viewable(&self) -> bool {
        !self.photos.is_empty() || self.has_video()
    }
}
