use crate::models::PropertyType;
use serde::{Deserialize, Serialize};

/// Listing type selector; `All` disables the predicate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Sale,
    Rent,
}

impl TypeFilter {
    pub fn matches(&self, property_type: PropertyType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Sale => property_type == PropertyType::Sale,
            TypeFilter::Rent => property_type == PropertyType::Rent,
        }
    }
}

impl std::str::FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" | "" => Ok(TypeFilter::All),
            "sale" => Ok(TypeFilter::Sale),
            "rent" => Ok(TypeFilter::Rent),
            other => Err(format!("unknown property type filter: {}", other)),
        }
    }
}

/// Filter state for one browsing session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterOptions {
    /// Free-text query, matched by the search engine
    pub search: String,
    /// Minimum price, inclusive
    pub min_price: Option<f64>,
    /// Maximum price, inclusive
    pub max_price: Option<f64>,
    /// Minimum number of bedrooms, inclusive
    pub bedrooms: Option<u32>,
    pub property_type: TypeFilter,
    /// `"all"`, `""` or a category code such as `"house"`
    pub category: String,
    /// `""`, `"all"` or an exact neighborhood as stored
    pub neighborhood: String,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            search: String::new(),
            min_price: None,
            max_price: None,
            bedrooms: None,
            property_type: TypeFilter::All,
            category: "all".to_string(),
            neighborhood: String::new(),
        }
    }
}

impl FilterOptions {
    /// The state after "clear filters"
    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn is_cleared(&self) -> bool {
        self.search.trim().is_empty() && self.active_count() == 0
    }

    /// Number of active filters besides the text query, shown on the filter button
    pub fn active_count(&self) -> usize {
        [
            self.min_price.is_some_and(|p| p > 0.0),
            self.max_price.is_some_and(|p| p > 0.0),
            self.bedrooms.is_some_and(|b| b > 0),
            self.property_type != TypeFilter::All,
            !is_wildcard(&self.category),
            !is_wildcard(&self.neighborhood),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

/// `""` and `"all"` both mean "no constraint" for string selectors
pub(crate) fn is_wildcard(value: &str) -> bool {
    value.is_empty() || value == "all"
}
