//! Client-side core of a real-estate listing catalog: search, filtering and
//! ranking of listings, plus the state machine behind the photo/video viewer.

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod search;
pub mod sources;

pub use carousel::{Carousel, Direction, Slide, VideoEmbed};
pub use catalog::{filter, neighborhoods, pipeline, rank, Catalog, FilterOptions, TypeFilter};
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use models::{AreaUnit, Category, PropertyRecord, PropertyType, Status};
pub use search::{normalize, search};
pub use sources::{HttpSource, JsonFileSource, RecordSource, StaticSource};
