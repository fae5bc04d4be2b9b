pub mod file;
pub mod http;
pub mod traits;

pub use file::JsonFileSource;
pub use http::HttpSource;
pub use traits::{RecordSource, StaticSource};

/// Pick a source for a location: `http(s)://` URLs are fetched, anything else is a file path
pub fn from_location(location: &str) -> crate::error::Result<Box<dyn RecordSource>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location)?))
    } else {
        Ok(Box::new(JsonFileSource::new(location)))
    }
}
