pub mod engine;
pub mod normalize;

pub use engine::{search, searchable_text};
pub use normalize::{digits_only, normalize, parse_area_input, parse_currency_input};
