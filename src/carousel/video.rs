use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Known YouTube link shapes: short links, `v/`, `u/x/`, `embed/`, `watch?v=` and `&v=`.
/// The id is whatever follows up to the next `#`, `&` or `?`.
static VIDEO_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^.*(youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*")
        .expect("video id pattern is valid")
});

const VIDEO_ID_LEN: usize = 11;
const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Extract the canonical video id from an external link
pub fn extract_video_id(url: &str) -> Option<&str> {
    let id = VIDEO_ID_PATTERN.captures(url.trim())?.get(2)?.as_str();
    (id.chars().count() == VIDEO_ID_LEN).then_some(id)
}

/// What the video slide shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum VideoEmbed {
    Available { id: String, embed_url: String },
    /// The link could not be understood; a placeholder is rendered instead.
    Unavailable { source: String },
}

impl VideoEmbed {
    pub fn from_url(url: &str) -> Self {
        match extract_video_id(url) {
            Some(id) => VideoEmbed::Available {
                id: id.to_string(),
                embed_url: format!("{}{}", EMBED_BASE, id),
            },
            None => VideoEmbed::Unavailable {
                source: url.to_string(),
            },
        }
    }

    pub fn embed_url(&self) -> Option<&str> {
        match self {
            VideoEmbed::Available { embed_url, .. } => Some(embed_url),
            VideoEmbed::Unavailable { .. } => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, VideoEmbed::Available { .. })
    }
}
