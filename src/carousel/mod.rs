//! Full-screen media viewer state.
//!
//! A listing's slides are its photos plus, when present, one video which always
//! takes slot 0. Navigation wraps in both directions and a horizontal swipe longer
//! than the configured threshold moves one slide.

pub mod prefetch;
pub mod video;

pub use prefetch::{HttpPrefetcher, NoopPrefetcher, Prefetcher};
pub use video::{extract_video_id, VideoEmbed};

use crate::config::CarouselConfig;
use crate::error::{CatalogError, Result};
use crate::models::PropertyRecord;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Minimum horizontal travel, in pixels, for a touch to count as a swipe
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// What the viewer shows for the current index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "payload", rename_all = "lowercase")]
pub enum Slide<'a> {
    Photo(&'a str),
    Video(&'a VideoEmbed),
}

pub struct Carousel {
    photos: Vec<String>,
    video: Option<VideoEmbed>,
    current: usize,
    swipe_threshold: f64,
    touch_start: Option<f64>,
    touch_end: Option<f64>,
    prefetcher: Arc<dyn Prefetcher>,
}

impl Carousel {
    /// Open on slide 0 with the default threshold and no prefetching
    pub fn open(photos: Vec<String>, video_url: Option<&str>) -> Result<Self> {
        Self::open_with(
            photos,
            video_url,
            &CarouselConfig::default(),
            Arc::new(NoopPrefetcher),
        )
    }

    /// Open on slide 0
    ///
    /// Fails with [`CatalogError::EmptyGallery`] when there is neither a photo nor
    /// a video; callers are expected to check [`PropertyRecord::is_viewable`] first.
    pub fn open_with(
        photos: Vec<String>,
        video_url: Option<&str>,
        config: &CarouselConfig,
        prefetcher: Arc<dyn Prefetcher>,
    ) -> Result<Self> {
        let video = video_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(VideoEmbed::from_url);

        if photos.is_empty() && video.is_none() {
            return Err(CatalogError::EmptyGallery);
        }

        let carousel = Self {
            photos,
            video,
            current: 0,
            swipe_threshold: config.swipe_threshold,
            touch_start: None,
            touch_end: None,
            prefetcher,
        };
        carousel.emit_prefetch();
        Ok(carousel)
    }

    /// Open the viewer for a listing
    pub fn for_record(
        record: &PropertyRecord,
        config: &CarouselConfig,
        prefetcher: Arc<dyn Prefetcher>,
    ) -> Result<Self> {
        Self::open_with(
            record.photos.clone(),
            record.video_url.as_deref(),
            config,
            prefetcher,
        )
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn total_slides(&self) -> usize {
        self.photos.len() + self.video_offset()
    }

    pub fn has_video(&self) -> bool {
        self.video.is_some()
    }

    pub fn swipe_threshold(&self) -> f64 {
        self.swipe_threshold
    }

    pub fn next(&mut self) -> usize {
        self.set_index((self.current + 1) % self.total_slides())
    }

    pub fn prev(&mut self) -> usize {
        let total = self.total_slides();
        self.set_index((self.current + total - 1) % total)
    }

    /// Interpret a finished horizontal drag, `dx = start_x - end_x`
    ///
    /// Dragging left (positive `dx`) past the threshold advances; dragging right
    /// goes back. Anything shorter, including exactly the threshold, is a tap.
    pub fn on_swipe(&mut self, dx: f64) -> Option<Direction> {
        if dx > self.swipe_threshold {
            self.next();
            Some(Direction::Next)
        } else if dx < -self.swipe_threshold {
            self.prev();
            Some(Direction::Prev)
        } else {
            None
        }
    }

    pub fn touch_start(&mut self, x: f64) {
        self.touch_start = Some(x);
        self.touch_end = None;
    }

    pub fn touch_move(&mut self, x: f64) {
        self.touch_end = Some(x);
    }

    /// Finish a gesture; a touch that never moved is a tap
    pub fn touch_end(&mut self) -> Option<Direction> {
        let start = self.touch_start.take()?;
        let end = self.touch_end.take()?;
        self.on_swipe(start - end)
    }

    pub fn current_slide(&self) -> Slide<'_> {
        self.slide(self.current)
    }

    /// Position indicator, e.g. "2 / 5"
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.current + 1, self.total_slides())
    }

    /// Arrow buttons are only shown when there is more than one photo
    pub fn shows_navigation(&self) -> bool {
        self.photos.len() > 1
    }

    /// Photos on the slides either side of the current one
    pub fn prefetch_targets(&self) -> Vec<&str> {
        let total = self.total_slides();
        let neighbours = [(self.current + 1) % total, (self.current + total - 1) % total];

        let mut targets: Vec<&str> = Vec::with_capacity(2);
        for index in neighbours {
            if let Slide::Photo(url) = self.slide(index) {
                if !targets.contains(&url) {
                    targets.push(url);
                }
            }
        }
        targets
    }

    fn video_offset(&self) -> usize {
        usize::from(self.video.is_some())
    }

    fn slide(&self, index: usize) -> Slide<'_> {
        match &self.video {
            Some(video) if index == 0 => Slide::Video(video),
            _ => Slide::Photo(&self.photos[index - self.video_offset()]),
        }
    }

    fn set_index(&mut self, index: usize) -> usize {
        self.current = index;
        debug!("Carousel moved to slide {}", self.counter_label());
        self.emit_prefetch();
        index
    }

    fn emit_prefetch(&self) {
        for url in self.prefetch_targets() {
            if let Err(e) = self.prefetcher.prefetch(url) {
                debug!("Prefetch hint for {} dropped: {:#}", url, e);
            }
        }
    }
}

impl fmt::Debug for Carousel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("photos", &self.photos)
            .field("video", &self.video)
            .field("current", &self.current)
            .field("swipe_threshold", &self.swipe_threshold)
            .finish_non_exhaustive()
    }
}
