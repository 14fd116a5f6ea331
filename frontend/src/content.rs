use serde::Deserialize;
use thiserror::Error;

use crate::config;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse site content: {0}")]
    Parse(#[from] serde_json::Error),
}

/// An embeddable video, referenced by URL only.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MediaClip {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub note: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PhotoDescriptor {
    pub path: String,
    pub alt: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Stat {
    pub headline: String,
    pub caption: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct HeroMedia {
    pub video: String,
    pub poster: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct PageLayout {
    #[serde(default)]
    pub nav: bool,
    #[serde(default)]
    pub quick_links: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteContent {
    pub artist: String,
    pub badge: String,
    pub tagline: String,
    pub email: String,
    pub instagram_url: String,
    pub instagram_handle: String,
    #[serde(default)]
    pub youtube_channel: Option<String>,
    pub hero: HeroMedia,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub bio: Vec<String>,
    pub featured_tape: MediaClip,
    #[serde(default)]
    pub clips: Vec<MediaClip>,
    pub photo_base: String,
    pub photo_alt: String,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub booking_venues: Vec<String>,
    #[serde(default)]
    pub layout: PageLayout,
}

impl SiteContent {
    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Content compiled into the binary from `content/site.json`.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::parse(config::SITE_CONTENT)
    }

    pub fn gallery(&self) -> PhotoGallery {
        PhotoGallery::new(&self.photo_base, &self.photos, &self.photo_alt)
    }

    pub fn subscribe_url(&self) -> Option<String> {
        self.youtube_channel
            .as_deref()
            .map(str::trim)
            .filter(|handle| !handle.is_empty())
            .map(|handle| {
                format!(
                    "https://www.youtube.com/@{}?sub_confirmation=1",
                    handle.trim_start_matches('@')
                )
            })
    }
}

pub fn asset_path(base: &str, filename: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        filename.trim_start_matches('/')
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryLayout {
    Scroller,
    Grid,
}

impl GalleryLayout {
    /// Both arrangements are always in the markup; CSS decides which one shows.
    pub const ALL: [GalleryLayout; 2] = [GalleryLayout::Scroller, GalleryLayout::Grid];

    pub fn class(self) -> &'static str {
        match self {
            GalleryLayout::Scroller => "photo-scroller",
            GalleryLayout::Grid => "photo-grid",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PhotoGallery {
    photos: Vec<PhotoDescriptor>,
}

impl PhotoGallery {
    pub fn new(base: &str, filenames: &[String], alt: &str) -> Self {
        let photos = filenames
            .iter()
            .map(|filename| PhotoDescriptor {
                path: asset_path(base, filename),
                alt: alt.to_string(),
            })
            .collect();
        Self { photos }
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn arrangements(&self) -> impl Iterator<Item = (GalleryLayout, &[PhotoDescriptor])> + '_ {
        GalleryLayout::ALL
            .into_iter()
            .map(move |layout| (layout, self.photos.as_slice()))
    }
}
