mod url;
mod vocab;

use serde::{Deserialize, Serialize};

use crate::error::OgpResult;

pub use url::{SecureUrl, Url};
pub use vocab::{Determiner, KnownDeterminer, Locale};

// ============================================================================
// Open Graph Record
// ============================================================================

/// Open Graph metadata for a single page.
///
/// Every field is optional. Blank values and URLs without an `http(s)://`
/// scheme are left out of the rendered output rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenGraph {
    // Basic
    pub title: String,
    pub r#type: String,
    /// Ignored when `images` is non-empty.
    pub image: Url,
    pub images: Vec<Image>,
    pub url: Url,

    // Optional
    pub audio: Url,
    pub description: String,
    pub determiner: Determiner,
    pub locale: Locale,
    pub locale_alternates: Vec<Locale>,
    pub site_name: String,
    pub video: Url,
}

impl OpenGraph {
    /// Decode a record from JSON. Missing keys take their empty defaults.
    pub fn from_json(json: &str) -> OgpResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

// ============================================================================
// Image Models
// ============================================================================

/// One `og:image` structured property block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub url: Url,
    pub secure_url: SecureUrl,
    /// MIME type, e.g. `image/png`.
    pub r#type: String,
    pub width: i32,
    pub height: i32,
    pub alt: String,
}

impl Image {
    pub fn new(url: impl Into<Url>) -> Self {
        Image {
            url: url.into(),
            ..Default::default()
        }
    }
}
