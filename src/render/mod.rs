mod escape;

use std::borrow::Cow;
use std::fmt;

use strum::{EnumIter, IntoEnumIterator};

use crate::models::{Image, OpenGraph, Url};

pub use escape::escape_attribute_into;

// ── Property names ─────────────────────────────────────────────────────────

pub const OG_TITLE: &str = "og:title";
pub const OG_TYPE: &str = "og:type";
pub const OG_IMAGE: &str = "og:image";
pub const OG_IMAGE_SECURE_URL: &str = "og:image:secure_url";
pub const OG_IMAGE_TYPE: &str = "og:image:type";
pub const OG_IMAGE_WIDTH: &str = "og:image:width";
pub const OG_IMAGE_HEIGHT: &str = "og:image:height";
pub const OG_IMAGE_ALT: &str = "og:image:alt";
pub const OG_URL: &str = "og:url";
pub const OG_AUDIO: &str = "og:audio";
pub const OG_DESCRIPTION: &str = "og:description";
pub const OG_DETERMINER: &str = "og:determiner";
pub const OG_LOCALE: &str = "og:locale";
pub const OG_LOCALE_ALTERNATE: &str = "og:locale:alternate";
pub const OG_SITE_NAME: &str = "og:site_name";
pub const OG_VIDEO: &str = "og:video";

// ── Tags and fragments ─────────────────────────────────────────────────────

/// One `<meta property content>` statement, unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag<'a> {
    pub property: &'static str,
    pub content: Cow<'a, str>,
}

impl<'a> Tag<'a> {
    fn new(property: &'static str, content: impl Into<Cow<'a, str>>) -> Self {
        Tag {
            property,
            content: content.into(),
        }
    }
}

/// Rendered, already-escaped `<meta>` tags, one per line.
///
/// Holds no surrounding markup; splice it into a document `<head>` as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HtmlFragment(String);

impl HtmlFragment {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for HtmlFragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HtmlFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<HtmlFragment> for String {
    fn from(fragment: HtmlFragment) -> Self {
        fragment.0
    }
}

// ── Emission order ─────────────────────────────────────────────────────────

/// The steps of rendering, in output order.
///
/// Iterating with [`Field::iter`] visits them in declaration order, which is
/// the order tags appear in the fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Field {
    Title,
    Type,
    /// The single `image` field. Only used when `images` is empty, and emitted
    /// under `og:type` for compatibility with existing consumers.
    FallbackImage,
    Images,
    Url,
    Audio,
    Description,
    Determiner,
    Locale,
    LocaleAlternates,
    SiteName,
    Video,
}

impl Field {
    /// Property name of the first tag this step emits.
    pub fn property(self) -> &'static str {
        match self {
            Field::Title => OG_TITLE,
            Field::Type | Field::FallbackImage => OG_TYPE,
            Field::Images => OG_IMAGE,
            Field::Url => OG_URL,
            Field::Audio => OG_AUDIO,
            Field::Description => OG_DESCRIPTION,
            Field::Determiner => OG_DETERMINER,
            Field::Locale => OG_LOCALE,
            Field::LocaleAlternates => OG_LOCALE_ALTERNATE,
            Field::SiteName => OG_SITE_NAME,
            Field::Video => OG_VIDEO,
        }
    }

    /// Append the tags this step produces for `og`.
    fn collect<'a>(self, og: &'a OpenGraph, tags: &mut Vec<Tag<'a>>) {
        let property = self.property();
        match self {
            Field::Title => push_non_empty(tags, property, &og.title),
            Field::Type => push_non_empty(tags, property, &og.r#type),
            Field::FallbackImage => {
                if og.images.is_empty() && og.image.is_valid() {
                    tags.push(Tag::new(property, og.image.as_str()));
                }
            }
            Field::Images => {
                for image in &og.images {
                    collect_image(image, tags);
                }
            }
            Field::Url => push_valid_url(tags, property, &og.url),
            Field::Audio => push_non_empty(tags, property, og.audio.as_str()),
            Field::Description => push_non_empty(tags, property, &og.description),
            Field::Determiner => push_non_empty(tags, property, og.determiner.as_str()),
            Field::Locale => push_non_empty(tags, property, og.locale.as_str()),
            Field::LocaleAlternates => tags.extend(
                og.locale_alternates
                    .iter()
                    .map(|locale| Tag::new(property, locale.as_str())),
            ),
            Field::SiteName => push_non_empty(tags, property, &og.site_name),
            Field::Video => push_valid_url(tags, property, &og.video),
        }
    }
}

fn push_non_empty<'a>(tags: &mut Vec<Tag<'a>>, property: &'static str, content: &'a str) {
    if !content.is_empty() {
        tags.push(Tag::new(property, content));
    }
}

fn push_valid_url<'a>(tags: &mut Vec<Tag<'a>>, property: &'static str, url: &'a Url) {
    if url.is_valid() {
        tags.push(Tag::new(property, url.as_str()));
    } else if !url.is_empty() {
        tracing::trace!(property, url = %url, "Dropping URL without http(s) scheme");
    }
}

fn push_dimension(tags: &mut Vec<Tag<'_>>, property: &'static str, value: i32) {
    if value > 0 {
        tags.push(Tag::new(property, value.to_string()));
    }
}

fn collect_image<'a>(image: &'a Image, tags: &mut Vec<Tag<'a>>) {
    if !image.url.is_valid() {
        tracing::trace!(url = %image.url, "Skipping image without http(s) scheme");
        return;
    }

    // og:image:url is identical to og:image, so only the short form is written.
    push_non_empty(tags, OG_IMAGE, image.url.as_str());
    push_non_empty(tags, OG_IMAGE_SECURE_URL, image.secure_url.as_str());
    push_non_empty(tags, OG_IMAGE_TYPE, &image.r#type);
    push_dimension(tags, OG_IMAGE_WIDTH, image.width);
    push_dimension(tags, OG_IMAGE_HEIGHT, image.height);
    push_non_empty(tags, OG_IMAGE_ALT, &image.alt);
}

// ── Rendering ──────────────────────────────────────────────────────────────

fn write_meta(out: &mut String, tag: &Tag<'_>) {
    out.push_str(r#"<meta property=""#);
    escape_attribute_into(tag.property, out);
    out.push_str(r#"" content=""#);
    escape_attribute_into(&tag.content, out);
    out.push_str("\" />\n");
}

impl OpenGraph {
    /// The tags this record renders to, in output order and unescaped.
    pub fn tags(&self) -> Vec<Tag<'_>> {
        let mut tags = Vec::new();
        for field in Field::iter() {
            field.collect(self, &mut tags);
        }
        tags
    }

    /// Render the record as escaped `<meta>` tags.
    pub fn html(&self) -> HtmlFragment {
        let tags = self.tags();
        let mut out = String::with_capacity(tags.len() * 64);
        for tag in &tags {
            write_meta(&mut out, tag);
        }
        tracing::debug!(tags = tags.len(), "Rendered Open Graph fragment");
        HtmlFragment(out)
    }
}

/// Render `og` as escaped `<meta>` tags. Same as [`OpenGraph::html`].
pub fn render(og: &OpenGraph) -> HtmlFragment {
    og.html()
}

// ── Unit tests ─────────────────────────────────────────────────────────────
