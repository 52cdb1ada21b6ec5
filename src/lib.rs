//! Open Graph protocol metadata rendered as HTML `<meta>` tags.
//!
//! Build an [`OpenGraph`] record, then call [`OpenGraph::html`] to get an
//! escaped fragment ready for a document `<head>`.

pub mod config;
pub mod error;
pub mod models;
pub mod render;

pub use error::{OgpError, OgpResult};
pub use models::{Determiner, Image, KnownDeterminer, Locale, OpenGraph, SecureUrl, Url};
pub use render::{render, Field, HtmlFragment, Tag};
