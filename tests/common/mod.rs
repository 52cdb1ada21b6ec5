// Each integration test file is a separate binary; helpers not used in every
// binary would otherwise trigger dead_code warnings from clippy.
#![allow(dead_code)]

use ogp::{Image, OpenGraph};
use scraper::{Html, Selector};

/// Parse a rendered fragment and return every `(property, content)` pair in
/// document order, with entities decoded the way a browser would.
pub fn meta_pairs(fragment: &str) -> Vec<(String, String)> {
    let doc = Html::parse_fragment(fragment);
    let selector = Selector::parse("meta").unwrap();
    doc.select(&selector)
        .map(|el| {
            let value = el.value();
            (
                value.attr("property").unwrap_or_default().to_string(),
                value.attr("content").unwrap_or_default().to_string(),
            )
        })
        .collect()
}

/// Decoded `content` of every tag with the given property, in order.
pub fn contents(fragment: &str, property: &str) -> Vec<String> {
    meta_pairs(fragment)
        .into_iter()
        .filter(|(p, _)| p == property)
        .map(|(_, c)| c)
        .collect()
}

pub fn properties(fragment: &str) -> Vec<String> {
    meta_pairs(fragment).into_iter().map(|(p, _)| p).collect()
}

/// A record with every field set to a valid value.
pub fn full_record() -> OpenGraph {
    OpenGraph::from_json(
        r#"{
            "title": "The Rock",
            "type": "video.movie",
            "images": [{
                "url": "https://example.com/rock.jpg",
                "secure_url": "https://secure.example.com/rock.jpg",
                "type": "image/jpeg",
                "width": 400,
                "height": 300,
                "alt": "A shiny red apple with a bite taken out"
            }],
            "url": "https://www.imdb.com/title/tt0117500/",
            "audio": "https://example.com/bond/theme.mp3",
            "description": "Sean Connery found fame and fortune as the suave, sophisticated British agent, James Bond.",
            "determiner": "the",
            "locale": "en_GB",
            "locale_alternates": ["fr_FR", "es_ES"],
            "site_name": "IMDb",
            "video": "https://example.com/bond/trailer.swf"
        }"#,
    )
    .unwrap()
}

pub fn image(url: &str) -> Image {
    Image::new(url)
}
