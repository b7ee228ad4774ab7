//! Embed URL derivation for shared video links.
//!
//! Pattern-matches the platform's share-link shapes, extracts the
//! opaque video identifier, and substitutes it into the platform's
//! embed template. Unresolvable links come back unchanged so the
//! player degrades to the original URL instead of failing.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::enums::Platform;

fn youtube_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]{11})").expect("youtube regex")
    })
}

fn tiktok_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/video/(\d+)").expect("tiktok regex"))
}

fn instagram_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/(p|reel|tv)/([^/?]+)").expect("instagram regex"))
}

/// YouTube video id from a watch/share/embed URL.
pub fn youtube_id(url: &str) -> Option<&str> {
    youtube_re().captures(url).map(|c| c.get(1).unwrap().as_str())
}

/// TikTok numeric video id. Short links without `/video/` fall back
/// to a trailing numeric path segment.
pub fn tiktok_id(url: &str) -> Option<&str> {
    if let Some(c) = tiktok_re().captures(url) {
        return Some(c.get(1).unwrap().as_str());
    }
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|last| !last.is_empty() && last.chars().all(|ch| ch.is_ascii_digit()))
}

/// Instagram (kind, id) from a post/reel/tv URL.
pub fn instagram_id(url: &str) -> Option<(&str, &str)> {
    instagram_re()
        .captures(url)
        .map(|c| (c.get(1).unwrap().as_str(), c.get(2).unwrap().as_str()))
}

/// Derive the embeddable URL for a shared video link.
pub fn embed_url(url: &str, platform: Platform) -> String {
    match platform {
        Platform::Youtube => match youtube_id(url) {
            Some(id) => format!("https://www.youtube.com/embed/{id}?autoplay=1&rel=0"),
            None => url.to_string(),
        },
        Platform::Tiktok => match tiktok_id(url) {
            // Embed v2 avoids the redirect loop that page URLs hit.
            Some(id) => format!("https://www.tiktok.com/embed/v2/{id}"),
            None => url.to_string(),
        },
        Platform::Instagram => match instagram_id(url) {
            Some((kind, id)) => format!("https://www.instagram.com/{kind}/{id}/embed/"),
            None => url.to_string(),
        },
    }
}
