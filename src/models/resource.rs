use serde::{Deserialize, Serialize};

use super::enums::{Locale, Platform};

/// Trilingual article body. English is the default display locale;
/// readers can switch while the article is open.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleContent {
    pub en: String,
    pub sh: String,
    pub nd: String,
}

impl ArticleContent {
    pub fn for_locale(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Sh => &self.sh,
            Locale::Nd => &self.nd,
        }
    }
}

/// An in-app article from the static catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleResource {
    pub title: String,
    pub description: String,
    pub content: ArticleContent,
    pub category: String,
}

/// A shared video link, embedded in a modal player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoResource {
    pub title: String,
    pub description: String,
    pub url: String,
    pub platform: Platform,
    pub category: String,
}

/// An external website, embedded in a modal frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebsiteResource {
    pub name: String,
    pub url: String,
    pub description: String,
}

/// Article shape served by the companion listing API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteArticle {
    pub id: String,
    pub title: String,
    pub content: String,
}
