use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

// ============================================================================
// Language
// ============================================================================

/// UI and content languages offered by the language picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "ta")]
    Tamil,
    #[serde(rename = "te")]
    Telugu,
    #[serde(rename = "ml")]
    Malayalam,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "zh")]
    Chinese,
}

impl Language {
    /// Picker order.
    pub const ALL: [Language; 9] = [
        Language::English,
        Language::Hindi,
        Language::Tamil,
        Language::Telugu,
        Language::Malayalam,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Chinese,
    ];

    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Tamil => "ta",
            Self::Telugu => "te",
            Self::Malayalam => "ml",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::German => "de",
            Self::Chinese => "zh",
        }
    }

    /// Name used in the generation prompt.
    pub fn english_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Tamil => "Tamil",
            Self::Telugu => "Telugu",
            Self::Malayalam => "Malayalam",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::German => "German",
            Self::Chinese => "Chinese",
        }
    }

    /// Name shown in the language picker.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "हिन्दी",
            Self::Tamil => "தமிழ்",
            Self::Telugu => "తెలుగు",
            Self::Malayalam => "മലയാളം",
            Self::Spanish => "Español",
            Self::French => "Français",
            Self::German => "Deutsch",
            Self::Chinese => "中文",
        }
    }

    /// Parse a language code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|l| l.code() == code)
    }
}

// ============================================================================
// Category
// ============================================================================

/// The fixed set of news categories shown in the category strip.
///
/// The identifier string is the English name and is what articles carry in
/// their `category` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    General,
    Technology,
    Sports,
    Business,
    Entertainment,
    Health,
    Science,
    Politics,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::General,
        Category::Technology,
        Category::Sports,
        Category::Business,
        Category::Entertainment,
        Category::Health,
        Category::Science,
        Category::Politics,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Technology => "Technology",
            Self::Sports => "Sports",
            Self::Business => "Business",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Science => "Science",
            Self::Politics => "Politics",
        }
    }

    /// Exact (case-sensitive) identifier lookup.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == id)
    }
}

/// Category selector: the "All" sentinel or one enumerated category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Strip order: All first, then every category.
    pub fn strip() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(Self::Only))
    }

    /// The category sent to the news source, which has no notion of "All".
    pub fn request_category(self) -> Category {
        match self {
            Self::All => Category::General,
            Self::Only(category) => category,
        }
    }

    /// Parse a CLI/config value. "all" (any case) selects the sentinel.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .map(Self::Only)
    }

    /// Step through the strip, wrapping at both ends.
    pub fn cycle(self, forward: bool) -> Self {
        let strip: Vec<CategoryFilter> = Self::strip().collect();
        let idx = strip.iter().position(|c| *c == self).unwrap_or(0);
        let next = if forward {
            (idx + 1) % strip.len()
        } else {
            (idx + strip.len() - 1) % strip.len()
        };
        strip[next]
    }
}

// ============================================================================
// Article
// ============================================================================

/// A single news item. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub author: String,
    pub source: String,
    pub url: String,
    pub image_url: String,
    /// Free-form; RFC 3339 when the source provides it.
    pub published_at: String,
    /// One of the `Category` identifiers or an arbitrary string from the source.
    pub category: String,
    pub language: Language,
}

/// Derive a stable article id from its url, or its title when there is no url.
///
/// Keeps bookmarks attached to an article that comes back in a later refresh.
pub fn stable_id(url: &str, title: &str) -> String {
    let key = if url.trim().is_empty() { title } else { url };
    let digest = Sha256::digest(key.trim().as_bytes());
    digest[..8].iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("EN"), Some(Language::English));
        assert_eq!(Language::from_code("xx"), None);
    }

    #[test]
    fn test_language_serializes_as_code() {
        let json = serde_json::to_string(&Language::Malayalam).unwrap();
        assert_eq!(json, "\"ml\"");
    }

    #[test]
    fn test_all_resolves_to_general() {
        assert_eq!(CategoryFilter::All.request_category(), Category::General);
        assert_eq!(
            CategoryFilter::Only(Category::Sports).request_category(),
            Category::Sports
        );
    }

    #[test]
    fn test_category_from_id_is_case_sensitive() {
        assert_eq!(Category::from_id("Sports"), Some(Category::Sports));
        assert_eq!(Category::from_id("sports"), None);
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(CategoryFilter::parse("ALL"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::parse("technology"),
            Some(CategoryFilter::Only(Category::Technology))
        );
        assert_eq!(CategoryFilter::parse("weather"), None);
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(
            CategoryFilter::All.cycle(true),
            CategoryFilter::Only(Category::General)
        );
        assert_eq!(
            CategoryFilter::All.cycle(false),
            CategoryFilter::Only(Category::Politics)
        );
        assert_eq!(
            CategoryFilter::Only(Category::Politics).cycle(true),
            CategoryFilter::All
        );
    }

    #[test]
    fn test_stable_id_prefers_url() {
        let a = stable_id("https://example.com/a", "Title one");
        let b = stable_id("https://example.com/a", "Title two");
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);

        let c = stable_id("", "Title one");
        let d = stable_id("  ", "Title one");
        assert_eq!(c, d);
        assert_ne!(a, c);
    }

    #[test]
    fn test_article_deserializes_camel_case() {
        let json = r#"{
            "id": "1", "title": "t", "description": "d", "content": "c",
            "author": "a", "source": "s", "url": "https://x.test",
            "imageUrl": "https://img.test", "publishedAt": "2024-01-01T00:00:00Z",
            "category": "Technology", "language": "en"
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.image_url, "https://img.test");
        assert_eq!(article.language, Language::English);
    }
}
