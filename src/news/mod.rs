//! Article model and the in-memory derivations the UI renders.
//!
//! - `types` - `Article`, `Category`, `CategoryFilter`, `Language`
//! - `store` - the replaceable article list and its provenance
//! - `filter` - category/search filtering and the bookmarks view
//! - `bookmarks` - the bookmark id set
//! - `refresh` - request generations for the news fetch
//! - `fallback` - bundled sample articles

mod bookmarks;
mod fallback;
mod filter;
mod refresh;
mod store;
mod types;

pub use bookmarks::{BookmarkChange, BookmarkSet};
pub use fallback::fallback_articles;
pub use filter::{bookmarked_articles, filter_articles};
pub use refresh::RefreshState;
pub use store::{ArticleStore, Provenance};
pub use types::{stable_id, Article, Category, CategoryFilter, Language};

/// Minimal article for unit tests.
#[cfg(test)]
pub(crate) fn test_article(id: &str, title: &str, description: &str, category: &str) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        content: String::new(),
        author: String::new(),
        source: String::new(),
        url: String::new(),
        image_url: String::new(),
        published_at: String::new(),
        category: category.to_string(),
        language: Language::English,
    }
}
