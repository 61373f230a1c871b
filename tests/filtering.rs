//! Integration tests for the article-list derivations: category filter,
//! free-text search and the bookmarks view, driven through the public
//! `news` API.

use nexara::news::{
    bookmarked_articles, filter_articles, Article, ArticleStore, BookmarkChange, BookmarkSet,
    Category, CategoryFilter, Language, Provenance,
};
use pretty_assertions::assert_eq;

fn article(id: &str, title: &str, description: &str, category: Category) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        content: String::new(),
        author: String::new(),
        source: "Test Wire".to_string(),
        url: format!("https://example.com/{}", id),
        image_url: String::new(),
        published_at: "2024-05-01T10:00:00Z".to_string(),
        category: category.as_str().to_string(),
        language: Language::English,
    }
}

fn two_article_store(provenance: Provenance) -> ArticleStore {
    ArticleStore::new(
        vec![
            article("1", "AI breakthrough", "x", Category::Technology),
            article("2", "Match result", "y", Category::Sports),
        ],
        provenance,
    )
}

fn ids(articles: &[&Article]) -> Vec<String> {
    articles.iter().map(|a| a.id.clone()).collect()
}

// ============================================================================
// Category + search
// ============================================================================

#[test]
fn test_sports_category_with_empty_query() {
    let store = two_article_store(Provenance::Fallback);
    let shown = filter_articles(&store, CategoryFilter::Only(Category::Sports), "");
    assert_eq!(ids(&shown), vec!["2"]);
}

#[test]
fn test_query_ai_across_all_categories() {
    let store = two_article_store(Provenance::Fallback);
    let shown = filter_articles(&store, CategoryFilter::All, "ai");
    assert_eq!(ids(&shown), vec!["1"]);
}

#[test]
fn test_search_is_case_insensitive() {
    let store = ArticleStore::new(
        vec![
            article("a", "Tech giants merge", "", Category::Business),
            article("b", "Weather", "High-tech forecasting", Category::Science),
            article("c", "Football", "Derby day", Category::Sports),
        ],
        Provenance::Fallback,
    );
    let upper = filter_articles(&store, CategoryFilter::All, "TECH");
    let lower = filter_articles(&store, CategoryFilter::All, "tech");
    assert_eq!(ids(&upper), vec!["a", "b"]);
    assert_eq!(ids(&upper), ids(&lower));
}

#[test]
fn test_category_and_query_combine() {
    let store = ArticleStore::new(
        vec![
            article("a", "Cup final tonight", "", Category::Sports),
            article("b", "Cup of coffee prices", "", Category::Business),
            article("c", "League table", "", Category::Sports),
        ],
        Provenance::Fallback,
    );
    let shown = filter_articles(&store, CategoryFilter::Only(Category::Sports), "cup");
    assert_eq!(ids(&shown), vec!["a"]);
}

#[test]
fn test_remote_store_is_not_filtered_by_category() {
    let store = two_article_store(Provenance::Remote);
    let shown = filter_articles(&store, CategoryFilter::Only(Category::Sports), "");
    assert_eq!(ids(&shown), vec!["1", "2"]);

    // Search still applies to remote lists.
    let shown = filter_articles(&store, CategoryFilter::Only(Category::Sports), "match");
    assert_eq!(ids(&shown), vec!["2"]);
}

#[test]
fn test_bundled_samples_cover_every_category_filter() {
    let store = ArticleStore::fallback();
    for filter in CategoryFilter::strip() {
        for a in filter_articles(&store, filter, "") {
            if let CategoryFilter::Only(c) = filter {
                assert_eq!(a.category, c.as_str());
            }
        }
    }
    assert_eq!(filter_articles(&store, CategoryFilter::All, "").len(), store.len());
}

// ============================================================================
// Bookmarks
// ============================================================================

#[test]
fn test_bookmarks_view_follows_store_order_and_drops_dangling_ids() {
    let store = two_article_store(Provenance::Fallback);
    let mut bookmarks = BookmarkSet::new();
    assert_eq!(bookmarks.toggle("2"), BookmarkChange::Saved);
    assert_eq!(bookmarks.toggle("gone"), BookmarkChange::Saved);
    assert_eq!(bookmarks.toggle("1"), BookmarkChange::Saved);

    assert_eq!(ids(&bookmarked_articles(&store, &bookmarks)), vec!["1", "2"]);
    assert_eq!(bookmarks.len(), 3);
}

#[test]
fn test_toggle_twice_restores_set() {
    let mut bookmarks = BookmarkSet::new();
    assert_eq!(bookmarks.toggle("1"), BookmarkChange::Saved);
    assert_eq!(bookmarks.toggle("1"), BookmarkChange::Removed);
    assert!(bookmarks.is_empty());
}

#[test]
fn test_bookmarks_ignore_category_and_search() {
    let store = two_article_store(Provenance::Fallback);
    let mut bookmarks = BookmarkSet::new();
    bookmarks.toggle("1");
    bookmarks.toggle("2");

    // The bookmarks view has no selector inputs at all; the filtered view
    // for the same store is narrower.
    let filtered = filter_articles(&store, CategoryFilter::Only(Category::Sports), "");
    assert_eq!(ids(&filtered), vec!["2"]);
    assert_eq!(ids(&bookmarked_articles(&store, &bookmarks)), vec!["1", "2"]);
}
