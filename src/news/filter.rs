//! Derivation of the displayed article lists.
//!
//! Both views are stable filters over the store: no re-sorting, no ranking.

use super::bookmarks::BookmarkSet;
use super::store::{ArticleStore, Provenance};
use super::types::{Article, CategoryFilter};

/// Articles to show for the current category selector and search query.
///
/// Category filtering is skipped for remote lists, which were already
/// requested for the selected category. Search matches the query as a
/// case-insensitive substring of the title or description; an empty query
/// matches everything.
pub fn filter_articles<'a>(
    store: &'a ArticleStore,
    category: CategoryFilter,
    query: &str,
) -> Vec<&'a Article> {
    let local_category = match (category, store.provenance()) {
        (CategoryFilter::Only(c), Provenance::Fallback) => Some(c.as_str()),
        _ => None,
    };

    let needle = query.to_lowercase();

    store
        .articles()
        .iter()
        .filter(|a| local_category.map_or(true, |c| a.category == c))
        .filter(|a| needle.is_empty() || matches_query(a, &needle))
        .collect()
}

/// Bookmarked articles still present in the store, in store order.
///
/// Ignores the category and search selectors. Ids whose article has been
/// replaced out of the store are skipped.
pub fn bookmarked_articles<'a>(
    store: &'a ArticleStore,
    bookmarks: &BookmarkSet,
) -> Vec<&'a Article> {
    store
        .articles()
        .iter()
        .filter(|a| bookmarks.contains(&a.id))
        .collect()
}

/// `needle` must already be lowercased.
fn matches_query(article: &Article, needle: &str) -> bool {
    article.title.to_lowercase().contains(needle)
        || article.description.to_lowercase().contains(needle)
}
