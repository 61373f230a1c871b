use super::fallback::fallback_articles;
use super::types::Article;
use std::sync::Arc;

/// Where the current article list came from.
///
/// Remote lists were requested for a specific category and are trusted to be
/// filtered already; fallback lists hold every category and must be filtered
/// locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Remote,
    Fallback,
}

/// The in-memory article list. Insertion order is display order.
///
/// Replaced wholesale, never merged. The list sits behind an `Arc` so the UI
/// can hand it to the reader overlay without cloning every article.
#[derive(Debug, Clone)]
pub struct ArticleStore {
    articles: Arc<Vec<Article>>,
    provenance: Provenance,
}

impl ArticleStore {
    pub fn new(articles: Vec<Article>, provenance: Provenance) -> Self {
        Self {
            articles: Arc::new(articles),
            provenance,
        }
    }

    /// Store seeded with the bundled sample articles.
    pub fn fallback() -> Self {
        Self::new(fallback_articles(), Provenance::Fallback)
    }

    /// Swap in a new list atomically.
    pub fn replace(&mut self, articles: Vec<Article>, provenance: Provenance) {
        tracing::debug!(
            old = self.articles.len(),
            new = articles.len(),
            ?provenance,
            "Replacing article store"
        );
        self.articles = Arc::new(articles);
        self.provenance = provenance;
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    pub fn get(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

impl Default for ArticleStore {
    fn default() -> Self {
        Self::fallback()
    }
}
