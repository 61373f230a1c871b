use std::collections::HashSet;

/// Outcome of a bookmark toggle, used to pick the notification text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkChange {
    Saved,
    Removed,
}

/// Ids of bookmarked articles.
///
/// Never pruned when the article store is replaced; ids whose article is gone
/// simply stop showing up in the bookmarks view.
#[derive(Debug, Clone, Default)]
pub struct BookmarkSet {
    ids: HashSet<String>,
}

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id if absent, remove it if present.
    pub fn toggle(&mut self, id: &str) -> BookmarkChange {
        if self.ids.remove(id) {
            tracing::debug!(id, "Bookmark removed");
            BookmarkChange::Removed
        } else {
            self.ids.insert(id.to_string());
            tracing::debug!(id, "Bookmark saved");
            BookmarkChange::Saved
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut set = BookmarkSet::new();
        assert_eq!(set.toggle("1"), BookmarkChange::Saved);
        assert!(set.contains("1"));
        assert_eq!(set.toggle("1"), BookmarkChange::Removed);
        assert!(set.is_empty());
    }

    #[test]
    fn test_toggle_is_per_id() {
        let mut set = BookmarkSet::new();
        set.toggle("1");
        set.toggle("2");
        set.toggle("1");
        assert!(!set.contains("1"));
        assert!(set.contains("2"));
        assert_eq!(set.len(), 1);
    }

    proptest! {
        #[test]
        fn prop_double_toggle_restores_set(
            initial in prop::collection::hash_set("[a-z0-9]{1,4}", 0..10),
            id in "[a-z0-9]{1,4}",
        ) {
            let mut set = BookmarkSet::new();
            for existing in &initial {
                set.toggle(existing);
            }
            let before = set.ids.clone();
            set.toggle(&id);
            set.toggle(&id);
            prop_assert_eq!(before, set.ids);
        }
    }
}
