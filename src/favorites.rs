//! Favorites store
//!
//! In-memory, session-only storage of saved quotes and facts. Quotes and
//! facts live in separate namespaces; within a namespace there is at most
//! one entry per distinct text value. Nothing is persisted - the store is
//! reset when the process exits.

use crate::api::content::ContentKind;

/// A saved quote or fact, stored by value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteEntry {
    pub text: String,
    /// Present for quotes, empty for facts
    pub author: String,
}

/// What a `toggle` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Added,
    Removed,
}

/// Result of a toggle: what happened and the new total count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleResult {
    pub action: ToggleAction,
    pub new_count: usize,
}

/// Read-only snapshot of both sequences for display
#[derive(Debug, Clone)]
pub struct FavoritesView<'a> {
    pub quotes: &'a [FavoriteEntry],
    pub facts: &'a [FavoriteEntry],
}

/// Session-local favorites with ordered quote and fact sequences
#[derive(Debug, Default)]
pub struct FavoritesStore {
    quotes: Vec<FavoriteEntry>,
    facts: Vec<FavoriteEntry>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle an entry by exact text equality within its namespace
    ///
    /// If an entry with the same text exists it is removed (order of the
    /// remaining entries preserved); otherwise the entry is appended.
    pub fn toggle(&mut self, kind: ContentKind, text: &str, author: &str) -> ToggleResult {
        let entries = self.entries_mut(kind);

        let action = match entries.iter().position(|e| e.text == text) {
            Some(index) => {
                entries.remove(index);
                ToggleAction::Removed
            }
            None => {
                entries.push(FavoriteEntry {
                    text: text.to_string(),
                    author: author.to_string(),
                });
                ToggleAction::Added
            }
        };

        ToggleResult {
            action,
            new_count: self.count(),
        }
    }

    /// Whether `text` is currently saved in its namespace
    pub fn contains(&self, kind: ContentKind, text: &str) -> bool {
        self.entries(kind).iter().any(|e| e.text == text)
    }

    /// Total number of saved entries across both namespaces
    pub fn count(&self) -> usize {
        self.quotes.len() + self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Read-only snapshot for the overview modal
    pub fn view(&self) -> FavoritesView<'_> {
        FavoritesView {
            quotes: &self.quotes,
            facts: &self.facts,
        }
    }

    fn entries(&self, kind: ContentKind) -> &Vec<FavoriteEntry> {
        match kind {
            ContentKind::Quote => &self.quotes,
            ContentKind::Fact => &self.facts,
        }
    }

    fn entries_mut(&mut self, kind: ContentKind) -> &mut Vec<FavoriteEntry> {
        match kind {
            ContentKind::Quote => &mut self.quotes,
            ContentKind::Fact => &mut self.facts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_quotes(texts: &[&str]) -> FavoritesStore {
        let mut store = FavoritesStore::new();
        for text in texts {
            store.toggle(ContentKind::Quote, text, "Author");
        }
        store
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut store = FavoritesStore::new();

        let result = store.toggle(ContentKind::Quote, "X", "Y");
        assert_eq!(result.action, ToggleAction::Added);
        assert_eq!(result.new_count, 1);
        assert!(store.contains(ContentKind::Quote, "X"));

        let result = store.toggle(ContentKind::Quote, "X", "Y");
        assert_eq!(result.action, ToggleAction::Removed);
        assert_eq!(result.new_count, 0);
        assert!(!store.contains(ContentKind::Quote, "X"));
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut store = store_with_quotes(&["a", "b", "c"]);
        let before = store.count();

        store.toggle(ContentKind::Quote, "b", "Author");
        store.toggle(ContentKind::Quote, "b", "Author");

        assert_eq!(store.count(), before);
        assert!(store.contains(ContentKind::Quote, "b"));
    }

    #[test]
    fn test_remove_preserves_order_of_survivors() {
        let mut store = store_with_quotes(&["first", "second", "third"]);

        store.toggle(ContentKind::Quote, "second", "Author");

        let view = store.view();
        let texts: Vec<_> = view.quotes.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "third"]);
    }

    #[test]
    fn test_namespaces_are_independent() {
        let mut store = FavoritesStore::new();

        store.toggle(ContentKind::Quote, "same text", "Author");
        store.toggle(ContentKind::Fact, "same text", "");

        // Same text in both namespaces counts twice
        assert_eq!(store.count(), 2);
        assert!(store.contains(ContentKind::Quote, "same text"));
        assert!(store.contains(ContentKind::Fact, "same text"));

        // Removing from one namespace leaves the other
        store.toggle(ContentKind::Fact, "same text", "");
        assert_eq!(store.count(), 1);
        assert!(store.contains(ContentKind::Quote, "same text"));
    }

    #[test]
    fn test_count_is_sum_of_both_sequences() {
        let mut store = store_with_quotes(&["q1", "q2"]);
        store.toggle(ContentKind::Fact, "f1", "");

        let view = store.view();
        assert_eq!(store.count(), view.quotes.len() + view.facts.len());
        assert_eq!(store.count(), 3);
    }

    #[test]
    fn test_empty_store() {
        let store = FavoritesStore::new();
        assert!(store.is_empty());
        assert_eq!(store.count(), 0);
        assert!(store.view().quotes.is_empty());
        assert!(store.view().facts.is_empty());
    }
}
