//! Ordered, id-based selection.
//!
//! Membership is decided by id equality, so a selection survives the caller
//! rebuilding its row values as long as the ids stay the same.

/// Selected ids in the order they were selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<K> {
    ids: Vec<K>,
}

impl<K> Default for Selection<K> {
    fn default() -> Self {
        Self { ids: Vec::new() }
    }
}

impl<K: Clone + PartialEq> Selection<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected ids, oldest selection first.
    pub fn ids(&self) -> &[K] {
        &self.ids
    }

    pub fn contains(&self, id: &K) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Deselect `id` if selected, otherwise append it.
    ///
    /// Returns `true` if `id` is selected afterwards.
    pub fn toggle(&mut self, id: &K) -> bool {
        match self.ids.iter().position(|selected| selected == id) {
            Some(pos) => {
                self.ids.remove(pos);
                false
            }
            None => {
                self.ids.push(id.clone());
                true
            }
        }
    }

    /// Keep only the ids for which `keep` returns true, preserving order.
    ///
    /// Returns the number of ids dropped.
    pub fn retain(&mut self, mut keep: impl FnMut(&K) -> bool) -> usize {
        let before = self.ids.len();
        self.ids.retain(|id| keep(id));
        before - self.ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_appends_and_removes() {
        let mut selection = Selection::new();
        assert!(selection.toggle(&1));
        assert!(selection.toggle(&2));
        assert!(selection.toggle(&3));
        assert!(!selection.toggle(&2));
        assert_eq!(selection.ids(), &[1, 3]);
    }

    #[test]
    fn test_double_toggle_restores_order() {
        let mut selection = Selection::new();
        selection.toggle(&"a");
        selection.toggle(&"b");
        let before = selection.clone();

        selection.toggle(&"c");
        selection.toggle(&"c");
        assert_eq!(selection, before);
    }

    #[test]
    fn test_retain_preserves_order() {
        let mut selection = Selection::new();
        for id in [5, 1, 4, 2] {
            selection.toggle(&id);
        }
        let dropped = selection.retain(|id| id % 2 == 0);
        assert_eq!(dropped, 2);
        assert_eq!(selection.ids(), &[4, 2]);
    }
}
