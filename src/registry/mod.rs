//! Ordered collection of discovered entries and the batch operations on it.

mod ops;
mod types;

pub use types::{BatchFailure, FailedStep, PathChange, RegistryError, RenameSummary};

use crate::classifier::ExtensionClassifier;
use crate::entry::{Entry, EntryId};
use crate::matcher::Matcher;
use std::ops::Index;
use tracing::debug;

/// Owns the entries in insertion order.
///
/// Built once at the composition root and passed to whoever drives it; all
/// mutating calls must come from one caller at a time.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<Entry>,
    next_id: u64,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Entry> {
        self.entries.get_mut(index)
    }

    /// Look up an entry by the tag a display row carries
    pub fn get_by_id(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn get_by_id_mut(&mut self, id: EntryId) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.id() == id)
    }

    pub fn index_of(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == id)
    }

    /// Append an entry and hand out its identity
    pub fn add(&mut self, mut entry: Entry) -> EntryId {
        self.next_id += 1;
        let id = EntryId(self.next_id);
        entry.assign_id(id);
        self.entries.push(entry);
        id
    }

    pub fn remove(&mut self, id: EntryId) -> Option<Entry> {
        let index = self.index_of(id)?;
        Some(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Entry> {
        self.entries.iter_mut()
    }

    pub fn ids(&self) -> Vec<EntryId> {
        self.entries.iter().map(Entry::id).collect()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn matcher<'a>(&'a self, classifier: &'a ExtensionClassifier) -> Matcher<'a> {
        Matcher::new(&self.entries, classifier)
    }

    /// Drop entries whose file no longer exists; returns how many went
    pub fn remove_missing_file_entries(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| {
            let exists = e.exists();
            if !exists {
                debug!(path = ?e.path(), "Dropping entry for missing file");
            }
            exists
        });
        before - self.entries.len()
    }
}

impl Index<usize> for Registry {
    type Output = Entry;

    fn index(&self, index: usize) -> &Entry {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Extend<Entry> for Registry {
    fn extend<T: IntoIterator<Item = Entry>>(&mut self, iter: T) {
        for entry in iter {
            self.add(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_add_assigns_distinct_ids() {
        let mut registry = Registry::new();
        let a = registry.add(Entry::new("/tv", "a.mkv"));
        let b = registry.add(Entry::new("/tv", "a.mkv"));

        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.index_of(b), Some(1));
        assert_eq!(registry[0].id(), a);
    }

    #[test]
    fn test_remove_by_id() {
        let mut registry = Registry::new();
        let a = registry.add(Entry::new("/tv", "a.mkv"));
        let b = registry.add(Entry::new("/tv", "b.mkv"));

        let removed = registry.remove(a).unwrap();

        assert_eq!(removed.filename, "a.mkv");
        assert_eq!(registry.ids(), vec![b]);
        assert!(registry.remove(a).is_none());
        assert!(registry.get_by_id(a).is_none());
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let mut registry = Registry::new();
        registry.extend(vec![
            Entry::new("/tv", "c.mkv"),
            Entry::new("/tv", "a.mkv"),
            Entry::new("/tv", "b.mkv"),
        ]);

        let names: Vec<&str> = registry.iter().map(|e| e.filename.as_str()).collect();
        assert_eq!(names, vec!["c.mkv", "a.mkv", "b.mkv"]);

        let count = (&registry).into_iter().count();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_remove_missing_file_entries() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("kept.mkv"), "v").unwrap();

        let mut registry = Registry::new();
        registry.add(Entry::new(dir.path(), "kept.mkv"));
        registry.add(Entry::new(dir.path(), "gone.mkv"));
        registry.add(Entry::new(dir.path(), "gone2.mkv"));

        let removed = registry.remove_missing_file_entries();

        assert_eq!(removed, 2);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry[0].filename, "kept.mkv");
    }

    #[test]
    fn test_clear() {
        let mut registry = Registry::new();
        registry.add(Entry::new("/tv", "a.mkv"));
        registry.clear();
        assert!(registry.is_empty());
    }
}
