//! Bounded most-recently-used list of assigned show titles.

use crate::settings::{Settings, SettingsError, SettingsStore};
use tracing::debug;

/// Distinct titles, most recently used first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleHistory {
    titles: Vec<String>,
    capacity: usize,
}

impl TitleHistory {
    pub fn new(titles: Vec<String>, capacity: usize) -> Self {
        Self { titles, capacity }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.last_titles.clone(), settings.title_history_size)
    }

    /// Record a use of `title`.
    ///
    /// A known title moves to the front and the length is unchanged. A new
    /// title is inserted at the front and the list is cut to capacity.
    pub fn record(&mut self, title: &str) {
        match self.titles.iter().position(|t| t == title) {
            Some(index) => {
                let existing = self.titles.remove(index);
                self.titles.insert(0, existing);
                debug!(title, from = index, "Promoted title in history");
            }
            None => {
                self.titles.insert(0, title.to_string());
                self.titles.truncate(self.capacity);
                debug!(title, len = self.titles.len(), "Added title to history");
            }
        }
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn into_titles(self) -> Vec<String> {
        self.titles
    }
}

/// Load the persisted history, record `title` and write it back
pub fn record_title(store: &mut SettingsStore, title: &str) -> Result<(), SettingsError> {
    let mut history = TitleHistory::from_settings(store.settings());
    history.record(title);
    store.settings_mut().last_titles = history.into_titles();
    store.save()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SettingsConfig;
    use tempfile::tempdir;

    fn titles(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_new_title_goes_first() {
        let mut history = TitleHistory::new(titles(&["Lost"]), 5);
        history.record("Heroes");
        assert_eq!(history.titles(), titles(&["Heroes", "Lost"]).as_slice());
    }

    #[test]
    fn test_new_title_evicts_oldest_when_full() {
        let mut history = TitleHistory::new(titles(&["C", "B", "A"]), 3);

        history.record("D");

        assert_eq!(history.titles(), titles(&["D", "C", "B"]).as_slice());
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_existing_title_is_promoted() {
        let mut history = TitleHistory::new(titles(&["C", "B", "A"]), 3);

        history.record("A");

        assert_eq!(history.titles(), titles(&["A", "C", "B"]).as_slice());
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_promoting_front_title_is_stable() {
        let mut history = TitleHistory::new(titles(&["A", "B"]), 3);
        history.record("A");
        assert_eq!(history.titles(), titles(&["A", "B"]).as_slice());
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut history = TitleHistory::new(Vec::new(), 0);
        history.record("A");
        assert!(history.is_empty());
    }

    #[test]
    fn test_record_title_persists() {
        let dir = tempdir().unwrap();
        let config = SettingsConfig::at(&dir.path().join("settings.json"));
        let mut store = SettingsStore::load(config.clone());
        store.settings_mut().title_history_size = 2;
        store.settings_mut().last_titles = titles(&["B", "A"]);

        record_title(&mut store, "C").unwrap();

        let reloaded = SettingsStore::load(config);
        assert_eq!(reloaded.settings().last_titles, titles(&["C", "B"]));
    }
}
