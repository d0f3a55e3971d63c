use super::types::{FailedStep, PathChange, RegistryError, RenameSummary};
use super::Registry;
use crate::classifier::ExtensionClassifier;
use crate::cleanup::delete_empty_folders;
use crate::entry::{file_stem, EntryId, RenameOutcome};
use crate::history::record_title;
use crate::matcher::ShowNameMatcher;
use crate::path_case::{canonicalize_casing, with_drive_separator};
use crate::settings::{Settings, SettingsStore};
use std::fs;
use std::path::Path;
use tracing::{debug, error, info, warn};

impl Registry {
    /// Flag the entries that probably belong to `show_name` for processing.
    ///
    /// Matches are also marked as episodic. Every other entry is unflagged.
    pub fn select_similar_files_for_processing(
        &mut self,
        base_path: &Path,
        show_name: &str,
        settings: &Settings,
    ) -> Result<Vec<EntryId>, RegistryError> {
        let name_matcher = ShowNameMatcher::new(&settings.cleanup_regex)?;
        let classifier = ExtensionClassifier::from_settings(settings);
        let matches = self
            .matcher(&classifier)
            .find_similar_by_name(show_name, &name_matcher);

        for entry in &mut self.entries {
            if matches.contains(&entry.id()) {
                entry.processing_requested = true;
                entry.movie = false;
            } else {
                entry.processing_requested = false;
            }
        }

        info!(
            base = ?base_path,
            show = show_name,
            selected = matches.len(),
            total = self.entries.len(),
            "Selected similar files"
        );

        Ok(matches)
    }

    /// Name subtitles after the video of the same episode.
    ///
    /// Subtitles that already have a proposal, or whose episode has no single
    /// video, are left alone. Returns how many subtitles got a proposal.
    pub fn rename_subs_to_match_videos(&mut self, settings: &Settings) -> usize {
        let classifier = ExtensionClassifier::from_settings(settings);
        let mut proposed = 0;

        for index in 0..self.entries.len() {
            let subtitle = &self.entries[index];
            if !subtitle.is_subtitle(&classifier) || subtitle.has_proposal() {
                continue;
            }
            let (Some(season), Some(episode)) = (subtitle.season, subtitle.episode) else {
                continue;
            };

            let Some(video_id) = self
                .matcher(&classifier)
                .single_matching_video(season, episode)
                .found()
            else {
                debug!(file = %subtitle.filename, "No single video for subtitle");
                continue;
            };
            let Some(video) = self.get_by_id(video_id) else {
                continue;
            };

            let stem = file_stem(video.target_filename());
            let destination = video.destination.clone();

            let subtitle = &mut self.entries[index];
            subtitle.propose_stem(&stem);
            subtitle.destination = destination;

            if subtitle.has_proposal() {
                proposed += 1;
                debug!(file = %subtitle.filename, proposal = ?subtitle.new_filename(), "Matched subtitle to video");
            }
        }

        proposed
    }

    /// Let every entry compute its proposed name from the naming pattern
    pub fn create_new_names(&mut self, settings: &Settings) {
        for entry in &mut self.entries {
            entry.create_new_name(&settings.target_pattern);
        }
    }

    /// Delete the entries marked for deletion, then apply every rename.
    ///
    /// Walks by index so that removing an entry re-examines the slot the next
    /// entry moved into. A failure on one file is logged and recorded and the
    /// batch carries on.
    pub fn rename(&mut self, settings: &Settings) -> RenameSummary {
        let action = settings.invalid_filename_action;
        let replacement = settings.invalid_char_replacement.as_str();
        let mut summary = RenameSummary::default();

        let mut index = 0;
        while index < self.entries.len() {
            let entry = &self.entries[index];

            if entry.marked_for_deletion && entry.processing_requested {
                let path = entry.path();
                match fs::remove_file(&path) {
                    Ok(()) => {
                        info!("Deleted: {:?}", path);
                        self.entries.remove(index);
                        summary.deleted.push(path);
                        continue;
                    }
                    Err(e) => {
                        error!("Couldn't delete {:?}: {}", path, e);
                        summary.record_failure(&path, FailedStep::Delete, e.to_string());
                    }
                }
            }

            let entry = &mut self.entries[index];
            let source = entry.path();
            match entry.apply_rename(action, replacement) {
                Ok(RenameOutcome::Renamed { from, to }) => summary.renamed.push((from, to)),
                Ok(RenameOutcome::Skipped { reason }) => summary.skipped.push((source, reason)),
                Ok(RenameOutcome::Unchanged) => {}
                Err(e) => {
                    error!("Couldn't rename {:?}: {}", source, e);
                    summary.record_failure(&source, FailedStep::Rename, e.to_string());
                }
            }

            index += 1;
        }

        if settings.delete_empty_folders {
            match &settings.last_directory {
                Some(root) => {
                    summary.removed_folders = delete_empty_folders(root, &settings.ignore_files);
                }
                None => warn!("Empty folder cleanup enabled but no last directory is set"),
            }
        }

        info!(
            deleted = summary.deleted.len(),
            renamed = summary.renamed.len(),
            failed = summary.failures.len(),
            "Rename pass complete"
        );

        summary
    }

    /// Assign `title` as show name and record it in the title history.
    ///
    /// The history is updated and saved even when no entry changed. Returns
    /// how many entries got a new show name.
    pub fn set_new_title(
        &mut self,
        ids: &[EntryId],
        title: &str,
        store: &mut SettingsStore,
    ) -> Result<usize, RegistryError> {
        let mut changed = 0;
        for id in ids {
            if let Some(entry) = self.get_by_id_mut(*id) {
                if entry.show_name != title {
                    entry.show_name = title.to_string();
                    changed += 1;
                }
            }
        }

        record_title(store, title)?;
        debug!(title, changed, "Set new title");

        Ok(changed)
    }

    /// Make `path` the working directory, with its on-disk casing.
    ///
    /// Empty or missing paths are ignored. A path equal to the stored last
    /// directory changes nothing; otherwise it is stored and entered.
    pub fn set_path(path: &str, store: &mut SettingsStore) -> Result<PathChange, RegistryError> {
        if path.is_empty() {
            return Ok(PathChange::Ignored);
        }

        let typed = with_drive_separator(path);
        let typed = Path::new(&typed);
        if !typed.is_dir() {
            debug!(path = ?typed, "Ignoring path that is not a directory");
            return Ok(PathChange::Ignored);
        }

        let fixed = canonicalize_casing(typed)?;

        if store.settings().last_directory.as_deref() == Some(fixed.as_path()) {
            return Ok(PathChange::Unchanged(fixed));
        }

        store.settings_mut().last_directory = Some(fixed.clone());
        store.save()?;
        std::env::set_current_dir(&fixed)?;

        info!("Working directory set to {:?}", fixed);
        Ok(PathChange::Changed(fixed))
    }
}
