use super::types::{Settings, SettingsConfig, SettingsError, SettingsFile, SETTINGS_VERSION};
use chrono::Utc;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::{debug, info, warn};

/// Persistent key-value store for user settings
pub struct SettingsStore {
    config: SettingsConfig,
    data: SettingsFile,
}

impl SettingsStore {
    /// Load settings from disk or fall back to defaults
    pub fn load(config: SettingsConfig) -> Self {
        let data = match Self::read_settings_file(&config.settings_path) {
            Ok(file) => {
                debug!(path = ?config.settings_path, "Loaded settings");
                file
            }
            Err(e) => {
                match &e {
                    SettingsError::IoError(io_err)
                        if io_err.kind() == std::io::ErrorKind::NotFound =>
                    {
                        debug!("No settings file found, using defaults");
                    }
                    _ => {
                        warn!("Failed to load settings: {}, using defaults", e);
                    }
                }
                SettingsFile::default()
            }
        };

        Self { config, data }
    }

    fn read_settings_file(path: &Path) -> Result<SettingsFile, SettingsError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let data: SettingsFile =
            serde_json::from_reader(reader).map_err(|_| SettingsError::Corrupted)?;

        if data.version != SETTINGS_VERSION {
            return Err(SettingsError::VersionMismatch {
                expected: SETTINGS_VERSION.to_string(),
                found: data.version,
            });
        }

        Ok(data)
    }

    pub fn settings(&self) -> &Settings {
        &self.data.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.data.settings
    }

    /// Write settings to disk
    pub fn save(&mut self) -> Result<(), SettingsError> {
        if let Some(parent) = self.config.settings_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        self.data.updated_at = Some(Utc::now());

        let temp_path = self.config.settings_path.with_extension("json.tmp");

        {
            let file = File::create(&temp_path)?;
            let writer = BufWriter::new(file);
            serde_json::to_writer_pretty(writer, &self.data)?;
        }

        fs::rename(&temp_path, &self.config.settings_path)?;

        info!("Saved settings to {:?}", self.config.settings_path);
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.config.settings_path
    }
}
