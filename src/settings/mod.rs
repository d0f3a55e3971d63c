mod store;
mod types;

pub use store::SettingsStore;
pub use types::{
    InvalidFilenameAction, Settings, SettingsConfig, SettingsError, SettingsFile, SETTINGS_VERSION,
};
