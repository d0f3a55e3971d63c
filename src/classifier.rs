use crate::settings::Settings;

/// Kind of media file, derived from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Video,
    Subtitle,
    Other,
}

/// Classifies extensions against the configured video and subtitle lists.
///
/// Extensions are compared lower-cased and without a leading dot, both here
/// and in [`normalize_extension`], so `.MKV`, `MKV` and `mkv` are the same.
#[derive(Debug, Clone, Default)]
pub struct ExtensionClassifier {
    video: Vec<String>,
    subtitle: Vec<String>,
}

impl ExtensionClassifier {
    pub fn new<S: AsRef<str>>(video: &[S], subtitle: &[S]) -> Self {
        Self {
            video: video.iter().map(|e| normalize_extension(e.as_ref())).collect(),
            subtitle: subtitle
                .iter()
                .map(|e| normalize_extension(e.as_ref()))
                .collect(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.video_extensions.as_slice(),
            settings.subtitle_extensions.as_slice(),
        )
    }

    pub fn is_video(&self, extension: &str) -> bool {
        let ext = normalize_extension(extension);
        self.video.iter().any(|v| *v == ext)
    }

    pub fn is_subtitle(&self, extension: &str) -> bool {
        let ext = normalize_extension(extension);
        self.subtitle.iter().any(|s| *s == ext)
    }

    /// Video wins when the configured lists overlap
    pub fn classify(&self, extension: &str) -> FileKind {
        if self.is_video(extension) {
            FileKind::Video
        } else if self.is_subtitle(extension) {
            FileKind::Subtitle
        } else {
            FileKind::Other
        }
    }

    pub fn is_media(&self, extension: &str) -> bool {
        self.classify(extension) != FileKind::Other
    }
}

/// Canonical form of an extension: lower case, no leading dot
pub fn normalize_extension(extension: &str) -> String {
    extension.trim().trim_start_matches('.').to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> ExtensionClassifier {
        ExtensionClassifier::new(&["mkv", "AVI", ".mp4"], &["srt", "sub"])
    }

    #[test]
    fn test_video_and_subtitle_are_exclusive() {
        let c = classifier();

        assert!(c.is_video("mkv"));
        assert!(!c.is_subtitle("mkv"));
        assert!(c.is_subtitle("srt"));
        assert!(!c.is_video("srt"));
    }

    #[test]
    fn test_unknown_extension_is_neither() {
        let c = classifier();

        assert!(!c.is_video("nfo"));
        assert!(!c.is_subtitle("nfo"));
        assert_eq!(c.classify("nfo"), FileKind::Other);
        assert!(!c.is_media("nfo"));
    }

    #[test]
    fn test_casing_and_dot_are_normalized() {
        let c = classifier();

        assert!(c.is_video("MKV"));
        assert!(c.is_video(".avi"));
        assert!(c.is_video("mp4"));
        assert_eq!(c.classify("SRT"), FileKind::Subtitle);
    }

    #[test]
    fn test_overlapping_lists_prefer_video() {
        let c = ExtensionClassifier::new(&["mkv"], &["mkv"]);
        assert_eq!(c.classify("mkv"), FileKind::Video);
    }

    #[test]
    fn test_from_default_settings() {
        let c = ExtensionClassifier::from_settings(&Settings::default());
        assert_eq!(c.classify("mkv"), FileKind::Video);
        assert_eq!(c.classify("srt"), FileKind::Subtitle);
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension(".MkV"), "mkv");
        assert_eq!(normalize_extension("srt"), "srt");
    }
}
