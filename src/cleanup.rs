use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Remove every folder below `root` that holds nothing but ignored files.
///
/// Folders are visited deepest first so nested empty trees collapse in one
/// pass. Ignored files (compared case-insensitively by name) are deleted with
/// their folder. `root` itself is kept. Failures are logged and skipped.
pub fn delete_empty_folders(root: &Path, ignore_files: &[String]) -> Vec<PathBuf> {
    let ignore: Vec<String> = ignore_files.iter().map(|f| f.to_lowercase()).collect();
    let mut removed = Vec::new();

    let folders: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .contents_first(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_dir())
        .map(|e| e.into_path())
        .collect();

    for folder in folders {
        match remove_if_empty(&folder, &ignore) {
            Ok(true) => {
                info!("Removed empty folder: {:?}", folder);
                removed.push(folder);
            }
            Ok(false) => {}
            Err(e) => warn!("Could not clean up {:?}: {}", folder, e),
        }
    }

    debug!(count = removed.len(), root = ?root, "Empty folder cleanup done");
    removed
}

fn remove_if_empty(folder: &Path, ignore: &[String]) -> std::io::Result<bool> {
    let mut ignored = Vec::new();

    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_lowercase();
        if entry.file_type()?.is_file() && ignore.contains(&name) {
            ignored.push(entry.path());
        } else {
            return Ok(false);
        }
    }

    for file in ignored {
        fs::remove_file(&file)?;
    }
    fs::remove_dir(folder)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn ignore() -> Vec<String> {
        vec!["Thumbs.db".to_string(), "desktop.ini".to_string()]
    }

    #[test]
    fn test_removes_nested_empty_folders() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a").join("b").join("c")).unwrap();

        let removed = delete_empty_folders(dir.path(), &ignore());

        assert_eq!(removed.len(), 3);
        assert!(!dir.path().join("a").exists());
        assert!(dir.path().exists());
    }

    #[test]
    fn test_keeps_folders_with_content() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("show").join("empty")).unwrap();
        fs::write(dir.path().join("show").join("ep.mkv"), "video").unwrap();

        delete_empty_folders(dir.path(), &ignore());

        assert!(dir.path().join("show").join("ep.mkv").exists());
        assert!(!dir.path().join("show").join("empty").exists());
    }

    #[test]
    fn test_ignored_files_do_not_keep_folder() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("old")).unwrap();
        fs::write(dir.path().join("old").join("thumbs.db"), "junk").unwrap();

        let removed = delete_empty_folders(dir.path(), &ignore());

        assert_eq!(removed, vec![dir.path().join("old")]);
        assert!(!dir.path().join("old").exists());
    }

    #[test]
    fn test_root_is_never_removed() {
        let dir = tempdir().unwrap();

        let removed = delete_empty_folders(dir.path(), &ignore());

        assert!(removed.is_empty());
        assert!(dir.path().exists());
    }
}
