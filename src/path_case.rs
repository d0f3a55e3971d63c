//! Fix the casing of user-typed paths to match what is stored on disk.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf, Prefix, MAIN_SEPARATOR};
use tracing::trace;

/// A bare drive letter such as `d:` gets a trailing separator
pub fn with_drive_separator(path: &str) -> String {
    let mut chars = path.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(letter), Some(':'), None) if letter.is_ascii_alphabetic() => {
            format!("{}{}", path, MAIN_SEPARATOR)
        }
        _ => path.to_string(),
    }
}

/// Rebuild `path` from the root down, taking each component's name from its
/// parent's directory listing.
///
/// An exact name match wins; otherwise the first case-insensitive match is
/// used, and a component with no match is kept as typed. Relative paths are
/// resolved against the working directory and `.`/`..` are folded lexically.
/// Listing failures are returned to the caller.
pub fn canonicalize_casing(path: &Path) -> io::Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut root = PathBuf::new();
    let mut names: Vec<OsString> = Vec::new();

    for component in absolute.components() {
        match component {
            Component::Prefix(prefix) => {
                root.push(normalize_prefix(prefix.kind(), prefix.as_os_str()))
            }
            Component::RootDir => root.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                names.pop();
            }
            Component::Normal(name) => names.push(name.to_os_string()),
        }
    }

    let mut fixed = root;
    for name in names {
        let actual = stored_name(&fixed, &name)?.unwrap_or(name);
        fixed.push(actual);
    }

    trace!(input = ?path, fixed = ?fixed, "Canonicalized path casing");
    Ok(fixed)
}

fn normalize_prefix(kind: Prefix<'_>, raw: &std::ffi::OsStr) -> OsString {
    match kind {
        Prefix::Disk(_) | Prefix::VerbatimDisk(_) => {
            OsString::from(raw.to_string_lossy().to_uppercase())
        }
        _ => raw.to_os_string(),
    }
}

/// Name of `name` as the directory listing of `parent` spells it.
/// A missing `parent` yields `None`.
fn stored_name(parent: &Path, name: &OsString) -> io::Result<Option<OsString>> {
    let wanted = name.to_string_lossy().to_lowercase();
    let mut candidate = None;

    let listing = match fs::read_dir(parent) {
        Ok(listing) => listing,
        // Parent was itself missing, nothing to correct below it
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };

    for entry in listing {
        let entry = entry?;
        let entry_name = entry.file_name();
        if entry_name == *name {
            return Ok(Some(entry_name));
        }
        if candidate.is_none() && entry_name.to_string_lossy().to_lowercase() == wanted {
            candidate = Some(entry_name);
        }
    }

    Ok(candidate)
}
