use crate::entry::Entry;
use crate::registry::{Registry, RenameSummary};
use std::io::{self, Write};
use std::path::Path;

fn is_planned_delete(entry: &Entry) -> bool {
    entry.processing_requested && entry.marked_for_deletion
}

fn is_planned_rename(entry: &Entry) -> bool {
    entry.processing_requested
        && !entry.marked_for_deletion
        && entry.target_path() != entry.path()
}

fn display_name(path: &Path, root: Option<&Path>) -> String {
    root.and_then(|r| path.strip_prefix(r).ok())
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Display what a rename pass would do, without touching the filesystem
pub fn display_plan(
    registry: &Registry,
    root: Option<&Path>,
    writer: &mut impl Write,
) -> io::Result<()> {
    let deletes: Vec<&Entry> = registry.iter().filter(|e| is_planned_delete(e)).collect();
    let renames: Vec<&Entry> = registry.iter().filter(|e| is_planned_rename(e)).collect();

    writeln!(writer)?;
    writeln!(writer, "========================================")?;
    writeln!(writer, "              DRY RUN")?;
    writeln!(writer, "========================================")?;
    writeln!(writer)?;
    writeln!(writer, "Files scanned: {}", registry.len())?;
    writeln!(writer)?;

    if deletes.is_empty() && renames.is_empty() {
        writeln!(writer, "No files to rename.")?;
        return Ok(());
    }

    if !deletes.is_empty() {
        writeln!(writer, "Planned deletions:")?;
        for entry in &deletes {
            writeln!(writer, "  - {}", display_name(&entry.path(), root))?;
        }
        writeln!(writer)?;
    }

    if !renames.is_empty() {
        writeln!(writer, "Planned renames:")?;
        writeln!(writer)?;
        for (i, entry) in renames.iter().enumerate() {
            writeln!(writer, "  {}. {}", i + 1, display_name(&entry.path(), root))?;
            writeln!(writer, "     To: {}", display_name(&entry.target_path(), root))?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "----------------------------------------")?;
    writeln!(writer, "Summary:")?;
    writeln!(writer, "  {} files would be renamed", renames.len())?;
    if !deletes.is_empty() {
        writeln!(writer, "  {} files would be deleted", deletes.len())?;
    }
    writeln!(writer)?;
    writeln!(writer, "Run without --dry to apply these changes.")?;

    Ok(())
}

/// Display what a rename pass did
pub fn display_summary(
    summary: &RenameSummary,
    root: Option<&Path>,
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(writer)?;

    if summary.is_empty() {
        writeln!(writer, "Nothing to do.")?;
        return Ok(());
    }

    writeln!(writer, "Renamed {} files.", summary.renamed.len())?;
    if !summary.deleted.is_empty() {
        writeln!(writer, "  {} files deleted.", summary.deleted.len())?;
    }
    if !summary.removed_folders.is_empty() {
        writeln!(
            writer,
            "  {} empty folders removed.",
            summary.removed_folders.len()
        )?;
    }

    if !summary.skipped.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "Skipped:")?;
        for (path, reason) in &summary.skipped {
            writeln!(writer, "  - {}: {}", display_name(path, root), reason)?;
        }
    }

    if summary.has_failures() {
        writeln!(writer)?;
        writeln!(writer, "Failed ({}):", summary.failures.len())?;
        for failure in &summary.failures {
            writeln!(
                writer,
                "  - {} {}: {}",
                failure.step.description(),
                display_name(&failure.path, root),
                failure.message
            )?;
        }
    }

    Ok(())
}
