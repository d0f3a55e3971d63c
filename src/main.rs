use clap::Parser;
use regex::Regex;
use show_renamer::cli::Args;
use show_renamer::output::{display_plan, display_summary};
use show_renamer::ui::{Ui, UiConfig};
use show_renamer::{
    logging, scan_media_files, AppError, ExtensionClassifier, Registry, SettingsConfig,
    SettingsStore,
};
use std::path::PathBuf;
use tracing::{debug, error, info};

fn main() {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    logging::init(args.verbose);

    let mut ui = Ui::new(UiConfig::new(args.verbose > 0));
    ui.print_header(env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(args, &mut ui) {
        error!("{}", e);
        ui.error(&format!("Error: {}", e.detailed_message()));
        std::process::exit(e.exit_code().into());
    }
}

fn run(args: Args, ui: &mut Ui) -> Result<(), AppError> {
    let config = SettingsConfig::resolve(args.config.as_deref());
    debug!(path = ?config.settings_path, "Using settings file");
    let mut store = SettingsStore::load(config);

    // Entering the folder first keeps every scanned path absolute and correctly cased
    let change = Registry::set_path(&args.target_dir.to_string_lossy(), &mut store)?;
    let root: PathBuf = match change.path() {
        Some(path) => path.to_path_buf(),
        None if args.target_dir.exists() => {
            return Err(AppError::NotADirectory {
                path: args.target_dir,
            })
        }
        None => {
            return Err(AppError::DirectoryNotFound {
                path: args.target_dir,
            })
        }
    };

    let classifier = ExtensionClassifier::from_settings(store.settings());
    let mut registry = Registry::new();
    registry.extend(scan_media_files(&root, &classifier)?);

    ui.kv("Directory", &root.display().to_string());
    ui.kv("Files", &registry.len().to_string());
    info!("Found {} media files in {:?}", registry.len(), root);

    if let Some(show) = &args.show {
        let ids = registry.select_similar_files_for_processing(&root, show, store.settings())?;
        if ids.is_empty() {
            ui.warning(&format!("No files look like they belong to '{}'", show));
        }

        let title = args.title.as_deref().unwrap_or(show);
        registry.set_new_title(&ids, title, &mut store)?;
        ui.kv("Show", title);

        if args.movie {
            for id in &ids {
                if let Some(entry) = registry.get_by_id_mut(*id) {
                    entry.movie = true;
                }
            }
        }
    } else {
        for entry in registry.iter_mut() {
            entry.processing_requested = true;
        }
    }

    // Overrides apply to this run only and are never written back
    let mut settings = store.settings().clone();
    if let Some(pattern) = &args.pattern {
        settings.target_pattern = pattern.clone();
    }
    if args.delete_empty {
        settings.delete_empty_folders = true;
    }

    if let Some(pattern) = &args.delete {
        let regex = Regex::new(pattern).map_err(|e| AppError::InvalidArguments {
            message: format!("Invalid --delete pattern '{}': {}", pattern, e),
        })?;
        for entry in registry.iter_mut() {
            if entry.processing_requested && regex.is_match(&entry.filename) {
                debug!(file = %entry.filename, "Marked for deletion");
                entry.marked_for_deletion = true;
            }
        }
    }

    let subtitles = registry.rename_subs_to_match_videos(&settings);
    debug!(subtitles, "Subtitles matched to videos");
    registry.create_new_names(&settings);

    let mut stdout = std::io::stdout();

    if args.dry {
        ui.info("Dry run, no files will be changed");
        display_plan(&registry, Some(root.as_path()), &mut stdout)
            .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;
        return Ok(());
    }

    let summary = registry.rename(&settings);

    display_summary(&summary, Some(root.as_path()), &mut stdout)
        .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;

    if summary.has_failures() {
        return Err(AppError::BatchFailed {
            failures: summary.failures,
        });
    }

    ui.success(&format!("Renamed {} files", summary.renamed.len()));
    Ok(())
}
