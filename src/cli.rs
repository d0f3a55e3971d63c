use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "show-renamer")]
#[command(author, version, about, long_about = None)]
#[command(about = "Rename TV episode files and match subtitles to their videos")]
pub struct Args {
    /// Directory containing the episode files
    pub target_dir: PathBuf,

    /// Only process files that look like they belong to this show
    #[arg(short, long, value_name = "NAME")]
    pub show: Option<String>,

    /// Title to give the selected files (defaults to --show)
    #[arg(short, long, requires = "show")]
    pub title: Option<String>,

    /// Name the selected files after the bare title
    #[arg(short, long, requires = "show")]
    pub movie: bool,

    /// Naming pattern (%T title, %S/%s season, %E/%e episode)
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Delete files whose name matches this regex
    #[arg(long, value_name = "REGEX")]
    pub delete: Option<String>,

    /// Remove folders left empty after renaming
    #[arg(long)]
    pub delete_empty: bool,

    /// Settings file to use instead of the default location
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Simulate changes without modifying the filesystem
    #[arg(short, long)]
    pub dry: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
