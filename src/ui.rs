//! Styled status lines on stderr.
//!
//! In verbose mode tracing carries the story, so everything except errors is
//! suppressed.

use colored::Colorize;
use std::io::{self, IsTerminal, Write};

const HEADER: &str = "show-renamer";

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    pub colors_enabled: bool,
    pub verbose: bool,
}

impl UiConfig {
    pub fn new(verbose: bool) -> Self {
        Self {
            colors_enabled: should_use_colors(),
            verbose,
        }
    }
}

/// Check if we should use colors in output
fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    io::stderr().is_terminal()
}

pub struct Ui {
    config: UiConfig,
    writer: Box<dyn Write>,
}

impl Ui {
    pub fn new(config: UiConfig) -> Self {
        Self::with_writer(config, Box::new(io::stderr()))
    }

    pub fn with_writer(config: UiConfig, writer: Box<dyn Write>) -> Self {
        if !config.colors_enabled {
            colored::control::set_override(false);
        }

        Self { config, writer }
    }

    // Status lines are best effort; a closed stderr must not abort a rename.
    fn line(&mut self, styled: impl FnOnce() -> String, plain: impl FnOnce() -> String) {
        if self.config.verbose {
            return;
        }
        let text = if self.config.colors_enabled {
            styled()
        } else {
            plain()
        };
        let _ = writeln!(self.writer, "{}", text);
    }

    pub fn print_header(&mut self, version: &str) {
        self.line(
            || format!("{} {}", HEADER.bright_cyan().bold(), format!("v{}", version).dimmed()),
            || format!("{} v{}", HEADER, version),
        );
    }

    pub fn info(&mut self, msg: &str) {
        self.line(|| msg.cyan().to_string(), || msg.to_string());
    }

    pub fn success(&mut self, msg: &str) {
        self.line(
            || format!("{} {}", "✓".green().bold(), msg.green()),
            || format!("* {}", msg),
        );
    }

    pub fn warning(&mut self, msg: &str) {
        self.line(
            || format!("{} {}", "!".yellow().bold(), msg.yellow()),
            || format!("! {}", msg),
        );
    }

    /// Errors are shown in verbose mode too
    pub fn error(&mut self, msg: &str) {
        let text = if self.config.colors_enabled {
            format!("{} {}", "✗".red().bold(), msg.red())
        } else {
            format!("X {}", msg)
        };
        let _ = writeln!(self.writer, "{}", text);
    }

    pub fn kv(&mut self, key: &str, value: &str) {
        self.line(
            || format!("{}: {}", key.bold(), value),
            || format!("{}: {}", key, value),
        );
    }
}
