//! Small helpers shared by the runner and printers: stderr prefixes and
//! path display.

use owo_colors::OwoColorize;
use std::path::Path;

pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if colors_enabled() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn warn_prefix() -> String {
    if colors_enabled() {
        "warning:".yellow().bold().to_string()
    } else {
        "warning:".to_string()
    }
}

pub fn note_prefix() -> String {
    if colors_enabled() {
        "note:".cyan().bold().to_string()
    } else {
        "note:".to_string()
    }
}

pub fn info_prefix() -> String {
    if colors_enabled() {
        "info:".blue().bold().to_string()
    } else {
        "info:".to_string()
    }
}

/// Path relative to the working directory when possible, for display.
pub fn rel_to_wd(p: &Path) -> String {
    std::env::current_dir()
        .ok()
        .and_then(|wd| rel_to(p, &wd))
        .unwrap_or_else(|| p.to_string_lossy().to_string())
}

/// Path relative to `base`, or `None` when no relative form exists.
pub fn rel_to(p: &Path, base: &Path) -> Option<String> {
    if p.is_relative() {
        return Some(p.to_string_lossy().to_string());
    }
    pathdiff::diff_paths(p, base).map(|r| r.to_string_lossy().to_string())
}
