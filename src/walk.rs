//! File discovery with ignore patterns and binary detection.
//!
//! Uses the `ignore` crate (same walker as ripgrep) so `.gitignore`
//! semantics match what developers expect from their other tools.

use crate::error::Error;
use crate::util::{is_binary_file, to_posix};
use ignore::overrides::OverrideBuilder;
use ignore::WalkBuilder;
use std::path::Path;
use tracing::debug;

/// Built-in patterns applied unless `use_default_ignore` is off.
/// Gitignore syntax; trailing slash restricts a pattern to directories.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    ".git/",
    ".hg/",
    ".svn/",
    ".idea/",
    ".vscode/",
    ".DS_Store",
    "node_modules/",
    "__pycache__/",
    "*.pyc",
    ".venv/",
    "venv/",
    ".tox/",
    ".mypy_cache/",
    ".pytest_cache/",
    ".ruff_cache/",
    "target/",
    "dist/",
    "build/",
    "out/",
    "*.min.js",
    "*.map",
];

/// Options for [`find_files`].
#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// Descend into subdirectories (default: true).
    pub recursive: bool,
    /// Extra gitignore-syntax patterns to exclude.
    pub ignore_patterns: Vec<String>,
    /// Apply [`DEFAULT_IGNORE_PATTERNS`] (default: true).
    pub use_default_ignore: bool,
    /// Honor `.gitignore` files, git checkout or not (default: true).
    pub respect_gitignore: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        WalkOptions {
            recursive: true,
            ignore_patterns: Vec::new(),
            use_default_ignore: true,
            respect_gitignore: true,
        }
    }
}

/// Collect all non-binary files under `root`.
///
/// Returns paths relative to `root`, `/`-separated and sorted.
pub fn find_files(root: &Path, options: &WalkOptions) -> Result<Vec<String>, Error> {
    if !root.exists() {
        return Err(Error::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }

    let mut overrides = OverrideBuilder::new(root);
    if options.use_default_ignore {
        for pattern in DEFAULT_IGNORE_PATTERNS {
            add_ignore(&mut overrides, pattern)?;
        }
    }
    for pattern in &options.ignore_patterns {
        add_ignore(&mut overrides, pattern)?;
    }
    let overrides = overrides.build().map_err(|e| Error::Pattern {
        pattern: String::new(),
        message: e.to_string(),
    })?;

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .git_ignore(options.respect_gitignore)
        .require_git(false)
        .parents(false)
        .follow_links(false)
        .overrides(overrides)
        .max_depth(if options.recursive { None } else { Some(1) });

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("skipping unreadable entry: {e}");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.path();
        if is_binary_file(path) {
            debug!("skipping binary file: {}", path.display());
            continue;
        }
        let relative = path.strip_prefix(root).unwrap_or(path);
        files.push(to_posix(relative));
    }

    files.sort();
    Ok(files)
}

/// Register one exclusion. Override patterns whitelist by default, so
/// exclusions are spelled with a leading `!`.
fn add_ignore(overrides: &mut OverrideBuilder, pattern: &str) -> Result<(), Error> {
    overrides
        .add(&format!("!{pattern}"))
        .map_err(|e| Error::Pattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
    Ok(())
}
