//! Content scanning for windcfg.
//!
//! Resolves the configured content globs against a source root and collects
//! the candidate class names found in matching files. The globs are the only
//! universe of scanned files: a class used only outside them is absent from
//! the result, and the build tool is expected to drop it.

mod extractor;

pub use extractor::extract_candidates;

use crate::config::BuildConfiguration;
use crate::error::{ConfigError, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Compiled content globs plus the purge settings that go with them.
#[derive(Debug, Clone)]
pub struct ContentScanner {
    globs: GlobSet,
    enabled: bool,
    safelist: BTreeSet<String>,
}

/// Outcome of scanning a source tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Matched files, root-relative with forward slashes, sorted.
    pub files: Vec<String>,
    /// Every candidate class name found in the matched files.
    pub candidates: BTreeSet<String>,
    /// Class names retained regardless of the scan.
    pub safelist: BTreeSet<String>,
    /// Whether unreferenced classes are dropped at all.
    pub purge_enabled: bool,
}

impl ScanResult {
    /// Whether the consuming build keeps a generated class.
    pub fn retains(&self, class: &str) -> bool {
        !self.purge_enabled || self.candidates.contains(class) || self.safelist.contains(class)
    }

    /// Filter generated classes down to the retained ones, preserving order.
    pub fn retained<'a, I>(&self, classes: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        classes.into_iter().filter(|c| self.retains(c)).collect()
    }
}

impl ContentScanner {
    /// Compile the content globs of a record.
    ///
    /// # Returns
    ///
    /// * `Ok(ContentScanner)` - All globs compiled
    /// * `Err(ConfigError::InvalidGlob)` - A glob is invalid; the field
    ///   path names it as `content[i]`
    pub fn new(config: &BuildConfiguration) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();

        for (index, pattern) in config.content_globs().iter().enumerate() {
            let normalized = normalize_pattern(pattern);
            let glob = GlobBuilder::new(&normalized)
                .literal_separator(true)
                .build()
                .map_err(|e| ConfigError::InvalidGlob {
                    field_path: format!("content[{}]", index),
                    message: format!("'{}' - {}", pattern, e),
                })?;
            builder.add(glob);
        }

        let globs = builder.build().map_err(|e| ConfigError::InvalidGlob {
            field_path: "content".to_string(),
            message: format!("failed to compile content globs: {}", e),
        })?;

        Ok(Self {
            globs,
            enabled: config.content.enabled.unwrap_or(true),
            safelist: config.content.safelist.iter().cloned().collect(),
        })
    }

    /// Whether a root-relative path falls inside the content globs.
    pub fn matches(&self, relative_path: &str) -> bool {
        self.globs.is_match(normalize_path(relative_path))
    }

    /// Walk `root` and scan every file matched by the content globs.
    ///
    /// Symlinked directories are not followed; dangling symlinks are skipped.
    pub fn scan(&self, root: &Path) -> Result<ScanResult> {
        let mut files = Vec::new();
        self.collect_files(root, root, &mut files)?;
        files.sort();

        let mut candidates = BTreeSet::new();
        for relative in &files {
            let path = root.join(relative);
            let bytes = fs::read(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                message: e.to_string(),
            })?;
            candidates.extend(extract_candidates(&String::from_utf8_lossy(&bytes)));
        }

        debug!(
            root = %root.display(),
            files = files.len(),
            candidates = candidates.len(),
            "content scan complete"
        );

        Ok(ScanResult {
            files,
            candidates,
            safelist: self.safelist.clone(),
            purge_enabled: self.enabled,
        })
    }

    fn collect_files(&self, root: &Path, dir: &Path, out: &mut Vec<String>) -> Result<()> {
        let entries = fs::read_dir(dir).map_err(|e| ConfigError::Io {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| ConfigError::Io {
                path: dir.to_path_buf(),
                message: format!("failed to read directory entry: {}", e),
            })?;

            let path = entry.path();
            let file_type = entry.file_type().map_err(|e| ConfigError::Io {
                path: path.clone(),
                message: e.to_string(),
            })?;

            if file_type.is_dir() {
                self.collect_files(root, &path, out)?;
                continue;
            }

            // Symlinks count only when they resolve to a regular file.
            let is_file = file_type.is_file()
                || (file_type.is_symlink() && fs::metadata(&path).is_ok_and(|m| m.is_file()));
            if !is_file {
                continue;
            }

            let Ok(relative) = path.strip_prefix(root) else {
                continue;
            };
            let relative = normalize_path(&relative.to_string_lossy());
            if self.globs.is_match(&relative) {
                out.push(relative);
            }
        }

        Ok(())
    }
}

/// Scan `root` with the content globs of `config`.
pub fn scan_content(config: &BuildConfiguration, root: &Path) -> Result<ScanResult> {
    ContentScanner::new(config)?.scan(root)
}

/// Normalize a file path to use forward slashes.
fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Normalize a glob: forward slashes, no leading `./`.
fn normalize_pattern(pattern: &str) -> String {
    let normalized = normalize_path(pattern);
    match normalized.strip_prefix("./") {
        Some(rest) => rest.to_string(),
        None => normalized,
    }
}
