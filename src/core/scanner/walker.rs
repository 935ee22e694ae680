//! Recursive enumeration using walkdir.

use super::SuffixFilter;
use crate::core::config::AuditConfig;
use crate::error::ScanError;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Enumerates image assets and referencing files under a project root.
pub struct FileEnumerator {
    image_filter: SuffixFilter,
    referencing_filter: SuffixFilter,
    ignored_directory_names: Vec<String>,
}

impl FileEnumerator {
    /// Create an enumerator from audit configuration
    pub fn new(config: &AuditConfig) -> Self {
        Self {
            image_filter: SuffixFilter::new(&config.image_file_suffixes),
            referencing_filter: SuffixFilter::new(&config.referencing_file_suffixes),
            ignored_directory_names: config.ignored_directory_names.clone(),
        }
    }

    /// All image files under `root`, path-ordered. Ignored directories are
    /// pruned from the walk entirely.
    pub fn list_images(&self, root: &Path) -> Result<BTreeSet<PathBuf>, ScanError> {
        self.walk(root, &self.image_filter, true)
    }

    /// All files that may reference images under `root`, path-ordered.
    /// Ignored directory names apply only to image detection, so the full
    /// tree is walked here.
    pub fn list_referencing_files(&self, root: &Path) -> Result<BTreeSet<PathBuf>, ScanError> {
        self.walk(root, &self.referencing_filter, false)
    }

    /// Contents of every referencing file under `root`.
    ///
    /// Files with empty contents are excluded - they cannot reference
    /// anything. Non-UTF-8 contents (UTF-16 `.strings` files are common) are
    /// converted lossily rather than failing the scan.
    pub fn read_referencing_contents(
        &self,
        root: &Path,
    ) -> Result<BTreeMap<PathBuf, String>, ScanError> {
        let mut contents = BTreeMap::new();

        for path in self.list_referencing_files(root)? {
            let bytes = fs::read(&path).map_err(|source| ScanError::ReadFile {
                path: path.clone(),
                source,
            })?;

            if bytes.is_empty() {
                continue;
            }

            contents.insert(path, String::from_utf8_lossy(&bytes).into_owned());
        }

        Ok(contents)
    }

    fn walk(
        &self,
        root: &Path,
        filter: &SuffixFilter,
        prune_ignored: bool,
    ) -> Result<BTreeSet<PathBuf>, ScanError> {
        let mut files = BTreeSet::new();

        let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
            if !prune_ignored || !entry.file_type().is_dir() {
                return true;
            }
            let Some(name) = entry.file_name().to_str() else {
                return true;
            };
            !self.ignored_directory_names.iter().any(|ignored| ignored == name)
        });

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().map(|p| p.to_path_buf()).unwrap_or_default();
                ScanError::ReadDirectory {
                    path,
                    source: e
                        .into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("walk error")),
                }
            })?;

            if entry.file_type().is_file() && filter.should_include(entry.path()) {
                files.insert(entry.into_path());
            }
        }

        Ok(files)
    }
}
