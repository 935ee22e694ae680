//! Concurrent image reference discovery.
//!
//! Maps each image to the set of text files that mention it. Matching is
//! plain substring search over pre-read file contents - the manifest's
//! object graph is never parsed - so this phase performs no I/O and is
//! embarrassingly parallel: one independent task per image, per-task results
//! merged after the pool joins.

use crate::core::config::AuditConfig;
use crate::core::naming::filename_variants;
use crate::events::{Event, EventSender, ExtractEvent, ReferenceProgress};
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Outcome of a reference scan.
///
/// Every scanned image lands in exactly one of `referenced` or
/// `unreferenced`; `manifest_only` is a subset of `referenced`.
#[derive(Debug, Default)]
pub struct ReferenceScan {
    /// Image -> files referencing it. Only images with at least one
    /// reference appear; the value sets are never empty.
    pub referenced: BTreeMap<PathBuf, BTreeSet<PathBuf>>,
    /// Images no text file mentions
    pub unreferenced: BTreeSet<PathBuf>,
    /// Images whose sole reference is the project manifest. The manifest
    /// lists every asset mechanically, so these are only weakly "in use".
    pub manifest_only: BTreeSet<PathBuf>,
}

/// Scans referencing-file contents for mentions of each image.
pub struct ReferenceScanner {
    manifest_file_name: String,
}

impl ReferenceScanner {
    /// Create a scanner from audit configuration
    pub fn new(config: &AuditConfig) -> Self {
        Self {
            manifest_file_name: config.manifest_file_name.clone(),
        }
    }

    /// Resolve references for every image against the given contents map.
    ///
    /// One task per image on the rayon pool; tasks share only the read-only
    /// contents map. A `ReferencesProcessed` event is emitted per image in
    /// completion order.
    pub fn scan(
        &self,
        images: &BTreeSet<PathBuf>,
        contents: &BTreeMap<PathBuf, String>,
        events: &EventSender,
    ) -> ReferenceScan {
        let total = images.len();
        let processed = AtomicUsize::new(0);

        let per_image: Vec<(PathBuf, BTreeSet<PathBuf>)> = images
            .par_iter()
            .map(|image| {
                let referencing_files = find_referencing_files(image, contents);

                events.send(Event::Extract(ExtractEvent::ReferencesProcessed(
                    ReferenceProgress {
                        image: image.clone(),
                        referencing_files: referencing_files.clone(),
                        processed: processed.fetch_add(1, Ordering::SeqCst) + 1,
                        total,
                    },
                )));

                (image.clone(), referencing_files)
            })
            .collect();

        let mut scan = ReferenceScan::default();

        for (image, referencing_files) in per_image {
            if referencing_files.len() == 1 {
                let only = referencing_files.first().expect("len checked above");
                let is_manifest = only
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.eq_ignore_ascii_case(&self.manifest_file_name));
                if is_manifest {
                    scan.manifest_only.insert(image.clone());
                }
            }

            if referencing_files.is_empty() {
                scan.unreferenced.insert(image);
            } else {
                scan.referenced.insert(image, referencing_files);
            }
        }

        scan
    }
}

/// Substring search for one image across all referencing files.
///
/// Two spellings count as a reference: a quoted literal (`"icon"`) as seen
/// in source code, and a markup element body (`>icon@2x.png<`) as seen in
/// nib XML.
fn find_referencing_files(
    image: &Path,
    contents: &BTreeMap<PathBuf, String>,
) -> BTreeSet<PathBuf> {
    let filename = image
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let variants = filename_variants(&filename);
    let quoted: Vec<String> = variants.iter().map(|v| format!("\"{v}\"")).collect();
    let element: Vec<String> = variants.iter().map(|v| format!(">{v}<")).collect();

    let mut referencing_files = BTreeSet::new();

    for (file, text) in contents {
        let matched = quoted
            .iter()
            .chain(element.iter())
            .any(|needle| text.contains(needle.as_str()));

        if matched {
            referencing_files.insert(file.clone());
        }
    }

    referencing_files
}
