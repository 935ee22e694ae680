//! Artwork extraction orchestrator.
//!
//! Sequences the audit phases over one project tree: enumerate images,
//! collect metrics, discover references (parallel), classify density, run
//! validation passes, assemble the report. Each phase fully completes
//! before the next begins; the first failure aborts the run with its cause
//! attached - no partial report is ever returned.

use crate::core::config::AuditConfig;
use crate::core::density;
use crate::core::metrics::{extract_metrics, ImageMetrics};
use crate::core::references::ReferenceScanner;
use crate::core::report::ArtworkReport;
use crate::core::scanner::FileEnumerator;
use crate::core::validation;
use crate::error::{Result, ScanError};
use crate::events::{null_sender, Event, EventSender, ExtractEvent, ExtractPhase};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Audits the artwork of a single project tree.
pub struct ArtworkExtractor {
    config: AuditConfig,
}

impl ArtworkExtractor {
    /// Create an extractor with the given configuration
    pub fn new(config: AuditConfig) -> Self {
        Self { config }
    }

    /// Create an extractor with stock iOS conventions
    pub fn with_defaults() -> Self {
        Self::new(AuditConfig::default())
    }

    /// Run a full audit without progress reporting
    pub fn extract(&self, project_root: &Path) -> Result<ArtworkReport> {
        self.extract_with_events(project_root, &null_sender())
    }

    /// Run a full audit, emitting progress events.
    ///
    /// Fails before any filesystem traversal if `project_root` does not
    /// exist or is not a directory.
    pub fn extract_with_events(
        &self,
        project_root: &Path,
        events: &EventSender,
    ) -> Result<ArtworkReport> {
        let root = check_project_root(project_root)?;
        events.send(Event::Extract(ExtractEvent::Started { root: root.clone() }));

        let enumerator = FileEnumerator::new(&self.config);

        events.send(Event::Extract(ExtractEvent::PhaseChanged {
            phase: ExtractPhase::Enumerating,
        }));
        let all_images = enumerator.list_images(&root)?;
        debug!(images = all_images.len(), "enumerated image files");
        for image in &all_images {
            events.send(Event::Extract(ExtractEvent::ImageFound {
                path: image.clone(),
            }));
        }

        events.send(Event::Extract(ExtractEvent::PhaseChanged {
            phase: ExtractPhase::Metrics,
        }));
        let (metrics, total_image_bytes) = self.collect_metrics(&all_images)?;

        events.send(Event::Extract(ExtractEvent::PhaseChanged {
            phase: ExtractPhase::References,
        }));
        let contents = enumerator.read_referencing_contents(&root)?;
        debug!(files = contents.len(), "read referencing file contents");
        let reference_scan =
            ReferenceScanner::new(&self.config).scan(&all_images, &contents, events);

        events.send(Event::Extract(ExtractEvent::PhaseChanged {
            phase: ExtractPhase::Classifying,
        }));
        let partition = density::classify(&all_images);

        events.send(Event::Extract(ExtractEvent::PhaseChanged {
            phase: ExtractPhase::Validating,
        }));
        let incorrect_device_suffix_images = validation::incorrect_device_suffix(&all_images);
        let incorrectly_sized_high_density_images =
            validation::incorrectly_sized_high_density(&partition.high_density, &metrics);
        let (standard_platform_images_found, missing_standard_platform_image_names) =
            validation::standard_platform_images(&all_images, &self.config.standard_image_filenames);

        let total_images = all_images.len();
        let report = ArtworkReport {
            all_images,
            references: reference_scan.referenced,
            metrics,
            unreferenced_images: reference_scan.unreferenced,
            manifest_only_referenced_images: reference_scan.manifest_only,
            high_density_images: partition.high_density,
            standard_density_images: partition.standard_density,
            standard_images_missing_high_density: partition.standard_missing_high_density,
            high_density_images_missing_standard: partition.high_missing_standard_density,
            incorrect_device_suffix_images,
            incorrectly_sized_high_density_images,
            standard_platform_images_found,
            missing_standard_platform_image_names,
            total_image_bytes,
        };

        info!(
            images = total_images,
            unreferenced = report.unreferenced_images.len(),
            missing_retina = report.standard_images_missing_high_density.len(),
            "artwork extraction complete"
        );
        events.send(Event::Extract(ExtractEvent::Completed { total_images }));

        Ok(report)
    }

    /// Read every image and extract its metrics, accumulating total size.
    fn collect_metrics(
        &self,
        all_images: &BTreeSet<PathBuf>,
    ) -> Result<(BTreeMap<PathBuf, ImageMetrics>, u64)> {
        let mut metrics = BTreeMap::new();
        let mut total_bytes = 0u64;

        for image in all_images {
            let bytes = fs::read(image).map_err(|source| ScanError::ReadFile {
                path: image.clone(),
                source,
            })?;
            total_bytes += bytes.len() as u64;
            metrics.insert(image.clone(), extract_metrics(image, &bytes)?);
        }

        Ok((metrics, total_bytes))
    }
}

/// Validate the project root precondition before any work starts.
fn check_project_root(project_root: &Path) -> Result<PathBuf> {
    if !project_root.exists() {
        return Err(ScanError::ProjectRootNotFound {
            path: project_root.to_path_buf(),
        }
        .into());
    }
    if !project_root.is_dir() {
        return Err(ScanError::NotADirectory {
            path: project_root.to_path_buf(),
        }
        .into());
    }

    // Canonical root so every reported path is absolute
    fs::canonicalize(project_root)
        .map_err(|source| {
            ScanError::ReadDirectory {
                path: project_root.to_path_buf(),
                source,
            }
            .into()
        })
}
