//! The artwork report aggregate.

use crate::core::metrics::ImageMetrics;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// Everything an audit learned about a project's artwork.
///
/// Built once per extraction and handed to the caller as an immutable
/// snapshot. All containers are keyed or ordered by path, so rendering the
/// report is deterministic across runs.
///
/// Structural invariants, checkable with [`ArtworkReport::check_invariants`]:
/// every image appears in exactly one of `unreferenced_images` /
/// `references`; `standard_density_images` and `high_density_images`
/// partition `all_images`; the missing-counterpart sets are subsets of
/// their density sets.
#[derive(Debug, Default, Serialize)]
pub struct ArtworkReport {
    /// Every image discovered in the project
    pub all_images: BTreeSet<PathBuf>,
    /// Image -> files referencing it (non-empty sets only)
    pub references: BTreeMap<PathBuf, BTreeSet<PathBuf>>,
    /// Image -> pixel/byte metrics
    pub metrics: BTreeMap<PathBuf, ImageMetrics>,
    /// Images no text file mentions
    pub unreferenced_images: BTreeSet<PathBuf>,
    /// Images referenced only by the project manifest
    pub manifest_only_referenced_images: BTreeSet<PathBuf>,
    /// Images carrying the density marker
    pub high_density_images: BTreeSet<PathBuf>,
    /// Images without the density marker
    pub standard_density_images: BTreeSet<PathBuf>,
    /// Standard images with no high-density sibling
    pub standard_images_missing_high_density: BTreeSet<PathBuf>,
    /// High-density images with no standard sibling
    pub high_density_images_missing_standard: BTreeSet<PathBuf>,
    /// Images whose filename contains the phone device suffix
    pub incorrect_device_suffix_images: BTreeSet<PathBuf>,
    /// High-density images with odd pixel dimensions
    pub incorrectly_sized_high_density_images: BTreeSet<PathBuf>,
    /// Standard platform images present in the project
    pub standard_platform_images_found: BTreeSet<PathBuf>,
    /// Required standard platform filenames absent from the project
    pub missing_standard_platform_image_names: BTreeSet<String>,
    /// Total byte size of all images
    pub total_image_bytes: u64,
}

impl ArtworkReport {
    /// Verify the report's structural invariants. Used by tests; a violation
    /// is a programming error in the extractor, never expected at runtime.
    pub fn check_invariants(&self) -> std::result::Result<(), String> {
        for image in &self.all_images {
            let referenced = self.references.contains_key(image);
            let unreferenced = self.unreferenced_images.contains(image);
            if referenced == unreferenced {
                return Err(format!(
                    "{} must be in exactly one of references/unreferenced",
                    image.display()
                ));
            }
        }

        if self.references.values().any(|files| files.is_empty()) {
            return Err("references must never hold an empty file set".to_string());
        }

        let density_union: BTreeSet<_> = self
            .standard_density_images
            .union(&self.high_density_images)
            .cloned()
            .collect();
        if density_union != self.all_images {
            return Err("density sets must partition all images".to_string());
        }
        if self
            .standard_density_images
            .intersection(&self.high_density_images)
            .next()
            .is_some()
        {
            return Err("density sets must be disjoint".to_string());
        }

        if !self
            .standard_images_missing_high_density
            .is_subset(&self.standard_density_images)
        {
            return Err("missing-high set must be a subset of standard images".to_string());
        }
        if !self
            .high_density_images_missing_standard
            .is_subset(&self.high_density_images)
        {
            return Err("missing-standard set must be a subset of high-density images".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_satisfies_invariants() {
        let report = ArtworkReport::default();
        assert!(report.check_invariants().is_ok());
    }

    #[test]
    fn image_in_both_reference_buckets_violates_invariants() {
        let image = PathBuf::from("/p/icon.png");
        let mut report = ArtworkReport::default();
        report.all_images.insert(image.clone());
        report.standard_density_images.insert(image.clone());
        report.unreferenced_images.insert(image.clone());
        report
            .references
            .insert(image, [PathBuf::from("/p/main.m")].into_iter().collect());

        assert!(report.check_invariants().is_err());
    }

    #[test]
    fn density_gap_violates_invariants() {
        let image = PathBuf::from("/p/icon.png");
        let mut report = ArtworkReport::default();
        report.all_images.insert(image.clone());
        report.unreferenced_images.insert(image);
        // image classified under neither density set

        assert!(report.check_invariants().is_err());
    }

    #[test]
    fn report_serializes_to_json() {
        let mut report = ArtworkReport::default();
        report.all_images.insert(PathBuf::from("/p/icon.png"));
        report.total_image_bytes = 42;

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("icon.png"));
        assert!(json.contains("42"));
    }
}
