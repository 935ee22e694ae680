//! Validation passes over classified artwork.
//!
//! Each pass is independent, reads only already-computed state, and may run
//! in any order.

use crate::core::metrics::ImageMetrics;
use crate::core::naming::PHONE_SUFFIX;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// Images whose filename contains the phone device suffix.
///
/// Phone is the implicit default, so the `~iphone` token should never
/// appear; only `~ipad` is legitimate. The check is unanchored containment -
/// `graphiphone.png` false-positives - preserved because tightening it
/// changes observable classification results.
pub fn incorrect_device_suffix(all_images: &BTreeSet<PathBuf>) -> BTreeSet<PathBuf> {
    all_images
        .iter()
        .filter(|image| {
            image
                .file_name()
                .map(|n| n.to_string_lossy().contains(PHONE_SUFFIX))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// High-density images whose dimensions are not both even.
///
/// A retina asset must be an exact 2x multiple of its standard counterpart,
/// so odd widths or heights cannot downscale cleanly. Images missing from
/// the metrics map are skipped.
pub fn incorrectly_sized_high_density(
    high_density: &BTreeSet<PathBuf>,
    metrics: &BTreeMap<PathBuf, ImageMetrics>,
) -> BTreeSet<PathBuf> {
    high_density
        .iter()
        .filter(|image| {
            metrics
                .get(*image)
                .map(|m| m.width() % 2 != 0 || m.height() % 2 != 0)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Match discovered images against the required standard platform filenames.
///
/// Returns the image files found plus the required names absent entirely.
pub fn standard_platform_images(
    all_images: &BTreeSet<PathBuf>,
    standard_filenames: &[String],
) -> (BTreeSet<PathBuf>, BTreeSet<String>) {
    let mut found = BTreeSet::new();
    let mut missing = BTreeSet::new();

    for standard_name in standard_filenames {
        let mut found_any = false;

        for image in all_images {
            let matches = image
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n == standard_name);
            if matches {
                found.insert(image.clone());
                found_any = true;
            }
        }

        if !found_any {
            missing.insert(standard_name.clone());
        }
    }

    (found, missing)
}
