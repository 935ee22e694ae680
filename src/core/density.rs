//! Density classification and missing-counterpart detection.

use crate::core::naming::{is_high_density, to_high_density, to_standard_density};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Density partition of an image set.
///
/// `standard_density` and `high_density` partition the input; the two
/// missing-counterpart sets are subsets of their respective density sets.
#[derive(Debug, Default)]
pub struct DensityPartition {
    /// Images whose filename carries the density marker
    pub high_density: BTreeSet<PathBuf>,
    /// Images without the density marker
    pub standard_density: BTreeSet<PathBuf>,
    /// Standard images with no high-density sibling on disk
    pub standard_missing_high_density: BTreeSet<PathBuf>,
    /// High-density images with no standard sibling on disk
    pub high_missing_standard_density: BTreeSet<PathBuf>,
}

/// Partition images by density and detect unmatched pairs.
///
/// The expected counterpart of an image is the density-transformed filename
/// in the same directory. The density test is an unanchored substring check
/// on the filename (see `naming::is_high_density`).
pub fn classify(all_images: &BTreeSet<PathBuf>) -> DensityPartition {
    let mut partition = DensityPartition::default();

    for image in all_images {
        let filename = filename_of(image);

        if is_high_density(&filename) {
            partition.high_density.insert(image.clone());

            let standard = image.with_file_name(to_standard_density(&filename));
            if !all_images.contains(&standard) {
                partition.high_missing_standard_density.insert(image.clone());
            }
        } else {
            partition.standard_density.insert(image.clone());

            let high = image.with_file_name(to_high_density(&filename));
            if !all_images.contains(&high) {
                partition.standard_missing_high_density.insert(image.clone());
            }
        }
    }

    partition
}

fn filename_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(names: &[&str]) -> BTreeSet<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn matched_pair_has_no_missing_flags() {
        let all = images(&["/p/icon.png", "/p/icon@2x.png"]);
        let partition = classify(&all);

        assert!(partition.standard_density.contains(&PathBuf::from("/p/icon.png")));
        assert!(partition.high_density.contains(&PathBuf::from("/p/icon@2x.png")));
        assert!(partition.standard_missing_high_density.is_empty());
        assert!(partition.high_missing_standard_density.is_empty());
    }

    #[test]
    fn standard_without_retina_is_flagged() {
        let all = images(&["/p/splash.png"]);
        let partition = classify(&all);

        assert!(partition
            .standard_missing_high_density
            .contains(&PathBuf::from("/p/splash.png")));
    }

    #[test]
    fn retina_without_standard_is_flagged() {
        let all = images(&["/p/hero@2x.png"]);
        let partition = classify(&all);

        assert!(partition
            .high_missing_standard_density
            .contains(&PathBuf::from("/p/hero@2x.png")));
    }

    #[test]
    fn device_suffixed_pair_matches() {
        let all = images(&["/p/bg~ipad.png", "/p/bg@2x~ipad.png"]);
        let partition = classify(&all);

        assert!(partition.standard_missing_high_density.is_empty());
        assert!(partition.high_missing_standard_density.is_empty());
    }

    #[test]
    fn counterparts_in_other_directories_do_not_match() {
        let all = images(&["/p/a/icon.png", "/p/b/icon@2x.png"]);
        let partition = classify(&all);

        assert_eq!(partition.standard_missing_high_density.len(), 1);
        assert_eq!(partition.high_missing_standard_density.len(), 1);
    }

    #[test]
    fn partition_is_exhaustive_and_disjoint() {
        let all = images(&["/p/a.png", "/p/a@2x.png", "/p/b.png", "/p/weird@2xname.png"]);
        let partition = classify(&all);

        let union: BTreeSet<_> = partition
            .standard_density
            .union(&partition.high_density)
            .cloned()
            .collect();
        assert_eq!(union, all);
        assert!(partition
            .standard_density
            .intersection(&partition.high_density)
            .next()
            .is_none());
    }

    #[test]
    fn missing_sets_are_subsets_of_their_density_sets() {
        let all = images(&["/p/a.png", "/p/b@2x.png"]);
        let partition = classify(&all);

        assert!(partition
            .standard_missing_high_density
            .is_subset(&partition.standard_density));
        assert!(partition
            .high_missing_standard_density
            .is_subset(&partition.high_density));
    }

    #[test]
    fn coincidental_marker_substring_classifies_as_high_density() {
        // Documented heuristic limitation: the test is unanchored
        let all = images(&["/p/promo@2xl.png"]);
        let partition = classify(&all);

        assert!(partition.high_density.contains(&PathBuf::from("/p/promo@2xl.png")));
    }
}
