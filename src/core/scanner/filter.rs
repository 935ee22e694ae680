//! File filtering for the enumerator.

use std::path::Path;

/// Includes a file when its name ends with any of the configured suffixes.
#[derive(Debug, Clone)]
pub struct SuffixFilter {
    suffixes: Vec<String>,
}

impl SuffixFilter {
    /// Create a filter from a suffix list, e.g. `[".png"]`
    pub fn new(suffixes: &[String]) -> Self {
        Self {
            suffixes: suffixes.to_vec(),
        }
    }

    /// Check if a file should be included
    pub fn should_include(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };

        self.suffixes.iter().any(|suffix| name.ends_with(suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(suffixes: &[&str]) -> SuffixFilter {
        SuffixFilter::new(&suffixes.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn filter_includes_matching_suffix() {
        let filter = filter(&[".png"]);
        assert!(filter.should_include(Path::new("/project/icon.png")));
        assert!(filter.should_include(Path::new("/project/icon@2x.png")));
    }

    #[test]
    fn filter_excludes_other_suffixes() {
        let filter = filter(&[".png"]);
        assert!(!filter.should_include(Path::new("/project/readme.md")));
        assert!(!filter.should_include(Path::new("/project/icon.jpg")));
    }

    #[test]
    fn filter_matches_compound_suffixes() {
        let filter = filter(&[".pbxproj", ".strings"]);
        assert!(filter.should_include(Path::new("/p/App.xcodeproj/project.pbxproj")));
        assert!(filter.should_include(Path::new("/p/en.lproj/Localizable.strings")));
        assert!(!filter.should_include(Path::new("/p/main.m")));
    }

    #[test]
    fn filter_handles_no_extension() {
        let filter = filter(&[".png"]);
        assert!(!filter.should_include(Path::new("/project/iTunesArtwork")));
    }
}
