//! Audit configuration.
//!
//! The original tool hardcoded its suffix lists and standard image names as
//! process-wide statics. Here they are an explicit value passed to the
//! extractor at construction, so tests and callers can substitute their own
//! sets.

use serde::{Deserialize, Serialize};

/// Configuration for an artwork audit.
///
/// `Default` gives the stock iOS conventions; every field can be overridden.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Suffixes for files which may reference images, e.g. ".m", ".xib"
    pub referencing_file_suffixes: Vec<String>,
    /// Suffixes for image files to detect, e.g. ".png"
    pub image_file_suffixes: Vec<String>,
    /// Directory names to skip while enumerating, e.g. "FacebookSDK.framework".
    /// Empty by default.
    pub ignored_directory_names: Vec<String>,
    /// Apple-defined standard application image filenames (launch images and
    /// icons in every required pixel dimension).
    pub standard_image_filenames: Vec<String>,
    /// Name of the Xcode project manifest. The manifest mechanically lists
    /// every asset, so a manifest-only reference is a weak "possibly unused"
    /// signal.
    pub manifest_file_name: String,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            referencing_file_suffixes: [
                ".h", ".m", ".pbxproj", ".xib", ".plist", ".html", ".strings",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            image_file_suffixes: vec![".png".to_string()],
            ignored_directory_names: Vec::new(),
            standard_image_filenames: [
                "Default.png",
                "Default@2x.png",
                "Default-568h@2x.png",
                "Default-Landscape.png",
                "Default-Landscape@2x.png",
                "Default-Portrait.png",
                "Default-Portrait@2x.png",
                "Icon.png",
                "Icon@2x.png",
                "Icon-72.png",
                "Icon-72@2x.png",
                "Icon-Small-50.png",
                "Icon-Small-50@2x.png",
                "Icon-Small.png",
                "Icon-Small@2x.png",
                "iTunesArtwork",
                "iTunesArtwork@2x",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            manifest_file_name: "project.pbxproj".to_string(),
        }
    }
}

impl AuditConfig {
    /// Override the directory names skipped during enumeration
    pub fn with_ignored_directories(mut self, names: Vec<String>) -> Self {
        self.ignored_directory_names = names;
        self
    }

    /// Override the referencing-file suffix list
    pub fn with_referencing_suffixes(mut self, suffixes: Vec<String>) -> Self {
        self.referencing_file_suffixes = suffixes;
        self
    }

    /// Override the image-file suffix list
    pub fn with_image_suffixes(mut self, suffixes: Vec<String>) -> Self {
        self.image_file_suffixes = suffixes;
        self
    }
}
