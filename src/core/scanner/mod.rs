//! # Scanner Module
//!
//! Enumerates the files an audit works over: image assets and the text
//! files that may reference them.
//!
//! Filtering is suffix-based rather than extension-based because some
//! standard assets (`iTunesArtwork`) have no extension, while referencing
//! files like `project.pbxproj` are matched on the full suffix.

mod filter;
mod walker;

pub use filter::SuffixFilter;
pub use walker::FileEnumerator;
