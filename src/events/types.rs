//! Event type definitions for progress reporting.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// All events emitted by the artwork auditor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    /// Artwork extraction events
    Extract(ExtractEvent),
    /// Retina generation events
    Generate(GenerateEvent),
}

/// Events during artwork extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ExtractEvent {
    /// Extraction has started
    Started { root: PathBuf },
    /// Moving to a new phase
    PhaseChanged { phase: ExtractPhase },
    /// An image file was discovered
    ImageFound { path: PathBuf },
    /// Reference discovery finished for one image.
    ///
    /// Emitted in completion order, not input order - the reference scan
    /// runs one task per image on a worker pool.
    ReferencesProcessed(ReferenceProgress),
    /// Extraction completed
    Completed { total_images: usize },
}

/// Phases of an extraction run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtractPhase {
    Enumerating,
    Metrics,
    References,
    Classifying,
    Validating,
}

/// Per-image progress for the reference scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceProgress {
    /// The image whose references were just resolved
    pub image: PathBuf,
    /// Files found to reference the image (may be empty)
    pub referencing_files: BTreeSet<PathBuf>,
    /// Number of images processed so far
    pub processed: usize,
    /// Total number of images to process
    pub total: usize,
}

/// Events during retina image generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GenerateEvent {
    /// Generation has started
    Started { total_images: usize },
    /// One retina image was generated.
    ///
    /// Emitted in completion order, not input order.
    ImageGenerated(GenerateProgress),
    /// Generation completed
    Completed { total_generated: usize },
}

/// Per-image progress for retina generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateProgress {
    /// The standard-density source image
    pub source: PathBuf,
    /// The generated high-density image
    pub generated: PathBuf,
    /// Number of images generated so far
    pub processed: usize,
    /// Total number of images to generate
    pub total: usize,
}

impl std::fmt::Display for ExtractPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractPhase::Enumerating => write!(f, "Enumerating"),
            ExtractPhase::Metrics => write!(f, "Reading metrics"),
            ExtractPhase::References => write!(f, "Finding references"),
            ExtractPhase::Classifying => write!(f, "Classifying"),
            ExtractPhase::Validating => write!(f, "Validating"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_serializable() {
        let event = Event::Extract(ExtractEvent::ReferencesProcessed(ReferenceProgress {
            image: PathBuf::from("/project/icon.png"),
            referencing_files: [PathBuf::from("/project/AppDelegate.m")].into_iter().collect(),
            processed: 3,
            total: 10,
        }));

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: Event = serde_json::from_str(&json).unwrap();

        match deserialized {
            Event::Extract(ExtractEvent::ReferencesProcessed(p)) => {
                assert_eq!(p.processed, 3);
                assert_eq!(p.referencing_files.len(), 1);
            }
            _ => panic!("Wrong event type"),
        }
    }

    #[test]
    fn generate_progress_is_serializable() {
        let progress = GenerateProgress {
            source: PathBuf::from("/project/bg.png"),
            generated: PathBuf::from("/out/bg@2x.png"),
            processed: 1,
            total: 4,
        };

        let json = serde_json::to_string(&progress).unwrap();
        assert!(json.contains("bg@2x.png"));
    }
}
