//! # Artwork Audit
//!
//! Audits the image assets of an iOS project tree: which images nothing
//! references, which are missing standard- or high-density counterparts,
//! which carry malformed names or wrong pixel sizes - and batch-generates
//! missing retina variants by upscaling.
//!
//! ## Architecture
//! The library is split into a core engine (GUI-agnostic) and presentation
//! layers:
//! - `core` - the extraction, classification, and generation engine
//! - `events` - event-driven progress reporting (GUI-ready)
//! - `error` - error types
//! - `cli` - command-line interface

pub mod core;
pub mod error;
pub mod events;

// Re-export commonly used types at the crate root
pub use error::{ArtworkError, Result};

/// Initialize tracing for the library
///
/// This should be called by the application entry point (CLI or GUI).
pub fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default tracing subscriber");
}
