//! Batch retina image generation.
//!
//! Upscales standard-density source images to exactly double their pixel
//! dimensions and writes them under an output directory, preserving each
//! source's path relative to the project root. One task per image on the
//! rayon pool; the first failure aborts the whole batch - a partially
//! generated asset set is worse than none for a build pipeline.

use crate::core::metrics::extract_metrics;
use crate::core::naming::{is_high_density, to_high_density};
use crate::error::{ArtworkError, GenerateError, Result, ScanError};
use crate::events::{null_sender, Event, EventSender, GenerateEvent, GenerateProgress};
use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::ImageFormat;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info};

/// Generates high-density variants from standard-density sources.
pub struct RetinaGenerator;

impl RetinaGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate retina images without progress reporting
    pub fn generate(
        &self,
        project_root: &Path,
        output_directory: &Path,
        source_images: &BTreeSet<PathBuf>,
    ) -> Result<BTreeSet<PathBuf>> {
        self.generate_with_events(project_root, output_directory, source_images, &null_sender())
    }

    /// Generate retina images, emitting progress events.
    ///
    /// Preconditions are checked before any task is scheduled or any file is
    /// written: the project root must be an existing directory, the output
    /// path must not be a regular file, every source must live under the
    /// project root, and no source may already carry the density marker -
    /// upscaling an image that is already high-density would silently
    /// double-scale it.
    ///
    /// Returns the generated file paths, path-ordered.
    pub fn generate_with_events(
        &self,
        project_root: &Path,
        output_directory: &Path,
        source_images: &BTreeSet<PathBuf>,
        events: &EventSender,
    ) -> Result<BTreeSet<PathBuf>> {
        check_preconditions(project_root, output_directory, source_images)?;

        let total = source_images.len();
        events.send(Event::Generate(GenerateEvent::Started {
            total_images: total,
        }));

        let processed = AtomicUsize::new(0);

        let generated: Vec<PathBuf> = source_images
            .par_iter()
            .map(|source| {
                let output = generate_one(project_root, output_directory, source)?;
                debug!(source = %source.display(), output = %output.display(), "generated retina image");

                events.send(Event::Generate(GenerateEvent::ImageGenerated(
                    GenerateProgress {
                        source: source.clone(),
                        generated: output.clone(),
                        processed: processed.fetch_add(1, Ordering::SeqCst) + 1,
                        total,
                    },
                )));

                Ok(output)
            })
            .collect::<Result<Vec<_>>>()?;

        info!(generated = generated.len(), "retina generation complete");
        events.send(Event::Generate(GenerateEvent::Completed {
            total_generated: generated.len(),
        }));

        Ok(generated.into_iter().collect())
    }
}

impl Default for RetinaGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn check_preconditions(
    project_root: &Path,
    output_directory: &Path,
    source_images: &BTreeSet<PathBuf>,
) -> Result<()> {
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
    if output_directory.exists() && !output_directory.is_dir() {
        return Err(GenerateError::OutputNotADirectory {
            path: output_directory.to_path_buf(),
        }
        .into());
    }

    for source in source_images {
        let filename = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if is_high_density(&filename) {
            return Err(GenerateError::AlreadyHighDensity {
                path: source.clone(),
            }
            .into());
        }

        if source.strip_prefix(project_root).is_err() {
            return Err(GenerateError::OutsideProjectRoot {
                path: source.clone(),
            }
            .into());
        }
    }

    Ok(())
}

/// Read, upscale, and write a single image. Runs inside a pool task.
fn generate_one(
    project_root: &Path,
    output_directory: &Path,
    source: &Path,
) -> std::result::Result<PathBuf, ArtworkError> {
    let bytes = fs::read(source).map_err(|e| GenerateError::ReadSource {
        path: source.to_path_buf(),
        source: e,
    })?;

    let metrics = extract_metrics(source, &bytes)?;
    let retina_width = metrics.width() * 2;
    let retina_height = metrics.height() * 2;

    let retina_bytes = upscale_png(source, &bytes, retina_width, retina_height)?;

    let relative = source
        .strip_prefix(project_root)
        .expect("checked in preconditions");
    let filename = relative
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let output = match relative.parent() {
        Some(parent) => output_directory.join(parent).join(to_high_density(&filename)),
        None => output_directory.join(to_high_density(&filename)),
    };

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent).map_err(|e| GenerateError::WriteImage {
            path: output.clone(),
            source: e,
        })?;
    }
    fs::write(&output, retina_bytes).map_err(|e| GenerateError::WriteImage {
        path: output.clone(),
        source: e,
    })?;

    Ok(output)
}

/// Upscale PNG bytes to the exact target size using SIMD convolution.
fn upscale_png(
    path: &Path,
    bytes: &[u8],
    target_width: u32,
    target_height: u32,
) -> std::result::Result<Vec<u8>, GenerateError> {
    let scale_error = |reason: String| GenerateError::Scale {
        path: path.to_path_buf(),
        reason,
    };

    let decoded = image::load_from_memory(bytes).map_err(|e| scale_error(e.to_string()))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = (rgba.width(), rgba.height());

    let src_image = Image::from_vec_u8(width, height, rgba.into_raw(), PixelType::U8x4)
        .map_err(|e| scale_error(e.to_string()))?;
    let mut dst_image = Image::new(target_width, target_height, PixelType::U8x4);

    let options = ResizeOptions::new()
        .resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));

    Resizer::new()
        .resize(&src_image, &mut dst_image, &options)
        .map_err(|e| scale_error(e.to_string()))?;

    let result = image::RgbaImage::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| scale_error("resized buffer has unexpected length".to_string()))?;

    let mut encoded = Vec::new();
    image::DynamicImage::ImageRgba8(result)
        .write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)
        .map_err(|e| scale_error(e.to_string()))?;

    Ok(encoded)
}
