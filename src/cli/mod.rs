//! # CLI Module
//!
//! Command-line interface for the artwork auditor.
//!
//! ## Usage
//! ```bash
//! # Audit a project tree
//! artwork-audit audit ~/Projects/MyApp
//!
//! # Skip vendored directories, JSON output
//! artwork-audit audit ~/Projects/MyApp --ignore-dir FacebookSDK.framework --output json
//!
//! # Generate missing retina images into ./retina-out
//! artwork-audit retina ~/Projects/MyApp --out ./retina-out
//! ```

use artwork_audit::core::{ArtworkExtractor, ArtworkReport, AuditConfig, RetinaGenerator};
use artwork_audit::error::Result;
use artwork_audit::events::{Event, EventChannel, ExtractEvent, GenerateEvent};
use clap::{Parser, Subcommand, ValueEnum};
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::thread;

/// Artwork Audit - catch unreferenced and malformed artwork before shipping
#[derive(Parser, Debug)]
#[command(name = "artwork-audit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Audit a project tree's image assets
    Audit {
        /// Project root directory
        root: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        output: OutputFormat,

        /// Directory names to skip while enumerating images (repeatable)
        #[arg(long = "ignore-dir")]
        ignore_dirs: Vec<String>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate missing high-density images by 2x upscaling
    Retina {
        /// Project root directory
        root: PathBuf,

        /// Output directory for generated images
        #[arg(long)]
        out: PathBuf,

        /// Standard-density source images; when omitted, every standard
        /// image missing a retina counterpart is generated
        images: Vec<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Pretty,
    /// JSON output for scripting
    Json,
    /// Minimal output (unreferenced image paths only)
    Minimal,
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Audit {
            root,
            output,
            ignore_dirs,
            verbose,
        } => run_audit(root, output, ignore_dirs, verbose),
        Commands::Retina { root, out, images } => run_retina(root, out, images),
    }
}

fn run_audit(
    root: PathBuf,
    output: OutputFormat,
    ignore_dirs: Vec<String>,
    verbose: bool,
) -> Result<()> {
    let term = Term::stderr();

    if matches!(output, OutputFormat::Pretty) {
        term.write_line(&format!(
            "{} {}",
            style("Artwork Audit").bold().cyan(),
            style("v0.1.0").dim()
        ))
        .ok();
        term.write_line("").ok();
    }

    let config = AuditConfig::default().with_ignored_directories(ignore_dirs);
    let extractor = ArtworkExtractor::new(config);

    let (sender, receiver) = EventChannel::new();

    let progress = if matches!(output, OutputFormat::Pretty) {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("█▓░"),
        );
        Some(pb)
    } else {
        None
    };

    let progress_clone = progress.clone();

    // Handle events in a separate thread
    let event_thread = thread::spawn(move || {
        for event in receiver.iter() {
            match event {
                Event::Extract(ExtractEvent::PhaseChanged { phase }) => {
                    if let Some(ref pb) = progress_clone {
                        pb.set_message(format!("{}", phase));
                    }
                }
                Event::Extract(ExtractEvent::ReferencesProcessed(p)) => {
                    if let Some(ref pb) = progress_clone {
                        pb.set_length(p.total as u64);
                        pb.set_position(p.processed as u64);
                    }
                }
                Event::Extract(ExtractEvent::Completed { .. }) => {
                    if let Some(ref pb) = progress_clone {
                        pb.finish_and_clear();
                    }
                }
                _ => {}
            }
        }
    });

    let report = extractor.extract_with_events(&root, &sender)?;

    drop(sender);
    event_thread.join().ok();

    match output {
        OutputFormat::Pretty => print_pretty_report(&term, &report, verbose),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report).unwrap());
        }
        OutputFormat::Minimal => {
            for image in &report.unreferenced_images {
                println!("{}", image.display());
            }
        }
    }

    Ok(())
}

fn run_retina(root: PathBuf, out: PathBuf, images: Vec<PathBuf>) -> Result<()> {
    let term = Term::stderr();

    // With no explicit sources, audit first and fill every gap
    let sources: BTreeSet<PathBuf> = if images.is_empty() {
        term.write_line(&format!(
            "{}",
            style("No images given - auditing for missing retina variants").dim()
        ))
        .ok();
        let report = ArtworkExtractor::with_defaults().extract(&root)?;
        report.standard_images_missing_high_density
    } else {
        images.into_iter().collect()
    };

    if sources.is_empty() {
        term.write_line(&format!(
            "{} Nothing to generate - no standard images are missing retina variants",
            style("✓").green().bold()
        ))
        .ok();
        return Ok(());
    }

    let (sender, receiver) = EventChannel::new();

    let pb = ProgressBar::new(sources.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("█▓░"),
    );
    let pb_clone = pb.clone();

    let event_thread = thread::spawn(move || {
        for event in receiver.iter() {
            if let Event::Generate(GenerateEvent::ImageGenerated(p)) = event {
                pb_clone.set_position(p.processed as u64);
                pb_clone.set_message(
                    p.generated
                        .file_name()
                        .unwrap_or_default()
                        .to_string_lossy()
                        .into_owned(),
                );
            }
        }
    });

    let generated = RetinaGenerator::new().generate_with_events(&root, &out, &sources, &sender)?;

    drop(sender);
    event_thread.join().ok();
    pb.finish_and_clear();

    term.write_line(&format!(
        "{} Generated {} retina image{}",
        style("✓").green().bold(),
        style(generated.len()).cyan(),
        if generated.len() == 1 { "" } else { "s" }
    ))
    .ok();

    Ok(())
}

fn print_pretty_report(term: &Term, report: &ArtworkReport, verbose: bool) {
    term.write_line("").ok();
    term.write_line(&format!("{} Audit Complete", style("✓").green().bold()))
        .ok();
    term.write_line("").ok();

    term.write_line(&format!(
        "  {} images ({})",
        style(report.all_images.len()).cyan(),
        format_bytes(report.total_image_bytes)
    ))
    .ok();
    term.write_line(&format!(
        "  {} standard-density, {} high-density",
        style(report.standard_density_images.len()).cyan(),
        style(report.high_density_images.len()).cyan()
    ))
    .ok();
    term.write_line("").ok();

    print_image_section(
        term,
        "Unreferenced images",
        &report.unreferenced_images,
        verbose,
    );
    print_image_section(
        term,
        "Referenced only by the project manifest",
        &report.manifest_only_referenced_images,
        verbose,
    );
    print_image_section(
        term,
        "Standard images missing a retina variant",
        &report.standard_images_missing_high_density,
        verbose,
    );
    print_image_section(
        term,
        "Retina images missing a standard variant",
        &report.high_density_images_missing_standard,
        verbose,
    );
    print_image_section(
        term,
        "Images with incorrect ~iphone suffix",
        &report.incorrect_device_suffix_images,
        verbose,
    );
    print_image_section(
        term,
        "Incorrectly sized retina images",
        &report.incorrectly_sized_high_density_images,
        verbose,
    );

    if !report.missing_standard_platform_image_names.is_empty() {
        term.write_line(&format!(
            "  {} {}",
            style(report.missing_standard_platform_image_names.len()).yellow(),
            style("missing standard platform images").bold()
        ))
        .ok();
        if verbose {
            for name in &report.missing_standard_platform_image_names {
                term.write_line(&format!("    {} {}", style("○").dim(), name))
                    .ok();
            }
        }
        term.write_line("").ok();
    }

    let clean = report.unreferenced_images.is_empty()
        && report.standard_images_missing_high_density.is_empty()
        && report.incorrect_device_suffix_images.is_empty()
        && report.incorrectly_sized_high_density_images.is_empty();
    if clean {
        term.write_line(&format!("  {} No artwork problems found!", style("🎉").green()))
            .ok();
    }
}

fn print_image_section(term: &Term, title: &str, images: &BTreeSet<PathBuf>, verbose: bool) {
    if images.is_empty() {
        return;
    }

    term.write_line(&format!(
        "  {} {}",
        style(images.len()).yellow(),
        style(title).bold()
    ))
    .ok();

    if verbose {
        for image in images {
            term.write_line(&format!("    {} {}", style("○").dim(), display_path(image)))
                .ok();
        }
    }
    term.write_line("").ok();
}

fn display_path(path: &Path) -> String {
    let home = dirs::home_dir().unwrap_or_default();
    if path.starts_with(&home) {
        format!("~/{}", path.strip_prefix(&home).unwrap().display())
    } else {
        path.display().to_string()
    }
}

fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
