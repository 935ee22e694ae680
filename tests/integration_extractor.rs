//! Integration tests for artwork extraction.
//!
//! These tests build a small fixture project on disk and verify end-to-end
//! audit behavior: reference classification, density pairing, validation
//! flags, and the report invariants.

use artwork_audit::core::{ArtworkExtractor, AuditConfig};
use artwork_audit::error::ArtworkError;
use image::ImageFormat;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_png(root: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    image::DynamicImage::new_rgba8(width, height)
        .save_with_format(&path, ImageFormat::Png)
        .unwrap();
    path
}

fn write_text(root: &Path, name: &str, text: &str) -> PathBuf {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, text).unwrap();
    path
}

/// A project with a matched icon pair, an unreferenced background, a
/// standard image missing its retina variant, a misnamed phone-suffix
/// image, an odd-sized retina image, and a manifest listing everything.
fn fixture_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    write_png(root, "Resources/icon.png", 16, 16);
    write_png(root, "Resources/icon@2x.png", 32, 32);
    write_png(root, "Resources/bg.png", 8, 8);
    write_png(root, "Resources/splash.png", 320, 480);
    write_png(root, "Resources/banner~iphone.png", 10, 10);
    write_png(root, "Resources/hero@2x.png", 101, 200);

    write_text(
        root,
        "Classes/AppDelegate.m",
        r#"
        UIImage *icon = [UIImage imageNamed:@"icon"];
        UIImage *splash = [UIImage imageNamed:@"splash"];
        UIImage *banner = [UIImage imageNamed:@"banner~iphone"];
        UIImage *hero = [UIImage imageNamed:@"hero"];
        "#,
    );
    write_text(
        root,
        "App.xcodeproj/project.pbxproj",
        r#"
        /* icon.png */ = {isa = PBXFileReference; path = "icon.png"; };
        /* bg.png */ = {isa = PBXFileReference; path = "bg.png"; };
        /* splash.png */ = {isa = PBXFileReference; path = "splash.png"; };
        "#,
    );

    temp
}

#[test]
fn audit_classifies_references_density_and_anomalies() {
    let project = fixture_project();
    let report = ArtworkExtractor::with_defaults()
        .extract(project.path())
        .unwrap();

    assert_eq!(report.all_images.len(), 6);
    report.check_invariants().unwrap();

    let find = |name: &str| {
        report
            .all_images
            .iter()
            .find(|p| p.to_string_lossy().ends_with(name))
            .cloned()
            .unwrap_or_else(|| panic!("fixture image {name} not discovered"))
    };

    // Matched density pair, both referenced (base-name reference covers @2x)
    let icon = find("icon.png");
    let icon_2x = find("icon@2x.png");
    assert!(report.references.contains_key(&icon));
    assert!(report.references.contains_key(&icon_2x));
    assert!(!report.standard_images_missing_high_density.contains(&icon));
    assert!(!report.high_density_images_missing_standard.contains(&icon_2x));

    // bg.png is listed in the manifest only
    let bg = find("bg.png");
    assert!(report.manifest_only_referenced_images.contains(&bg));
    assert!(report.references.contains_key(&bg));

    // splash.png has no @2x sibling
    let splash = find("splash.png");
    assert!(report.standard_images_missing_high_density.contains(&splash));

    // hero@2x.png has no standard sibling and odd width
    let hero = find("hero@2x.png");
    assert!(report.high_density_images_missing_standard.contains(&hero));
    assert!(report.incorrectly_sized_high_density_images.contains(&hero));

    // banner~iphone.png carries the forbidden phone suffix
    let banner = find("banner~iphone.png");
    assert!(report.incorrect_device_suffix_images.contains(&banner));

    // No standard Apple images exist in this fixture
    assert!(report.standard_platform_images_found.is_empty());
    assert!(report
        .missing_standard_platform_image_names
        .contains("Icon.png"));
    assert!(report
        .missing_standard_platform_image_names
        .contains("iTunesArtwork"));

    assert!(report.total_image_bytes > 0);
}

#[test]
fn unreferenced_image_is_reported_when_manifest_omits_it() {
    let temp = TempDir::new().unwrap();
    write_png(temp.path(), "orphan.png", 4, 4);
    write_text(temp.path(), "main.m", r#"[UIImage imageNamed:@"something-else"];"#);

    let report = ArtworkExtractor::with_defaults().extract(temp.path()).unwrap();

    assert_eq!(report.unreferenced_images.len(), 1);
    assert!(report.references.is_empty());
    report.check_invariants().unwrap();
}

#[test]
fn standard_platform_images_are_found_when_present() {
    let temp = TempDir::new().unwrap();
    write_png(temp.path(), "Icon.png", 57, 57);
    write_png(temp.path(), "Icon@2x.png", 114, 114);

    let report = ArtworkExtractor::with_defaults().extract(temp.path()).unwrap();

    assert_eq!(report.standard_platform_images_found.len(), 2);
    assert!(!report.missing_standard_platform_image_names.contains("Icon.png"));
    assert!(report
        .missing_standard_platform_image_names
        .contains("Default.png"));
}

#[test]
fn ignored_directories_are_excluded_from_the_audit() {
    let temp = TempDir::new().unwrap();
    write_png(temp.path(), "icon.png", 4, 4);
    write_png(temp.path(), "Vendor.framework/logo.png", 4, 4);

    let config =
        AuditConfig::default().with_ignored_directories(vec!["Vendor.framework".to_string()]);
    let report = ArtworkExtractor::new(config).extract(temp.path()).unwrap();

    assert_eq!(report.all_images.len(), 1);
}

#[test]
fn nonexistent_root_is_a_precondition_error() {
    let result = ArtworkExtractor::with_defaults()
        .extract(Path::new("/nonexistent/project/root/12345"));

    assert!(matches!(result, Err(ArtworkError::Scan(_))));
}

#[test]
fn corrupt_image_aborts_the_audit_with_no_partial_report() {
    let temp = TempDir::new().unwrap();
    write_png(temp.path(), "good.png", 4, 4);
    fs::write(temp.path().join("corrupt.png"), b"not a png").unwrap();

    let result = ArtworkExtractor::with_defaults().extract(temp.path());

    assert!(matches!(result, Err(ArtworkError::Metrics(_))));
}

#[test]
fn report_metrics_cover_every_image() {
    let project = fixture_project();
    let report = ArtworkExtractor::with_defaults()
        .extract(project.path())
        .unwrap();

    for image in &report.all_images {
        let metrics = report
            .metrics
            .get(image)
            .unwrap_or_else(|| panic!("no metrics for {}", image.display()));
        assert!(metrics.width() > 0);
        assert!(metrics.height() > 0);
        assert_eq!(metrics.content_type(), "image/png");
    }
}
