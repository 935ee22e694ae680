//! Image filename conventions: density markers, device suffixes, and the
//! textual variants under which source files may reference an image.
//!
//! iOS resolves `background` to `background.png`, `background@2x.png`,
//! `background~ipad.png` and friends at runtime, so a source file rarely
//! spells out the on-disk name. Reference detection therefore has to expand
//! each on-disk name into every plausible spelling.

use std::collections::BTreeSet;

/// Marker distinguishing a high-density ("retina") asset, e.g. `icon@2x.png`
pub const DENSITY_MARKER: &str = "@2x";

/// Device suffix for tablet-specific assets
pub const TABLET_SUFFIX: &str = "~ipad";

/// Device suffix for phone-specific assets. The convention mandates omitting
/// it (phone is the implicit default), so its presence is flagged by
/// validation.
pub const PHONE_SUFFIX: &str = "~iphone";

/// Expand an image filename into every textual form a reference could use.
///
/// Strips known suffix tokens in fixed order - extension, density marker,
/// tablet suffix, phone suffix - recording the name after each strip, then
/// re-expands the fully stripped base with every device/density combination.
/// Over-generation is deliberate: a missed spelling would produce a false
/// "unreferenced" flag, which is worse than a few wasted substring tests.
///
/// The result always contains the input itself and is deterministic.
/// A filename without an extension is treated as already being its own base.
pub fn filename_variants(image_filename: &str) -> BTreeSet<String> {
    let mut variants = BTreeSet::new();
    variants.insert(image_filename.to_string());

    let mut name = image_filename;

    if let Some(dot) = name.rfind('.') {
        name = &name[..dot];
        variants.insert(name.to_string());
    }

    if let Some(index) = name.rfind(DENSITY_MARKER) {
        name = &name[..index];
        variants.insert(name.to_string());
    }

    if let Some(index) = name.rfind(TABLET_SUFFIX) {
        name = &name[..index];
        variants.insert(name.to_string());
    }

    if let Some(index) = name.rfind(PHONE_SUFFIX) {
        name = &name[..index];
        variants.insert(name.to_string());
    }

    // `name` is now the most basic form, e.g. "bg" from "bg@2x~ipad.png".
    // Work back up through every spelling a reference might use.
    variants.insert(format!("{name}.png"));
    variants.insert(format!("{name}{TABLET_SUFFIX}.png"));
    variants.insert(format!("{name}{PHONE_SUFFIX}.png"));
    variants.insert(format!("{name}{DENSITY_MARKER}.png"));
    variants.insert(format!("{name}{DENSITY_MARKER}{TABLET_SUFFIX}.png"));
    variants.insert(format!("{name}{DENSITY_MARKER}{PHONE_SUFFIX}.png"));

    variants
}

/// Canonical high-density name for a standard-density filename.
///
/// Idempotent: a name already carrying the density marker is returned
/// unchanged. Otherwise the marker is inserted before the device suffix if
/// one is present, else before the `.png` extension, else appended (the
/// extensionless `iTunesArtwork` case).
pub fn to_high_density(image_filename: &str) -> String {
    if image_filename.contains(DENSITY_MARKER) {
        return image_filename.to_string();
    }

    let anchor = image_filename
        .rfind(TABLET_SUFFIX)
        .or_else(|| image_filename.rfind(PHONE_SUFFIX))
        .or_else(|| image_filename.rfind(".png"));

    match anchor {
        Some(index) => format!(
            "{}{}{}",
            &image_filename[..index],
            DENSITY_MARKER,
            &image_filename[index..]
        ),
        None => format!("{image_filename}{DENSITY_MARKER}"),
    }
}

/// Standard-density name for a high-density filename: the density marker is
/// removed verbatim. No anchor search is needed - the marker is never
/// legitimately duplicated.
pub fn to_standard_density(image_filename: &str) -> String {
    image_filename.replace(DENSITY_MARKER, "")
}

/// Substring test for the density marker.
///
/// Unanchored on purpose: a name containing `@2x` anywhere counts as
/// high-density, even as a coincidental fragment. Tightening this would
/// change which images are reported as missing counterparts.
pub fn is_high_density(image_filename: &str) -> bool {
    image_filename.contains(DENSITY_MARKER)
}
