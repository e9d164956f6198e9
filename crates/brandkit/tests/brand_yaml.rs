//! Integration tests for brandkit.
//!
//! These tests exercise whole documents end to end: parse, cross-block
//! resolution, path binding against real temporary directories, and the
//! round trip back to YAML.

use std::fs;
use std::path::{Path, PathBuf};

use brandkit::{Brand, BrandError, FontWeight};
use serde_yaml::Value;

const FULL_DOCUMENT: &str = r##"
meta:
  name:
    full: Very Big Corporation of America
    short: VBC
  link:
    home: https://very-big-corp.com
    github: https://github.com/Very-Big-Corp
color:
  palette:
    orange: "#FF7F0E"
    gray: "#404041"
    white: "#FFFFFF"
  foreground: gray
  background: white
  primary: orange
  danger: "#DC3545"
typography:
  fonts:
    - family: Open Sans
      source: google
    - family: Fira Code
      source: bunny
      weight: [400, 600]
      style: normal
  base:
    family: Open Sans
    size: 16px
    line-height: 1.5
  headings:
    family: Open Sans
    weight: bold
    color: primary
  monospace:
    family: Fira Code
    size: 0.9em
  monospace-block:
    background-color: gray
logo:
  images:
    mark: logos/mark.svg
  small: mark
  medium: logos/wordmark.png
defaults:
  shiny:
    theme:
      preset: brand
"##;

// ============================================================================
// Whole-document resolution
// ============================================================================

#[test]
fn full_document_resolves() {
    let brand = Brand::from_yaml_str(FULL_DOCUMENT, None).unwrap();

    let meta = brand.meta.as_ref().unwrap();
    assert_eq!(meta.name.as_ref().unwrap().short(), Some("VBC"));
    assert_eq!(
        meta.link.as_ref().unwrap().get("github"),
        Some("https://github.com/Very-Big-Corp")
    );

    // Roles resolved through the palette; literals kept as-is.
    assert_eq!(brand.resolved_colors().get("primary"), Some("#FF7F0E"));
    assert_eq!(brand.resolved_colors().get("foreground"), Some("#404041"));
    assert_eq!(brand.resolved_colors().get("danger"), Some("#DC3545"));

    let typography = brand.typography.as_ref().unwrap();
    assert_eq!(
        typography.context("headings").unwrap().color.as_deref(),
        Some("#FF7F0E")
    );
    assert_eq!(
        typography.context("headings").unwrap().weight,
        Some(FontWeight::Bold)
    );

    let logo = brand.logo.as_ref().unwrap();
    assert_eq!(
        logo.variant("small").unwrap().path.relative(),
        Path::new("logos/mark.svg")
    );
}

#[test]
fn cascade_runs_before_color_binding() {
    let brand = Brand::from_yaml_str(FULL_DOCUMENT, None).unwrap();
    let typography = brand.typography.as_ref().unwrap();

    // monospace-block inherited family from monospace, and its own
    // background-color reference bound after the cascade.
    let block = typography.context("monospace-block").unwrap();
    assert_eq!(block.family.as_deref(), Some("Fira Code"));
    assert_eq!(block.background_color.as_deref(), Some("#404041"));

    // monospace-inline did not exist in the document; the cascade created it
    // as a copy of monospace.
    let inline = typography.context("monospace-inline").unwrap();
    assert_eq!(inline.family.as_deref(), Some("Fira Code"));
    assert_eq!(inline.size.as_deref(), Some("0.9em"));
}

#[test]
fn provider_fonts_build_import_urls() {
    let brand = Brand::from_yaml_str(FULL_DOCUMENT, None).unwrap();
    let urls = brand.typography.as_ref().unwrap().import_urls();

    assert_eq!(
        urls,
        vec![
            "https://fonts.googleapis.com/css2?family=Open+Sans:ital,wght@0,400;0,700;1,400;1,700&display=auto".to_string(),
            "https://fonts.bunny.net/css?family=Fira+Code:400,600&display=auto".to_string(),
        ]
    );
}

#[test]
fn font_styles_normalize() {
    let brand = Brand::from_yaml_str(FULL_DOCUMENT, None).unwrap();
    let fonts = &brand.typography.as_ref().unwrap().fonts;
    assert_eq!(fonts.len(), 2);
    assert_eq!(fonts[0].source(), "google");
    assert_eq!(fonts[1].source(), "bunny");
    assert_eq!(fonts[1].family(), "Fira Code");
}

// ============================================================================
// Documents on disk: locator + path binding
// ============================================================================

fn write_project(dir: &Path) -> PathBuf {
    let doc = dir.join("_brand.yml");
    fs::write(
        &doc,
        r##"
logo: logos/mark.svg
typography:
  fonts:
    - family: Invisible
      files:
        - path: fonts/invisible.woff2
          weight: 400
"##,
    )
    .unwrap();
    doc
}

#[test]
fn from_yaml_reads_document_file() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_project(dir.path());

    let brand = Brand::from_yaml(&doc).unwrap();
    assert!(brand.path().is_some());

    let logo = brand.logo.as_ref().unwrap().variant("medium").unwrap();
    assert_eq!(logo.path.relative(), Path::new("logos/mark.svg"));
    assert!(logo
        .path
        .absolute()
        .unwrap()
        .ends_with("logos/mark.svg"));
}

#[test]
fn from_yaml_searches_upward_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_project(dir.path());
    let nested = dir.path().join("reports/q3");
    fs::create_dir_all(&nested).unwrap();

    let brand = Brand::from_yaml(&nested).unwrap();
    assert_eq!(brand.root_dir().unwrap().file_name(), dir.path().file_name());
}

#[test]
fn missing_document_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Brand::from_yaml(dir.path()).unwrap_err();
    assert!(matches!(err, BrandError::DocumentNotFound { .. }));
}

#[test]
fn path_binding_reaches_font_files() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_project(dir.path());

    let brand = Brand::from_yaml(&doc).unwrap();
    let fonts = &brand.typography.as_ref().unwrap().fonts;
    let css = fonts[0].to_css();
    // @font-face src uses the relative form; the absolute form is bound.
    assert!(css.contains("fonts/invisible.woff2"));
}

#[test]
fn set_path_rebinding_is_observable() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let doc = write_project(first.path());

    let mut brand = Brand::from_yaml(&doc).unwrap();
    brand
        .set_path(&second.path().join("_brand.yml"))
        .unwrap();

    let logo = brand.logo.as_ref().unwrap().variant("medium").unwrap();
    assert!(logo.path.absolute().unwrap().starts_with(second.path()));
    assert_eq!(logo.path.relative(), Path::new("logos/mark.svg"));
}

// ============================================================================
// Round trip + serialization
// ============================================================================

#[test]
fn round_trip_shows_resolved_values() {
    let brand = Brand::from_yaml_str(FULL_DOCUMENT, None).unwrap();
    let yaml = brand.to_yaml_str().unwrap();

    let reparsed = Brand::from_yaml_str(&yaml, None).unwrap();
    assert_eq!(
        reparsed.resolved_colors().get("primary"),
        Some("#FF7F0E")
    );
    assert_eq!(
        reparsed
            .typography
            .as_ref()
            .unwrap()
            .context("headings")
            .unwrap()
            .color
            .as_deref(),
        Some("#FF7F0E")
    );
}

#[test]
fn round_trip_keeps_relative_paths() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_project(dir.path());

    let brand = Brand::from_yaml(&doc).unwrap();
    let out = brand.to_value();
    assert_eq!(
        out.get("logo").and_then(Value::as_str),
        Some("logos/mark.svg")
    );
}

#[test]
fn brand_serializes_with_serde() {
    let brand = Brand::from_yaml_str(FULL_DOCUMENT, None).unwrap();
    let json = serde_json::to_value(&brand).unwrap();
    assert_eq!(json["color"]["primary"], "#FF7F0E");
    assert_eq!(json["meta"]["name"]["short"], "VBC");
}

// ============================================================================
// Error reporting across blocks
// ============================================================================

#[test]
fn cyclic_color_reference_names_the_chain() {
    let err = Brand::from_yaml_str(
        r##"
        color:
          primary: secondary
          secondary: primary
        "##,
        None,
    )
    .unwrap_err();
    assert!(matches!(err, BrandError::CyclicColorReference { .. }));
}

#[test]
fn unresolved_typography_color_names_context_and_field() {
    let err = Brand::from_yaml_str(
        r##"
        typography:
          headings:
            color: primary
        "##,
        None,
    )
    .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("headings"));
    assert!(message.contains("primary"));
}

#[test]
fn unknown_block_key_is_rejected() {
    let err = Brand::from_yaml_str("color: {primry: \"#111111\"}", None).unwrap_err();
    assert!(err.to_string().contains("primry"));
}

#[test]
fn typography_styles_parse_strictly() {
    let err = Brand::from_yaml_str(
        r##"
        typography:
          fonts:
            - family: Open Sans
              source: google
              style: upright
        "##,
        None,
    )
    .unwrap_err();
    assert!(matches!(err, BrandError::Structural { .. }));

    let ok = Brand::from_yaml_str(
        r##"
        typography:
          fonts:
            - family: Open Sans
              source: google
              style: italic
        "##,
        None,
    )
    .unwrap();
    assert_eq!(ok.typography.as_ref().unwrap().fonts.len(), 1);
}
