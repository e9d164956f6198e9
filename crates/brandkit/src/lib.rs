//! # Brandkit - Brand Guideline Parser and Resolver
//!
//! `brandkit` reads a project's brand guidelines — colors, typography, logos,
//! and tool defaults — from a single `_brand.yml` document and resolves them
//! into a concrete, ready-to-consume model.
//!
//! ## Core Concepts
//!
//! - [`Brand`]: the top-level aggregate; parse with [`Brand::from_yaml`] or
//!   [`Brand::from_yaml_str`]
//! - [`BrandColor`]: a palette plus theme roles, resolved through name
//!   references (`primary: orange`) with cycle detection
//! - [`BrandTypography`]: per-context settings (base, headings, monospace,
//!   link, ...) with an inheritance cascade and color binding
//! - [`BrandFont`]: font sources — local/hosted files, Google Fonts, or
//!   Bunny Fonts — normalized to deterministic `@import` URLs and CSS
//! - [`FileLocation`]: document-relative paths with a late-bound absolute
//!   form, so the model works before and after the document lands on disk
//!
//! ## Quick Start
//!
//! ```rust
//! use brandkit::Brand;
//!
//! let brand = Brand::from_yaml_str(
//!     r##"
//!     meta:
//!       name: Very Big Corporation of America
//!     color:
//!       palette:
//!         orange: "#FF7F0E"
//!       primary: orange
//!     typography:
//!       fonts:
//!         - family: Open Sans
//!           source: google
//!       headings:
//!         family: Open Sans
//!         color: primary
//!     "##,
//!     None,
//! )?;
//!
//! // Color references are resolved to literals.
//! let headings = brand.typography.as_ref().unwrap().context("headings").unwrap();
//! assert_eq!(headings.color.as_deref(), Some("#FF7F0E"));
//!
//! // Provider fonts normalize to deterministic import URLs.
//! let urls = brand.typography.as_ref().unwrap().import_urls();
//! assert_eq!(urls.len(), 1);
//! assert!(urls[0].starts_with("https://fonts.googleapis.com/css2?family=Open+Sans"));
//! # Ok::<(), brandkit::BrandError>(())
//! ```
//!
//! ## Document Location
//!
//! Supporting files (logos, font files) are authored relative to the
//! document. [`Brand::from_yaml`] accepts the document path or any path
//! inside the project (searching upward for `_brand.yml`) and binds the
//! document's directory into every [`FileLocation`], so both
//! [`FileLocation::relative`] and [`FileLocation::absolute`] are available.

mod brand;
mod color;
mod error;
mod file_location;
mod locate;
mod logo;
mod meta;
mod typography;

pub use brand::Brand;
pub use color::{is_color_literal, BrandColor, Palette, ResolvedColors, COLOR_ROLES};
pub use error::{BrandError, Result};
pub use file_location::{FileLocation, VisitLocations};
pub use locate::find_brand_yml;
pub use logo::{BrandLogo, LogoResource};
pub use meta::{BrandMeta, MetaLink, MetaName};
pub use typography::{
    file_format, BrandFont, BrandTypography, FontDisplay, FontFile, FontFiles, FontStyle,
    FontWeight, ProviderFont, TypographyContext, WeightSet, TYPOGRAPHY_CONTEXTS,
};
