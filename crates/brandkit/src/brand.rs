//! The top-level brand aggregate.
//!
//! [`Brand`] owns the five optional document blocks (`meta`, `color`,
//! `typography`, `logo`, `defaults`) plus the document's own location, and
//! runs cross-block resolution in a fixed order after parse:
//!
//! 1. each block validates structurally on its own;
//! 2. the color graph resolves to a closed name → literal map, and the color
//!    block is rewritten with the literals;
//! 3. the typography cascade completes for every context, then symbolic color
//!    references in typography bind against the resolved map;
//! 4. if the document's path is known, its directory is bound as the root of
//!    every reachable [`FileLocation`].
//!
//! The resulting model is read-only: changing inputs means re-parsing. The
//! one exception is [`Brand::set_path`], which re-runs only step 4.

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use crate::color::{BrandColor, ResolvedColors};
use crate::error::{BrandError, Result};
use crate::file_location::{FileLocation, VisitLocations};
use crate::locate::find_brand_yml;
use crate::logo::BrandLogo;
use crate::meta::BrandMeta;
use crate::typography::BrandTypography;

/// A fully resolved brand document.
///
/// # Example
///
/// ```rust
/// use brandkit::Brand;
///
/// let brand = Brand::from_yaml_str(
///     r##"
///     color:
///       palette:
///         orange: "#FF7F0E"
///       primary: orange
///     typography:
///       headings:
///         color: primary
///     "##,
///     None,
/// )?;
///
/// let headings = brand.typography.as_ref().unwrap().context("headings").unwrap();
/// assert_eq!(headings.color.as_deref(), Some("#FF7F0E"));
/// # Ok::<(), brandkit::BrandError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Brand {
    pub meta: Option<BrandMeta>,
    pub color: Option<BrandColor>,
    pub typography: Option<BrandTypography>,
    pub logo: Option<BrandLogo>,
    /// Tool-specific settings, carried through untouched.
    pub defaults: Option<Value>,
    path: Option<PathBuf>,
    resolved: ResolvedColors,
}

impl Brand {
    /// Parses and resolves a brand document from YAML text.
    ///
    /// `path` is the document's location on disk, if it has one; it is
    /// absolutized against the current directory and used to bind file
    /// locations. A pathless document parses fine but its local file
    /// locations stay unbound.
    pub fn from_yaml_str(text: &str, path: Option<&Path>) -> Result<Self> {
        let value: Value = serde_yaml::from_str(text)?;
        let mut brand = Brand::from_value(&value)?;
        brand.resolve()?;
        if let Some(path) = path {
            brand.path = Some(std::path::absolute(path)?);
            brand.bind_roots();
        }
        Ok(brand)
    }

    /// Reads, parses, and resolves a brand document from disk.
    ///
    /// `path` may be the document itself or any file or directory inside the
    /// project; in the latter case the document is located by searching
    /// upward for `_brand.yml` (see [`find_brand_yml`]).
    pub fn from_yaml(path: &Path) -> Result<Self> {
        let doc = if path.is_file() && is_brand_document(path) {
            path.to_path_buf()
        } else {
            find_brand_yml(path)?
        };
        let text = std::fs::read_to_string(&doc)?;
        Brand::from_yaml_str(&text, Some(&doc))
    }

    fn from_value(value: &Value) -> Result<Self> {
        let map = value
            .as_mapping()
            .ok_or_else(|| BrandError::structural("brand", "expected a mapping"))?;

        let mut brand = Brand::default();
        for (key, entry) in map {
            match key.as_str() {
                Some("meta") => brand.meta = Some(BrandMeta::from_value(entry)?),
                Some("color") => brand.color = Some(BrandColor::from_value(entry)?),
                Some("typography") => {
                    brand.typography = Some(BrandTypography::from_value(entry)?)
                }
                Some("logo") => brand.logo = Some(BrandLogo::from_value(entry)?),
                Some("defaults") => brand.defaults = Some(entry.clone()),
                // Unknown top-level keys are other tools' business.
                Some(_) => {}
                None => {
                    return Err(BrandError::structural("brand", "keys must be strings"));
                }
            }
        }
        Ok(brand)
    }

    /// Runs cross-block resolution: colors, then the typography cascade,
    /// then color binding. Root binding is separate since it depends on the
    /// document path.
    fn resolve(&mut self) -> Result<()> {
        self.resolved = match &self.color {
            Some(color) => color.resolve()?,
            None => ResolvedColors::default(),
        };
        if let Some(color) = &mut self.color {
            color.apply_resolved(&self.resolved);
        }
        if let Some(typography) = &mut self.typography {
            typography.cascade();
            typography.bind_colors(&self.resolved)?;
        }
        Ok(())
    }

    fn bind_roots(&mut self) {
        let Some(dir) = self.path.as_ref().and_then(|p| p.parent()) else {
            return;
        };
        let dir = dir.to_path_buf();
        self.visit_locations(&mut |location| location.set_root(&dir));
    }

    /// The document's location on disk, if known.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The directory containing the document; the root bound into every
    /// reachable [`FileLocation`].
    pub fn root_dir(&self) -> Option<&Path> {
        self.path.as_ref().and_then(|p| p.parent())
    }

    /// Reassigns the document's location and rebinds every file location's
    /// root accordingly. Only the root-binding step re-runs; colors and
    /// typography are untouched.
    ///
    /// # Errors
    ///
    /// The path must be absolute.
    pub fn set_path(&mut self, path: &Path) -> Result<()> {
        if !path.is_absolute() {
            return Err(BrandError::structural(
                "path",
                format!("`{}` is not an absolute path", path.display()),
            ));
        }
        self.path = Some(path.to_path_buf());
        self.bind_roots();
        Ok(())
    }

    /// The closed name → literal map produced by color resolution.
    pub fn resolved_colors(&self) -> &ResolvedColors {
        &self.resolved
    }

    /// Serializes the resolved model back to the document shape.
    ///
    /// Resolved values appear literally (colors as hex, weights normalized)
    /// and file locations serialize in their relative form, so the output is
    /// portable alongside the document's supporting files.
    pub fn to_value(&self) -> Value {
        let mut map = Mapping::new();
        if let Some(meta) = &self.meta {
            map.insert(Value::from("meta"), meta.to_value());
        }
        if let Some(color) = &self.color {
            map.insert(Value::from("color"), color.to_value());
        }
        if let Some(typography) = &self.typography {
            map.insert(Value::from("typography"), typography.to_value());
        }
        if let Some(logo) = &self.logo {
            map.insert(Value::from("logo"), logo.to_value());
        }
        if let Some(defaults) = &self.defaults {
            map.insert(Value::from("defaults"), defaults.clone());
        }
        Value::Mapping(map)
    }

    /// Serializes the resolved model to YAML text.
    pub fn to_yaml_str(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.to_value())?)
    }
}

impl serde::Serialize for Brand {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl VisitLocations for Brand {
    fn visit_locations(&mut self, visit: &mut dyn FnMut(&mut FileLocation)) {
        self.typography.visit_locations(visit);
        self.logo.visit_locations(visit);
    }
}

fn is_brand_document(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yml") | Some("yaml")
    )
}
