//! The `logo` block: brand images at several sizes.
//!
//! A logo is either a single resource or a set of sized variants:
//!
//! ```yaml
//! logo: logo.png                    # single resource, bare path
//! ```
//!
//! ```yaml
//! logo:
//!   images:
//!     mark: logos/mark.svg
//!     wordmark:
//!       path: logos/wordmark.svg
//!       alt: Company wordmark
//!   small: mark                     # names an `images` entry
//!   medium: wordmark
//!   large: logos/banner.png         # or a direct path
//! ```
//!
//! A bare string anywhere a resource is expected promotes to a resource with
//! that path and no alt text. `small`/`medium`/`large` values that name an
//! `images` entry resolve to that entry's resource at parse time.

use serde_yaml::{Mapping, Value};

use crate::error::{BrandError, Result};
use crate::file_location::{FileLocation, VisitLocations};

/// A single logo image: a file location plus optional alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoResource {
    pub path: FileLocation,
    pub alt: Option<String>,
}

impl LogoResource {
    fn from_value(field: &str, value: &Value) -> Result<Self> {
        match value {
            // Bare path promotes to a resource without alt text.
            Value::String(path) => Ok(LogoResource {
                path: FileLocation::new(path.trim()),
                alt: None,
            }),
            Value::Mapping(map) => {
                let mut path = None;
                let mut alt = None;
                for (key, entry) in map {
                    match key.as_str() {
                        Some("path") => {
                            let source = entry.as_str().ok_or_else(|| {
                                BrandError::structural(
                                    format!("{field}.path"),
                                    "expected a path string",
                                )
                            })?;
                            path = Some(FileLocation::new(source.trim()));
                        }
                        Some("alt") => {
                            let text = entry.as_str().ok_or_else(|| {
                                BrandError::structural(
                                    format!("{field}.alt"),
                                    "expected a string",
                                )
                            })?;
                            alt = Some(text.to_string());
                        }
                        Some(other) => {
                            return Err(BrandError::structural(
                                field,
                                format!("unknown key `{other}`"),
                            ));
                        }
                        None => {
                            return Err(BrandError::structural(field, "keys must be strings"));
                        }
                    }
                }
                let path = path.ok_or_else(|| {
                    BrandError::structural(field, "missing required key `path`")
                })?;
                Ok(LogoResource { path, alt })
            }
            _ => Err(BrandError::structural(
                field,
                "expected a path or a {path, alt} mapping",
            )),
        }
    }

    fn to_value(&self) -> Value {
        match &self.alt {
            None => Value::from(self.path.source()),
            Some(alt) => {
                let mut map = Mapping::new();
                map.insert(Value::from("path"), Value::from(self.path.source()));
                map.insert(Value::from("alt"), Value::from(alt.as_str()));
                Value::Mapping(map)
            }
        }
    }
}

impl VisitLocations for LogoResource {
    fn visit_locations(&mut self, visit: &mut dyn FnMut(&mut FileLocation)) {
        visit(&mut self.path);
    }
}

/// The `logo` block: one resource, or a named-image set with sized variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrandLogo {
    Resource(LogoResource),
    Set {
        /// Reusable named images, insertion-ordered.
        images: Vec<(String, LogoResource)>,
        small: Option<LogoResource>,
        medium: Option<LogoResource>,
        large: Option<LogoResource>,
    },
}

impl BrandLogo {
    pub(crate) fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(_) => {
                Ok(BrandLogo::Resource(LogoResource::from_value("logo", value)?))
            }
            Value::Mapping(map) => {
                if map.iter().any(|(key, _)| {
                    matches!(key.as_str(), Some("path") | Some("alt"))
                }) {
                    return Ok(BrandLogo::Resource(LogoResource::from_value(
                        "logo", value,
                    )?));
                }

                let mut images: Vec<(String, LogoResource)> = Vec::new();
                let image_entries = map
                    .iter()
                    .find(|(key, _)| key.as_str() == Some("images"))
                    .map(|(_, entry)| entry);
                if let Some(entries) = image_entries {
                    let entries = entries.as_mapping().ok_or_else(|| {
                        BrandError::structural("logo.images", "expected a mapping")
                    })?;
                    for (name, entry) in entries {
                        let name = name.as_str().ok_or_else(|| {
                            BrandError::structural("logo.images", "keys must be strings")
                        })?;
                        let resource = LogoResource::from_value(
                            &format!("logo.images.{name}"),
                            entry,
                        )?;
                        images.push((name.to_string(), resource));
                    }
                }

                let mut small = None;
                let mut medium = None;
                let mut large = None;
                for (key, entry) in map {
                    let slot = match key.as_str() {
                        Some("images") => continue,
                        Some("small") => &mut small,
                        Some("medium") => &mut medium,
                        Some("large") => &mut large,
                        Some(other) => {
                            return Err(BrandError::structural(
                                "logo",
                                format!("unknown key `{other}`"),
                            ));
                        }
                        None => {
                            return Err(BrandError::structural(
                                "logo",
                                "keys must be strings",
                            ));
                        }
                    };
                    let field = format!("logo.{}", key.as_str().unwrap_or_default());
                    *slot = Some(sized_variant(&field, entry, &images)?);
                }

                Ok(BrandLogo::Set {
                    images,
                    small,
                    medium,
                    large,
                })
            }
            _ => Err(BrandError::structural(
                "logo",
                "expected a path or a mapping",
            )),
        }
    }

    pub(crate) fn to_value(&self) -> Value {
        match self {
            BrandLogo::Resource(resource) => resource.to_value(),
            BrandLogo::Set {
                images,
                small,
                medium,
                large,
            } => {
                let mut map = Mapping::new();
                if !images.is_empty() {
                    let mut image_map = Mapping::new();
                    for (name, resource) in images {
                        image_map.insert(Value::from(name.as_str()), resource.to_value());
                    }
                    map.insert(Value::from("images"), Value::Mapping(image_map));
                }
                for (key, slot) in [("small", small), ("medium", medium), ("large", large)] {
                    if let Some(resource) = slot {
                        map.insert(Value::from(key), resource.to_value());
                    }
                }
                Value::Mapping(map)
            }
        }
    }

    /// The resource for a sized variant, falling back to the single resource.
    pub fn variant(&self, size: &str) -> Option<&LogoResource> {
        match self {
            BrandLogo::Resource(resource) => Some(resource),
            BrandLogo::Set {
                small,
                medium,
                large,
                ..
            } => match size {
                "small" => small.as_ref(),
                "medium" => medium.as_ref(),
                "large" => large.as_ref(),
                _ => None,
            },
        }
    }

    /// Looks up a named entry in the `images` map.
    pub fn image(&self, name: &str) -> Option<&LogoResource> {
        match self {
            BrandLogo::Resource(_) => None,
            BrandLogo::Set { images, .. } => images
                .iter()
                .find(|(entry, _)| entry == name)
                .map(|(_, resource)| resource),
        }
    }
}

/// Parses a `small`/`medium`/`large` value, resolving names against the
/// `images` map before falling back to a direct resource.
fn sized_variant(
    field: &str,
    value: &Value,
    images: &[(String, LogoResource)],
) -> Result<LogoResource> {
    if let Some(name) = value.as_str() {
        if let Some((_, resource)) = images.iter().find(|(entry, _)| entry == name.trim()) {
            return Ok(resource.clone());
        }
    }
    LogoResource::from_value(field, value)
}

impl VisitLocations for BrandLogo {
    fn visit_locations(&mut self, visit: &mut dyn FnMut(&mut FileLocation)) {
        match self {
            BrandLogo::Resource(resource) => resource.visit_locations(visit),
            BrandLogo::Set {
                images,
                small,
                medium,
                large,
            } => {
                for (_, resource) in images {
                    resource.visit_locations(visit);
                }
                small.visit_locations(visit);
                medium.visit_locations(visit);
                large.visit_locations(visit);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn logo_from_yaml(yaml: &str) -> Result<BrandLogo> {
        let value: Value = serde_yaml::from_str(yaml).unwrap();
        BrandLogo::from_value(&value)
    }

    #[test]
    fn test_scalar_promotes_to_resource() {
        let logo = logo_from_yaml("logo.png").unwrap();
        let resource = logo.variant("medium").unwrap();
        assert_eq!(resource.path.relative(), Path::new("logo.png"));
        assert_eq!(resource.alt, None);
    }

    #[test]
    fn test_resource_with_alt() {
        let logo = logo_from_yaml("{path: logo.png, alt: Company logo}").unwrap();
        let resource = logo.variant("small").unwrap();
        assert_eq!(resource.alt.as_deref(), Some("Company logo"));
    }

    #[test]
    fn test_sized_variants() {
        let logo = logo_from_yaml(
            r##"
            small: favicon.png
            medium: logo.png
            large: banner.png
            "##,
        )
        .unwrap();
        assert_eq!(
            logo.variant("small").unwrap().path.relative(),
            Path::new("favicon.png")
        );
        assert_eq!(
            logo.variant("large").unwrap().path.relative(),
            Path::new("banner.png")
        );
    }

    #[test]
    fn test_variant_resolves_named_image() {
        let logo = logo_from_yaml(
            r##"
            images:
              mark:
                path: logos/mark.svg
                alt: Company mark
            small: mark
            "##,
        )
        .unwrap();
        let small = logo.variant("small").unwrap();
        assert_eq!(small.path.relative(), Path::new("logos/mark.svg"));
        assert_eq!(small.alt.as_deref(), Some("Company mark"));
        assert_eq!(logo.image("mark").unwrap().alt.as_deref(), Some("Company mark"));
    }

    #[test]
    fn test_non_image_name_is_a_path() {
        let logo = logo_from_yaml(
            r##"
            images:
              mark: logos/mark.svg
            medium: logos/wordmark.svg
            "##,
        )
        .unwrap();
        assert_eq!(
            logo.variant("medium").unwrap().path.relative(),
            Path::new("logos/wordmark.svg")
        );
    }

    #[test]
    fn test_unknown_key_fails() {
        let err = logo_from_yaml("{small: a.png, tiny: b.png}").unwrap_err();
        assert!(err.to_string().contains("tiny"));
    }

    #[test]
    fn test_resource_unknown_key_fails() {
        assert!(logo_from_yaml("{path: logo.png, caption: nope}").is_err());
    }

    #[test]
    fn test_url_resource() {
        let logo = logo_from_yaml("https://cdn.example.com/logo.png").unwrap();
        assert!(logo.variant("medium").unwrap().path.is_url());
    }

    #[test]
    fn test_visit_locations_reaches_every_path() {
        let mut logo = logo_from_yaml(
            r##"
            images:
              mark: logos/mark.svg
            small: mark
            large: banner.png
            "##,
        )
        .unwrap();
        let mut seen = 0;
        logo.visit_locations(&mut |loc| {
            loc.set_root(Path::new("/brand"));
            seen += 1;
        });
        assert_eq!(seen, 3);
        assert_eq!(
            logo.variant("small").unwrap().path.absolute().unwrap(),
            std::path::PathBuf::from("/brand/logos/mark.svg")
        );
    }

    #[test]
    fn test_round_trip() {
        let logo = logo_from_yaml(
            r##"
            images:
              mark:
                path: logos/mark.svg
                alt: Mark
            small: banner-small.png
            "##,
        )
        .unwrap();
        let value = logo.to_value();
        assert_eq!(
            value
                .get("images")
                .and_then(|images| images.get("mark"))
                .and_then(|mark| mark.get("alt"))
                .and_then(Value::as_str),
            Some("Mark")
        );
        assert_eq!(
            value.get("small").and_then(Value::as_str),
            Some("banner-small.png")
        );
    }
}
