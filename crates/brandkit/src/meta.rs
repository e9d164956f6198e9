//! Brand metadata: names, links, and free-form extras.
//!
//! The `meta` block describes the company or project behind the brand. Its
//! two known fields accept shorthand:
//!
//! ```yaml
//! meta:
//!   name: Very Big Corporation of America   # or {full: ..., short: VBC}
//!   link: https://very-big-corp.com         # or a map of named links
//! ```
//!
//! Unlike `color`, `typography`, and `logo`, this block is deliberately open:
//! unknown keys under `meta` and under the `link` map are kept verbatim and
//! serialized back on round trip. The `name` shorthand struct is strict.

use serde_yaml::{Mapping, Value};

use crate::error::{BrandError, Result};

/// Brand name: a plain string or a full/short pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaName {
    Simple(String),
    Full {
        full: Option<String>,
        short: Option<String>,
    },
}

impl MetaName {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(name) => Ok(MetaName::Simple(name.trim().to_string())),
            Value::Mapping(map) => {
                let mut full = None;
                let mut short = None;
                for (key, entry) in map {
                    let text = entry.as_str().map(|s| s.trim().to_string());
                    match key.as_str() {
                        Some("full") => {
                            full = Some(text.ok_or_else(|| {
                                BrandError::structural("meta.name.full", "expected a string")
                            })?);
                        }
                        Some("short") => {
                            short = Some(text.ok_or_else(|| {
                                BrandError::structural("meta.name.short", "expected a string")
                            })?);
                        }
                        Some(other) => {
                            return Err(BrandError::structural(
                                "meta.name",
                                format!("unknown key `{other}`"),
                            ));
                        }
                        None => {
                            return Err(BrandError::structural(
                                "meta.name",
                                "keys must be strings",
                            ));
                        }
                    }
                }
                Ok(MetaName::Full { full, short })
            }
            _ => Err(BrandError::structural(
                "meta.name",
                "expected a string or a {full, short} mapping",
            )),
        }
    }

    fn to_value(&self) -> Value {
        match self {
            MetaName::Simple(name) => Value::from(name.as_str()),
            MetaName::Full { full, short } => {
                let mut map = Mapping::new();
                if let Some(full) = full {
                    map.insert(Value::from("full"), Value::from(full.as_str()));
                }
                if let Some(short) = short {
                    map.insert(Value::from("short"), Value::from(short.as_str()));
                }
                Value::Mapping(map)
            }
        }
    }

    /// The full display name.
    pub fn full(&self) -> Option<&str> {
        match self {
            MetaName::Simple(name) => Some(name),
            MetaName::Full { full, .. } => full.as_deref(),
        }
    }

    /// The short name, falling back to the full name.
    pub fn short(&self) -> Option<&str> {
        match self {
            MetaName::Simple(name) => Some(name),
            MetaName::Full { short, .. } => short.as_deref(),
        }
    }
}

/// Brand links: a single home URL or a map of named links.
///
/// The named-link map is open — any key is accepted as long as its value is
/// an `http(s)` URL — and insertion order is preserved for round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaLink {
    Single(String),
    Named(Vec<(String, String)>),
}

impl MetaLink {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(url) => {
                validate_url("meta.link", url.trim())?;
                Ok(MetaLink::Single(url.trim().to_string()))
            }
            Value::Mapping(map) => {
                let mut entries = Vec::new();
                for (key, entry) in map {
                    let name = key.as_str().ok_or_else(|| {
                        BrandError::structural("meta.link", "keys must be strings")
                    })?;
                    let url = entry.as_str().ok_or_else(|| {
                        BrandError::structural(
                            format!("meta.link.{name}"),
                            "expected a URL string",
                        )
                    })?;
                    let url = url.trim();
                    validate_url(&format!("meta.link.{name}"), url)?;
                    entries.push((name.to_string(), url.to_string()));
                }
                Ok(MetaLink::Named(entries))
            }
            _ => Err(BrandError::structural(
                "meta.link",
                "expected a URL or a mapping of named URLs",
            )),
        }
    }

    fn to_value(&self) -> Value {
        match self {
            MetaLink::Single(url) => Value::from(url.as_str()),
            MetaLink::Named(entries) => {
                let mut map = Mapping::new();
                for (name, url) in entries {
                    map.insert(Value::from(name.as_str()), Value::from(url.as_str()));
                }
                Value::Mapping(map)
            }
        }
    }

    /// Looks up a named link; the single-URL shorthand answers to `home`.
    pub fn get(&self, name: &str) -> Option<&str> {
        match self {
            MetaLink::Single(url) => (name == "home").then_some(url.as_str()),
            MetaLink::Named(entries) => entries
                .iter()
                .find(|(entry, _)| entry == name)
                .map(|(_, url)| url.as_str()),
        }
    }
}

fn validate_url(field: &str, url: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(BrandError::structural(
            field,
            format!("`{url}` is not an http(s) URL"),
        ))
    }
}

/// The `meta` block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrandMeta {
    pub name: Option<MetaName>,
    pub link: Option<MetaLink>,
    /// Unknown keys, kept verbatim for round trip.
    pub extra: Mapping,
}

impl BrandMeta {
    pub(crate) fn from_value(value: &Value) -> Result<Self> {
        let map = value
            .as_mapping()
            .ok_or_else(|| BrandError::structural("meta", "expected a mapping"))?;

        let mut meta = BrandMeta::default();
        for (key, entry) in map {
            match key.as_str() {
                Some("name") => meta.name = Some(MetaName::from_value(entry)?),
                Some("link") => meta.link = Some(MetaLink::from_value(entry)?),
                Some(_) => {
                    meta.extra.insert(key.clone(), entry.clone());
                }
                None => {
                    return Err(BrandError::structural("meta", "keys must be strings"));
                }
            }
        }
        Ok(meta)
    }

    pub(crate) fn to_value(&self) -> Value {
        let mut map = Mapping::new();
        if let Some(name) = &self.name {
            map.insert(Value::from("name"), name.to_value());
        }
        if let Some(link) = &self.link {
            map.insert(Value::from("link"), link.to_value());
        }
        for (key, entry) in &self.extra {
            map.insert(key.clone(), entry.clone());
        }
        Value::Mapping(map)
    }
}
