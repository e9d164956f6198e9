//! Brand colors: palette, theme roles, and reference resolution.
//!
//! The `color` block has two layers:
//!
//! - `palette`: user-chosen names mapped to color values, defined once and
//!   reused everywhere.
//! - Theme roles: a fixed set of named slots (`foreground`, `primary`,
//!   `danger`, ...) each bound to either a literal color or a name.
//!
//! A name can point at a palette entry, at another theme role, or (via any
//! number of hops) eventually at a literal color value:
//!
//! ```yaml
//! color:
//!   palette:
//!     orange: "#EE6331"
//!   primary: orange
//!   warning: primary
//! ```
//!
//! [`BrandColor::resolve`] follows these references and produces a closed
//! [`ResolvedColors`] map in which every defined name has a literal value.
//! Resolution is purely functional over the block's contents: it tracks the
//! names visited within each chain, so an undefined name fails with
//! [`BrandError::UndefinedColorReference`] and a chain that revisits a name
//! fails with [`BrandError::CyclicColorReference`]. Unset roles stay unset;
//! no defaults are invented.

use std::collections::HashMap;

use serde_yaml::{Mapping, Value};

use crate::error::{BrandError, Result};

/// The fixed set of theme color roles, in canonical serialization order.
pub const COLOR_ROLES: &[&str] = &[
    "foreground",
    "background",
    "primary",
    "secondary",
    "tertiary",
    "success",
    "info",
    "warning",
    "danger",
    "light",
    "dark",
];

/// Returns true if `value` is a literal color rather than a name.
///
/// Literals are `#`-prefixed hex colors with 3, 4, 6, or 8 digits, or CSS
/// functional notation (`rgb()`, `rgba()`, `hsl()`, `hsla()`). Known palette
/// and role names are always followed before this test applies.
pub fn is_color_literal(value: &str) -> bool {
    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8)
            && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    let lower = value.to_ascii_lowercase();
    ["rgb(", "rgba(", "hsl(", "hsla("]
        .iter()
        .any(|prefix| lower.starts_with(prefix))
        && lower.ends_with(')')
}

/// An insertion-ordered palette of named colors.
///
/// Names are case-sensitive and unique. Insertion order is irrelevant for
/// resolution but preserved for serialization, so a round-tripped document
/// keeps the palette as authored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<(String, String)>,
}

impl Palette {
    /// Creates an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a palette entry by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, value)| value.as_str())
    }

    /// Inserts or replaces an entry, preserving first-insertion order.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(entry, _)| *entry == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn from_value(value: &Value) -> Result<Self> {
        let map = value.as_mapping().ok_or_else(|| {
            BrandError::structural("color.palette", "expected a mapping of name to color")
        })?;
        let mut palette = Palette::new();
        for (key, entry) in map {
            let name = key.as_str().ok_or_else(|| {
                BrandError::structural("color.palette", "palette names must be strings")
            })?;
            let color = entry.as_str().ok_or_else(|| {
                BrandError::structural(
                    format!("color.palette.{name}"),
                    "palette values must be strings",
                )
            })?;
            palette.insert(name, color);
        }
        Ok(palette)
    }

    fn to_value(&self) -> Value {
        let mut map = Mapping::new();
        for (name, value) in self.iter() {
            map.insert(Value::from(name), Value::from(value));
        }
        Value::Mapping(map)
    }
}

/// Closed mapping from role and palette names to literal color values.
///
/// Built once by [`BrandColor::resolve`] and treated as immutable input by
/// the typography color binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedColors {
    map: HashMap<String, String>,
}

impl ResolvedColors {
    /// Looks up the literal value for a role or palette name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
}

/// The `color` block: a palette plus the fixed theme roles.
///
/// Every field is optional; only defined entries participate in resolution.
/// Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandColor {
    pub palette: Palette,
    pub foreground: Option<String>,
    pub background: Option<String>,
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub tertiary: Option<String>,
    pub success: Option<String>,
    pub info: Option<String>,
    pub warning: Option<String>,
    pub danger: Option<String>,
    pub light: Option<String>,
    pub dark: Option<String>,
}

impl BrandColor {
    /// Returns the value bound to a theme role, if defined.
    pub fn role(&self, name: &str) -> Option<&str> {
        self.role_slot(name).and_then(|slot| slot.as_deref())
    }

    fn role_slot(&self, name: &str) -> Option<&Option<String>> {
        match name {
            "foreground" => Some(&self.foreground),
            "background" => Some(&self.background),
            "primary" => Some(&self.primary),
            "secondary" => Some(&self.secondary),
            "tertiary" => Some(&self.tertiary),
            "success" => Some(&self.success),
            "info" => Some(&self.info),
            "warning" => Some(&self.warning),
            "danger" => Some(&self.danger),
            "light" => Some(&self.light),
            "dark" => Some(&self.dark),
            _ => None,
        }
    }

    fn role_slot_mut(&mut self, name: &str) -> Option<&mut Option<String>> {
        match name {
            "foreground" => Some(&mut self.foreground),
            "background" => Some(&mut self.background),
            "primary" => Some(&mut self.primary),
            "secondary" => Some(&mut self.secondary),
            "tertiary" => Some(&mut self.tertiary),
            "success" => Some(&mut self.success),
            "info" => Some(&mut self.info),
            "warning" => Some(&mut self.warning),
            "danger" => Some(&mut self.danger),
            "light" => Some(&mut self.light),
            "dark" => Some(&mut self.dark),
            _ => None,
        }
    }

    /// Parses the `color` block from its document value.
    pub(crate) fn from_value(value: &Value) -> Result<Self> {
        let map = value
            .as_mapping()
            .ok_or_else(|| BrandError::structural("color", "expected a mapping"))?;

        let mut color = BrandColor::default();
        for (key, entry) in map {
            let key = key
                .as_str()
                .ok_or_else(|| BrandError::structural("color", "keys must be strings"))?;
            if key == "palette" {
                color.palette = Palette::from_value(entry)?;
            } else if let Some(slot) = color.role_slot_mut(key) {
                let value = entry.as_str().ok_or_else(|| {
                    BrandError::structural(format!("color.{key}"), "expected a string")
                })?;
                *slot = Some(value.to_string());
            } else {
                return Err(BrandError::structural(
                    "color",
                    format!("unknown key `{key}`"),
                ));
            }
        }
        Ok(color)
    }

    /// Serializes the block back to its document shape.
    ///
    /// Roles appear in canonical order with whatever values they currently
    /// hold; after [`apply_resolved`](Self::apply_resolved) those are the
    /// resolved literals.
    pub(crate) fn to_value(&self) -> Value {
        let mut map = Mapping::new();
        if !self.palette.is_empty() {
            map.insert(Value::from("palette"), self.palette.to_value());
        }
        for role in COLOR_ROLES {
            if let Some(value) = self.role(role) {
                map.insert(Value::from(*role), Value::from(value));
            }
        }
        Value::Mapping(map)
    }

    /// Looks up a name among palette entries and role bindings.
    ///
    /// Palette entries take precedence when a palette name shadows a role.
    fn lookup(&self, name: &str) -> Option<&str> {
        self.palette.get(name).or_else(|| self.role(name))
    }

    /// Follows references from `value` until a literal is reached.
    fn resolve_value(&self, field: &str, value: &str) -> Result<String> {
        let mut chain: Vec<String> = Vec::new();
        let mut current = value.to_string();
        loop {
            if let Some(next) = self.lookup(&current) {
                if chain.contains(&current) {
                    chain.push(current);
                    return Err(BrandError::CyclicColorReference { chain });
                }
                let next = next.to_string();
                chain.push(current);
                current = next;
            } else if is_color_literal(&current) {
                return Ok(current);
            } else {
                return Err(BrandError::UndefinedColorReference {
                    field: field.to_string(),
                    name: current,
                });
            }
        }
    }

    /// Resolves every defined palette entry and role to a literal value.
    ///
    /// Purely functional: the block itself is not modified. Every entry
    /// resolves in at most as many hops as there are distinct names; a chain
    /// revisiting a name fails with [`BrandError::CyclicColorReference`] and
    /// an unknown name fails with [`BrandError::UndefinedColorReference`].
    pub fn resolve(&self) -> Result<ResolvedColors> {
        let mut map = HashMap::new();
        for (name, value) in self.palette.iter() {
            let literal = self.resolve_value(&format!("color.palette.{name}"), value)?;
            map.insert(name.to_string(), literal);
        }
        for role in COLOR_ROLES {
            if let Some(value) = self.role(role) {
                let literal = self.resolve_value(&format!("color.{role}"), value)?;
                map.insert(role.to_string(), literal);
            }
        }
        Ok(ResolvedColors { map })
    }

    /// Overwrites role and palette values with their resolved literals so the
    /// serialized document shows concrete colors.
    pub(crate) fn apply_resolved(&mut self, resolved: &ResolvedColors) {
        let palette_names: Vec<String> =
            self.palette.iter().map(|(name, _)| name.to_string()).collect();
        for name in palette_names {
            if let Some(literal) = resolved.get(&name) {
                self.palette.insert(name, literal);
            }
        }
        for role in COLOR_ROLES {
            if let Some(slot) = self.role_slot_mut(role) {
                if slot.is_some() {
                    if let Some(literal) = resolved.get(role) {
                        *slot = Some(literal.to_string());
                    }
                }
            }
        }
    }
}
