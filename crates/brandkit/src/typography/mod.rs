//! Typography contexts, the inheritance cascade, and color binding.
//!
//! The `typography` block holds a font list plus a small fixed set of
//! contexts (`base`, `headings`, `monospace`, `monospace-inline`,
//! `monospace-block`, `link`, `emphasis`), each a sparse bundle of optional
//! fields. Two mechanisms fill the sparse authored values out into a fully
//! resolved model:
//!
//! 1. **Cascade**: `monospace-inline` and `monospace-block` inherit any unset
//!    field from `monospace`. Inheritance is a single level; explicit child
//!    values are never overwritten.
//! 2. **Color binding**: `color` and `background-color` values naming a
//!    resolved palette entry or theme role are replaced with the literal
//!    color from the resolved color map.
//!
//! The cascade completes for every context before any color binding begins,
//! so binding always reads the context's own (possibly inherited) value.
//!
//! ```yaml
//! typography:
//!   monospace:
//!     family: Fira Code
//!     size: 1.2rem
//!   monospace-inline:
//!     size: 0.9rem        # family inherited from monospace
//!     background-color: red-100   # bound via color.palette
//! ```

mod font;

pub use font::{
    file_format, BrandFont, FontDisplay, FontFile, FontFiles, FontStyle, FontWeight,
    ProviderFont, WeightSet,
};

use serde_yaml::{Mapping, Value};

use crate::color::{is_color_literal, ResolvedColors};
use crate::error::{BrandError, Result};
use crate::file_location::{FileLocation, VisitLocations};

/// The fixed typography contexts, in canonical serialization order.
pub const TYPOGRAPHY_CONTEXTS: &[&str] = &[
    "base",
    "headings",
    "monospace",
    "monospace-inline",
    "monospace-block",
    "link",
    "emphasis",
];

/// One typography context: a sparse bundle of optional fields.
///
/// All contexts share this shape; `decoration` is only accepted when parsing
/// the `link` context. Fields left unset after the cascade stay unset — no
/// defaults are injected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypographyContext {
    pub family: Option<String>,
    pub weight: Option<FontWeight>,
    pub style: Option<Vec<FontStyle>>,
    pub size: Option<String>,
    pub line_height: Option<f64>,
    pub color: Option<String>,
    pub background_color: Option<String>,
    pub decoration: Option<String>,
}

impl TypographyContext {
    fn from_value(context: &str, value: &Value) -> Result<Self> {
        // Bare string shorthand: `headings: Raleway` means the family.
        if let Value::String(family) = value {
            return Ok(TypographyContext {
                family: Some(family.trim().to_string()),
                ..TypographyContext::default()
            });
        }

        let field = |key: &str| format!("typography.{context}.{key}");
        let map = value.as_mapping().ok_or_else(|| {
            BrandError::structural(
                format!("typography.{context}"),
                "expected a family name or a mapping",
            )
        })?;

        let mut parsed = TypographyContext::default();
        for (key, entry) in map {
            match key.as_str() {
                Some("family") => {
                    parsed.family = Some(expect_string(&field("family"), entry)?);
                }
                Some("weight") => {
                    parsed.weight = Some(FontWeight::parse(entry, false, false)?);
                }
                Some("style") => {
                    parsed.style = Some(FontStyle::parse_set(&field("style"), entry)?);
                }
                Some("size") => {
                    parsed.size = Some(expect_string(&field("size"), entry)?);
                }
                Some("line-height") => {
                    parsed.line_height = Some(entry.as_f64().ok_or_else(|| {
                        BrandError::structural(field("line-height"), "expected a number")
                    })?);
                }
                Some("color") => {
                    parsed.color = Some(expect_string(&field("color"), entry)?);
                }
                Some("background-color") => {
                    parsed.background_color =
                        Some(expect_string(&field("background-color"), entry)?);
                }
                Some("decoration") if context == "link" => {
                    parsed.decoration = Some(expect_string(&field("decoration"), entry)?);
                }
                Some(other) => {
                    return Err(BrandError::structural(
                        format!("typography.{context}"),
                        format!("unknown key `{other}`"),
                    ));
                }
                None => {
                    return Err(BrandError::structural(
                        format!("typography.{context}"),
                        "keys must be strings",
                    ));
                }
            }
        }
        Ok(parsed)
    }

    fn to_value(&self) -> Value {
        let mut map = Mapping::new();
        if let Some(family) = &self.family {
            map.insert(Value::from("family"), Value::from(family.as_str()));
        }
        if let Some(weight) = self.weight {
            map.insert(Value::from("weight"), weight.to_value());
        }
        if let Some(style) = &self.style {
            map.insert(Value::from("style"), FontStyle::set_to_value(style));
        }
        if let Some(size) = &self.size {
            map.insert(Value::from("size"), Value::from(size.as_str()));
        }
        if let Some(line_height) = self.line_height {
            map.insert(Value::from("line-height"), Value::from(line_height));
        }
        if let Some(color) = &self.color {
            map.insert(Value::from("color"), Value::from(color.as_str()));
        }
        if let Some(background) = &self.background_color {
            map.insert(Value::from("background-color"), Value::from(background.as_str()));
        }
        if let Some(decoration) = &self.decoration {
            map.insert(Value::from("decoration"), Value::from(decoration.as_str()));
        }
        Value::Mapping(map)
    }

    /// Copies each unset field from `parent`. Explicit values always win.
    fn inherit_from(&mut self, parent: &TypographyContext) {
        if self.family.is_none() {
            self.family = parent.family.clone();
        }
        if self.weight.is_none() {
            self.weight = parent.weight;
        }
        if self.style.is_none() {
            self.style = parent.style.clone();
        }
        if self.size.is_none() {
            self.size = parent.size.clone();
        }
        if self.line_height.is_none() {
            self.line_height = parent.line_height;
        }
        if self.color.is_none() {
            self.color = parent.color.clone();
        }
        if self.background_color.is_none() {
            self.background_color = parent.background_color.clone();
        }
        if self.decoration.is_none() {
            self.decoration = parent.decoration.clone();
        }
    }
}

fn expect_string(field: &str, value: &Value) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| BrandError::structural(field, "expected a string"))
}

/// The `typography` block: fonts plus per-context settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrandTypography {
    pub fonts: Vec<BrandFont>,
    pub base: Option<TypographyContext>,
    pub headings: Option<TypographyContext>,
    pub monospace: Option<TypographyContext>,
    pub monospace_inline: Option<TypographyContext>,
    pub monospace_block: Option<TypographyContext>,
    pub link: Option<TypographyContext>,
    pub emphasis: Option<TypographyContext>,
}

impl BrandTypography {
    /// Returns the context bound to a canonical context name.
    pub fn context(&self, name: &str) -> Option<&TypographyContext> {
        match name {
            "base" => self.base.as_ref(),
            "headings" => self.headings.as_ref(),
            "monospace" => self.monospace.as_ref(),
            "monospace-inline" => self.monospace_inline.as_ref(),
            "monospace-block" => self.monospace_block.as_ref(),
            "link" => self.link.as_ref(),
            "emphasis" => self.emphasis.as_ref(),
            _ => None,
        }
    }

    pub(crate) fn from_value(value: &Value) -> Result<Self> {
        let map = value
            .as_mapping()
            .ok_or_else(|| BrandError::structural("typography", "expected a mapping"))?;

        let mut typography = BrandTypography::default();
        for (key, entry) in map {
            let key = key.as_str().ok_or_else(|| {
                BrandError::structural("typography", "keys must be strings")
            })?;
            match key {
                "fonts" => {
                    let seq = entry.as_sequence().ok_or_else(|| {
                        BrandError::structural("typography.fonts", "expected a list")
                    })?;
                    typography.fonts = seq
                        .iter()
                        .enumerate()
                        .map(|(i, font)| {
                            BrandFont::from_value(&format!("typography.fonts[{i}]"), font)
                        })
                        .collect::<Result<Vec<_>>>()?;
                }
                name if TYPOGRAPHY_CONTEXTS.contains(&name) => {
                    let context = TypographyContext::from_value(name, entry)?;
                    *typography.context_slot(name) = Some(context);
                }
                other => {
                    return Err(BrandError::structural(
                        "typography",
                        format!("unknown key `{other}`"),
                    ));
                }
            }
        }
        Ok(typography)
    }

    fn context_slot(&mut self, name: &str) -> &mut Option<TypographyContext> {
        match name {
            "base" => &mut self.base,
            "headings" => &mut self.headings,
            "monospace" => &mut self.monospace,
            "monospace-inline" => &mut self.monospace_inline,
            "monospace-block" => &mut self.monospace_block,
            "link" => &mut self.link,
            "emphasis" => &mut self.emphasis,
            other => unreachable!("not a typography context: {other}"),
        }
    }

    pub(crate) fn to_value(&self) -> Value {
        let mut map = Mapping::new();
        if !self.fonts.is_empty() {
            map.insert(
                Value::from("fonts"),
                Value::Sequence(self.fonts.iter().map(BrandFont::to_value).collect()),
            );
        }
        for name in TYPOGRAPHY_CONTEXTS {
            if let Some(context) = self.context(name) {
                map.insert(Value::from(*name), context.to_value());
            }
        }
        Value::Mapping(map)
    }

    /// Runs the inheritance cascade.
    ///
    /// `monospace-inline` and `monospace-block` fill unset fields from
    /// `monospace`; a child that was not authored at all becomes a copy of
    /// the parent. The cascade must complete for all contexts before any
    /// color binding runs.
    pub(crate) fn cascade(&mut self) {
        let Some(parent) = self.monospace.clone() else {
            return;
        };
        for child in [&mut self.monospace_inline, &mut self.monospace_block] {
            match child {
                Some(context) => context.inherit_from(&parent),
                None => *child = Some(parent.clone()),
            }
        }
    }

    /// Substitutes resolved color names into `color`/`background-color`.
    ///
    /// A value naming a resolved role or palette entry is replaced with its
    /// literal; a literal color is left unchanged; anything else fails with
    /// [`BrandError::UnresolvedTypographyColorReference`].
    pub(crate) fn bind_colors(&mut self, resolved: &ResolvedColors) -> Result<()> {
        for name in TYPOGRAPHY_CONTEXTS {
            let Some(context) = self.context_slot(name).as_mut() else {
                continue;
            };
            for (field, slot) in [
                ("color", &mut context.color),
                ("background-color", &mut context.background_color),
            ] {
                let Some(value) = slot.as_ref() else {
                    continue;
                };
                if let Some(literal) = resolved.get(value) {
                    *slot = Some(literal.to_string());
                } else if !is_color_literal(value) {
                    return Err(BrandError::UnresolvedTypographyColorReference {
                        context: name.to_string(),
                        field: field.to_string(),
                        value: value.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Import URLs for every web-font provider entry, in font order.
    pub fn import_urls(&self) -> Vec<String> {
        self.fonts
            .iter()
            .filter_map(BrandFont::to_import_url)
            .collect()
    }

    /// CSS including every font: `@import` lines for providers followed by
    /// `@font-face` rules for local files.
    pub fn font_css(&self) -> String {
        self.fonts
            .iter()
            .map(BrandFont::to_css)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl VisitLocations for BrandTypography {
    fn visit_locations(&mut self, visit: &mut dyn FnMut(&mut FileLocation)) {
        self.fonts.visit_locations(visit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::BrandColor;

    fn typography_from_yaml(yaml: &str) -> BrandTypography {
        let value: Value = serde_yaml::from_str(yaml).unwrap();
        BrandTypography::from_value(&value).unwrap()
    }

    fn resolved_from_yaml(yaml: &str) -> ResolvedColors {
        let value: Value = serde_yaml::from_str(yaml).unwrap();
        BrandColor::from_value(&value).unwrap().resolve().unwrap()
    }

    // =========================================================================
    // Parsing
    // =========================================================================

    #[test]
    fn test_parse_contexts_and_fields() {
        let t = typography_from_yaml(
            r##"
            base:
              family: Open Sans
              size: 16px
              line-height: 1.5
            headings:
              weight: 600
              style: italic
            "##,
        );
        let base = t.base.as_ref().unwrap();
        assert_eq!(base.family.as_deref(), Some("Open Sans"));
        assert_eq!(base.line_height, Some(1.5));
        let headings = t.headings.as_ref().unwrap();
        assert_eq!(headings.weight, Some(FontWeight::Fixed(600)));
        assert_eq!(headings.style.as_deref(), Some(&[FontStyle::Italic][..]));
    }

    #[test]
    fn test_context_string_is_family_shorthand() {
        let t = typography_from_yaml(
            r##"
            base: Open Sans
            headings: Raleway
            monospace: Fira Code
            "##,
        );
        let base = t.base.as_ref().unwrap();
        assert_eq!(base.family.as_deref(), Some("Open Sans"));
        assert_eq!(base.size, None);
        assert_eq!(
            t.headings.as_ref().unwrap().family.as_deref(),
            Some("Raleway")
        );
        assert_eq!(
            t.monospace.as_ref().unwrap().family.as_deref(),
            Some("Fira Code")
        );
    }

    #[test]
    fn test_unknown_context_key_rejected() {
        let value: Value = serde_yaml::from_str("base: {famly: Open Sans}").unwrap();
        let err = BrandTypography::from_value(&value).unwrap_err();
        assert!(err.to_string().contains("famly"));
    }

    #[test]
    fn test_unknown_context_rejected() {
        let value: Value = serde_yaml::from_str("footnotes: {family: A}").unwrap();
        assert!(BrandTypography::from_value(&value).is_err());
    }

    #[test]
    fn test_decoration_only_valid_for_link() {
        typography_from_yaml("link: {decoration: underline}");
        let value: Value =
            serde_yaml::from_str("base: {decoration: underline}").unwrap();
        assert!(BrandTypography::from_value(&value).is_err());
    }

    // =========================================================================
    // Cascade
    // =========================================================================

    #[test]
    fn test_cascade_inherits_unset_fields() {
        let mut t = typography_from_yaml(
            r##"
            monospace:
              family: Fira Code
              size: 1.2rem
            monospace-inline:
              size: 0.9rem
            "##,
        );
        t.cascade();

        let inline = t.monospace_inline.as_ref().unwrap();
        assert_eq!(inline.family.as_deref(), Some("Fira Code"));
        assert_eq!(inline.size.as_deref(), Some("0.9rem"));
    }

    #[test]
    fn test_cascade_creates_missing_children() {
        let mut t = typography_from_yaml("monospace: {family: Fira Code}");
        t.cascade();
        assert_eq!(
            t.monospace_block.as_ref().unwrap().family.as_deref(),
            Some("Fira Code")
        );
    }

    #[test]
    fn test_cascade_never_overwrites_explicit_values() {
        let mut t = typography_from_yaml(
            r##"
            monospace:
              family: Fira Code
              size: 1.2rem
            monospace-block:
              family: Menlo
            "##,
        );
        t.cascade();

        let block = t.monospace_block.as_ref().unwrap();
        assert_eq!(block.family.as_deref(), Some("Menlo"));
        assert_eq!(block.size.as_deref(), Some("1.2rem"));
    }

    #[test]
    fn test_cascade_is_single_level() {
        // Without a monospace parent, inline/block inherit nothing.
        let mut t = typography_from_yaml("base: {family: Open Sans}");
        t.cascade();
        assert!(t.monospace_inline.is_none());
        assert!(t.monospace_block.is_none());
    }

    // =========================================================================
    // Color binding
    // =========================================================================

    #[test]
    fn test_bind_replaces_resolved_names() {
        let mut t = typography_from_yaml(
            r##"
            headings:
              color: primary
            link:
              background-color: orange
            "##,
        );
        let resolved = resolved_from_yaml(
            r##"
            palette:
              orange: "#EE6331"
            primary: orange
            "##,
        );
        t.bind_colors(&resolved).unwrap();
        assert_eq!(
            t.headings.as_ref().unwrap().color.as_deref(),
            Some("#EE6331")
        );
        assert_eq!(
            t.link.as_ref().unwrap().background_color.as_deref(),
            Some("#EE6331")
        );
    }

    #[test]
    fn test_bind_leaves_literals_alone() {
        let mut t = typography_from_yaml("base: {color: \"#151515\"}");
        t.bind_colors(&ResolvedColors::default()).unwrap();
        assert_eq!(t.base.as_ref().unwrap().color.as_deref(), Some("#151515"));
    }

    #[test]
    fn test_bind_unknown_name_fails_with_context_and_field() {
        let mut t = typography_from_yaml("headings: {color: primry}");
        let err = t.bind_colors(&ResolvedColors::default()).unwrap_err();
        assert!(matches!(
            err,
            BrandError::UnresolvedTypographyColorReference {
                ref context,
                ref field,
                ..
            } if context == "headings" && field == "color"
        ));
    }

    #[test]
    fn test_cascaded_values_are_bound() {
        // The inherited color name must be bound on the child context too.
        let mut t = typography_from_yaml(
            r##"
            monospace:
              color: primary
            monospace-inline:
              size: 0.9rem
            "##,
        );
        let resolved = resolved_from_yaml("primary: \"#447099\"");
        t.cascade();
        t.bind_colors(&resolved).unwrap();
        assert_eq!(
            t.monospace_inline.as_ref().unwrap().color.as_deref(),
            Some("#447099")
        );
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    #[test]
    fn test_to_value_round_trips() {
        let t = typography_from_yaml(
            r##"
            fonts:
              - source: google
                family: Open Sans
            monospace:
              family: Fira Code
              size: 1.2rem
            "##,
        );
        let reparsed = BrandTypography::from_value(&t.to_value()).unwrap();
        assert_eq!(reparsed, t);
    }

    #[test]
    fn test_font_css_combines_sources() {
        let t = typography_from_yaml(
            r##"
            fonts:
              - source: google
                family: Open Sans
              - family: Custom
                files:
                  - path: fonts/Custom.woff2
            "##,
        );
        let css = t.font_css();
        assert!(css.contains("@import url("));
        assert!(css.contains("@font-face"));
        assert_eq!(t.import_urls().len(), 1);
    }
}
