//! Font specifications: sources, weight/style normalization, import URLs.
//!
//! A brand lists its fonts under `typography.fonts`. Each entry is one of
//! three structurally different sources, discriminated by its `source` field:
//!
//! - **Local files** (`source: file`, an explicit `files` list, or a bare
//!   file path): per-file path, weight, and style, with the file format
//!   derived from the path's extension.
//! - **Google Fonts** (`source: google`): family plus weight/style/display,
//!   imported via the Google Fonts CSS2 API.
//! - **Bunny Fonts** (`source: bunny`): same shape as Google, imported via
//!   the Bunny Fonts API.
//!
//! Users write weights and styles in heterogeneous shorthand: a single value,
//! a list, a named keyword (`semi-bold`), or a closed numeric range
//! (`"400..700"`). Everything is normalized into one canonical representation
//! before any URL is produced, so import URL generation is deterministic:
//! the same normalized inputs always yield byte-identical URLs regardless of
//! authored order.
//!
//! ```yaml
//! typography:
//!   fonts:
//!     - family: Open Sans
//!       source: google
//!       weight: [700, 400]
//!       style: [italic, normal]
//!     - family: Custom Sans
//!       files:
//!         - path: fonts/CustomSans-Regular.woff2
//!         - path: fonts/CustomSans-Bold.woff2
//!           weight: bold
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_yaml::{Mapping, Value};

use crate::error::{BrandError, Result};
use crate::file_location::{FileLocation, VisitLocations};

/// CSS common weight names, mapped to their numeric values.
static FONT_WEIGHT_KEYWORDS: Lazy<HashMap<&'static str, u16>> = Lazy::new(|| {
    HashMap::from([
        ("thin", 100),
        ("extra-light", 200),
        ("ultra-light", 200),
        ("light", 300),
        ("normal", 400),
        ("regular", 400),
        ("medium", 500),
        ("semi-bold", 600),
        ("demi-bold", 600),
        ("bold", 700),
        ("extra-bold", 800),
        ("ultra-bold", 800),
        ("black", 900),
    ])
});

/// Recognized font file extensions and their `@font-face` format tags.
static FONT_FILE_FORMATS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("otc", "collection"),
        ("ttc", "collection"),
        ("eot", "embedded-opentype"),
        ("otf", "opentype"),
        ("ttf", "truetype"),
        ("svg", "svg"),
        ("svgz", "svg"),
        ("woff", "woff"),
        ("woff2", "woff2"),
    ])
});

fn invalid_weight(value: impl std::fmt::Display, message: &str) -> BrandError {
    BrandError::InvalidFontWeight {
        value: value.to_string(),
        message: message.to_string(),
    }
}

const WEIGHT_RULE: &str =
    "expected \"normal\", \"bold\", \"auto\", a named weight, a multiple of 100 \
     between 100 and 900, or a \"A..B\" range";

/// A normalized font weight.
///
/// Normalization is idempotent: parsing the serialized form of a normalized
/// weight yields the same weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    /// Let the font file decide; only valid on its own, never in a list or
    /// range, and only for local font files.
    Auto,
    Normal,
    Bold,
    /// A multiple of 100 in `[100, 900]`.
    Fixed(u16),
    /// A closed range `A..B` with `A < B`, both multiples of 100.
    Range(u16, u16),
}

impl FontWeight {
    /// Normalizes a document value into a weight.
    ///
    /// Accepts the literal keywords `normal`/`bold`/`auto`, named weights
    /// (`thin` through `black`, with `regular` as an alias for 400), integers
    /// that are multiples of 100 in `[100, 900]`, and — when `allow_range` —
    /// a closed `"A..B"` range string.
    pub fn parse(value: &Value, allow_auto: bool, allow_range: bool) -> Result<Self> {
        match value {
            Value::Number(n) => Self::from_number(n),
            Value::String(s) => Self::from_str_value(s, allow_auto, allow_range),
            other => Err(invalid_weight(format!("{other:?}"), WEIGHT_RULE)),
        }
    }

    fn from_number(n: &serde_yaml::Number) -> Result<Self> {
        let value = n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64))
            .ok_or_else(|| invalid_weight(n, WEIGHT_RULE))?;
        Self::from_integer(value)
    }

    fn from_integer(value: u64) -> Result<Self> {
        if !(100..=900).contains(&value) || value % 100 != 0 {
            return Err(invalid_weight(
                value,
                "expected a multiple of 100 between 100 and 900",
            ));
        }
        Ok(FontWeight::Fixed(value as u16))
    }

    fn from_str_value(s: &str, allow_auto: bool, allow_range: bool) -> Result<Self> {
        match s {
            "auto" => {
                if allow_auto {
                    Ok(FontWeight::Auto)
                } else {
                    Err(invalid_weight(
                        s,
                        "`auto` is only valid on its own for local font files",
                    ))
                }
            }
            "normal" => Ok(FontWeight::Normal),
            "bold" => Ok(FontWeight::Bold),
            _ => {
                if let Some(&mapped) = FONT_WEIGHT_KEYWORDS.get(s) {
                    return Ok(FontWeight::Fixed(mapped));
                }
                if s.contains("..") {
                    if !allow_range {
                        return Err(invalid_weight(
                            s,
                            "weight ranges are not valid for this font source",
                        ));
                    }
                    return Self::from_range_str(s);
                }
                if let Ok(number) = s.parse::<u64>() {
                    return Self::from_integer(number);
                }
                Err(invalid_weight(s, WEIGHT_RULE))
            }
        }
    }

    fn from_range_str(s: &str) -> Result<Self> {
        let (low, high) = s
            .split_once("..")
            .ok_or_else(|| invalid_weight(s, WEIGHT_RULE))?;
        let low = low
            .trim()
            .parse::<u64>()
            .map_err(|_| invalid_weight(s, "range bounds must be integers"))?;
        let high = high
            .trim()
            .parse::<u64>()
            .map_err(|_| invalid_weight(s, "range bounds must be integers"))?;
        let (FontWeight::Fixed(low), FontWeight::Fixed(high)) =
            (Self::from_integer(low)?, Self::from_integer(high)?)
        else {
            return Err(invalid_weight(s, WEIGHT_RULE));
        };
        if low >= high {
            return Err(invalid_weight(
                s,
                "range start must be less than range end",
            ));
        }
        Ok(FontWeight::Range(low, high))
    }

    /// Numeric value used for URL ordering; `None` for `auto` and ranges.
    fn numeric(&self) -> Option<u16> {
        match self {
            FontWeight::Auto | FontWeight::Range(..) => None,
            FontWeight::Normal => Some(400),
            FontWeight::Bold => Some(700),
            FontWeight::Fixed(n) => Some(*n),
        }
    }

    pub(crate) fn to_value(self) -> Value {
        match self {
            FontWeight::Fixed(n) => Value::from(u64::from(n)),
            other => Value::from(other.to_string()),
        }
    }
}

impl std::fmt::Display for FontWeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontWeight::Auto => f.write_str("auto"),
            FontWeight::Normal => f.write_str("normal"),
            FontWeight::Bold => f.write_str("bold"),
            FontWeight::Fixed(n) => write!(f, "{n}"),
            FontWeight::Range(a, b) => write!(f, "{a}..{b}"),
        }
    }
}

/// Weight shorthand for web-font providers: a list of weights or one range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeightSet {
    List(Vec<FontWeight>),
    Range(u16, u16),
}

impl WeightSet {
    /// Normalizes a scalar, list, or range value. `auto` is never valid here;
    /// ranges only when `allow_range`.
    fn parse(value: &Value, allow_range: bool) -> Result<Self> {
        match value {
            Value::Sequence(seq) => {
                let weights = seq
                    .iter()
                    .map(|entry| FontWeight::parse(entry, false, false))
                    .collect::<Result<Vec<_>>>()?;
                if weights.is_empty() {
                    return Err(invalid_weight("[]", "expected at least one weight"));
                }
                Ok(WeightSet::List(weights))
            }
            scalar => match FontWeight::parse(scalar, false, allow_range)? {
                FontWeight::Range(a, b) => Ok(WeightSet::Range(a, b)),
                weight => Ok(WeightSet::List(vec![weight])),
            },
        }
    }

    /// Weight fragments for import URLs: ascending, deduplicated numbers, or
    /// the literal range string. Input order never matters.
    fn url_items(&self) -> Vec<String> {
        match self {
            WeightSet::Range(a, b) => vec![format!("{a}..{b}")],
            WeightSet::List(list) => {
                let mut numbers: Vec<u16> =
                    list.iter().filter_map(FontWeight::numeric).collect();
                numbers.sort_unstable();
                numbers.dedup();
                numbers.iter().map(u16::to_string).collect()
            }
        }
    }

    fn to_value(&self) -> Value {
        match self {
            WeightSet::Range(a, b) => Value::from(format!("{a}..{b}")),
            WeightSet::List(list) if list.len() == 1 => list[0].to_value(),
            WeightSet::List(list) => {
                Value::Sequence(list.iter().map(|w| w.to_value()).collect())
            }
        }
    }
}

/// A normalized font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Italic,
}

impl FontStyle {
    fn parse(field: &str, value: &Value) -> Result<Self> {
        match value.as_str() {
            Some("normal") => Ok(FontStyle::Normal),
            Some("italic") => Ok(FontStyle::Italic),
            _ => Err(BrandError::structural(
                field,
                "expected `normal` or `italic`",
            )),
        }
    }

    /// Normalizes a scalar-or-list style value.
    pub(crate) fn parse_set(field: &str, value: &Value) -> Result<Vec<Self>> {
        match value {
            Value::Sequence(seq) => {
                if seq.is_empty() {
                    return Err(BrandError::structural(field, "expected at least one style"));
                }
                seq.iter().map(|entry| Self::parse(field, entry)).collect()
            }
            scalar => Ok(vec![Self::parse(field, scalar)?]),
        }
    }

    pub(crate) fn set_to_value(styles: &[Self]) -> Value {
        if styles.len() == 1 {
            Value::from(styles[0].to_string())
        } else {
            Value::Sequence(styles.iter().map(|s| Value::from(s.to_string())).collect())
        }
    }
}

impl std::fmt::Display for FontStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontStyle::Normal => f.write_str("normal"),
            FontStyle::Italic => f.write_str("italic"),
        }
    }
}

/// Web-font display strategy, appended to import URLs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontDisplay {
    #[default]
    Auto,
    Block,
    Swap,
    Fallback,
    Optional,
}

impl FontDisplay {
    fn parse(field: &str, value: &Value) -> Result<Self> {
        match value.as_str() {
            Some("auto") => Ok(FontDisplay::Auto),
            Some("block") => Ok(FontDisplay::Block),
            Some("swap") => Ok(FontDisplay::Swap),
            Some("fallback") => Ok(FontDisplay::Fallback),
            Some("optional") => Ok(FontDisplay::Optional),
            _ => Err(BrandError::structural(
                field,
                "expected one of `auto`, `block`, `swap`, `fallback`, `optional`",
            )),
        }
    }
}

impl std::fmt::Display for FontDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FontDisplay::Auto => "auto",
            FontDisplay::Block => "block",
            FontDisplay::Swap => "swap",
            FontDisplay::Fallback => "fallback",
            FontDisplay::Optional => "optional",
        };
        f.write_str(name)
    }
}

/// One local font file with its derived format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFile {
    pub path: FileLocation,
    /// `@font-face` format tag, derived from the path's extension.
    pub format: &'static str,
    pub weight: FontWeight,
    pub style: FontStyle,
}

impl FontFile {
    fn from_value(field: &str, value: &Value) -> Result<Self> {
        match value {
            // Bare path shorthand
            Value::String(path) => Self::from_parts(field, path, None, None),
            Value::Mapping(map) => {
                let mut path = None;
                let mut weight = None;
                let mut style = None;
                for (key, entry) in map {
                    match key.as_str() {
                        Some("path") => {
                            path = Some(entry.as_str().ok_or_else(|| {
                                BrandError::structural(
                                    format!("{field}.path"),
                                    "expected a string",
                                )
                            })?);
                        }
                        Some("weight") => {
                            weight = Some(FontWeight::parse(entry, true, true)?);
                        }
                        Some("style") => {
                            style = Some(FontStyle::parse(&format!("{field}.style"), entry)?);
                        }
                        // Always recomputed from the path on parse.
                        Some("format") => {}
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
                Self::from_parts(field, path, weight, style)
            }
            _ => Err(BrandError::structural(
                field,
                "expected a path or a mapping",
            )),
        }
    }

    fn from_parts(
        _field: &str,
        path: &str,
        weight: Option<FontWeight>,
        style: Option<FontStyle>,
    ) -> Result<Self> {
        let format = file_format(path)?;
        Ok(FontFile {
            path: FileLocation::new(path),
            format,
            weight: weight.unwrap_or(FontWeight::Auto),
            style: style.unwrap_or(FontStyle::Normal),
        })
    }

    fn to_value(&self) -> Value {
        let mut map = Mapping::new();
        map.insert(Value::from("path"), Value::from(self.path.source()));
        map.insert(Value::from("format"), Value::from(self.format));
        map.insert(Value::from("weight"), self.weight.to_value());
        map.insert(Value::from("style"), Value::from(self.style.to_string()));
        Value::Mapping(map)
    }

    /// One `@font-face` rule for this file.
    fn to_css(&self, family: &str) -> String {
        let mut rule = String::from("@font-face {\n");
        rule.push_str(&format!("  font-family: '{family}';\n"));
        match self.weight {
            FontWeight::Auto => {}
            FontWeight::Range(a, b) => rule.push_str(&format!("  font-weight: {a} {b};\n")),
            weight => rule.push_str(&format!("  font-weight: {weight};\n")),
        }
        rule.push_str(&format!("  font-style: {};\n", self.style));
        rule.push_str(&format!(
            "  src: url(\"{}\") format(\"{}\");\n",
            self.path.source(),
            self.format
        ));
        rule.push('}');
        rule
    }
}

/// Looks up the `@font-face` format for a font file path.
///
/// The mapping is fixed; an unrecognized extension is a validation failure.
pub fn file_format(path: &str) -> Result<&'static str> {
    let extension = std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    extension
        .as_deref()
        .and_then(|ext| FONT_FILE_FORMATS.get(ext).copied())
        .ok_or_else(|| {
            let mut expected: Vec<&str> = FONT_FILE_FORMATS.keys().copied().collect();
            expected.sort_unstable();
            BrandError::UnsupportedFontFileFormat {
                path: path.to_string(),
                expected: expected.join(", "),
            }
        })
}

/// A local-file font source: one family served from a set of files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFiles {
    pub family: String,
    pub files: Vec<FontFile>,
}

impl FontFiles {
    /// `@font-face` rules for all files of this family.
    pub fn to_css(&self) -> String {
        self.files
            .iter()
            .map(|file| file.to_css(&self.family))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A web-font provider source (Google Fonts or Bunny Fonts).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderFont {
    pub family: String,
    pub weight: WeightSet,
    pub style: Vec<FontStyle>,
    pub display: FontDisplay,
}

impl ProviderFont {
    fn has_style(&self, style: FontStyle) -> bool {
        self.style.contains(&style)
    }
}

/// A font source entry under `typography.fonts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrandFont {
    Files(FontFiles),
    Google(ProviderFont),
    Bunny(ProviderFont),
}

impl BrandFont {
    /// The font family name.
    pub fn family(&self) -> &str {
        match self {
            BrandFont::Files(font) => &font.family,
            BrandFont::Google(font) | BrandFont::Bunny(font) => &font.family,
        }
    }

    /// The source discriminator as serialized.
    pub fn source(&self) -> &'static str {
        match self {
            BrandFont::Files(_) => "file",
            BrandFont::Google(_) => "google",
            BrandFont::Bunny(_) => "bunny",
        }
    }

    /// Parses one font entry, discriminating on its `source` field.
    pub(crate) fn from_value(field: &str, value: &Value) -> Result<Self> {
        let map = value
            .as_mapping()
            .ok_or_else(|| BrandError::structural(field, "expected a mapping"))?;

        let source = value.get("source").and_then(Value::as_str);
        let has_files = value.get("files").is_some();

        match source {
            Some("google") => Ok(BrandFont::Google(parse_provider(field, map, true)?)),
            Some("bunny") => Ok(BrandFont::Bunny(parse_provider(field, map, false)?)),
            Some("file") => Ok(BrandFont::Files(parse_files(field, map)?)),
            Some(path) if looks_like_font_file(path) => {
                Ok(BrandFont::Files(parse_files(field, map)?))
            }
            Some(other) => Err(BrandError::UnsupportedFontSource {
                value: other.to_string(),
            }),
            None if has_files => Ok(BrandFont::Files(parse_files(field, map)?)),
            None => Err(BrandError::UnsupportedFontSource {
                value: "(unset)".to_string(),
            }),
        }
    }

    pub(crate) fn to_value(&self) -> Value {
        let mut map = Mapping::new();
        map.insert(Value::from("family"), Value::from(self.family()));
        map.insert(Value::from("source"), Value::from(self.source()));
        match self {
            BrandFont::Files(font) => {
                map.insert(
                    Value::from("files"),
                    Value::Sequence(font.files.iter().map(FontFile::to_value).collect()),
                );
            }
            BrandFont::Google(font) | BrandFont::Bunny(font) => {
                map.insert(Value::from("weight"), font.weight.to_value());
                map.insert(Value::from("style"), FontStyle::set_to_value(&font.style));
                map.insert(Value::from("display"), Value::from(font.display.to_string()));
            }
        }
        Value::Mapping(map)
    }

    /// The web-font import URL; `None` for local files.
    ///
    /// Output ordering is deterministic for a fixed normalized specification:
    /// styles iterate normal before italic, weights ascend (or render as the
    /// literal range), and the display strategy is always the final query
    /// parameter.
    pub fn to_import_url(&self) -> Option<String> {
        match self {
            BrandFont::Files(_) => None,
            BrandFont::Google(font) => Some(google_import_url(font)),
            BrandFont::Bunny(font) => Some(bunny_import_url(font)),
        }
    }

    /// CSS needed to use this font: `@font-face` rules for local files, an
    /// `@import` for web-font providers.
    pub fn to_css(&self) -> String {
        match self {
            BrandFont::Files(font) => font.to_css(),
            BrandFont::Google(_) | BrandFont::Bunny(_) => {
                // to_import_url is always Some for provider fonts
                match self.to_import_url() {
                    Some(url) => format!("@import url(\"{url}\");"),
                    None => String::new(),
                }
            }
        }
    }
}

impl VisitLocations for FontFile {
    fn visit_locations(&mut self, visit: &mut dyn FnMut(&mut FileLocation)) {
        self.path.visit_locations(visit);
    }
}

impl VisitLocations for BrandFont {
    fn visit_locations(&mut self, visit: &mut dyn FnMut(&mut FileLocation)) {
        if let BrandFont::Files(font) = self {
            font.files.visit_locations(visit);
        }
    }
}

fn looks_like_font_file(path: &str) -> bool {
    std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| FONT_FILE_FORMATS.contains_key(ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn require_family(field: &str, family: Option<&str>) -> Result<String> {
    family
        .map(str::to_string)
        .ok_or_else(|| BrandError::structural(field, "missing required key `family`"))
}

fn parse_files(field: &str, map: &Mapping) -> Result<FontFiles> {
    let mut family = None;
    let mut files: Option<Vec<FontFile>> = None;
    let mut source_path: Option<&str> = None;

    for (key, entry) in map {
        match key.as_str() {
            Some("family") => {
                family = Some(entry.as_str().ok_or_else(|| {
                    BrandError::structural(format!("{field}.family"), "expected a string")
                })?);
            }
            Some("source") => {
                let source = entry.as_str().unwrap_or_default();
                if source != "file" {
                    source_path = Some(source);
                }
            }
            Some("files") => {
                let seq = entry.as_sequence().ok_or_else(|| {
                    BrandError::structural(format!("{field}.files"), "expected a list")
                })?;
                let parsed = seq
                    .iter()
                    .enumerate()
                    .map(|(i, file)| {
                        FontFile::from_value(&format!("{field}.files[{i}]"), file)
                    })
                    .collect::<Result<Vec<_>>>()?;
                files = Some(parsed);
            }
            Some(other) => {
                return Err(BrandError::structural(
                    field,
                    format!("unknown key `{other}`"),
                ));
            }
            None => return Err(BrandError::structural(field, "keys must be strings")),
        }
    }

    let files = match (files, source_path) {
        (Some(_), Some(_)) => {
            return Err(BrandError::structural(
                field,
                "specify either a file `source` or `files`, not both",
            ));
        }
        (Some(files), None) => files,
        // A bare file path as `source` promotes to a single-file list.
        (None, Some(path)) => vec![FontFile::from_parts(field, path, None, None)?],
        (None, None) => Vec::new(),
    };

    Ok(FontFiles {
        family: require_family(field, family)?,
        files,
    })
}

fn parse_provider(field: &str, map: &Mapping, allow_range: bool) -> Result<ProviderFont> {
    let mut family = None;
    let mut weight = None;
    let mut style = None;
    let mut display = None;

    for (key, entry) in map {
        match key.as_str() {
            Some("source") => {}
            Some("family") => {
                family = Some(entry.as_str().ok_or_else(|| {
                    BrandError::structural(format!("{field}.family"), "expected a string")
                })?);
            }
            Some("weight") => weight = Some(WeightSet::parse(entry, allow_range)?),
            Some("style") => {
                style = Some(FontStyle::parse_set(&format!("{field}.style"), entry)?);
            }
            Some("display") => {
                display = Some(FontDisplay::parse(&format!("{field}.display"), entry)?);
            }
            Some(other) => {
                return Err(BrandError::structural(
                    field,
                    format!("unknown key `{other}`"),
                ));
            }
            None => return Err(BrandError::structural(field, "keys must be strings")),
        }
    }

    Ok(ProviderFont {
        family: require_family(field, family)?,
        weight: weight
            .unwrap_or_else(|| WeightSet::List(vec![FontWeight::Fixed(400), FontWeight::Fixed(700)])),
        style: style.unwrap_or_else(|| vec![FontStyle::Normal, FontStyle::Italic]),
        display: display.unwrap_or_default(),
    })
}

/// Percent-encodes a family name for a font API query, spaces as `+`.
fn encode_family(family: &str) -> String {
    let mut encoded = String::with_capacity(family.len());
    for byte in family.bytes() {
        match byte {
            b' ' => encoded.push('+'),
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' => {
                encoded.push(byte as char)
            }
            other => encoded.push_str(&format!("%{other:02X}")),
        }
    }
    encoded
}

/// Google Fonts CSS2 API: `ital,wght@0,W;0,W;1,W;1,W`, ital 0 before 1.
fn google_import_url(font: &ProviderFont) -> String {
    let weights = font.weight.url_items();
    let mut axis = Vec::new();
    for ital in [0u8, 1u8] {
        let wanted = if ital == 0 {
            FontStyle::Normal
        } else {
            FontStyle::Italic
        };
        if !font.has_style(wanted) {
            continue;
        }
        for weight in &weights {
            axis.push(format!("{ital},{weight}"));
        }
    }
    format!(
        "https://fonts.googleapis.com/css2?family={}:ital,wght@{}&display={}",
        encode_family(&font.family),
        axis.join(";"),
        font.display
    )
}

/// Bunny Fonts API: comma-joined `W` for normal and `Wi` for italic,
/// weight-major ascending.
fn bunny_import_url(font: &ProviderFont) -> String {
    let mut variants = Vec::new();
    for weight in font.weight.url_items() {
        if font.has_style(FontStyle::Normal) {
            variants.push(weight.clone());
        }
        if font.has_style(FontStyle::Italic) {
            variants.push(format!("{weight}i"));
        }
    }
    format!(
        "https://fonts.bunny.net/css?family={}:{}&display={}",
        encode_family(&font.family),
        variants.join(","),
        font.display
    )
}
