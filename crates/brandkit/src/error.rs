//! Error types for brand document parsing and resolution.
//!
//! All resolution errors are raised eagerly, in the fixed order described in
//! [`Brand`](crate::Brand): structural validation first, then color graph
//! resolution, then typography cascade and color binding, then path root
//! binding. The first failure aborts the whole resolution attempt; nothing is
//! retried or silently defaulted.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while parsing or resolving a brand document.
#[derive(Debug, Error)]
pub enum BrandError {
    /// A block or field had the wrong shape, type, or an unknown key.
    #[error("invalid `{field}`: {message}")]
    Structural { field: String, message: String },

    /// A color value referenced a name that is neither a literal color nor a
    /// defined palette or theme color.
    #[error("color `{name}` referenced from `{field}` is not defined")]
    UndefinedColorReference { field: String, name: String },

    /// Following color references revisited a name within one chain.
    #[error("cyclic color reference: {}", .chain.join(" -> "))]
    CyclicColorReference { chain: Vec<String> },

    /// A typography `color`/`background-color` value named a color that does
    /// not resolve.
    #[error(
        "`typography.{context}.{field}` referred to color `{value}` which is not defined"
    )]
    UnresolvedTypographyColorReference {
        context: String,
        field: String,
        value: String,
    },

    /// A font weight was not `normal`, `bold`, `auto`, a named weight, a
    /// multiple of 100 between 100 and 900, or a valid `A..B` range.
    #[error("invalid font weight `{value}`: {message}")]
    InvalidFontWeight { value: String, message: String },

    /// A local font file did not have a recognized font file extension.
    #[error("unsupported font file `{path}`: expected one of {expected}")]
    UnsupportedFontFileFormat { path: String, expected: String },

    /// A font entry's `source` was not `google`, `bunny`, or a font file.
    #[error(
        "unsupported font source `{value}`: must be `google`, `bunny`, or a font file path"
    )]
    UnsupportedFontSource { value: String },

    /// `absolute()` was called on a file location before any root directory
    /// was bound.
    #[error(
        "cannot resolve `{}` to an absolute path: the brand document location is not set",
        .path.display()
    )]
    RootNotSet { path: PathBuf },

    /// No brand document was found searching upward from the starting path.
    #[error("no `_brand.yml` found within `{}` or any parent directory", .start.display())]
    DocumentNotFound { start: PathBuf },

    /// YAML decode or encode failure.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// I/O failure reading the brand document.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl BrandError {
    /// Shorthand for a [`BrandError::Structural`] at a given field path.
    pub(crate) fn structural(field: impl Into<String>, message: impl Into<String>) -> Self {
        BrandError::Structural {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type for brand operations.
pub type Result<T> = std::result::Result<T, BrandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyclic_reference_display_shows_chain() {
        let err = BrandError::CyclicColorReference {
            chain: vec!["info".into(), "primary".into(), "info".into()],
        };
        assert!(err.to_string().contains("info -> primary -> info"));
    }

    #[test]
    fn test_typography_reference_display_names_context_and_field() {
        let err = BrandError::UnresolvedTypographyColorReference {
            context: "headings".into(),
            field: "color".into(),
            value: "primry".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("typography.headings.color"));
        assert!(msg.contains("primry"));
    }
}
