//! Dual-representation file locations.
//!
//! Brand documents refer to supporting files (logos, font files) with paths
//! relative to the document itself. Consumers, however, need absolute
//! filesystem locations. [`FileLocation`] keeps both views:
//!
//! - [`relative()`](FileLocation::relative) always returns the path exactly as
//!   authored, and is the only form that serializes back into the document.
//! - [`absolute()`](FileLocation::absolute) joins the stored relative path
//!   onto a root directory bound after parse, once the document's own location
//!   is known.
//!
//! The root is late-bound: a location is created unresolved at parse time and
//! [`set_root`](FileLocation::set_root) is called (possibly more than once,
//! last write wins) whenever the owning document's path is set or reassigned.
//! The absolute form is recomputed on every access from the current root, so
//! a root change is always observed.
//!
//! Sources that look like URLs (`http://` or `https://`) are remote
//! locations: their absolute form is the URL itself and no root applies.

use std::path::{Component, Path, PathBuf};

use crate::error::{BrandError, Result};

/// A file location authored relative to the brand document.
///
/// # Example
///
/// ```rust
/// use brandkit::FileLocation;
///
/// let mut logo = FileLocation::new("images/logo.png");
/// assert_eq!(logo.relative(), std::path::Path::new("images/logo.png"));
///
/// // absolute() fails until a root is bound
/// assert!(logo.absolute().is_err());
///
/// logo.set_root("/srv/brand".as_ref());
/// assert_eq!(
///     logo.absolute().unwrap(),
///     std::path::PathBuf::from("/srv/brand/images/logo.png")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileLocation {
    /// A path relative to the brand document, with an optional late-bound
    /// root directory.
    Local {
        relative: PathBuf,
        root: Option<PathBuf>,
    },
    /// A remote `http(s)` URL, kept verbatim.
    Url(String),
}

impl FileLocation {
    /// Creates a file location from an authored source string.
    ///
    /// `http://` and `https://` sources become [`FileLocation::Url`];
    /// everything else is a local, document-relative path.
    pub fn new(source: impl AsRef<str>) -> Self {
        let source = source.as_ref();
        if source.starts_with("http://") || source.starts_with("https://") {
            FileLocation::Url(source.to_string())
        } else {
            FileLocation::Local {
                relative: PathBuf::from(source),
                root: None,
            }
        }
    }

    /// Returns true for remote URL locations.
    pub fn is_url(&self) -> bool {
        matches!(self, FileLocation::Url(_))
    }

    /// Returns the location exactly as authored.
    ///
    /// This value is unaffected by any number of [`set_root`](Self::set_root)
    /// calls and is the form used when serializing the brand document.
    pub fn relative(&self) -> &Path {
        match self {
            FileLocation::Local { relative, .. } => relative,
            FileLocation::Url(url) => Path::new(url),
        }
    }

    /// Binds or rebinds the root directory used by [`absolute`](Self::absolute).
    ///
    /// Idempotent and last-write-wins; called whenever the owning document's
    /// location is set or reassigned. No-op for URL locations.
    pub fn set_root(&mut self, dir: &Path) {
        if let FileLocation::Local { root, .. } = self {
            *root = Some(dir.to_path_buf());
        }
    }

    /// Returns the currently bound root directory, if any.
    pub fn root(&self) -> Option<&Path> {
        match self {
            FileLocation::Local { root, .. } => root.as_deref(),
            FileLocation::Url(_) => None,
        }
    }

    /// Computes the absolute form of this location.
    ///
    /// For local paths this is the bound root joined with the relative path,
    /// with `.` and `..` segments collapsed. Symbolic links are resolved at
    /// the moment of the call when the target exists; the result is never
    /// cached across a root change. For URLs the source is returned verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`BrandError::RootNotSet`] for a local path whose root has
    /// never been bound.
    pub fn absolute(&self) -> Result<PathBuf> {
        match self {
            FileLocation::Url(url) => Ok(PathBuf::from(url)),
            FileLocation::Local { relative, root } => {
                let root = root.as_ref().ok_or_else(|| BrandError::RootNotSet {
                    path: relative.clone(),
                })?;
                let joined = normalize(&root.join(relative));
                // Resolve symlinks only when the target actually exists;
                // missing files still get a well-formed absolute path.
                match std::fs::canonicalize(&joined) {
                    Ok(resolved) => Ok(resolved),
                    Err(_) => Ok(joined),
                }
            }
        }
    }

    /// Liveness check against [`absolute`](Self::absolute).
    ///
    /// Never fails: an unbound root or a remote URL reports `false`.
    pub fn exists(&self) -> bool {
        match self {
            FileLocation::Url(_) => false,
            FileLocation::Local { .. } => self
                .absolute()
                .map(|path| path.exists())
                .unwrap_or(false),
        }
    }

    /// The authored source as a string, for serialization.
    pub fn source(&self) -> String {
        match self {
            FileLocation::Local { relative, .. } => relative.to_string_lossy().into_owned(),
            FileLocation::Url(url) => url.clone(),
        }
    }
}

impl std::fmt::Display for FileLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source())
    }
}

/// Lexically collapses `.` and `..` components without touching the
/// filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(Component::ParentDir);
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Visitor over every [`FileLocation`] reachable from a model node.
///
/// The brand document binds its directory as the root of every reachable
/// location in one generic walk rather than plumbing the root through each
/// field individually. Model types that own locations (directly or through
/// children) implement this trait; containers get blanket impls.
pub trait VisitLocations {
    /// Calls `visit` for every [`FileLocation`] owned by `self`.
    fn visit_locations(&mut self, visit: &mut dyn FnMut(&mut FileLocation));
}

impl VisitLocations for FileLocation {
    fn visit_locations(&mut self, visit: &mut dyn FnMut(&mut FileLocation)) {
        visit(self);
    }
}

impl<T: VisitLocations> VisitLocations for Option<T> {
    fn visit_locations(&mut self, visit: &mut dyn FnMut(&mut FileLocation)) {
        if let Some(inner) = self {
            inner.visit_locations(visit);
        }
    }
}

impl<T: VisitLocations> VisitLocations for Vec<T> {
    fn visit_locations(&mut self, visit: &mut dyn FnMut(&mut FileLocation)) {
        for item in self {
            item.visit_locations(visit);
        }
    }
}
