//! Locating a brand document on disk.
//!
//! Projects keep their brand document at the project root or in a dedicated
//! subdirectory. Starting from a file or directory, the locator walks up the
//! directory tree checking each level for a recognized candidate, nearest
//! level first.

use std::path::{Path, PathBuf};

use crate::error::{BrandError, Result};

/// Candidate locations checked at each directory level, in priority order.
const CANDIDATES: &[&str] = &[
    "_brand.yml",
    "_brand.yaml",
    "brand/_brand.yml",
    "brand/_brand.yaml",
    "_brand/_brand.yml",
    "_brand/_brand.yaml",
];

/// Searches upward from `start` for a brand document.
///
/// `start` may be a directory or a file; a file's parent directory is the
/// first level searched. Every candidate at a level is tried before moving to
/// the parent, so a project-root `_brand.yml` beats one in an ancestor.
///
/// # Errors
///
/// Returns [`BrandError::DocumentNotFound`] when no candidate exists at any
/// level up to the filesystem root.
pub fn find_brand_yml(start: &Path) -> Result<PathBuf> {
    let mut dir = if start.is_dir() {
        Some(start)
    } else {
        start.parent()
    };

    while let Some(level) = dir {
        for candidate in CANDIDATES {
            let path = level.join(candidate);
            if path.is_file() {
                return Ok(path);
            }
        }
        dir = level.parent();
    }

    Err(BrandError::DocumentNotFound {
        start: start.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_finds_document_in_start_dir() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("_brand.yml");
        fs::write(&doc, "meta:\n  name: Test\n").unwrap();

        assert_eq!(find_brand_yml(dir.path()).unwrap(), doc);
    }

    #[test]
    fn test_searches_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("_brand.yml");
        fs::write(&doc, "meta:\n  name: Test\n").unwrap();

        let nested = dir.path().join("docs/guide");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_brand_yml(&nested).unwrap(), doc);
    }

    #[test]
    fn test_file_start_searches_its_directory() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("_brand.yml");
        fs::write(&doc, "meta:\n  name: Test\n").unwrap();
        let report = dir.path().join("report.qmd");
        fs::write(&report, "").unwrap();

        assert_eq!(find_brand_yml(&report).unwrap(), doc);
    }

    #[test]
    fn test_brand_subdirectory_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let brand_dir = dir.path().join("brand");
        fs::create_dir(&brand_dir).unwrap();
        let doc = brand_dir.join("_brand.yml");
        fs::write(&doc, "meta:\n  name: Test\n").unwrap();

        assert_eq!(find_brand_yml(dir.path()).unwrap(), doc);
    }

    #[test]
    fn test_nearer_level_wins() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_brand.yml"), "").unwrap();
        let nested = dir.path().join("sub");
        fs::create_dir(&nested).unwrap();
        let inner = nested.join("_brand.yaml");
        fs::write(&inner, "").unwrap();

        assert_eq!(find_brand_yml(&nested).unwrap(), inner);
    }

    #[test]
    fn test_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = find_brand_yml(dir.path()).unwrap_err();
        assert!(matches!(err, BrandError::DocumentNotFound { .. }));
    }
}
