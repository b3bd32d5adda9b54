//! Suffix-based artifact discovery
//!
//! The training pipeline exports artifacts with well-known filename suffixes
//! rather than fixed names. Discovery sorts the directory listing so the
//! selection is deterministic across platforms; filesystem enumeration order
//! is not.

use crate::error::{ArtifactError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Filename suffix of the exported model artifact
pub const MODEL_SUFFIX: &str = "_model.json";

/// Filename suffix of the exported scaler artifact
pub const SCALER_SUFFIX: &str = "_scaler.json";

/// Artifact paths discovered in a directory
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedArtifacts {
    /// Path of the model artifact
    pub model_path: PathBuf,
    /// Human-readable model name derived from the filename
    pub model_name: String,
    /// Path of the scaler artifact, when one was exported
    pub scaler_path: Option<PathBuf>,
}

/// Discover artifacts in `dir`
///
/// Filenames are sorted lexicographically and the first match per suffix
/// wins. A missing model artifact is a fatal [`ArtifactError::ModelNotFound`];
/// a missing scaler artifact means the raw feature matrix is used unscaled.
///
/// # Example
///
/// ```rust,no_run
/// use artifact::locate;
/// use std::path::Path;
///
/// let located = locate(Path::new(".")).unwrap();
/// println!("serving model '{}'", located.model_name);
/// ```
pub fn locate(dir: &Path) -> Result<LocatedArtifacts> {
    let mut names: Vec<String> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();

    let model_file = names
        .iter()
        .find(|name| name.ends_with(MODEL_SUFFIX))
        .ok_or_else(|| ArtifactError::ModelNotFound {
            dir: dir.to_path_buf(),
        })?;
    let scaler_file = names.iter().find(|name| name.ends_with(SCALER_SUFFIX));

    Ok(LocatedArtifacts {
        model_path: dir.join(model_file),
        model_name: display_name(model_file),
        scaler_path: scaler_file.map(|name| dir.join(name)),
    })
}

/// Derive a display name from the model filename
///
/// Strips the suffix and replaces separator characters with spaces, so
/// `gradient_boost_model.json` becomes `gradient boost`.
fn display_name(file_name: &str) -> String {
    file_name
        .strip_suffix(MODEL_SUFFIX)
        .unwrap_or(file_name)
        .replace(['_', '-'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn test_locate_model_and_scaler() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "monthly_model.json");
        touch(dir.path(), "monthly_scaler.json");

        let located = locate(dir.path()).unwrap();

        assert_eq!(located.model_path, dir.path().join("monthly_model.json"));
        assert_eq!(
            located.scaler_path,
            Some(dir.path().join("monthly_scaler.json"))
        );
        assert_eq!(located.model_name, "monthly");
    }

    #[test]
    fn test_locate_without_scaler() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "monthly_model.json");

        let located = locate(dir.path()).unwrap();

        assert!(located.scaler_path.is_none());
    }

    #[test]
    fn test_locate_no_model_fails() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "monthly_scaler.json");

        let result = locate(dir.path());

        assert!(matches!(
            result,
            Err(ArtifactError::ModelNotFound { .. })
        ));
    }

    #[test]
    fn test_locate_empty_directory_fails() {
        let dir = tempdir().unwrap();
        assert!(locate(dir.path()).is_err());
    }

    #[test]
    fn test_locate_multiple_matches_is_deterministic() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "zeta_model.json");
        touch(dir.path(), "alpha_model.json");
        touch(dir.path(), "mid_model.json");

        let located = locate(dir.path()).unwrap();

        // Lexicographically smallest wins regardless of creation order.
        assert_eq!(located.model_path, dir.path().join("alpha_model.json"));
        assert_eq!(located.model_name, "alpha");
    }

    #[test]
    fn test_locate_ignores_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("archive_model.json")).unwrap();
        touch(dir.path(), "real_model.json");

        let located = locate(dir.path()).unwrap();

        assert_eq!(located.model_path, dir.path().join("real_model.json"));
    }

    #[test]
    fn test_display_name_replaces_separators() {
        assert_eq!(display_name("gradient_boost_model.json"), "gradient boost");
        assert_eq!(display_name("ridge-cv_model.json"), "ridge cv");
    }

    #[test]
    fn test_locate_missing_directory_is_io_error() {
        let result = locate(Path::new("/nonexistent/for/sure"));
        assert!(matches!(result, Err(ArtifactError::Io(_))));
    }
}
