use anyhow::{Context, Result, anyhow};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::AppError;
use crate::substitution::split_translated_lines;

// @module: File and path utilities

// @const: Suffix appended to the stem of a default duplicate
const DUPLICATE_SUFFIX: &str = "-duplicated";

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Directory that holds the running executable
    pub fn program_dir() -> Result<PathBuf> {
        let exe = std::env::current_exe().context("Failed to locate the running program")?;
        exe.parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| anyhow!("Program path has no parent directory: {:?}", exe))
    }

    /// Resolve a file name against a base directory. Absolute names are kept.
    pub fn resolve_path<P: AsRef<Path>>(base_dir: &Path, name: P) -> PathBuf {
        base_dir.join(name)
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        let path = path.as_ref();
        if !Self::file_exists(path) {
            return Err(AppError::InputNotFound(path.to_path_buf()).into());
        }

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))
    }

    /// Read a file as lines that keep their terminators
    pub fn read_lines<P: AsRef<Path>>(path: P, normalize_line_endings: bool) -> Result<Vec<String>> {
        let content = Self::read_to_string(path)?;
        Ok(split_translated_lines(&content, normalize_line_endings))
    }

    /// Write a string to a file, replacing any previous content
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Copy a file from one location to another, ensuring the target directory exists
    pub fn copy_file<P1: AsRef<Path>, P2: AsRef<Path>>(from: P1, to: P2) -> Result<()> {
        let from = from.as_ref();
        let to = to.as_ref();

        if !from.exists() {
            return Err(AppError::InputNotFound(from.to_path_buf()).into());
        }

        if Self::same_file(from, to) {
            return Err(anyhow!("Paths cannot be the same: {:?}", from));
        }

        if let Some(parent) = to.parent() {
            Self::ensure_dir(parent)?;
        }

        fs::copy(from, to).with_context(|| format!("Failed to copy {:?} to {:?}", from, to))?;

        Ok(())
    }

    /// Where a duplicate goes when no name or path is given
    pub fn default_duplicate_path(original: &Path, base_dir: &Path) -> PathBuf {
        let stem = original.file_stem().unwrap_or_default().to_string_lossy();
        base_dir.join(format!(
            "{}{}{}",
            stem,
            DUPLICATE_SUFFIX,
            Self::dotted_extension(original)
        ))
    }

    /// Duplicate a file, e.g. to keep a backup.
    ///
    /// `path` takes precedence over `name`. A `name` places `<name><ext>` in
    /// `base_dir`. With neither, the copy is `<stem>-duplicated<ext>` in
    /// `base_dir`. When the copy fails, it is retried once at that default.
    pub fn duplicate_file<P: AsRef<Path>>(
        original: P,
        base_dir: &Path,
        name: Option<&str>,
        path: Option<&Path>,
    ) -> Result<PathBuf> {
        let original = original.as_ref();
        let default_path = Self::default_duplicate_path(original, base_dir);

        let target = match (path, name) {
            (Some(path), _) => path.to_path_buf(),
            (None, Some(name)) => {
                base_dir.join(format!("{}{}", name, Self::dotted_extension(original)))
            }
            (None, None) => default_path.clone(),
        };

        match Self::copy_file(original, &target) {
            Ok(()) => {
                debug!("Duplicated {:?} to {:?}", original, target);
                Ok(target)
            }
            Err(e) if target != default_path && Self::file_exists(original) => {
                warn!("{}. Duplicating to {:?} instead.", e, default_path);
                Self::copy_file(original, &default_path)?;
                Ok(default_path)
            }
            Err(e) => Err(e),
        }
    }

    /// Rename a file's stem and/or extension in place, returning the new path
    pub fn rename_file<P: AsRef<Path>>(
        path: P,
        new_name: Option<&str>,
        new_extension: Option<&str>,
        duplicate_first: bool,
        base_dir: &Path,
    ) -> Result<PathBuf> {
        let path = path.as_ref();
        if !Self::file_exists(path) {
            return Err(AppError::InputNotFound(path.to_path_buf()).into());
        }

        let stem = match new_name {
            Some(name) => name.to_string(),
            None => path.file_stem().unwrap_or_default().to_string_lossy().to_string(),
        };
        let extension = match new_extension {
            Some(ext) => Some(ext.trim_start_matches('.').to_string()),
            None => path.extension().map(|ext| ext.to_string_lossy().to_string()),
        };
        let file_name = match extension {
            Some(ext) if !ext.is_empty() => format!("{}.{}", stem, ext),
            _ => stem,
        };
        let target = path.with_file_name(file_name);

        if duplicate_first {
            Self::duplicate_file(path, base_dir, None, None)?;
        }

        fs::rename(path, &target)
            .with_context(|| format!("Failed to rename {:?} to {:?}", path, target))?;

        Ok(target)
    }

    fn dotted_extension(path: &Path) -> String {
        path.extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default()
    }

    fn same_file(a: &Path, b: &Path) -> bool {
        match (fs::canonicalize(a), fs::canonicalize(b)) {
            (Ok(a), Ok(b)) => a == b,
            _ => a == b,
        }
    }
}
