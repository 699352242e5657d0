use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::utils::error::{BoxResult, FolioError};

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> BoxResult<()> {
    let path = path.as_ref();
    fs::create_dir_all(path).map_err(|e| FolioError::write(path, e))?;
    Ok(())
}

/// Remove a directory and all its contents
pub fn remove_directory<P: AsRef<Path>>(path: P) -> BoxResult<()> {
    if path.as_ref().exists() && path.as_ref().is_dir() {
        fs::remove_dir_all(path.as_ref())?;
    }
    Ok(())
}

/// Write a string to a file, overwriting it and creating parent directories.
/// Failures name the target path.
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_directory(parent)?;
        }
    }

    let mut file = fs::File::create(path).map_err(|e| FolioError::write(path, e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| FolioError::write(path, e))?;
    Ok(())
}

/// Replace a file's contents in one step: write a sibling temp file, then rename it over the target
pub fn write_file_atomic<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    let path = path.as_ref();
    let tmp = temp_sibling(path);

    write_file(&tmp, contents)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(FolioError::write(path, e).into());
    }
    Ok(())
}

/// Remove a file if it exists, returning whether anything was deleted
pub fn remove_file_if_exists<P: AsRef<Path>>(path: P) -> BoxResult<bool> {
    let path = path.as_ref();
    if !path.is_file() {
        return Ok(false);
    }
    fs::remove_file(path).map_err(|e| FolioError::write(path, e))?;
    Ok(true)
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
