//! File-based storage for discovery sessions
//!
//! Session documents live next to the user's content project so they can be
//! moved or shared along with it.
//!
//! ## Storage Locations
//!
//! Project-local storage (`.content-assembly/` in the data directory):
//! - `discovery/` - Discovery sessions, one JSON document each
//! - `config.toml` - Project configuration (see `config`)

pub mod discovery;

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the .content-assembly directory for a data directory
pub fn get_app_dir(base_path: &Path) -> PathBuf {
    base_path.join(".content-assembly")
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| Error::io(path, e))?;
    }
    Ok(())
}

/// Write data to a file atomically (temp file + rename)
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("tmp");

    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    fs::write(&temp_path, content).map_err(|e| Error::io(&temp_path, e))?;
    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))?;

    Ok(())
}

/// Read a JSON file and deserialize it
pub fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| Error::json(path, e))
}

/// Write data as pretty-printed JSON atomically
pub fn write_json<T: serde::Serialize>(path: &Path, data: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(data).map_err(|e| Error::json(path, e))?;
    atomic_write(path, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_app_dir() {
        let dir = get_app_dir(Path::new("/home/user/videos"));
        assert_eq!(dir, PathBuf::from("/home/user/videos/.content-assembly"));
    }

    #[test]
    fn test_write_and_read_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("doc.json");

        write_json(&path, &vec!["hook", "body"]).unwrap();
        let read: Vec<String> = read_json(&path).unwrap();

        assert_eq!(read, vec!["hook", "body"]);
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_read_json_reports_path_on_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_json::<Vec<String>>(&path).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
