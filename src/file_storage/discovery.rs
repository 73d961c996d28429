//! Discovery session operations for file storage
//!
//! Sessions are stored in `{base}/.content-assembly/discovery/{id}.json`

use super::{get_app_dir, read_json, write_json};
use crate::discovery::DiscoverySession;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the discovery directory for a data directory
pub fn get_discovery_dir(base_path: &Path) -> PathBuf {
    get_app_dir(base_path).join("discovery")
}

/// Reject ids that could leave the discovery directory: empty ids, path
/// separators, NUL bytes and `..` sequences.
pub fn validate_session_id(session_id: &str) -> Result<()> {
    let invalid = session_id.trim().is_empty()
        || session_id.contains(['/', '\\', '\0'])
        || session_id.contains("..");
    if invalid {
        return Err(Error::InvalidSessionId(session_id.to_string()));
    }
    Ok(())
}

/// Get the file path for a session
pub fn get_session_file_path(base_path: &Path, session_id: &str) -> Result<PathBuf> {
    validate_session_id(session_id)?;
    Ok(get_discovery_dir(base_path).join(format!("{}.json", session_id)))
}

/// Check if a session file exists. Invalid ids never exist.
pub fn session_exists(base_path: &Path, session_id: &str) -> bool {
    get_session_file_path(base_path, session_id).map_or(false, |path| path.exists())
}

/// Save a session, creating or replacing its document
pub fn save_session(base_path: &Path, session: &DiscoverySession) -> Result<PathBuf> {
    let path = get_session_file_path(base_path, &session.id)?;
    write_json(&path, session)?;
    log::info!("Saved discovery session {} to {:?}", session.id, path);
    Ok(path)
}

/// Read a session by ID
pub fn read_session(base_path: &Path, session_id: &str) -> Result<DiscoverySession> {
    let path = get_session_file_path(base_path, session_id)?;
    if !path.exists() {
        return Err(Error::SessionNotFound(session_id.to_string()));
    }
    read_json(&path)
}

/// List all sessions, most recently updated first.
///
/// Files that fail to parse are skipped with a warning.
pub fn list_sessions(base_path: &Path) -> Result<Vec<DiscoverySession>> {
    let dir = get_discovery_dir(base_path);
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(&dir).map_err(|e| Error::io(&dir, e))?;

    let mut sessions = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().map_or(false, |ext| ext == "json") {
            match read_json::<DiscoverySession>(&path) {
                Ok(session) => sessions.push(session),
                Err(e) => {
                    log::warn!("Skipping unreadable discovery session: {}", e);
                }
            }
        }
    }

    sessions.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    Ok(sessions)
}

/// Delete a session document
pub fn delete_session(base_path: &Path, session_id: &str) -> Result<()> {
    let path = get_session_file_path(base_path, session_id)?;
    if !path.exists() {
        return Err(Error::SessionNotFound(session_id.to_string()));
    }

    fs::remove_file(&path).map_err(|e| Error::io(&path, e))?;
    log::info!("Deleted discovery session {}", session_id);
    Ok(())
}
