use crate::types::candidate::Candidate;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct Snapshot {
    pub sha256: String,
    pub candidates: Vec<Candidate>,
}

/// A snapshot file holds either a bare array or `{"candidates": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotFile {
    List(Vec<Candidate>),
    Wrapped { candidates: Vec<Candidate> },
}

impl SnapshotFile {
    fn into_candidates(self) -> Vec<Candidate> {
        match self {
            Self::List(candidates) | Self::Wrapped { candidates } => candidates,
        }
    }
}

pub fn list_snapshot_files(root: &Path) -> Vec<PathBuf> {
    let mut files = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| is_snapshot_file(root, path))
        .collect::<Vec<_>>();
    files.sort();
    files
}

// skips dot-directories such as the ranking export dir
fn is_snapshot_file(root: &Path, path: &Path) -> bool {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let hidden = path
        .strip_prefix(root)
        .unwrap_or(path)
        .components()
        .any(|component| component.as_os_str().to_string_lossy().starts_with('.'));
    is_json && !hidden
}

/// Reads and parses one snapshot. The error string is reported as a finding
/// rather than aborting the audit.
pub fn read_snapshot(path: &Path) -> Result<Snapshot, String> {
    let bytes = std::fs::read(path).map_err(|e| e.to_string())?;
    let sha256 = sha256_hex(&bytes);
    let parsed: SnapshotFile = serde_json::from_slice(&bytes).map_err(|e| e.to_string())?;
    Ok(Snapshot {
        sha256,
        candidates: parsed.into_candidates(),
    })
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}
