use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::domain::CandidateProfile;

/// Raised when a profile document cannot be read or parsed.
#[derive(Debug, thiserror::Error)]
pub enum ProfileLoadError {
    #[error("failed to read profile document: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid profile JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Accepts a single profile object or an array of profiles.
pub fn load_profiles<R: Read>(mut reader: R) -> Result<Vec<CandidateProfile>, ProfileLoadError> {
    let mut document = Vec::new();
    reader.read_to_end(&mut document)?;

    let is_array = document
        .iter()
        .find(|byte| !byte.is_ascii_whitespace())
        .is_some_and(|byte| *byte == b'[');

    if is_array {
        Ok(serde_json::from_slice(&document)?)
    } else {
        let profile: CandidateProfile = serde_json::from_slice(&document)?;
        Ok(vec![profile])
    }
}

pub fn load_profiles_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<CandidateProfile>, ProfileLoadError> {
    let file = File::open(path)?;
    load_profiles(BufReader::new(file))
}
